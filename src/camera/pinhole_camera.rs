use serde::{Deserialize, Serialize};

use super::CameraParametersTrait;

/// 针孔相机内参，只对其对应的分辨率 (width, height) 有效
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PinholeIntrinsics {
    // intrinsic
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
    // size
    pub width: u32,
    pub height: u32,
}

impl CameraParametersTrait for PinholeIntrinsics {
    const CAMERA_TYPE: &'static str = "PINHOLE";
}

impl PinholeIntrinsics {
    pub const fn new(fx: f64, fy: f64, cx: f64, cy: f64, width: u32, height: u32) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            width,
            height,
        }
    }

    /// 中心裁剪偏移 (off_x, off_y)，可以是小数
    pub fn crop_offset(&self, stream_width: u32, stream_height: u32) -> (f64, f64) {
        (
            (self.width as f64 - stream_width as f64) / 2.0,
            (self.height as f64 - stream_height as f64) / 2.0,
        )
    }

    /// 中心裁剪到 stream_width x stream_height 后的内参
    ///
    /// 只裁剪不缩放：焦距不变，主点减去裁剪偏移。
    /// 输出分辨率不能大于原始分辨率。
    pub fn center_crop(&self, stream_width: u32, stream_height: u32) -> Self {
        debug_assert!(
            stream_width <= self.width && stream_height <= self.height,
            "stream {}x{} exceeds native {}x{}",
            stream_width,
            stream_height,
            self.width,
            self.height
        );
        let (off_x, off_y) = self.crop_offset(stream_width, stream_height);
        Self {
            fx: self.fx,
            fy: self.fy,
            cx: self.cx - off_x,
            cy: self.cy - off_y,
            width: stream_width,
            height: stream_height,
        }
    }
}
