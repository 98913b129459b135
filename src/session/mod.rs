//! 相机会话
//! 保存一次相机预览期间平台回调上报的状态：选中的相机、运行时内参、畸变、位姿和图像帧。
//!
//! `start` 建立会话，`stop` 清理运行时状态。标定计算本身不依赖会话。

mod characteristics;
mod frame;

pub use characteristics::CharacteristicsDump;
pub use frame::{CameraFrame, FrameBuffer};

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::calibration::{get_calibration, select_calibration, CalibrationResult, LEFT_CAMERA};
use crate::camera::{remap_distortion, CameraSide, DistortionCoefficients, PinholeIntrinsics};
use crate::config::UNKNOWN_CAMERA_ID;
use crate::global_cast::{Quaterniond, Rotator, Vector3d};
use crate::global_types::{DeviceRigidPose, EngineRigidPose};
use crate::pose::convert_pose;

/// 平台上报的内参
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuntimeIntrinsics {
    pub intrinsics: PinholeIntrinsics,
    pub skew: f64,
}

/// 平台选中的相机
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCamera {
    pub id: String,
    pub side: CameraSide,
}

#[derive(Debug, Default)]
pub struct CameraSession {
    active: bool,
    /// 下一次 start_preferred 使用的相机
    preferred: CameraSide,
    /// start 时请求的相机
    requested: Option<CameraSide>,
    selected: Option<SelectedCamera>,

    intrinsics: Option<RuntimeIntrinsics>,
    distortion: Vec<f64>,
    original_resolution: Option<(u32, u32)>,
    pose: Option<EngineRigidPose>,
    characteristics: Option<CharacteristicsDump>,

    frames: FrameBuffer,
}

impl CameraSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_preferred_camera(&mut self, side: CameraSide) {
        self.preferred = side;
        log::info!("camera preference set to {}", side.label());
    }

    pub fn preferred_camera(&self) -> CameraSide {
        self.preferred
    }

    pub fn start(&mut self, side: CameraSide) -> anyhow::Result<()> {
        if self.active {
            log::warn!("camera session already active");
            return Ok(());
        }
        self.active = true;
        self.requested = Some(side);
        let _ = self.frames.clear();
        log::info!("camera session started, requested {} camera", side.label());
        Ok(())
    }

    pub fn start_preferred(&mut self) -> anyhow::Result<()> {
        self.start(self.preferred)
    }

    pub fn stop(&mut self) {
        let dropped = self.frames.dropped();
        let discarded = self.frames.clear();
        if self.active {
            log::info!(
                "camera session stopped, {} frames dropped, {} buffered frames discarded",
                dropped,
                discarded
            );
        }
        self.active = false;
        self.requested = None;
        self.selected = None;
        self.pose = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// start 时请求的相机
    pub fn requested_camera(&self) -> Option<CameraSide> {
        self.requested
    }

    /* 平台回调 */

    pub fn on_camera_selected(&mut self, id: Option<&str>, is_left: bool) {
        let id = id.unwrap_or(UNKNOWN_CAMERA_ID).to_string();
        let side = CameraSide::from_is_left(is_left);
        log::info!("camera selected: id={}, isLeft={}", id, is_left);
        if let Some(requested) = self.requested {
            if requested != side {
                log::warn!(
                    "requested {} camera but platform selected {}",
                    requested.label(),
                    side.label()
                );
            }
        }
        self.selected = Some(SelectedCamera { id, side });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_intrinsics(
        &mut self,
        fx: f64,
        fy: f64,
        cx: f64,
        cy: f64,
        skew: f64,
        width: u32,
        height: u32,
    ) {
        log::info!(
            "intrinsics received: fx={:.2} fy={:.2} cx={:.2} cy={:.2} skew={:.3} {}x{}",
            fx,
            fy,
            cx,
            cy,
            skew,
            width,
            height
        );
        self.intrinsics = Some(RuntimeIntrinsics {
            intrinsics: PinholeIntrinsics::new(fx, fy, cx, cy, width, height),
            skew,
        });
    }

    pub fn on_distortion(&mut self, coeffs: Option<&[f64]>) {
        match coeffs {
            Some(coeffs) if !coeffs.is_empty() => {
                let head: Vec<String> = coeffs.iter().take(5).map(|c| format!("{:.4}", c)).collect();
                log::info!(
                    "lens distortion received: {} coeffs [{}]",
                    coeffs.len(),
                    head.join(" ")
                );
                self.distortion = coeffs.to_vec();
            }
            _ => {
                log::warn!("no lens distortion data available");
                self.distortion.clear();
            }
        }
    }

    pub fn on_original_resolution(&mut self, width: u32, height: u32) {
        log::info!("original resolution received: {}x{}", width, height);
        self.original_resolution = Some((width, height));
    }

    /// 平移单位米，四元数 (x, y, z, w)，设备坐标系
    #[allow(clippy::too_many_arguments)]
    pub fn on_camera_pose(&mut self, tx: f64, ty: f64, tz: f64, qx: f64, qy: f64, qz: f64, qw: f64) {
        let pose = convert_pose(&DeviceRigidPose::new([tx, ty, tz], [qx, qy, qz, qw]));
        log::info!(
            "camera pose received: translation(cm)={}, rotation(xyzw)={}",
            Vector3d(pose.translation),
            Quaterniond(pose.rotation)
        );
        self.pose = Some(pose);
    }

    pub fn on_characteristics_dump(&mut self, json: impl Into<String>, path: Option<PathBuf>) {
        let dump = CharacteristicsDump::new(json, path);
        log::info!("camera characteristics dump received ({} chars)", dump.json.len());
        self.characteristics = Some(dump);
    }

    /// 会话未激活时丢弃，返回 false
    pub fn on_frame(&mut self, frame: CameraFrame) -> bool {
        if !self.active {
            log::debug!("session inactive, dropping {}x{} frame", frame.width, frame.height);
            return false;
        }
        self.frames.push_back(frame);
        true
    }

    pub fn next_frame(&mut self) -> Option<CameraFrame> {
        self.frames.pop_front()
    }

    /* 查询 */

    pub fn selected_camera(&self) -> Option<&SelectedCamera> {
        self.selected.as_ref()
    }

    pub fn selected_camera_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.id.as_str())
    }

    /// 未选中相机时为 true
    pub fn is_left_camera(&self) -> bool {
        self.selected.as_ref().map_or(true, |s| s.side.is_left())
    }

    pub fn runtime_intrinsics(&self) -> Option<&RuntimeIntrinsics> {
        self.intrinsics.as_ref()
    }

    pub fn lens_distortion(&self) -> &[f64] {
        &self.distortion
    }

    pub fn lens_distortion_mapped(&self) -> DistortionCoefficients {
        remap_distortion(&self.distortion)
    }

    pub fn original_resolution(&self) -> Option<(u32, u32)> {
        self.original_resolution
    }

    pub fn characteristics(&self) -> Option<&CharacteristicsDump> {
        self.characteristics.as_ref()
    }

    pub fn camera_pose(&self) -> Option<&EngineRigidPose> {
        self.pose.as_ref()
    }

    pub fn is_camera_pose_available(&self) -> bool {
        self.pose.is_some()
    }

    /// 运行时位姿；没有时使用左相机标定
    pub fn cam_in_hmd(&self) -> EngineRigidPose {
        match self.pose {
            Some(pose) => pose,
            None => {
                log::warn!("camera pose not available, using Quest 3 left camera calibration");
                convert_pose(&LEFT_CAMERA.pose)
            }
        }
    }

    /// 当前相机的标定；未选中相机时使用偏好
    pub fn current_calibration(&self, stream_width: u32, stream_height: u32) -> CalibrationResult {
        let side = match &self.selected {
            Some(selected) => selected.side,
            None => {
                log::warn!(
                    "no camera selected yet, using preference: {}",
                    self.preferred.label()
                );
                self.preferred
            }
        };
        get_calibration(side, stream_width, stream_height)
    }

    /// (has_intrinsics, has_pose)
    pub fn runtime_calibration_available(&self) -> (bool, bool) {
        (self.intrinsics.is_some(), self.pose.is_some())
    }

    /// 运行时标定与内置标定的对比报告
    pub fn calibration_diagnostics(&self, side: CameraSide) -> String {
        let record = select_calibration(side);
        let hardcoded_pose = convert_pose(&record.pose);
        let mut out = String::new();

        // write! 到 String 不会失败
        let _ = writeln!(out, "=== {} camera (ID {}) ===", side.label(), record.id);
        if let Some(selected) = &self.selected {
            let _ = writeln!(out, "selected camera: {} ({})", selected.id, selected.side.label());
        }

        let _ = writeln!(out, "-- intrinsics --");
        match &self.intrinsics {
            Some(runtime) => {
                let rt = &runtime.intrinsics;
                let _ = writeln!(
                    out,
                    "runtime   {}x{}: fx={:.2} fy={:.2} cx={:.2} cy={:.2} skew={:.3}",
                    rt.width, rt.height, rt.fx, rt.fy, rt.cx, rt.cy, runtime.skew
                );
                if rt.width <= record.native.width && rt.height <= record.native.height {
                    let hc = record.native.center_crop(rt.width, rt.height);
                    let _ = writeln!(
                        out,
                        "hardcoded {}x{}: fx={:.2} fy={:.2} cx={:.2} cy={:.2}",
                        hc.width, hc.height, hc.fx, hc.fy, hc.cx, hc.cy
                    );
                    let _ = writeln!(
                        out,
                        "diff: fx={:+.2} fy={:+.2} cx={:+.2} cy={:+.2}",
                        rt.fx - hc.fx,
                        rt.fy - hc.fy,
                        rt.cx - hc.cx,
                        rt.cy - hc.cy
                    );
                } else {
                    let _ = writeln!(
                        out,
                        "runtime resolution exceeds native {}x{}, no comparison",
                        record.native.width, record.native.height
                    );
                }
            }
            None => {
                let hc = &record.native;
                let _ = writeln!(out, "runtime: not available");
                let _ = writeln!(
                    out,
                    "hardcoded {}x{}: fx={:.2} fy={:.2} cx={:.2} cy={:.2}",
                    hc.width, hc.height, hc.fx, hc.fy, hc.cx, hc.cy
                );
            }
        }

        let _ = writeln!(out, "-- pose (CamInHmd) --");
        match &self.pose {
            Some(pose) => {
                let _ = writeln!(
                    out,
                    "runtime:   t={}cm r={} ({})",
                    Vector3d(pose.translation),
                    Quaterniond(pose.rotation),
                    Rotator::from(&pose.rotation)
                );
                let _ = writeln!(
                    out,
                    "hardcoded: t={}cm r={} ({})",
                    Vector3d(hardcoded_pose.translation),
                    Quaterniond(hardcoded_pose.rotation),
                    Rotator::from(&hardcoded_pose.rotation)
                );
                let _ = writeln!(
                    out,
                    "diff: t={}cm angle={:.3}deg",
                    Vector3d(pose.translation - hardcoded_pose.translation),
                    pose.rotation.angle_to(&hardcoded_pose.rotation).to_degrees()
                );
            }
            None => {
                let _ = writeln!(out, "runtime: not available");
                let _ = writeln!(
                    out,
                    "hardcoded: t={}cm r={} ({})",
                    Vector3d(hardcoded_pose.translation),
                    Quaterniond(hardcoded_pose.rotation),
                    Rotator::from(&hardcoded_pose.rotation)
                );
            }
        }
        out
    }
}
