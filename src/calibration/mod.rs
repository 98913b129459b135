//! Quest 3 相机标定
//!
//! 两个相机的标定数据来自设备导出，编译期常量，不可修改。
//! 原生分辨率 1280x1280，输出流通过中心裁剪得到。

use serde::{Deserialize, Serialize};

use crate::camera::{CameraParametersTrait, CameraSide, PinholeIntrinsics};
use crate::config::{LEFT_CAMERA_ID, NATIVE_HEIGHT, NATIVE_WIDTH, RIGHT_CAMERA_ID};
use crate::global_cast::Vector3d;
use crate::global_types::{DeviceRigidPose, EngineRigidPose};
use crate::pose::convert_pose;

/// 单个相机的标定记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraCalibrationRecord {
    pub side: CameraSide,
    pub id: &'static str,
    /// CamInHmd，设备坐标系，单位米
    pub pose: DeviceRigidPose,
    /// 原生分辨率下的内参
    pub native: PinholeIntrinsics,
}

/// 左相机 (ID 50)
pub const LEFT_CAMERA: CameraCalibrationRecord = CameraCalibrationRecord {
    side: CameraSide::Left,
    id: LEFT_CAMERA_ID,
    pose: DeviceRigidPose::new(
        [
            -0.03187057375907898,
            -0.01715778559446335,
            -0.06285717338323593,
        ],
        [
            -0.9951009154319763,
            -0.0002342800289625302,
            -0.005589410196989775,
            0.09870576858520508,
        ],
    ),
    native: PinholeIntrinsics::new(
        870.6005249023438,
        870.6005249023438,
        640.2453002929688,
        641.2428588867188,
        NATIVE_WIDTH,
        NATIVE_HEIGHT,
    ),
};

/// 右相机 (ID 51)
pub const RIGHT_CAMERA: CameraCalibrationRecord = CameraCalibrationRecord {
    side: CameraSide::Right,
    id: RIGHT_CAMERA_ID,
    pose: DeviceRigidPose::new(
        [
            0.031745150685310367,
            -0.017119500786066057,
            -0.06280999630689621,
        ],
        [
            -0.9954029321670532,
            -0.00033292744774371386,
            0.00344613054767251,
            0.09571301192045212,
        ],
    ),
    native: PinholeIntrinsics::new(
        869.4124755859375,
        869.4124755859375,
        635.97998046875,
        636.2386474609375,
        NATIVE_WIDTH,
        NATIVE_HEIGHT,
    ),
};

pub fn select_calibration(side: CameraSide) -> &'static CameraCalibrationRecord {
    match side {
        CameraSide::Left => &LEFT_CAMERA,
        CameraSide::Right => &RIGHT_CAMERA,
    }
}

/// 标定查询结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    pub camera_id: String,
    pub side: CameraSide,
    /// 原生分辨率内参
    pub native: PinholeIntrinsics,
    /// 输出流分辨率内参
    pub stream: PinholeIntrinsics,
    /// CamInHmd，引擎坐标系
    pub pose: EngineRigidPose,
}

impl CameraParametersTrait for CalibrationResult {
    const CAMERA_TYPE: &'static str = "QUEST3_CALIBRATION";
}

impl CalibrationResult {
    pub fn cam_in_hmd(&self) -> nalgebra::Isometry3<f64> {
        self.pose.to_isometry()
    }
}

pub fn get_calibration(side: CameraSide, stream_width: u32, stream_height: u32) -> CalibrationResult {
    let record = select_calibration(side);
    let stream = record.native.center_crop(stream_width, stream_height);
    let pose = convert_pose(&record.pose);

    log::debug!(
        "Quest3 {} camera calibration: stream {}x{}, fx={:.2} fy={:.2} cx={:.2} cy={:.2}, pose={}cm",
        side.label(),
        stream_width,
        stream_height,
        stream.fx,
        stream.fy,
        stream.cx,
        stream.cy,
        Vector3d(pose.translation)
    );

    CalibrationResult {
        camera_id: record.id.to_string(),
        side,
        native: record.native,
        stream,
        pose,
    }
}
