//! Quest 3 透视相机标定：相机位姿坐标转换、中心裁剪内参、畸变参数重排
//!
//! nalgebra
//! https://docs.rs/nalgebra/latest/nalgebra/

pub mod calibration;
pub mod camera;
pub mod config;
pub mod global_cast;
pub mod global_types;
pub mod pose;
pub mod session;
pub mod utility;

pub use calibration::{get_calibration, select_calibration, CalibrationResult, CameraCalibrationRecord};
pub use camera::{remap_distortion, CameraSide, DistortionCoefficients, PinholeIntrinsics};
pub use global_types::{DeviceRigidPose, EngineRigidPose};
pub use pose::{convert_pose, convert_rotation, convert_translation};
pub use session::CameraSession;
