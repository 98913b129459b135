#![allow(dead_code)]

/// 原生传感器分辨率（左右相机相同）
pub const NATIVE_WIDTH: u32 = 1280;
pub const NATIVE_HEIGHT: u32 = 1280;

/// 默认输出流分辨率（中心裁剪 4:3）
pub const DEFAULT_STREAM_WIDTH: u32 = 1280;
pub const DEFAULT_STREAM_HEIGHT: u32 = 960;

/// 米 -> 厘米
pub const METERS_TO_CM: f64 = 100.0;

/// 四元数模长小于该值时不做归一化
pub const QUAT_EPSILON: f64 = 1e-8;

/// 相机ID
pub const LEFT_CAMERA_ID: &str = "50";
pub const RIGHT_CAMERA_ID: &str = "51";
pub const UNKNOWN_CAMERA_ID: &str = "unknown";

/// 畸变参数输出长度 [K1,K2,P1,P2,K3,K4,K5,K6]
pub const DISTORTION_MAPPED_LEN: usize = 8;

/// 帧缓冲大小
pub const FRAME_BUFFER_SIZE: usize = 4;

/// RGBA8 每像素字节数
pub const BYTES_PER_PIXEL: usize = 4;
