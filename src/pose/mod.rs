//! 位姿转换
//! 将设备坐标系 (Android Camera2 / OpenGL) 的 CamInHmd 位姿转换到引擎坐标系
//!
//! 转换公式与厂商参考样例的数值输出一致，作为黑盒变换保留，不重新推导。

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::config::METERS_TO_CM;
use crate::global_types::{DeviceRigidPose, EngineRigidPose};
use crate::utility::Utility;

/// 平移：翻转 Z，轴重排，米转厘米
#[inline]
pub fn convert_translation(tx: f64, ty: f64, tz: f64) -> Vector3<f64> {
    Vector3::new(-tz * METERS_TO_CM, tx * METERS_TO_CM, ty * METERS_TO_CM)
}

/// 旋转：输入为 (x, y, z, w) 顺序的近似单位四元数
pub fn convert_rotation(qx: f64, qy: f64, qz: f64, qw: f64) -> UnitQuaternion<f64> {
    // 1. 翻转 z
    let q = Quaternion::new(qw, qx, qy, -qz);
    // 2. 归一化
    let q = Utility::normalize_or_keep(q);
    // 3. 右乘绕 X 轴 180°
    let q = Utility::mul_x_180(q);
    // 4. 轴重排
    let q = Utility::remap_to_engine(q);
    // 5.
    Utility::normalize_or_identity(q)
}

pub fn convert_pose(pose: &DeviceRigidPose) -> EngineRigidPose {
    let [tx, ty, tz] = pose.translation;
    let [qx, qy, qz, qw] = pose.rotation;
    EngineRigidPose {
        translation: convert_translation(tx, ty, tz),
        rotation: convert_rotation(qx, qy, qz, qw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{LEFT_CAMERA, RIGHT_CAMERA};

    #[test]
    fn test_translation_linear_map() {
        let samples = [
            (0.0, 0.0, 0.0),
            (1.0, -2.0, 3.0),
            (-0.03187057375907898, -0.01715778559446335, -0.06285717338323593),
            (1e6, -1e-6, 42.5),
        ];
        for (tx, ty, tz) in samples {
            let t = convert_translation(tx, ty, tz);
            assert_eq!(t.x, -tz * 100.0);
            assert_eq!(t.y, tx * 100.0);
            assert_eq!(t.z, ty * 100.0);
        }
    }

    #[test]
    fn test_translation_invertible() {
        let (tx, ty, tz) = (0.25, -0.5, 0.125);
        let t = convert_translation(tx, ty, tz);
        // 逆变换
        let back = (t.y / 100.0, t.z / 100.0, -t.x / 100.0);
        assert_eq!(back, (tx, ty, tz));

        let other = convert_translation(tx, ty, tz + 0.001);
        assert_ne!(t, other);
    }

    #[test]
    fn test_left_camera_translation() {
        let [tx, ty, tz] = LEFT_CAMERA.pose.translation;
        let t = convert_translation(tx, ty, tz);
        // 约 (6.3, -3.2, -1.7) cm
        assert!((t.x - 6.29).abs() < 0.01, "{}", t);
        assert!((t.y + 3.19).abs() < 0.01, "{}", t);
        assert!((t.z + 1.72).abs() < 0.01, "{}", t);
    }

    #[test]
    fn test_rotation_is_unit() {
        let inputs = [
            [0.0, 0.0, 0.0, 1.0],
            [1.0, 2.0, 3.0, 4.0],
            [-0.9951009154319763, -0.0002342800289625302, -0.005589410196989775, 0.09870576858520508],
            [0.5, 0.5, 0.5, -0.5],
            [1e-3, 0.0, 0.0, 0.0],
            [100.0, -250.0, 3.0, 0.1],
        ];
        for [x, y, z, w] in inputs {
            let q = convert_rotation(x, y, z, w);
            assert!((q.norm() - 1.0).abs() < 1e-4, "input {:?} -> {}", [x, y, z, w], q);
        }
    }

    #[test]
    fn test_rotation_degenerate_input() {
        let q = convert_rotation(0.0, 0.0, 0.0, 0.0);
        assert!((q.norm() - 1.0).abs() < 1e-4);
        assert_eq!(q, UnitQuaternion::identity());

        let q = convert_rotation(1e-12, 0.0, -1e-12, 0.0);
        assert!((q.norm() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_huge_input() {
        let big = convert_rotation(1e200, 1e200, 0.0, 0.0);
        let unit = convert_rotation(1.0, 1.0, 0.0, 0.0);
        assert!((big.norm() - 1.0).abs() < 1e-4);
        assert!((big.into_inner() - unit.into_inner()).norm() < 1e-12, "{} vs {}", big, unit);
        assert_ne!(big, UnitQuaternion::identity());
    }

    #[test]
    fn test_rotation_step_values() {
        let [qx, qy, qz, qw] = LEFT_CAMERA.pose.rotation;
        let q = convert_rotation(qx, qy, qz, qw);
        // (z, -x, y, w) 作用于 (w, z, -y, -x) 作用于 (qx, qy, -qz, qw)
        let n = (qx * qx + qy * qy + qz * qz + qw * qw).sqrt();
        let expected = [-qy / n, -qw / n, -qz / n, -qx / n];
        let got = [q.i, q.j, q.k, q.w];
        for (e, g) in expected.iter().zip(got.iter()) {
            assert!((e - g).abs() < 1e-9, "{:?} vs {:?}", expected, got);
        }
    }

    #[test]
    fn test_cameras_tilt_downward() {
        for record in [&LEFT_CAMERA, &RIGHT_CAMERA] {
            let pose = convert_pose(&record.pose);
            let (pitch, yaw, roll) = pose.rotator();
            log::debug!("{}: pitch={} yaw={} roll={}", record.id, pitch, yaw, roll);
            assert!(pitch < 0.0, "camera {} pitch {}", record.id, pitch);
            assert!((pitch + 11.0).abs() < 1.0, "camera {} pitch {}", record.id, pitch);
            assert!(yaw.abs() < 2.0 && roll.abs() < 2.0);
        }
    }
}
