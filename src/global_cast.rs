//! 全局类型显示
//!
//! 日志与诊断输出用的格式化包装

use nalgebra::*;
use std::fmt::Display;

#[derive(Debug, Clone, Default)]
pub struct Quaterniond(pub UnitQuaternion<f64>);

/// 按 (x, y, z, w) 顺序输出
impl Display for Quaterniond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let q = &self.0;
        write!(f, "[{:.4}, {:.4}, {:.4}, {:.4}]", q.i, q.j, q.k, q.w)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Vector3d(pub Vector3<f64>);

impl Display for Vector3d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.2}, {:.2}, {:.2}]", self.0.x, self.0.y, self.0.z)
    }
}

/// (pitch, yaw, roll)，角度制
///
/// 取自 nalgebra 右手系 `euler_angles`。只有 pitch（绕 Y 轴）与引擎左手系的 rotator 一致，
/// yaw / roll 的符号约定不保证与引擎相同，仅用于日志。
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotator(pub f64, pub f64, pub f64);

impl From<&UnitQuaternion<f64>> for Rotator {
    fn from(q: &UnitQuaternion<f64>) -> Self {
        let (roll, pitch, yaw) = q.euler_angles();
        Rotator(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
    }
}

impl Display for Rotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P={:.2} Y={:.2} R={:.2}", self.0, self.1, self.2)
    }
}

#[test]
fn test_display() {
    let v = Vector3d(Vector3::new(6.2857, -3.187, -1.7158));
    assert_eq!(v.to_string(), "[6.29, -3.19, -1.72]");

    let q = Quaterniond(UnitQuaternion::identity());
    assert_eq!(q.to_string(), "[0.0000, 0.0000, 0.0000, 1.0000]");

    let pitch_down = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -0.2);
    let r = Rotator::from(&pitch_down);
    assert!((r.0 + 0.2f64.to_degrees()).abs() < 1e-9);
    assert!(r.to_string().starts_with("P=-11.46"));
}
