//! 位姿类型
//!
//! 设备坐标系：X右 Y上 Z后（指向用户），右手系，单位米
//! 引擎坐标系：X前 Y右 Z上，左手系，单位厘米

use serde::{Deserialize, Serialize};

use crate::global_cast::Rotator;

/// 设备坐标系下的刚体位姿 (CamInHmd)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceRigidPose {
    /// 平移 (x, y, z)，米
    pub translation: [f64; 3],
    /// 旋转四元数 (x, y, z, w)
    pub rotation: [f64; 4],
}

impl DeviceRigidPose {
    pub const fn new(translation: [f64; 3], rotation: [f64; 4]) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

/// 引擎坐标系下的刚体位姿
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineRigidPose {
    /// 平移，厘米
    pub translation: nalgebra::Vector3<f64>,
    /// 旋转
    pub rotation: nalgebra::UnitQuaternion<f64>,
}

impl Default for EngineRigidPose {
    fn default() -> Self {
        Self {
            translation: nalgebra::Vector3::zeros(),
            rotation: nalgebra::UnitQuaternion::identity(),
        }
    }
}

impl EngineRigidPose {
    /// 组合为 [nalgebra::Isometry3]
    pub fn to_isometry(&self) -> nalgebra::Isometry3<f64> {
        nalgebra::Isometry3::from_parts(
            nalgebra::Translation3::from(self.translation),
            self.rotation,
        )
    }

    /// (pitch, yaw, roll)，角度制
    ///
    /// pitch 为绕引擎 Y 轴的有符号转角，负值表示向下倾斜。
    /// 只有 pitch 与引擎 rotator 一致，yaw / roll 见 [Rotator]。
    pub fn rotator(&self) -> (f64, f64, f64) {
        let Rotator(pitch, yaw, roll) = Rotator::from(&self.rotation);
        (pitch, yaw, roll)
    }
}

#[test]
fn test_isometry() {
    let pose = EngineRigidPose {
        translation: nalgebra::Vector3::new(1.0, 2.0, 3.0),
        ..Default::default()
    };
    let iso = pose.to_isometry();
    let p = iso.transform_point(&nalgebra::Point3::origin());
    assert_eq!(p.coords, pose.translation);
    assert_eq!(pose.rotator(), (0.0, 0.0, 0.0));
}
