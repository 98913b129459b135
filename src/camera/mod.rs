mod distortion;
mod pinhole_camera;
pub use distortion::{remap_distortion, DistortionCoefficients};
pub use pinhole_camera::PinholeIntrinsics;

use std::path::Path;

use anyhow::{bail, Context};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::{LEFT_CAMERA_ID, RIGHT_CAMERA_ID};

/// 左右相机 (Quest 3: 50 = 左, 51 = 右)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraSide {
    #[default]
    Left,
    Right,
}

impl CameraSide {
    pub fn camera_id(&self) -> &'static str {
        match self {
            CameraSide::Left => LEFT_CAMERA_ID,
            CameraSide::Right => RIGHT_CAMERA_ID,
        }
    }

    pub fn from_camera_id(id: &str) -> Option<Self> {
        match id {
            LEFT_CAMERA_ID => Some(CameraSide::Left),
            RIGHT_CAMERA_ID => Some(CameraSide::Right),
            _ => None,
        }
    }

    pub fn from_is_left(is_left: bool) -> Self {
        if is_left {
            CameraSide::Left
        } else {
            CameraSide::Right
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, CameraSide::Left)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraSide::Left => "LEFT",
            CameraSide::Right => "RIGHT",
        }
    }
}

/// 相机参数文件读写
///
/// 文件格式：`{"model_type": CAMERA_TYPE, "parameters": {...}}`
pub trait CameraParametersTrait: Serialize + DeserializeOwned {
    const CAMERA_TYPE: &'static str;

    fn read_from_json(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut value: serde_json::Value = serde_json::from_str(&text)?;

        let model_type = value
            .get("model_type")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        if model_type != Self::CAMERA_TYPE {
            log::error!("model type is not {}: {:?}", Self::CAMERA_TYPE, model_type);
            bail!("unexpected model type {:?} in {}", model_type, path.display());
        }

        let Some(parameters) = value.get_mut("parameters").map(serde_json::Value::take) else {
            bail!("missing parameters in {}", path.display());
        };
        Ok(serde_json::from_value(parameters)?)
    }

    fn write_to_json(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let value = serde_json::json!({
            "model_type": Self::CAMERA_TYPE,
            "parameters": self,
        });
        let text = serde_json::to_string_pretty(&value)?;
        std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[test]
fn test_camera_side_ids() {
    assert_eq!(CameraSide::Left.camera_id(), "50");
    assert_eq!(CameraSide::Right.camera_id(), "51");
    assert_eq!(CameraSide::from_camera_id("51"), Some(CameraSide::Right));
    assert_eq!(CameraSide::from_camera_id("0"), None);
    assert_eq!(CameraSide::from_is_left(false), CameraSide::Right);
    assert!(CameraSide::default().is_left());
}
