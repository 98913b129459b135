use std::path::PathBuf;

use anyhow::Context;

/// 平台相机特性 JSON 导出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacteristicsDump {
    pub json: String,
    /// 导出文件路径
    pub path: Option<PathBuf>,
}

impl CharacteristicsDump {
    pub fn new(json: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            json: json.into(),
            path,
        }
    }

    pub fn parse(&self) -> anyhow::Result<serde_json::Value> {
        serde_json::from_str(&self.json).context("malformed camera characteristics dump")
    }
}

#[test]
fn test_parse_dump() {
    let dump = CharacteristicsDump::new(r#"{"rotation": [0.0, 0.0, 0.0, 1.0]}"#, None);
    let value = dump.parse().unwrap();
    assert_eq!(value["rotation"][3], 1.0);

    let broken = CharacteristicsDump::new("{", Some(PathBuf::from("/tmp/dump.json")));
    assert!(broken.parse().is_err());
}
