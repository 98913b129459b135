//! 畸变参数重排
//!
//! 平台给出的畸变参数长度不固定，统一映射为 8 个参数：
//! `[K1, K2, P1, P2, K3, K4, K5, K6]`

use serde::{Deserialize, Serialize};

use crate::config::DISTORTION_MAPPED_LEN;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DistortionCoefficients(pub [f64; DISTORTION_MAPPED_LEN]);

impl DistortionCoefficients {
    pub fn k1(&self) -> f64 {
        self.0[0]
    }
    pub fn k2(&self) -> f64 {
        self.0[1]
    }
    pub fn p1(&self) -> f64 {
        self.0[2]
    }
    pub fn p2(&self) -> f64 {
        self.0[3]
    }
    /// K3..K6
    pub fn higher_radial(&self) -> &[f64] {
        &self.0[4..]
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// 原始参数 -> `[K1, K2, P1, P2, K3, K4, K5, K6]`
///
/// - 空：全零
/// - 5 个：按径向 K1..K5 处理，P1 = P2 = K6 = 0
/// - 6 个及以上：前 6 个为 K1..K6，其余忽略
/// - 1..=4 个：只取 K1 (和 K2)
pub fn remap_distortion(raw: &[f64]) -> DistortionCoefficients {
    let mut mapped = [0.0; DISTORTION_MAPPED_LEN];
    match raw.len() {
        0 => {}
        5 => {
            mapped[0] = raw[0];
            mapped[1] = raw[1];
            mapped[4..7].copy_from_slice(&raw[2..5]);
        }
        n if n >= 6 => {
            mapped[0] = raw[0];
            mapped[1] = raw[1];
            mapped[4..8].copy_from_slice(&raw[2..6]);
        }
        n => {
            mapped[0] = raw[0];
            if n > 1 {
                mapped[1] = raw[1];
            }
        }
    }
    DistortionCoefficients(mapped)
}

#[cfg(test)]
mod tests {
    use super::remap_distortion;

    #[test]
    fn test_empty() {
        assert_eq!(remap_distortion(&[]).0, [0.0; 8]);
    }

    #[test]
    fn test_five() {
        let mapped = remap_distortion(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(mapped.0, [1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 5.0, 0.0]);
        assert_eq!(mapped.p1(), 0.0);
        assert_eq!(mapped.p2(), 0.0);
    }

    #[test]
    fn test_six_and_more() {
        let mapped = remap_distortion(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(mapped.0, [1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 5.0, 6.0]);

        let mapped = remap_distortion(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(mapped.0, [1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(mapped.higher_radial(), &[3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_short() {
        assert_eq!(remap_distortion(&[0.5]).0, [0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let mapped = remap_distortion(&[0.5, -0.25, 9.0, 9.0]);
        assert_eq!(mapped.0, [0.5, -0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!((mapped.k1(), mapped.k2()), (0.5, -0.25));
    }
}
