use nalgebra::Quaternion;

use crate::config::QUAT_EPSILON;

pub struct Utility {}

impl Utility {
    /// 先按最大分量缩放再求模，避免分量过大时模长溢出
    ///
    /// 返回 (缩放后的单位四元数, 原始模长)；全零时返回 None
    fn scaled_unit(q: Quaternion<f64>) -> Option<(Quaternion<f64>, f64)> {
        let scale = q.coords.amax();
        if scale == 0.0 || !scale.is_finite() {
            return None;
        }
        let scaled = q / scale;
        let norm = scaled.norm();
        Some((scaled / norm, norm * scale))
    }

    /// 归一化；模长过小时原样返回
    #[inline]
    pub fn normalize_or_keep(q: Quaternion<f64>) -> Quaternion<f64> {
        match Self::scaled_unit(q) {
            Some((unit, norm)) if norm > QUAT_EPSILON => unit,
            _ => q,
        }
    }

    /// 归一化；模长过小时返回单位四元数
    #[inline]
    pub fn normalize_or_identity(q: Quaternion<f64>) -> nalgebra::UnitQuaternion<f64> {
        match Self::scaled_unit(q) {
            Some((unit, norm)) if norm > QUAT_EPSILON => {
                nalgebra::UnitQuaternion::new_unchecked(unit)
            }
            _ => nalgebra::UnitQuaternion::identity(),
        }
    }

    /// q * (1, 0, 0, 0)，即右乘绕 X 轴 180° 的旋转
    ///
    /// (x, y, z, w) -> (w, z, -y, -x)
    #[inline]
    pub fn mul_x_180(q: Quaternion<f64>) -> Quaternion<f64> {
        Quaternion::new(-q.i, q.w, q.k, -q.j)
    }

    /// 中间坐标系 (X右 Y上 Z前) -> 引擎坐标系 (X前 Y右 Z上)
    ///
    /// (x, y, z, w) -> (z, -x, y, w)，第二分量取反以保证俯仰方向正确
    #[inline]
    pub fn remap_to_engine(q: Quaternion<f64>) -> Quaternion<f64> {
        Quaternion::new(q.w, q.k, -q.i, q.j)
    }
}

#[cfg(test)]
mod tests {
    use super::Utility;
    use nalgebra::{Quaternion, UnitQuaternion, Vector3};

    #[test]
    fn test_mul_x_180_matches_product() {
        let q = Quaternion::new(0.3, -0.1, 0.7, 0.2);
        let x_180 = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let expected = q * x_180.into_inner();
        let got = Utility::mul_x_180(q);
        assert!((expected - got).norm() < 1e-12, "{} vs {}", expected, got);
    }

    #[test]
    fn test_normalize_guard() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(Utility::normalize_or_keep(zero), zero);
        assert_eq!(
            Utility::normalize_or_identity(zero),
            UnitQuaternion::identity()
        );

        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        assert!((Utility::normalize_or_keep(q).norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_huge_components() {
        let half = std::f64::consts::FRAC_1_SQRT_2;
        // (x, y, z, w) = (1e200, 1e200, 0, 0)
        let q = Quaternion::new(0.0, 1e200, 1e200, 0.0);
        let n = Utility::normalize_or_keep(q);
        assert!((n - Quaternion::new(0.0, half, half, 0.0)).norm() < 1e-12, "{}", n);

        let u = Utility::normalize_or_identity(Quaternion::new(-1e300, 0.0, 0.0, 1e300));
        assert!((u.into_inner() - Quaternion::new(-half, 0.0, 0.0, half)).norm() < 1e-12);
    }
}
