use crate::ease;

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A value that can be interpolated by a [`Tween`](crate::Tween).
///
/// Anything that supports `a - b`, `a + b` and `a * f64` qualifies, which
/// covers `f64` as well as [`Point2`] and [`Point3`].
pub trait Tweenable: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> {}

impl<T> Tweenable for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>
{
}

#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}, {:.2}", self.x, self.y)
    }
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, p: Self) -> f64 {
        f64::sqrt(f64::powi(self.x - p.x, 2) + f64::powi(self.y - p.y, 2))
    }

    pub fn lerp(p1: Self, p2: Self, t: f64) -> Self {
        Self::new(ease::lerp(p1.x, p2.x, t), ease::lerp(p1.y, p2.y, t))
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}, {:.2}, {:.2}", self.x, self.y, self.z)
    }
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, p: Self) -> f64 {
        f64::sqrt(
            f64::powi(self.x - p.x, 2) + f64::powi(self.y - p.y, 2) + f64::powi(self.z - p.z, 2),
        )
    }

    pub fn lerp(p1: Self, p2: Self, t: f64) -> Self {
        Self::new(
            ease::lerp(p1.x, p2.x, t),
            ease::lerp(p1.y, p2.y, t),
            ease::lerp(p1.z, p2.z, t),
        )
    }
}

macro_rules! impl_point_ops {
    ($t:ident { $($f:ident),+ }) => {
        impl Add for $t {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $t {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Mul<f64> for $t {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }
    };
}

impl_point_ops!(Point2 { x, y });
impl_point_ops!(Point3 { x, y, z });

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point2::new(1., 2.);
        let b = Point2::new(4., 6.);
        assert_eq!(b - a, Point2::new(3., 4.));
        assert_eq!(a + b, Point2::new(5., 8.));
        assert_eq!(a * 2., Point2::new(2., 4.));
        assert_eq!(a.distance(b), 5.);

        let c = Point3::from((1., 1., 1.));
        assert_eq!(c * 3. - c, Point3::new(2., 2., 2.));
    }

    #[test]
    fn lerp_is_clamped() {
        let a = Point3::new(0., 0., 0.);
        let b = Point3::new(10., 20., 30.);
        assert_eq!(Point3::lerp(a, b, 0.5), Point3::new(5., 10., 15.));
        assert_eq!(Point3::lerp(a, b, 1.5), b);
        assert_eq!(Point2::lerp((0., 0.).into(), (2., 2.).into(), -1.), Point2::default());
    }

    #[test]
    fn display() {
        assert_eq!(Point2::new(1., 2.5).to_string(), "1.00, 2.50");
        assert_eq!(Point3::new(0., -1., 3.).to_string(), "0.00, -1.00, 3.00");
    }
}
