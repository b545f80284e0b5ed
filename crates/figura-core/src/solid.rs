//! 3D实体定义
//!
//! 支持的实体：
//! - 立方体 (Cube)
//! - 球体 (Sphere)
//!
//! 实体只暴露体积和固定的ASCII图案，不具备2D图形的
//! 面积/周长概念；需要进入2D流程时通过
//! [`crate::adapter::SolidAdapter`] 包装。

use crate::error::ShapeError;
use crate::validate::validate_number;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 实体类型枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Solid {
    Cube(Cube),
    Sphere(Sphere),
}

impl Solid {
    /// 获取实体的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Solid::Cube(_) => "Cube",
            Solid::Sphere(_) => "Sphere",
        }
    }

    /// 计算体积
    pub fn volume(&self) -> f64 {
        match self {
            Solid::Cube(c) => c.volume(),
            Solid::Sphere(s) => s.volume(),
        }
    }

    /// 获取固定的ASCII图案
    pub fn render_ascii(&self) -> &'static str {
        match self {
            Solid::Cube(_) => Cube::ASCII_ART,
            Solid::Sphere(_) => Sphere::ASCII_ART,
        }
    }
}

/// 立方体
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cube {
    side: f64,
}

impl Cube {
    const ASCII_ART: &'static str =
        "  +-----+\n /     /|\n+-----+ |\n|     | +\n|     |/\n+-----+";

    /// 创建新的立方体，棱长必须为正有限数
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        validate_number(side, "side")?;
        Ok(Self { side })
    }

    /// 棱长
    pub fn side(&self) -> f64 {
        self.side
    }

    /// 计算体积: s³
    pub fn volume(&self) -> f64 {
        self.side * self.side * self.side
    }
}

/// 球体
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    const ASCII_ART: &'static str =
        "   ____\n  /    \\\n |  ()  |\n  \\____/";

    /// 创建新的球体，半径必须为正有限数
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        validate_number(radius, "radius")?;
        Ok(Self { radius })
    }

    /// 半径
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// 计算体积: (4/3)·π·r³
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_cube_volume() {
        let cube = Cube::new(3.0).unwrap();
        assert!(approx_eq(cube.volume(), 27.0));
    }

    #[test]
    fn test_sphere_volume() {
        let sphere = Sphere::new(2.0).unwrap();
        assert!(approx_eq(sphere.volume(), 4.0 / 3.0 * PI * 8.0));
    }

    #[test]
    fn test_constructors_reject_invalid() {
        assert!(Cube::new(0.0).is_err());
        assert!(Cube::new(f64::NAN).is_err());
        assert!(Sphere::new(-2.0).is_err());
        assert!(Sphere::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_solid_dispatch() {
        let solid = Solid::Cube(Cube::new(2.0).unwrap());
        assert_eq!(solid.type_name(), "Cube");
        assert!(approx_eq(solid.volume(), 8.0));

        let solid = Solid::Sphere(Sphere::new(1.0).unwrap());
        assert_eq!(solid.type_name(), "Sphere");
    }
}
