//! 2D图形定义
//!
//! 支持的基本图形：
//! - 圆 (Circle)
//! - 矩形 (Rectangle)
//! - 正五边形 (Pentagon)
//! - 正六边形 (Hexagon)
//!
//! 每种图形都有闭式的面积和周长公式，以及一幅固定的ASCII图案
//! （同一种类的图形无论尺寸大小，图案完全相同）。

use crate::adapter::SolidAdapter;
use crate::error::ShapeError;
use crate::validate::validate_number;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 图形类型枚举
///
/// `Solid` 变体承载经适配器包装的3D实体，使其能够
/// 走完所有按2D契约编写的代码路径。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Figure {
    Circle(Circle),
    Rectangle(Rectangle),
    Pentagon(Pentagon),
    Hexagon(Hexagon),
    Solid(SolidAdapter),
}

impl Figure {
    /// 获取图形的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Figure::Circle(_) => "Circle",
            Figure::Rectangle(_) => "Rectangle",
            Figure::Pentagon(_) => "Pentagon",
            Figure::Hexagon(_) => "Hexagon",
            Figure::Solid(a) => a.type_name(),
        }
    }

    /// 计算面积
    ///
    /// 3D变体返回的是适配器的投影值，不是真实表面积。
    pub fn area(&self) -> f64 {
        match self {
            Figure::Circle(c) => c.area(),
            Figure::Rectangle(r) => r.area(),
            Figure::Pentagon(p) => p.area(),
            Figure::Hexagon(h) => h.area(),
            Figure::Solid(a) => a.area(),
        }
    }

    /// 计算周长
    ///
    /// 3D变体固定返回 0。
    pub fn perimeter(&self) -> f64 {
        match self {
            Figure::Circle(c) => c.perimeter(),
            Figure::Rectangle(r) => r.perimeter(),
            Figure::Pentagon(p) => p.perimeter(),
            Figure::Hexagon(h) => h.perimeter(),
            Figure::Solid(a) => a.perimeter(),
        }
    }

    /// 获取固定的ASCII图案
    pub fn render_ascii(&self) -> &'static str {
        match self {
            Figure::Circle(_) => Circle::ASCII_ART,
            Figure::Rectangle(_) => Rectangle::ASCII_ART,
            Figure::Pentagon(_) => Pentagon::ASCII_ART,
            Figure::Hexagon(_) => Hexagon::ASCII_ART,
            Figure::Solid(a) => a.render_ascii(),
        }
    }

    /// 生成描述文本
    ///
    /// 2D图形输出名称、面积和周长（保留两位小数）；
    /// 3D变体使用适配器自己的格式。
    pub fn describe(&self) -> String {
        match self {
            Figure::Solid(a) => a.describe(),
            _ => format!(
                "{} - 面积: {:.2}, 周长: {:.2}",
                self.type_name(),
                self.area(),
                self.perimeter()
            ),
        }
    }
}

/// 圆
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    const ASCII_ART: &'static str = "   ***\n  *   *\n *     *\n  *   *\n   ***";

    /// 创建新的圆，半径必须为正有限数
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        validate_number(radius, "radius")?;
        Ok(Self { radius })
    }

    /// 半径
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// 计算面积: π·r²
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// 计算周长: 2π·r
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

/// 矩形
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    const ASCII_ART: &'static str = "*********\n*       *\n*       *\n*********";

    /// 创建新的矩形，宽高都必须为正有限数
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        validate_number(width, "width")?;
        validate_number(height, "height")?;
        Ok(Self { width, height })
    }

    /// 宽
    pub fn width(&self) -> f64 {
        self.width
    }

    /// 高
    pub fn height(&self) -> f64 {
        self.height
    }

    /// 计算面积: w·h
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// 计算周长: 2·(w+h)
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// 正五边形
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pentagon {
    side: f64,
}

impl Pentagon {
    const ASCII_ART: &'static str = "   /\\\n  /  \\\n |    |\n |____|";

    /// 创建新的正五边形，边长必须为正有限数
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        validate_number(side, "side")?;
        Ok(Self { side })
    }

    /// 边长
    pub fn side(&self) -> f64 {
        self.side
    }

    /// 计算面积: 5·s² / (4·tan(π/5))
    pub fn area(&self) -> f64 {
        5.0 * self.side * self.side / (4.0 * (PI / 5.0).tan())
    }

    /// 计算周长: 5·s
    pub fn perimeter(&self) -> f64 {
        5.0 * self.side
    }
}

/// 正六边形
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hexagon {
    side: f64,
}

impl Hexagon {
    const ASCII_ART: &'static str = "  ____\n /    \\\n/      \\\n\\      /\n \\____/";

    /// 创建新的正六边形，边长必须为正有限数
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        validate_number(side, "side")?;
        Ok(Self { side })
    }

    /// 边长
    pub fn side(&self) -> f64 {
        self.side
    }

    /// 计算面积: (3√3/2)·s²
    pub fn area(&self) -> f64 {
        3.0 * 3.0_f64.sqrt() / 2.0 * self.side * self.side
    }

    /// 计算周长: 6·s
    pub fn perimeter(&self) -> f64 {
        6.0 * self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use crate::solid::{Cube, Solid};

    #[test]
    fn test_circle_metrics() {
        let circle = Circle::new(1.0).unwrap();
        assert!(approx_eq(circle.area(), PI));
        assert!(approx_eq(circle.perimeter(), 2.0 * PI));

        let circle = Circle::new(5.0).unwrap();
        assert!((circle.area() - 78.5398).abs() < 1e-4);
        assert!((circle.perimeter() - 31.4159).abs() < 1e-4);
    }

    #[test]
    fn test_rectangle_metrics() {
        let rect = Rectangle::new(4.0, 6.0).unwrap();
        assert!(approx_eq(rect.area(), 24.0));
        assert!(approx_eq(rect.perimeter(), 20.0));
    }

    #[test]
    fn test_pentagon_metrics() {
        let pentagon = Pentagon::new(4.0).unwrap();
        assert!((pentagon.area() - 27.5276).abs() < 1e-4);
        assert!(approx_eq(pentagon.perimeter(), 20.0));
    }

    #[test]
    fn test_hexagon_metrics() {
        let hexagon = Hexagon::new(6.0).unwrap();
        assert!((hexagon.area() - 93.5307).abs() < 1e-4);
        assert!(approx_eq(hexagon.perimeter(), 36.0));
    }

    #[test]
    fn test_constructors_reject_invalid() {
        assert!(Circle::new(0.0).is_err());
        assert!(Circle::new(-1.0).is_err());
        assert!(Circle::new(f64::NAN).is_err());
        assert!(Rectangle::new(4.0, 0.0).is_err());
        assert!(Rectangle::new(f64::INFINITY, 2.0).is_err());
        assert!(Pentagon::new(-0.5).is_err());
        assert!(Hexagon::new(f64::NAN).is_err());
    }

    #[test]
    fn test_type_names() {
        let figure = Figure::Circle(Circle::new(1.0).unwrap());
        assert_eq!(figure.type_name(), "Circle");
        let figure = Figure::Pentagon(Pentagon::new(1.0).unwrap());
        assert_eq!(figure.type_name(), "Pentagon");
    }

    #[test]
    fn test_ascii_art_is_per_kind() {
        // 同种类不同尺寸，图案一致
        let small = Figure::Circle(Circle::new(0.5).unwrap());
        let large = Figure::Circle(Circle::new(500.0).unwrap());
        assert_eq!(small.render_ascii(), large.render_ascii());

        // 不同种类图案互不相同，3D图案也与2D图案不同
        let rect = Figure::Rectangle(Rectangle::new(1.0, 1.0).unwrap());
        assert_ne!(small.render_ascii(), rect.render_ascii());
        let cube = Figure::Solid(SolidAdapter::new(Solid::Cube(Cube::new(1.0).unwrap())));
        assert_ne!(rect.render_ascii(), cube.render_ascii());
    }

    #[test]
    fn test_describe_rounds_to_two_decimals() {
        let figure = Figure::Circle(Circle::new(5.0).unwrap());
        assert_eq!(figure.describe(), "Circle - 面积: 78.54, 周长: 31.42");
    }
}
