//! 3D实体适配器
//!
//! 3D实体本身只有体积，没有2D契约要求的面积和周长。
//! [`SolidAdapter`] 把实体包装成一个满足2D契约的降级视图，
//! 让集合、相似度比较等按2D契约编写的代码路径无需区分维度。

use crate::solid::Solid;
use serde::{Deserialize, Serialize};

/// 3D实体的2D兼容视图
///
/// 面积取 `体积^(2/3)` 的量纲投影值，仅作兼容用途，不是真实
/// 表面积；周长不适用于实体，固定返回 0 而不报错。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolidAdapter {
    solid: Solid,
}

impl SolidAdapter {
    /// 包装一个实体
    pub fn new(solid: Solid) -> Self {
        Self { solid }
    }

    /// 被包装的实体
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// 实体的类型名称
    pub fn type_name(&self) -> &'static str {
        self.solid.type_name()
    }

    /// 兼容面积: 体积^(2/3)
    pub fn area(&self) -> f64 {
        self.solid.volume().powf(2.0 / 3.0)
    }

    /// 兼容周长，恒为 0
    pub fn perimeter(&self) -> f64 {
        0.0
    }

    /// 体积，直接取自被包装的实体
    pub fn volume(&self) -> f64 {
        self.solid.volume()
    }

    /// 生成描述文本，格式与2D图形不同，带 "(3D)" 标记并显示体积
    pub fn describe(&self) -> String {
        format!("{} (3D) - 体积: {:.2}", self.type_name(), self.volume())
    }

    /// ASCII图案直接委托给被包装的实体
    pub fn render_ascii(&self) -> &'static str {
        self.solid.render_ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::{Cube, Sphere};
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_adapter_area_is_projection() {
        let adapter = SolidAdapter::new(Solid::Cube(Cube::new(3.0).unwrap()));
        // 27^(2/3) = 9
        assert_relative_eq!(adapter.area(), 9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_perimeter_is_exact_zero() {
        let adapter = SolidAdapter::new(Solid::Sphere(Sphere::new(2.0).unwrap()));
        assert_eq!(adapter.perimeter(), 0.0);
    }

    #[test]
    fn test_describe_marks_3d() {
        let adapter = SolidAdapter::new(Solid::Cube(Cube::new(3.0).unwrap()));
        assert_eq!(adapter.describe(), "Cube (3D) - 体积: 27.00");
    }

    #[test]
    fn test_render_delegates_to_solid() {
        let cube = Solid::Cube(Cube::new(5.0).unwrap());
        let art = cube.render_ascii();
        let adapter = SolidAdapter::new(cube);
        assert_eq!(adapter.render_ascii(), art);
    }
}
