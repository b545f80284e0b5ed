//! 图形工厂
//!
//! 根据类型标签和命名参数构造图形实体。3D类型（立方体、球体）
//! 构造后自动包装进适配器，工厂的返回类型对所有类型一致。

use crate::adapter::SolidAdapter;
use crate::error::ShapeError;
use crate::geometry::{Circle, Figure, Hexagon, Pentagon, Rectangle};
use crate::shape::Shape;
use crate::solid::{Cube, Solid, Sphere};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 命名数值参数包
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeParams {
    values: HashMap<String, f64>,
}

impl ShapeParams {
    /// 创建空参数包
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置一个参数
    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    /// 读取一个参数，缺失按非法参数处理
    pub fn get(&self, field: &str) -> Result<f64, ShapeError> {
        self.values
            .get(field)
            .copied()
            .ok_or_else(|| ShapeError::InvalidParameter(field.to_string()))
    }
}

/// 根据类型标签创建图形实体
///
/// 可识别的标签：`circle`、`rectangle`、`pentagon`、`hexagon`、
/// `cube`、`sphere`。参数校验委托给各图形的构造函数；
/// 无法识别的标签返回 [`ShapeError::UnknownKind`]。
pub fn create_shape(kind: &str, params: &ShapeParams) -> Result<Shape, ShapeError> {
    let figure = match kind {
        "circle" => Figure::Circle(Circle::new(params.get("radius")?)?),
        "rectangle" => {
            Figure::Rectangle(Rectangle::new(params.get("width")?, params.get("height")?)?)
        }
        "pentagon" => Figure::Pentagon(Pentagon::new(params.get("side")?)?),
        "hexagon" => Figure::Hexagon(Hexagon::new(params.get("side")?)?),
        "cube" => Figure::Solid(SolidAdapter::new(Solid::Cube(Cube::new(
            params.get("side")?,
        )?))),
        "sphere" => Figure::Solid(SolidAdapter::new(Solid::Sphere(Sphere::new(
            params.get("radius")?,
        )?))),
        _ => return Err(ShapeError::UnknownKind(kind.to_string())),
    };

    let shape = Shape::new(figure);
    debug!("Created shape: {}", shape.type_name());
    Ok(shape)
}
