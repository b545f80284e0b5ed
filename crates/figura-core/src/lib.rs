//! Figura 核心图形引擎
//!
//! 提供2D/3D几何图形建模、度量计算和相似度比较功能。
//!
//! # 架构设计
//!
//! 采用 Shape-Figure 模式：
//! - `Shape`: 唯一标识符 + 图形数据
//! - `Figure`: 2D图形数据（圆、矩形、五边形、六边形）与3D适配视图
//! - `SimilarityStrategy`: 可插拔的相似度比较策略
//!
//! 3D实体（立方体、球体）本身不属于2D图形体系，
//! 通过 `SolidAdapter` 包装后才能进入集合和比较流程。
//!
//! # 示例
//!
//! ```rust
//! use figura_core::prelude::*;
//!
//! // 通过工厂创建一个圆
//! let shape = create_shape("circle", &ShapeParams::new().with("radius", 5.0)).unwrap();
//!
//! // 计算面积
//! println!("Area: {}", shape.area());
//! ```

pub mod adapter;
pub mod collection;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod math;
pub mod shape;
pub mod similarity;
pub mod solid;
pub mod validate;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::adapter::SolidAdapter;
    pub use crate::collection::ShapeCollection;
    pub use crate::error::ShapeError;
    pub use crate::factory::{create_shape, ShapeParams};
    pub use crate::geometry::{Circle, Figure, Hexagon, Pentagon, Rectangle};
    pub use crate::shape::{Shape, ShapeId};
    pub use crate::similarity::{AreaSimilarity, SimilarityStrategy, TypeSimilarity};
    pub use crate::solid::{Cube, Solid, Sphere};
}
