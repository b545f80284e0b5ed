//! 图形标识和实体包装
//!
//! 每个图形在构造时生成一个不可变的唯一标识符。

use crate::geometry::Figure;
use crate::similarity::{SimilarityStrategy, TypeSimilarity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 图形唯一标识符
///
/// 构造时生成，进程生命周期内实际唯一，外部不可设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// 图形实体
///
/// 一个图形实体包含唯一标识符和图形数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// 唯一标识符，构造时生成，之后只读
    id: ShapeId,

    /// 图形数据
    figure: Figure,
}

impl Shape {
    /// 创建新的图形实体
    pub fn new(figure: Figure) -> Self {
        Self {
            id: ShapeId::new(),
            figure,
        }
    }

    /// 获取标识符
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// 获取图形数据
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// 获取类型名称
    pub fn type_name(&self) -> &'static str {
        self.figure.type_name()
    }

    /// 计算面积
    pub fn area(&self) -> f64 {
        self.figure.area()
    }

    /// 计算周长
    pub fn perimeter(&self) -> f64 {
        self.figure.perimeter()
    }

    /// 获取固定的ASCII图案
    pub fn render_ascii(&self) -> &'static str {
        self.figure.render_ascii()
    }

    /// 生成描述文本
    pub fn describe(&self) -> String {
        self.figure.describe()
    }

    /// 按指定策略比较两个图形是否相似
    ///
    /// 不指定策略时默认使用类型相似度（[`TypeSimilarity`]）。
    pub fn is_similar(&self, other: &Shape, strategy: Option<&dyn SimilarityStrategy>) -> bool {
        strategy.unwrap_or(&TypeSimilarity).are_similar(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Circle;
    use crate::similarity::AreaSimilarity;

    fn circle(radius: f64) -> Shape {
        Shape::new(Figure::Circle(Circle::new(radius).unwrap()))
    }

    #[test]
    fn test_ids_are_unique() {
        let a = circle(1.0);
        let b = circle(1.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_id_stable_across_clone() {
        let a = circle(1.0);
        let b = a.clone();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_default_strategy_is_type_similarity() {
        // 同类不同尺寸：默认策略按类型判定为相似
        let small = circle(1.0);
        let large = circle(100.0);
        assert!(small.is_similar(&large, None));
        // 面积策略下同一对图形不相似
        assert!(!small.is_similar(&large, Some(&AreaSimilarity)));
    }
}
