//! 图形集合
//!
//! 按插入顺序保存图形实体，提供顺序列出功能。

use crate::shape::Shape;
use tracing::debug;

/// 图形集合
///
/// 只追加，不支持删除；生命周期与会话一致，纯内存存储。
#[derive(Debug, Default)]
pub struct ShapeCollection {
    /// 所有图形，按插入顺序
    shapes: Vec<Shape>,
}

impl ShapeCollection {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个图形
    pub fn add(&mut self, shape: Shape) {
        debug!("Added shape to collection: {}", shape.type_name());
        self.shapes.push(shape);
    }

    /// 图形数量
    pub fn count(&self) -> usize {
        self.shapes.len()
    }

    /// 获取所有图形（插入顺序）
    pub fn all_shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// 按插入顺序打印每个图形的描述
    pub fn list(&self) {
        for shape in &self.shapes {
            println!("{}", shape.describe());
        }
    }
}
