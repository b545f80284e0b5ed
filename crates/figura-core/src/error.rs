//! 图形操作错误定义

use thiserror::Error;

/// 图形构造与工厂错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// 构造参数非法：非有限数、不大于零，或工厂参数缺失
    #[error("Invalid parameter '{0}': expected a positive finite number")]
    InvalidParameter(String),

    /// 工厂收到无法识别的图形类型标签
    #[error("Unknown shape kind: {0}")]
    UnknownKind(String),
}
