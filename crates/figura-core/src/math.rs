//! 数学基础工具
//!
//! 提供浮点比较辅助函数，几何计算直接使用标准库的 `f64`。

/// 数值容差，用于浮点比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
