//! 正向变换（校验 -> 旋转排序 -> 取最后一列）与逆变换（LF 映射回溯）。

pub mod validate;
pub mod sa;
pub mod bwt;
pub mod lf;
pub mod inverse;
