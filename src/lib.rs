//! # bwt-rust
//!
//! Burrows-Wheeler 变换（BWT）及其精确逆变换，用作生物序列或一般文本
//! 压缩 / 索引之前的可逆置换步骤。
//!
//! - **正向变换**：在序列末尾追加终止符，按倍增法对全部旋转排序，取最后一列
//! - **逆变换**：由计数表 C 与名次表 P 构建 LF 映射，从终止符位置回溯还原原序列
//! - **输入校验**：正向输入不得含终止符；逆向输入必须恰好含一个终止符
//!
//! 终止符在数值化字母表中固定编号为 0，无论其字面值为何，总是最小符号。
//! 文本默认终止符为 [`DEFAULT_TERMINATOR`]（`$`），可选集合见 [`ALLOWED_TERMINATORS`]。
//!
//! ## 快速示例
//!
//! ```rust
//! use bwt_rust::{Bwt, ErrorKind};
//!
//! assert_eq!(bwt_rust::transform("googol").unwrap(), "lo$oogg");
//! assert_eq!(bwt_rust::inverse("lo$oogg").unwrap(), "googol");
//!
//! // 字节序列、自定义终止符
//! let codec = Bwt::for_bytes(b'#').unwrap();
//! let t = codec.transform(b"ACGTACGT").unwrap();
//! assert_eq!(codec.inverse(&t).unwrap(), b"ACGTACGT");
//!
//! // 校验失败返回带类别的错误
//! let err = bwt_rust::inverse("lo$oogg$").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TerminatorDuplicate);
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 校验、后缀排序、BWT、LF 映射、逆变换
//! - [`codec`] — 对外的 [`Bwt`] 编解码器与 `transform` / `inverse`
//! - [`boundary`] — JSON / 原始字节等无类型输入的适配
//! - [`io`] — FASTA 读写与 `.bwt` 归档
//! - [`util`] — 字母表数值化与终止符规则

pub mod boundary;
pub mod codec;
pub mod error;
pub mod index;
pub mod io;
pub mod util;

pub use codec::{inverse, transform, Bwt, BwtOpt};
pub use error::{BwtError, ErrorKind, Result};
pub use util::alphabet::{ALLOWED_TERMINATORS, DEFAULT_TERMINATOR};
