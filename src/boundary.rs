//! 外部无类型输入 -> 符号序列。
//!
//! 库内调用方拿到的是 `&str` / `&[S]`，类型错误在编译期就被排除；
//! 只有从 JSON 或原始字节读入时才可能得到 [`BwtError::NotASequence`]。

use serde_json::Value;

use crate::error::{BwtError, Result};

fn json_category(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 只有 JSON 字符串才被视为序列。
pub fn sequence_from_json(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(BwtError::NotASequence {
            found: json_category(other).to_string(),
        }),
    }
}

/// 文本模式下的原始字节必须是合法 UTF-8。
pub fn sequence_from_bytes(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| BwtError::NotASequence {
        found: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })
}
