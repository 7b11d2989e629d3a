//! 百分号解码。
//!
//! ## 模块目的（Why）
//! - 请求目标可能包含 `%XX` 转义，存入 [`Request`](crate::Request) 前需还原为原始字节。
//! - 解码逻辑独立于状态机，可在完整请求解析之外单独复用。
//!
//! ## 实现策略（How）
//! - 始终写入新的输出缓冲，不在源缓冲上原地改写：多字节序列收缩有效长度时，
//!   原地写会让读写下标互相踩踏。
//! - 任一转义非法即整体失败，调用方拿不到部分结果。

use alloc::{string::String, vec::Vec};

use crate::error::DecodeError;

/// 将单个 ASCII 字节解码为 0–15。
///
/// 仅接受 `0-9`、`a-f`、`A-F`；其余字节（包括 `g-z`、`G-Z`）一律返回
/// [`DecodeError::InvalidHexDigit`]。
pub const fn hex_digit(byte: u8) -> Result<u8, DecodeError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(DecodeError::InvalidHexDigit),
    }
}

/// 按字节解码百分号转义。
///
/// ### 契约说明（What）
/// - **输入**：任意字节序列；
/// - **返回**：成功时给出新分配的解码结果，长度不超过输入；
/// - **失败**：`%` 后不足两个字节，或其后任一字节不是十六进制数字，返回
///   [`DecodeError::InvalidPercentEncoding`]。
pub fn decode_percent_bytes(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoded = Vec::with_capacity(input.len());
    let mut idx = 0usize;
    while idx < input.len() {
        let byte = input[idx];
        if byte != b'%' {
            decoded.push(byte);
            idx += 1;
            continue;
        }
        if idx + 2 >= input.len() {
            return Err(DecodeError::InvalidPercentEncoding);
        }
        let hi = hex_digit(input[idx + 1]).map_err(|_| DecodeError::InvalidPercentEncoding)?;
        let lo = hex_digit(input[idx + 2]).map_err(|_| DecodeError::InvalidPercentEncoding)?;
        decoded.push(hi * 16 + lo);
        idx += 3;
    }
    Ok(decoded)
}

/// 解码文本中的百分号转义。
///
/// 与 [`decode_percent_bytes`] 相同，额外要求解码结果是合法 UTF-8，否则返回
/// [`DecodeError::InvalidUtf8`]。
pub fn decode_percent_encoding(text: &str) -> Result<String, DecodeError> {
    let decoded = decode_percent_bytes(text.as_bytes())?;
    String::from_utf8(decoded).map_err(|_| DecodeError::InvalidUtf8)
}
