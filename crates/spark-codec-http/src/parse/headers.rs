//! 头部块拆分。
//!
//! ## 模块目标（Why）
//! - 状态机只负责收集原始头部块；本模块把它拆分为名称到值的映射。
//!
//! ## 设计思路（How）
//! 1. 按 `\r\n` 切行，跳过空行（空块产生空映射）；
//! 2. 每行按首个 `": "` 切分名称与值，均不做裁剪；
//! 3. 名称重复时保留首次出现的值，后续重复静默丢弃。
//!
//! ## 风险提示（Trade-offs）
//! - 缺少 `": "` 的行直接判定为 [`ParseError::InvalidHeaderLine`]，不跳过、不重同步，
//!   保证同一输入永远得到同一结论。

use alloc::{borrow::ToOwned, collections::btree_map::Entry};

use crate::{error::ParseError, types::HeaderMap};

const LINE_SEPARATOR: &str = "\r\n";
const NAME_VALUE_SEPARATOR: &str = ": ";

/// 将原始头部块拆分为头部映射。
///
/// ### 契约说明（What）
/// - **输入**：不含结尾空行的头部块，行间以 `\r\n` 分隔；
/// - **返回**：名称大小写敏感的 [`HeaderMap`]；
/// - **失败**：任一非空行缺少 `": "` 时返回 [`ParseError::InvalidHeaderLine`]。
pub fn split_header_block(block: &str) -> Result<HeaderMap, ParseError> {
    let mut headers = HeaderMap::new();
    for line in block.split(LINE_SEPARATOR).filter(|line| !line.is_empty()) {
        let (name, value) = line
            .split_once(NAME_VALUE_SEPARATOR)
            .ok_or(ParseError::InvalidHeaderLine)?;
        match headers.entry(name.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(value.to_owned());
            }
            Entry::Occupied(_) => {
                tracing::trace!(header = name, "duplicate header dropped");
            }
        }
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_yields_empty_map() {
        assert!(split_header_block("").expect("空块合法").is_empty());
    }

    #[test]
    fn splits_on_first_separator_only() {
        let headers = split_header_block("Host: example.com\r\nX-Note: a: b").expect("合法头部块");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["Host"], "example.com");
        assert_eq!(headers["X-Note"], "a: b");
    }

    #[test]
    fn first_occurrence_wins() {
        let headers = split_header_block("Host: a\r\nHost: b").expect("合法头部块");
        assert_eq!(headers["Host"], "a");
    }

    #[test]
    fn names_are_case_sensitive() {
        let headers = split_header_block("Host: a\r\nhost: b").expect("合法头部块");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["host"], "b");
    }

    #[test]
    fn value_is_not_trimmed() {
        let headers = split_header_block("X-Pad:  padded ").expect("合法头部块");
        assert_eq!(headers["X-Pad"], " padded ");
    }

    #[test]
    fn empty_value_is_allowed() {
        let headers = split_header_block("X-Empty: ").expect("合法头部块");
        assert_eq!(headers["X-Empty"], "");
    }

    #[test]
    fn line_without_separator_is_fatal() {
        assert_eq!(
            split_header_block("Host: a\r\nbroken"),
            Err(ParseError::InvalidHeaderLine)
        );
        assert_eq!(
            split_header_block("Host:a"),
            Err(ParseError::InvalidHeaderLine)
        );
    }
}
