//! 错误类型模块。
//!
//! ## 模块目的（Why）
//! - 将请求解析、百分号解码与序列化阶段的失败分门别类，调用方可通过模式匹配决定
//!   回复 4xx 还是直接断开连接。
//! - 统一错误文案：[`describe_error`] 与 `Display` 输出同一份稳定描述，日志与诊断共用。
//!
//! ## 使用契约（What）
//! - 解析 API 返回 [`ParseError`]；独立的百分号解码 API 返回 [`DecodeError`]；
//!   序列化 API 返回 [`FormatError`]。
//! - 所有枚举均为 `Copy`，不携带对输入缓冲的引用，可跨线程复制进日志。
//! - [`ParseError::code`] 给出点分格式的稳定错误码（如 `http.parse.method_too_long`），
//!   适合作为指标维度或告警键。
//!
//! ## 实现策略（How）
//! - 启用 `std` 时派生 [`thiserror::Error`]；`no_std` 下手写 `Display`，文案与
//!   `#[error]` 保持逐字一致。
//! - [`DecodeError`] 通过 `From` 提升为 [`ParseError`]，解析状态机内部可直接使用 `?`。

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// 请求解析阶段可能出现的错误。
///
/// # 教案式说明
/// - **意图 (Why)**：每个变体对应状态机中一条明确的违约路径，首个违约即终止解析，
///   不做重同步，也不返回半成品请求。
/// - **契约 (What)**：
///   - `*TooLong` 系列表示对应字段超出 [`Limits`](crate::Limits) 上限；
///   - `InvalidCrlf` 表示 `\r` 后未紧跟 `\n`；
///   - `UnexpectedEndOfInput` 表示输入在进入 body 状态前耗尽。
/// - **设计权衡 (Trade-offs)**：变体不携带偏移量，保持 `Copy` 与零分配；定位信息通过
///   `tracing` 事件的 `offset` 字段输出。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// 方法名超过 `max_method_len`。
    #[cfg_attr(feature = "std", error("method too long"))]
    MethodTooLong,
    /// 请求目标（解码前）超过 `max_target_len`。
    #[cfg_attr(feature = "std", error("target too long"))]
    TargetTooLong,
    /// 协议版本超过 `max_version_len`。
    #[cfg_attr(feature = "std", error("version too long"))]
    VersionTooLong,
    /// 原始头部块超过 `max_header_block_len`。
    #[cfg_attr(feature = "std", error("headers too long"))]
    HeadersTooLong,
    /// body 超过 `max_body_len`。
    #[cfg_attr(feature = "std", error("body too long"))]
    BodyTooLong,
    /// `\r` 之后没有紧跟 `\n`。
    #[cfg_attr(feature = "std", error("invalid crlf"))]
    InvalidCrlf,
    /// 请求目标中的 `%XX` 序列不完整或含非十六进制字符。
    #[cfg_attr(feature = "std", error("invalid percent encoding"))]
    InvalidPercentEncoding,
    /// 单个字符不是十六进制数字。
    #[cfg_attr(feature = "std", error("invalid hex digit"))]
    InvalidHexDigit,
    /// 头部行缺少 `": "` 分隔符。
    #[cfg_attr(feature = "std", error("invalid header line"))]
    InvalidHeaderLine,
    /// 请求行、头部或解码后的目标不是合法 UTF-8 文本。
    #[cfg_attr(feature = "std", error("invalid utf-8 text"))]
    InvalidUtf8,
    /// 在到达 body 之前输入已耗尽。
    #[cfg_attr(feature = "std", error("unexpected end of input"))]
    UnexpectedEndOfInput,
}

impl ParseError {
    /// 返回稳定的人类可读描述，与 `Display` 输出一致。
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MethodTooLong => "method too long",
            Self::TargetTooLong => "target too long",
            Self::VersionTooLong => "version too long",
            Self::HeadersTooLong => "headers too long",
            Self::BodyTooLong => "body too long",
            Self::InvalidCrlf => "invalid crlf",
            Self::InvalidPercentEncoding => "invalid percent encoding",
            Self::InvalidHexDigit => "invalid hex digit",
            Self::InvalidHeaderLine => "invalid header line",
            Self::InvalidUtf8 => "invalid utf-8 text",
            Self::UnexpectedEndOfInput => "unexpected end of input",
        }
    }

    /// 返回点分格式的稳定错误码。
    ///
    /// - **意图 (Why)**：文案可能随排障需要调整，错误码则作为指标标签长期保持不变。
    /// - **契约 (What)**：统一以 `http.parse.` 为前缀，后缀为变体名的 snake_case。
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MethodTooLong => "http.parse.method_too_long",
            Self::TargetTooLong => "http.parse.target_too_long",
            Self::VersionTooLong => "http.parse.version_too_long",
            Self::HeadersTooLong => "http.parse.headers_too_long",
            Self::BodyTooLong => "http.parse.body_too_long",
            Self::InvalidCrlf => "http.parse.invalid_crlf",
            Self::InvalidPercentEncoding => "http.parse.invalid_percent_encoding",
            Self::InvalidHexDigit => "http.parse.invalid_hex_digit",
            Self::InvalidHeaderLine => "http.parse.invalid_header_line",
            Self::InvalidUtf8 => "http.parse.invalid_utf8",
            Self::UnexpectedEndOfInput => "http.parse.unexpected_eof",
        }
    }
}

/// 将解析错误映射为稳定描述，供日志与诊断使用。
///
/// 该描述不属于协议的一部分，仅作说明用途；需要机器可读的键时请使用
/// [`ParseError::code`]。
#[must_use]
pub const fn describe_error(error: ParseError) -> &'static str {
    error.as_str()
}

#[cfg(not(feature = "std"))]
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 百分号解码阶段的错误。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// `%` 之后不足两个字符，或其后字符不是十六进制数字。
    #[cfg_attr(feature = "std", error("invalid percent encoding"))]
    InvalidPercentEncoding,
    /// 单个字符不在 `0-9`、`a-f`、`A-F` 范围内。
    #[cfg_attr(feature = "std", error("invalid hex digit"))]
    InvalidHexDigit,
    /// 解码结果不是合法 UTF-8，无法作为文本返回。
    #[cfg_attr(feature = "std", error("invalid utf-8 text"))]
    InvalidUtf8,
}

#[cfg(not(feature = "std"))]
impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ParseError::from(*self).as_str())
    }
}

impl From<DecodeError> for ParseError {
    fn from(value: DecodeError) -> Self {
        match value {
            DecodeError::InvalidPercentEncoding => Self::InvalidPercentEncoding,
            DecodeError::InvalidHexDigit => Self::InvalidHexDigit,
            DecodeError::InvalidUtf8 => Self::InvalidUtf8,
        }
    }
}

/// 请求序列化阶段的错误。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// 底层 `fmt::Write` 写入失败。
    #[cfg_attr(feature = "std", error("writer returned an error"))]
    Io,
    /// body 不是 UTF-8，文本写入器无法承载；改用 `to_wire_bytes`。
    #[cfg_attr(feature = "std", error("body is not utf-8 text"))]
    NonUtf8Body,
}

#[cfg(not(feature = "std"))]
impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => f.write_str("writer returned an error"),
            Self::NonUtf8Body => f.write_str("body is not utf-8 text"),
        }
    }
}

impl From<core::fmt::Error> for FormatError {
    fn from(_: core::fmt::Error) -> Self {
        Self::Io
    }
}

impl From<core::str::Utf8Error> for FormatError {
    fn from(_: core::str::Utf8Error) -> Self {
        Self::NonUtf8Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ParseError; 11] = [
        ParseError::MethodTooLong,
        ParseError::TargetTooLong,
        ParseError::VersionTooLong,
        ParseError::HeadersTooLong,
        ParseError::BodyTooLong,
        ParseError::InvalidCrlf,
        ParseError::InvalidPercentEncoding,
        ParseError::InvalidHexDigit,
        ParseError::InvalidHeaderLine,
        ParseError::InvalidUtf8,
        ParseError::UnexpectedEndOfInput,
    ];

    /// `Display` 与 `describe_error` 必须逐字一致，否则日志与诊断页面会出现两套文案。
    #[test]
    fn display_matches_description() {
        for error in ALL {
            assert_eq!(alloc::format!("{error}"), describe_error(error));
        }
    }

    #[test]
    fn codes_are_unique_and_prefixed() {
        let mut codes: alloc::vec::Vec<_> = ALL.iter().map(|e| e.code()).collect();
        assert!(codes.iter().all(|code| code.starts_with("http.parse.")));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len(), "错误码不得重复");
    }

    #[test]
    fn decode_errors_lift_into_parse_errors() {
        assert_eq!(
            ParseError::from(DecodeError::InvalidPercentEncoding),
            ParseError::InvalidPercentEncoding
        );
        assert_eq!(
            ParseError::from(DecodeError::InvalidHexDigit),
            ParseError::InvalidHexDigit
        );
        assert_eq!(ParseError::from(DecodeError::InvalidUtf8), ParseError::InvalidUtf8);
    }
}
