//! 请求解析状态机。
//!
//! ## 模块目的（Why）
//! - 将 `METHOD SP TARGET SP VERSION CRLF headers CRLF body` 形式的完整请求缓冲解析为
//!   [`Request`]，过程中执行容量上限、CRLF 严格性与百分号解码校验。
//!
//! ## 关键流程（How）
//! 1. 单一前向游标依次驱动 Method → Target → Version → Headers → Body 五个状态；
//! 2. 各状态只记录起始偏移，字段即输入中的一段连续切片，状态结束时才物化为
//!    `String`/`Vec<u8>`；
//! 3. Target → Version 迁移时对原始目标做百分号解码；
//! 4. 任一约束被违反立即返回错误，累积的切片随栈帧丢弃，不会泄露半成品。
//!
//! ## 风险提示（Trade-offs）
//! - 状态机不识别 `Content-Length`/`Transfer-Encoding`：剩余字节全部视为 body，
//!   报文分帧由调用方负责。

use alloc::{string::String, vec::Vec};
use core::str;

use crate::{error::ParseError, limits::Limits, types::Request};

use super::{decode_percent_bytes, split_header_block};

/// 状态机所处阶段，仅用于迁移跟踪与错误诊断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Method,
    Target,
    Version,
    Headers,
    Body,
}

impl ParseState {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Target => "target",
            Self::Version => "version",
            Self::Headers => "headers",
            Self::Body => "body",
        }
    }
}

/// 可复用的请求解析器。
///
/// ### 角色定位（Why）
/// - 持有一份 [`Limits`]，在多次解析之间复用同一套容量策略；自身不保存任何解析中间态，
///   每次 [`parse`](Self::parse) 都在栈上新建游标与累加器。
///
/// ### 契约说明（What）
/// - 实例为 `Copy + Send + Sync`，可在线程间自由复制；
/// - 对同一缓冲重复解析得到结构相等的 [`Request`]。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestParser {
    limits: Limits,
}

impl RequestParser {
    /// 以给定上限构造解析器。
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// 返回解析器使用的上限配置。
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// 解析一个完整缓冲的请求。
    ///
    /// ### 契约说明（What）
    /// - **输入**：完整请求字节，调用方已完成网络分帧，不存在跨多次读取的半包；
    /// - **返回**：成功时给出独立拥有所有权的 [`Request`]；失败时给出首个被违反约束对应的
    ///   [`ParseError`]；
    /// - **后置条件**：成功结果中各有界字段长度不超过 [`Limits`] 对应上限。
    pub fn parse(&self, buffer: impl AsRef<[u8]>) -> Result<Request, ParseError> {
        let mut machine = Machine::new(&self.limits, buffer.as_ref());
        match machine.run() {
            Ok(request) => {
                tracing::debug!(
                    method = %request.method,
                    request_target = %request.target,
                    headers = request.headers.len(),
                    body_len = request.body.len(),
                    "request parsed"
                );
                Ok(request)
            }
            Err(error) => {
                tracing::debug!(
                    code = error.code(),
                    state = machine.state.as_str(),
                    offset = machine.cursor,
                    "request rejected: {error}"
                );
                Err(error)
            }
        }
    }
}

/// 使用给定上限解析一个完整缓冲的请求。
///
/// 等价于 `RequestParser::new(*limits).parse(buffer)`。
pub fn parse_request(buffer: impl AsRef<[u8]>, limits: &Limits) -> Result<Request, ParseError> {
    RequestParser::new(*limits).parse(buffer)
}

/// 单次解析的游标与状态。
///
/// 生命周期严格限定在一次 [`RequestParser::parse`] 调用内。
struct Machine<'a> {
    limits: &'a Limits,
    input: &'a [u8],
    cursor: usize,
    state: ParseState,
}

impl<'a> Machine<'a> {
    fn new(limits: &'a Limits, input: &'a [u8]) -> Self {
        Self {
            limits,
            input,
            cursor: 0,
            state: ParseState::Method,
        }
    }

    fn run(&mut self) -> Result<Request, ParseError> {
        let method = self.lex_token(self.limits.max_method_len, ParseError::MethodTooLong)?;
        let method = utf8(method)?;
        self.enter(ParseState::Target);

        let raw_target = self.lex_token(self.limits.max_target_len, ParseError::TargetTooLong)?;
        let target = String::from_utf8(decode_percent_bytes(raw_target)?)
            .map_err(|_| ParseError::InvalidUtf8)?;
        self.enter(ParseState::Version);

        let version = utf8(self.lex_version()?)?;
        self.enter(ParseState::Headers);

        let headers = split_header_block(utf8(self.lex_header_block()?)?)?;
        self.enter(ParseState::Body);

        let body = self.collect_body()?;

        Ok(Request {
            method: String::from(method),
            target,
            version: String::from(version),
            headers,
            body,
        })
    }

    fn enter(&mut self, next: ParseState) {
        tracing::trace!(
            from = self.state.as_str(),
            to = next.as_str(),
            offset = self.cursor,
            "state transition"
        );
        self.state = next;
    }

    fn peek(&self) -> Result<u8, ParseError> {
        self.input
            .get(self.cursor)
            .copied()
            .ok_or(ParseError::UnexpectedEndOfInput)
    }

    /// 游标位于 `\r` 时校验其后紧跟 `\n`，不移动游标。
    fn expect_line_feed(&self) -> Result<(), ParseError> {
        match self.input.get(self.cursor + 1) {
            Some(b'\n') => Ok(()),
            Some(_) => Err(ParseError::InvalidCrlf),
            None => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    /// Method/Target 状态：读取到空格为止，空格本身被消费但不计入字段。
    fn lex_token(&mut self, max_len: usize, too_long: ParseError) -> Result<&'a [u8], ParseError> {
        let input = self.input;
        let start = self.cursor;
        loop {
            if self.peek()? == b' ' {
                let token = &input[start..self.cursor];
                self.cursor += 1;
                return Ok(token);
            }
            if self.cursor - start == max_len {
                return Err(too_long);
            }
            self.cursor += 1;
        }
    }

    /// Version 状态：读取到 `\r\n` 为止，两个字节都被消费。
    fn lex_version(&mut self) -> Result<&'a [u8], ParseError> {
        let input = self.input;
        let start = self.cursor;
        loop {
            if self.peek()? == b'\r' {
                self.expect_line_feed()?;
                let version = &input[start..self.cursor];
                self.cursor += 2;
                return Ok(version);
            }
            if self.cursor - start == self.limits.max_version_len {
                return Err(ParseError::VersionTooLong);
            }
            self.cursor += 1;
        }
    }

    /// Headers 状态：收集到空行为止，返回不含结尾空行的原始头部块。
    ///
    /// 行间的 `\r\n` 原样保留在块内，因此头部块恰好是输入中的一段连续切片。
    fn lex_header_block(&mut self) -> Result<&'a [u8], ParseError> {
        let input = self.input;
        let start = self.cursor;
        loop {
            if self.peek()? != b'\r' {
                self.reserve_header_bytes(start, 1)?;
                self.cursor += 1;
                continue;
            }
            self.expect_line_feed()?;
            let end = self.cursor;
            // 请求行的 CRLF 紧跟 CRLF：头部块为空。
            if end == start {
                self.cursor += 2;
                return Ok(&input[start..end]);
            }
            if input.get(end + 2..end + 4) == Some(b"\r\n".as_slice()) {
                self.cursor += 4;
                return Ok(&input[start..end]);
            }
            self.reserve_header_bytes(start, 2)?;
            self.cursor += 2;
        }
    }

    fn reserve_header_bytes(&self, start: usize, additional: usize) -> Result<(), ParseError> {
        let len = self.cursor - start + additional;
        match self.limits.max_header_block_len {
            Some(max) if len > max => Err(ParseError::HeadersTooLong),
            _ => Ok(()),
        }
    }

    /// Body 状态：剩余字节原样成为 body；输入耗尽即成功终止。
    fn collect_body(&mut self) -> Result<Vec<u8>, ParseError> {
        let input = self.input;
        let rest = &input[self.cursor..];
        if let Some(max) = self.limits.max_body_len {
            if rest.len() > max {
                self.cursor += max;
                return Err(ParseError::BodyTooLong);
            }
        }
        self.cursor = self.input.len();
        Ok(rest.to_vec())
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, ParseError> {
    str::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)
}
