#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # spark-codec-http
//!
//! ## 教案目的（Why）
//! - **定位**：将一块完整缓冲的 HTTP/1.x 文本请求解析为结构化的 [`Request`]：方法、
//!   已解码目标、协议版本、头部映射与原始 body。
//! - **架构角色**：解析器从不触碰传输层，调用方负责网络分帧、分块解码与连接管理，
//!   本 crate 只对交到手上的字节下结论。
//!
//! ## 交互契约（What）
//! - **输入前提**：`METHOD SP TARGET SP VERSION CRLF`、若干 `Name: value CRLF` 头部行、
//!   空行、body；整包一次性给出，不支持跨多次读取的半包。
//! - **输出能力**：
//!   - [`parse_request`] / [`RequestParser`]：完整请求解析；
//!   - [`decode_percent_encoding`]：独立的百分号解码；
//!   - [`describe_error`]：稳定的错误描述；
//!   - [`fmt::write_request`] / [`fmt::to_wire_bytes`]：把 [`Request`] 写回报文。
//! - **后置条件**：解析失败不会产出任何半填充的 [`Request`]；成功结果中各有界字段不超过
//!   [`Limits`] 对应上限。
//!
//! ## 实现策略（How）
//! - **模块划分**：
//!   1. `types`：请求与头部映射；
//!   2. `limits`：容量上限配置，可选从 TOML 加载；
//!   3. `parse`：状态机、头部拆分与百分号解码；
//!   4. `fmt`：序列化；
//!   5. `error`：错误分类与稳定描述。
//! - **关键技巧**：单一前向游标配合显式长度，不依赖 NUL 结尾；字段以输入切片的形式累积，
//!   状态结束时才物化。
//!
//! ## 风险提示（Trade-offs）
//! - **功能边界**：不支持分块传输编码、头部折行与 HTTP/2；重复头部仅保留首次出现的值。
//! - **并发**：无全局可变状态，不同线程可并发解析不同缓冲而无需同步。

extern crate alloc;

pub mod error;
pub mod fmt;
pub mod limits;
pub mod parse;
pub mod types;

pub use crate::error::{DecodeError, FormatError, ParseError, describe_error};
#[cfg(feature = "config")]
pub use crate::limits::LimitsConfigError;
pub use crate::limits::Limits;
pub use crate::parse::{
    RequestParser, decode_percent_bytes, decode_percent_encoding, hex_digit, parse_request,
    split_header_block,
};
pub use crate::types::{HeaderMap, Request};
