//! 解析模块入口。
//!
//! ## 模块目标（Why）
//! - 提供完整请求解析、头部块拆分与百分号解码三类入口，三者可独立复用。
//!
//! ## 结构概览（What）
//! - [`parse_request`] / [`RequestParser`]：驱动 Method → Target → Version → Headers → Body
//!   状态机，返回 [`Request`](crate::types::Request)；
//! - [`split_header_block`]：将原始头部块拆分为头部映射；
//! - [`decode_percent_encoding`] / [`decode_percent_bytes`] / [`hex_digit`]：百分号解码。

mod headers;
mod percent;
mod request;

pub use headers::split_header_block;
pub use percent::{decode_percent_bytes, decode_percent_encoding, hex_digit};
pub use request::{RequestParser, parse_request};
