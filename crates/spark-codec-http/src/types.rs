//! 基础类型定义模块。
//!
//! ## 模块目标（Why）
//! - 为解析与序列化提供统一的数据模型：一次解析产出一个独立拥有所有权的 [`Request`]。
//!
//! ## 结构概览（What）
//! - [`Request`]：方法、已解码目标、协议版本、头部映射与原始 body；
//! - [`HeaderMap`]：头部名到头部值的映射，名称大小写敏感，迭代顺序无语义。
//!
//! ## 风险与扩展（Trade-offs）
//! - 字段持有 `String`/`Vec<u8>` 而非输入切片：解析器需要对目标做解码、对头部块做
//!   拼接，零拷贝收益有限，独立所有权换来“解析返回后与输入缓冲解耦”的简单语义。

use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// 头部映射：名称大小写敏感，重复名称仅保留首次出现的值。
pub type HeaderMap = BTreeMap<String, String>;

/// 解析结果。
///
/// # 教案式说明
/// - **契约 (What)**：
///   - `target` 永远是百分号解码后的形式；
///   - 各有界字段长度不超过解析时所用 [`Limits`](crate::Limits) 的对应上限；
///   - 解析失败时不会产生任何 `Request`，调用方不可能观察到半填充状态。
/// - **生命周期 (How)**：由状态机在一次遍历中逐字段单调填充，解析返回后不再被修改，
///   多次解析之间不共享任何可变状态。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// 请求方法，例如 `GET`。
    pub method: String,
    /// 已解码的请求目标。
    pub target: String,
    /// 协议版本，例如 `HTTP/1.1`。
    pub version: String,
    /// 头部映射。
    pub headers: HeaderMap,
    /// 原始 body 字节，内嵌 NUL 视作普通数据。
    pub body: Vec<u8>,
}

impl Request {
    /// 按名称（大小写敏感）查询头部值。
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// 若 body 是合法 UTF-8，则以文本形式返回。
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }
}
