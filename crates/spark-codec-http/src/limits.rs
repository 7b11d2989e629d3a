//! 解析容量上限配置。
//!
//! ## 模块目的（Why）
//! - 以单一 [`Limits`] 结构统一“定长缓冲”与“可增长缓冲”两种解析形态：必填上限约束
//!   请求行三个字段，可选上限约束头部块与 body，省略即表示仅受可用内存限制。
//! - 防止恶意输入无限制地占用内存，同时保留可增长实现的灵活性。
//!
//! ## 使用契约（What）
//! - [`Limits::default`]：方法/版本 32 字节，目标 2048 字节，头部块与 body 不设上限；
//! - [`Limits::bounded`]：复刻定长缓冲形态，头部块与 body 各 8192 字节；
//! - 启用 `config` 特性后，可通过 [`Limits::from_toml_str`] 从 TOML 片段加载，缺省键
//!   回落到默认值，未知键直接报错。

use serde::{Deserialize, Serialize};

/// 默认方法名上限。
pub const DEFAULT_MAX_METHOD_LEN: usize = 32;
/// 默认请求目标上限（解码前字节数）。
pub const DEFAULT_MAX_TARGET_LEN: usize = 2048;
/// 默认协议版本上限。
pub const DEFAULT_MAX_VERSION_LEN: usize = 32;
/// 定长形态下的头部块上限。
pub const BOUNDED_MAX_HEADER_BLOCK_LEN: usize = 8192;
/// 定长形态下的 body 上限。
pub const BOUNDED_MAX_BODY_LEN: usize = 8192;

/// 单次解析的容量上限。
///
/// # 教案式说明
/// - **意图 (Why)**：把容量策略从状态机中剥离，状态机只做“追加前检查”这一件事。
/// - **契约 (What)**：
///   - 所有上限均以字节计，字段长度恰好等于上限时合法，再多一个字节即失败；
///   - `max_header_block_len` 计入头部行之间保留的 `\r\n` 分隔符；
///   - `None` 表示不设上限。
/// - **设计权衡 (Trade-offs)**：结构为 `Copy`，可随 [`RequestParser`](crate::RequestParser)
///   在线程间自由复制，不引入共享状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// 方法名最大字节数。
    pub max_method_len: usize,
    /// 请求目标最大字节数，按解码前的原始 token 计算。
    pub max_target_len: usize,
    /// 协议版本最大字节数。
    pub max_version_len: usize,
    /// 原始头部块最大字节数。
    pub max_header_block_len: Option<usize>,
    /// body 最大字节数。
    pub max_body_len: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_method_len: DEFAULT_MAX_METHOD_LEN,
            max_target_len: DEFAULT_MAX_TARGET_LEN,
            max_version_len: DEFAULT_MAX_VERSION_LEN,
            max_header_block_len: None,
            max_body_len: None,
        }
    }
}

impl Limits {
    /// 定长缓冲形态：在默认值基础上为头部块与 body 设置 8192 字节上限。
    #[must_use]
    pub const fn bounded() -> Self {
        Self {
            max_method_len: DEFAULT_MAX_METHOD_LEN,
            max_target_len: DEFAULT_MAX_TARGET_LEN,
            max_version_len: DEFAULT_MAX_VERSION_LEN,
            max_header_block_len: Some(BOUNDED_MAX_HEADER_BLOCK_LEN),
            max_body_len: Some(BOUNDED_MAX_BODY_LEN),
        }
    }

    /// 设置方法名上限。
    #[must_use]
    pub const fn with_max_method_len(mut self, len: usize) -> Self {
        self.max_method_len = len;
        self
    }

    /// 设置请求目标上限。
    #[must_use]
    pub const fn with_max_target_len(mut self, len: usize) -> Self {
        self.max_target_len = len;
        self
    }

    /// 设置协议版本上限。
    #[must_use]
    pub const fn with_max_version_len(mut self, len: usize) -> Self {
        self.max_version_len = len;
        self
    }

    /// 设置头部块上限，`None` 取消限制。
    #[must_use]
    pub const fn with_max_header_block_len(mut self, len: Option<usize>) -> Self {
        self.max_header_block_len = len;
        self
    }

    /// 设置 body 上限，`None` 取消限制。
    #[must_use]
    pub const fn with_max_body_len(mut self, len: Option<usize>) -> Self {
        self.max_body_len = len;
        self
    }

    /// 从 TOML 文本加载上限配置。
    ///
    /// ### 契约说明（What）
    /// - **输入**：形如 `max_method_len = 16` 的顶层键值表，全部键可省略；
    /// - **返回**：缺省键取 [`Limits::default`] 的对应值；存在未知键或类型不符时返回
    ///   [`LimitsConfigError::Toml`]。
    #[cfg(feature = "config")]
    pub fn from_toml_str(text: &str) -> Result<Self, LimitsConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// 加载 [`Limits`] 配置时的错误。
#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
pub enum LimitsConfigError {
    /// TOML 语法错误、未知键或值类型不符。
    #[error("invalid limits configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
