//! 最小可运行示例：解析一条固定的示例请求并通过 `tracing` 输出各字段。
//!
//! # 使用方式 (How)
//! ```bash
//! RUST_LOG=debug cargo run -p spark-codec-http --example parse_sample
//! ```
//!
//! # 契约说明 (What)
//! - 仅依赖 crate 公开 API；
//! - 解析失败时记录 `describe_error` 给出的描述并以非零状态退出。

use spark_codec_http::{Limits, describe_error, parse_request};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "GET http://www.hatsunemiku.com/%E3%81%AF%E3%81%A4%E3%81%AD HTTP/1.1\r\n\
Host: www.example.com\r\n\
Content-Length: 11\r\n\
Accept-Encoding: utf-8\r\n\
\r\n\
Hello World";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let request = match parse_request(SAMPLE, &Limits::bounded()) {
        Ok(request) => request,
        Err(error) => {
            tracing::error!(code = error.code(), "{}", describe_error(error));
            std::process::exit(1);
        }
    };

    tracing::info!(method = %request.method, "method");
    tracing::info!(request_target = %request.target, "target");
    tracing::info!(version = %request.version, "version");
    for (name, value) in &request.headers {
        tracing::info!(%name, %value, "header");
    }
    tracing::info!(body = %String::from_utf8_lossy(&request.body), "body");
}
