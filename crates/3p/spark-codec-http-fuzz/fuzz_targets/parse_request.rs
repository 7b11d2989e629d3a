#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spark_codec_http::{Limits, parse_request};

/// Fuzz 用例：任意字节加上一组随机的容量上限。
///
/// - **Why**：上限与输入同时随机化，才能覆盖“恰好命中上限”与“越界一字节”的各种组合。
/// - **What**：成功时断言各字段不超限；失败路径只要求不 panic。
#[derive(Debug, Arbitrary)]
struct ParseCase {
    max_method_len: u8,
    max_target_len: u16,
    max_version_len: u8,
    max_header_block_len: Option<u16>,
    max_body_len: Option<u16>,
    input: Vec<u8>,
}

fuzz_target!(|case: ParseCase| {
    let limits = Limits {
        max_method_len: usize::from(case.max_method_len),
        max_target_len: usize::from(case.max_target_len),
        max_version_len: usize::from(case.max_version_len),
        max_header_block_len: case.max_header_block_len.map(usize::from),
        max_body_len: case.max_body_len.map(usize::from),
    };
    if let Ok(request) = parse_request(&case.input, &limits) {
        assert!(request.method.len() <= limits.max_method_len);
        assert!(request.target.len() <= limits.max_target_len);
        assert!(request.version.len() <= limits.max_version_len);
        if let Some(max) = limits.max_body_len {
            assert!(request.body.len() <= max);
        }
    }
});
