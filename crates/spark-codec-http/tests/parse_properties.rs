//! 请求解析性质验证
//!
//! # 教案级注释概览
//!
//! - **核心目标 (Why)**：用随机输入覆盖手写用例难以穷举的空间：任意字节都不会让解析器 panic，
//!   成功结果永远满足容量上限，合法请求写出后可原样解析回来。
//! - **设计手法 (How)**：`valid_request()` 只生成能被无损写回的请求（方法不含空格、版本不含
//!   `\r`、头部名不含 `": "`），其余性质直接喂入任意字节。
//!
//! # 合同与边界 (What)
//!
//! - 性质 1：任意字节输入，解析要么成功且各字段不超限，要么返回错误；
//! - 性质 2：`to_wire_bytes` 的输出解析后与原请求相等；
//! - 性质 3：任意字节经 `encode_percent` 编码后可被 `decode_percent_bytes` 还原；
//! - 性质 4：`hex_digit` 成功当且仅当字节为 ASCII 十六进制字符。

use proptest::prelude::*;
use spark_codec_http::{
    Limits, Request, decode_percent_bytes,
    fmt::{encode_percent, to_wire_bytes},
    hex_digit, parse_request,
};

fn small_limits() -> impl Strategy<Value = Limits> {
    (
        0usize..8,
        0usize..16,
        0usize..10,
        proptest::option::of(0usize..32),
        proptest::option::of(0usize..32),
    )
        .prop_map(|(method, target, version, headers, body)| Limits {
            max_method_len: method,
            max_target_len: target,
            max_version_len: version,
            max_header_block_len: headers,
            max_body_len: body,
        })
}

fn valid_request() -> impl Strategy<Value = Request> {
    (
        "[A-Z]{1,10}",
        "/\\PC{0,30}",
        "HTTP/1\\.[01]",
        proptest::collection::btree_map("[A-Za-z-]{1,12}", "[ -~]{0,20}", 0..6),
        proptest::collection::vec(any::<u8>(), 0..64),
    )
        .prop_map(|(method, target, version, headers, body)| Request {
            method,
            target,
            version,
            headers,
            body,
        })
}

proptest! {
    #[test]
    fn prop_arbitrary_bytes_respect_limits(
        input in proptest::collection::vec(any::<u8>(), 0..96),
        limits in small_limits(),
    ) {
        if let Ok(request) = parse_request(&input, &limits) {
            prop_assert!(request.method.len() <= limits.max_method_len);
            prop_assert!(request.target.len() <= limits.max_target_len);
            prop_assert!(request.version.len() <= limits.max_version_len);
            if let Some(max) = limits.max_body_len {
                prop_assert!(request.body.len() <= max);
            }
        }
    }

    #[test]
    fn prop_request_like_bytes_never_panic(
        line in "[A-Z]{0,4} [ -~]{0,8} HTTP/1\\.1(\r\n|\r|\n)",
        headers in "([ -~]{0,10}(\r\n|\r))*",
        body in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut input = format!("{line}{headers}\r\n").into_bytes();
        input.extend_from_slice(&body);
        let _ = parse_request(&input, &Limits::bounded());
    }

    #[test]
    fn prop_wire_bytes_round_trip(request in valid_request()) {
        let parsed = parse_request(to_wire_bytes(&request), &Limits::default());
        prop_assert_eq!(parsed, Ok(request));
    }

    #[test]
    fn prop_percent_encoding_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let encoded = encode_percent(&bytes);
        prop_assert_eq!(decode_percent_bytes(encoded.as_bytes()), Ok(bytes));
    }

    #[test]
    fn prop_hex_digit_matches_ascii_classification(byte in any::<u8>()) {
        prop_assert_eq!(hex_digit(byte).is_ok(), byte.is_ascii_hexdigit());
    }
}
