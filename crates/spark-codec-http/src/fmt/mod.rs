//! 请求序列化。
//!
//! ## 模块目标（Why）
//! - 将 [`Request`] 重新写回本 crate 可解析的报文格式，供代理回发、测试夹具与
//!   往返校验使用。
//!
//! ## 使用场景（What）
//! - [`write_request`]：写入任意 `fmt::Write`，要求 body 是 UTF-8 文本；
//! - [`to_wire_bytes`]：直接生成字节，二进制 body 原样保留；
//! - [`encode_percent`]：对目标做最小化百分号编码，保证空格、`%` 与非 ASCII 字节不会
//!   破坏请求行。
//!
//! ## 风险提示（Trade-offs）
//! - 不校验方法、版本与头部是否含有空格或 CRLF；这类 `Request` 写出后无法被原样解析回来。

use alloc::{string::String, vec::Vec};
use core::{fmt, str};

use crate::{error::FormatError, types::Request};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// 对字节做百分号编码。
///
/// `%`、空格、ASCII 控制字符、`DEL` 与全部非 ASCII 字节编码为大写 `%XX`，其余字节原样输出。
#[must_use]
pub fn encode_percent(input: &[u8]) -> String {
    let mut encoded = String::with_capacity(input.len());
    for &byte in input {
        if needs_escape(byte) {
            encoded.push('%');
            encoded.push(char::from(HEX_UPPER[usize::from(byte >> 4)]));
            encoded.push(char::from(HEX_UPPER[usize::from(byte & 0x0f)]));
        } else {
            encoded.push(char::from(byte));
        }
    }
    encoded
}

const fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'%' | b' ' | 0x00..=0x1f | 0x7f..=0xff)
}

/// 写出完整请求报文。
pub fn write_request<W: fmt::Write>(writer: &mut W, request: &Request) -> Result<(), FormatError> {
    let body = str::from_utf8(&request.body)?;
    write_head(writer, request)?;
    writer.write_str(body)?;
    Ok(())
}

/// 写出请求行（不含结尾 CRLF），目标经过 [`encode_percent`] 编码。
pub fn write_request_line<W: fmt::Write>(
    writer: &mut W,
    request: &Request,
) -> Result<(), FormatError> {
    writer.write_str(&request.method)?;
    writer.write_char(' ')?;
    writer.write_str(&encode_percent(request.target.as_bytes()))?;
    writer.write_char(' ')?;
    writer.write_str(&request.version)?;
    Ok(())
}

/// 生成完整报文字节。
#[must_use]
pub fn to_wire_bytes(request: &Request) -> Vec<u8> {
    let mut head = String::new();
    // 写入 String 不会失败。
    let _ = write_head(&mut head, request);
    let mut wire = head.into_bytes();
    wire.extend_from_slice(&request.body);
    wire
}

fn write_head<W: fmt::Write>(writer: &mut W, request: &Request) -> Result<(), FormatError> {
    write_request_line(writer, request)?;
    writer.write_str("\r\n")?;
    for (name, value) in &request.headers {
        writer.write_str(name)?;
        writer.write_str(": ")?;
        writer.write_str(value)?;
        writer.write_str("\r\n")?;
    }
    writer.write_str("\r\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Limits, parse_request};
    use alloc::borrow::ToOwned;

    fn sample() -> Request {
        let mut request = Request {
            method: "POST".to_owned(),
            target: "/a b/100%".to_owned(),
            version: "HTTP/1.1".to_owned(),
            body: b"hello".to_vec(),
            ..Request::default()
        };
        request.headers.insert("Host".to_owned(), "example.com".to_owned());
        request
    }

    #[test]
    fn encodes_reserved_and_non_ascii_bytes() {
        assert_eq!(encode_percent(b"/a b"), "/a%20b");
        assert_eq!(encode_percent(b"100%"), "100%25");
        assert_eq!(encode_percent("/\u{306f}".as_bytes()), "/%E3%81%AF");
        assert_eq!(encode_percent(b"/path?q=1&r=2"), "/path?q=1&r=2");
    }

    #[test]
    fn writes_request_text() {
        let mut out = String::new();
        write_request(&mut out, &sample()).expect("写入 String 不会失败");
        assert_eq!(
            out,
            "POST /a%20b/100%25 HTTP/1.1\r\nHost: example.com\r\n\r\nhello"
        );
    }

    #[test]
    fn binary_body_requires_byte_output() {
        let mut request = sample();
        request.body = alloc::vec![0xff, 0x00];
        let mut out = String::new();
        assert_eq!(
            write_request(&mut out, &request),
            Err(FormatError::NonUtf8Body)
        );
        assert!(to_wire_bytes(&request).ends_with(&[0xff, 0x00]));
    }

    #[test]
    fn wire_bytes_parse_back() {
        let request = sample();
        let parsed = parse_request(to_wire_bytes(&request), &Limits::default())
            .expect("序列化结果应可解析");
        assert_eq!(parsed, request);
    }

    #[test]
    fn request_without_headers_emits_blank_line() {
        let request = Request {
            method: "GET".to_owned(),
            target: "/".to_owned(),
            version: "HTTP/1.0".to_owned(),
            ..Request::default()
        };
        assert_eq!(to_wire_bytes(&request), b"GET / HTTP/1.0\r\n\r\n");
    }
}
