#![no_main]

use libfuzzer_sys::fuzz_target;
use spark_codec_http::{Limits, fmt::to_wire_bytes, parse_request};

// 差分入口：凡是能成功解析的输入，写回报文后再次解析必须得到相同结果。
//
// - **Why**：`fmt` 与 `parse` 是两套独立实现，差分比较能暴露编码遗漏（例如目标中的空格或 `%`）。
// - **What**：上限全部放开，避免写回后因目标重新编码变长而误报 `TargetTooLong`。
fuzz_target!(|data: &[u8]| {
    let limits = Limits::default().with_max_target_len(usize::MAX);
    if let Ok(request) = parse_request(data, &limits) {
        let reparsed = parse_request(to_wire_bytes(&request), &limits);
        assert_eq!(reparsed, Ok(request));
    }
});
