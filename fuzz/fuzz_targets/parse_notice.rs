#![no_main]

use libfuzzer_sys::fuzz_target;
use sudoc_notice::{parse_notice_lenient, should_exclude, NoticeConfig, RawRecord};

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    let config = NoticeConfig::default();

    // Must not panic on any document.
    let notice = parse_notice_lenient("fuzz", xml, &config);
    let _ = notice.to_json_string();
    if let Ok(record) = RawRecord::from_xml(xml) {
        let _ = should_exclude(&record, &config);
    }
});
