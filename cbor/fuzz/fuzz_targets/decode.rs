#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = cbordiag::diag::Options {
        floats: data.first().is_some_and(|b| b & 1 == 1),
    };
    let lines = cbordiag::diag::annotate_with(data, options);
    assert!(data.is_empty() || !lines.is_empty());

    // <indent><HEX padded to COLUMN> # <annotation>
    for line in &lines {
        let body = line.trim_start_matches(' ');
        let indent = line.len() - body.len();
        assert_eq!(0, indent % cbordiag::format::INDENT.len(), "{line}");

        let (prefix, annotation) = body.split_once(" # ").expect(line);
        let hex = prefix.trim_end_matches(' ');
        assert!(!hex.is_empty() && hex.len() % 2 == 0, "{line}");
        assert!(
            hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')),
            "{line}"
        );
        assert!(prefix.len() >= cbordiag::format::COLUMN, "{line}");
        assert!(!annotation.is_empty(), "{line}");
    }
});
