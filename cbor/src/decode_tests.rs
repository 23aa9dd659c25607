use super::decode::*;
use hex_literal::hex;

#[test]
fn header_classification() {
    assert_eq!(
        Header {
            major: Major::UnsignedInteger,
            info: 23
        },
        Header::from(0x17)
    );
    assert_eq!(Major::NegativeInteger, Major::from(0x38));
    assert_eq!(Major::Bytes, Major::from(0x42));
    assert_eq!(Major::Text, Major::from(0x7F));
    assert_eq!(Major::Array, Major::from(0x83));
    assert_eq!(Major::Map, Major::from(0xA2));
    assert_eq!(Major::Tag, Major::from(0xD8));
    assert_eq!(
        Header {
            major: Major::Simple,
            info: 31
        },
        Header::from(0xFF)
    );

    assert!(Major::Bytes.has_indefinite_form());
    assert!(Major::Map.has_indefinite_form());
    assert!(!Major::Tag.has_indefinite_form());
    assert!(!Major::UnsignedInteger.has_indefinite_form());
}

#[test]
fn argument_direct() {
    assert_eq!(Ok((0, 0)), read_argument(0, &[]));
    assert_eq!(Ok((23, 0)), read_argument(23, &[]));
    // Following bytes are not touched
    assert_eq!(Ok((5, 0)), read_argument(5, &hex!("ff")));
}

#[test]
fn argument_extended() {
    assert_eq!(Ok((42, 1)), read_argument(24, &hex!("2a")));
    assert_eq!(Ok((256, 2)), read_argument(25, &hex!("0100")));
    assert_eq!(Ok((1000, 2)), read_argument(25, &hex!("03e8")));
    assert_eq!(Ok((65536, 4)), read_argument(26, &hex!("00010000")));
    assert_eq!(Ok((1000000, 4)), read_argument(26, &hex!("000f4240")));
    assert_eq!(
        Ok((4294967296, 8)),
        read_argument(27, &hex!("0000000100000000"))
    );
    assert_eq!(
        Ok((18446744073709551615, 8)),
        read_argument(27, &hex!("ffffffffffffffff"))
    );
    // Trailing data is ignored
    assert_eq!(Ok((1, 1)), read_argument(24, &hex!("0102")));
}

#[test]
fn argument_truncated() {
    assert_eq!(Err(Error::TruncatedArgument(1)), read_argument(24, &[]));
    assert_eq!(Err(Error::TruncatedArgument(2)), read_argument(25, &hex!("01")));
    assert_eq!(
        Err(Error::TruncatedArgument(4)),
        read_argument(26, &hex!("00010000")[..3])
    );
    assert_eq!(
        Err(Error::TruncatedArgument(8)),
        read_argument(27, &hex!("00000001000000"))
    );
}

#[test]
fn argument_reserved() {
    assert_eq!(Err(Error::Reserved(28)), read_argument(28, &hex!("00")));
    assert_eq!(Err(Error::Reserved(29)), read_argument(29, &[]));
    assert_eq!(Err(Error::Reserved(30)), read_argument(30, &[]));
    assert_eq!(Err(Error::IndefiniteLength), read_argument(31, &[]));
}

#[test]
fn big_endian() {
    assert_eq!(Ok(0), read_be(&[], 0));
    assert_eq!(Ok(0x0102), read_be(&hex!("0102"), 2));
    assert_eq!(Ok(0x01020304), read_be(&hex!("0102030405"), 4));
    assert_eq!(Err(Error::TruncatedArgument(8)), read_be(&hex!("01"), 8));
}

#[test]
fn floats() {
    assert_eq!(Ok(None), read_float(20, &[]));
    assert_eq!(Ok(None), read_float(24, &hex!("ff")));
    assert_eq!(Ok(Some((0.0, 2))), read_float(25, &hex!("0000")));
    assert_eq!(Ok(Some((1.5, 2))), read_float(25, &hex!("3e00")));
    assert_eq!(Ok(Some((65504.0, 2))), read_float(25, &hex!("7bff")));
    assert_eq!(Ok(Some((-4.0, 2))), read_float(25, &hex!("c400")));
    assert_eq!(Ok(Some((100000.0, 4))), read_float(26, &hex!("47c35000")));
    assert_eq!(Ok(Some((1.1, 8))), read_float(27, &hex!("3ff199999999999a")));
    assert_eq!(
        Ok(Some((f64::INFINITY, 2))),
        read_float(25, &hex!("7c00"))
    );
    assert!(read_float(27, &hex!("7ff8000000000000")).unwrap().unwrap().0.is_nan());
    assert_eq!(Err(Error::TruncatedArgument(4)), read_float(26, &hex!("47c3")));
}

#[test]
fn error_text() {
    use alloc::string::ToString;

    assert_eq!(
        "truncated byte string (need 2 bytes)",
        Error::TruncatedBytes(2).to_string()
    );
    assert_eq!(
        "truncated text string (need 1 bytes)",
        Error::TruncatedText(1).to_string()
    );
    assert_eq!(
        "truncated argument (need 8 bytes)",
        Error::TruncatedArgument(8).to_string()
    );
    assert_eq!("truncated array", Error::TruncatedArray.to_string());
    assert_eq!("truncated map", Error::TruncatedMap.to_string());
    assert_eq!("reserved additional info 29", Error::Reserved(29).to_string());
    assert_eq!("nesting too deep", Error::MaxDepth.to_string());
    assert_eq!(
        "indefinite length not supported",
        Error::IndefiniteLength.to_string()
    );
}
