use super::*;

#[test]
fn integers_are_little_endian() {
    let bytes = [
        0x01, // u8
        0x34, 0x12, // u16
        0x78, 0x56, 0x34, 0x12, // u32
        0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, // u64
    ];
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(r.read_u8().unwrap(), 0x01);
    assert_eq!(r.read_u16().unwrap(), 0x1234);
    assert_eq!(r.read_u32().unwrap(), 0x1234_5678);
    assert_eq!(r.read_u64().unwrap(), 0x0102_0304_0506_0708);
    assert!(r.is_empty());
}

#[test]
fn truncated_integer_reports_offset_and_does_not_advance() {
    let bytes = [0xAA, 0x01, 0x02];
    let mut r = BinaryReader::new(&bytes);
    r.read_u8().unwrap();
    let err = r.read_u32().unwrap_err();
    assert_eq!(
        err,
        ReadError::Truncated {
            offset: 1,
            needed: 4,
            remaining: 2
        }
    );
    assert_eq!(r.position(), 1);
}

#[test]
fn absent_marker_is_empty_and_consumes_one_byte() {
    let bytes = [STRING_ABSENT, 0xFF];
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(r.read_domain_string().unwrap(), "");
    assert_eq!(r.position(), 1);
}

#[test]
fn present_marker_consumes_two_plus_length() {
    let mut bytes = vec![STRING_PRESENT, 5];
    bytes.extend_from_slice(b"hello");
    bytes.push(0x42);
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(r.read_domain_string().unwrap(), "hello");
    assert_eq!(r.position(), 2 + 5);
    assert_eq!(r.read_u8().unwrap(), 0x42);
}

#[test]
fn present_marker_with_zero_length_is_empty() {
    let bytes = [STRING_PRESENT, 0];
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(r.read_domain_string().unwrap(), "");
    assert_eq!(r.position(), 2);
}

#[test]
fn length_prefix_is_a_single_byte() {
    // 0x80 would start a multi-byte ULEB128; here it is a plain length of 128.
    let mut bytes = vec![STRING_PRESENT, 0x80];
    bytes.extend(std::iter::repeat_n(b'a', 128));
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(r.read_domain_string().unwrap().len(), 128);
    assert!(r.is_empty());
}

#[test]
fn any_other_marker_fails_immediately() {
    for marker in [0x01u8, 0x0A, 0x0C, 0xFF] {
        let bytes = [marker, 3, b'a', b'b', b'c'];
        let mut r = BinaryReader::new(&bytes);
        assert_eq!(
            r.read_domain_string().unwrap_err(),
            ReadError::InvalidMarker { offset: 0, marker }
        );
    }
}

#[test]
fn invalid_utf8_is_an_encoding_error() {
    let bytes = [STRING_PRESENT, 2, 0xC3, 0x28];
    let mut r = BinaryReader::new(&bytes);
    let err = r.read_domain_string().unwrap_err();
    assert!(matches!(err, ReadError::InvalidEncoding { offset: 2, .. }));
}

#[test]
fn string_payload_shorter_than_length_is_truncated() {
    let bytes = [STRING_PRESENT, 10, b'a', b'b'];
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(
        r.read_domain_string().unwrap_err(),
        ReadError::Truncated {
            offset: 2,
            needed: 10,
            remaining: 2
        }
    );
}

#[test]
fn read_bytes_exact() {
    let bytes = [1u8, 2, 3];
    let mut r = BinaryReader::new(&bytes);
    assert_eq!(r.read_bytes(0).unwrap(), &[] as &[u8]);
    assert_eq!(r.read_bytes(2).unwrap(), &[1, 2]);
    assert!(r.read_bytes(2).is_err());
    assert_eq!(r.read_bytes(1).unwrap(), &[3]);
}

#[test]
fn short_tail_leaves_cursor_in_place_for_every_width() {
    let bytes = [0x10, 0x20, 0x30];
    let mut r = BinaryReader::new(&bytes);
    r.read_u16().unwrap();
    assert!(matches!(
        r.read_u16(),
        Err(ReadError::Truncated { offset: 2, needed: 2, remaining: 1 })
    ));
    assert!(matches!(
        r.read_u64(),
        Err(ReadError::Truncated { offset: 2, needed: 8, remaining: 1 })
    ));
    assert_eq!(r.position(), 2);
    assert_eq!(r.read_u8().unwrap(), 0x30);
    assert_eq!(
        r.read_u8().unwrap_err(),
        ReadError::Truncated {
            offset: 3,
            needed: 1,
            remaining: 0
        }
    );
}
