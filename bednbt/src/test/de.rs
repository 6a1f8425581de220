use crate::{
    compound,
    de::{list_capacity, Decoder, MAX_DEPTH},
    error::ErrorKind,
    from_bytes, from_bytes_range, from_payload_bytes, list, to_bytes, ByteArray, Compound,
    IntArray, List, LongArray, Tag, Value,
};

use super::builder::Builder;

// Given a v: Value, a key: str, and a pattern, check the value is a compound
// with that key and its value matches the pattern. Optionally add a condition
// for the matched value.
macro_rules! assert_contains {
    ($v:ident, $key:expr, $p:pat) => {
        if let Value::Compound(v) = &$v {
            match v[$key] {
                $p => {}
                _ => panic!("expected Some({}), got {:?}", stringify!($p), v.get($key)),
            }
        } else {
            panic!("expected compound");
        }
    };
    ($v:ident, $key:expr, $p:pat, $check:expr) => {
        if let Value::Compound(v) = &$v {
            match v[$key] {
                $p => assert!($check),
                _ => panic!("expected Some({}), got {:?}", stringify!($p), v.get($key)),
            }
        } else {
            panic!("expected compound");
        }
    };
}

#[test]
fn distinguish_scalars() {
    let input = Builder::new()
        .start_root_compound()
        .byte("b", -123)
        .short("s", 1000)
        .int("i", -70_000)
        .long("l", 1 << 40)
        .float("f", 1.5)
        .double("d", -2.25)
        .end_compound()
        .build();

    let v = from_bytes(&input).unwrap();
    assert_contains!(v, "b", Value::Byte(-123));
    assert_contains!(v, "s", Value::Short(1000));
    assert_contains!(v, "i", Value::Int(-70_000));
    assert_contains!(v, "l", Value::Long(1_099_511_627_776));
    assert_contains!(v, "f", Value::Float(f), f == 1.5);
    assert_contains!(v, "d", Value::Double(d), d == -2.25);
}

#[test]
fn arrays() {
    let input = Builder::new()
        .start_root_compound()
        .byte_array("bytes", &[1, 2, 255])
        .int_array("ints", &[1, -1, i32::MAX])
        .long_array("longs", &[i64::MIN])
        .end_compound()
        .build();

    let v = from_bytes(&input).unwrap();
    let c = v.as_compound().unwrap();
    assert_eq!(c["bytes"], Value::ByteArray(ByteArray::new(vec![1, 2, 255])));
    assert_eq!(
        c["ints"],
        Value::IntArray(IntArray::new(vec![1, -1, i32::MAX]))
    );
    assert_eq!(c["longs"], Value::LongArray(LongArray::new(vec![i64::MIN])));
}

#[test]
fn strings() {
    let input = Builder::new()
        .start_root_compound()
        .string("empty", "")
        .string("unicode", "☃ snow")
        .end_compound()
        .build();

    let v = from_bytes(&input).unwrap();
    let c = v.as_compound().unwrap();
    assert_eq!(c["empty"], "");
    assert_eq!(c["unicode"], "☃ snow");
}

#[test]
fn round_trip_nested() {
    let tree = Value::Compound(
        compound! {
            "name": "level",
            "list": list![
                list![1_i8, 2_i8].unwrap(),
                list!["a", "b"].unwrap(),
                List::empty(),
            ].unwrap(),
            "inner": compound! {
                "deeper": compound! { "x": 1.0_f32 }.unwrap(),
                "longs": LongArray::new(vec![1, 2]),
            }.unwrap(),
        }
        .unwrap(),
    );

    let bs = to_bytes(&tree).unwrap();
    assert_eq!(from_bytes(&bs).unwrap(), tree);
}

#[test]
fn keeps_stream_order() {
    let input = Builder::new()
        .start_root_compound()
        .int("z", 1)
        .int("a", 2)
        .int("m", 3)
        .end_compound()
        .build();

    let v = from_bytes(&input).unwrap();
    let keys: Vec<_> = v.as_compound().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_key_fails() {
    let input = Builder::new()
        .start_root_compound()
        .int("a", 1)
        .int("a", 2)
        .end_compound()
        .build();

    let err = from_bytes(&input).unwrap_err();
    assert!(err.is_duplicate_key());
}

#[test]
fn duplicate_key_of_different_type_fails() {
    let input = Builder::new()
        .start_root_compound()
        .int("a", 1)
        .string("a", "x")
        .end_compound()
        .build();

    assert!(from_bytes(&input).unwrap_err().is_duplicate_key());
}

#[test]
fn truncated_int() {
    let input = Builder::new()
        .start_root_compound()
        .int("a", 1)
        .end_compound()
        .build();

    // Cut part way through the int payload.
    let err = from_bytes(&input[..input.len() - 3]).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn truncated_at_every_point() {
    let input = Builder::new()
        .start_root_compound()
        .string("name", "value")
        .start_list("list", Tag::Int, 2)
        .int_payload(1)
        .int_payload(2)
        .long("l", 9)
        .end_compound()
        .build();

    for end in 0..input.len() {
        let err = from_bytes(&input[..end]).unwrap_err();
        assert!(err.is_truncated(), "cut at {}: {}", end, err);
    }
    assert!(from_bytes(&input).is_ok());
}

#[test]
fn missing_end_tag_is_truncated() {
    let input = Builder::new().start_root_compound().byte("a", 1).build();
    assert!(from_bytes(&input).unwrap_err().is_truncated());
}

#[test]
fn unknown_tag_at_top() {
    let err = from_bytes(&[13]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownTag(13));
}

#[test]
fn unknown_tag_in_compound() {
    let input = Builder::new()
        .start_root_compound()
        .byte("a", 1)
        .raw_bytes(&[0xff])
        .name("b")
        .end_compound()
        .build();

    let err = from_bytes(&input).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownTag(0xff));
    assert!(err.to_string().contains("offset 6"), "{}", err);
}

#[test]
fn unknown_list_element_tag() {
    let input = Builder::new()
        .tag(Tag::List)
        .raw_bytes(&[20])
        .int_payload(1)
        .build();

    let err = from_bytes(&input).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownTag(20));
}

#[test]
fn invalid_utf8() {
    let input = Builder::new()
        .start_root_compound()
        .tag(Tag::String)
        .name("s")
        .raw_str_len(2)
        .raw_bytes(&[0xc3, 0x28])
        .end_compound()
        .build();

    let err = from_bytes(&input).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Encoding(vec![0xc3, 0x28]));
}

#[test]
fn invalid_utf8_key() {
    let input = Builder::new()
        .start_root_compound()
        .tag(Tag::Byte)
        .raw_str_len(1)
        .raw_bytes(&[0xff])
        .byte_payload(1)
        .end_compound()
        .build();

    assert!(matches!(
        from_bytes(&input).unwrap_err().kind(),
        ErrorKind::Encoding(_)
    ));
}

#[test]
fn empty_list_reads_no_further() {
    let mut input = Builder::new().start_anon_list(Tag::End, 0).build();
    input.push(0xff);

    let mut de = Decoder::new(&input);
    assert_eq!(de.decode_payload(Tag::List).unwrap(), Value::List(List::empty()));
    assert_eq!(de.position(), 5);
    assert_eq!(de.remaining(), 1);
}

#[test]
fn list_of_end_ignores_count() {
    let input = Builder::new().tag(Tag::List).start_anon_list(Tag::End, 3).build();
    let v = from_bytes(&input).unwrap();
    assert_eq!(v, Value::List(List::empty()));
}

#[test]
fn typed_empty_list_becomes_end_list() {
    let input = Builder::new().tag(Tag::List).start_anon_list(Tag::Int, 0).build();
    let v = from_bytes(&input).unwrap();
    assert_eq!(v.as_list().unwrap().element_tag(), Tag::End);
}

#[test]
fn list_of_lists() {
    let input = Builder::new()
        .tag(Tag::List)
        .start_anon_list(Tag::List, 2)
        .start_anon_list(Tag::Byte, 1)
        .byte_payload(7)
        .start_anon_list(Tag::String, 1)
        .string_payload("s")
        .build();

    let v = from_bytes(&input).unwrap();
    let outer = v.as_list().unwrap();
    assert_eq!(outer.element_tag(), Tag::List);
    assert_eq!(outer[0], Value::List(list![7_i8].unwrap()));
    assert_eq!(outer[1], Value::List(list!["s"].unwrap()));
}

#[test]
fn negative_array_length() {
    let input = Builder::new().tag(Tag::IntArray).int_payload(-1).build();
    assert!(from_bytes(&input).unwrap_err().is_range());
}

#[test]
fn negative_list_length() {
    let input = Builder::new()
        .tag(Tag::List)
        .start_anon_list(Tag::Byte, -5)
        .build();
    assert!(from_bytes(&input).unwrap_err().is_range());
}

#[test]
fn list_capacity_is_bounded() {
    assert_eq!(list_capacity(3, 100), 3);
    assert_eq!(list_capacity(i32::MAX as usize, 10), 10);
    assert!(list_capacity(i32::MAX as usize, 64 << 20) <= 1024);
}

#[test]
fn nested_huge_list_lengths() {
    let mut b = Builder::new().tag(Tag::List);
    for _ in 0..400 {
        b = b.start_anon_list(Tag::List, i32::MAX);
    }
    let mut input = b.build();
    input.resize(input.len() + (1 << 20), 0);

    // The zero padding reads as empty End lists until the input runs out.
    let err = from_bytes(&input).unwrap_err();
    assert!(err.is_truncated() || err.is_range(), "{}", err);
}

#[test]
fn huge_length_with_little_data() {
    let input = Builder::new()
        .tag(Tag::LongArray)
        .int_payload(i32::MAX)
        .long_payload(1)
        .build();
    assert!(from_bytes(&input).unwrap_err().is_truncated());
}

fn nested_lists(depth: usize) -> Vec<u8> {
    let mut b = Builder::new().tag(Tag::List);
    for _ in 0..depth {
        b = b.start_anon_list(Tag::List, 1);
    }
    b.start_anon_list(Tag::End, 0).build()
}

#[test]
fn moderate_nesting_is_fine() {
    assert!(from_bytes(&nested_lists(100)).is_ok());
    assert!(from_bytes(&nested_lists(MAX_DEPTH - 1)).is_ok());
}

#[test]
fn deep_nesting_fails() {
    let err = from_bytes(&nested_lists(MAX_DEPTH)).unwrap_err();
    assert!(err.is_range());
}

#[test]
fn deep_compound_nesting_fails() {
    let mut b = Builder::new().start_root_compound();
    for _ in 0..MAX_DEPTH + 10 {
        b = b.start_compound("c");
    }
    for _ in 0..MAX_DEPTH + 11 {
        b = b.end_compound();
    }

    assert!(from_bytes(&b.build()).unwrap_err().is_range());
}

#[test]
fn range_window() {
    let value = to_bytes(&Value::Int(42)).unwrap();
    let mut input = vec![0xee; 3];
    input.extend_from_slice(&value);
    input.extend_from_slice(&[0xee; 4]);

    let v = from_bytes_range(&input, 3, 3 + value.len()).unwrap();
    assert_eq!(v, Value::Int(42));
}

#[test]
fn range_window_bounds_reads() {
    let value = to_bytes(&Value::Int(42)).unwrap();
    let mut input = value.clone();
    input.extend_from_slice(&[0; 8]);

    // The buffer has plenty of bytes, but the window stops short.
    let err = from_bytes_range(&input, 0, value.len() - 1).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn range_window_outside_buffer() {
    assert!(from_bytes_range(&[3, 0, 0, 0, 0], 2, 10).unwrap_err().is_range());
    assert!(from_bytes_range(&[3, 0, 0, 0, 0], 4, 2).unwrap_err().is_range());
}

#[test]
fn trailing_bytes_left_alone() {
    let input = [1, 5, 0xaa, 0xbb];
    let mut de = Decoder::new(&input);
    assert_eq!(de.decode().unwrap(), Value::Byte(5));
    assert_eq!(de.remaining(), 2);
}

#[test]
fn payload_only() {
    assert_eq!(
        from_payload_bytes(&[0x39, 0x30], Tag::Short).unwrap(),
        Value::Short(12345)
    );

    let payload = Builder::new().byte("a", 1).end_compound().build();
    let v = from_payload_bytes(&payload, Tag::Compound).unwrap();
    assert_eq!(
        v,
        Value::Compound(Compound::from_entries(vec![("a", Value::Byte(1))]).unwrap())
    );
}

#[test]
fn lone_end_tag() {
    assert_eq!(from_bytes(&[0]).unwrap(), Value::End);
}

#[test]
fn decode_compound_body() {
    let body = Builder::new().int("GameType", 1).end_compound().build();
    let c = Decoder::new(&body).decode_compound().unwrap();
    assert_eq!(c["GameType"], Value::Int(1));
}
