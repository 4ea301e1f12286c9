//! Integration tests for the value codec
//!
//! Exercises classification, display decoding and input encoding through
//! the `ValueCodec` facade, including randomized decode/encode round trips.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use valuehaus::prelude::*;

fn codec() -> ValueCodec {
    ValueCodec::default()
}

/// Feed a plain processed value back through the decoder, as the server would
fn round_trip(codec: &ValueCodec, decl: &TypeDecl, input: UserInput) -> String {
    let ProcessedValue::Plain { value } = codec.encode(decl, input).unwrap() else {
        panic!("expected a plain value for {}", decl.declaration());
    };
    codec.decode(decl, &RawValue::from(value)).unwrap()
}

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.random_range(1..40);
    (0..len)
        .map(|_| {
            // Mix ASCII with a few multi-byte characters
            match rng.random_range(0..10) {
                0 => 'é',
                1 => '测',
                _ => char::from(rng.random_range(b' '..=b'~')),
            }
        })
        .collect()
}

// ========================================
// Classification
// ========================================

#[test]
fn test_unknown_type_is_unsupported() {
    let err = codec().classify("foobar").unwrap_err();
    assert!(err.is_unsupported_type());
    assert!(matches!(
        err,
        ValuehausError::TypeMapping(TypeMappingError::UnsupportedType(name)) if name == "foobar"
    ));
}

#[test]
fn test_every_pure_type_has_a_category() {
    let codec = codec();
    for pure_type in PureType::ALL {
        let decl = codec.classify(pure_type.as_str()).unwrap();
        assert_eq!(decl.pure_type(), *pure_type);
        assert_eq!(decl.category(), pure_type.category());
    }
}

// ========================================
// Plain round trips
// ========================================

#[test]
fn test_string_round_trips() {
    let codec = codec();
    let mut rng = StdRng::seed_from_u64(7);
    for declaration in ["varchar(255)", "char(40)", "text", "longtext"] {
        let decl = codec.classify(declaration).unwrap();
        for _ in 0..200 {
            let value = random_text(&mut rng);
            assert_eq!(round_trip(&codec, &decl, value.clone().into()), value);
        }
    }
}

#[test]
fn test_numeric_round_trips() {
    let codec = codec();
    let mut rng = StdRng::seed_from_u64(11);
    let int = codec.classify("bigint").unwrap();
    let decimal = codec.classify("decimal(12,3)").unwrap();
    for _ in 0..200 {
        let number: i64 = rng.random();
        assert_eq!(round_trip(&codec, &int, number.into()), number.to_string());

        let text = format!("{}.{:03}", rng.random_range(-99_999..99_999), rng.random_range(0..1000));
        assert_eq!(round_trip(&codec, &decimal, text.clone().into()), text);
    }
}

#[test]
fn test_enum_and_set_round_trips() {
    let codec = codec();
    let set = codec.classify("set('a','b','c')").unwrap();
    assert_eq!(set.options(), ["a", "b", "c"]);

    assert_eq!(codec.decode(&set, &"a,c".into()).unwrap(), "a,c");
    let selection = UserInput::Selection(vec!["a".to_string(), "c".to_string()]);
    assert_eq!(
        codec.encode(&set, selection).unwrap(),
        ProcessedValue::Plain {
            value: PlainValue::Text("a,c".to_string())
        }
    );

    let choice = codec.classify("enum('small','medium','large')").unwrap();
    for option in choice.options().to_vec() {
        assert_eq!(round_trip(&codec, &choice, option.clone().into()), option);
    }
}

// ========================================
// Bit fields and binary strings
// ========================================

#[test]
fn test_bit_field_both_directions() {
    let codec = codec();
    let decl = codec.classify("bit(8)").unwrap();
    assert_eq!(
        codec.decode(&decl, &RawValue::Bytes(vec![0b0000_0101])).unwrap(),
        "00000101"
    );
    assert_eq!(
        codec.encode(&decl, "00000101".into()).unwrap(),
        ProcessedValue::Buffer { bytes: vec![5] }
    );
}

#[test]
fn test_random_bit_fields_round_trip() {
    let codec = codec();
    let mut rng = StdRng::seed_from_u64(3);
    for width in [1u32, 7, 8, 12, 16, 33, 64] {
        let decl = codec.classify(&format!("bit({})", width)).unwrap();
        let byte_count = width.div_ceil(8) as usize;
        for _ in 0..50 {
            let mut bytes: Vec<u8> = (0..byte_count).map(|_| rng.random()).collect();
            // Keep the value within the declared width
            let spare = byte_count as u32 * 8 - width;
            bytes[0] &= 0xffu8 >> spare;

            let shown = codec.decode(&decl, &RawValue::Bytes(bytes.clone())).unwrap();
            assert_eq!(shown.len(), width as usize);
            assert_eq!(
                codec.encode(&decl, shown.into()).unwrap(),
                ProcessedValue::Buffer { bytes }
            );
        }
    }
}

#[test]
fn test_bit_length_must_be_positive_integer() {
    assert!(matches!(
        bit_string_to_bytes("1", 0),
        Err(ByteCodecError::InvalidBitLength(_))
    ));
    assert!(matches!(
        bit_string_to_bytes("1", 1.5),
        Err(ByteCodecError::InvalidBitLength(_))
    ));
    let err: ValuehausError = bit_string_to_bytes("1", -1i64).unwrap_err().into();
    assert!(err.is_invalid_bit_length());
}

#[test]
fn test_fixed_binary_is_trimmed() {
    let codec = codec();
    assert_eq!(
        codec
            .decode_column("binary(5)", &RawValue::Bytes(vec![72, 101, 121, 0, 0]))
            .unwrap()
            .unwrap(),
        "Hey"
    );
}

#[test]
fn test_blob_summary() {
    let codec = codec();
    let shown = codec
        .decode_column("mediumblob", &RawValue::Bytes(vec![7; 4096]))
        .unwrap()
        .unwrap();
    assert_eq!(shown, "(BLOB) 4096 bytes");
}

// ========================================
// JSON and temporal
// ========================================

#[test]
fn test_json_is_rendered_compactly() {
    let codec = codec();
    assert_eq!(
        codec.decode_column("json", &json!({"a": 1}).into()).unwrap().unwrap(),
        r#"{"a":1}"#
    );
    assert_eq!(
        codec.encode_column("json", r#"{"a":1}"#.into()).unwrap(),
        ProcessedValue::Json {
            text: r#"{"a":1}"#.to_string()
        }
    );
}

#[test]
fn test_time_decodes_through_anchor_date() {
    assert_eq!(
        codec().decode_column("time", &"13:45:00".into()).unwrap().unwrap(),
        "13:45:00"
    );
}

#[test]
fn test_datetime_encode_decode_converges() {
    let codec = codec();
    let decl = codec.classify("datetime").unwrap();
    let ProcessedValue::Plain {
        value: PlainValue::Text(stored),
    } = codec.encode(&decl, "2024-06-01T12:30:45.678Z".into()).unwrap()
    else {
        panic!("expected text");
    };
    assert_eq!(stored, "2024-06-01 12:30:45");

    let shown = codec.decode(&decl, &stored.clone().into()).unwrap();
    assert_eq!(shown, "2024-06-01 12:30:45+00:00");

    let ProcessedValue::Plain {
        value: PlainValue::Text(again),
    } = codec.encode(&decl, shown.into()).unwrap()
    else {
        panic!("expected text");
    };
    assert_eq!(again, stored);
}

// ========================================
// Geometry
// ========================================

#[test]
fn test_point_to_wkt() {
    let codec = codec();
    let point = GeometryNode::Point { coordinates: [1.0, 2.0] };
    assert_eq!(
        codec.decode_column("point", &point.clone().into()).unwrap().unwrap(),
        "POINT(1 2)"
    );
    assert_eq!(
        codec.encode_column("point", point.into()).unwrap(),
        ProcessedValue::Spatial {
            wkt: "POINT(1 2)".to_string()
        }
    );
}

#[test]
fn test_multipolygon_keeps_coordinate_order() {
    let codec = codec();
    let raw = json!({
        "type": "MultiPolygon",
        "coordinates": [
            [[[10, 10], [20, 10], [20, 20], [10, 10]]],
            [[[0, 0], [5, 0], [5, 5], [0, 0]], [[1, 1], [2, 1], [2, 2], [1, 1]]]
        ]
    });
    let expected =
        "MULTIPOLYGON(((10 10,20 10,20 20,10 10)),((0 0,5 0,5 5,0 0),(1 1,2 1,2 2,1 1)))";

    let shown = codec.decode_column("multipolygon", &raw.clone().into()).unwrap().unwrap();
    assert_eq!(shown, expected);

    let node = GeometryNode::from_geojson(&raw).unwrap();
    assert_eq!(
        codec.encode_column("multipolygon", node.into()).unwrap(),
        ProcessedValue::Spatial {
            wkt: expected.to_string()
        }
    );
}

#[test]
fn test_unknown_geometry_shape() {
    let codec = codec();
    assert_eq!(
        codec
            .decode_column("geometry", &json!({"type": "Triangle", "coordinates": []}).into())
            .unwrap(),
        None
    );
    let err = GeometryNode::from_geojson(&json!({"type": "Triangle", "coordinates": []}))
        .unwrap_err();
    assert_eq!(err, GeometryError::UnknownSpatialType("Triangle".to_string()));
}

#[test]
fn test_null_versus_absent() {
    let codec = codec();
    let decl = codec.classify("varchar(10)").unwrap();
    assert!(codec.encode(&decl, UserInput::Absent).unwrap().is_null());
    assert_eq!(codec.decode(&decl, &RawValue::Null).unwrap(), "");
}
