use svg_path::animation::{add_byte_streams, blend_byte_streams, interpolate_path, AnimatedPath};
use svg_path::data::*;
use svg_path::math::point;

fn round_trip(src: &str) -> String {
    build_string_from_byte_stream(&build_byte_stream_from_string(src).unwrap())
}

const PATHS: &[&str] = &[
    "M 0 0 L 10 0 l 0 10 z",
    "M1,2,3,4",
    "m1 2 3 4 5 6z m 1 1",
    "M 0.6.5",
    "M1,1h2,3v-4-5",
    "M100,200 a3,4,5,006,7",
    "M-1e2+.5C1 2 3 4 5 6 7 8 9 10 11 12S1 2 3 4s5 6 7 8",
    "M 0 0 Q 1 1 2 0 T 4 0 t 2 0 q 1 1 2 0",
    "\t\nM 3 3 A 10 20 30 1 1 40 50 a 1 1 0 0 0 2 2 Z\r\n",
];

#[test]
fn string_round_trip_is_stable() {
    for src in PATHS {
        let once = round_trip(src);
        let twice = round_trip(&once);
        assert_eq!(once, twice, "{:?}", src);
    }
}

#[test]
fn implicit_move_to_repeat() {
    assert_eq!(round_trip("M1,2,3,4"), round_trip("M1,2 L3,4"));
    assert_eq!(round_trip("M1,2,3,4"), "M 1 2 L 3 4");
    assert_eq!(round_trip("m1,2,3,4"), "m 1 2 l 3 4");
}

#[test]
fn compact_syntax() {
    assert_eq!(round_trip("M 0.6.5"), "M 0.6 0.5");
    assert_eq!(round_trip("M1,1h2,3"), "M 1 1 h 2 h 3");
    assert_eq!(round_trip("M100,200 a3,4,5,006,7"), "M 100 200 a 3 4 5 0 0 6 7");
}

#[test]
fn error_loci() {
    assert_eq!(
        build_byte_stream_from_string("M 10 10 L100 "),
        Err(ParseError::new(ParseStatus::ExpectedNumber, 13))
    );
    assert_eq!(
        build_byte_stream_from_string(" 10 10"),
        Err(ParseError::new(ParseStatus::ExpectedMoveToCommand, 1))
    );
    assert_eq!(
        build_byte_stream_from_string("M0,0 A10,10 0 0,2 20,20"),
        Err(ParseError::new(ParseStatus::ExpectedArcFlag, 16))
    );
}

#[test]
fn self_blend_is_identity() {
    for src in PATHS {
        let stream = build_byte_stream_from_string(src).unwrap();
        for &progress in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(blend_byte_streams(&stream, &stream, progress).unwrap(), stream);
        }
    }
}

#[test]
fn addition_is_reversible() {
    let a = build_byte_stream_from_string("M 1 1 L 2 3 h 4 A 1 2 3 0 1 5 6").unwrap();
    let b = build_byte_stream_from_string("M 5 6 L 7 8 h 9 A 1 1 1 1 0 2 2").unwrap();
    let minus_b = build_byte_stream_from_string("M -5 -6 L -7 -8 h -9 A -1 -1 -1 1 0 -2 -2").unwrap();

    let sum = add_byte_streams(&a, &b, 1).unwrap();
    assert_ne!(sum, a);
    assert_eq!(add_byte_streams(&sum, &minus_b, 1).unwrap(), a);
}

#[test]
fn incompatible_blend() {
    let a = build_byte_stream_from_string("M 0 0 L 1 1 L 2 2").unwrap();
    let b = build_byte_stream_from_string("M 0 0 L 1 1 C 1 1 2 2 3 3").unwrap();

    assert_eq!(
        blend_byte_streams(&a, &b, 0.5),
        Err(Error::IncompatibleSegments {
            index: 2,
            from: PathSegmentType::LineToAbs,
            to: PathSegmentType::CurveToCubicAbs,
        })
    );
    assert_eq!(interpolate_path(&a, &b, 0.7), AnimatedPath::Discrete(b.clone()));
}

#[test]
fn empty_path_data() {
    let stream = build_byte_stream_from_string("").unwrap();
    assert!(stream.is_empty());

    let path = build_path_from_string("").unwrap();
    assert!(path.iter().next().is_none());

    assert_eq!(total_length(&stream), Ok(0.0));
}

#[test]
fn measurements_agree_with_geometry() {
    let stream = build_byte_stream_from_string("M 0 0 h 30 v 40 Z").unwrap();

    assert_eq!(total_length(&stream), Ok(120.0));
    assert_eq!(point_at_length(&stream, 50.0), Ok(point(30.0, 20.0)));
    assert_eq!(segment_index_at_length(&stream, 100.0), Ok(3));

    let path = build_path_from_byte_stream(&stream).unwrap();
    assert_eq!(path.iter().count(), 4);
}
