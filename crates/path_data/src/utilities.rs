use crate::byte_stream::{ByteStreamBuilder, PathByteStream};
use crate::consumer::PathConsumer;
use crate::error::{Error, ParseError, ParseStatus};
use crate::geometry::PathGeometryBuilder;
use crate::math::Point;
use crate::parser::parse_path;
use crate::path::Path;
use crate::segment::PathSegmentData;
use crate::serializer::PathStringBuilder;
use crate::string_source::{self, StringSource};
use crate::traversal::{TraversalMode, TraversalStateBuilder};

/// Parses path data into a `lyon_path::Path`.
///
/// Nothing is kept if the string contains an error.
pub fn build_path_from_string(src: &str) -> Result<Path, ParseError> {
    let mut builder = PathGeometryBuilder::new();
    parse_path(StringSource::new(src), &mut builder)?;

    Ok(builder.build())
}

pub fn build_path_from_byte_stream(stream: &PathByteStream) -> Result<Path, ParseError> {
    let mut builder = PathGeometryBuilder::new();
    parse_path(stream.source(), &mut builder)?;

    Ok(builder.build())
}

/// Parses path data into a byte stream.
///
/// Nothing is kept if the string contains an error, see
/// [`build_byte_stream_from_string_best_effort`](fn.build_byte_stream_from_string_best_effort.html).
pub fn build_byte_stream_from_string(src: &str) -> Result<PathByteStream, ParseError> {
    let mut builder = ByteStreamBuilder::new();
    parse_path(StringSource::new(src), &mut builder)?;

    Ok(builder.build())
}

/// Parses path data into a byte stream, keeping the segments that precede the
/// first error.
///
/// This is how browsers render invalid path data: everything up to the error is
/// drawn.
///
/// ```
/// use svg_path_data::*;
///
/// let (stream, error) = build_byte_stream_from_string_best_effort("M 0 0 L 10 0 L 5");
///
/// assert_eq!(stream.segment_count(), 2);
/// assert_eq!(error.unwrap().status, ParseStatus::ExpectedNumber);
/// ```
pub fn build_byte_stream_from_string_best_effort(src: &str) -> (PathByteStream, Option<ParseError>) {
    let mut builder = ByteStreamBuilder::new();
    let error = parse_path(StringSource::new(src), &mut builder).err();
    if let Some(error) = &error {
        log::warn!("Invalid path data: {}", error);
    }

    (builder.build(), error)
}

/// Serializes a byte stream in the SVG path syntax, preserving the exact
/// segment types.
pub fn build_string_from_byte_stream(stream: &PathByteStream) -> String {
    let mut builder = PathStringBuilder::new();
    if let Err(e) = parse_path(stream.source(), &mut builder) {
        log::error!("Failed to serialize path byte stream: {}", e);
    }

    builder.build()
}

pub fn build_byte_stream_from_segments(segments: &[PathSegmentData]) -> PathByteStream {
    let mut builder = ByteStreamBuilder::new();
    for segment in segments {
        builder.emit_segment(segment);
    }

    builder.build()
}

pub fn build_segments_from_byte_stream(stream: &PathByteStream) -> Vec<PathSegmentData> {
    stream.iter().collect()
}

fn traverse(
    stream: &PathByteStream,
    mode: TraversalMode,
    length: f32,
) -> Result<TraversalStateBuilder, Error> {
    let mut traversal = TraversalStateBuilder::new(mode, length);
    parse_path(stream.source(), &mut traversal)?;

    Ok(traversal)
}

/// Length of the path, curves are approximated with the default tolerance.
pub fn total_length(stream: &PathByteStream) -> Result<f32, Error> {
    Ok(traverse(stream, TraversalMode::TotalLength, 0.0)?.total_length())
}

/// The point at a distance `length` along the path.
///
/// Negative lengths are treated as zero and lengths past the end of the path
/// yield the end of the path.
pub fn point_at_length(stream: &PathByteStream, length: f32) -> Result<Point, Error> {
    Ok(traverse(stream, TraversalMode::PointAtLength, length)?.point())
}

/// The index of the segment at a distance `length` along the path.
pub fn segment_index_at_length(stream: &PathByteStream, length: f32) -> Result<usize, Error> {
    Ok(traverse(stream, TraversalMode::SegmentAtLength, length)?.segment_index())
}

/// Parses the value of a `pathLength` attribute.
///
/// ```
/// use svg_path_data::{parse_path_length, ParseStatus};
///
/// assert_eq!(parse_path_length(" 100 "), Ok(100.0));
/// assert_eq!(parse_path_length("-1").unwrap_err().status, ParseStatus::NegativeValue);
/// ```
pub fn parse_path_length(src: &str) -> Result<f32, ParseError> {
    let (value, locus) = string_source::parse_single_number(src)?;
    if value < 0.0 {
        return Err(ParseError::new(ParseStatus::NegativeValue, locus));
    }

    Ok(value)
}

#[cfg(test)]
use crate::math::point;

#[test]
fn empty_path_data() {
    let stream = build_byte_stream_from_string("").unwrap();
    assert!(stream.is_empty());
    assert!(build_path_from_string("").unwrap().iter().next().is_none());
    assert!(build_path_from_byte_stream(&stream).unwrap().iter().next().is_none());
    assert_eq!(build_string_from_byte_stream(&stream), "");
    assert_eq!(total_length(&stream), Ok(0.0));
    assert_eq!(point_at_length(&stream, 1.0), Ok(point(0.0, 0.0)));
    assert_eq!(segment_index_at_length(&stream, 1.0), Ok(0));
}

#[test]
fn strict_and_best_effort() {
    let src = "M 0 0 L 10 0 X";
    let err = build_byte_stream_from_string(src).unwrap_err();
    assert_eq!(err, ParseError::new(ParseStatus::ExpectedPathCommand, 13));
    assert!(build_path_from_string(src).is_err());

    let (stream, error) = build_byte_stream_from_string_best_effort(src);
    assert_eq!(error, Some(err));
    assert_eq!(build_string_from_byte_stream(&stream), "M 0 0 L 10 0");

    let (stream, error) = build_byte_stream_from_string_best_effort("M 1 1");
    assert_eq!(error, None);
    assert_eq!(stream.segment_count(), 1);
}

#[test]
fn segments_conversions() {
    let stream = build_byte_stream_from_string("M 1 2 c 1 2 3 4 5 6 Z").unwrap();
    let segments = build_segments_from_byte_stream(&stream);
    assert_eq!(segments.len(), 3);
    assert_eq!(build_byte_stream_from_segments(&segments), stream);
}

#[test]
fn lengths() {
    let stream = build_byte_stream_from_string("M 0 0 h 10 v 10 h -10").unwrap();
    assert_eq!(total_length(&stream), Ok(30.0));
    assert_eq!(point_at_length(&stream, 15.0), Ok(point(10.0, 5.0)));
    assert_eq!(point_at_length(&stream, -3.0), Ok(point(0.0, 0.0)));
    assert_eq!(point_at_length(&stream, 300.0), Ok(point(0.0, 10.0)));
    assert_eq!(segment_index_at_length(&stream, 15.0), Ok(2));
    assert_eq!(segment_index_at_length(&stream, 300.0), Ok(3));
}

#[test]
fn path_length_attribute() {
    assert_eq!(parse_path_length("0"), Ok(0.0));
    assert_eq!(parse_path_length("\t2.5e1\n"), Ok(25.0));
    assert_eq!(
        parse_path_length("  -1"),
        Err(ParseError::new(ParseStatus::NegativeValue, 2))
    );
    assert_eq!(
        parse_path_length("abc"),
        Err(ParseError::new(ParseStatus::ExpectedNumber, 0))
    );
}
