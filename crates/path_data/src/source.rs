//! Producers of path segments.
//!
//! A `PathSource` is a pull-based cursor: `has_more_data` looks ahead without
//! consuming anything, `parse_segment` consumes exactly one segment.
//!
//! Implementations:
//!
//! - [`StringSource`](../string_source/struct.StringSource.html) reads the SVG path syntax,
//! - [`ByteStreamSource`](../byte_stream/struct.ByteStreamSource.html) reads a
//!   [`PathByteStream`](../byte_stream/struct.PathByteStream.html),
//! - [`SegmentListSource`](struct.SegmentListSource.html) reads a slice of segments.

use crate::error::ParseError;
use crate::segment::PathSegmentData;

/// A cursor over a sequence of path segments.
pub trait PathSource {
    /// Returns true if `parse_segment` can be called.
    fn has_more_data(&self) -> bool;

    /// Consumes and returns the next segment.
    ///
    /// Must only be called if `has_more_data` returns true.
    fn parse_segment(&mut self) -> Result<PathSegmentData, ParseError>;
}

impl<'l, S: PathSource> PathSource for &'l mut S {
    #[inline]
    fn has_more_data(&self) -> bool {
        (**self).has_more_data()
    }

    #[inline]
    fn parse_segment(&mut self) -> Result<PathSegmentData, ParseError> {
        (**self).parse_segment()
    }
}

/// Reads segments from a slice.
#[derive(Clone, Debug)]
pub struct SegmentListSource<'l> {
    segments: &'l [PathSegmentData],
    position: usize,
}

impl<'l> SegmentListSource<'l> {
    pub fn new(segments: &'l [PathSegmentData]) -> Self {
        SegmentListSource {
            segments,
            position: 0,
        }
    }
}

impl<'l> PathSource for SegmentListSource<'l> {
    #[inline]
    fn has_more_data(&self) -> bool {
        self.position < self.segments.len()
    }

    #[inline]
    fn parse_segment(&mut self) -> Result<PathSegmentData, ParseError> {
        debug_assert!(self.has_more_data());
        let segment = self.segments[self.position];
        self.position += 1;

        Ok(segment)
    }
}

#[test]
fn segment_list_source() {
    use crate::math::point;

    let segments = [
        PathSegmentData::move_to(point(1.0, 2.0)),
        PathSegmentData::line_to(point(3.0, 4.0)),
        PathSegmentData::close_path(),
    ];

    let mut src = SegmentListSource::new(&segments);
    let mut parsed = Vec::new();
    while src.has_more_data() {
        parsed.push(src.parse_segment().unwrap());
    }

    assert_eq!(&parsed[..], &segments[..]);
    assert!(!SegmentListSource::new(&[]).has_more_data());
}
