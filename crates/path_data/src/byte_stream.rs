//! A compact binary representation of path data.
//!
//! # Example
//!
//! ```
//! use svg_path_data::{parse_path, ByteStreamBuilder, StringSource, PathStringBuilder};
//!
//! let mut builder = ByteStreamBuilder::new();
//! parse_path(&mut StringSource::new("M 0 0 h 10 v 10 Z"), &mut builder).unwrap();
//! let stream = builder.build();
//!
//! assert_eq!(stream.segment_count(), 4);
//!
//! let mut serializer = PathStringBuilder::new();
//! parse_path(&mut stream.source(), &mut serializer).unwrap();
//! assert_eq!(serializer.build(), "M 0 0 h 10 v 10 Z");
//! ```

use crate::codec::{self, Reader};
use crate::consumer::PathConsumer;
use crate::error::{ParseError, ParseStatus};
use crate::segment::PathSegmentData;
use crate::source::PathSource;

use std::fmt;

/// An ordered sequence of encoded path segments.
///
/// The buffer always contains complete records: segments can only be added
/// through the [`ByteStreamBuilder`](struct.ByteStreamBuilder.html) or by appending
/// another stream.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PathByteStream {
    data: Vec<u8>,
}

impl PathByteStream {
    pub fn new() -> Self {
        PathByteStream { data: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the encoded data in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Appends all of the segments of `other` after the segments of this stream.
    pub fn append(&mut self, other: &PathByteStream) {
        self.data.extend_from_slice(&other.data);
    }

    /// Returns a new cursor reading this stream from the beginning.
    #[inline]
    pub fn source(&self) -> ByteStreamSource {
        ByteStreamSource::new(self)
    }

    /// Iterates over the decoded segments.
    pub fn iter(&self) -> Iter {
        Iter {
            reader: Reader::new(&self.data),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub(crate) fn push_segment(&mut self, segment: &PathSegmentData) {
        codec::write_segment(&mut self.data, segment);
    }
}

impl fmt::Debug for PathByteStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'l> IntoIterator for &'l PathByteStream {
    type Item = PathSegmentData;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// An iterator over the segments of a `PathByteStream`.
#[derive(Clone)]
pub struct Iter<'l> {
    reader: Reader<'l>,
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathSegmentData;

    fn next(&mut self) -> Option<PathSegmentData> {
        if self.reader.is_at_end() {
            return None;
        }

        self.reader.read_segment()
    }
}

/// Reads segments from a `PathByteStream`.
///
/// Several sources can read the same stream at the same time.
#[derive(Clone)]
pub struct ByteStreamSource<'l> {
    reader: Reader<'l>,
}

impl<'l> ByteStreamSource<'l> {
    pub fn new(stream: &'l PathByteStream) -> Self {
        ByteStreamSource {
            reader: Reader::new(&stream.data),
        }
    }
}

impl<'l> PathSource for ByteStreamSource<'l> {
    #[inline]
    fn has_more_data(&self) -> bool {
        !self.reader.is_at_end()
    }

    fn parse_segment(&mut self) -> Result<PathSegmentData, ParseError> {
        match self.reader.read_segment() {
            Some(segment) => Ok(segment),
            None => {
                // Streams are only written by this crate so this can't happen unless the
                // memory was corrupted.
                let position = self.reader.position();
                log::error!("Corrupt path byte stream at offset {}", position);
                debug_assert!(false, "corrupt path byte stream");

                Err(ParseError::new(ParseStatus::ExpectedPathCommand, position))
            }
        }
    }
}

/// A consumer that encodes segments into a `PathByteStream`, preserving
/// their exact type (relative, smooth, etc.).
#[derive(Clone, Debug, Default)]
pub struct ByteStreamBuilder {
    stream: PathByteStream,
}

impl ByteStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to an existing stream.
    pub fn with_stream(stream: PathByteStream) -> Self {
        ByteStreamBuilder { stream }
    }

    pub fn build(self) -> PathByteStream {
        self.stream
    }
}

impl PathConsumer for ByteStreamBuilder {
    #[inline]
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        self.stream.push_segment(segment);
    }
}

#[cfg(test)]
fn test_segments() -> Vec<PathSegmentData> {
    use crate::math::point;
    use crate::segment::PathSegmentType;

    let mut segments = Vec::new();
    for (i, ty) in PathSegmentType::ALL.iter().cloned().enumerate() {
        let f = i as f32;
        let mut segment = PathSegmentData::new(ty);
        match ty.to_absolute() {
            PathSegmentType::ClosePath => {}
            PathSegmentType::LineToHorizontalAbs => {
                segment.target_point.x = f;
            }
            PathSegmentType::LineToVerticalAbs => {
                segment.target_point.y = f;
            }
            PathSegmentType::ArcAbs => {
                segment.point1 = point(f, f + 1.0);
                segment.set_arc_angle(30.0);
                segment.arc_large = i % 2 == 0;
                segment.arc_sweep = true;
                segment.target_point = point(f + 2.0, -f);
            }
            _ => {
                segment.target_point = point(f, -f);
                if ty.field_count() > 2 {
                    if ty.is_cubic() {
                        segment.point2 = point(f * 0.5, 1.5);
                    }
                    if ty.to_absolute() == PathSegmentType::CurveToCubicAbs
                        || ty.to_absolute() == PathSegmentType::CurveToQuadraticAbs
                    {
                        segment.point1 = point(0.25, f * 2.0);
                    }
                }
            }
        }
        segments.push(segment);
    }

    segments
}

#[test]
fn encode_decode_all_types() {
    let segments = test_segments();

    let mut builder = ByteStreamBuilder::new();
    for segment in &segments {
        builder.emit_segment(segment);
    }
    let stream = builder.build();

    assert_eq!(stream.segment_count(), segments.len());
    assert_eq!(stream.iter().collect::<Vec<_>>(), segments);

    let mut src = stream.source();
    let mut decoded = Vec::new();
    while src.has_more_data() {
        decoded.push(src.parse_segment().unwrap());
    }
    assert_eq!(decoded, segments);
}

#[test]
fn append_clear_and_equality() {
    use crate::math::point;

    let mut a = ByteStreamBuilder::new();
    a.emit_segment(&PathSegmentData::move_to(point(1.0, 1.0)));
    let a = a.build();

    let mut b = ByteStreamBuilder::new();
    b.emit_segment(&PathSegmentData::line_to(point(2.0, 2.0)));
    let b = b.build();

    let mut ab = a.clone();
    ab.append(&b);
    assert_eq!(ab.size(), a.size() + b.size());
    assert_eq!(
        ab.iter().collect::<Vec<_>>(),
        vec![
            PathSegmentData::move_to(point(1.0, 1.0)),
            PathSegmentData::line_to(point(2.0, 2.0)),
        ]
    );

    let mut builder = ByteStreamBuilder::with_stream(a.clone());
    builder.emit_segment(&PathSegmentData::line_to(point(2.0, 2.0)));
    assert_eq!(builder.build(), ab);
    assert_ne!(a, ab);

    ab.clear();
    assert!(ab.is_empty());
    assert_eq!(ab, PathByteStream::new());
}

#[test]
fn concurrent_readers() {
    use crate::math::point;

    let mut builder = ByteStreamBuilder::new();
    builder.emit_segment(&PathSegmentData::move_to(point(1.0, 1.0)));
    builder.emit_segment(&PathSegmentData::close_path());
    let stream = builder.build();

    let mut src1 = stream.source();
    let mut src2 = stream.source();
    assert_eq!(src1.parse_segment(), src2.parse_segment());
    assert!(src1.has_more_data());
    src1.parse_segment().unwrap();
    assert!(!src1.has_more_data());
    assert!(src2.has_more_data());
}
