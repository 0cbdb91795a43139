//! An editable list of path segments.

use crate::byte_stream::{ByteStreamBuilder, PathByteStream};
use crate::consumer::PathConsumer;
use crate::error::{Error, ParseError};
use crate::parser::parse_path;
use crate::segment::PathSegmentData;
use crate::serializer::PathStringBuilder;
use crate::source::SegmentListSource;
use crate::string_source::StringSource;

/// Only one of the two representations is authoritative at any time.
#[derive(Clone, Debug)]
enum Repr {
    Segments(Vec<PathSegmentData>),
    ByteStream(PathByteStream),
}

/// An ordered list of path segments that can be edited one segment at a time.
///
/// The list is stored either as a byte stream or as a vector of segments and
/// converts between the two lazily: reading or editing individual segments
/// materializes the vector, requesting the byte stream materializes the stream.
///
/// # Example
///
/// ```
/// use svg_path_data::{PathSegList, PathSegmentData};
/// use svg_path_data::math::point;
///
/// let mut list = PathSegList::parse("M 0 0 L 10 10").unwrap();
/// list.append_item(PathSegmentData::close_path());
/// list.replace_item(PathSegmentData::line_to(point(5.0, 5.0)), 1).unwrap();
///
/// assert_eq!(list.value_as_string(), "M 0 0 L 5 5 Z");
/// ```
#[derive(Clone, Debug)]
pub struct PathSegList {
    repr: Repr,
}

/// Lists are equal if they contain the same segments, whichever representation
/// is authoritative.
impl PartialEq for PathSegList {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::ByteStream(a), Repr::ByteStream(b)) => a == b,
            (Repr::Segments(a), Repr::Segments(b)) => a == b,
            (Repr::Segments(segments), Repr::ByteStream(stream))
            | (Repr::ByteStream(stream), Repr::Segments(segments)) => {
                segments.iter().cloned().eq(stream.iter())
            }
        }
    }
}

impl Default for PathSegList {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSegList {
    pub fn new() -> Self {
        PathSegList {
            repr: Repr::ByteStream(PathByteStream::new()),
        }
    }

    pub fn from_byte_stream(stream: PathByteStream) -> Self {
        PathSegList {
            repr: Repr::ByteStream(stream),
        }
    }

    pub fn from_segments(segments: Vec<PathSegmentData>) -> Self {
        PathSegList {
            repr: Repr::Segments(segments),
        }
    }

    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let mut list = PathSegList::new();
        list.set_value_as_string(src)?;

        Ok(list)
    }

    /// Replaces the content of the list with parsed path data.
    ///
    /// On error the list is left empty.
    pub fn set_value_as_string(&mut self, src: &str) -> Result<(), ParseError> {
        let mut builder = ByteStreamBuilder::new();
        match parse_path(StringSource::new(src), &mut builder) {
            Ok(()) => {
                self.repr = Repr::ByteStream(builder.build());
                Ok(())
            }
            Err(e) => {
                self.repr = Repr::ByteStream(PathByteStream::new());
                Err(e)
            }
        }
    }

    pub fn value_as_string(&self) -> String {
        let mut builder = PathStringBuilder::new();
        let result = match &self.repr {
            Repr::Segments(segments) => parse_path(SegmentListSource::new(segments), &mut builder),
            Repr::ByteStream(stream) => parse_path(stream.source(), &mut builder),
        };
        debug_assert!(result.is_ok());

        builder.build()
    }

    /// Returns true if the byte stream is the authoritative representation.
    #[inline]
    pub fn is_synced_to_byte_stream(&self) -> bool {
        matches!(self.repr, Repr::ByteStream(_))
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Segments(segments) => segments.len(),
            Repr::ByteStream(stream) => stream.segment_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.repr {
            Repr::Segments(segments) => segments.is_empty(),
            Repr::ByteStream(stream) => stream.is_empty(),
        }
    }

    pub fn clear(&mut self) {
        self.repr = Repr::Segments(Vec::new());
    }

    /// Makes the vector of segments authoritative and returns it.
    pub fn segments(&mut self) -> &mut Vec<PathSegmentData> {
        if let Repr::ByteStream(stream) = &self.repr {
            self.repr = Repr::Segments(stream.iter().collect());
        }

        match &mut self.repr {
            Repr::Segments(segments) => segments,
            Repr::ByteStream(_) => unreachable!(),
        }
    }

    /// Makes the byte stream authoritative and returns it.
    pub fn byte_stream(&mut self) -> &PathByteStream {
        if let Repr::Segments(segments) = &self.repr {
            let mut builder = ByteStreamBuilder::new();
            for segment in segments {
                builder.emit_segment(segment);
            }
            self.repr = Repr::ByteStream(builder.build());
        }

        match &self.repr {
            Repr::ByteStream(stream) => stream,
            Repr::Segments(_) => unreachable!(),
        }
    }

    pub fn into_byte_stream(mut self) -> PathByteStream {
        self.byte_stream();
        match self.repr {
            Repr::ByteStream(stream) => stream,
            Repr::Segments(_) => unreachable!(),
        }
    }

    pub fn get(&mut self, index: usize) -> Option<PathSegmentData> {
        self.segments().get(index).cloned()
    }

    /// Replaces the whole list with a single segment and returns it.
    pub fn initialize(&mut self, segment: PathSegmentData) -> PathSegmentData {
        self.repr = Repr::Segments(vec![segment]);
        segment
    }

    pub fn append_item(&mut self, segment: PathSegmentData) -> PathSegmentData {
        self.segments().push(segment);
        segment
    }

    /// Inserts a segment before `index`, or at the end if `index` is past the end.
    pub fn insert_item_before(&mut self, segment: PathSegmentData, index: usize) -> PathSegmentData {
        let segments = self.segments();
        let index = index.min(segments.len());
        segments.insert(index, segment);

        segment
    }

    /// Replaces the segment at `index` and returns the new one.
    pub fn replace_item(&mut self, segment: PathSegmentData, index: usize) -> Result<PathSegmentData, Error> {
        let segments = self.segments();
        let len = segments.len();
        match segments.get_mut(index) {
            Some(slot) => {
                *slot = segment;
                Ok(segment)
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Removes the segment at `index` and returns it.
    pub fn remove_item(&mut self, index: usize) -> Result<PathSegmentData, Error> {
        let segments = self.segments();
        let len = segments.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }

        Ok(segments.remove(index))
    }
}

#[cfg(test)]
use crate::{math::point, segment::PathSegmentType};

#[test]
fn lazy_representations() {
    let mut list = PathSegList::parse("M 0 0 L 1 1 L 2 2").unwrap();
    assert!(list.is_synced_to_byte_stream());
    assert_eq!(list.len(), 3);

    assert_eq!(list.get(1), Some(PathSegmentData::line_to(point(1.0, 1.0))));
    assert!(!list.is_synced_to_byte_stream());

    let stream = list.byte_stream().clone();
    assert!(list.is_synced_to_byte_stream());
    assert_eq!(stream.segment_count(), 3);
    assert_eq!(list.clone().into_byte_stream(), stream);
}

#[test]
fn editing() {
    let mut list = PathSegList::new();
    assert!(list.is_empty());

    list.append_item(PathSegmentData::move_to(point(0.0, 0.0)));
    list.append_item(PathSegmentData::line_to(point(2.0, 2.0)));
    list.insert_item_before(PathSegmentData::line_to(point(1.0, 1.0)), 1);
    list.insert_item_before(PathSegmentData::close_path(), 100);
    assert_eq!(list.value_as_string(), "M 0 0 L 1 1 L 2 2 Z");

    let removed = list.remove_item(2).unwrap();
    assert_eq!(removed.target_point, point(2.0, 2.0));
    assert_eq!(list.len(), 3);

    assert_eq!(
        list.remove_item(3),
        Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        list.replace_item(PathSegmentData::close_path(), 7),
        Err(Error::IndexOutOfBounds { index: 7, len: 3 })
    );

    list.initialize(PathSegmentData::new(PathSegmentType::MoveToRel));
    assert_eq!(list.value_as_string(), "m 0 0");

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.value_as_string(), "");
}

#[test]
fn equality_ignores_the_representation() {
    let a = PathSegList::parse("M 0 0 L 1 1 Z").unwrap();
    let mut b = a.clone();
    assert_eq!(b.get(0), Some(PathSegmentData::move_to(point(0.0, 0.0))));
    assert!(a.is_synced_to_byte_stream());
    assert!(!b.is_synced_to_byte_stream());

    assert_eq!(a, b);
    assert_eq!(b, a);

    b.append_item(PathSegmentData::close_path());
    assert_ne!(a, b);
    assert_ne!(b, a);

    assert_eq!(PathSegList::new(), PathSegList::from_segments(Vec::new()));
}

#[test]
fn invalid_string_empties_the_list() {
    let mut list = PathSegList::parse("M 0 0 L 1 1").unwrap();
    let err = list.set_value_as_string("M 0 0 L 1").unwrap_err();

    assert_eq!(err.locus, 9);
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}
