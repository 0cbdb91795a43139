//! Binary encoding of path segments.
//!
//! Each segment is stored as a record:
//!
//! ```ascii
//!  ______________________________________________
//! |              |                               |
//! | segment type |  payload (depends on the type) |
//! |     u16      |   f32 coordinates, u8 flags    |
//! |______________|_______________________________|
//! ```
//!
//! All multi-byte fields are little-endian and booleans use a single byte.
//! The encoding is an in-process cache, it is not versioned and must not be
//! persisted.

use crate::math::point;
use crate::segment::{PathSegmentData, PathSegmentType};

use std::mem::size_of;

/// A fixed-size value that can be written to and read from a byte stream.
pub(crate) trait Field: Copy {
    const SIZE: usize;

    fn write_to(self, out: &mut Vec<u8>);

    /// `bytes` is exactly `Self::SIZE` long.
    fn read_from(bytes: &[u8]) -> Self;
}

impl Field for u16 {
    const SIZE: usize = size_of::<u16>();

    #[inline]
    fn write_to(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    #[inline]
    fn read_from(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }
}

impl Field for f32 {
    const SIZE: usize = size_of::<f32>();

    #[inline]
    fn write_to(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    #[inline]
    fn read_from(bytes: &[u8]) -> Self {
        f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

impl Field for bool {
    // Pinned to one byte regardless of the platform's bool representation.
    const SIZE: usize = 1;

    #[inline]
    fn write_to(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }

    #[inline]
    fn read_from(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

#[inline]
pub(crate) fn write<T: Field>(out: &mut Vec<u8>, value: T) {
    value.write_to(out);
}

/// Size in bytes of a whole record (tag included) for a given segment type.
pub(crate) fn record_size(command: PathSegmentType) -> usize {
    let flags = if command.to_absolute() == PathSegmentType::ArcAbs {
        2
    } else {
        0
    };
    let floats = command.field_count() - flags;

    u16::SIZE + floats * f32::SIZE + flags * bool::SIZE
}

/// Appends one complete record to `out`.
pub(crate) fn write_segment(out: &mut Vec<u8>, segment: &PathSegmentData) {
    out.reserve(record_size(segment.command));
    write(out, segment.command.to_u16());

    match segment.command.to_absolute() {
        PathSegmentType::ClosePath => {}
        PathSegmentType::MoveToAbs
        | PathSegmentType::LineToAbs
        | PathSegmentType::CurveToQuadraticSmoothAbs => {
            write(out, segment.target_point.x);
            write(out, segment.target_point.y);
        }
        PathSegmentType::LineToHorizontalAbs => {
            write(out, segment.target_point.x);
        }
        PathSegmentType::LineToVerticalAbs => {
            write(out, segment.target_point.y);
        }
        PathSegmentType::CurveToCubicAbs => {
            write(out, segment.point1.x);
            write(out, segment.point1.y);
            write(out, segment.point2.x);
            write(out, segment.point2.y);
            write(out, segment.target_point.x);
            write(out, segment.target_point.y);
        }
        PathSegmentType::CurveToCubicSmoothAbs => {
            write(out, segment.point2.x);
            write(out, segment.point2.y);
            write(out, segment.target_point.x);
            write(out, segment.target_point.y);
        }
        PathSegmentType::CurveToQuadraticAbs => {
            write(out, segment.point1.x);
            write(out, segment.point1.y);
            write(out, segment.target_point.x);
            write(out, segment.target_point.y);
        }
        PathSegmentType::ArcAbs => {
            write(out, segment.point1.x);
            write(out, segment.point1.y);
            write(out, segment.arc_angle());
            write(out, segment.arc_large);
            write(out, segment.arc_sweep);
            write(out, segment.target_point.x);
            write(out, segment.target_point.y);
        }
        _ => unreachable!(),
    }
}

/// A forward cursor over encoded records.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Reader<'l> {
    data: &'l [u8],
    position: usize,
}

impl<'l> Reader<'l> {
    pub(crate) fn new(data: &'l [u8]) -> Self {
        Reader { data, position: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Reading past the end of the data is a programming error and panics.
    #[inline]
    pub(crate) fn read<T: Field>(&mut self) -> T {
        let end = self.position + T::SIZE;
        assert!(end <= self.data.len(), "read past the end of the byte stream");
        let value = T::read_from(&self.data[self.position..end]);
        self.position = end;

        value
    }

    #[inline]
    fn read_point(&mut self) -> crate::math::Point {
        let x = self.read::<f32>();
        let y = self.read::<f32>();
        point(x, y)
    }

    /// Reads one record.
    ///
    /// Returns `None` without advancing if the tag is not a valid segment type.
    pub(crate) fn read_segment(&mut self) -> Option<PathSegmentData> {
        let start = self.position;
        let command = match PathSegmentType::from_u16(self.read::<u16>()) {
            Some(command) => command,
            None => {
                self.position = start;
                return None;
            }
        };

        let mut segment = PathSegmentData::new(command);
        match command.to_absolute() {
            PathSegmentType::ClosePath => {}
            PathSegmentType::MoveToAbs
            | PathSegmentType::LineToAbs
            | PathSegmentType::CurveToQuadraticSmoothAbs => {
                segment.target_point = self.read_point();
            }
            PathSegmentType::LineToHorizontalAbs => {
                segment.target_point.x = self.read::<f32>();
            }
            PathSegmentType::LineToVerticalAbs => {
                segment.target_point.y = self.read::<f32>();
            }
            PathSegmentType::CurveToCubicAbs => {
                segment.point1 = self.read_point();
                segment.point2 = self.read_point();
                segment.target_point = self.read_point();
            }
            PathSegmentType::CurveToCubicSmoothAbs => {
                segment.point2 = self.read_point();
                segment.target_point = self.read_point();
            }
            PathSegmentType::CurveToQuadraticAbs => {
                segment.point1 = self.read_point();
                segment.target_point = self.read_point();
            }
            PathSegmentType::ArcAbs => {
                segment.point1 = self.read_point();
                segment.point2.x = self.read::<f32>();
                segment.arc_large = self.read::<bool>();
                segment.arc_sweep = self.read::<bool>();
                segment.target_point = self.read_point();
            }
            _ => unreachable!(),
        }

        Some(segment)
    }
}

#[test]
fn record_sizes() {
    use PathSegmentType::*;
    assert_eq!(record_size(ClosePath), 2);
    assert_eq!(record_size(MoveToAbs), 10);
    assert_eq!(record_size(LineToHorizontalRel), 6);
    assert_eq!(record_size(CurveToCubicRel), 26);
    assert_eq!(record_size(ArcAbs), 2 + 5 * 4 + 2);

    for ty in PathSegmentType::ALL.iter().cloned() {
        let mut out = Vec::new();
        write_segment(&mut out, &PathSegmentData::new(ty));
        assert_eq!(out.len(), record_size(ty), "{:?}", ty);
    }
}

#[test]
fn little_endian_fields() {
    let mut out = Vec::new();
    write(&mut out, 0x0102u16);
    write(&mut out, 1.0f32);
    write(&mut out, true);
    write(&mut out, false);
    assert_eq!(out, vec![0x02, 0x01, 0x00, 0x00, 0x80, 0x3f, 1, 0]);

    let mut reader = Reader::new(&out);
    assert_eq!(reader.read::<u16>(), 0x0102);
    assert_eq!(reader.read::<f32>(), 1.0);
    assert!(reader.read::<bool>());
    assert!(!reader.read::<bool>());
    assert!(reader.is_at_end());
}

#[test]
fn arc_record() {
    let mut arc = PathSegmentData::new(PathSegmentType::ArcRel);
    arc.point1 = point(3.0, 4.0);
    arc.set_arc_angle(5.0);
    arc.arc_sweep = true;
    arc.target_point = point(6.0, 7.0);

    let mut out = Vec::new();
    write_segment(&mut out, &arc);

    let mut reader = Reader::new(&out);
    assert_eq!(reader.read_segment(), Some(arc));
    assert!(reader.is_at_end());
}

#[test]
fn unknown_tag() {
    let out = vec![0u8, 0, 1, 2];
    let mut reader = Reader::new(&out);
    assert_eq!(reader.read_segment(), None);
    assert_eq!(reader.position(), 0);
}
