//! The in-memory representation of a single path segment.

use crate::math::{point, Point, Vector};

use std::fmt;

/// The kinds of SVG path segments.
///
/// Each relative variant has the discriminant of its absolute counterpart plus one,
/// and all absolute variants except `ClosePath` are even. The discriminant `0` is
/// reserved for "unknown" in the binary encoding and has no variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum PathSegmentType {
    ClosePath = 1,
    MoveToAbs = 2,
    MoveToRel = 3,
    LineToAbs = 4,
    LineToRel = 5,
    CurveToCubicAbs = 6,
    CurveToCubicRel = 7,
    CurveToQuadraticAbs = 8,
    CurveToQuadraticRel = 9,
    ArcAbs = 10,
    ArcRel = 11,
    LineToHorizontalAbs = 12,
    LineToHorizontalRel = 13,
    LineToVerticalAbs = 14,
    LineToVerticalRel = 15,
    CurveToCubicSmoothAbs = 16,
    CurveToCubicSmoothRel = 17,
    CurveToQuadraticSmoothAbs = 18,
    CurveToQuadraticSmoothRel = 19,
}

impl PathSegmentType {
    pub const ALL: [PathSegmentType; 19] = [
        PathSegmentType::ClosePath,
        PathSegmentType::MoveToAbs,
        PathSegmentType::MoveToRel,
        PathSegmentType::LineToAbs,
        PathSegmentType::LineToRel,
        PathSegmentType::CurveToCubicAbs,
        PathSegmentType::CurveToCubicRel,
        PathSegmentType::CurveToQuadraticAbs,
        PathSegmentType::CurveToQuadraticRel,
        PathSegmentType::ArcAbs,
        PathSegmentType::ArcRel,
        PathSegmentType::LineToHorizontalAbs,
        PathSegmentType::LineToHorizontalRel,
        PathSegmentType::LineToVerticalAbs,
        PathSegmentType::LineToVerticalRel,
        PathSegmentType::CurveToCubicSmoothAbs,
        PathSegmentType::CurveToCubicSmoothRel,
        PathSegmentType::CurveToQuadraticSmoothAbs,
        PathSegmentType::CurveToQuadraticSmoothRel,
    ];

    /// Returns the segment type for a given discriminant, or `None` for `0` (unknown)
    /// and out of range values.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Self> {
        if value == 0 {
            return None;
        }

        Self::ALL.get(value as usize - 1).copied()
    }

    #[inline]
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    #[inline]
    pub fn is_absolute(self) -> bool {
        let value = self as u16;
        value < PathSegmentType::MoveToAbs as u16 || value & 1 == 0
    }

    #[inline]
    pub fn is_relative(self) -> bool {
        !self.is_absolute()
    }

    /// Maps relative variants to their absolute counterpart.
    #[inline]
    pub fn to_absolute(self) -> Self {
        if self.is_absolute() {
            return self;
        }

        // Clearing the low bit of a relative variant always lands on a valid variant.
        Self::ALL[(self as u16 & !1u16) as usize - 1]
    }

    /// Maps absolute variants to their relative counterpart. `ClosePath` is unchanged.
    #[inline]
    pub fn to_relative(self) -> Self {
        if self.is_relative() || self == PathSegmentType::ClosePath {
            return self;
        }

        Self::ALL[self as usize]
    }

    #[inline]
    pub fn is_move_to(self) -> bool {
        self.to_absolute() == PathSegmentType::MoveToAbs
    }

    /// Cubic curves including the smooth variants.
    #[inline]
    pub fn is_cubic(self) -> bool {
        matches!(
            self.to_absolute(),
            PathSegmentType::CurveToCubicAbs | PathSegmentType::CurveToCubicSmoothAbs
        )
    }

    /// Quadratic curves including the smooth variants.
    #[inline]
    pub fn is_quadratic(self) -> bool {
        matches!(
            self.to_absolute(),
            PathSegmentType::CurveToQuadraticAbs | PathSegmentType::CurveToQuadraticSmoothAbs
        )
    }

    /// The command letter of this segment type in the SVG path syntax.
    pub fn command_char(self) -> char {
        match self {
            PathSegmentType::ClosePath => 'Z',
            PathSegmentType::MoveToAbs => 'M',
            PathSegmentType::MoveToRel => 'm',
            PathSegmentType::LineToAbs => 'L',
            PathSegmentType::LineToRel => 'l',
            PathSegmentType::CurveToCubicAbs => 'C',
            PathSegmentType::CurveToCubicRel => 'c',
            PathSegmentType::CurveToQuadraticAbs => 'Q',
            PathSegmentType::CurveToQuadraticRel => 'q',
            PathSegmentType::ArcAbs => 'A',
            PathSegmentType::ArcRel => 'a',
            PathSegmentType::LineToHorizontalAbs => 'H',
            PathSegmentType::LineToHorizontalRel => 'h',
            PathSegmentType::LineToVerticalAbs => 'V',
            PathSegmentType::LineToVerticalRel => 'v',
            PathSegmentType::CurveToCubicSmoothAbs => 'S',
            PathSegmentType::CurveToCubicSmoothRel => 's',
            PathSegmentType::CurveToQuadraticSmoothAbs => 'T',
            PathSegmentType::CurveToQuadraticSmoothRel => 't',
        }
    }

    pub fn from_command_char(c: char) -> Option<Self> {
        Some(match c {
            'Z' | 'z' => PathSegmentType::ClosePath,
            'M' => PathSegmentType::MoveToAbs,
            'm' => PathSegmentType::MoveToRel,
            'L' => PathSegmentType::LineToAbs,
            'l' => PathSegmentType::LineToRel,
            'C' => PathSegmentType::CurveToCubicAbs,
            'c' => PathSegmentType::CurveToCubicRel,
            'Q' => PathSegmentType::CurveToQuadraticAbs,
            'q' => PathSegmentType::CurveToQuadraticRel,
            'A' => PathSegmentType::ArcAbs,
            'a' => PathSegmentType::ArcRel,
            'H' => PathSegmentType::LineToHorizontalAbs,
            'h' => PathSegmentType::LineToHorizontalRel,
            'V' => PathSegmentType::LineToVerticalAbs,
            'v' => PathSegmentType::LineToVerticalRel,
            'S' => PathSegmentType::CurveToCubicSmoothAbs,
            's' => PathSegmentType::CurveToCubicSmoothRel,
            'T' => PathSegmentType::CurveToQuadraticSmoothAbs,
            't' => PathSegmentType::CurveToQuadraticSmoothRel,
            _ => {
                return None;
            }
        })
    }

    /// Number of numeric fields carried by this segment type.
    ///
    /// The arc flags count as one field each.
    pub fn field_count(self) -> usize {
        match self.to_absolute() {
            PathSegmentType::ClosePath => 0,
            PathSegmentType::LineToHorizontalAbs | PathSegmentType::LineToVerticalAbs => 1,
            PathSegmentType::MoveToAbs
            | PathSegmentType::LineToAbs
            | PathSegmentType::CurveToQuadraticSmoothAbs => 2,
            PathSegmentType::CurveToQuadraticAbs | PathSegmentType::CurveToCubicSmoothAbs => 4,
            PathSegmentType::CurveToCubicAbs => 6,
            PathSegmentType::ArcAbs => 7,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for PathSegmentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.command_char())
    }
}

/// One path command and its arguments.
///
/// Depending on the command, some fields are unused and stay at zero.
/// For arcs, `point1` holds the radii and `point2.x` the x-axis rotation in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathSegmentData {
    pub command: PathSegmentType,
    pub target_point: Point,
    pub point1: Point,
    pub point2: Point,
    pub arc_large: bool,
    pub arc_sweep: bool,
}

impl PathSegmentData {
    /// A segment with all of its arguments set to zero.
    pub fn new(command: PathSegmentType) -> Self {
        PathSegmentData {
            command,
            target_point: point(0.0, 0.0),
            point1: point(0.0, 0.0),
            point2: point(0.0, 0.0),
            arc_large: false,
            arc_sweep: false,
        }
    }

    pub fn move_to(to: Point) -> Self {
        PathSegmentData {
            target_point: to,
            ..Self::new(PathSegmentType::MoveToAbs)
        }
    }

    pub fn line_to(to: Point) -> Self {
        PathSegmentData {
            target_point: to,
            ..Self::new(PathSegmentType::LineToAbs)
        }
    }

    pub fn cubic_bezier_to(ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        PathSegmentData {
            target_point: to,
            point1: ctrl1,
            point2: ctrl2,
            ..Self::new(PathSegmentType::CurveToCubicAbs)
        }
    }

    pub fn close_path() -> Self {
        Self::new(PathSegmentType::ClosePath)
    }

    #[inline]
    pub fn arc_radii(&self) -> Vector {
        self.point1.to_vector()
    }

    #[inline]
    pub fn arc_angle(&self) -> f32 {
        self.point2.x
    }

    #[inline]
    pub fn set_arc_radii(&mut self, radii: Vector) {
        self.point1 = radii.to_point();
    }

    #[inline]
    pub fn set_arc_angle(&mut self, angle: f32) {
        self.point2.x = angle;
    }
}

/// Cursor state while walking a sequence of segments.
///
/// `initial_*` is the start of the current sub-path (restored by `ClosePath`),
/// `current_*` is the end point of the last segment.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PathCoordinates {
    pub initial_x: f64,
    pub initial_y: f64,
    pub current_x: f64,
    pub current_y: f64,
}

impl PathCoordinates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the cursor to the start of the current sub-path.
    #[inline]
    pub fn close_sub_path(&mut self) {
        self.current_x = self.initial_x;
        self.current_y = self.initial_y;
    }

    /// Makes the current position the start of a new sub-path.
    #[inline]
    pub fn begin_sub_path(&mut self) {
        self.initial_x = self.current_x;
        self.initial_y = self.current_y;
    }
}

#[test]
fn relative_variants_follow_absolute_ones() {
    for ty in PathSegmentType::ALL.iter().cloned() {
        assert_eq!(PathSegmentType::from_u16(ty.to_u16()), Some(ty));
        if ty == PathSegmentType::ClosePath {
            assert!(ty.is_absolute());
            continue;
        }

        if ty.is_relative() {
            assert_eq!(ty.to_absolute().to_u16() + 1, ty.to_u16());
            assert_eq!(ty.to_absolute().to_relative(), ty);
        } else {
            assert_eq!(ty.to_u16() % 2, 0);
            assert_eq!(ty.to_relative().to_u16(), ty.to_u16() + 1);
        }
    }

    assert_eq!(PathSegmentType::from_u16(0), None);
    assert_eq!(PathSegmentType::from_u16(20), None);
}

#[test]
fn command_chars() {
    for ty in PathSegmentType::ALL.iter().cloned() {
        let c = ty.command_char();
        assert_eq!(PathSegmentType::from_command_char(c), Some(ty));
        assert_eq!(c.is_ascii_lowercase(), ty.is_relative());
    }

    assert_eq!(
        PathSegmentType::from_command_char('z'),
        Some(PathSegmentType::ClosePath)
    );
    assert_eq!(PathSegmentType::from_command_char('x'), None);
    assert_eq!(PathSegmentType::from_command_char('1'), None);
}

#[test]
fn field_counts() {
    use PathSegmentType::*;
    assert_eq!(ClosePath.field_count(), 0);
    assert_eq!(LineToVerticalRel.field_count(), 1);
    assert_eq!(MoveToRel.field_count(), 2);
    assert_eq!(CurveToQuadraticSmoothAbs.field_count(), 2);
    assert_eq!(CurveToCubicSmoothRel.field_count(), 4);
    assert_eq!(CurveToCubicAbs.field_count(), 6);
    assert_eq!(ArcRel.field_count(), 7);
}
