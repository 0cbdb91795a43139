//! A flat numeric representation of path data for interpolation.
//!
//! Every segment contributes as many numbers as it has fields, in the order
//! they appear in the SVG syntax, and arc flags are stored as `0.0` or `1.0`.
//! Numbers are kept in the coordinate mode of their segment. When a relative
//! segment is interpolated with the absolute variant of the same segment, both
//! are made absolute first.

use crate::data::{
    parse_path, ByteStreamBuilder, ParseError, ParseStatus, PathByteStream, PathConsumer,
    PathCoordinates, PathSegmentData, PathSegmentType, PathSource,
};
use crate::data::math::point;

use arrayvec::ArrayVec;

/// The largest number of fields in a segment (arcs).
const MAX_FIELDS: usize = 7;

type Fields = ArrayVec<f64, MAX_FIELDS>;

/// Path data as a list of numbers and a list of segment types.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct InterpolablePath {
    numbers: Vec<f64>,
    types: Vec<PathSegmentType>,
}

impl InterpolablePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_source<S: PathSource>(source: S) -> Result<Self, ParseError> {
        let mut builder = InterpolableBuilder::new();
        parse_path(source, &mut builder)?;

        Ok(builder.build())
    }

    pub fn from_byte_stream(stream: &PathByteStream) -> Result<Self, ParseError> {
        Self::from_source(stream.source())
    }

    pub fn to_byte_stream(&self) -> Result<PathByteStream, ParseError> {
        let mut builder = ByteStreamBuilder::new();
        parse_path(self.source(), &mut builder)?;

        Ok(builder.build())
    }

    pub fn source(&self) -> InterpolatedSource {
        InterpolatedSource::new(self)
    }

    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    pub fn types(&self) -> &[PathSegmentType] {
        &self.types
    }

    pub fn segment_count(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Two paths can be interpolated if their segments only differ in their
    /// coordinate mode.
    pub fn is_compatible_with(&self, other: &InterpolablePath) -> bool {
        self.numbers.len() == other.numbers.len()
            && self.types.len() == other.types.len()
            && self
                .types
                .iter()
                .zip(other.types.iter())
                .all(|(a, b)| a.to_absolute() == b.to_absolute())
    }

    /// Interpolates between `self` (at 0.0) and `to` (at 1.0).
    ///
    /// Arc flags and segment types switch at 0.5. Returns `None` if the paths are
    /// not compatible.
    pub fn interpolate(&self, to: &InterpolablePath, progress: f64) -> Option<InterpolablePath> {
        if !self.is_compatible_with(to) {
            return None;
        }

        let first_half = progress < 0.5;
        let mut result = InterpolablePath {
            numbers: Vec::with_capacity(self.numbers.len()),
            types: Vec::with_capacity(self.types.len()),
        };

        let mut from_cursor = PathCoordinates::new();
        let mut to_cursor = PathCoordinates::new();
        let mut result_cursor = PathCoordinates::new();

        let mut offset = 0;
        for (&from_type, &to_type) in self.types.iter().zip(to.types.iter()) {
            let end = offset + from_type.field_count();
            let a = self.numbers.get(offset..end)?;
            let b = to.numbers.get(offset..end)?;
            let ty = if first_half { from_type } else { to_type };

            let fields = if from_type == to_type {
                lerp_fields(ty, a, b, progress)
            } else {
                let a = to_absolute(from_type, a, &from_cursor);
                let b = to_absolute(to_type, b, &to_cursor);
                let blended = lerp_fields(ty, &a, &b, progress);
                to_relative(ty, &blended, &result_cursor)
            };

            advance(&mut from_cursor, from_type, a);
            advance(&mut to_cursor, to_type, b);
            advance(&mut result_cursor, ty, &fields);

            result.numbers.extend(fields);
            result.types.push(ty);
            offset = end;
        }

        Some(result)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// The axis each field is measured along, `None` for the values that don't depend
/// on the current point (arc radii, angle and flags).
fn field_axes(ty: PathSegmentType) -> &'static [Option<Axis>] {
    use self::Axis::{X, Y};

    match ty.to_absolute() {
        PathSegmentType::ClosePath => &[],
        PathSegmentType::MoveToAbs
        | PathSegmentType::LineToAbs
        | PathSegmentType::CurveToQuadraticSmoothAbs => &[Some(X), Some(Y)],
        PathSegmentType::LineToHorizontalAbs => &[Some(X)],
        PathSegmentType::LineToVerticalAbs => &[Some(Y)],
        PathSegmentType::CurveToCubicAbs => &[Some(X), Some(Y), Some(X), Some(Y), Some(X), Some(Y)],
        PathSegmentType::CurveToCubicSmoothAbs | PathSegmentType::CurveToQuadraticAbs => {
            &[Some(X), Some(Y), Some(X), Some(Y)]
        }
        PathSegmentType::ArcAbs => &[None, None, None, None, None, Some(X), Some(Y)],
        _ => unreachable!(),
    }
}

#[inline]
fn is_arc_flag(ty: PathSegmentType, field: usize) -> bool {
    ty.to_absolute() == PathSegmentType::ArcAbs && (field == 3 || field == 4)
}

fn lerp_fields(ty: PathSegmentType, from: &[f64], to: &[f64], progress: f64) -> Fields {
    let mut fields = Fields::new();
    for (i, (&a, &b)) in from.iter().zip(to.iter()).enumerate() {
        fields.push(if is_arc_flag(ty, i) {
            if progress < 0.5 {
                a
            } else {
                b
            }
        } else {
            a + (b - a) * progress
        });
    }

    fields
}

/// Offsets the positional fields of a segment by the current point.
fn offset_fields(ty: PathSegmentType, fields: &[f64], cursor: &PathCoordinates, sign: f64) -> Fields {
    field_axes(ty)
        .iter()
        .zip(fields.iter())
        .map(|(axis, &value)| match axis {
            Some(Axis::X) => value + sign * cursor.current_x,
            Some(Axis::Y) => value + sign * cursor.current_y,
            None => value,
        })
        .collect()
}

fn to_absolute(ty: PathSegmentType, fields: &[f64], cursor: &PathCoordinates) -> Fields {
    if ty.is_absolute() {
        return fields.iter().cloned().collect();
    }

    offset_fields(ty, fields, cursor, 1.0)
}

/// Expresses absolute fields in the coordinate mode of `ty`.
fn to_relative(ty: PathSegmentType, fields: &[f64], cursor: &PathCoordinates) -> Fields {
    if ty.is_absolute() {
        return fields.iter().cloned().collect();
    }

    offset_fields(ty, fields, cursor, -1.0)
}

/// Moves the cursor past a segment.
fn advance(cursor: &mut PathCoordinates, ty: PathSegmentType, fields: &[f64]) {
    let abs = to_absolute(ty, fields, cursor);
    match ty.to_absolute() {
        PathSegmentType::ClosePath => {
            cursor.close_sub_path();
        }
        PathSegmentType::LineToHorizontalAbs => {
            cursor.current_x = abs[0];
        }
        PathSegmentType::LineToVerticalAbs => {
            cursor.current_y = abs[0];
        }
        absolute => {
            let n = abs.len();
            cursor.current_x = abs[n - 2];
            cursor.current_y = abs[n - 1];
            if absolute == PathSegmentType::MoveToAbs {
                cursor.begin_sub_path();
            }
        }
    }
}

#[inline]
fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// A `PathConsumer` building an `InterpolablePath`.
#[derive(Clone, Debug, Default)]
pub struct InterpolableBuilder {
    path: InterpolablePath,
}

impl InterpolableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> InterpolablePath {
        self.path
    }
}

impl PathConsumer for InterpolableBuilder {
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        let to = segment.target_point;
        let p1 = segment.point1;
        let p2 = segment.point2;
        let mut fields = Fields::new();

        match segment.command.to_absolute() {
            PathSegmentType::ClosePath => {}
            PathSegmentType::MoveToAbs
            | PathSegmentType::LineToAbs
            | PathSegmentType::CurveToQuadraticSmoothAbs => {
                fields.extend([to.x, to.y].iter().map(|&v| v as f64));
            }
            PathSegmentType::LineToHorizontalAbs => {
                fields.push(to.x as f64);
            }
            PathSegmentType::LineToVerticalAbs => {
                fields.push(to.y as f64);
            }
            PathSegmentType::CurveToCubicAbs => {
                fields.extend([p1.x, p1.y, p2.x, p2.y, to.x, to.y].iter().map(|&v| v as f64));
            }
            PathSegmentType::CurveToCubicSmoothAbs => {
                fields.extend([p2.x, p2.y, to.x, to.y].iter().map(|&v| v as f64));
            }
            PathSegmentType::CurveToQuadraticAbs => {
                fields.extend([p1.x, p1.y, to.x, to.y].iter().map(|&v| v as f64));
            }
            PathSegmentType::ArcAbs => {
                fields.push(p1.x as f64);
                fields.push(p1.y as f64);
                fields.push(segment.arc_angle() as f64);
                fields.push(flag(segment.arc_large));
                fields.push(flag(segment.arc_sweep));
                fields.push(to.x as f64);
                fields.push(to.y as f64);
            }
            _ => unreachable!(),
        }

        debug_assert_eq!(fields.len(), segment.command.field_count());
        self.path.numbers.extend(fields);
        self.path.types.push(segment.command);
    }
}

/// A `PathSource` reading an `InterpolablePath`.
#[derive(Clone, Debug)]
pub struct InterpolatedSource<'l> {
    path: &'l InterpolablePath,
    type_index: usize,
    number_index: usize,
}

impl<'l> InterpolatedSource<'l> {
    pub fn new(path: &'l InterpolablePath) -> Self {
        InterpolatedSource {
            path,
            type_index: 0,
            number_index: 0,
        }
    }
}

impl<'l> PathSource for InterpolatedSource<'l> {
    #[inline]
    fn has_more_data(&self) -> bool {
        self.type_index < self.path.types.len()
    }

    fn parse_segment(&mut self) -> Result<PathSegmentData, ParseError> {
        let command = self.path.types[self.type_index];
        let start = self.number_index;
        let end = start + command.field_count();
        let n = match self.path.numbers.get(start..end) {
            Some(numbers) => numbers,
            None => {
                return Err(ParseError::new(ParseStatus::ExpectedNumber, start));
            }
        };
        self.type_index += 1;
        self.number_index = end;

        let mut segment = PathSegmentData::new(command);
        match command.to_absolute() {
            PathSegmentType::ClosePath => {}
            PathSegmentType::MoveToAbs
            | PathSegmentType::LineToAbs
            | PathSegmentType::CurveToQuadraticSmoothAbs => {
                segment.target_point = point(n[0] as f32, n[1] as f32);
            }
            PathSegmentType::LineToHorizontalAbs => {
                segment.target_point.x = n[0] as f32;
            }
            PathSegmentType::LineToVerticalAbs => {
                segment.target_point.y = n[0] as f32;
            }
            PathSegmentType::CurveToCubicAbs => {
                segment.point1 = point(n[0] as f32, n[1] as f32);
                segment.point2 = point(n[2] as f32, n[3] as f32);
                segment.target_point = point(n[4] as f32, n[5] as f32);
            }
            PathSegmentType::CurveToCubicSmoothAbs => {
                segment.point2 = point(n[0] as f32, n[1] as f32);
                segment.target_point = point(n[2] as f32, n[3] as f32);
            }
            PathSegmentType::CurveToQuadraticAbs => {
                segment.point1 = point(n[0] as f32, n[1] as f32);
                segment.target_point = point(n[2] as f32, n[3] as f32);
            }
            PathSegmentType::ArcAbs => {
                segment.point1 = point(n[0] as f32, n[1] as f32);
                segment.set_arc_angle(n[2] as f32);
                segment.arc_large = n[3] >= 0.5;
                segment.arc_sweep = n[4] >= 0.5;
                segment.target_point = point(n[5] as f32, n[6] as f32);
            }
            _ => unreachable!(),
        }

        Ok(segment)
    }
}

#[cfg(test)]
use crate::data::{build_byte_stream_from_string, build_string_from_byte_stream};

#[cfg(test)]
fn interpolable(src: &str) -> InterpolablePath {
    InterpolablePath::from_byte_stream(&build_byte_stream_from_string(src).unwrap()).unwrap()
}

#[cfg(test)]
fn interpolate(from: &str, to: &str, progress: f64) -> String {
    let value = interpolable(from).interpolate(&interpolable(to), progress).unwrap();
    build_string_from_byte_stream(&value.to_byte_stream().unwrap())
}

#[test]
fn lossless_round_trip() {
    let sources = [
        "M 1 2 m 3 4 L 5 6 l 7 8 H 9 h 10 V 11 v 12 \
         C 1 2 3 4 5 6 c 1 2 3 4 5 6 S 1 2 3 4 s 1 2 3 4 \
         Q 1 2 3 4 q 1 2 3 4 T 5 6 t 7 8 \
         A 1 2 3 0 1 4 5 a 6 7 8 1 0 9 10 Z l 0.5 -0.25 z",
        // Relative values much smaller than the current point.
        "M 0 0 l 1e10 0 l 0.001 0.001",
        "m 1e-20 3e30 c 1e-7 2 3 4e20 5 6 h 0.1 v -0.3",
    ];

    for src in &sources {
        let stream = build_byte_stream_from_string(src).unwrap();
        let path = InterpolablePath::from_byte_stream(&stream).unwrap();

        assert_eq!(path.segment_count(), stream.segment_count());
        assert_eq!(path.to_byte_stream().unwrap(), stream, "{}", src);
    }
}

#[test]
fn numbers_follow_the_segment_mode() {
    let path = interpolable("M 10 20 l 5 5 h 1 v -2 z l 1 1");
    assert_eq!(
        path.numbers(),
        &[10.0, 20.0, 5.0, 5.0, 1.0, -2.0, 1.0, 1.0][..]
    );

    let path = interpolable("M 10 10 a 1 2 3 1 0 5 6");
    assert_eq!(
        path.numbers(),
        &[10.0, 10.0, 1.0, 2.0, 3.0, 1.0, 0.0, 5.0, 6.0][..]
    );
}

#[test]
fn interpolation() {
    let from = "M 0 0 L 10 10 A 5 5 0 0 1 20 20";
    let to = "M 10 10 l 10 10 A 15 25 90 1 0 40 40";
    assert!(interpolable(from).is_compatible_with(&interpolable(to)));

    assert_eq!(
        interpolate(from, to, 0.25),
        "M 2.5 2.5 L 12.5 12.5 A 7.5 10 22.5 0 1 25 25"
    );
    assert_eq!(
        interpolate(from, to, 0.5),
        "M 5 5 l 10 10 A 10 15 45 1 0 30 30"
    );
}

#[test]
fn mixed_modes_after_close_and_relative_move_to() {
    let from = "M 0 0 h 10 z m 1 1";
    let to = "M 0 0 H 20 Z M 3 3";

    assert_eq!(interpolate(from, to, 0.25), "M 0 0 h 12.5 Z m 1.5 1.5");
    assert_eq!(interpolate(from, to, 0.5), "M 0 0 H 15 Z M 2 2");
}

#[test]
fn interpolating_with_itself() {
    let path = interpolable("M 0 0 l 1e10 0 l 0.001 0.001 q 0.3 0.7 1e-5 2 a 1 2 3 0 1 4 5");
    for &progress in &[0.0, 0.3, 0.5, 1.0] {
        assert_eq!(path.interpolate(&path, progress).as_ref(), Some(&path));
    }
}

#[test]
fn incompatible_paths() {
    let a = interpolable("M 0 0 L 1 1");
    assert_eq!(a.interpolate(&interpolable("M 0 0 H 1"), 0.5), None);
    assert_eq!(a.interpolate(&interpolable("M 0 0"), 0.5), None);
    assert!(a.is_compatible_with(&interpolable("m 0 0 l 1 1")));
}

#[test]
fn empty() {
    let path = interpolable("");
    assert!(path.is_empty());
    assert!(path.to_byte_stream().unwrap().is_empty());
    assert_eq!(path.interpolate(&InterpolablePath::new(), 0.3), Some(InterpolablePath::new()));
}
