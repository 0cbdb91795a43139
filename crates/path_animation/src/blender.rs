//! Segment by segment interpolation and accumulation of two paths.

use crate::data::math::{point, Point, Vector};
use crate::data::{Error, PathConsumer, PathSegmentData, PathSegmentType, PathSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn of(self, p: Point) -> f32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f64) -> f32 {
    let from = from as f64;
    (from + (to as f64 - from) * t) as f32
}

#[inline]
fn accumulate(from: f32, by: f32, repeat_count: u32) -> f32 {
    (from as f64 + by as f64 * repeat_count as f64) as f32
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Mode {
    /// Interpolate at the given progress.
    Blend(f64),
    /// Add `to` this many times.
    Add(u32),
}

/// Tracks where both paths are while they are walked in lock-step.
#[derive(Clone, Debug)]
struct BlendState {
    mode: Mode,
    /// Always true when adding.
    is_in_first_half: bool,
    from_is_absolute: bool,
    to_is_absolute: bool,
    from_current: Point,
    from_sub_path_start: Point,
    to_current: Point,
    to_sub_path_start: Point,
}

impl BlendState {
    fn new(mode: Mode) -> Self {
        BlendState {
            mode,
            is_in_first_half: match mode {
                Mode::Blend(progress) => progress < 0.5,
                Mode::Add(_) => true,
            },
            from_is_absolute: true,
            to_is_absolute: true,
            from_current: point(0.0, 0.0),
            from_sub_path_start: point(0.0, 0.0),
            to_current: point(0.0, 0.0),
            to_sub_path_start: point(0.0, 0.0),
        }
    }

    /// Blends or adds one coordinate of two points that may not use the same
    /// coordinate mode.
    fn blend_coordinate(&self, from: f32, to: f32, axis: Axis) -> f32 {
        let progress = match self.mode {
            Mode::Blend(progress) => progress,
            Mode::Add(repeat_count) => {
                debug_assert_eq!(self.from_is_absolute, self.to_is_absolute);
                return accumulate(from, to, repeat_count);
            }
        };

        if self.from_is_absolute == self.to_is_absolute {
            return lerp(from, to, progress);
        }

        let from_current = axis.of(self.from_current);
        let to_current = axis.of(self.to_current);

        // Express `to` in the coordinate mode of `from`.
        let to = if self.from_is_absolute {
            to + to_current
        } else {
            to - to_current
        };

        let value = lerp(from, to, progress);
        if self.is_in_first_half {
            return value;
        }

        // The output switches to the coordinate mode of `to`.
        let current = lerp(from_current, to_current, progress);
        if self.from_is_absolute {
            value - current
        } else {
            value + current
        }
    }

    fn blend_point(&self, from: Point, to: Point) -> Point {
        point(
            self.blend_coordinate(from.x, to.x, Axis::X),
            self.blend_coordinate(from.y, to.y, Axis::Y),
        )
    }

    /// For values that don't depend on the coordinate mode (arc radii and angle).
    fn blend_same_coordinates(&self, from: Vector, to: Vector) -> Vector {
        match self.mode {
            Mode::Blend(progress) => Vector::new(
                lerp(from.x, to.x, progress),
                lerp(from.y, to.y, progress),
            ),
            Mode::Add(repeat_count) => Vector::new(
                accumulate(from.x, to.x, repeat_count),
                accumulate(from.y, to.y, repeat_count),
            ),
        }
    }

    fn can_blend(&mut self, from: &PathSegmentData, to: &PathSegmentData) -> bool {
        self.from_is_absolute = from.command.is_absolute();
        self.to_is_absolute = to.command.is_absolute();

        if from.command == to.command {
            return true;
        }

        // Addition requires identical segment types, blending allows a different
        // coordinate mode.
        matches!(self.mode, Mode::Blend(_))
            && from.command.to_absolute() == to.command.to_absolute()
    }

    fn blend_segments(
        &mut self,
        index: usize,
        from: &PathSegmentData,
        to: &PathSegmentData,
    ) -> Result<PathSegmentData, Error> {
        if !self.can_blend(from, to) {
            return Err(Error::IncompatibleSegments {
                index,
                from: from.command,
                to: to.command,
            });
        }

        let command = if self.is_in_first_half {
            from.command
        } else {
            to.command
        };
        let mut blended = PathSegmentData::new(command);

        match to.command.to_absolute() {
            PathSegmentType::ClosePath => {}
            PathSegmentType::MoveToAbs
            | PathSegmentType::LineToAbs
            | PathSegmentType::CurveToQuadraticSmoothAbs => {
                blended.target_point = self.blend_point(from.target_point, to.target_point);
            }
            PathSegmentType::LineToHorizontalAbs => {
                blended.target_point.x =
                    self.blend_coordinate(from.target_point.x, to.target_point.x, Axis::X);
            }
            PathSegmentType::LineToVerticalAbs => {
                blended.target_point.y =
                    self.blend_coordinate(from.target_point.y, to.target_point.y, Axis::Y);
            }
            PathSegmentType::CurveToCubicAbs => {
                blended.point1 = self.blend_point(from.point1, to.point1);
                blended.point2 = self.blend_point(from.point2, to.point2);
                blended.target_point = self.blend_point(from.target_point, to.target_point);
            }
            PathSegmentType::CurveToCubicSmoothAbs => {
                blended.point2 = self.blend_point(from.point2, to.point2);
                blended.target_point = self.blend_point(from.target_point, to.target_point);
            }
            PathSegmentType::CurveToQuadraticAbs => {
                blended.point1 = self.blend_point(from.point1, to.point1);
                blended.target_point = self.blend_point(from.target_point, to.target_point);
            }
            PathSegmentType::ArcAbs => {
                blended.target_point = self.blend_point(from.target_point, to.target_point);
                blended.set_arc_radii(self.blend_same_coordinates(from.arc_radii(), to.arc_radii()));
                let angle = self.blend_same_coordinates(
                    Vector::new(from.arc_angle(), 0.0),
                    Vector::new(to.arc_angle(), 0.0),
                );
                blended.set_arc_angle(angle.x);
                if self.is_in_first_half {
                    blended.arc_large = from.arc_large;
                    blended.arc_sweep = from.arc_sweep;
                } else {
                    blended.arc_large = to.arc_large;
                    blended.arc_sweep = to.arc_sweep;
                }
            }
            _ => unreachable!(),
        }

        advance(&mut self.from_sub_path_start, &mut self.from_current, from);
        advance(&mut self.to_sub_path_start, &mut self.to_current, to);

        Ok(blended)
    }

    fn run<F, T, C>(&mut self, mut from: F, mut to: T, mut consumer: C) -> Result<(), Error>
    where
        F: PathSource,
        T: PathSource,
        C: PathConsumer,
    {
        let mut index = 0;
        while to.has_more_data() {
            let to_segment = to.parse_segment()?;
            // Past the end of `from`, blend from a zeroed segment of the same type.
            let from_segment = if from.has_more_data() {
                from.parse_segment()?
            } else {
                PathSegmentData::new(to_segment.command)
            };

            let blended = self.blend_segments(index, &from_segment, &to_segment)?;
            consumer.emit_segment(&blended);

            if !consumer.continue_consuming() {
                break;
            }

            index += 1;
        }

        Ok(())
    }
}

/// Moves the cursor of a path past `segment`.
fn advance(sub_path_start: &mut Point, current: &mut Point, segment: &PathSegmentData) {
    let to = segment.target_point;
    match segment.command {
        PathSegmentType::ClosePath => {
            *current = *sub_path_start;
        }
        PathSegmentType::MoveToAbs => {
            *current = to;
            *sub_path_start = to;
        }
        PathSegmentType::MoveToRel => {
            *current += to.to_vector();
            *sub_path_start = *current;
        }
        PathSegmentType::LineToHorizontalAbs => {
            current.x = to.x;
        }
        PathSegmentType::LineToHorizontalRel => {
            current.x += to.x;
        }
        PathSegmentType::LineToVerticalAbs => {
            current.y = to.y;
        }
        PathSegmentType::LineToVerticalRel => {
            current.y += to.y;
        }
        command if command.is_relative() => {
            *current += to.to_vector();
        }
        _ => {
            *current = to;
        }
    }
}

/// Interpolates or accumulates two paths segment by segment.
///
/// The `to` source drives the iteration. If `from` has fewer segments, the
/// missing ones are treated as segments of the same type with all values at zero.
///
/// Segments are compatible if they have the same type. When blending (but not
/// when adding), segments that only differ in their coordinate mode are
/// compatible too. In that case the result uses the coordinate mode of `from`
/// before the half-way point and the one of `to` after.
///
/// # Example
///
/// ```
/// use svg_path_animation::PathBlender;
/// use svg_path_data::*;
///
/// let from = build_byte_stream_from_string("M 0 0 L 10 10").unwrap();
/// let to = build_byte_stream_from_string("M 0 0 l 20 20").unwrap();
///
/// let mut output = ByteStreamBuilder::new();
/// PathBlender::new(from.source(), to.source(), &mut output)
///     .blend_animated_path(0.25)
///     .unwrap();
///
/// assert_eq!(build_string_from_byte_stream(&output.build()), "M 0 0 L 12.5 12.5");
/// ```
pub struct PathBlender<F, T, C> {
    from: F,
    to: T,
    consumer: C,
}

impl<F, T, C> PathBlender<F, T, C>
where
    F: PathSource,
    T: PathSource,
    C: PathConsumer,
{
    pub fn new(from: F, to: T, consumer: C) -> Self {
        PathBlender { from, to, consumer }
    }

    /// Interpolates from `from` (at 0.0) to `to` (at 1.0).
    ///
    /// Arc flags and segment types switch at 0.5.
    pub fn blend_animated_path(self, progress: f64) -> Result<(), Error> {
        BlendState::new(Mode::Blend(progress)).run(self.from, self.to, self.consumer)
    }

    /// Adds `to` multiplied by `repeat_count` to `from`.
    ///
    /// With a repeat count of zero the output is `from`, extended to the length
    /// of `to` if needed.
    pub fn add_animated_path(self, repeat_count: u32) -> Result<(), Error> {
        BlendState::new(Mode::Add(repeat_count)).run(self.from, self.to, self.consumer)
    }
}

#[cfg(test)]
use crate::data::{build_byte_stream_from_string, build_string_from_byte_stream, ByteStreamBuilder};

#[cfg(test)]
fn blend(from: &str, to: &str, progress: f64) -> Result<String, Error> {
    let from = build_byte_stream_from_string(from).unwrap();
    let to = build_byte_stream_from_string(to).unwrap();
    let mut output = ByteStreamBuilder::new();
    PathBlender::new(from.source(), to.source(), &mut output).blend_animated_path(progress)?;

    Ok(build_string_from_byte_stream(&output.build()))
}

#[cfg(test)]
fn add(from: &str, by: &str, repeat_count: u32) -> Result<String, Error> {
    let from = build_byte_stream_from_string(from).unwrap();
    let by = build_byte_stream_from_string(by).unwrap();
    let mut output = ByteStreamBuilder::new();
    PathBlender::new(from.source(), by.source(), &mut output).add_animated_path(repeat_count)?;

    Ok(build_string_from_byte_stream(&output.build()))
}

#[test]
fn blend_same_types() {
    let from = "M 0 0 C 0 10 10 10 10 0 H 20 V 5 A 5 5 0 0 1 30 5 Z";
    let to = "M 10 10 C 10 20 20 20 20 10 H 40 V 25 A 15 25 90 1 0 50 25 Z";

    assert_eq!(blend(from, to, 0.0).unwrap(), "M 0 0 C 0 10 10 10 10 0 H 20 V 5 A 5 5 0 0 1 30 5 Z");
    assert_eq!(
        blend(from, to, 0.5).unwrap(),
        "M 5 5 C 5 15 15 15 15 5 H 30 V 15 A 10 15 45 1 0 40 15 Z"
    );
    assert_eq!(blend(from, to, 1.0).unwrap(), "M 10 10 C 10 20 20 20 20 10 H 40 V 25 A 15 25 90 1 0 50 25 Z");
}

#[test]
fn blend_with_itself() {
    let src = "M 0.1 0.2 c 1.3 -2.7 3.3 4.1 5.9 6.7 s 1e-3 2 3 4 q 1 2 3 4 t 5 6 a 1 2 3 0 1 4 5 h 0.3 v 0.7 z";
    let stream = build_byte_stream_from_string(src).unwrap();

    for &progress in &[0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
        let mut output = ByteStreamBuilder::new();
        PathBlender::new(stream.source(), stream.source(), &mut output)
            .blend_animated_path(progress)
            .unwrap();
        assert_eq!(output.build(), stream);
    }
}

#[test]
fn blend_mixed_coordinate_modes() {
    let from = "M 0 0 L 10 10";
    let to = "M 0 0 l 20 20";

    assert_eq!(blend(from, to, 0.25).unwrap(), "M 0 0 L 12.5 12.5");
    assert_eq!(blend(from, to, 0.75).unwrap(), "M 0 0 l 17.5 17.5");

    // The current point of each path is taken into account.
    let from = "M 10 0 h 10";
    let to = "M 30 0 H 40";
    assert_eq!(blend(from, to, 0.25).unwrap(), "M 15 0 h 10");
    assert_eq!(blend(from, to, 0.5).unwrap(), "M 20 0 H 30");
}

#[test]
fn incompatible_segments() {
    assert_eq!(
        blend("M 0 0 L 1 1", "M 0 0 Q 1 1 2 2", 0.5),
        Err(Error::IncompatibleSegments {
            index: 1,
            from: PathSegmentType::LineToAbs,
            to: PathSegmentType::CurveToQuadraticAbs,
        })
    );

    assert_eq!(
        add("M 0 0 L 1 1", "M 0 0 l 1 1", 1),
        Err(Error::IncompatibleSegments {
            index: 1,
            from: PathSegmentType::LineToAbs,
            to: PathSegmentType::LineToRel,
        })
    );
}

#[test]
fn shorter_from() {
    assert_eq!(blend("M 0 0", "M 10 10 L 20 20", 0.5).unwrap(), "M 5 5 L 10 10");
    assert_eq!(blend("M 0 0 L 5 5 L 6 6", "M 10 10", 0.5).unwrap(), "M 5 5");
}

#[test]
fn addition() {
    assert_eq!(
        add("M 1 1 l 2 2 A 1 1 0 0 1 2 3", "M 1 2 l 3 4 A 1 2 3 1 0 5 6", 2).unwrap(),
        "M 3 5 l 8 10 A 3 5 6 0 1 12 15"
    );
    assert_eq!(add("M 1 1", "M 5 5", 0).unwrap(), "M 1 1");
}

#[test]
fn addition_requires_identical_segments() {
    for &repeat_count in &[0, 1, 3] {
        assert_eq!(
            add("M 0 0 L 1 1", "M 0 0 l 1 1", repeat_count),
            Err(Error::IncompatibleSegments {
                index: 1,
                from: PathSegmentType::LineToAbs,
                to: PathSegmentType::LineToRel,
            })
        );
    }
}

#[test]
fn mixed_modes_after_close_and_relative_move_to() {
    // The current point of `to` returns to its sub-path start after `z`.
    assert_eq!(
        blend("M 10 10 L 20 10 Z L 15 15", "M 30 30 l 10 0 z l 5 5", 0.75).unwrap(),
        "M 25 25 l 10 0 Z l 5 5"
    );

    assert_eq!(
        blend("M 10 10 m 5 5 L 20 20", "M 30 30 m 10 10 l 5 5", 0.25).unwrap(),
        "M 15 15 m 6.25 6.25 L 26.25 26.25"
    );
}
