//! Conversion of arbitrary segments into a minimal set of absolute primitives.
//!
//! The normalized form only contains `MoveToAbs`, `LineToAbs`, `CurveToCubicAbs`
//! and `ClosePath` segments:
//!
//! - relative coordinates are made absolute,
//! - horizontal and vertical lines become regular lines,
//! - quadratic curves are elevated to cubic curves,
//! - the implicit control point of smooth curves is made explicit,
//! - arcs are approximated with cubic curves.
//!
//! Geometry and length computations share this code so that they agree on the
//! shape of a path.

use crate::geom::{ArcFlags, CubicBezierSegment, SvgArc};
use crate::math::{point, Angle, Point};
use crate::segment::{PathSegmentData, PathSegmentType};

/// Stateful converter from any segment to normalized segments.
///
/// Segments must be passed in order since relative coordinates and smooth curves
/// depend on the previous ones.
#[derive(Clone, Debug)]
pub struct PathNormalizer {
    sub_path_start: Point,
    current: Point,
    /// Last control point of the previous curve, reflected by smooth curves.
    control: Point,
    previous: Option<PathSegmentType>,
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PathNormalizer {
    pub fn new() -> Self {
        PathNormalizer {
            sub_path_start: point(0.0, 0.0),
            current: point(0.0, 0.0),
            control: point(0.0, 0.0),
            previous: None,
        }
    }

    /// End point of the last normalized segment.
    #[inline]
    pub fn current_position(&self) -> Point {
        self.current
    }

    /// Position of the last move-to, where a close-path returns.
    #[inline]
    pub fn sub_path_start(&self) -> Point {
        self.sub_path_start
    }

    /// Normalizes one segment and passes the result to `output`.
    ///
    /// `output` is called once per normalized segment: zero times for degenerate arcs,
    /// several times for arcs approximated with more than one curve.
    pub fn emit_segment<F>(&mut self, segment: &PathSegmentData, output: &mut F)
    where
        F: FnMut(&PathSegmentData),
    {
        let mut seg = *segment;
        let current = self.current;

        if seg.command.is_relative() {
            let offset = current.to_vector();
            seg.target_point += offset;
            if seg.command != PathSegmentType::ArcRel {
                seg.point1 += offset;
                seg.point2 += offset;
            }
        }

        let command = seg.command.to_absolute();

        match command {
            PathSegmentType::ClosePath => {
                seg.target_point = self.sub_path_start;
                output(&PathSegmentData {
                    target_point: self.sub_path_start,
                    ..PathSegmentData::close_path()
                });
            }
            PathSegmentType::MoveToAbs => {
                self.sub_path_start = seg.target_point;
                output(&PathSegmentData::move_to(seg.target_point));
            }
            PathSegmentType::LineToAbs => {
                output(&PathSegmentData::line_to(seg.target_point));
            }
            PathSegmentType::LineToHorizontalAbs => {
                seg.target_point.y = current.y;
                output(&PathSegmentData::line_to(seg.target_point));
            }
            PathSegmentType::LineToVerticalAbs => {
                seg.target_point.x = current.x;
                output(&PathSegmentData::line_to(seg.target_point));
            }
            PathSegmentType::CurveToCubicAbs | PathSegmentType::CurveToCubicSmoothAbs => {
                if command == PathSegmentType::CurveToCubicSmoothAbs {
                    seg.point1 = if self.previous.map_or(false, PathSegmentType::is_cubic) {
                        current + (current - self.control)
                    } else {
                        current
                    };
                }
                self.control = seg.point2;
                output(&PathSegmentData::cubic_bezier_to(
                    seg.point1,
                    seg.point2,
                    seg.target_point,
                ));
            }
            PathSegmentType::CurveToQuadraticAbs | PathSegmentType::CurveToQuadraticSmoothAbs => {
                if command == PathSegmentType::CurveToQuadraticSmoothAbs {
                    seg.point1 = if self.previous.map_or(false, PathSegmentType::is_quadratic) {
                        current + (current - self.control)
                    } else {
                        current
                    };
                }
                let ctrl = seg.point1;
                let to = seg.target_point;
                self.control = ctrl;
                output(&PathSegmentData::cubic_bezier_to(
                    current + (ctrl - current) * (2.0 / 3.0),
                    to + (ctrl - to) * (2.0 / 3.0),
                    to,
                ));
            }
            PathSegmentType::ArcAbs => {
                emit_arc(current, &seg, output);
            }
            _ => unreachable!(),
        }

        self.current = seg.target_point;
        self.previous = Some(command);
    }
}

fn emit_arc<F>(from: Point, seg: &PathSegmentData, output: &mut F)
where
    F: FnMut(&PathSegmentData),
{
    let to = seg.target_point;
    if from == to {
        return;
    }

    let arc = SvgArc {
        from,
        to,
        radii: seg.arc_radii(),
        x_rotation: Angle::degrees(seg.arc_angle()),
        flags: ArcFlags {
            large_arc: seg.arc_large,
            sweep: seg.arc_sweep,
        },
    };

    if arc.is_straight_line() {
        output(&PathSegmentData::line_to(to));
        return;
    }

    // Hold back each curve until the next one is known so that the last one can
    // be snapped to the exact end point.
    let mut pending: Option<CubicBezierSegment<f32>> = None;
    arc.for_each_cubic_bezier(&mut |curve: &CubicBezierSegment<f32>| {
        if let Some(prev) = pending.take() {
            output(&PathSegmentData::cubic_bezier_to(prev.ctrl1, prev.ctrl2, prev.to));
        }
        pending = Some(*curve);
    });

    match pending {
        Some(last) => {
            output(&PathSegmentData::cubic_bezier_to(last.ctrl1, last.ctrl2, to));
        }
        None => {
            output(&PathSegmentData::line_to(to));
        }
    }
}

#[cfg(test)]
fn normalize(src: &str) -> Vec<PathSegmentData> {
    use crate::source::PathSource;
    use crate::string_source::StringSource;

    let mut normalizer = PathNormalizer::new();
    let mut output = Vec::new();
    let mut src = StringSource::new(src);
    while src.has_more_data() {
        let segment = src.parse_segment().unwrap();
        normalizer.emit_segment(&segment, &mut |s: &PathSegmentData| output.push(*s));
    }

    output
}

#[test]
fn relative_to_absolute() {
    let segments = normalize("m 10 10 l 5 0 h 5 v 5 z l 1 1");

    assert_eq!(
        segments,
        vec![
            PathSegmentData::move_to(point(10.0, 10.0)),
            PathSegmentData::line_to(point(15.0, 10.0)),
            PathSegmentData::line_to(point(20.0, 10.0)),
            PathSegmentData::line_to(point(20.0, 15.0)),
            PathSegmentData {
                target_point: point(10.0, 10.0),
                ..PathSegmentData::close_path()
            },
            PathSegmentData::line_to(point(11.0, 11.0)),
        ]
    );
}

#[test]
fn quadratic_to_cubic() {
    let segments = normalize("M 0 0 Q 3 3 6 0");

    assert_eq!(
        segments[1],
        PathSegmentData::cubic_bezier_to(point(2.0, 2.0), point(4.0, 2.0), point(6.0, 0.0))
    );
}

#[test]
fn smooth_curves() {
    // Reflected control point.
    let segments = normalize("M 0 0 C 0 1 2 1 2 0 S 4 -1 4 0");
    assert_eq!(
        segments[2],
        PathSegmentData::cubic_bezier_to(point(2.0, -1.0), point(4.0, -1.0), point(4.0, 0.0))
    );

    // No previous cubic: the first control point is the current position.
    let segments = normalize("M 0 0 L 1 0 S 2 1 3 0");
    assert_eq!(
        segments[2],
        PathSegmentData::cubic_bezier_to(point(1.0, 0.0), point(2.0, 1.0), point(3.0, 0.0))
    );

    // A quadratic doesn't provide a control point for a smooth cubic.
    let segments = normalize("M 0 0 Q 3 3 6 0 S 7 1 8 0");
    assert_eq!(segments[2].point1, point(6.0, 0.0));

    let segments = normalize("M 0 0 Q 3 3 6 0 T 12 0");
    assert_eq!(
        segments[2],
        PathSegmentData::cubic_bezier_to(point(8.0, -2.0), point(10.0, -2.0), point(12.0, 0.0))
    );
}

#[test]
fn arcs() {
    // Same end points: omitted.
    let segments = normalize("M 1 1 A 5 5 0 0 1 1 1");
    assert_eq!(segments.len(), 1);

    // Zero radius: straight line.
    let segments = normalize("M 1 1 A 0 5 0 0 1 10 1");
    assert_eq!(segments[1], PathSegmentData::line_to(point(10.0, 1.0)));

    let segments = normalize("M 0 0 a 10 10 0 1 1 0 20");
    assert!(segments.len() > 2);
    for segment in &segments[1..] {
        assert_eq!(segment.command, PathSegmentType::CurveToCubicAbs);
    }
    assert_eq!(segments.last().unwrap().target_point, point(0.0, 20.0));
}
