//! Length measurements along a path.

use crate::consumer::PathConsumer;
use crate::geom::{CubicBezierSegment, LineSegment};
use crate::math::{point, Point};
use crate::normalizer::PathNormalizer;
use crate::segment::{PathSegmentData, PathSegmentType};

/// What a `TraversalStateBuilder` is looking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Measure the whole path.
    TotalLength,
    /// Find the point at a given distance from the start.
    PointAtLength,
    /// Find the index of the segment at a given distance from the start.
    SegmentAtLength,
}

/// Parameters for length measurements.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraversalOptions {
    /// Maximum distance between a curve and its flattened approximation.
    ///
    /// Default value: `TraversalOptions::DEFAULT_TOLERANCE`.
    pub tolerance: f32,
}

impl TraversalOptions {
    pub const DEFAULT_TOLERANCE: f32 = 0.01;

    pub const DEFAULT: Self = TraversalOptions {
        tolerance: Self::DEFAULT_TOLERANCE,
    };

    #[inline]
    pub fn tolerance(tolerance: f32) -> Self {
        TraversalOptions { tolerance }
    }

    #[inline]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Debug)]
struct TraversalState {
    mode: TraversalMode,
    tolerance: f32,
    desired_length: f32,
    total_length: f32,
    current_point: Point,
    segment_index: usize,
    segment_count: usize,
    success: bool,
}

impl TraversalState {
    fn is_searching(&self) -> bool {
        self.mode != TraversalMode::TotalLength
    }

    fn process_segment(&mut self, seg: &PathSegmentData) {
        if self.success {
            return;
        }

        match seg.command {
            PathSegmentType::MoveToAbs => {
                self.current_point = seg.target_point;
                if self.is_searching() && self.total_length >= self.desired_length {
                    self.success = true;
                }
            }
            PathSegmentType::LineToAbs | PathSegmentType::ClosePath => {
                self.process_line(&LineSegment {
                    from: self.current_point,
                    to: seg.target_point,
                });
            }
            PathSegmentType::CurveToCubicAbs => {
                let curve = CubicBezierSegment {
                    from: self.current_point,
                    ctrl1: seg.point1,
                    ctrl2: seg.point2,
                    to: seg.target_point,
                };
                curve.for_each_flattened(self.tolerance, &mut |line: &LineSegment<f32>| {
                    self.process_line(line);
                });

                if !self.success {
                    self.current_point = curve.to;
                }
            }
            _ => {
                debug_assert!(false, "unexpected normalized segment {:?}", seg.command);
            }
        }
    }

    fn process_line(&mut self, line: &LineSegment<f32>) {
        if self.success {
            return;
        }

        let length = line.length();
        if self.is_searching() && self.total_length + length >= self.desired_length {
            let t = if length > 0.0 {
                (self.desired_length - self.total_length) / length
            } else {
                1.0
            };
            self.current_point = line.sample(t.max(0.0).min(1.0));
            self.total_length = self.desired_length;
            self.success = true;
            return;
        }

        self.total_length += length;
        self.current_point = line.to;
    }
}

/// A `PathConsumer` that measures the path it receives.
///
/// In the `PointAtLength` and `SegmentAtLength` modes the builder stops consuming
/// as soon as the desired length is reached. If the path is shorter than the desired
/// length, the results refer to the end of the path.
///
/// # Example
///
/// ```
/// use svg_path_data::{parse_path, StringSource, TraversalMode, TraversalStateBuilder};
/// use svg_path_data::math::point;
///
/// let mut traversal = TraversalStateBuilder::new(TraversalMode::PointAtLength, 15.0);
/// parse_path(StringSource::new("M 0 0 h 10 v 10"), &mut traversal).unwrap();
///
/// assert_eq!(traversal.point(), point(10.0, 5.0));
/// assert_eq!(traversal.segment_index(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TraversalStateBuilder {
    normalizer: PathNormalizer,
    state: TraversalState,
}

impl TraversalStateBuilder {
    /// Negative lengths are treated as zero.
    pub fn new(mode: TraversalMode, desired_length: f32) -> Self {
        Self::with_options(mode, desired_length, &TraversalOptions::DEFAULT)
    }

    pub fn with_options(mode: TraversalMode, desired_length: f32, options: &TraversalOptions) -> Self {
        TraversalStateBuilder {
            normalizer: PathNormalizer::new(),
            state: TraversalState {
                mode,
                tolerance: options.tolerance,
                desired_length: desired_length.max(0.0),
                total_length: 0.0,
                current_point: point(0.0, 0.0),
                segment_index: 0,
                segment_count: 0,
                success: false,
            },
        }
    }

    #[inline]
    pub fn mode(&self) -> TraversalMode {
        self.state.mode
    }

    /// The accumulated length.
    ///
    /// This is the length of the whole path in `TotalLength` mode.
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.state.total_length
    }

    /// The point at the desired length, or the end of the path.
    #[inline]
    pub fn point(&self) -> Point {
        self.state.current_point
    }

    /// The 0-based index of the segment at the desired length, or of the last segment.
    #[inline]
    pub fn segment_index(&self) -> usize {
        self.state.segment_index
    }

    /// Whether the desired length was reached.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.success
    }
}

impl PathConsumer for TraversalStateBuilder {
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        let TraversalStateBuilder { normalizer, state } = self;
        if state.success {
            return;
        }

        state.segment_index = state.segment_count;
        state.segment_count += 1;

        normalizer.emit_segment(segment, &mut |seg: &PathSegmentData| {
            state.process_segment(seg);
        });
    }

    #[inline]
    fn continue_consuming(&self) -> bool {
        !self.state.success
    }
}

#[cfg(test)]
fn traverse(src: &str, mode: TraversalMode, length: f32) -> TraversalStateBuilder {
    use crate::parser::parse_path;
    use crate::string_source::StringSource;

    let mut traversal = TraversalStateBuilder::new(mode, length);
    parse_path(StringSource::new(src), &mut traversal).unwrap();

    traversal
}

#[test]
fn total_length_of_lines() {
    let t = traverse("M 0 0 L 3 4 h -3 z", TraversalMode::TotalLength, 0.0);
    assert_eq!(t.total_length(), 5.0 + 3.0 + 4.0);
    assert!(!t.is_done());
    assert!(t.continue_consuming());

    // Move-to commands don't add any length.
    let t = traverse("M 0 0 h 1 M 10 10 h 1", TraversalMode::TotalLength, 0.0);
    assert_eq!(t.total_length(), 2.0);
}

#[test]
fn total_length_of_curves() {
    // Half circle of radius 10.
    let t = traverse("M 0 0 A 10 10 0 0 1 20 0", TraversalMode::TotalLength, 0.0);
    let expected = 10.0 * std::f32::consts::PI;
    assert!((t.total_length() - expected).abs() < 0.05, "{}", t.total_length());

    let t = traverse("M 0 0 Q 5 0 10 0", TraversalMode::TotalLength, 0.0);
    assert!((t.total_length() - 10.0).abs() < 0.001);
}

#[test]
fn point_at_length() {
    let t = traverse("M 0 0 h 10 v 10 h -10", TraversalMode::PointAtLength, 25.0);
    assert_eq!(t.point(), point(5.0, 10.0));
    assert_eq!(t.segment_index(), 3);
    assert!(t.is_done());
    assert!(!t.continue_consuming());

    let t = traverse("M 1 2 h 10", TraversalMode::PointAtLength, 0.0);
    assert_eq!(t.point(), point(1.0, 2.0));
    assert_eq!(t.segment_index(), 0);

    // Negative lengths are clamped.
    let t = traverse("M 1 2 h 10", TraversalMode::PointAtLength, -5.0);
    assert_eq!(t.point(), point(1.0, 2.0));
}

#[test]
fn past_the_end() {
    let t = traverse("M 0 0 h 10 v 10", TraversalMode::PointAtLength, 100.0);
    assert_eq!(t.point(), point(10.0, 10.0));
    assert_eq!(t.segment_index(), 2);
    assert!(!t.is_done());

    let t = traverse("M 3 3 h 10 v 10 z", TraversalMode::SegmentAtLength, 100.0);
    assert_eq!(t.point(), point(3.0, 3.0));
    assert_eq!(t.segment_index(), 3);
}

#[test]
fn empty_path() {
    let t = traverse("", TraversalMode::PointAtLength, 10.0);
    assert_eq!(t.point(), point(0.0, 0.0));
    assert_eq!(t.segment_index(), 0);
    assert_eq!(t.total_length(), 0.0);
}

#[test]
fn segment_at_length() {
    let src = "M 0 0 h 10 a 5 5 0 0 1 0 10 h -10";
    assert_eq!(traverse(src, TraversalMode::SegmentAtLength, 5.0).segment_index(), 1);
    assert_eq!(traverse(src, TraversalMode::SegmentAtLength, 15.0).segment_index(), 2);
    assert_eq!(traverse(src, TraversalMode::SegmentAtLength, 30.0).segment_index(), 3);
}

#[test]
fn tolerance() {
    let src = "M 0 0 C 0 10 10 10 10 0";
    let mut coarse = TraversalStateBuilder::with_options(
        TraversalMode::TotalLength,
        0.0,
        &TraversalOptions::tolerance(1.0),
    );
    let mut fine = TraversalStateBuilder::with_options(
        TraversalMode::TotalLength,
        0.0,
        &TraversalOptions::DEFAULT.with_tolerance(0.001),
    );
    crate::parser::parse_path(crate::StringSource::new(src), &mut coarse).unwrap();
    crate::parser::parse_path(crate::StringSource::new(src), &mut fine).unwrap();

    // Flattening always underestimates the length of a convex curve.
    assert!(coarse.total_length() <= fine.total_length());
}
