use crate::consumer::PathConsumer;
use crate::normalizer::PathNormalizer;
use crate::path::path::Builder;
use crate::path::Path;
use crate::segment::{PathSegmentData, PathSegmentType};

/// A `PathConsumer` that builds a `lyon_path::Path`.
///
/// Segments are normalized first, so the resulting path only contains line
/// segments and cubic bézier curves.
///
/// # Example
///
/// ```
/// use svg_path_data::{parse_path, PathGeometryBuilder, StringSource};
///
/// let mut builder = PathGeometryBuilder::new();
/// parse_path(StringSource::new("M 0 0 q 5 5 10 0 z"), &mut builder).unwrap();
/// let path = builder.build();
///
/// assert_eq!(path.iter().count(), 3);
/// ```
pub struct PathGeometryBuilder {
    normalizer: PathNormalizer,
    builder: Builder,
    in_sub_path: bool,
}

impl Default for PathGeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathGeometryBuilder {
    pub fn new() -> Self {
        PathGeometryBuilder {
            normalizer: PathNormalizer::new(),
            builder: Path::builder(),
            in_sub_path: false,
        }
    }

    /// Ends the current sub-path if any and returns the path.
    pub fn build(mut self) -> Path {
        if self.in_sub_path {
            self.builder.end(false);
        }

        self.builder.build()
    }
}

impl PathConsumer for PathGeometryBuilder {
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        let PathGeometryBuilder {
            normalizer,
            builder,
            in_sub_path,
        } = self;

        // Drawing after a close-path without a move-to starts where the closed
        // sub-path started.
        let restart_at = normalizer.sub_path_start();

        normalizer.emit_segment(segment, &mut |seg: &PathSegmentData| {
            match seg.command {
                PathSegmentType::MoveToAbs => {
                    if *in_sub_path {
                        builder.end(false);
                    }
                    builder.begin(seg.target_point);
                    *in_sub_path = true;
                    return;
                }
                PathSegmentType::ClosePath => {
                    if *in_sub_path {
                        builder.end(true);
                        *in_sub_path = false;
                    }
                    return;
                }
                _ => {}
            }

            if !*in_sub_path {
                builder.begin(restart_at);
                *in_sub_path = true;
            }

            match seg.command {
                PathSegmentType::LineToAbs => {
                    builder.line_to(seg.target_point);
                }
                PathSegmentType::CurveToCubicAbs => {
                    builder.cubic_bezier_to(seg.point1, seg.point2, seg.target_point);
                }
                _ => {
                    debug_assert!(false, "unexpected normalized segment {:?}", seg.command);
                }
            }
        });
    }
}

#[cfg(test)]
use crate::{math::point, path::PathEvent};

#[cfg(test)]
fn build(src: &str) -> Path {
    use crate::parser::parse_path;
    use crate::string_source::StringSource;

    let mut builder = PathGeometryBuilder::new();
    parse_path(StringSource::new(src), &mut builder).unwrap();

    builder.build()
}

#[test]
fn empty() {
    assert!(build("").iter().next().is_none());
}

#[test]
fn square() {
    let path = build("M 0 0 L 10 0 L 10 10 L 0 10 Z");
    let events: Vec<PathEvent> = path.iter().collect();

    assert_eq!(events.len(), 5);
    assert_eq!(
        events[0],
        PathEvent::Begin {
            at: point(0.0, 0.0)
        }
    );
    assert_eq!(
        events[4],
        PathEvent::End {
            last: point(0.0, 10.0),
            first: point(0.0, 0.0),
            close: true
        }
    );
}

#[test]
fn open_sub_paths() {
    let path = build("M 0 0 L 1 1 M 5 5 L 6 6");
    let events: Vec<PathEvent> = path.iter().collect();

    assert_eq!(events.len(), 6);
    assert!(matches!(events[2], PathEvent::End { close: false, .. }));
    assert!(matches!(events[5], PathEvent::End { close: false, .. }));
}

#[test]
fn draw_after_close() {
    let path = build("M 1 1 L 10 1 L 10 10 z l 5 0");
    let events: Vec<PathEvent> = path.iter().collect();

    assert_eq!(
        events[4],
        PathEvent::Begin {
            at: point(1.0, 1.0)
        }
    );
    assert_eq!(
        events[5],
        PathEvent::Line {
            from: point(1.0, 1.0),
            to: point(6.0, 1.0)
        }
    );
}

#[test]
fn curves() {
    let path = build("M 0 0 C 1 1 2 1 3 0 q 1 1 2 0 A 5 5 0 0 0 15 0");

    for event in path.iter().skip(1) {
        assert!(matches!(
            event,
            PathEvent::Cubic { .. } | PathEvent::End { .. }
        ));
    }
}
