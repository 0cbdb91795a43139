use crate::consumer::PathConsumer;
use crate::segment::{PathSegmentData, PathSegmentType};

/// A `PathConsumer` that builds a `String` representation of the path
/// using the SVG syntax.
///
/// Segments are written as they are received, without normalization: relative
/// and smooth commands are preserved. Each segment is the command letter followed by
/// its arguments separated with single spaces, and segments are separated with a
/// single space.
pub struct PathStringBuilder {
    path: String,
}

impl Default for PathStringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStringBuilder {
    pub fn new() -> Self {
        PathStringBuilder {
            path: String::new(),
        }
    }

    pub fn build(self) -> String {
        self.path
    }

    fn flag(value: bool) -> u32 {
        if value {
            1
        } else {
            0
        }
    }
}

impl PathConsumer for PathStringBuilder {
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }

        self.path.push(segment.command.command_char());

        let to = segment.target_point;
        let p1 = segment.point1;
        let p2 = segment.point2;
        match segment.command.to_absolute() {
            PathSegmentType::ClosePath => {}
            PathSegmentType::MoveToAbs
            | PathSegmentType::LineToAbs
            | PathSegmentType::CurveToQuadraticSmoothAbs => {
                self.path += &format!(" {} {}", to.x, to.y);
            }
            PathSegmentType::LineToHorizontalAbs => {
                self.path += &format!(" {}", to.x);
            }
            PathSegmentType::LineToVerticalAbs => {
                self.path += &format!(" {}", to.y);
            }
            PathSegmentType::CurveToCubicAbs => {
                self.path += &format!(
                    " {} {} {} {} {} {}",
                    p1.x, p1.y, p2.x, p2.y, to.x, to.y
                );
            }
            PathSegmentType::CurveToCubicSmoothAbs => {
                self.path += &format!(" {} {} {} {}", p2.x, p2.y, to.x, to.y);
            }
            PathSegmentType::CurveToQuadraticAbs => {
                self.path += &format!(" {} {} {} {}", p1.x, p1.y, to.x, to.y);
            }
            PathSegmentType::ArcAbs => {
                self.path += &format!(
                    " {} {} {} {} {} {} {}",
                    p1.x,
                    p1.y,
                    segment.arc_angle(),
                    Self::flag(segment.arc_large),
                    Self::flag(segment.arc_sweep),
                    to.x,
                    to.y
                );
            }
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
fn reserialize(src: &str) -> String {
    use crate::parser::parse_path;
    use crate::string_source::StringSource;

    let mut builder = PathStringBuilder::new();
    parse_path(StringSource::new(src), &mut builder).unwrap();

    builder.build()
}

#[test]
fn canonical_syntax() {
    assert_eq!(reserialize(""), "");
    assert_eq!(reserialize("M1,2,3,4z"), "M 1 2 L 3 4 Z");
    assert_eq!(reserialize("m1 2 3 4 z"), "m 1 2 l 3 4 Z");
    assert_eq!(reserialize("M1,1h2,3"), "M 1 1 h 2 h 3");
    assert_eq!(reserialize("M 0.6.5"), "M 0.6 0.5");
    assert_eq!(
        reserialize("M100,200 a3,4,5,006,7"),
        "M 100 200 a 3 4 5 0 0 6 7"
    );
    assert_eq!(
        reserialize("M0 0C1 2 3 4 5 6S1 2 3 4Q1 2 3 4T5 6V-1.5H+2e1"),
        "M 0 0 C 1 2 3 4 5 6 S 1 2 3 4 Q 1 2 3 4 T 5 6 V -1.5 H 20"
    );
    assert_eq!(
        reserialize("M 0 0 A 10 20 -30 1 1 5 5"),
        "M 0 0 A 10 20 -30 1 1 5 5"
    );
}

#[test]
fn stable_round_trip() {
    let once = reserialize("M.5-1e-1 l.1.2.3.4 Q 1 1 2 2 t3 3 z m 1 1");
    assert_eq!(reserialize(&once), once);
}
