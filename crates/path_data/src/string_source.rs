//! Reading segments from the SVG path syntax.

use crate::error::{ParseError, ParseStatus};
use crate::math::point;
use crate::segment::{PathSegmentData, PathSegmentType};
use crate::source::PathSource;

#[derive(Copy, Clone, Debug, PartialEq)]
enum State {
    /// Nothing has been read yet, the next segment must start with `M` or `m`.
    ExpectMoveTo,
    /// The next segment is either an explicit command or another group of
    /// arguments repeating the previous command.
    ExpectCommandOrArgument(PathSegmentType),
}

/// A `PathSource` reading the SVG `d` attribute syntax.
///
/// Error loci are offsets in characters (not bytes) from the start of the string.
///
/// # Example
///
/// ```
/// use svg_path_data::{PathSource, PathSegmentType, StringSource};
///
/// let mut src = StringSource::new("M1,2,3,4");
///
/// assert_eq!(src.parse_segment().unwrap().command, PathSegmentType::MoveToAbs);
/// assert_eq!(src.parse_segment().unwrap().command, PathSegmentType::LineToAbs);
/// assert!(!src.has_more_data());
/// ```
#[derive(Clone, Debug)]
pub struct StringSource<'l> {
    src: &'l str,
    /// In bytes.
    position: usize,
    state: State,
}

impl<'l> StringSource<'l> {
    pub fn new(src: &'l str) -> Self {
        let mut source = StringSource {
            src,
            position: 0,
            state: State::ExpectMoveTo,
        };
        source.skip_whitespace();

        source
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.position).cloned()
    }

    fn locus(&self, position: usize) -> usize {
        self.src[..position].chars().count()
    }

    fn error(&self, status: ParseStatus, position: usize) -> ParseError {
        ParseError::new(status, self.locus(position))
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n' | b'\x0C') = self.peek() {
            self.position += 1;
        }
    }

    /// Skips whitespace and at most one comma.
    fn skip_comma_whitespace(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(b',') {
            self.position += 1;
            self.skip_whitespace();
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.position;
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.position += 1;
        }

        self.position - start
    }

    fn parse_number(&mut self) -> Result<f32, ParseError> {
        let start = self.position;
        let fail = |this: &mut Self| -> Result<f32, ParseError> {
            this.position = start;
            Err(this.error(ParseStatus::ExpectedNumber, start))
        };

        if let Some(b'+' | b'-') = self.peek() {
            self.position += 1;
        }

        let mut digits = self.skip_digits();

        if self.peek() == Some(b'.') {
            self.position += 1;
            let fraction = self.skip_digits();
            if fraction == 0 {
                return fail(self);
            }
            digits += fraction;
        }

        if digits == 0 {
            return fail(self);
        }

        if let Some(b'e' | b'E') = self.peek() {
            self.position += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.position += 1;
            }
            if self.skip_digits() == 0 {
                return fail(self);
            }
        }

        match self.src[start..self.position].parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => fail(self),
        }
    }

    /// A number followed by an optional separator.
    fn parse_argument(&mut self) -> Result<f32, ParseError> {
        let value = self.parse_number()?;
        self.skip_comma_whitespace();

        Ok(value)
    }

    fn parse_flag(&mut self) -> Result<bool, ParseError> {
        let flag = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => {
                return Err(self.error(ParseStatus::ExpectedArcFlag, self.position));
            }
        };
        self.position += 1;
        self.skip_comma_whitespace();

        Ok(flag)
    }

    fn parse_point(&mut self) -> Result<crate::math::Point, ParseError> {
        let x = self.parse_argument()?;
        let y = self.parse_argument()?;

        Ok(point(x, y))
    }

    fn next_command(&mut self) -> Result<PathSegmentType, ParseError> {
        let position = self.position;
        let lookahead = self.peek();
        let explicit = lookahead
            .map(char::from)
            .and_then(PathSegmentType::from_command_char);

        let previous = match self.state {
            State::ExpectMoveTo => {
                return match explicit {
                    Some(command) if command.is_move_to() => {
                        self.position += 1;
                        self.skip_whitespace();
                        Ok(command)
                    }
                    _ => Err(self.error(ParseStatus::ExpectedMoveToCommand, position)),
                };
            }
            State::ExpectCommandOrArgument(previous) => previous,
        };

        if let Some(command) = explicit {
            self.position += 1;
            self.skip_whitespace();
            return Ok(command);
        }

        let starts_number = matches!(lookahead, Some(b'0'..=b'9' | b'+' | b'-' | b'.'));
        if !starts_number || previous == PathSegmentType::ClosePath {
            return Err(self.error(ParseStatus::ExpectedPathCommand, position));
        }

        // Extra coordinates after a move-to are implicit line-to commands.
        Ok(match previous {
            PathSegmentType::MoveToAbs => PathSegmentType::LineToAbs,
            PathSegmentType::MoveToRel => PathSegmentType::LineToRel,
            other => other,
        })
    }
}

impl<'l> PathSource for StringSource<'l> {
    #[inline]
    fn has_more_data(&self) -> bool {
        self.position < self.src.len()
    }

    fn parse_segment(&mut self) -> Result<PathSegmentData, ParseError> {
        let command = self.next_command()?;
        let mut segment = PathSegmentData::new(command);

        match command.to_absolute() {
            PathSegmentType::ClosePath => {}
            PathSegmentType::MoveToAbs
            | PathSegmentType::LineToAbs
            | PathSegmentType::CurveToQuadraticSmoothAbs => {
                segment.target_point = self.parse_point()?;
            }
            PathSegmentType::LineToHorizontalAbs => {
                segment.target_point.x = self.parse_argument()?;
            }
            PathSegmentType::LineToVerticalAbs => {
                segment.target_point.y = self.parse_argument()?;
            }
            PathSegmentType::CurveToCubicAbs => {
                segment.point1 = self.parse_point()?;
                segment.point2 = self.parse_point()?;
                segment.target_point = self.parse_point()?;
            }
            PathSegmentType::CurveToCubicSmoothAbs => {
                segment.point2 = self.parse_point()?;
                segment.target_point = self.parse_point()?;
            }
            PathSegmentType::CurveToQuadraticAbs => {
                segment.point1 = self.parse_point()?;
                segment.target_point = self.parse_point()?;
            }
            PathSegmentType::ArcAbs => {
                segment.point1 = self.parse_point()?;
                segment.point2.x = self.parse_argument()?;
                segment.arc_large = self.parse_flag()?;
                segment.arc_sweep = self.parse_flag()?;
                segment.target_point = self.parse_point()?;
            }
            _ => unreachable!(),
        }

        self.state = State::ExpectCommandOrArgument(command);

        Ok(segment)
    }
}

/// Parses a single number with optional surrounding whitespace.
///
/// Returns the value and the offset of the number in characters.
pub(crate) fn parse_single_number(src: &str) -> Result<(f32, usize), ParseError> {
    let mut source = StringSource::new(src);
    let locus = source.locus(source.position);
    let value = source.parse_number()?;
    source.skip_whitespace();

    if source.has_more_data() {
        return Err(source.error(ParseStatus::ExpectedNumber, source.position));
    }

    Ok((value, locus))
}

#[cfg(test)]
fn parse_all(src: &str) -> Result<Vec<PathSegmentData>, ParseError> {
    let mut src = StringSource::new(src);
    let mut segments = Vec::new();
    while src.has_more_data() {
        segments.push(src.parse_segment()?);
    }

    Ok(segments)
}

#[cfg(test)]
fn commands(segments: &[PathSegmentData]) -> Vec<PathSegmentType> {
    segments.iter().map(|s| s.command).collect()
}

#[test]
fn empty() {
    assert_eq!(parse_all(""), Ok(Vec::new()));
    assert_eq!(parse_all(" \t\r\n\x0C"), Ok(Vec::new()));
}

#[test]
fn simple_square() {
    use PathSegmentType::*;

    let segments = parse_all("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();
    assert_eq!(
        commands(&segments),
        vec![MoveToAbs, LineToAbs, LineToAbs, LineToAbs, ClosePath]
    );
    assert_eq!(segments[2].target_point, point(1.0, 1.0));
}

#[test]
fn all_commands() {
    use PathSegmentType::*;

    let segments = parse_all(
        "m1 2l3 4h5v6c1 2 3 4 5 6s1 2 3 4q1 2 3 4t5 6a1 2 3 0 1 4 5z\
         M1 2L3 4H5V6C1 2 3 4 5 6S1 2 3 4Q1 2 3 4T5 6A1 2 3 1 0 4 5Z",
    )
    .unwrap();

    assert_eq!(
        commands(&segments),
        vec![
            MoveToRel,
            LineToRel,
            LineToHorizontalRel,
            LineToVerticalRel,
            CurveToCubicRel,
            CurveToCubicSmoothRel,
            CurveToQuadraticRel,
            CurveToQuadraticSmoothRel,
            ArcRel,
            ClosePath,
            MoveToAbs,
            LineToAbs,
            LineToHorizontalAbs,
            LineToVerticalAbs,
            CurveToCubicAbs,
            CurveToCubicSmoothAbs,
            CurveToQuadraticAbs,
            CurveToQuadraticSmoothAbs,
            ArcAbs,
            ClosePath,
        ]
    );

    let cubic = segments[4];
    assert_eq!(cubic.point1, point(1.0, 2.0));
    assert_eq!(cubic.point2, point(3.0, 4.0));
    assert_eq!(cubic.target_point, point(5.0, 6.0));

    let smooth = segments[5];
    assert_eq!(smooth.point2, point(1.0, 2.0));
    assert_eq!(smooth.target_point, point(3.0, 4.0));

    let arc = segments[8];
    assert_eq!(arc.point1, point(1.0, 2.0));
    assert_eq!(arc.arc_angle(), 3.0);
    assert!(!arc.arc_large);
    assert!(arc.arc_sweep);
    assert_eq!(arc.target_point, point(4.0, 5.0));

    assert!(segments[18].arc_large);
    assert!(!segments[18].arc_sweep);
}

#[test]
fn implicit_move_to_repeat() {
    use PathSegmentType::*;

    let implicit = parse_all("M1,2,3,4").unwrap();
    let explicit = parse_all("M1,2 L3,4").unwrap();
    assert_eq!(implicit, explicit);

    let segments = parse_all("m1 2 3 4 5 6").unwrap();
    assert_eq!(commands(&segments), vec![MoveToRel, LineToRel, LineToRel]);
}

#[test]
fn implicit_repeat() {
    use PathSegmentType::*;

    let segments = parse_all("M1,1h2,3").unwrap();
    assert_eq!(
        commands(&segments),
        vec![MoveToAbs, LineToHorizontalRel, LineToHorizontalRel]
    );
    assert_eq!(segments[1].target_point.x, 2.0);
    assert_eq!(segments[2].target_point.x, 3.0);

    let segments = parse_all("M0 0 C1 2 3 4 5 6 7 8 9 10 11 12").unwrap();
    assert_eq!(
        commands(&segments),
        vec![MoveToAbs, CurveToCubicAbs, CurveToCubicAbs]
    );
}

#[test]
fn compact_numbers() {
    let segments = parse_all("M 0.6.5").unwrap();
    assert_eq!(segments[0].target_point, point(0.6, 0.5));

    let segments = parse_all("M-1-2L+3e1-.5E-1").unwrap();
    assert_eq!(segments[0].target_point, point(-1.0, -2.0));
    assert_eq!(segments[1].target_point, point(30.0, -0.05));
}

#[test]
fn compact_arc_flags() {
    let segments = parse_all("M100,200 a3,4,5,006,7").unwrap();
    let arc = segments[1];
    assert_eq!(arc.command, PathSegmentType::ArcRel);
    assert_eq!(arc.point1, point(3.0, 4.0));
    assert_eq!(arc.arc_angle(), 5.0);
    assert!(!arc.arc_large);
    assert!(!arc.arc_sweep);
    assert_eq!(arc.target_point, point(6.0, 7.0));
}

#[test]
fn errors() {
    fn err(src: &str) -> ParseError {
        parse_all(src).unwrap_err()
    }

    use ParseStatus::*;

    assert_eq!(err("M 10 10 L100 "), ParseError::new(ExpectedNumber, 13));
    assert_eq!(err(" 10 10"), ParseError::new(ExpectedMoveToCommand, 1));
    assert_eq!(err("L 10 10"), ParseError::new(ExpectedMoveToCommand, 0));
    assert_eq!(
        err("M0,0 A10,10 0 0,2 20,20"),
        ParseError::new(ExpectedArcFlag, 16)
    );
    assert_eq!(err("M 0 0 X 1 1"), ParseError::new(ExpectedPathCommand, 6));
    assert_eq!(err("M 0 0 z 1 1"), ParseError::new(ExpectedPathCommand, 8));
    assert_eq!(err("M 0 0,,1"), ParseError::new(ExpectedPathCommand, 6));
    assert_eq!(err("M 1. 2"), ParseError::new(ExpectedNumber, 2));
    assert_eq!(err("M 1e 2"), ParseError::new(ExpectedNumber, 2));
    assert_eq!(err("M - 2"), ParseError::new(ExpectedNumber, 2));
    assert_eq!(err("M 1e39 2"), ParseError::new(ExpectedNumber, 2));
}

#[test]
fn loci_are_in_characters() {
    assert_eq!(
        parse_all("M 0 0 é"),
        Err(ParseError::new(ParseStatus::ExpectedPathCommand, 6))
    );
    assert_eq!(
        parse_all("M 0 0 L 1 é"),
        Err(ParseError::new(ParseStatus::ExpectedNumber, 10))
    );
}

#[test]
fn partial_output_before_error() {
    let mut src = StringSource::new("M 1 2 L 3 4 L x");
    assert!(src.parse_segment().is_ok());
    assert!(src.parse_segment().is_ok());
    assert!(src.has_more_data());
    assert!(src.parse_segment().is_err());
}

#[test]
fn single_number() {
    assert_eq!(parse_single_number(" 1.5 "), Ok((1.5, 1)));
    assert_eq!(parse_single_number("-2"), Ok((-2.0, 0)));
    assert_eq!(
        parse_single_number(""),
        Err(ParseError::new(ParseStatus::ExpectedNumber, 0))
    );
    assert_eq!(
        parse_single_number("5px"),
        Err(ParseError::new(ParseStatus::ExpectedNumber, 1))
    );
    assert_eq!(
        parse_single_number("5,"),
        Err(ParseError::new(ParseStatus::ExpectedNumber, 1))
    );
}
