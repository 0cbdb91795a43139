use crate::consumer::PathConsumer;
use crate::error::ParseError;
use crate::source::PathSource;

/// Pulls segments out of `source` and hands them to `consumer` until the source is
/// exhausted or the consumer doesn't need more.
///
/// Stops at the first error. Segments emitted before the error are left in the
/// consumer.
///
/// # Example
///
/// ```
/// use svg_path_data::{parse_path, StringSource, PathSegmentData};
///
/// let mut segments: Vec<PathSegmentData> = Vec::new();
/// let result = parse_path(&mut StringSource::new("M 0 0 L 1 1 L oops"), &mut segments);
///
/// assert!(result.is_err());
/// assert_eq!(segments.len(), 2);
/// ```
pub fn parse_path<S, C>(mut source: S, mut consumer: C) -> Result<(), ParseError>
where
    S: PathSource,
    C: PathConsumer,
{
    while source.has_more_data() {
        let segment = source.parse_segment()?;
        consumer.emit_segment(&segment);

        if !consumer.continue_consuming() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
use crate::segment::{PathSegmentData, PathSegmentType};

#[cfg(test)]
struct FirstTwo(Vec<PathSegmentData>);

#[cfg(test)]
impl PathConsumer for FirstTwo {
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        self.0.push(*segment);
    }

    fn continue_consuming(&self) -> bool {
        self.0.len() < 2
    }
}

#[test]
fn stops_when_the_consumer_is_done() {
    use crate::string_source::StringSource;

    let mut consumer = FirstTwo(Vec::new());
    // The error at the end is never reached.
    parse_path(StringSource::new("M 0 0 L 1 1 L 2 2 X"), &mut consumer).unwrap();

    assert_eq!(consumer.0.len(), 2);
    assert_eq!(consumer.0[1].command, PathSegmentType::LineToAbs);
}

#[test]
fn empty_source() {
    use crate::string_source::StringSource;

    let mut segments = Vec::new();
    parse_path(StringSource::new("   "), &mut segments).unwrap();
    assert!(segments.is_empty());
}

#[test]
fn first_error_is_returned() {
    use crate::error::ParseStatus;
    use crate::string_source::StringSource;

    let mut segments = Vec::new();
    let err = parse_path(StringSource::new("M 0 0 L 1 1 Q 2"), &mut segments).unwrap_err();

    assert_eq!(err.status, ParseStatus::ExpectedNumber);
    assert_eq!(err.locus, 15);
    assert_eq!(segments.len(), 2);
}
