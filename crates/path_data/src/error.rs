use crate::segment::PathSegmentType;

use thiserror::Error;

/// The reason why some path data could not be parsed.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseStatus {
    #[error("expected a move-to command")]
    ExpectedMoveToCommand,
    #[error("expected a path command")]
    ExpectedPathCommand,
    #[error("expected a number")]
    ExpectedNumber,
    #[error("expected an arc flag ('0' or '1')")]
    ExpectedArcFlag,
    #[error("expected a non-negative value")]
    NegativeValue,
}

/// A parse error and the character offset at which it was detected.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[error("{status} at offset {locus}")]
pub struct ParseError {
    pub status: ParseStatus,
    /// 0-based offset in characters from the start of the source.
    pub locus: usize,
}

impl ParseError {
    pub fn new(status: ParseStatus, locus: usize) -> Self {
        ParseError { status, locus }
    }
}

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Two paths can't be blended or added because their segments don't match.
    #[error("segment {index}: can't combine {from:?} with {to:?}")]
    IncompatibleSegments {
        index: usize,
        from: PathSegmentType,
        to: PathSegmentType,
    },
    #[error("index {index} is out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[test]
fn messages() {
    let err = ParseError::new(ParseStatus::ExpectedNumber, 13);
    assert_eq!(err.to_string(), "expected a number at offset 13");

    let err: Error = err.into();
    assert_eq!(err.to_string(), "expected a number at offset 13");
}
