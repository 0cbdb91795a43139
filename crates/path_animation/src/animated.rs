use crate::blender::PathBlender;
use crate::data::{ByteStreamBuilder, Error, PathByteStream};

/// Interpolates two byte streams.
///
/// See [`PathBlender::blend_animated_path`](blender/struct.PathBlender.html#method.blend_animated_path).
pub fn blend_byte_streams(
    from: &PathByteStream,
    to: &PathByteStream,
    progress: f64,
) -> Result<PathByteStream, Error> {
    let mut builder = ByteStreamBuilder::new();
    PathBlender::new(from.source(), to.source(), &mut builder).blend_animated_path(progress)?;

    Ok(builder.build())
}

/// Adds `by` multiplied by `repeat_count` to `from`.
///
/// If either stream is empty, `from` is returned unchanged.
pub fn add_byte_streams(
    from: &PathByteStream,
    by: &PathByteStream,
    repeat_count: u32,
) -> Result<PathByteStream, Error> {
    if from.is_empty() || by.is_empty() {
        return Ok(from.clone());
    }

    let mut builder = ByteStreamBuilder::new();
    PathBlender::new(from.source(), by.source(), &mut builder).add_animated_path(repeat_count)?;

    Ok(builder.build())
}

/// The value of an animated path at a given progress.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimatedPath {
    /// The two paths were compatible and got interpolated.
    Interpolated(PathByteStream),
    /// The two paths could not be interpolated, the value is one of them.
    Discrete(PathByteStream),
}

impl AnimatedPath {
    pub fn byte_stream(&self) -> &PathByteStream {
        match self {
            AnimatedPath::Interpolated(stream) | AnimatedPath::Discrete(stream) => stream,
        }
    }

    pub fn into_byte_stream(self) -> PathByteStream {
        match self {
            AnimatedPath::Interpolated(stream) | AnimatedPath::Discrete(stream) => stream,
        }
    }

    pub fn is_interpolated(&self) -> bool {
        matches!(self, AnimatedPath::Interpolated(_))
    }
}

/// Interpolates two paths if possible, otherwise switches from one to the other
/// half-way.
///
/// ```
/// use svg_path_animation::{interpolate_path, AnimatedPath};
/// use svg_path_data::build_byte_stream_from_string;
///
/// let from = build_byte_stream_from_string("M 0 0 L 10 0").unwrap();
/// let to = build_byte_stream_from_string("M 0 0 Q 5 5 10 0").unwrap();
///
/// assert_eq!(interpolate_path(&from, &to, 0.4), AnimatedPath::Discrete(from.clone()));
/// assert_eq!(interpolate_path(&from, &to, 0.6), AnimatedPath::Discrete(to.clone()));
/// ```
pub fn interpolate_path(from: &PathByteStream, to: &PathByteStream, progress: f64) -> AnimatedPath {
    let from_count = from.segment_count();
    let to_count = to.segment_count();

    if from_count == to_count {
        match blend_byte_streams(from, to, progress) {
            Ok(stream) => {
                return AnimatedPath::Interpolated(stream);
            }
            Err(e) => {
                log::debug!("Path animation falls back to discrete: {}", e);
            }
        }
    } else {
        log::debug!(
            "Path animation falls back to discrete: {} segments vs {}",
            from_count,
            to_count
        );
    }

    let value = if progress < 0.5 { from } else { to };

    AnimatedPath::Discrete(value.clone())
}

#[cfg(test)]
use crate::data::{build_byte_stream_from_string, build_string_from_byte_stream};

#[test]
fn blend_identity() {
    let a = build_byte_stream_from_string("M 0.3 0.7 q 1 2 3 4 A 1 1 0 1 1 5 5 z").unwrap();
    assert_eq!(blend_byte_streams(&a, &a, 0.37).unwrap(), a);
}

#[test]
fn add_then_subtract() {
    let a = build_byte_stream_from_string("M 1 2 L 3 4 c 1 1 2 2 3 3 Z").unwrap();
    let b = build_byte_stream_from_string("M 10 20 L 30 40 c 5 6 7 8 9 10 Z").unwrap();
    let minus_b = build_byte_stream_from_string("M -10 -20 L -30 -40 c -5 -6 -7 -8 -9 -10 Z").unwrap();

    let sum = add_byte_streams(&a, &b, 1).unwrap();
    assert_eq!(
        build_string_from_byte_stream(&sum),
        "M 11 22 L 33 44 c 6 7 9 10 12 13 Z"
    );
    assert_eq!(add_byte_streams(&sum, &minus_b, 1).unwrap(), a);
}

#[test]
fn add_with_empty() {
    let a = build_byte_stream_from_string("M 1 2").unwrap();
    let empty = PathByteStream::new();
    assert_eq!(add_byte_streams(&a, &empty, 3).unwrap(), a);
    assert_eq!(add_byte_streams(&empty, &a, 3).unwrap(), empty);
}

#[test]
fn discrete_fallback() {
    let from = build_byte_stream_from_string("M 0 0 L 1 1").unwrap();
    let to = build_byte_stream_from_string("M 0 0 L 1 1 L 2 2").unwrap();

    assert_eq!(interpolate_path(&from, &to, 0.2), AnimatedPath::Discrete(from.clone()));
    assert_eq!(interpolate_path(&from, &to, 0.5), AnimatedPath::Discrete(to.clone()));

    let to = build_byte_stream_from_string("M 2 2 l 3 3").unwrap();
    let value = interpolate_path(&from, &to, 0.5);
    assert!(value.is_interpolated());
    assert_eq!(build_string_from_byte_stream(value.byte_stream()), "M 1 1 l 2 2");
}
