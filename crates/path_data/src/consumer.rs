//! Receivers of path segments.
//!
//! A `PathConsumer` is handed segments one at a time, in document order.
//! Segments reaching a consumer are well-formed: errors are detected by the
//! [`PathSource`](../source/trait.PathSource.html) before anything is emitted.
//!
//! Implementations:
//!
//! - [`PathGeometryBuilder`](../geometry/struct.PathGeometryBuilder.html) builds a `lyon_path::Path`,
//! - [`ByteStreamBuilder`](../byte_stream/struct.ByteStreamBuilder.html) encodes a byte stream,
//! - [`PathStringBuilder`](../serializer/struct.PathStringBuilder.html) writes the SVG syntax,
//! - [`TraversalStateBuilder`](../traversal/struct.TraversalStateBuilder.html) measures the path,
//! - `Vec<PathSegmentData>` collects the segments.

use crate::segment::PathSegmentData;

pub trait PathConsumer {
    fn emit_segment(&mut self, segment: &PathSegmentData);

    /// Consumers that only need a prefix of the path return false once they are done.
    fn continue_consuming(&self) -> bool {
        true
    }
}

impl<'l, C: PathConsumer> PathConsumer for &'l mut C {
    #[inline]
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        (**self).emit_segment(segment);
    }

    #[inline]
    fn continue_consuming(&self) -> bool {
        (**self).continue_consuming()
    }
}

impl PathConsumer for Vec<PathSegmentData> {
    #[inline]
    fn emit_segment(&mut self, segment: &PathSegmentData) {
        self.push(*segment);
    }
}
