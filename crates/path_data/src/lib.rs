#![doc(html_logo_url = "https://nical.github.io/lyon-doc/lyon-logo.svg")]
#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Data structures and algorithms to work with SVG path data.
//!
//! Path data can be stored in three forms:
//!
//! - the textual SVG `d` attribute syntax,
//! - a compact binary [`PathByteStream`](byte_stream/struct.PathByteStream.html),
//! - a sequence of [`PathSegmentData`](segment/struct.PathSegmentData.html).
//!
//! Conversions between these forms (and to `lyon_path::Path` geometry) go through
//! a [`PathSource`](source/trait.PathSource.html) producing segments and a
//! [`PathConsumer`](consumer/trait.PathConsumer.html) receiving them, driven by
//! [`parse_path`](parser/fn.parse_path.html).
//!
//! # Examples
//!
//! ```
//! use svg_path_data::*;
//!
//! let stream = build_byte_stream_from_string("M 0 0 L 10 0 l 0 10 z").unwrap();
//!
//! assert_eq!(build_string_from_byte_stream(&stream), "M 0 0 L 10 0 l 0 10 Z");
//! let length = total_length(&stream).unwrap();
//! assert!((length - (20.0 + 200.0f32.sqrt())).abs() < 1e-4);
//!
//! let path = build_path_from_byte_stream(&stream).unwrap();
//! for event in path.iter() {
//!     println!("{:?}", event);
//! }
//! ```
//!

pub use lyon_path as path;
pub use lyon_path::geom;
pub use lyon_path::math;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod byte_stream;
mod codec;
pub mod consumer;
mod error;
pub mod geometry;
pub mod normalizer;
pub mod parser;
pub mod seg_list;
pub mod segment;
pub mod serializer;
pub mod source;
pub mod string_source;
pub mod traversal;
mod utilities;

#[doc(inline)]
pub use crate::byte_stream::{ByteStreamBuilder, ByteStreamSource, PathByteStream};
#[doc(inline)]
pub use crate::consumer::PathConsumer;
pub use crate::error::{Error, ParseError, ParseStatus};
#[doc(inline)]
pub use crate::geometry::PathGeometryBuilder;
#[doc(inline)]
pub use crate::normalizer::PathNormalizer;
#[doc(inline)]
pub use crate::parser::parse_path;
#[doc(inline)]
pub use crate::seg_list::PathSegList;
#[doc(inline)]
pub use crate::segment::{PathCoordinates, PathSegmentData, PathSegmentType};
#[doc(inline)]
pub use crate::serializer::PathStringBuilder;
#[doc(inline)]
pub use crate::source::{PathSource, SegmentListSource};
#[doc(inline)]
pub use crate::string_source::StringSource;
#[doc(inline)]
pub use crate::traversal::{TraversalMode, TraversalOptions, TraversalStateBuilder};
pub use crate::utilities::*;
