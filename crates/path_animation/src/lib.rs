#![doc(html_logo_url = "https://nical.github.io/lyon-doc/lyon-logo.svg")]
#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Animation of SVG path data.
//!
//! Two paths with matching segment types can be interpolated (`blend`) or
//! accumulated (`add`), either segment by segment with a
//! [`PathBlender`](blender/struct.PathBlender.html) or through a flat list of numbers
//! with an [`InterpolablePath`](interpolable/struct.InterpolablePath.html).
//!
//! # Examples
//!
//! ```
//! use svg_path_animation::*;
//! use svg_path_data::{build_byte_stream_from_string, build_string_from_byte_stream};
//!
//! let from = build_byte_stream_from_string("M 0 0 L 10 0").unwrap();
//! let to = build_byte_stream_from_string("M 0 0 L 20 10").unwrap();
//!
//! let half_way = blend_byte_streams(&from, &to, 0.5).unwrap();
//! assert_eq!(build_string_from_byte_stream(&half_way), "M 0 0 L 15 5");
//! ```
//!

pub extern crate svg_path_data as data;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod animated;
pub mod blender;
pub mod interpolable;

pub use crate::animated::*;
#[doc(inline)]
pub use crate::blender::PathBlender;
#[doc(inline)]
pub use crate::interpolable::{InterpolableBuilder, InterpolablePath, InterpolatedSource};
