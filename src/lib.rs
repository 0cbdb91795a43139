#![doc(html_logo_url = "https://nical.github.io/lyon-doc/lyon-logo.svg")]
#![deny(bare_trait_objects)]

//! SVG path data in Rust.
//!
//! # Crates
//!
//! This meta-crate (`svg_path`) reexports the following sub-crates for convenience:
//!
//! * **svg_path_data** - Parsing, serialization, binary encoding, geometry and length
//!   measurements of path data.
//! * **svg_path_animation** - Interpolation and accumulation of path data
//!   (enabled by the `animation` feature flag, on by default).
//!
//! Each `svg_path_<name>` crate is reexported as a `<name>` module in `svg_path`. For example:
//!
//! ```ignore
//! use svg_path_data::PathByteStream;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! use svg_path::data::PathByteStream;
//! ```
//!
//! The `lyon_path` crate that provides the geometry types is reexported as
//! `svg_path::path`, along with its `math` and `geom` modules.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## From a `d` attribute to geometry
//!
//! ```
//! use svg_path::data::*;
//!
//! let stream = build_byte_stream_from_string("M 10 10 h 80 a 10 10 0 0 1 0 20 z").unwrap();
//!
//! // The byte stream preserves the original segments.
//! assert_eq!(
//!     build_string_from_byte_stream(&stream),
//!     "M 10 10 h 80 a 10 10 0 0 1 0 20 Z"
//! );
//!
//! // Geometry only contains lines and cubic bézier curves.
//! let path = build_path_from_byte_stream(&stream).unwrap();
//! for event in path.iter() {
//!     println!("{:?}", event);
//! }
//!
//! let length = total_length(&stream).unwrap();
//! println!("the path is {} units long", length);
//! ```
//!
//! ## Animating a path
//!
//! ```
//! use svg_path::data::*;
//! use svg_path::animation::interpolate_path;
//!
//! let from = build_byte_stream_from_string("M 0 0 L 0 100").unwrap();
//! let to = build_byte_stream_from_string("M 100 0 L 100 100").unwrap();
//!
//! let value = interpolate_path(&from, &to, 0.5);
//! assert_eq!(build_string_from_byte_stream(value.byte_stream()), "M 50 0 L 50 100");
//! ```

pub extern crate svg_path_data;
#[cfg(feature = "animation")]
pub extern crate svg_path_animation;

#[cfg(feature = "animation")]
pub use svg_path_animation as animation;
pub use svg_path_data as data;
pub use svg_path_data::geom;
pub use svg_path_data::path;

pub use path::math;
