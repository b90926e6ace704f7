//! Debug dumps of typed memory spans.
//!
//! A span is rendered as one line of the form `"name": [v0, v1, ...]`.
//! When the span is reinterpreted as a narrower value type, values coming
//! from the same original element are grouped: `"position": [1,2,3,  4,5,6]`.
//!
//! Output always goes to a caller supplied [`std::io::Write`], [`Dumper`]
//! composes several dumps into an indented, object-like structure.
pub mod dump;
pub mod dumper;
pub mod error;
pub mod options;

pub use dump::{dump_array, dump_span, print_array, print_span, try_dump_span};
pub use dumper::Dumper;
pub use error::{Error, Result};
pub use options::DumpOptions;
pub use spandump_common::{quoted, DumpValue, Span};
