//! Common building blocks of spandump.
//!
//! A [`Span`] is a borrowed, typed view over contiguous memory. It can be
//! reinterpreted as another plain-old-data type without copying, as long as
//! the element sizes are compatible. [`DumpValue`] and [`quoted`] define how
//! single values and names are rendered as text.
pub mod error;
pub mod quote;
pub mod span;
pub mod value;

pub use error::{Error, Result};
pub use quote::{quoted, Quoted};
pub use span::Span;
pub use value::DumpValue;
