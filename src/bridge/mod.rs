//! Adapter from a leveled, attribute-based logging front end
//!
//! A [`Handler`] receives [`ForeignRecord`]s, maps their [`Level`] onto a
//! canonical [`Severity`](crate::core::Severity), converts their attributes
//! and emits the result through a [`Logger`](crate::core::Logger).

pub mod handler;
pub mod level;
pub mod value;

pub use handler::{ForeignRecord, Handler};
pub use level::{Level, LEVEL_OFFSET};
pub use value::{coerce, flatten_into, Attr, ForeignValue, Kind, LogValue};
