//! Output formats for extracted token lists
//!
//! - `lines`: one token per line
//! - `json`: a JSON array of strings
//! - `rust-enum`: a Rust `Token` enum with one variant per token

pub mod json;
pub mod lines;
pub mod registry;
pub mod rust_enum;

pub use json::JsonFormatter;
pub use lines::LinesFormatter;
pub use registry::{FormatError, FormatRegistry, TokenFormatter};
pub use rust_enum::{enum_variants, RustEnumFormatter};
