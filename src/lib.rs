//! # grammar-tokens
//!
//! Derives the flat list of lexical token names defined by a tree-sitter style
//! `grammar.js` file.
//!
//! The core is [`extraction::TokenExtractor`], a single linear scan over the
//! grammar text. Everything around it is boundary plumbing:
//!
//! - [`source`] supplies the grammar text (local file, stdin, in-memory)
//! - [`config`] holds the markers the scan looks for
//! - [`formats`] renders the resulting [`tokens::TokenList`]
//!
//! ```text
//! let tokens = grammar_tokens::extract_tokens(&text);
//! for token in &tokens {
//!     println!("{token}");
//! }
//! ```

pub mod config;
pub mod extraction;
pub mod formats;
pub mod grammar;
pub mod source;
pub mod tokens;

pub use config::{ConfigError, ExtractorConfig};
pub use extraction::{extract_tokens, TokenExtractor};
pub use grammar::GrammarText;
pub use tokens::{TokenList, TokenName};
