//! `{NAME}` placeholder templates: a two-state lexer and a resolver over [`VariableTable`].
//!
//! [`VariableTable`]: crate::variables::VariableTable

pub mod lexer;
pub mod resolve;

pub use lexer::{Diagnostic, Token, normalize_placeholder, tokenize};
pub use resolve::{Resolution, Template};
