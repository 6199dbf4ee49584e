//! Built-in AST sources

mod json;

pub use json::JsonAstSource;
