//! Source-text frontends.
//!
//! A frontend turns source text into a [`crate::syntax::SyntaxTree`] plus
//! a bound [`crate::semantic::TableSemantics`], so the engine can run over
//! real programs without a compiler behind it. Only the C# adapter ships.

pub mod catalog;
pub mod csharp;

pub use catalog::TypeCatalog;
pub use csharp::{CSharpFrontend, ParsedUnit};
