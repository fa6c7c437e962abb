//! Diagnostics for the Jive front end.
//!
//! Lexical and syntactic problems are reported as [`Diagnostic`] values and
//! never abort a parse; only grammar-authoring defects (E9xxx) are fatal, and
//! only at grammar-compile time.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
