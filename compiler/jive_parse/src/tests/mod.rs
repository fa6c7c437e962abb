//! Cross-cutting parser tests.
//!
//! The per-module `#[cfg(test)]` suites cover individual productions; the
//! modules here check whole-tree properties:
//! - `round_trip`: the tree reproduces the source byte for byte, valid or not
//! - `disambiguation`: the ambiguity decisions on realistic mixed input
//! - `properties`: property tests over generated source

mod disambiguation;
mod properties;
