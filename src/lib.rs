//! cursorkit: capability-based traversal and generic algorithms.
//!
//! Containers describe what their cursors can do through the traits in
//! [`traits`]; the algorithms in [`algo`] are written once against those
//! traits and run on every container that provides the capabilities they
//! need. Ready-made containers live in [`ds`].

pub mod algo;
pub mod ds;
pub mod error;
pub mod prelude;
pub mod traits;
