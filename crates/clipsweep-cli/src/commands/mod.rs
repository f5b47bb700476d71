//! Command implementations.

pub mod sweep;

pub use self::sweep::{confirm, execute_sweep, Outcome};
