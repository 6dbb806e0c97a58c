//! Ten-pin bowling (workspace facade crate).
//!
//! This package keeps the public `tenpin::{core,console,types}` API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use tenpin_console as console;
pub use tenpin_core as core;
pub use tenpin_types as types;
