//! Command handler layer.
//!
//! Matches CLI input, picks a script and wires its output.
//! Printing itself lives in `services/*`.

pub mod runtime;

pub use runtime::handle_commands;
