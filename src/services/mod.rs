//! Service layer: the printer and the scripts it runs.
//!
//! ## Service map
//! - `printer.rs` — line printer over any `Write` sink, error mapping.
//! - `script.rs` — ordered print steps, the greeting sequence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - All stdout writes go through `Printer`; logs go to stderr.
//! - Keep command handlers thin; delegate to services.

pub mod output;
pub mod printer;
pub mod script;
