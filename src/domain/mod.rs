//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — steps, run reports and the JSON envelope.
//! - `constants.rs` — the literal strings of the greeting sequence.
//!
//! Domain types are data-only: rendering a step is pure, writing it is
//! the printer's job.
//!
//! ## Compatibility note
//! `Step` and `RunReport` are serialized under `--json`; renaming a field
//! or a `kind` tag changes the output contract.

pub mod constants;
pub mod models;
