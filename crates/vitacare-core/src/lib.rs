//! vitacare-core
//!
//! Pure domain types shared by the VitaCare front-end crates: account
//! variants, the canonical registration field model, users and payments.
//! No async runtime and no I/O; this is the shared vocabulary.

pub mod error;
pub mod models;
