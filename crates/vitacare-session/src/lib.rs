//! vitacare-session
//!
//! The signed-in user, held in an explicit store created once at the
//! application root and handed to whatever needs it.

pub mod error;
pub mod store;
