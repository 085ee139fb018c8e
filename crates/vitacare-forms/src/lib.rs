//! vitacare-forms
//!
//! Registration and sign-in form logic: the multi-variant registration
//! controller, its ordered validation rules, per-variant layouts, the
//! registration service seam and the sign-in schema.

pub mod controller;
pub mod error;
pub mod layout;
pub mod login;
pub mod registrar;
pub mod rules;
