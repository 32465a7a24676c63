//! Top-level routed pages.

pub mod home;
