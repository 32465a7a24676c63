//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`editor`, `learning`, `theme`) so individual
//! components can depend on small focused models.

pub mod editor;
pub mod learning;
pub mod theme;
