//! Port definitions for the render scheduler.
//!
//! Traits the scheduler calls out through, implemented by the presentation layer.

pub mod presenter;
