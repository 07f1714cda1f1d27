//! Request validation for the scheduling core.
//!
//! Field-level rules live in [`rules`] as pure functions;
//! [`service::DefaultScheduleValidator`] layers the store-dependent checks
//! (animal existence, booking conflicts, owner-email uniqueness) on top
//! and implements the `ScheduleValidator` port.

pub mod rules;
pub mod service;

pub use service::DefaultScheduleValidator;
