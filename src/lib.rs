//! Herriot: veterinary appointment scheduling core.
//!
//! This crate provides the validation and conflict-resolution engine for a
//! veterinary calendar: deciding whether a proposed or modified appointment
//! is admissible given existing bookings, enforcing the status-transition
//! and cancellation policy, and deciding when a cancellation notice must be
//! emitted.
//!
//! # Architecture
//!
//! Herriot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, notifiers)
//!
//! # Modules
//!
//! - [`scheduling`]: Appointment booking, validation, lifecycle policy, and
//!   the animal registry bookings are made against

pub mod scheduling;
