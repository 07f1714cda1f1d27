//! Appointment scheduling for Herriot.
//!
//! This module implements the booking core of the veterinary calendar:
//! admissibility checks for proposed or modified appointments (field
//! validation plus conflict detection against existing bookings for the
//! same animal or veterinarian), the appointment lifecycle policy (status
//! legality, the cancellation window, cancellation notices), and the
//! animal registry that bookings reference. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Rule enforcement in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
