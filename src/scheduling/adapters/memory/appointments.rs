//! In-memory appointment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::scheduling::domain::{
    AnimalId, Appointment, AppointmentId, DateRange, TimeWindow, VeterinarianId,
};
use crate::scheduling::ports::{
    AppointmentRepository, AppointmentRepositoryError, AppointmentRepositoryResult,
};

/// Thread-safe in-memory appointment repository.
///
/// Enforces the same store-level rules the production database carries:
/// unique identifiers and the no-double-booking window constraint for a
/// shared animal or veterinarian, so racing writers cannot both commit.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentRepository {
    state: Arc<RwLock<InMemoryAppointmentState>>,
}

#[derive(Debug, Default)]
struct InMemoryAppointmentState {
    appointments: HashMap<AppointmentId, Appointment>,
    writes: usize,
}

impl InMemoryAppointmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many inserts and updates have been committed.
    ///
    /// Lets tests assert that a no-op update performed no write.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.read().map(|state| state.writes).unwrap_or(0)
    }
}

/// Returns whether any stored appointment violates the window constraint
/// for the candidate, ignoring the candidate's own identifier.
fn violates_window_constraint(
    state: &InMemoryAppointmentState,
    candidate: &Appointment,
) -> bool {
    state.appointments.values().any(|existing| {
        existing.id() != candidate.id()
            && (existing.animal_id() == candidate.animal_id()
                || existing.veterinarian_id() == candidate.veterinarian_id())
            && existing.window().overlaps(&candidate.window())
    })
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn insert(&self, appointment: &Appointment) -> AppointmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AppointmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.appointments.contains_key(&appointment.id()) {
            return Err(AppointmentRepositoryError::DuplicateAppointment(
                appointment.id(),
            ));
        }
        if violates_window_constraint(&state, appointment) {
            return Err(AppointmentRepositoryError::WindowConflict);
        }
        state.appointments.insert(appointment.id(), appointment.clone());
        state.writes += 1;
        Ok(())
    }

    async fn update(&self, appointment: &Appointment) -> AppointmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AppointmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.appointments.contains_key(&appointment.id()) {
            return Err(AppointmentRepositoryError::NotFound(appointment.id()));
        }
        if violates_window_constraint(&state, appointment) {
            return Err(AppointmentRepositoryError::WindowConflict);
        }
        state.appointments.insert(appointment.id(), appointment.clone());
        state.writes += 1;
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: AppointmentId,
    ) -> AppointmentRepositoryResult<Option<Appointment>> {
        let state = self.state.read().map_err(|err| {
            AppointmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.appointments.get(&id).cloned())
    }

    async fn find_overlapping(
        &self,
        window: TimeWindow,
        animal_id: AnimalId,
        veterinarian_id: VeterinarianId,
        exclude: Option<AppointmentId>,
    ) -> AppointmentRepositoryResult<Vec<Appointment>> {
        let state = self.state.read().map_err(|err| {
            AppointmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut matches: Vec<Appointment> = state
            .appointments
            .values()
            .filter(|existing| exclude != Some(existing.id()))
            .filter(|existing| {
                existing.animal_id() == animal_id || existing.veterinarian_id() == veterinarian_id
            })
            .filter(|existing| existing.window().overlaps(&window))
            .cloned()
            .collect();
        matches.sort_by_key(|appointment| appointment.window().start());
        Ok(matches)
    }

    async fn list_for_veterinarian(
        &self,
        veterinarian_id: VeterinarianId,
        range: DateRange,
    ) -> AppointmentRepositoryResult<Vec<Appointment>> {
        let state = self.state.read().map_err(|err| {
            AppointmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut matches: Vec<Appointment> = state
            .appointments
            .values()
            .filter(|existing| existing.veterinarian_id() == veterinarian_id)
            .filter(|existing| range.contains(existing.window().start()))
            .cloned()
            .collect();
        matches.sort_by_key(|appointment| appointment.window().start());
        Ok(matches)
    }

    async fn exists_for_animal(&self, animal_id: AnimalId) -> AppointmentRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            AppointmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .appointments
            .values()
            .any(|existing| existing.animal_id() == animal_id))
    }
}
