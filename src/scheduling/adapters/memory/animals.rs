//! In-memory animal repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::scheduling::domain::{Animal, AnimalId, OwnerEmail};
use crate::scheduling::ports::{AnimalRepository, AnimalRepositoryError, AnimalRepositoryResult};

/// Thread-safe in-memory animal repository.
///
/// Carries the store-level owner-email uniqueness constraint so the
/// validator's pre-check is never the only line of defence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnimalRepository {
    state: Arc<RwLock<InMemoryAnimalState>>,
}

#[derive(Debug, Default)]
struct InMemoryAnimalState {
    animals: HashMap<AnimalId, Animal>,
}

impl InMemoryAnimalRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn owner_email_taken(state: &InMemoryAnimalState, email: &OwnerEmail) -> bool {
    state
        .animals
        .values()
        .any(|animal| animal.owner_email() == Some(email))
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn insert(&self, animal: &Animal) -> AnimalRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AnimalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.animals.contains_key(&animal.id()) {
            return Err(AnimalRepositoryError::DuplicateAnimal(animal.id()));
        }
        if let Some(email) = animal.owner_email()
            && owner_email_taken(&state, email)
        {
            return Err(AnimalRepositoryError::DuplicateOwnerEmail(email.clone()));
        }
        state.animals.insert(animal.id(), animal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AnimalId) -> AnimalRepositoryResult<Option<Animal>> {
        let state = self.state.read().map_err(|err| {
            AnimalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.animals.get(&id).cloned())
    }

    async fn exists(&self, id: AnimalId) -> AnimalRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            AnimalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.animals.contains_key(&id))
    }

    async fn owner_email_exists(&self, email: &OwnerEmail) -> AnimalRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            AnimalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(owner_email_taken(&state, email))
    }

    async fn delete(&self, id: AnimalId) -> AnimalRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AnimalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.animals.remove(&id).is_none() {
            return Err(AnimalRepositoryError::NotFound(id));
        }
        Ok(())
    }
}
