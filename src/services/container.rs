//! Service container - wires every person use case to its collaborators.
//!
//! Collaborators are passed in explicitly; there is no ambient registry.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{Command, CreatePerson, DeletePerson, GetPerson, ListPeople, Query, SearchPeople, UpdatePerson};
use crate::domain::{Argon2Hasher, PasswordHasher, PersonInput, PersonView, UpdatePersonCommand};
use crate::infra::{PersonRepository, PersonStore};

/// All person services, shareable across request handlers
#[derive(Clone)]
pub struct PersonServices {
    pub create: Arc<dyn Command<PersonInput, PersonView>>,
    pub update: Arc<dyn Command<UpdatePersonCommand, PersonView>>,
    pub delete: Arc<dyn Command<String, ()>>,
    pub get: Arc<dyn Query<String, PersonView>>,
    pub search: Arc<dyn Query<String, Vec<PersonView>>>,
    pub list: Arc<dyn Query<(), Vec<PersonView>>>,
}

impl PersonServices {
    /// Build every service over the given repository and hasher
    pub fn new(repo: Arc<dyn PersonRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            create: Arc::new(CreatePerson::new(repo.clone(), hasher.clone())),
            update: Arc::new(UpdatePerson::new(repo.clone(), hasher)),
            delete: Arc::new(DeletePerson::new(repo.clone())),
            get: Arc::new(GetPerson::new(repo.clone())),
            search: Arc::new(SearchPeople::new(repo.clone())),
            list: Arc::new(ListPeople::new(repo)),
        }
    }

    /// Production wiring: SeaORM store and Argon2 hashing
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(PersonStore::new(db)), Arc::new(Argon2Hasher::new()))
    }
}
