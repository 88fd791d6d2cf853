//! Shared test doubles: in-memory repository and a reversible hasher.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use library_api::api::{create_router, AppState};
use library_api::domain::{NewPerson, PasswordHasher, PersonRecord, PersonRole};
use library_api::errors::{AppError, AppResult};
use library_api::infra::PersonRepository;
use library_api::services::PersonServices;

/// Vec-backed repository mirroring the database's unique username index.
#[derive(Default)]
pub struct InMemoryPeople {
    rows: Mutex<Vec<PersonRecord>>,
}

impl InMemoryPeople {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<PersonRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPeople {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<PersonRecord>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.username == username).cloned())
    }

    async fn find_by_username_containing(&self, term: &str) -> AppResult<Vec<PersonRecord>> {
        let needle = term.to_lowercase();
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|p| p.username.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<PersonRecord>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn save(&self, person: NewPerson) -> AppResult<PersonRecord> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.username == person.username) {
            return Err(AppError::already_exists());
        }
        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let record = person.with_id(id);
        rows.push(record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::not_found());
        }
        Ok(())
    }

    async fn update_person(
        &self,
        id: i32,
        username: String,
        password_hash: String,
        role: PersonRole,
    ) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.username == username && p.id != id) {
            return Err(AppError::already_exists());
        }
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(AppError::not_found)?;
        row.username = username;
        row.password_hash = password_hash;
        row.role = role;
        Ok(())
    }
}

/// Deterministic hasher so assertions can predict the stored credential.
pub struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn encode(&self, plain_text: &str) -> AppResult<String> {
        Ok(format!("hashed:{}", plain_text))
    }
}

pub fn services(repo: Arc<InMemoryPeople>) -> PersonServices {
    PersonServices::new(repo, Arc::new(PrefixHasher))
}

pub fn router(repo: Arc<InMemoryPeople>) -> axum::Router {
    create_router(AppState::new(services(repo)))
}
