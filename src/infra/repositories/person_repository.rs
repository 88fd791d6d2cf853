//! Person repository: trait seam plus the SeaORM-backed store.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Select, Set, SqlErr,
};

use super::entities::person::{self, ActiveModel, Entity as PersonEntity};
use crate::domain::{NewPerson, PersonRecord, PersonRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Person repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Find a person by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<PersonRecord>>;

    /// Case-insensitive substring match over usernames
    async fn find_by_username_containing(&self, term: &str) -> AppResult<Vec<PersonRecord>>;

    /// All people, ordered by id
    async fn find_all(&self) -> AppResult<Vec<PersonRecord>>;

    /// Insert a person; the store assigns the id
    async fn save(&self, person: NewPerson) -> AppResult<PersonRecord>;

    /// Remove a person by id
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    /// Overwrite every mutable field of the person with the given id
    async fn update_person(
        &self,
        id: i32,
        username: String,
        password_hash: String,
        role: PersonRole,
    ) -> AppResult<()>;
}

/// Concrete implementation of PersonRepository over SeaORM
pub struct PersonStore {
    db: DatabaseConnection,
}

impl PersonStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<PersonRecord>> {
        let result = PersonEntity::find()
            .filter(person::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(PersonRecord::try_from).transpose()
    }

    async fn find_by_username_containing(&self, term: &str) -> AppResult<Vec<PersonRecord>> {
        let models = search_query(term)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(PersonRecord::try_from).collect()
    }

    async fn find_all(&self) -> AppResult<Vec<PersonRecord>> {
        let models = PersonEntity::find()
            .order_by_asc(person::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(PersonRecord::try_from).collect()
    }

    async fn save(&self, person: NewPerson) -> AppResult<PersonRecord> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(person.username),
            password_hash: Set(person.password_hash),
            role: Set(person.role.to_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        PersonRecord::try_from(model)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let result = PersonEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
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
        let active_model = ActiveModel {
            id: Set(id),
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(role.to_string()),
        };

        active_model.update(&self.db).await.map_err(map_write_err)?;
        Ok(())
    }
}

/// Map write failures so a unique index hit reads the same as the
/// service-level duplicate check.
fn map_write_err(err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        tracing::debug!("Unique constraint rejected write: {}", detail);
        return AppError::already_exists();
    }

    match err {
        DbErr::RecordNotUpdated => AppError::not_found(),
        other => AppError::from(other),
    }
}

/// `lower(username) LIKE '%term%'` over the lowercased, escaped term.
fn search_query(term: &str) -> Select<PersonEntity> {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    PersonEntity::find()
        .filter(Expr::expr(Func::lower(Expr::col(person::Column::Username))).like(pattern))
        .order_by_asc(person::Column::Id)
}

/// Escape LIKE wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
