//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::person_handler;
use crate::domain::{PersonInput, PersonRole, PersonView};

/// OpenAPI documentation for the library staff API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Staff account management for the library back office"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        person_handler::create_person,
        person_handler::list_people,
        person_handler::search_people,
        person_handler::get_person,
        person_handler::update_person,
        person_handler::delete_person,
    ),
    components(
        schemas(
            PersonRole,
            PersonInput,
            PersonView,
            person_handler::SearchParams,
        )
    ),
    tags(
        (name = "People", description = "Staff account operations")
    )
)]
pub struct ApiDoc;
