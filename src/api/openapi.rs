//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{catalog, description, graph, health, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblios API",
        version = "0.1.0",
        description = "Library Catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        catalog::list_authors,
        catalog::list_books,
        // Loans
        loans::borrow_book,
        loans::return_book,
        // Description
        description::get_description,
        // Graph
        graph::list_books,
    ),
    components(
        schemas(
            // Catalog
            crate::models::Author,
            crate::models::Book,
            crate::models::BookView,
            crate::models::Genre,
            crate::models::Publisher,
            crate::models::UserAccount,
            crate::models::BorrowTransaction,
            // Loans
            loans::BorrowRequest,
            loans::ReturnRequest,
            loans::ActionResponse,
            // Description
            description::DescriptionResponse,
            // Graph
            crate::services::graph::GraphBook,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Catalog queries"),
        (name = "loans", description = "Borrow/return workflow"),
        (name = "description", description = "Generated descriptions"),
        (name = "graph", description = "Graph mirror queries")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
