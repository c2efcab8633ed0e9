use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{CatalogResponse, HttpMethod, RouteResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "whiskey-route-docs API",
        version = "0.1.0",
        description = "Browsable catalog of the pages and endpoints of the whiskey tasting application"
    ),
    paths(
        handlers::health::health_handler,
        handlers::docs::docs_handler,
        handlers::catalog::catalog_handler,
        handlers::catalog::section_handler
    ),
    components(
        schemas(
            HttpMethod,
            RouteResponse,
            CatalogResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "docs", description = "Rendered documentation page"),
        (name = "catalog", description = "Route catalog as JSON")
    )
)]
pub struct ApiDoc;
