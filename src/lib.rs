//! Browsable documentation of the whiskey tasting application's routes.
//!
//! The page is an in-memory model ([`page::Page`]) rendered from the static
//! route lists in [`registry`]; [`app`] serves it over HTTP.

pub mod api_doc;
pub mod config;
pub mod dom;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod page;
pub mod registry;
pub mod render;
pub mod reveal;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use state::AppState;

/// Application router with every served path mounted
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::DOCS_PAGE, get(handlers::docs_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::CATALOG, get(handlers::catalog_handler))
        .route(routes::CATALOG_SECTION, get(handlers::section_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::page::{Page, API_CONTAINER};
    use crate::reveal::{IntersectionEntry, RevealState};
    use std::sync::Arc;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState {
            config: Arc::new(Config::default()),
        })
    }

    async fn status_of(uri: &str) -> StatusCode {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_all_routes_mounted() {
        assert_eq!(status_of("/").await, StatusCode::OK);
        assert_eq!(status_of("/health").await, StatusCode::OK);
        assert_eq!(status_of("/api/routes").await, StatusCode::OK);
        assert_eq!(status_of("/api/routes/api").await, StatusCode::OK);
        assert_eq!(status_of("/api-docs/openapi.json").await, StatusCode::OK);
        assert_eq!(status_of("/does-not-exist").await, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_page_lifecycle() {
        let mut page = Page::docs();
        page.ready();
        page.input("event");
        page.intersect(&[IntersectionEntry::new("api-section", 0.4)]);

        let api = page.container(API_CONTAINER).unwrap();
        assert!(api.cards.iter().any(|c| !c.visible));
        assert!(api.cards.iter().all(|c| c.meta().is_some()));
        assert_eq!(page.reveal_state("api-section"), Some(RevealState::Entered));
        assert!(page.to_html("Routes").contains("<section class=\"reveal in\" id=\"api-section\">"));
    }
}
