use crate::error::{check_query, ApiError, ErrorResponse};
use crate::models::{CatalogResponse, FilterQuery, RouteResponse};
use crate::page::{Page, API_CONTAINER};
use crate::registry::{API_ROUTES, WEB_ROUTES};
use crate::routes;
use axum::{extract::Path, extract::Query, http::StatusCode, Json};

/// API routes still visible after typing `q` into the page's filter input
fn visible_api_routes(q: &str) -> Vec<RouteResponse> {
    let mut page = Page::docs();
    page.ready();
    page.input(q);

    page.container(API_CONTAINER)
        .map(|container| {
            container
                .cards
                .iter()
                .zip(API_ROUTES.iter())
                .filter(|(card, _)| card.visible)
                .map(|(_, route)| RouteResponse::from(route))
                .collect()
        })
        .unwrap_or_default()
}

/// GET /api/routes handler - Full route catalog
///
/// Web routes are always returned in full; `q` only narrows the API list.
#[utoipa::path(
    get,
    path = routes::CATALOG,
    params(
        ("q" = Option<String>, Query, description = "Filter term matched against API route path and summary")
    ),
    responses(
        (status = 200, description = "Route catalog", body = CatalogResponse),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn catalog_handler(
    Query(query): Query<FilterQuery>,
) -> Result<(StatusCode, Json<CatalogResponse>), ApiError> {
    let q = check_query(query.q.as_deref())?;

    let response = CatalogResponse {
        web: WEB_ROUTES.iter().map(RouteResponse::from).collect(),
        api: visible_api_routes(q),
    };

    tracing::info!(
        "Listed {} web and {} api routes (q: {:?})",
        response.web.len(),
        response.api.len(),
        q
    );

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/routes/{section} handler - One section of the catalog
#[utoipa::path(
    get,
    path = routes::CATALOG_SECTION,
    params(
        ("section" = String, Path, description = "Catalog section: web or api")
    ),
    responses(
        (status = 200, description = "Routes of the section", body = Vec<RouteResponse>),
        (status = 400, description = "Unknown section", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn section_handler(
    Path(section): Path<String>,
) -> Result<(StatusCode, Json<Vec<RouteResponse>>), ApiError> {
    let routes = match section.as_str() {
        "web" => &WEB_ROUTES[..],
        "api" => &API_ROUTES[..],
        _ => {
            tracing::info!("Rejected unknown route section '{}'", section);
            return Err(ApiError::UnknownSection(section));
        }
    };

    let data: Vec<RouteResponse> = routes.iter().map(RouteResponse::from).collect();
    tracing::info!("Listed {} routes in section '{}'", data.len(), section);

    Ok((StatusCode::OK, Json(data)))
}
