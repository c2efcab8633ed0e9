use crate::error::{check_query, ApiError, ErrorResponse};
use crate::models::FilterQuery;
use crate::page::Page;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, response::Html};

/// GET / handler - Route documentation page
///
/// Renders both route lists into a full HTML document. `q` is fed to the
/// filter input as if the user had typed it.
#[utoipa::path(
    get,
    path = routes::DOCS_PAGE,
    params(
        ("q" = Option<String>, Query, description = "Filter term applied to the API route list")
    ),
    responses(
        (status = 200, description = "Documentation page", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse)
    ),
    tag = "docs"
)]
pub async fn docs_handler(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, ApiError> {
    let q = check_query(query.q.as_deref())?;

    let mut page = Page::docs();
    page.ready();
    page.input(q);

    tracing::info!("Rendered documentation page (q: {:?})", q);

    Ok(Html(page.to_html(&state.config.docs_title)))
}
