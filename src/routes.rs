// Route path constants - single source of truth for all served paths

pub const DOCS_PAGE: &str = "/";
pub const HEALTH: &str = "/health";
pub const CATALOG: &str = "/api/routes";
pub const CATALOG_SECTION: &str = "/api/routes/{section}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
