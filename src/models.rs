use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verb of a documented route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static record documenting one endpoint of the tasting application.
///
/// `method` and `path` are always present. The optional fields are omitted
/// from rendering when `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub method: HttpMethod,
    pub path: &'static str,
    pub summary: &'static str,
    pub params: Option<&'static str>,
    pub returns: Option<&'static str>,
    pub notes: Option<&'static str>,
}

impl RouteDescriptor {
    pub const fn new(method: HttpMethod, path: &'static str, summary: &'static str) -> Self {
        Self {
            method,
            path,
            summary,
            params: None,
            returns: None,
            notes: None,
        }
    }

    pub const fn params(mut self, params: &'static str) -> Self {
        self.params = Some(params);
        self
    }

    pub const fn returns(mut self, returns: &'static str) -> Self {
        self.returns = Some(returns);
        self
    }

    pub const fn notes(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// Response type for a single documented route
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteResponse {
    pub method: HttpMethod,
    pub path: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&RouteDescriptor> for RouteResponse {
    fn from(route: &RouteDescriptor) -> Self {
        RouteResponse {
            method: route.method,
            path: route.path.to_string(),
            summary: route.summary.to_string(),
            params: route.params.map(str::to_string),
            returns: route.returns.map(str::to_string),
            notes: route.notes.map(str::to_string),
        }
    }
}

/// Response type for the full route catalog
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogResponse {
    pub web: Vec<RouteResponse>,
    pub api: Vec<RouteResponse>,
}

/// Query parameters accepted by the catalog and page endpoints
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct FilterQuery {
    pub q: Option<String>,
}
