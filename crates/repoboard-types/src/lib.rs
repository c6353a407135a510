use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One repository record as stored and served.
///
/// `title`, `url` and `techs` are taken from the client verbatim; a field
/// missing from the request body is stored and served as `null` rather than
/// rejected. `likes` only ever moves through the like endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Repository {
    pub id: uuid::Uuid,
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
    pub likes: u64,
}

/// Create body. There is deliberately no `id` field: ids are always
/// generated server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRepositoryReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}

/// Replace body. Carries no `likes` either: the stored counter survives a
/// replace untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRepositoryReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}

/// Uniform error body for every failure the API produces.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RepositoryPathParams {
    pub id: uuid::Uuid,
}
