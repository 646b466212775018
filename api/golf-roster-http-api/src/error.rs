use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use golf_roster_app::{
    domain::{DirectoryError, ghost::AdmitGhostError},
    workflow::{
        ghost::remove::RemoveGhostError, roster::assign::AssignToTeamError,
        roster::start_match::StartMatchError,
    },
};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("Request failed: {}", self.message);
        }
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(value: DirectoryError) -> Self {
        let status = match value {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::Conflict(_) => StatusCode::CONFLICT,
            DirectoryError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        ApiError::new(status, value.to_string())
    }
}

impl From<AdmitGhostError> for ApiError {
    fn from(value: AdmitGhostError) -> Self {
        let status = match value {
            AdmitGhostError::Capacity
            | AdmitGhostError::DuplicateSource(_)
            | AdmitGhostError::SourceIsGhost(_) => StatusCode::CONFLICT,
            AdmitGhostError::SourceNotFound(_) => StatusCode::NOT_FOUND,
            AdmitGhostError::Directory(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        ApiError::new(status, value.to_string())
    }
}

impl From<AssignToTeamError> for ApiError {
    fn from(value: AssignToTeamError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, value.to_string())
    }
}

impl From<RemoveGhostError> for ApiError {
    fn from(value: RemoveGhostError) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, value.to_string())
    }
}

impl From<StartMatchError> for ApiError {
    fn from(value: StartMatchError) -> Self {
        ApiError::new(StatusCode::CONFLICT, value.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(value: validator::ValidationErrors) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, format!("Invalid request: {}", value))
    }
}
