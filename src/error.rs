// region:    --- Imports
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

// region:    --- Error
/// 경매 저장소/핸들러 오류
#[derive(Debug, Error)]
pub enum AuctionError {
    #[error("auction not found")]
    NotFound,

    #[error("Failed to update auction")]
    UpdateFailed,

    #[error("Failed to delete auction")]
    DeleteFailed,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid auction id: {0}")]
    InvalidId(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid stored row: {0}")]
    Decode(String),
}

impl AuctionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuctionError::NotFound => StatusCode::NOT_FOUND,
            AuctionError::UpdateFailed
            | AuctionError::DeleteFailed
            | AuctionError::InvalidBody(_)
            | AuctionError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AuctionError::Database(_) | AuctionError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuctionError::NotFound => "NOT_FOUND",
            AuctionError::UpdateFailed => "UPDATE_FAILED",
            AuctionError::DeleteFailed => "DELETE_FAILED",
            AuctionError::InvalidBody(_) => "INVALID_BODY",
            AuctionError::InvalidId(_) => "INVALID_ID",
            AuctionError::Database(_) => "DATABASE_ERROR",
            AuctionError::Decode(_) => "DECODE_ERROR",
        }
    }
}

/// 요청 본문 파싱 실패 (형식 오류, 누락 필드, content-type 누락)
impl From<JsonRejection> for AuctionError {
    fn from(rejection: JsonRejection) -> Self {
        AuctionError::InvalidBody(rejection.body_text())
    }
}

/// 경로 id 파싱 실패
impl From<PathRejection> for AuctionError {
    fn from(rejection: PathRejection) -> Self {
        AuctionError::InvalidId(rejection.body_text())
    }
}

impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{:<12} --> 요청 처리 실패: {:?}", "Error", self);
        }
        (
            status,
            Json(serde_json::json!({
                "error": self.code(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
// endregion: --- Error

// endregion: --- Tests
