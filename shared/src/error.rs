use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("해당 사용자를 찾을 수 없습니다.")]
    UserNotFound,
    #[error("{0}")]
    EntityNotFound(String),
    #[error("데이터베이스 처리 중 오류가 발생했습니다.")]
    SpecificOperationError(#[source] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 에러 종류 → HTTP 상태 코드 매핑표
        let status_code = match &self {
            AppError::UserNotFound | AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            e @ AppError::SpecificOperationError(_) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
