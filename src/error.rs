//! 핸들러 코드가 직접 만들어 내는 에러.
//!
//! 기본 추출기(Query, Json, String ...)의 rejection 은 axum 이 만든 응답을 그대로 돌려주고,
//! 핸들러가 손으로 파싱하다 실패한 경우만 `{"status", "error", "message"}` JSON 으로 응답합니다.

use std::{num::ParseIntError, string::FromUtf8Error};

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use http_body_util::LengthLimitError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("required parameter '{0}' is not present")]
    MissingParameter(&'static str),

    #[error("parameter '{name}' is not a valid integer: {source}")]
    InvalidParameter {
        name: &'static str,
        source: ParseIntError,
    },

    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),

    #[error("request body is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error("failed to render view '{view}': {source}")]
    View {
        view: String,
        source: minijinja::Error,
    },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_)
            | AppError::InvalidParameter { .. }
            | AppError::Utf8(_)
            | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Body(err) if is_length_limit(err) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Body(_) => StatusCode::BAD_REQUEST,
            AppError::QueryRejection(rejection) => rejection.status(),
            AppError::JsonRejection(rejection) => rejection.status(),
            AppError::View { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn is_length_limit(err: &axum::Error) -> bool {
    std::error::Error::source(err).is_some_and(|source| source.is::<LengthLimitError>())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // 프레임워크 rejection 은 원래 응답 그대로
            AppError::QueryRejection(rejection) => rejection.into_response(),
            AppError::JsonRejection(rejection) => rejection.into_response(),
            err => {
                let status = err.status();
                if status.is_server_error() {
                    tracing::error!(%err, "request failed");
                } else {
                    tracing::warn!(%err, "rejected request");
                }

                let payload = json!({
                    "status": status.as_u16(),
                    "error": status.canonical_reason(),
                    "message": err.to_string(),
                });

                (status, Json(payload)).into_response()
            }
        }
    }
}
