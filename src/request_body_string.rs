//! 텍스트 형식의 요청 바디를 받는 방법들. 모두 POST 전용이고 `ok` 를 돌려줍니다.
//!
//! ```not_rust
//! curl -X POST http://localhost:3000/request-body-string-v1 -d "hello"
//! ```

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tracing::info;

use crate::{error::AppError, manual, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/request-body-string-v1", post(request_body_string_v1))
        .route("/request-body-string-v2", post(request_body_string_v2))
        .route("/request-body-string-v3", post(request_body_string_v3))
        .route("/request-body-string-v4", post(request_body_string_v4))
}

// 요청 전체를 받아 바디 스트림을 직접 읽고, 응답도 직접 작성
async fn request_body_string_v1(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let message_body = manual::read_body_to_string(request.into_body(), state.body_limit).await?;

    info!("messageBody={}", message_body);

    Ok(manual::write_text("ok"))
}

// 바디 스트림만 받는다
async fn request_body_string_v2(
    State(state): State<AppState>,
    body: Body,
) -> Result<&'static str, AppError> {
    let message_body = manual::read_body_to_string(body, state.body_limit).await?;

    info!("messageBody={}", message_body);

    Ok("ok")
}

// 헤더와 바디를 함께 받고, 상태 코드까지 지정해서 응답
async fn request_body_string_v3(headers: HeaderMap, message_body: String) -> impl IntoResponse {
    info!(content_type = ?headers.get(CONTENT_TYPE), "messageBody={}", message_body);

    (StatusCode::CREATED, "ok")
}

// String 추출기로 바로 받기
async fn request_body_string_v4(message_body: String) -> &'static str {
    info!("messageBody={}", message_body);
    "ok"
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_text, send};
    use axum::{
        body::Body,
        http::{self, Request, StatusCode},
    };

    fn post_text(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(http::Method::POST)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.as_ref())
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn every_version_acknowledges_text_body() {
        for (version, status) in [
            ("v1", StatusCode::OK),
            ("v2", StatusCode::OK),
            ("v3", StatusCode::CREATED),
            ("v4", StatusCode::OK),
        ] {
            let uri = format!("/request-body-string-{version}");
            let response = send(post_text(&uri, "hello")).await;

            assert_eq!(response.status(), status, "POST {uri}");
            assert_eq!(body_text(response).await, "ok", "POST {uri}");
        }
    }

    #[tokio::test]
    async fn empty_body_is_fine() {
        let response = send(post_text("/request-body-string-v1", Body::empty())).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_utf8_is_rejected() {
        for version in ["v1", "v2", "v3", "v4"] {
            let uri = format!("/request-body-string-{version}");
            let response = send(post_text(&uri, vec![0xffu8, 0xfe])).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "POST {uri}");
        }
    }

    #[tokio::test]
    async fn get_is_not_allowed() {
        let response = send(
            Request::builder()
                .uri("/request-body-string-v1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
