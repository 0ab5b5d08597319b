//! JSON 형식의 요청 바디를 받는 방법들. 모두 POST 전용입니다.
//!
//! ```not_rust
//! curl -X POST http://localhost:3000/request-body-json-v5 \
//!      -H "Content-Type: application/json" \
//!      -d '{"username":"hello", "age":20}'
//! ```

use axum::{
    extract::{Request, State},
    http::header::CONTENT_TYPE,
    response::Response,
    routing::post,
    Json, RequestExt, Router,
};
use tracing::info;

use crate::{error::AppError, hello_data::HelloData, manual, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/request-body-json-v1", post(request_body_json_v1))
        .route("/request-body-json-v2", post(request_body_json_v2))
        .route("/request-body-json-v3", post(request_body_json_v3))
        .route("/request-body-json-v4", post(request_body_json_v4))
        .route("/request-body-json-v5", post(request_body_json_v5))
}

/// 1️⃣ 바디를 직접 읽고 serde_json 으로 직접 파싱
async fn request_body_json_v1(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let message_body = manual::read_body_to_string(request.into_body(), state.body_limit).await?;
    info!("messageBody={}", message_body);

    let hello_data: HelloData = serde_json::from_str(&message_body)?;
    info!("username={}, age={}", hello_data.username, hello_data.age);

    Ok(manual::write_text("ok"))
}

/// 2️⃣ 바디는 String 추출기로, 파싱은 직접
async fn request_body_json_v2(message_body: String) -> Result<&'static str, AppError> {
    info!("messageBody={}", message_body);

    let hello_data: HelloData = serde_json::from_str(&message_body)?;
    info!("username={}, age={}", hello_data.username, hello_data.age);

    Ok("ok")
}

/// 3️⃣ Json 추출기가 바로 HelloData 로 역직렬화 (Content-Type: application/json 필수)
async fn request_body_json_v3(Json(data): Json<HelloData>) -> &'static str {
    info!("username={}, age={}", data.username, data.age);
    "ok"
}

/// 4️⃣ 요청 전체(헤더 + 바디)를 받은 뒤 바디만 꺼내기
async fn request_body_json_v4(request: Request) -> Result<&'static str, AppError> {
    let data = read_entity(request).await?;
    info!("username={}, age={}", data.username, data.age);
    Ok("ok")
}

/// 5️⃣ 4️⃣와 같지만 받은 객체를 그대로 JSON 으로 응답
async fn request_body_json_v5(request: Request) -> Result<Json<HelloData>, AppError> {
    let data = read_entity(request).await?;
    info!("username={}, age={}", data.username, data.age);
    Ok(Json(data))
}

async fn read_entity(request: Request) -> Result<HelloData, AppError> {
    info!(content_type = ?request.headers().get(CONTENT_TYPE), "received entity");

    let Json(data) = request.extract::<Json<HelloData>, _>().await?;
    Ok(data)
}
