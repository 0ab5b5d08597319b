//! v1 핸들러들이 쓰는 저수준 도우미.
//! 추출기 없이 바디를 직접 읽고, 응답도 직접 만들어 씁니다.

use axum::{
    body::Body,
    http::{header, HeaderValue},
    response::Response,
};

use crate::error::AppError;

/// 바디 스트림을 끝까지 읽어 UTF-8 문자열로 변환 (최대 `limit` 바이트)
pub async fn read_body_to_string(body: Body, limit: usize) -> Result<String, AppError> {
    let bytes = axum::body::to_bytes(body, limit).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// `text/plain` 응답을 직접 작성
pub fn write_text(text: &'static str) -> Response {
    let mut response = Response::new(Body::from(text));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
