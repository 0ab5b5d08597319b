//! 요청 파라미터를 객체 하나로 묶어 바인딩하는 추출기.
//!
//! - `application/x-www-form-urlencoded` 바디가 오면 폼 필드에서
//! - 그 외에는 쿼리 문자열에서
//!
//! 값을 꺼내 `T` 로 역직렬화합니다. 실패하면 기본 추출기의 rejection 을 그대로 돌려줍니다.
//! Content-Type 은 대소문자를 가리지 않고 MIME 으로 파싱해서 비교합니다.

use axum::{
    extract::{FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Form,
};
use mime::Mime;
use serde::de::DeserializeOwned;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

pub struct ModelAttribute<T>(pub T);

impl<S, T> FromRequest<S> for ModelAttribute<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
{
    type Rejection = Response;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            // Form 추출기는 소문자 헤더만 인식하므로 표준 표기로 맞춘다
            req.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static(FORM_URLENCODED),
            );

            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(value));
        }

        let Query(value) =
            Query::<T>::try_from_uri(req.uri()).map_err(IntoResponse::into_response)?;
        Ok(Self(value))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Mime>().ok())
        .is_some_and(|parsed| {
            parsed.type_() == mime::APPLICATION && parsed.subtype() == mime::WWW_FORM_URLENCODED
        })
}
