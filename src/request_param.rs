//! 쿼리 파라미터를 핸들러 인자로 받는 방법들.
//!
//! 모든 라우트는 HTTP 메서드를 가리지 않고(`any`) 처리하며, 성공하면 `ok` 를 돌려줍니다.
//!
//! ```not_rust
//! curl "http://localhost:3000/request-param-v1?username=hello&age=20"
//! curl "http://localhost:3000/request-param-default?username="
//! curl "http://localhost:3000/model-attribute-v2" -d "username=hello&age=20"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::{fmt, str::FromStr};

use axum::{
    extract::{Query, Request},
    response::Response,
    routing::any,
    Router,
};
use serde::{de, Deserialize, Deserializer};
use tracing::info;

use crate::{
    error::AppError, hello_data::HelloData, manual, model_attribute::ModelAttribute, AppState,
};

const DEFAULT_USERNAME: &str = "guest";
const DEFAULT_AGE: i32 = -1;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/request-param-v1", any(request_param_v1))
        .route("/request-param-v2", any(request_param_v2))
        .route("/request-param-v3", any(request_param_v3))
        .route("/request-param-v4", any(request_param_v4))
        .route("/request-param-required", any(request_param_required))
        .route("/request-param-default", any(request_param_default))
        .route("/request-param-map", any(request_param_map))
        .route("/request-param-multi-map", any(request_param_multi_map))
        .route("/model-attribute-v1", any(model_attribute_v1))
        .route("/model-attribute-v2", any(model_attribute_v2))
}

/// --- 1️⃣ 요청 전체를 받아 직접 꺼내기

async fn request_param_v1(request: Request) -> Result<Response, AppError> {
    // 쿼리 문자열을 key=value 쌍 그대로 받고, 이름으로 직접 찾는다
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(request.uri())?;

    let username =
        get_parameter(&pairs, "username").ok_or(AppError::MissingParameter("username"))?;
    let age: i32 = get_parameter(&pairs, "age")
        .ok_or(AppError::MissingParameter("age"))?
        .parse()
        .map_err(|source| AppError::InvalidParameter { name: "age", source })?;

    info!("username={}, age={}", username, age);

    Ok(manual::write_text("ok"))
}

/// 같은 이름이 여러 번 오면 첫 번째 값
fn get_parameter<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// --- 2️⃣ Query 추출기 + 필드 이름 매핑

#[derive(Debug, Deserialize)]
struct MemberParams {
    #[serde(rename = "username")]
    member_name: String,
    #[serde(rename = "age")]
    member_age: i32,
}

async fn request_param_v2(Query(params): Query<MemberParams>) -> &'static str {
    info!("username={}, age={}", params.member_name, params.member_age);
    "ok"
}

/// --- 3️⃣ 필드 이름 = 파라미터 이름이면 rename 생략

#[derive(Debug, Deserialize)]
struct UserParams {
    username: String,
    age: i32,
}

async fn request_param_v3(Query(UserParams { username, age }): Query<UserParams>) -> &'static str {
    info!("username={}, age={}", username, age);
    "ok"
}

/// --- 4️⃣ 문자열은 생략 가능, 숫자는 필수

#[derive(Debug, Deserialize)]
struct ImplicitParams {
    username: Option<String>,
    age: i32,
}

async fn request_param_v4(
    Query(ImplicitParams { username, age }): Query<ImplicitParams>,
) -> &'static str {
    info!("username={:?}, age={}", username, age);
    "ok"
}

/// --- ✅ 필수 / 선택 파라미터

// username 은 필수 (빈 문자열도 값으로 인정), age 는 선택
#[derive(Debug, Deserialize)]
struct RequiredParams {
    username: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<i32>,
}

async fn request_param_required(Query(params): Query<RequiredParams>) -> &'static str {
    info!("username={}, age={:?}", params.username, params.age);
    "ok"
}

/// --- 🧩 기본값: 없거나 빈 문자열이면 guest / -1

#[derive(Debug, Deserialize)]
struct DefaultParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    username: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<i32>,
}

impl DefaultParams {
    fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    fn age(&self) -> i32 {
        self.age.unwrap_or(DEFAULT_AGE)
    }
}

async fn request_param_default(Query(params): Query<DefaultParams>) -> &'static str {
    let username = params.username();
    let age = params.age();

    info!("username={}, age={}", username, age);
    "ok"
}

/// --- 🗂️ 모든 파라미터를 Map 으로

async fn request_param_map(Query(pairs): Query<Vec<(String, String)>>) -> &'static str {
    let param_map = first_values(pairs);

    info!(
        "username={:?}, age={:?}",
        param_map.get("username"),
        param_map.get("age")
    );
    "ok"
}

// 키마다 첫 번째 값만 남긴다
fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (key, value) in pairs {
        map.entry(key).or_insert(value);
    }
    map
}

async fn request_param_multi_map(Query(pairs): Query<Vec<(String, String)>>) -> &'static str {
    let param_map = all_values(pairs);

    info!(
        "username={:?}, age={:?}",
        param_map.get("username"),
        param_map.get("age")
    );
    "ok"
}

// 키마다 들어온 순서대로 모든 값을 모은다
fn all_values(pairs: Vec<(String, String)>) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in pairs {
        map.entry(key).or_default().push(value);
    }
    map
}

/// --- 📦 객체 바인딩

// 객체 바인딩: 쿼리 문자열 또는 폼 바디
async fn model_attribute_v1(ModelAttribute(hello_data): ModelAttribute<HelloData>) -> &'static str {
    info!("username={}, age={}", hello_data.username, hello_data.age);
    info!("HelloData={:?}", hello_data);
    "ok"
}

// 추출기 이름만 바꾼 형태: 바인딩 규칙은 v1 과 같다
async fn model_attribute_v2(ModelAttribute(hello_data): ModelAttribute<HelloData>) -> &'static str {
    info!("username={}, age={}", hello_data.username, hello_data.age);
    info!("HelloData={:?}", hello_data);
    "ok"
}

// 빈 문자열("")은 값이 없는 것(None)으로 본다
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}
