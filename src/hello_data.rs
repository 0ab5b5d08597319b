use serde::{Deserialize, Serialize};

/// 요청 값을 한 번에 담아 두는 데이터 객체.
///
/// `{"username":"hello", "age":20}` 또는 `?username=hello&age=20`
///
/// 빠진 필드는 기본값(빈 문자열, 0)으로 채워집니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelloData {
    pub username: String,
    pub age: i32,
}
