//! 뷰 템플릿으로 응답하는 방법들. 세 라우트 모두 `response/hello` 뷰에 `data = "hello!"` 를 렌더링합니다.

use axum::{
    extract::{MatchedPath, State},
    response::Html,
    routing::any,
    Router,
};

use crate::{
    error::AppError,
    view::{Model, ModelAndView, Views},
    AppState,
};

const HELLO_VIEW: &str = "response/hello";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/response-view-v1", any(response_view_v1))
        .route("/response-view-v2", any(response_view_v2))
        .route("/response/hello", any(response_view_v3))
}

// ModelAndView 하나에 뷰 이름과 데이터를 함께 담기
async fn response_view_v1(State(views): State<Views>) -> Result<Html<String>, AppError> {
    let mav = ModelAndView::new(HELLO_VIEW).add_object("data", "hello!");
    views.render_model_and_view(&mav)
}

// Model 과 논리 뷰 이름을 따로
async fn response_view_v2(State(views): State<Views>) -> Result<Html<String>, AppError> {
    let mut model = Model::new();
    model.add_attribute("data", "hello!");
    views.render(HELLO_VIEW, &model)
}

// 요청 경로가 곧 뷰 이름: /response/hello → "response/hello"
async fn response_view_v3(
    State(views): State<Views>,
    path: MatchedPath,
) -> Result<Html<String>, AppError> {
    let mut model = Model::new();
    model.add_attribute("data", "hello!");
    views.render(path.as_str().trim_start_matches('/'), &model)
}
