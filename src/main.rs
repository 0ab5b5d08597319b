//! 요청 데이터(쿼리 파라미터, 폼 필드, JSON 바디, 텍스트 바디)를 핸들러 인자와 객체로 바인딩하고,
//! 핸들러 반환값을 텍스트 / JSON / 서버 사이드 뷰 응답으로 매핑하는 방법을 단계별로 보여주는 예제.
//!
//! 같은 동작을 v1(직접 파싱) → v2, v3 ... (추출기 / 객체 바인딩) 순서로 점점 편하게 바꿔 갑니다.
//!
//! ```not_rust
//! cargo run -p example-request-mapping
//! ```
//!
//! 환경 변수: `APP_HOST`, `APP_PORT`, `APP_BODY_LIMIT`, `RUST_LOG`

mod config;
mod error;
mod hello_data;
mod manual;
mod model_attribute;
mod request_body_json;
mod request_body_string;
mod request_param;
mod response_view;
mod view;

use axum::{
    extract::{DefaultBodyLimit, FromRef, MatchedPath, Request},
    Router,
};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, view::Views};

/// --- 🔧 main()

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum 기본 추출기의 rejection 로그는 `axum::rejection` 타겟, TRACE 레벨로 남습니다.
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "loaded configuration");

    // 뷰 템플릿은 기동 시 한 번 컴파일해 두고 모든 요청이 공유
    let views = Views::new().expect("failed to compile view templates");

    let app = app(AppState {
        views,
        body_limit: config.body_limit,
    });

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .unwrap();

    tracing::debug!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// 📦 모든 핸들러가 공유하는 읽기 전용 상태
#[derive(Clone)]
pub struct AppState {
    pub views: Views,
    /// 핸들러가 직접 바디를 읽을 때 허용하는 최대 바이트 수
    pub body_limit: usize,
}

// 뷰 핸들러는 State<Views> 만 꺼내 쓸 수 있도록
impl FromRef<AppState> for Views {
    fn from_ref(state: &AppState) -> Self {
        state.views.clone()
    }
}

/// 컨트롤러별 라우터를 하나로 합칩니다.
/// 테스트에서는 HTTP 서버 없이 이 Router 를 바로 호출합니다.
fn app(state: AppState) -> Router {
    Router::new()
        .merge(request_param::routes())
        .merge(request_body_string::routes())
        .merge(request_body_json::routes())
        .merge(response_view::routes())
        // String / Json 추출기에도 같은 바디 제한 적용
        .layer(DefaultBodyLimit::max(state.body_limit))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request| {
                let method = req.method();
                let uri = req.uri();
                let matched_path = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|matched| matched.as_str());

                tracing::debug_span!("request", %method, %uri, matched_path)
            }),
        )
        .with_state(state)
}

// Ctrl+C 또는 SIGTERM 중 먼저 오는 신호를 기다림
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::debug!("shutdown signal received");
}

/// --- 🧪 컨트롤러 테스트 공용 도우미

#[cfg(test)]
mod test_support {
    use axum::{
        body::Body,
        http::{Request, Response},
        Router,
    };
    use http_body_util::BodyExt; // for `collect`
    use tower::ServiceExt; // for `oneshot`

    use super::{app, AppState};
    use crate::{config::Config, view::Views};

    pub fn test_app() -> Router {
        app(AppState {
            views: Views::new().unwrap(),
            body_limit: Config::default().body_limit,
        })
    }

    pub async fn send(request: Request<Body>) -> Response<Body> {
        test_app().oneshot(request).await.unwrap()
    }

    pub async fn get(uri: &str) -> Response<Body> {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{body_text, get};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn not_found() {
        let response = get("/does-not-exist").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    // 컨트롤러들이 하나의 Router 로 합쳐졌는지 확인
    #[tokio::test]
    async fn every_controller_is_mounted() {
        let param = get("/request-param-v3?username=hello&age=20").await;
        assert_eq!(param.status(), StatusCode::OK);

        let view = get("/response-view-v1").await;
        assert_eq!(view.status(), StatusCode::OK);

        // POST 전용 라우트에 GET → 405
        let json = get("/request-body-json-v3").await;
        assert_eq!(json.status(), StatusCode::METHOD_NOT_ALLOWED);

        let string = get("/request-body-string-v4").await;
        assert_eq!(string.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
