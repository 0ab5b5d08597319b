//! 논리 뷰 이름을 HTML 로 렌더링하는 뷰 리졸버.
//!
//! 템플릿은 바이너리에 포함(`include_str!`)해 두고, 기동 시 MiniJinja 환경에 이름으로 등록합니다.
//! 핸들러는 `"response/hello"` 같은 이름과 모델만 넘기면 됩니다.

use std::{collections::BTreeMap, sync::Arc};

use axum::response::Html;
use minijinja::{AutoEscape, Environment, Value};

use crate::error::AppError;

/// (논리 뷰 이름, 템플릿 소스)
const TEMPLATES: &[(&str, &str)] = &[(
    "response/hello",
    include_str!("../templates/response/hello.html"),
)];

/// 뷰에 넘겨줄 key/value 데이터
#[derive(Debug, Clone, Default)]
pub struct Model(BTreeMap<String, Value>);

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

/// 뷰 이름과 모델을 한 번에 담는 반환값
#[derive(Debug, Clone)]
pub struct ModelAndView {
    view: String,
    model: Model,
}

impl ModelAndView {
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            model: Model::new(),
        }
    }

    pub fn add_object(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.model.add_attribute(key, value);
        self
    }

    pub fn view_name(&self) -> &str {
        &self.view
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[derive(Clone)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        // 뷰 이름에 확장자가 없으니 HTML 이스케이프를 항상 켠다
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env: Arc::new(env) })
    }

    pub fn render(&self, view: &str, model: &Model) -> Result<Html<String>, AppError> {
        let view_error = |source| AppError::View {
            view: view.to_owned(),
            source,
        };

        let template = self.env.get_template(view).map_err(view_error)?;
        let html = template.render(&model.0).map_err(view_error)?;

        tracing::debug!(view, "rendered view");
        Ok(Html(html))
    }

    pub fn render_model_and_view(&self, mav: &ModelAndView) -> Result<Html<String>, AppError> {
        self.render(mav.view_name(), mav.model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_model_into_view() {
        let views = Views::new().unwrap();
        let mut model = Model::new();
        model.add_attribute("data", "hello!");

        let Html(html) = views.render("response/hello", &model).unwrap();

        assert!(html.contains("<p>hello!</p>"));
    }

    #[test]
    fn model_values_are_escaped() {
        let views = Views::new().unwrap();
        let mut model = Model::new();
        model.add_attribute("data", "<script>");

        let Html(html) = views.render("response/hello", &model).unwrap();

        assert!(html.contains("<p>&lt;script&gt;</p>"));
    }

    #[test]
    fn unknown_view_is_an_error() {
        let views = Views::new().unwrap();

        let err = views.render("response/missing", &Model::new()).unwrap_err();

        assert!(matches!(err, AppError::View { ref view, .. } if view == "response/missing"));
    }

    #[test]
    fn model_and_view_collects_objects() {
        let mav = ModelAndView::new("response/hello")
            .add_object("data", "hello!")
            .add_object("count", 3);

        assert_eq!(mav.view_name(), "response/hello");
        assert_eq!(mav.model().0.get("data"), Some(&Value::from("hello!")));
        assert_eq!(mav.model().0.get("count"), Some(&Value::from(3)));
    }
}
