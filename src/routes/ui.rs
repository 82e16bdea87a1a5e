use axum::{response::Html, Router, routing::get};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
