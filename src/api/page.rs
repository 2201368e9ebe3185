use axum::response::Html;

/// The whole UI is one embedded page; it posts the form to /api/plan and
/// renders the JSON response client-side.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
