use axum::response::Html;

pub const LANDING: &str = "<h1>Pizza Restaurants</h1>";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page", content_type = "text/html", body = String)),
    tag = "index"
)]
pub async fn index() -> Html<&'static str> {
    Html(LANDING)
}
