pub mod extract;
pub mod pages;
pub mod responses;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

/// Route table: `/`, `/view/:title`, `/edit/:title`, `/save/:title`.
///
/// Anything else, including a known path with the wrong method, is 404.
pub fn wiki_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(pages::front_page).fallback(responses::not_found_handler),
        )
        .route(
            "/view/:title",
            get(pages::view_page).fallback(responses::not_found_handler),
        )
        .route(
            "/edit/:title",
            get(pages::edit_page).fallback(responses::not_found_handler),
        )
        .route(
            "/save/:title",
            post(pages::save_page).fallback(responses::not_found_handler),
        )
        .fallback(responses::not_found_handler)
        .with_state(state)
}
