use axum::{extract::State, response::Response};

use super::extract::BodyField;
use super::responses::{found, html, internal_error};
use crate::domain::{DomainError, FRONT_PAGE, Page, Title};
use crate::infrastructure::{AppState, TemplateName};

pub async fn front_page() -> Response {
    found(format!("/view/{}", FRONT_PAGE))
}

/// Render a stored page, or send the reader to the editor if there is none
pub async fn view_page(State(state): State<AppState>, title: Title) -> Response {
    match state.pages.load(&title).await {
        Ok(page) => html(state.templates.render(TemplateName::View, &page)),
        Err(DomainError::NotFound) => found(title.edit_path()),
        Err(e) => internal_error(e),
    }
}

pub async fn edit_page(State(state): State<AppState>, title: Title) -> Response {
    let page = match state.pages.load(&title).await {
        Ok(page) => page,
        Err(DomainError::NotFound) => Page::empty(title),
        Err(e) => return internal_error(e),
    };

    html(state.templates.render(TemplateName::Edit, &page))
}

pub async fn save_page(
    State(state): State<AppState>,
    title: Title,
    BodyField(body): BodyField,
) -> Response {
    let page = Page::new(title, body);

    match state.pages.save(&page).await {
        Ok(()) => {
            tracing::info!("Saved page {}", page.title);
            found(page.title.view_path())
        }
        Err(e) => internal_error(e),
    }
}
