use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};

use crate::domain::FRONT_PAGE;
use crate::models::page;

const FRONT_PAGE_BODY: &str = "Welcome to the wiki. Use the edit link to change this page.";

/// Store a starter front page unless one already exists.
///
/// Returns whether a row was written.
pub async fn seed_front_page(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let front = page::ActiveModel {
        title: Set(FRONT_PAGE.to_owned()),
        body: Set(FRONT_PAGE_BODY.as_bytes().to_vec()),
    };

    let inserted = page::Entity::insert(front)
        .on_conflict(OnConflict::column(page::Column::Title).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    Ok(inserted > 0)
}
