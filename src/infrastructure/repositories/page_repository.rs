//! SeaORM implementation of PageRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set};

use crate::domain::{DomainError, Page, PageRepository, Title};
use crate::models::page::{ActiveModel, Column, Entity as PageEntity};

/// SeaORM-based implementation of PageRepository
pub struct SeaOrmPageRepository {
    db: DatabaseConnection,
}

impl SeaOrmPageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PageRepository for SeaOrmPageRepository {
    async fn load(&self, title: &Title) -> Result<Page, DomainError> {
        tracing::debug!("Loading page {}", title);

        // Two rows are enough to tell "one" from "more than one"
        let mut rows = PageEntity::find()
            .filter(Column::Title.eq(title.as_str()))
            .limit(2)
            .all(&self.db)
            .await?
            .into_iter();

        match (rows.next(), rows.next()) {
            (None, _) => Err(DomainError::NotFound),
            (Some(row), None) => Ok(Page::new(title.clone(), row.body)),
            (Some(_), Some(_)) => {
                tracing::warn!("Page {} is stored more than once", title);
                Err(DomainError::MultipleMatches {
                    title: title.to_string(),
                })
            }
        }
    }

    async fn save(&self, page: &Page) -> Result<(), DomainError> {
        tracing::debug!("Saving page {} ({} bytes)", page.title, page.body.len());

        let model = ActiveModel {
            title: Set(page.title.as_str().to_owned()),
            body: Set(page.body.clone()),
        };

        PageEntity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Title)
                    .update_column(Column::Body)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }
}
