use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use super::{ItemRepository, RepositoryError, RepositoryResult};
use crate::{
    entity::items::{ActiveModel, Column, Entity as Items, Model as ItemModel},
    models::Item,
};

/// PostgreSQL-backed store over the `items` table.
#[derive(Debug, Clone)]
pub struct DbItemRepository {
    orm: DatabaseConnection,
}

impl DbItemRepository {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}

#[async_trait]
impl ItemRepository for DbItemRepository {
    async fn list(&self) -> RepositoryResult<Vec<Item>> {
        let items = Items::find()
            .order_by_asc(Column::CreatedDate)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(item_from_entity)
            .collect();
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> RepositoryResult<Option<Item>> {
        let item = Items::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(item_from_entity);
        Ok(item)
    }

    async fn create(&self, item: Item) -> RepositoryResult<()> {
        let id = item.id;
        let active = ActiveModel {
            id: Set(item.id),
            name: Set(item.name),
            price: Set(item.price),
            created_date: Set(item.created_date.fixed_offset()),
        };
        active.insert(&self.orm).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::Duplicate(id),
            _ => RepositoryError::Database(err),
        })?;
        Ok(())
    }

    async fn update(&self, item: Item) -> RepositoryResult<()> {
        // created_date is never written back.
        let result = Items::update_many()
            .col_expr(Column::Name, Expr::value(item.name))
            .col_expr(Column::Price, Expr::value(item.price))
            .filter(Column::Id.eq(item.id))
            .exec(&self.orm)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::Missing(item.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = Items::delete_by_id(id).exec(&self.orm).await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::Missing(id));
        }
        Ok(())
    }
}

fn item_from_entity(model: ItemModel) -> Item {
    Item {
        id: model.id,
        name: model.name,
        price: model.price,
        created_date: model.created_date.with_timezone(&Utc),
    }
}

