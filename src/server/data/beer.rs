use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::beer::{Beer, BeerParam},
};

/// Storage capability the beer service depends on.
///
/// Implementations persist beers keyed by id with a secondary exact-match lookup by name.
#[async_trait]
pub trait BeerStore: Send + Sync {
    /// Inserts the beer when `param.id` is `None`, otherwise replaces the record with that id.
    async fn save(&self, param: BeerParam) -> Result<Beer, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Beer>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, AppError>;

    /// All beers ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<Beer>, AppError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;
}

/// SeaORM-backed beer store.
pub struct BeerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BeerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> BeerStore for BeerRepository<'a> {
    async fn save(&self, param: BeerParam) -> Result<Beer, AppError> {
        let active_model = entity::beer::ActiveModel {
            id: match param.id {
                Some(id) => ActiveValue::Unchanged(id),
                None => ActiveValue::NotSet,
            },
            name: ActiveValue::Set(param.name),
            brand: ActiveValue::Set(param.brand),
            max: ActiveValue::Set(param.max),
            quantity: ActiveValue::Set(param.quantity),
            beer_type: ActiveValue::Set(param.beer_type.as_str().to_string()),
        };

        let entity = match param.id {
            Some(_) => active_model.update(self.db).await?,
            None => active_model.insert(self.db).await?,
        };

        Beer::from_entity(entity)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Beer>, AppError> {
        entity::prelude::Beer::find_by_id(id)
            .one(self.db)
            .await?
            .map(Beer::from_entity)
            .transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, AppError> {
        entity::prelude::Beer::find()
            .filter(entity::beer::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(Beer::from_entity)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Beer>, AppError> {
        entity::prelude::Beer::find()
            .order_by_asc(entity::beer::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Beer::from_entity)
            .collect()
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Beer::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
