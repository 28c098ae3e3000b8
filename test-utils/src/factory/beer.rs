//! Beer factory for creating test beer entities.
//!
//! Inserts beer rows with the fixture defaults, except for the name which gets a unique
//! suffix so several beers can live in one test database.

use crate::{factory::helpers::next_id, fixture::beer as defaults};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test beers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::beer::BeerFactory;
///
/// let beer = BeerFactory::new(&db)
///     .name("Colorado Kuya")
///     .max(20)
///     .quantity(10)
///     .build()
///     .await?;
/// ```
pub struct BeerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    brand: String,
    max: i32,
    quantity: i32,
    beer_type: String,
}

impl<'a> BeerFactory<'a> {
    /// Creates a new BeerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Colorado Kuya {id}"` where id is auto-incremented
    /// - brand: `"Cervejaria Colorado"`
    /// - max: `20`
    /// - quantity: `10`
    /// - beer_type: `"IPA"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("{} {}", defaults::DEFAULT_NAME, id),
            brand: defaults::DEFAULT_BRAND.to_string(),
            max: defaults::DEFAULT_MAX,
            quantity: defaults::DEFAULT_QUANTITY,
            beer_type: defaults::DEFAULT_TYPE.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the stored type name, e.g. `"STOUT"`.
    ///
    /// The value is written as-is, which lets tests insert names the application
    /// does not recognise.
    pub fn beer_type(mut self, beer_type: impl Into<String>) -> Self {
        self.beer_type = beer_type.into();
        self
    }

    /// Builds and inserts the beer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::beer::Model)` - Created beer entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::beer::Model, DbErr> {
        entity::beer::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            brand: ActiveValue::Set(self.brand),
            max: ActiveValue::Set(self.max),
            quantity: ActiveValue::Set(self.quantity),
            beer_type: ActiveValue::Set(self.beer_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a beer with default values.
///
/// Shorthand for `BeerFactory::new(db).build().await`.
pub async fn create_beer(db: &DatabaseConnection) -> Result<entity::beer::Model, DbErr> {
    BeerFactory::new(db).build().await
}
