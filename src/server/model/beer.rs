//! Domain models for beer stock operations.
//!
//! `Beer` is what the repository hands back to the service layer; `BeerParam` is what the
//! service hands to the repository for persisting. Entity models never cross the data layer
//! boundary and DTOs never reach below the controller.

use crate::{
    model::beer::{BeerDto, BeerType},
    server::{error::AppError, util::parse::parse_beer_type},
};

/// A stored beer with its persistence-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Beer {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

impl Beer {
    /// Amount of stock that can still be added before reaching `max`.
    pub fn headroom(&self) -> i32 {
        self.max - self.quantity
    }

    pub fn into_dto(self) -> BeerDto {
        BeerDto {
            id: Some(self.id),
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }

    /// Converts an entity model to a beer.
    ///
    /// # Returns
    /// - `Ok(Beer)` - Converted beer
    /// - `Err(AppError::InternalErr(ParseBeerType))` - The stored type name is not a known
    ///   beer type
    pub fn from_entity(entity: entity::beer::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            beer_type: parse_beer_type(entity.beer_type)?,
            name: entity.name,
            brand: entity.brand,
            max: entity.max,
            quantity: entity.quantity,
        })
    }
}

/// Field values to persist for a beer.
///
/// Without an id the repository inserts a new record; with an id it replaces the record
/// having that id.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerParam {
    pub id: Option<i32>,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

impl BeerParam {
    /// Converts a request payload, keeping whatever id the client sent.
    pub fn from_dto(dto: BeerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            brand: dto.brand,
            max: dto.max,
            quantity: dto.quantity,
            beer_type: dto.beer_type,
        }
    }

    pub fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}

impl From<Beer> for BeerParam {
    fn from(beer: Beer) -> Self {
        Self {
            id: Some(beer.id),
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}
