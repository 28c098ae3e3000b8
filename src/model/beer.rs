use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Beer category, serialized by its upper-case name (`"IPA"`, `"STOUT"`, ...).
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    pub const ALL: [BeerType; 7] = [
        BeerType::Lager,
        BeerType::Malzbier,
        BeerType::Witbier,
        BeerType::Weiss,
        BeerType::Ale,
        BeerType::Ipa,
        BeerType::Stout,
    ];

    /// Name used both on the wire and in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerType::Lager => "LAGER",
            BeerType::Malzbier => "MALZBIER",
            BeerType::Witbier => "WITBIER",
            BeerType::Weiss => "WEISS",
            BeerType::Ale => "ALE",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "STOUT",
        }
    }

    /// Looks a type up by its exact upper-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// Beer payload used for create and update requests and for every beer response.
///
/// `id` is ignored on create and superseded by the path id on update.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema, Validate)]
#[validate(schema(function = "validate_stock_bounds"))]
pub struct BeerDto {
    pub id: Option<i32>,
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 100))]
    pub brand: String,
    #[validate(range(min = 1))]
    pub max: i32,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

fn validate_stock_bounds(dto: &BeerDto) -> Result<(), ValidationError> {
    if dto.quantity > dto.max {
        let mut err = ValidationError::new("quantity_exceeds_max");
        err.message = Some("quantity must not be greater than max".into());
        return Err(err);
    }

    Ok(())
}

/// Stock adjustment payload for the increment and decrement endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema, Validate)]
pub struct QuantityDto {
    #[serde(alias = "quantity")]
    #[validate(range(min = 1))]
    pub amount: i32,
}
