//! Beer fixtures for creating in-memory test data.

use entity::beer;

/// Default test beer name.
pub const DEFAULT_NAME: &str = "Colorado Kuya";

/// Default test beer brand.
pub const DEFAULT_BRAND: &str = "Cervejaria Colorado";

/// Default stock ceiling.
pub const DEFAULT_MAX: i32 = 20;

/// Default current stock.
pub const DEFAULT_QUANTITY: i32 = 10;

/// Default stored type name.
pub const DEFAULT_TYPE: &str = "IPA";

/// Creates a beer entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Colorado Kuya"`
/// - brand: `"Cervejaria Colorado"`
/// - max: `20`
/// - quantity: `10`
/// - beer_type: `"IPA"`
///
/// # Example
///
/// ```rust,ignore
/// let beer = test_utils::fixture::beer::entity();
/// assert_eq!(beer.max, 20);
/// ```
pub fn entity() -> beer::Model {
    entity_builder().build()
}

/// Creates a beer entity builder for customization.
pub fn entity_builder() -> BeerEntityBuilder {
    BeerEntityBuilder::default()
}

/// Builder for creating customized beer entity models.
pub struct BeerEntityBuilder {
    id: i32,
    name: String,
    brand: String,
    max: i32,
    quantity: i32,
    beer_type: String,
}

impl Default for BeerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            brand: DEFAULT_BRAND.to_string(),
            max: DEFAULT_MAX,
            quantity: DEFAULT_QUANTITY,
            beer_type: DEFAULT_TYPE.to_string(),
        }
    }
}

impl BeerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    pub fn beer_type(mut self, beer_type: impl Into<String>) -> Self {
        self.beer_type = beer_type.into();
        self
    }

    /// Builds the beer entity model.
    pub fn build(self) -> beer::Model {
        beer::Model {
            id: self.id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }
}
