use crate::server::{
    data::beer::BeerStore,
    error::{beer::BeerError, AppError},
    model::beer::{Beer, BeerParam},
};

/// Business rules for the beer catalog and its stock levels.
///
/// Generic over the storage capability so any `BeerStore` can back it.
pub struct BeerService<S> {
    store: S,
}

impl<S: BeerStore> BeerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new beer.
    ///
    /// Any id on the param is ignored; the store assigns one.
    ///
    /// # Returns
    /// - `Ok(Beer)` - The stored beer with its assigned id
    /// - `Err(AppError::BeerErr(AlreadyRegistered))` - A beer with this name exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: BeerParam) -> Result<Beer, AppError> {
        self.verify_not_registered(&param.name).await?;

        let beer = self.store.save(param.without_id()).await?;

        tracing::info!("Registered beer {} with id {}", beer.name, beer.id);

        Ok(beer)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Beer, AppError> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| BeerError::NotFoundByName(name.to_string()).into())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Beer, AppError> {
        self.verify_exists(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<Beer>, AppError> {
        self.store.find_all().await
    }

    /// Replaces every field of an existing beer.
    ///
    /// The path id is written onto the param before saving, so the record checked for
    /// existence is the one replaced regardless of the id carried in the payload.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message naming the updated id
    /// - `Err(AppError::BeerErr(NotFoundById))` - No beer with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, param: BeerParam) -> Result<String, AppError> {
        self.verify_exists(id).await?;

        if param.id.is_some_and(|payload_id| payload_id != id) {
            tracing::debug!(
                "Ignoring payload id {:?} in favor of path id {} on update",
                param.id,
                id
            );
        }

        let updated = self.store.save(param.with_id(id)).await?;

        tracing::info!("Updated beer with id {}", updated.id);

        Ok(format!("Updated Beer with ID: {}", updated.id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.verify_exists(id).await?;

        self.store.delete_by_id(id).await?;

        tracing::info!("Deleted beer with id {}", id);

        Ok(())
    }

    /// Adds `amount` to a beer's stock.
    ///
    /// Rejected when `amount` alone exceeds `max`, or when it exceeds the headroom left
    /// between the current quantity and `max`.
    ///
    /// # Returns
    /// - `Ok(Beer)` - The beer with its new quantity
    /// - `Err(AppError::BeerErr(NotFoundById))` - No beer with this id
    /// - `Err(AppError::BeerErr(InvalidAmount))` - `amount` is zero or negative
    /// - `Err(AppError::BeerErr(StockExceeded))` - Stock would go above `max`
    pub async fn increment(&self, id: i32, amount: i32) -> Result<Beer, AppError> {
        verify_positive(amount)?;

        let mut beer = self.verify_exists(id).await?;

        if amount > beer.max {
            tracing::debug!("Increment of {} exceeds max {} for beer {}", amount, beer.max, id);
            return Err(BeerError::StockExceeded { id, amount }.into());
        }

        if amount > beer.headroom() {
            tracing::debug!(
                "Increment of {} exceeds headroom {} for beer {}",
                amount,
                beer.headroom(),
                id
            );
            return Err(BeerError::StockExceeded { id, amount }.into());
        }

        beer.quantity += amount;
        let beer = self.store.save(beer.into()).await?;

        tracing::info!("Incremented beer {} stock by {} to {}", id, amount, beer.quantity);

        Ok(beer)
    }

    /// Removes `amount` from a beer's stock.
    ///
    /// # Returns
    /// - `Ok(Beer)` - The beer with its new quantity
    /// - `Err(AppError::BeerErr(NotFoundById))` - No beer with this id
    /// - `Err(AppError::BeerErr(InvalidAmount))` - `amount` is zero or negative
    /// - `Err(AppError::BeerErr(NegativeStock))` - Stock would go below zero
    pub async fn decrement(&self, id: i32, amount: i32) -> Result<Beer, AppError> {
        verify_positive(amount)?;

        let mut beer = self.verify_exists(id).await?;

        if amount > beer.quantity {
            tracing::debug!(
                "Decrement of {} exceeds quantity {} for beer {}",
                amount,
                beer.quantity,
                id
            );
            return Err(BeerError::NegativeStock { id, amount }.into());
        }

        beer.quantity -= amount;
        let beer = self.store.save(beer.into()).await?;

        tracing::info!("Decremented beer {} stock by {} to {}", id, amount, beer.quantity);

        Ok(beer)
    }

    async fn verify_not_registered(&self, name: &str) -> Result<(), AppError> {
        if self.store.find_by_name(name).await?.is_some() {
            return Err(BeerError::AlreadyRegistered(name.to_string()).into());
        }

        Ok(())
    }

    async fn verify_exists(&self, id: i32) -> Result<Beer, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| BeerError::NotFoundById(id).into())
    }
}

fn verify_positive(amount: i32) -> Result<(), AppError> {
    if amount <= 0 {
        return Err(BeerError::InvalidAmount(amount).into());
    }

    Ok(())
}
