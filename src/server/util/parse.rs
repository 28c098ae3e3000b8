use crate::{
    model::beer::BeerType,
    server::error::{internal::InternalError, AppError},
};

/// Parses a beer type from its stored name
///
/// # Arguments
/// - `value` - The String to attempt to parse into `BeerType`
///
/// # Returns
/// - `Ok(BeerType)` - Successfully parsed the stored name
/// - `Err(AppError::InternalErr(ParseBeerType))` - Name is not a known beer type
pub fn parse_beer_type(value: String) -> Result<BeerType, AppError> {
    let beer_type =
        BeerType::from_name(&value).ok_or(InternalError::ParseBeerType { value })?;

    Ok(beer_type)
}
