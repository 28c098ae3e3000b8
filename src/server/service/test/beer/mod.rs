use crate::{
    model::beer::BeerType,
    server::{
        data::beer::BeerRepository,
        error::{beer::BeerError, AppError},
        model::beer::BeerParam,
        service::beer::BeerService,
    },
};
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod increment;

fn service(db: &DatabaseConnection) -> BeerService<BeerRepository<'_>> {
    BeerService::new(BeerRepository::new(db))
}

/// Colorado Kuya: max 20, quantity 10.
fn colorado_kuya() -> BeerParam {
    BeerParam {
        id: None,
        name: "Colorado Kuya".to_string(),
        brand: "Cervejaria Colorado".to_string(),
        max: 20,
        quantity: 10,
        beer_type: BeerType::Ipa,
    }
}
