use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beer::Table)
                    .if_not_exists()
                    .col(pk_auto(Beer::Id))
                    .col(string(Beer::Name))
                    .col(string(Beer::Brand))
                    .col(integer(Beer::Max))
                    .col(integer(Beer::Quantity))
                    .col(string(Beer::Type))
                    .to_owned(),
            )
            .await?;

        // Lookups by name are exact-match; uniqueness is checked by the service.
        manager
            .create_index(
                Index::create()
                    .name("idx_beer_name")
                    .table(Beer::Table)
                    .col(Beer::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Beer {
    Table,
    Id,
    Name,
    Brand,
    Max,
    Quantity,
    Type,
}
