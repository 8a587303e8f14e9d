use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallUser::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallUser::Id))
                    .col(string_uniq(HeimdallUser::Email))
                    .col(string(HeimdallUser::PasswordHash))
                    .col(timestamp(HeimdallUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeimdallUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallUser {
    Table,
    Id,
    Email,
    PasswordHash,
    CreatedAt,
}
