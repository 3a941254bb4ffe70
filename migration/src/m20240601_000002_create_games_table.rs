use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_genres_table::Genres;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk_auto(Games::Id))
                    .col(string_len(Games::Name, 50))
                    .col(integer(Games::GenreId))
                    .col(double(Games::Price))
                    .col(date(Games::ReleaseDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_genre_id")
                            .from(Games::Table, Games::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_genre_id")
                    .table(Games::Table)
                    .col(Games::GenreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Games {
    Table,
    Id,
    Name,
    GenreId,
    Price,
    ReleaseDate,
}
