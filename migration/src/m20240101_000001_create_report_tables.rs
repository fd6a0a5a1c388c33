use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create artist table
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artist::ArtistId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artist::Name).string().not_null())
                    .col(ColumnDef::new(Artist::Surname).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create singer table, 1:1 with artist
        manager
            .create_table(
                Table::create()
                    .table(Singer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Singer::SingerId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Singer::IsWinnerArtist)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_singer_artist_id")
                            .from(Singer::Table, Singer::SingerId)
                            .to(Artist::Table, Artist::ArtistId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create award table, ids are generated by the store
        manager
            .create_table(
                Table::create()
                    .table(Award::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Award::AwardId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Award::Year).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create artist_award junction table
        manager
            .create_table(
                Table::create()
                    .table(ArtistAward::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArtistAward::AwardId).integer().not_null())
                    .col(ColumnDef::new(ArtistAward::ArtistTitle).string().not_null())
                    .col(ColumnDef::new(ArtistAward::WinnerArtist).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(ArtistAward::AwardId)
                            .col(ArtistAward::WinnerArtist),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_award_award_id")
                            .from(ArtistAward::Table, ArtistAward::AwardId)
                            .to(Award::Table, Award::AwardId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create song table
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Song::SongId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Song::SongTitle).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create music table, music_id is the owning song's id
        manager
            .create_table(
                Table::create()
                    .table(Music::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Music::MusicId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Music::Genre).string().not_null())
                    .col(ColumnDef::new(Music::Language).string())
                    .col(ColumnDef::new(Music::Version).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_music_song_id")
                            .from(Music::Table, Music::MusicId)
                            .to(Song::Table, Song::SongId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_music_genre")
                    .table(Music::Table)
                    .col(Music::Genre)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(Music::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Song::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ArtistAward::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Award::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Singer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Artist {
    Table,
    ArtistId,
    Name,
    Surname,
}

#[derive(DeriveIden)]
enum Singer {
    Table,
    SingerId,
    IsWinnerArtist,
}

#[derive(DeriveIden)]
enum Award {
    Table,
    AwardId,
    Year,
}

#[derive(DeriveIden)]
enum ArtistAward {
    Table,
    AwardId,
    ArtistTitle,
    WinnerArtist,
}

#[derive(DeriveIden)]
enum Song {
    Table,
    SongId,
    SongTitle,
}

#[derive(DeriveIden)]
enum Music {
    Table,
    MusicId,
    Genre,
    Language,
    Version,
}
