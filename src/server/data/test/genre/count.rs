use super::*;

/// Tests counting genres.
///
/// Expected: 0 for an empty table, then the number of inserted genres
#[tokio::test]
async fn counts_stored_genres() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_genre(db).await?;
    factory::create_genre(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
