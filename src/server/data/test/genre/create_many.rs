use super::*;

/// Tests inserting several genres at once.
///
/// Verifies that ids are assigned sequentially in the order the names were given.
///
/// Expected: Ok with ids 1..=3 matching the input order
#[tokio::test]
async fn inserts_genres_in_given_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    repo.create_many(&["Fighting", "RPG", "Platformer"]).await?;

    let genres = repo.get_all().await?;
    let pairs: Vec<(i32, &str)> = genres.iter().map(|g| (g.id, g.name.as_str())).collect();

    assert_eq!(pairs, vec![(1, "Fighting"), (2, "RPG"), (3, "Platformer")]);

    Ok(())
}

/// Tests inserting an empty list of names.
///
/// Expected: Ok with nothing inserted
#[tokio::test]
async fn ignores_empty_name_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    repo.create_many(&[]).await?;

    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests the unique constraint on genre names.
///
/// Expected: Err when inserting a name that already exists
#[tokio::test]
async fn rejects_duplicate_genre_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    repo.create_many(&["RPG"]).await?;

    let result = repo.create_many(&["RPG"]).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
