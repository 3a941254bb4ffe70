use super::*;

/// Tests creating a game.
///
/// Verifies that the repository stores every field exactly as given and returns the
/// game with its generated id.
///
/// Expected: Ok with stored fields equal to the input
#[tokio::test]
async fn creates_game_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;

    let repo = GameRepository::new(db);
    let created = repo
        .create(CreateGameParam {
            name: "Epic Adventure".to_string(),
            genre_id: genre.id,
            price: 59.99,
            release_date: date(2024, 6, 15),
        })
        .await?;

    assert_eq!(created.name, "Epic Adventure");
    assert_eq!(created.genre_id, genre.id);
    assert_eq!(created.price, 59.99);
    assert_eq!(created.release_date, date(2024, 6, 15));

    let db_game = entity::prelude::Game::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_game.name, "Epic Adventure");
    assert_eq!(db_game.genre_id, genre.id);
    assert_eq!(db_game.price, 59.99);
    assert_eq!(db_game.release_date, date(2024, 6, 15));

    Ok(())
}

/// Tests that every created game receives a fresh id.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let existing = factory::create_game(db, genre.id).await?;

    let repo = GameRepository::new(db);
    let param = CreateGameParam {
        name: "Sequel".to_string(),
        genre_id: genre.id,
        price: 20.0,
        release_date: date(2025, 3, 1),
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, existing.id);
    assert_ne!(second.id, existing.id);
    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests creating a game for a genre id without a genre row.
///
/// The foreign key on `games.genre_id` rejects the insert.
///
/// Expected: Err and no row stored
#[tokio::test]
async fn fails_for_unknown_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo
        .create(CreateGameParam {
            name: "Orphan".to_string(),
            genre_id: 50,
            price: 10.0,
            release_date: date(2024, 1, 1),
        })
        .await;

    assert!(result.is_err());

    let games = entity::prelude::Game::find().all(db).await?;
    assert!(games.is_empty());

    Ok(())
}
