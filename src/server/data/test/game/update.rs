use super::*;

/// Tests replacing every field of a game.
///
/// Expected: Ok(Some) with all fields overwritten
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game) = factory::helpers::create_game_with_genre(db).await?;
    let other_genre = factory::create_genre(db).await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(UpdateGameParam {
            id: game.id,
            name: "Remastered".to_string(),
            genre_id: other_genre.id,
            price: 150.0,
            release_date: date(2025, 12, 24),
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, game.id);
    assert_eq!(updated.name, "Remastered");
    assert_eq!(updated.genre_id, other_genre.id);
    assert_eq!(updated.price, 150.0);
    assert_eq!(updated.release_date, date(2025, 12, 24));

    let db_game = entity::prelude::Game::find_by_id(game.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_game.name, "Remastered");
    assert_eq!(db_game.genre_id, other_genre.id);
    assert_eq!(db_game.price, 150.0);
    assert_eq!(db_game.release_date, date(2025, 12, 24));

    Ok(())
}

/// Tests updating a game that does not exist.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_nonexistent_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;

    let result = GameRepository::new(db)
        .update(UpdateGameParam {
            id: 99999,
            name: "Ghost".to_string(),
            genre_id: genre.id,
            price: 10.0,
            release_date: date(2024, 1, 1),
        })
        .await?;

    assert!(result.is_none());

    let games = entity::prelude::Game::find().all(db).await?;
    assert!(games.is_empty());

    Ok(())
}

/// Tests that updating one game leaves others untouched.
///
/// Expected: Ok with the second game unchanged
#[tokio::test]
async fn updates_game_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let target = factory::create_game(db, genre.id).await?;
    let bystander = factory::create_game(db, genre.id).await?;

    GameRepository::new(db)
        .update(UpdateGameParam {
            id: target.id,
            name: "Changed".to_string(),
            genre_id: genre.id,
            price: 1.0,
            release_date: date(2000, 1, 1),
        })
        .await?;

    let db_bystander = entity::prelude::Game::find_by_id(bystander.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_bystander, bystander);

    Ok(())
}
