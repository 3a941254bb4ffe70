use super::*;

/// Tests getting a game by id.
///
/// Expected: Ok(Some) with the stored game
#[tokio::test]
async fn returns_game_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (genre, game) = factory::helpers::create_game_with_genre(db).await?;

    let result = GameRepository::new(db).get_by_id(game.id).await?;

    let found = result.unwrap();
    assert_eq!(found.id, game.id);
    assert_eq!(found.name, game.name);
    assert_eq!(found.genre_id, genre.id);
    assert_eq!(found.price, game.price);
    assert_eq!(found.release_date, game.release_date);

    Ok(())
}

/// Tests getting a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameRepository::new(db).get_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}
