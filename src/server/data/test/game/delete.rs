use super::*;

/// Tests deleting a game by id.
///
/// Expected: Ok(true) with the game removed
#[tokio::test]
async fn deletes_game_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game) = factory::helpers::create_game_with_genre(db).await?;

    let deleted = GameRepository::new(db).delete(game.id).await?;

    assert!(deleted);

    let db_game = entity::prelude::Game::find_by_id(game.id).one(db).await?;
    assert!(db_game.is_none());

    Ok(())
}

/// Tests deleting a nonexistent game succeeds silently.
///
/// Expected: Ok(false) (no error)
#[tokio::test]
async fn deletes_nonexistent_game_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = GameRepository::new(db).delete(99999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests deleting the same game twice.
///
/// Expected: first call reports a deletion, second is a no-op
#[tokio::test]
async fn deleting_twice_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game) = factory::helpers::create_game_with_genre(db).await?;

    let repo = GameRepository::new(db);
    assert!(repo.delete(game.id).await?);
    assert!(!repo.delete(game.id).await?);

    Ok(())
}

/// Tests deleting one game doesn't affect others or the genre.
///
/// Expected: Ok with only the target game deleted
#[tokio::test]
async fn deletes_game_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let game1 = factory::create_game(db, genre.id).await?;
    let game2 = factory::create_game(db, genre.id).await?;

    GameRepository::new(db).delete(game1.id).await?;

    let db_game2 = entity::prelude::Game::find_by_id(game2.id).one(db).await?;
    assert!(db_game2.is_some());

    let db_genre = entity::prelude::Genre::find_by_id(genre.id).one(db).await?;
    assert!(db_genre.is_some());

    Ok(())
}
