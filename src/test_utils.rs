use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectOptions};

use crate::database::Database;
use crate::entities;

pub async fn test_db() -> Arc<Database> {
    test_db_with_timeout(Duration::from_secs(5)).await
}

pub async fn test_db_with_timeout(statement_timeout: Duration) -> Arc<Database> {
    // A single connection keeps every session on the same in-memory database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    let db = Database::connect(opt, statement_timeout)
        .await
        .unwrap();
    db.migrate().await.unwrap();

    Arc::new(db)
}

pub async fn seed_singer(db: &Database, id: i64, name: &str, surname: &str, is_winner: i32) {
    entities::artist::ActiveModel {
        artist_id: ActiveValue::Set(id),
        name: ActiveValue::Set(name.to_string()),
        surname: ActiveValue::Set(surname.to_string()),
    }
    .insert(&db.conn)
    .await
    .unwrap();

    entities::singer::ActiveModel {
        singer_id: ActiveValue::Set(id),
        is_winner_artist: ActiveValue::Set(is_winner),
    }
    .insert(&db.conn)
    .await
    .unwrap();
}

pub async fn seed_song(db: &Database, id: i64, title: &str, genre: &str) {
    entities::song::ActiveModel {
        song_id: ActiveValue::Set(id),
        song_title: ActiveValue::Set(title.to_string()),
    }
    .insert(&db.conn)
    .await
    .unwrap();

    entities::music::ActiveModel {
        music_id: ActiveValue::Set(id),
        genre: ActiveValue::Set(genre.to_string()),
        language: ActiveValue::Set(Some("English".to_string())),
        version: ActiveValue::Set(None),
    }
    .insert(&db.conn)
    .await
    .unwrap();
}
