//! End-to-end session lifecycle against both in-memory and file-backed stores.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jot_core::board::Board;
use jot_core::entities::{Item, SessionContext};
use jot_core::enums::Recurrence;
use jot_core::ids::new_item_id;
use jot_db::{ItemStore, WritePolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

async fn open(file_backed: bool) -> (ItemStore, Option<TempDir>) {
    if file_backed {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jotter.db");
        let store = ItemStore::open_local(path.to_str().unwrap(), WritePolicy::Strict)
            .await
            .unwrap();
        (store, Some(dir))
    } else {
        let store = ItemStore::open_local(":memory:", WritePolicy::Strict)
            .await
            .unwrap();
        (store, None)
    }
}

#[rstest]
#[case::memory(false)]
#[case::file(true)]
#[tokio::test]
async fn daily_item_rolls_over_next_day(#[case] file_backed: bool) {
    let (store, _dir) = open(file_backed).await;
    let ses = SessionContext::new("ses-lifecycle");

    // Day one: create and complete a daily item.
    let today = at(10, 8);
    let loaded = store.load_session(&ses, &today).await.unwrap();
    let mut board = Board::new(loaded.items);

    let mut item = Item::new(new_item_id().unwrap(), "Meditate", today).unwrap();
    item.recurring = Some(Recurrence::Daily);
    let id = board.add(item).id.clone();
    store.save(&ses, board.find(&id).unwrap()).await.unwrap();

    let done_at = today + Duration::hours(1);
    assert!(board.complete(&id, done_at).unwrap());
    store.save(&ses, board.find(&id).unwrap()).await.unwrap();
    assert_eq!(board.total_completed(), 1);

    // Same day reload keeps it completed.
    let again = store.load_session(&ses, &(today + Duration::hours(5))).await.unwrap();
    assert_eq!(again.items.len(), 1);
    assert!(again.items[0].completed);
    assert_eq!(Board::new(again.items).total_completed(), 1);

    // Next day: old id gone, fresh occurrence with streak 1.
    let tomorrow = store.load_session(&ses, &at(11, 8)).await.unwrap();
    assert_eq!(tomorrow.items.len(), 1);
    let fresh = &tomorrow.items[0];
    assert_ne!(fresh.id, id);
    assert_eq!(fresh.streak, 1);
    assert!(!fresh.completed);
    assert!(store.get(&ses, &id).await.is_err());
}

#[rstest]
#[case::memory(false)]
#[case::file(true)]
#[tokio::test]
async fn plain_item_expires_next_day(#[case] file_backed: bool) {
    let (store, _dir) = open(file_backed).await;
    let ses = SessionContext::new("ses-plain");
    let mut item = Item::new("itm-milk", "Buy milk", at(10, 8)).unwrap();
    item.complete(at(10, 9));
    store.save(&ses, &item).await.unwrap();

    let next = store.load_session(&ses, &at(11, 8)).await.unwrap();
    assert!(next.items.is_empty());
    assert_eq!(next.summary.expired, 1);
}

#[tokio::test]
async fn file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jotter.db");
    let ses = SessionContext::new("ses-reopen");
    {
        let store = ItemStore::open_local(path.to_str().unwrap(), WritePolicy::Strict)
            .await
            .unwrap();
        store
            .save(&ses, &Item::new("itm-1", "Persist me", Utc::now()).unwrap())
            .await
            .unwrap();
    }
    let store = ItemStore::open_local(path.to_str().unwrap(), WritePolicy::Strict)
        .await
        .unwrap();
    let items = store.list_by_session(&ses).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "Persist me");
}
