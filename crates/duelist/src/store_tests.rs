use super::*;
use chrono::TimeZone;
use duel_core::{Candidate, DecisionStatus};

fn decision(id: &str, title: &str) -> SavedDecision {
    let record = DecisionRecord {
        id: id.to_string(),
        original_options: vec![Candidate::from("Tea"), Candidate::from("Coffee")],
        winner: Some(Candidate::from("Tea")),
        elimination_order: vec![Candidate::from("Coffee")],
        status: DecisionStatus::Completed,
        active_pool: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap(),
    };
    SavedDecision::new(record, title, "Daily")
}

fn temp_store() -> JsonFileStore {
    let path = std::env::temp_dir().join(format!("duelist-store-{}.json", uuid::Uuid::new_v4()));
    JsonFileStore::new(path)
}

#[test]
fn test_saved_decision_json_shape() {
    let value = serde_json::to_value(decision("d-1", "Morning drink")).unwrap();

    assert_eq!(value["id"], "d-1");
    assert_eq!(value["winner"], "Tea");
    assert_eq!(value["eliminationOrder"], serde_json::json!(["Coffee"]));
    assert_eq!(value["status"], "Completed");
    assert_eq!(value["title"], "Morning drink");
    assert_eq!(value["tags"], serde_json::json!(["life"]));
    assert!(value.get("reflection").is_none());
}

#[test]
fn test_memory_store_newest_first() {
    let mut store = MemoryStore::new();
    store.save(decision("a", "first")).unwrap();
    store.save(decision("b", "second")).unwrap();
    store.save(decision("c", "third")).unwrap();

    let ids: Vec<String> = store
        .list(2)
        .unwrap()
        .iter()
        .map(|d| d.id().to_string())
        .collect();
    assert_eq!(ids, vec!["c", "b"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_save_replaces_same_id() {
    let mut store = MemoryStore::new();
    store.save(decision("a", "first")).unwrap();
    store.save(decision("b", "second")).unwrap();
    store.save(decision("a", "again")).unwrap();

    let all = store.list(10).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "again");
}

#[test]
fn test_update_missing_is_not_found() {
    let mut store = MemoryStore::new();
    let err = store.update(decision("ghost", "nothing")).unwrap_err();
    assert!(matches!(err, ArenaError::NotFound(id) if id == "ghost"));
}

#[test]
fn test_update_in_place() {
    let mut store = MemoryStore::new();
    store.save(decision("a", "first")).unwrap();
    store.save(decision("b", "second")).unwrap();

    let mut a = store.get("a").unwrap().unwrap();
    a.toggle_pin();
    a.set_reflection("  Tea was right.  ");
    store.update(a).unwrap();

    let all = store.list(10).unwrap();
    assert_eq!(all[1].id(), "a");
    assert!(all[1].pinned);
    assert_eq!(all[1].reflection.as_deref(), Some("Tea was right."));
    assert!(all[1].updated_at.is_some());
}

#[test]
fn test_file_store_missing_file_is_empty() {
    let store = temp_store();
    assert!(store.list(10).unwrap().is_empty());
    assert!(store.get("anything").unwrap().is_none());
}

#[test]
fn test_file_store_round_trips_records() {
    let mut store = temp_store();
    let original = decision("d-7", "Job offer");
    store.save(original.clone()).unwrap();
    store.save(decision("d-8", "Lunch")).unwrap();

    let reopened = JsonFileStore::new(store.path().to_path_buf());
    let loaded = reopened.get("d-7").unwrap().unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.tags, vec!["work"]);
    assert_eq!(reopened.list(10).unwrap()[0].id(), "d-8");

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_file_store_update() {
    let mut store = temp_store();
    store.save(decision("d-1", "Weekend")).unwrap();

    let mut saved = store.get("d-1").unwrap().unwrap();
    saved.toggle_pin();
    store.update(saved).unwrap();
    assert!(store.get("d-1").unwrap().unwrap().pinned);

    let err = store.update(decision("d-2", "Other")).unwrap_err();
    assert!(matches!(err, ArenaError::NotFound(_)));

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_file_store_rejects_garbage() {
    let store = temp_store();
    std::fs::write(store.path(), "not json").unwrap();
    assert!(matches!(store.list(10), Err(ArenaError::Json(_))));
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_matches_each_searched_field() {
    let mut d = decision("d-1", "Morning drink");
    d.tags.push("Caffeine".to_string());

    assert!(d.matches("tea"), "winner");
    assert!(d.matches("DAILY"), "category");
    assert!(d.matches("coff"), "options");
    assert!(d.matches("caffeine"), "tags");
    assert!(d.matches("  "), "blank query");
    assert!(!d.matches("juice"));
    assert!(!d.matches("morning"), "title is not searched");
}

#[test]
fn test_matches_pending_decision_without_winner() {
    let mut d = decision("d-1", "Morning drink");
    d.record.winner = None;
    d.record.status = DecisionStatus::Pending;
    d.record.active_pool = d.record.original_options.clone();
    d.record.elimination_order.clear();

    assert!(d.is_pending());
    assert!(d.matches("tea"));
    assert!(!d.matches("juice"));
}

#[test]
fn test_search_filters_and_limits() {
    let mut store = MemoryStore::new();
    store.save(decision("a", "Morning drink")).unwrap();
    store.save(decision("b", "Job offer")).unwrap();
    store.save(decision("c", "Afternoon drink")).unwrap();

    let work: Vec<String> = store
        .search("WORK", 10)
        .unwrap()
        .iter()
        .map(|d| d.id().to_string())
        .collect();
    assert_eq!(work, vec!["b"]);

    let life: Vec<String> = store
        .search("life", 1)
        .unwrap()
        .iter()
        .map(|d| d.id().to_string())
        .collect();
    assert_eq!(life, vec!["c"]);

    assert!(store.search("nothing like this", 10).unwrap().is_empty());
}

#[test]
fn test_file_store_write_leaves_no_tmp_file() {
    let mut store = temp_store();
    store.save(decision("d-1", "Weekend")).unwrap();

    assert!(store.path().exists());
    assert!(!store.tmp_path().exists());
    assert_eq!(store.list(10).unwrap().len(), 1);

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_file_store_ignores_stale_tmp_file() {
    let mut store = temp_store();
    store.save(decision("d-1", "Weekend")).unwrap();
    std::fs::write(store.tmp_path(), "half a write").unwrap();

    assert_eq!(store.get("d-1").unwrap().unwrap().title, "Weekend");
    store.save(decision("d-2", "Lunch")).unwrap();
    assert_eq!(store.list(10).unwrap().len(), 2);
    assert!(!store.tmp_path().exists());

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_file_store_keeps_pending_snapshot() {
    let mut store = temp_store();
    let mut pending = decision("d-3", "Lunch");
    pending.record.winner = None;
    pending.record.status = DecisionStatus::Pending;
    pending.record.active_pool = pending.record.original_options.clone();
    pending.record.elimination_order.clear();
    store.save(pending.clone()).unwrap();

    let loaded = store.get("d-3").unwrap().unwrap();
    assert_eq!(loaded, pending);
    assert!(loaded.is_pending());

    let _ = std::fs::remove_file(store.path());
}
