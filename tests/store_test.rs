use picganize::model::Item;
use picganize::store::StoreDb;
use picganize::{SortMode, SORT_PREF_KEY};

fn make_item(id: &str, name: &str, created_at: i64) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        photo_path: None,
        location: Some("shelf".to_string()),
        created_at: Some(created_at),
        found_at: None,
        found_count: None,
    }
}

#[test]
fn test_insert_and_load_round_trip() {
    let db = StoreDb::new_in_memory().unwrap();

    let item = Item {
        id: "item-1".to_string(),
        name: "Passport".to_string(),
        photo_path: Some("/tmp/passport.jpg".to_string()),
        location: Some("desk drawer".to_string()),
        created_at: Some(1_700_000_000_000),
        found_at: Some(1_700_000_500_000),
        found_count: Some(3),
    };
    db.insert_item(&item).unwrap();

    let loaded = db.load_items().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], item);
}

#[test]
fn test_load_preserves_insertion_order() {
    let db = StoreDb::new_in_memory().unwrap();
    db.insert_item(&make_item("b", "Banana", 2)).unwrap();
    db.insert_item(&make_item("a", "Apple", 1)).unwrap();
    db.insert_item(&make_item("c", "Cherry", 3)).unwrap();

    let ids: Vec<String> = db.load_items().unwrap().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_optional_fields_survive_round_trip() {
    let db = StoreDb::new_in_memory().unwrap();
    let item = Item {
        id: "bare".to_string(),
        name: "Bare item".to_string(),
        photo_path: None,
        location: None,
        created_at: None,
        found_at: None,
        found_count: None,
    };
    db.insert_item(&item).unwrap();

    let loaded = db.get_item("bare").unwrap().unwrap();
    assert_eq!(loaded, item);
}

#[test]
fn test_replace_updates_existing_item() {
    let db = StoreDb::new_in_memory().unwrap();
    db.insert_item(&make_item("x", "Keys", 100)).unwrap();

    let mut updated = make_item("x", "Keys", 100);
    updated.found_at = Some(200);
    updated.found_count = Some(1);
    assert!(db.replace_item(&updated).unwrap());

    let loaded = db.get_item("x").unwrap().unwrap();
    assert_eq!(loaded.found_at, Some(200));
    assert_eq!(loaded.found_count, Some(1));
}

#[test]
fn test_replace_unknown_id_reports_false() {
    let db = StoreDb::new_in_memory().unwrap();
    assert!(!db.replace_item(&make_item("ghost", "Ghost", 0)).unwrap());
    assert!(db.load_items().unwrap().is_empty());
}

#[test]
fn test_get_item_missing_returns_none() {
    let db = StoreDb::new_in_memory().unwrap();
    assert_eq!(db.get_item("nope").unwrap(), None);
}

#[test]
fn test_import_replaces_on_id_collision() {
    let mut db = StoreDb::new_in_memory().unwrap();
    db.insert_item(&make_item("dup", "Old name", 1)).unwrap();

    let imported = db
        .import_items(&[make_item("dup", "New name", 2), make_item("other", "Other", 3)])
        .unwrap();
    assert_eq!(imported, 2);

    let loaded = db.load_items().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(db.get_item("dup").unwrap().unwrap().name, "New name");
}

#[test]
fn test_pref_round_trip_and_upsert() {
    let db = StoreDb::new_in_memory().unwrap();
    assert_eq!(db.get_pref(SORT_PREF_KEY).unwrap(), None);

    db.set_pref(SORT_PREF_KEY, SortMode::Oldest.as_str()).unwrap();
    assert_eq!(db.get_pref(SORT_PREF_KEY).unwrap(), Some("oldest".to_string()));

    db.set_pref(SORT_PREF_KEY, SortMode::AToZ.as_str()).unwrap();
    assert_eq!(db.get_pref(SORT_PREF_KEY).unwrap(), Some("aToZ".to_string()));
}

#[test]
fn test_legacy_stored_aliases_parse_to_a_to_z() {
    // Values written by older builds stay readable
    let db = StoreDb::new_in_memory().unwrap();
    for legacy in ["name", "a to z"] {
        db.set_pref(SORT_PREF_KEY, legacy).unwrap();
        let raw = db.get_pref(SORT_PREF_KEY).unwrap().unwrap();
        assert_eq!(SortMode::parse_stored(&raw), Some(SortMode::AToZ));
    }
}

#[test]
fn test_unknown_stored_value_parses_to_none() {
    let db = StoreDb::new_in_memory().unwrap();
    db.set_pref(SORT_PREF_KEY, "garbage").unwrap();
    let raw = db.get_pref(SORT_PREF_KEY).unwrap().unwrap();
    assert_eq!(SortMode::parse_stored(&raw), None);
}
