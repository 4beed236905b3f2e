use std::time::{SystemTime, UNIX_EPOCH};
use stockroom::{Category, CategorySort, InventoryStorage, Item, StoreError};

async fn open_temp_store(tag: &str) -> InventoryStorage {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "stockroom-catalog-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    InventoryStorage::open(&database_url)
        .await
        .expect("open temp store")
}

async fn category_updated_at(store: &InventoryStorage, name: &str) -> i64 {
    store
        .list_categories(CategorySort::NameAscending)
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == name)
        .expect("category present")
        .updated_at
}

#[tokio::test]
async fn fresh_store_has_exactly_the_seed_categories() {
    let store = open_temp_store("seeds").await;

    let categories = store
        .list_categories(CategorySort::NameAscending)
        .await
        .unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["Appliances", "Computers", "Electronics", "HomeKitchen"]
    );
    assert!(categories.iter().all(|c| c.updated_at > 0));
}

#[tokio::test]
async fn list_categories_orders_by_name_in_both_directions() {
    let store = open_temp_store("order").await;

    let asc = store
        .list_categories(CategorySort::NameAscending)
        .await
        .unwrap();
    let mut desc = store
        .list_categories(CategorySort::NameDescending)
        .await
        .unwrap();

    desc.reverse();
    assert_eq!(asc, desc);
    assert_eq!(asc.first().unwrap().name, "Appliances");
}

#[tokio::test]
async fn add_category_reports_duplicates_as_false() {
    let store = open_temp_store("dup-category").await;

    assert!(store.add_category(&Category::new("Garden")).await);
    assert!(!store.add_category(&Category::new("Garden")).await);
    // seeded name collides too
    assert!(!store.add_category(&Category::new("Computers")).await);
}

#[tokio::test]
async fn update_category_on_unknown_name_is_a_silent_noop() {
    let store = open_temp_store("update-noop").await;

    store
        .update_category(&Category::new("NoSuchCategory"))
        .await
        .unwrap();

    let categories = store
        .list_categories(CategorySort::NameAscending)
        .await
        .unwrap();
    assert_eq!(categories.len(), 4);
}

#[tokio::test]
async fn add_item_assigns_id_and_round_trips() {
    let store = open_temp_store("round-trip").await;

    let draft = Item::new("Blender", "600W countertop blender", "12", "Appliances");
    let stored = store.add_item(&draft).await.unwrap();
    assert!(stored.id > 0);

    let fetched = store.get_item(stored.id).await.unwrap().expect("item exists");
    assert_eq!(fetched, stored);
    assert_eq!(fetched.name, draft.name);
    assert_eq!(fetched.description, draft.description);
    assert_eq!(fetched.qty, draft.qty);
    assert_eq!(fetched.category_name, draft.category_name);
}

#[tokio::test]
async fn get_item_returns_none_for_unknown_id() {
    let store = open_temp_store("missing-item").await;
    assert!(store.get_item(424242).await.unwrap().is_none());
}

#[tokio::test]
async fn add_item_under_unknown_category_is_a_referential_violation() {
    let store = open_temp_store("fk").await;

    let err = store
        .add_item(&Item::new("Ghost", "no parent", "1", "NoSuchCategory"))
        .await
        .expect_err("insert must be rejected");
    assert!(
        matches!(err, StoreError::ReferentialIntegrity(_)),
        "got {err}"
    );
}

#[tokio::test]
async fn adding_and_updating_items_touches_the_category_timestamp() {
    let store = open_temp_store("touch").await;

    let before_add = category_updated_at(&store, "Electronics").await;
    let mut item = store
        .add_item(&Item::new("Router", "dual band", "3", "Electronics"))
        .await
        .unwrap();
    let after_add = category_updated_at(&store, "Electronics").await;
    assert!(after_add >= before_add);

    item.qty = "5".to_string();
    store.update_item(&item).await.unwrap();
    let after_update = category_updated_at(&store, "Electronics").await;
    assert!(after_update >= after_add);
}

#[tokio::test]
async fn deleting_an_item_leaves_the_category_timestamp_alone() {
    let store = open_temp_store("delete-item").await;

    let item = store
        .add_item(&Item::new("Kettle", "1.7L", "2", "HomeKitchen"))
        .await
        .unwrap();
    let before = category_updated_at(&store, "HomeKitchen").await;

    store.delete_item(item.id).await.unwrap();

    assert!(store.get_item(item.id).await.unwrap().is_none());
    assert_eq!(category_updated_at(&store, "HomeKitchen").await, before);
}

#[tokio::test]
async fn deleting_a_category_cascades_to_its_items() {
    let store = open_temp_store("cascade").await;

    let laptop = store
        .add_item(&Item::new("Laptop", "14 inch", "4", "Computers"))
        .await
        .unwrap();
    let monitor = store
        .add_item(&Item::new("Monitor", "27 inch", "7", "Computers"))
        .await
        .unwrap();
    let kettle = store
        .add_item(&Item::new("Kettle", "1.7L", "2", "HomeKitchen"))
        .await
        .unwrap();

    store
        .delete_category(&Category::new("Computers"))
        .await
        .unwrap();

    assert!(store.list_items("Computers").await.unwrap().is_empty());
    assert!(store.get_item(laptop.id).await.unwrap().is_none());
    assert!(store.get_item(monitor.id).await.unwrap().is_none());

    // Unrelated categories keep their items.
    assert!(store.get_item(kettle.id).await.unwrap().is_some());
}

#[tokio::test]
async fn list_items_returns_insertion_order_scoped_to_the_category() {
    let store = open_temp_store("list-items").await;

    let first = store
        .add_item(&Item::new("Toaster", "2 slot", "6", "Appliances"))
        .await
        .unwrap();
    store
        .add_item(&Item::new("Webcam", "1080p", "9", "Electronics"))
        .await
        .unwrap();
    let second = store
        .add_item(&Item::new("Mixer", "stand mixer", "1", "Appliances"))
        .await
        .unwrap();

    let items = store.list_items("Appliances").await.unwrap();
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, [first.id, second.id]);
}

#[tokio::test]
async fn update_item_rewrites_every_field() {
    let store = open_temp_store("update-item").await;

    let stored = store
        .add_item(&Item::new("Speaker", "bluetooth", "8", "Electronics"))
        .await
        .unwrap();

    let updated = Item {
        id: stored.id,
        name: "Soundbar".to_string(),
        description: "wall mounted".to_string(),
        qty: "2".to_string(),
        category_name: "Electronics".to_string(),
    };
    store.update_item(&updated).await.unwrap();

    let fetched = store.get_item(stored.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_item_with_unknown_id_is_a_silent_noop() {
    let store = open_temp_store("update-missing").await;

    let ghost = Item {
        id: 999_999,
        name: "Ghost".to_string(),
        description: String::new(),
        qty: "0".to_string(),
        category_name: "Appliances".to_string(),
    };
    store.update_item(&ghost).await.unwrap();
    assert!(store.get_item(ghost.id).await.unwrap().is_none());
}
