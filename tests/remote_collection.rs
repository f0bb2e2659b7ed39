use giftmart::store::{RemoteCollection, RemoteRecord, Store};

#[test]
fn fetch_cycle_states_are_mutually_exclusive() {
    let mut collection = RemoteCollection::<String>::default();

    // Idle: neither loading nor errored.
    assert!(!collection.is_loading());
    assert_eq!(collection.error(), None);

    // Initiation: loading, previous error cleared.
    let generation = collection.begin();
    assert!(collection.is_loading());
    assert_eq!(collection.error(), None);

    // Failure: error set, loading cleared.
    collection.resolve(generation, Err("503 Service Unavailable".to_string()));
    assert!(!collection.is_loading());
    assert_eq!(collection.error(), Some("503 Service Unavailable"));

    // Next initiation clears the error again.
    let generation = collection.begin();
    assert!(collection.is_loading());
    assert_eq!(collection.error(), None);

    // Success: data replaced wholesale, no error, no loading.
    collection.resolve(generation, Ok(vec!["steam".to_string()]));
    assert!(!collection.is_loading());
    assert_eq!(collection.error(), None);
    assert_eq!(collection.data(), &["steam".to_string()]);
}

#[test]
fn success_replaces_rather_than_appends() {
    let mut collection = RemoteCollection::<u32>::default();
    let generation = collection.begin();
    collection.resolve(generation, Ok(vec![1, 2]));
    let generation = collection.begin();
    collection.resolve(generation, Ok(vec![3]));
    assert_eq!(collection.data(), &[3]);
}

#[test]
fn superseded_fetch_cannot_win_the_race() {
    let mut collection = RemoteCollection::<u32>::default();

    // Two overlapping fetches; the first one's response arrives last.
    let first = collection.begin();
    let second = collection.begin();
    assert!(collection.resolve(second, Ok(vec![20])));
    assert!(!collection.resolve(first, Ok(vec![10])));
    assert_eq!(collection.data(), &[20]);

    // Same for a late failure: it must not clobber fresh data.
    let third = collection.begin();
    let fourth = collection.begin();
    assert!(collection.resolve(fourth, Ok(vec![40])));
    assert!(!collection.resolve(third, Err("timeout".to_string())));
    assert_eq!(collection.error(), None);
    assert_eq!(collection.data(), &[40]);
}

#[test]
fn stale_resolution_after_success_keeps_loading_flag_consistent() {
    let mut collection = RemoteCollection::<u32>::default();
    let stale = collection.begin();
    let fresh = collection.begin();
    assert!(collection.is_loading());

    collection.resolve(fresh, Ok(vec![1]));
    assert!(!collection.is_loading());

    // The stale arrival must not flip loading back or touch data.
    collection.resolve(stale, Ok(vec![99]));
    assert!(!collection.is_loading());
    assert_eq!(collection.data(), &[1]);
}

#[test]
fn record_follows_the_same_cycle() {
    let mut record = RemoteRecord::<&'static str>::default();
    assert_eq!(record.data(), None);

    let generation = record.begin();
    assert!(record.is_loading());
    record.resolve(generation, Ok("leanne"));
    assert_eq!(record.data(), Some(&"leanne"));

    let generation = record.begin();
    record.resolve(generation, Err("404 Not Found".to_string()));
    assert_eq!(record.error(), Some("404 Not Found"));
    // Failure keeps the previously loaded record; only the status changes.
    assert_eq!(record.data(), Some(&"leanne"));
}

#[test]
fn store_slices_have_independent_cycles() {
    let mut store = Store::new();

    let trending_generation = store.trending.begin();
    let all_generation = store.all_items.begin();
    assert!(store.trending.is_loading());
    assert!(store.all_items.is_loading());

    // Trending resolves; the all-items fetch is untouched.
    store.trending.resolve(trending_generation, Ok(Vec::new()));
    assert!(!store.trending.is_loading());
    assert!(store.all_items.is_loading());

    store
        .all_items
        .resolve(all_generation, Err("offline".to_string()));
    assert_eq!(store.all_items.error(), Some("offline"));
    assert_eq!(store.trending.error(), None);
}
