use cloudrun_ingest::application::ports::CounterStore;
use cloudrun_ingest::infrastructure::persistence::InMemoryCounterStore;

#[tokio::test]
async fn given_fresh_store_when_reading_then_zero() {
    let store = InMemoryCounterStore::new();

    assert_eq!(store.read().await.unwrap(), 0);
}

#[tokio::test]
async fn given_increments_when_reading_then_count_accumulates() {
    let store = InMemoryCounterStore::new();

    assert_eq!(store.increment().await.unwrap(), 1);
    assert_eq!(store.increment().await.unwrap(), 2);
    assert_eq!(store.increment().await.unwrap(), 3);
    assert_eq!(store.read().await.unwrap(), 3);
}

#[tokio::test]
async fn given_cleared_counter_when_incrementing_then_restarts_at_one() {
    let store = InMemoryCounterStore::new();
    store.increment().await.unwrap();
    store.increment().await.unwrap();

    store.clear().await.unwrap();

    assert_eq!(store.read().await.unwrap(), 0);
    assert_eq!(store.increment().await.unwrap(), 1);
}
