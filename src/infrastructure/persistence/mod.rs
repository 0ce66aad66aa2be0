mod in_memory_counter_store;
mod pg_counter_store;
mod pg_pool;

pub use in_memory_counter_store::InMemoryCounterStore;
pub use pg_counter_store::PgCounterStore;
pub use pg_pool::create_pool;
