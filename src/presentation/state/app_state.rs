use std::sync::Arc;

use crate::application::ports::{CounterStore, DocumentExtractor, ObjectStorage};
use crate::application::services::IngestionService;

pub struct AppState<S, E>
where
    S: ObjectStorage + ?Sized,
    E: DocumentExtractor + ?Sized,
{
    pub ingestion_service: Arc<IngestionService<S, E>>,
    pub counter_store: Arc<dyn CounterStore>,
}

impl<S, E> Clone for AppState<S, E>
where
    S: ObjectStorage + ?Sized,
    E: DocumentExtractor + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            ingestion_service: Arc::clone(&self.ingestion_service),
            counter_store: Arc::clone(&self.counter_store),
        }
    }
}
