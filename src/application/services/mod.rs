mod ingestion_service;

pub use ingestion_service::{IngestionError, IngestionService, IngestionStage, ParsedDocument};
