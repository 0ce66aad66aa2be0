mod counter;
pub mod envelope;
mod health;
mod pdf_parse;

pub use counter::{counter_action_handler, counter_read_handler};
pub use health::health_handler;
pub use pdf_parse::{FILE_ID_FIELD, error_message, pdf_parse_handler};
