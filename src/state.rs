use crate::models::Dataset;
use std::sync::Arc;

/// Shared application state: the loaded price table.
/// The dataset is immutable after startup, so a plain Arc is enough —
/// every request reads it and builds its own filtered copy.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
