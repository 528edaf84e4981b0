use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("button index {index} is out of range (store has {len} buttons)")]
    InvalidIndex { index: usize, len: usize },
    #[error("button index {0} appears more than once in the selection")]
    DuplicateIndex(usize),
    #[error("selection is not a JSON array of indices: {0}")]
    Json(#[from] serde_json::Error),
}
