//! In-memory score store for tests and throwaway runs.

use parking_lot::Mutex;

use crate::errors::store::StoreError;
use crate::repos::scores::{HistoryRecord, ScoreStore};

#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    records: Mutex<Vec<HistoryRecord>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn append(&self, record: HistoryRecord) -> Result<(), StoreError> {
        record.validate()?;
        self.records.lock().push(record);
        Ok(())
    }

    fn history(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        Ok(self.records.lock().clone())
    }
}
