// Result storage
// Persists the plain record of each completed assessment

mod jsonl;
mod record;

pub use jsonl::JsonlResultStore;
pub use record::{extract_email_domain, ResultAnalytics, ResultRecord};

use anyhow::Result;

/// Save/query interface for completed assessment records
pub trait ResultStore {
    /// Persist a record, returning its id
    fn save(&self, record: &ResultRecord) -> Result<String>;

    fn all(&self) -> Result<Vec<ResultRecord>>;

    /// Records carrying the given custom code, newest first
    fn by_custom_code(&self, custom_code: &str) -> Result<Vec<ResultRecord>> {
        let mut records: Vec<ResultRecord> = self
            .all()?
            .into_iter()
            .filter(|r| r.custom_code.as_deref() == Some(custom_code))
            .collect();
        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(records)
    }

    fn analytics(&self, custom_code: &str) -> Result<ResultAnalytics> {
        let records = self.by_custom_code(custom_code)?;
        Ok(ResultAnalytics::from_records(&records))
    }
}
