// JSONL-backed result store

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use super::record::ResultRecord;
use super::ResultStore;

/// Appends one JSON line per result to `<results_dir>/results.jsonl`
pub struct JsonlResultStore {
    results_dir: PathBuf,
}

impl JsonlResultStore {
    pub fn new(results_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&results_dir).with_context(|| {
            format!(
                "Failed to create results directory: {}",
                results_dir.display()
            )
        })?;

        Ok(Self { results_dir })
    }

    fn log_file(&self) -> PathBuf {
        self.results_dir.join("results.jsonl")
    }
}

impl ResultStore for JsonlResultStore {
    fn save(&self, record: &ResultRecord) -> Result<String> {
        let log_file = self.log_file();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Failed to open results log: {}", log_file.display()))?;

        let json = serde_json::to_string(record).context("Failed to serialize result")?;
        writeln!(file, "{}", json).context("Failed to write result to log")?;

        tracing::debug!("Saved result {} to {:?}", record.id, log_file);
        Ok(record.id.clone())
    }

    fn all(&self) -> Result<Vec<ResultRecord>> {
        let log_file = self.log_file();

        if !log_file.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&log_file)
            .with_context(|| format!("Failed to read results log: {}", log_file.display()))?;

        let records: Vec<ResultRecord> = contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(serde_json::from_str)
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse results")?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(code: Option<&str>, x: f64) -> ResultRecord {
        ResultRecord {
            id: uuid::Uuid::new_v4().to_string(),
            x_coordinate: x,
            y_coordinate: -x,
            style_name: Some("Focused".to_string()),
            custom_code: code.map(str::to_string),
            email_domain: None,
            assessment_id: None,
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_store_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlResultStore::new(dir.path().join("nested")).unwrap();
        assert!(store.all().unwrap().is_empty());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_save_appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlResultStore::new(dir.path().to_path_buf()).unwrap();

        let first = record(Some("A"), 0.5);
        let id = store.save(&first).unwrap();
        store.save(&record(None, -0.25)).unwrap();

        assert_eq!(id, first.id);
        let contents = fs::read_to_string(dir.path().join("results.jsonl")).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert_eq!(store.all().unwrap()[0], first);
    }

    #[test]
    fn test_corrupt_line_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("results.jsonl"), "not json\n").unwrap();
        let store = JsonlResultStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.all().is_err());
    }
}
