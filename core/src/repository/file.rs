use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use serde_json;

use crate::error::{StoreError, StoreResult};
use crate::model::month::Month;
use crate::repository::traits::PlanRepository;

const DEFAULT_FILE_NAME: &str = "months.json";

#[derive(Clone)]
pub struct FilePlanRepository {
    file_path: PathBuf,
}

impl FilePlanRepository {
    pub fn new(base_dir: Option<PathBuf>) -> StoreResult<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
                home_dir.join(".dispatchtrack")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Month>::new())?;
            writer.flush()?;
        }

        Ok(FilePlanRepository { file_path: path })
    }
}

impl PlanRepository for FilePlanRepository {
    fn load(&self) -> StoreResult<Vec<Month>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let months = serde_json::from_reader(reader)?;
        Ok(months)
    }

    fn save(&self, months: &[Month]) -> StoreResult<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, months)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::Employee;

    #[test]
    fn new_repository_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePlanRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn round_trips_the_full_data_set() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePlanRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let mut month = Month::new(2024, 2).unwrap();
        let mut alice = Employee::new("Alice".to_string(), 1000.0);
        alice.actuals.insert(1, 250.0);
        alice.actuals.insert(2, -50.0);
        alice.profits.insert(1, 80.0);
        month.employees.push(alice);
        repo.save(&[month.clone()]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, vec![month]);
    }

    #[test]
    fn reopening_keeps_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePlanRepository::new(Some(dir.path().to_path_buf())).unwrap();
        repo.save(&[Month::new(2024, 1).unwrap()]).unwrap();

        let reopened = FilePlanRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.load().unwrap().len(), 1);
    }
}
