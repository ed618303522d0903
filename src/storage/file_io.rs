//! File I/O utilities
//!
//! Reading structured documents and writing them back atomically, so a failed
//! export never leaves a half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SplitError;

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, SplitError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;

    serde_json::from_reader(reader)
        .map_err(|e| SplitError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read YAML from a file, returning an error if the file doesn't exist
pub fn read_yaml_required<T, P>(path: P) -> Result<T, SplitError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;

    serde_yaml::from_reader(reader)
        .map_err(|e| SplitError::Yaml(format!("Failed to parse {}: {}", path.display(), e)))
}

fn open_required(path: &Path) -> Result<BufReader<File>, SplitError> {
    if !path.exists() {
        return Err(SplitError::Snapshot(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| SplitError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Write to a file atomically (write to a temp file, then rename)
///
/// `write` receives a buffered writer for the temp file; the destination is
/// only replaced once it returns successfully.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), SplitError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), SplitError>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SplitError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| SplitError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    let written = write(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|e| SplitError::Io(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| SplitError::Io(format!("Failed to sync data: {}", e)))
    });

    drop(writer);

    if let Err(e) = written {
        let _ = fs::remove_file(temp_path);
        return Err(e);
    }

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        SplitError::Io(format!("Failed to rename temp file: {}", e))
    })
}

/// Write pretty-printed JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SplitError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| SplitError::Json(format!("Failed to serialize data: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        amount: f64,
    }

    #[test]
    fn test_write_and_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("sample.json");
        let sample = Sample {
            name: "Dinner".into(),
            amount: 42.5,
        };

        write_json_atomic(&path, &sample).unwrap();
        let loaded: Sample = read_json_required(&path).unwrap();

        assert_eq!(loaded, sample);
        assert!(!temp_dir.path().join("out").join("sample.json.tmp").exists());
    }

    #[test]
    fn test_read_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.yaml");
        fs::write(&path, "name: Taxi\namount: 12.0\n").unwrap();

        let loaded: Sample = read_yaml_required(&path).unwrap();
        assert_eq!(loaded.name, "Taxi");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result: Result<Sample, _> = read_json_required(temp_dir.path().join("nope.json"));
        assert!(matches!(result, Err(SplitError::Snapshot(_))));
    }

    #[test]
    fn test_failed_write_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keep.json");
        fs::write(&path, "original").unwrap();

        let result = write_atomic(&path, |_| Err(SplitError::Export("boom".into())));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!temp_dir.path().join("keep.json.tmp").exists());
    }
}
