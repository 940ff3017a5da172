use crate::core::{DemoError, Result};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Serialize `data` as indented JSON to `path`.
///
/// The file handle lives only inside this call and is closed on every exit
/// path. On failure a diagnostic is printed and the error is returned to the
/// caller; it is never swallowed.
pub fn save_to_file<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    match write_json(data, path) {
        Ok(()) => {
            debug!("wrote JSON to {}", path.display());
            println!("Data successfully saved to {}", path.display());
            Ok(())
        }
        Err(err) => {
            println!("Error saving file: {err}");
            Err(err)
        }
    }
}

fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}

/// Deserialize a JSON mapping from `path`.
///
/// A missing file or malformed content is an expected outcome: both print a
/// diagnostic and yield `Ok(None)`. Any other I/O failure propagates.
pub fn read_from_file(path: &Path) -> Result<Option<Value>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("read of {} found no file", path.display());
            println!("File {} not found", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_io() => Err(DemoError::Io(err.to_string())),
        Err(err) => {
            warn!("read of {} hit malformed JSON: {err}", path.display());
            println!("Invalid JSON in file {}", path.display());
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_indented_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        save_to_file(&json!({"name": "Alice", "age": 30}), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("  \"name\": \"Alice\""));
    }

    #[test]
    fn test_save_failure_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("out.json");
        assert!(save_to_file(&json!({}), &path).is_err());
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert_eq!(read_from_file(&path).unwrap(), None);
    }

    #[test]
    fn test_read_malformed_content_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json at all").unwrap();
        assert_eq!(read_from_file(&path).unwrap(), None);
    }
}
