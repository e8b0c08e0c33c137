//! Input existence checks.

use std::path::Path;

use crate::error::{Error, Result};

/// Check that every input is an existing file, before any is read.
///
/// Returns [`Error::MissingInput`] for the first path that is missing, or
/// [`Error::DocumentRead`] when it names a directory.
pub fn ensure_inputs_exist<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            log::debug!("Input is a directory: {}", path.display());
            return Err(Error::document_read(
                path,
                Error::NotNotebook("is a directory".into()),
            ));
        }
        if !path.is_file() {
            log::debug!("Missing input: {}", path.display());
            return Err(Error::MissingInput(path.to_path_buf()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_all_present() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.ipynb");
        let b = dir.path().join("b.ipynb");
        fs::write(&a, "{}").unwrap();
        fs::write(&b, "{}").unwrap();
        assert!(ensure_inputs_exist(&[a, b]).is_ok());
    }

    #[test]
    fn test_reports_first_missing() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.ipynb");
        fs::write(&a, "{}").unwrap();
        let missing1 = dir.path().join("x.ipynb");
        let missing2 = dir.path().join("y.ipynb");

        let result = ensure_inputs_exist(&[a, missing1.clone(), missing2]);
        match result {
            Err(Error::MissingInput(path)) => assert_eq!(path, missing1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_inputs_exist(&[dir.path().to_path_buf()]).unwrap_err();
        match &err {
            Error::DocumentRead { path, source } => {
                assert_eq!(path, dir.path());
                assert!(matches!(**source, Error::NotNotebook(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("is a directory"));
        assert!(!err.to_string().contains("Input not found"));
    }

    #[test]
    fn test_empty_list() {
        let paths: [PathBuf; 0] = [];
        assert!(ensure_inputs_exist(&paths).is_ok());
    }
}
