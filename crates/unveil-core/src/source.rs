//! Where raw text comes from when it is not pasted into the compose panel.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// A file path, or `-` for standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Stdin,
}

impl TextSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            TextSource::Stdin
        } else {
            TextSource::File(PathBuf::from(arg))
        }
    }

    /// Reads the whole source as UTF-8 text.
    ///
    /// # Errors
    /// Returns an error if the file or stdin cannot be read or is not UTF-8.
    pub fn read(&self) -> Result<String> {
        match self {
            TextSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            TextSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
                Ok(text)
            }
        }
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::File(path) => write!(f, "{}", path.display()),
            TextSource::Stdin => f.write_str("<stdin>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(TextSource::from_arg("-"), TextSource::Stdin);
        assert_eq!(
            TextSource::from_arg("notes.md"),
            TextSource::File(PathBuf::from("notes.md"))
        );
    }

    #[test]
    fn test_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poem.txt");
        fs::write(&path, "line one\n\nline two\n").unwrap();

        let text = TextSource::File(path).read().unwrap();
        assert_eq!(text, "line one\n\nline two\n");
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = TextSource::from_arg("/definitely/not/here.txt")
            .read()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
    }
}
