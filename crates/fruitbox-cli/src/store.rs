use std::{fs, path::PathBuf};

use anyhow::Context as _;

/// On-disk slot for the best score: a single base-10 integer string.
///
/// Reads recover from anything (missing file, permissions, garbage) by
/// defaulting to zero; the stored value only ever grows because writes
/// happen on promotion.
#[derive(Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the stored best score, defaulting to 0 when the file is
    /// missing or does not hold an integer.
    #[must_use]
    pub fn load(&self) -> usize {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| parse_high_score(&text))
            .unwrap_or(0)
    }

    /// Writes the best score, creating parent directories as needed.
    pub fn save(&self, score: usize) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&self.path, format!("{score}\n"))
            .with_context(|| format!("failed to write high score to {}", self.path.display()))
    }
}

fn parse_high_score(text: &str) -> Option<usize> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_scores() {
        assert_eq!(parse_high_score("123"), Some(123));
        assert_eq!(parse_high_score("123\n"), Some(123));
        assert_eq!(parse_high_score("  42  "), Some(42));
        assert_eq!(parse_high_score("0"), Some(0));
    }

    #[test]
    fn test_parse_garbage_defaults_upstream() {
        assert_eq!(parse_high_score(""), None);
        assert_eq!(parse_high_score("abc"), None);
        assert_eq!(parse_high_score("-5"), None);
        assert_eq!(parse_high_score("12.5"), None);
        assert_eq!(parse_high_score("12 34"), None);
    }
}
