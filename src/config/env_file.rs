use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads an environment variable, treating an empty value as unset
pub fn get_env_value(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parses a `.env`-style file into a key/value map
///
/// Lines are `KEY=VALUE` pairs; blank lines and `#` comments are skipped,
/// values may be wrapped in single or double quotes. A missing or unreadable
/// file yields an empty map.
pub fn parse_env_file(path: &Path) -> HashMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return HashMap::new(),
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if key.is_empty() || value.is_empty() {
                None
            } else {
                Some((key.to_string(), value.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_env_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# Gemini credentials").unwrap();
        writeln!(file, "GEMINI_API_KEY=\"abc123\"").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "GEMINI_MODEL = gemini-2.5-flash").unwrap();
        writeln!(file, "EMPTY=").unwrap();
        writeln!(file, "not a pair").unwrap();

        let vars = parse_env_file(file.path());
        assert_eq!(vars.get("GEMINI_API_KEY").map(String::as_str), Some("abc123"));
        assert_eq!(
            vars.get("GEMINI_MODEL").map(String::as_str),
            Some("gemini-2.5-flash")
        );
        assert!(!vars.contains_key("EMPTY"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let vars = parse_env_file(Path::new("/nonexistent/.env"));
        assert!(vars.is_empty());
    }
}
