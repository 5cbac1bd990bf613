//! In-memory stand-in for the browser history stack.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("address must start with '/': {0:?}")]
    NotAbsolute(String),
    #[error("address contains whitespace or control characters: {0:?}")]
    InvalidCharacters(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserHistory {
    entries: Vec<String>,
}

impl BrowserHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    /// Overwrites the current entry without growing the back stack.
    pub fn replace(&mut self, url: &str) -> Result<(), HistoryError> {
        validate(url)?;
        match self.entries.last_mut() {
            Some(current) => *current = url.to_string(),
            None => self.entries.push(url.to_string()),
        }
        Ok(())
    }

    pub fn push(&mut self, url: &str) -> Result<(), HistoryError> {
        validate(url)?;
        self.entries.push(url.to_string());
        Ok(())
    }

    /// Drops the current entry and returns the restored one; the first entry is never dropped.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }
}

/// Splits an address into its path and query (without the `?`).
pub fn split_address(url: &str) -> (&str, &str) {
    url.split_once('?').unwrap_or((url, ""))
}

fn validate(url: &str) -> Result<(), HistoryError> {
    if !url.starts_with('/') {
        return Err(HistoryError::NotAbsolute(url.to_string()));
    }
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(HistoryError::InvalidCharacters(url.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_keeps_stack_depth() {
        let mut history = BrowserHistory::new("/resources");
        history.replace("/resources?tag=arrays").unwrap();
        history.replace("/resources?tag=graphs").unwrap();

        assert_eq!(history.current(), "/resources?tag=graphs");
        assert_eq!(history.back(), None);
    }

    #[test]
    fn back_restores_previous_entry() {
        let mut history = BrowserHistory::new("/resources?category=DSA");
        history.push("/profile").unwrap();

        assert_eq!(history.back(), Some("/resources?category=DSA"));
        assert_eq!(
            split_address(history.current()),
            ("/resources", "category=DSA")
        );
    }

    #[test]
    fn invalid_addresses_leave_history_untouched() {
        let mut history = BrowserHistory::new("/resources");
        assert_eq!(
            history.replace("resources"),
            Err(HistoryError::NotAbsolute("resources".into()))
        );
        assert!(matches!(
            history.replace("/resources?q=a b"),
            Err(HistoryError::InvalidCharacters(_))
        ));
        assert_eq!(history.current(), "/resources");
    }
}
