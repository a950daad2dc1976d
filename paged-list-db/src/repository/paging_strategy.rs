use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a page's count and window fetch are sent to the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingStrategy {
    /// Count, then fetch, as two independent statements
    Sequential,
    /// Count and fetch inside one transaction, reading one snapshot
    Transactional,
    /// Count and fetch issued at the same time on two connections
    Concurrent,
    /// One statement returning the window and the total together
    Batched,
}

impl PagingStrategy {
    pub const ALL: [PagingStrategy; 4] = [
        PagingStrategy::Sequential,
        PagingStrategy::Transactional,
        PagingStrategy::Concurrent,
        PagingStrategy::Batched,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PagingStrategy::Sequential => "sequential",
            PagingStrategy::Transactional => "transactional",
            PagingStrategy::Concurrent => "concurrent",
            PagingStrategy::Batched => "batched",
        }
    }
}

impl std::fmt::Display for PagingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PagingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(PagingStrategy::Sequential),
            "transactional" => Ok(PagingStrategy::Transactional),
            "concurrent" => Ok(PagingStrategy::Concurrent),
            "batched" => Ok(PagingStrategy::Batched),
            other => Err(format!(
                "unknown paging strategy '{other}' (expected sequential, transactional, concurrent or batched)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parses_back() {
        for strategy in PagingStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<PagingStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Batched ".parse::<PagingStrategy>(), Ok(PagingStrategy::Batched));
        assert!("future".parse::<PagingStrategy>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&PagingStrategy::Transactional).unwrap();
        assert_eq!(json, "\"transactional\"");
    }
}
