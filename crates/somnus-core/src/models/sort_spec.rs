use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user-entered list of display names giving the desired report order.
///
/// Entries may be blank or repeated; the roster resolver decides what that
/// means. Transient: built per reorder request and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct SortSpec(pub Vec<String>);

impl SortSpec {
    /// Split free text into names, one per line or separated by commas
    /// (ASCII or full-width) and the Chinese enumeration comma.
    pub fn parse(text: &str) -> Self {
        Self(
            text.split(['\n', ',', '，', '、', ';', '；'])
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for SortSpec {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<const N: usize> From<[&str; N]> for SortSpec {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(|s| s.to_string()).collect())
    }
}
