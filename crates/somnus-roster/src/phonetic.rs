use std::fmt;

use pinyin::ToPinyin;

/// Normalized join key for a display name.
///
/// Every character with a pinyin reading becomes its plain (tone-free,
/// lowercase) syllable; every other character is kept as-is. Whitespace is
/// then removed. Names with equal keys are the same name for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneticKey(String);

impl PhoneticKey {
    pub fn of(name: &str) -> Self {
        let key = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .fold(String::with_capacity(name.len() * 2), |mut key, c| {
                match c.to_pinyin() {
                    Some(p) => key.push_str(p.plain()),
                    None => key.push(c),
                }
                key
            });
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PhoneticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhoneticKey {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}
