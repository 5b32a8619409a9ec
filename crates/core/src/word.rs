use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Position of a word in a document: line index and token index within
/// that line, both 0-based.
///
/// Rhyme and paint colors are keyed by position rather than text, since the
/// same word may occur several times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId {
    pub line: usize,
    pub token: usize,
}

impl WordId {
    #[inline]
    #[must_use]
    pub const fn new(line: usize, token: usize) -> Self {
        Self { line, token }
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.line, self.token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWordIdError;

impl fmt::Display for ParseWordIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a word position of the form LINE-TOKEN")
    }
}

impl core::error::Error for ParseWordIdError {}

impl FromStr for WordId {
    type Err = ParseWordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, token) = s.trim().split_once('-').ok_or(ParseWordIdError)?;
        let line = line.trim().parse().map_err(|_| ParseWordIdError)?;
        let token = token.trim().parse().map_err(|_| ParseWordIdError)?;
        Ok(Self::new(line, token))
    }
}

impl Serialize for WordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
