use serde::{Serialize, Serializer};
use std::fmt;

use super::error::{AnalysisError, Result};

pub const SEPARATOR: char = '.';

/// Dotted module path, e.g. `app.sub.x`, stored component by component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    parts: Vec<String>,
}

impl QualifiedName {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a dotted string into components; empty components are rejected.
    pub fn parse(dotted: &str) -> Result<Self> {
        let parts: Vec<String> = dotted
            .split(SEPARATOR)
            .map(|part| part.trim().to_string())
            .collect();

        if parts.iter().any(String::is_empty) {
            return Err(AnalysisError::InvalidTargetName(dotted.to_string()));
        }

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn child(&self, name: &str) -> Self {
        let mut parts = Vec::with_capacity(self.parts.len() + 1);
        parts.extend(self.parts.iter().cloned());
        parts.push(name.to_string());
        Self { parts }
    }

    /// True when `self` equals the leading components of `other`.
    pub fn is_prefix_of(&self, other: &QualifiedName) -> bool {
        other.parts.len() >= self.parts.len() && other.parts[..self.parts.len()] == self.parts[..]
    }

    pub fn render(&self) -> String {
        self.parts.join(&SEPARATOR.to_string())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_dots() {
        let name = QualifiedName::parse("a.b.c").unwrap();
        assert_eq!(name.parts(), &["a", "b", "c"]);
        assert_eq!(name.to_string(), "a.b.c");
    }

    #[test]
    fn parse_rejects_empty_components() {
        assert!(QualifiedName::parse("").is_err());
        assert!(QualifiedName::parse("a..b").is_err());
        assert!(QualifiedName::parse(".a").is_err());
    }

    #[test]
    fn prefix_is_component_wise() {
        let app = QualifiedName::new(["app"]);
        assert!(app.is_prefix_of(&QualifiedName::new(["app"])));
        assert!(app.is_prefix_of(&QualifiedName::new(["app", "util"])));
        // string prefix is not enough
        assert!(!app.is_prefix_of(&QualifiedName::new(["apple"])));
        assert!(!QualifiedName::new(["app", "util"]).is_prefix_of(&app));
    }
}
