//! Resource tags and tag expression parsing

use crate::error::{Result, SleepError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered tag constraints parsed from one expression
///
/// An empty set places no constraint: as a target set it matches every
/// resource, as an exclude set it matches none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagConstraintSet {
    tags: Vec<Tag>,
}

impl TagConstraintSet {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Parse `Key1=Value1,Key2=Value2`
    ///
    /// Only the first `=` of an entry separates key from value. Order and
    /// duplicates are preserved.
    pub fn parse(expression: &str) -> Result<Self> {
        if expression.is_empty() {
            return Ok(Self::default());
        }

        let tags = expression
            .split(',')
            .map(|entry| {
                entry
                    .split_once('=')
                    .map(|(key, value)| Tag::new(key, value))
                    .ok_or_else(|| SleepError::InvalidTagExpression {
                        expression: expression.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tags })
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }
}

impl fmt::Display for TagConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_tags(&self.tags))
    }
}

/// Render tags as `k=v,k=v`
pub fn join_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(Tag::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
