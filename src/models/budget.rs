//! Per-category monthly budget limits
//!
//! At most one limit exists per category; setting a limit again replaces it
//! in place. Limits keep the order they were first set in, both in the
//! document and when budget alerts are reported.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;

/// Mapping of category name to its monthly spending ceiling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetLimits(Vec<(String, Money)>);

impl BudgetLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a limit, returning the previous one
    pub fn set(&mut self, category: impl Into<String>, limit: Money) -> Option<Money> {
        let category = category.into();
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => Some(std::mem::replace(existing, limit)),
            None => {
                self.0.push((category, limit));
                None
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, limit)| *limit)
    }

    /// Iterate limits in the order they were first set
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(category, limit)| (category.as_str(), *limit))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Check a limit before it is stored
    pub fn validate(category: &str, limit: Money) -> Result<(), BudgetValidationError> {
        if category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if !limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(limit));
        }
        if !limit.is_within_limit() {
            return Err(BudgetValidationError::LimitTooLarge(limit));
        }
        Ok(())
    }
}

impl Serialize for BudgetLimits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, limit) in &self.0 {
            map.serialize_entry(category, limit)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BudgetLimits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BudgetLimitsVisitor)
    }
}

struct BudgetLimitsVisitor;

impl<'de> Visitor<'de> for BudgetLimitsVisitor {
    type Value = BudgetLimits;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category names to limits")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<BudgetLimits, A::Error> {
        let mut limits = BudgetLimits::new();
        // Document order; a repeated key keeps its first position
        while let Some((category, limit)) = access.next_entry::<String, Money>()? {
            limits.set(category, limit);
        }
        Ok(limits)
    }
}

/// Validation errors for budget limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NonPositiveLimit(Money),
    LimitTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Please select a category"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive (got {})", limit)
            }
            Self::LimitTooLarge(limit) => {
                write!(f, "Budget limit {} exceeds the maximum of {}", limit, Money::MAX)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
