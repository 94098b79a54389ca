//! Possible-value constraints for editable tweaks.
//!
//! A constraint describes which values an editor should offer for a tweak.
//! It is advisory: tweaks never enforce their constraint on write, and a
//! host that bypasses an editor can store any value it likes.

use serde::{Deserialize, Serialize};

use crate::value::{NumericRange, TweakValue};

/// The allowed-value domain of an editable tweak.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum PossibleValues {
    /// Any value is allowed.
    #[default]
    Unconstrained,
    /// A bounded numeric domain.
    Range(NumericRange),
    /// An ordered list of allowed values.
    Enumerated(Vec<TweakValue>),
    /// An ordered list of allowed values, each with a display label.
    Labeled(Vec<(TweakValue, String)>),
}

impl PossibleValues {
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }

    /// Whether `value` lies inside this constraint.
    ///
    /// Advisory only; see the module docs. An inverted range admits nothing,
    /// per [`NumericRange::admits`].
    pub fn admits(&self, value: &TweakValue) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Range(range) => range.admits(value),
            Self::Enumerated(values) => values.contains(value),
            Self::Labeled(entries) => entries.iter().any(|(allowed, _)| allowed == value),
        }
    }

    /// The display label for `value`, when this is a labeled constraint.
    pub fn label_for(&self, value: &TweakValue) -> Option<&str> {
        match self {
            Self::Labeled(entries) => entries
                .iter()
                .find(|(allowed, _)| allowed == value)
                .map(|(_, label)| label.as_str()),
            _ => None,
        }
    }
}

impl From<NumericRange> for PossibleValues {
    fn from(range: NumericRange) -> Self {
        Self::Range(range)
    }
}

impl From<Vec<TweakValue>> for PossibleValues {
    fn from(values: Vec<TweakValue>) -> Self {
        Self::Enumerated(values)
    }
}

impl From<Vec<(TweakValue, String)>> for PossibleValues {
    fn from(entries: Vec<(TweakValue, String)>) -> Self {
        Self::Labeled(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_admits_everything() {
        let constraint = PossibleValues::default();
        assert!(constraint.is_unconstrained());
        assert!(constraint.admits(&TweakValue::from("anything")));
        assert!(constraint.admits(&TweakValue::Bool(false)));
    }

    #[test]
    fn test_range_constraint() {
        let constraint = PossibleValues::from(NumericRange::new(0, 120));
        assert!(constraint.admits(&TweakValue::Int(45)));
        assert!(!constraint.admits(&TweakValue::Int(200)));
    }

    #[test]
    fn test_enumerated_preserves_order() {
        let constraint = PossibleValues::Enumerated(vec![
            TweakValue::from("low"),
            TweakValue::from("medium"),
            TweakValue::from("high"),
        ]);
        assert!(constraint.admits(&TweakValue::from("medium")));
        assert!(!constraint.admits(&TweakValue::from("ultra")));
        match constraint {
            PossibleValues::Enumerated(values) => {
                assert_eq!(values[0], TweakValue::from("low"));
                assert_eq!(values[2], TweakValue::from("high"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_labeled_lookup() {
        let constraint = PossibleValues::Labeled(vec![
            (TweakValue::Int(0), "Off".to_string()),
            (TweakValue::Int(1), "On".to_string()),
        ]);
        assert!(constraint.admits(&TweakValue::Int(1)));
        assert_eq!(constraint.label_for(&TweakValue::Int(0)), Some("Off"));
        assert_eq!(constraint.label_for(&TweakValue::Int(9)), None);
    }
}
