//! Field models for the "create logic tree" dialog.
//!
//! The dialog collects values and hands them to [`TreeDraft::submit`], which discards
//! them. Nothing here creates or modifies a forest.

use crate::error::FormError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Event,
    Time,
    Condition,
    Manual,
}

impl TriggerKind {
    pub fn label(self) -> &'static str {
        match self {
            TriggerKind::Event => "Event Trigger",
            TriggerKind::Time => "Time-based Trigger",
            TriggerKind::Condition => "Condition Trigger",
            TriggerKind::Manual => "Manual Trigger",
        }
    }
}

impl FromStr for TriggerKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "event" => Ok(TriggerKind::Event),
            "time" => Ok(TriggerKind::Time),
            "condition" => Ok(TriggerKind::Condition),
            "manual" => Ok(TriggerKind::Manual),
            _ => Err(FormError::UnknownChoice {
                field: "trigger type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(FormError::UnknownChoice {
                field: "priority",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        })
    }
}

/// Values entered into the create dialog. Every field may be left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDraft {
    pub title: String,
    pub description: String,
    pub trigger_kind: Option<TriggerKind>,
    pub priority: Option<Priority>,
}

impl TreeDraft {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parses and sets the trigger type from its select value (`event`, `time`, ...).
    pub fn with_trigger_kind(mut self, value: &str) -> Result<Self, FormError> {
        self.trigger_kind = Some(value.parse()?);
        Ok(self)
    }

    pub fn with_priority(mut self, value: &str) -> Result<Self, FormError> {
        self.priority = Some(value.parse()?);
        Ok(self)
    }

    /// Consumes the draft. The payload is not validated, stored or applied.
    pub fn submit(self) {
        debug!(
            title = %self.title,
            trigger = ?self.trigger_kind,
            priority = ?self.priority,
            "tree draft submitted and discarded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_parse() {
        let draft = TreeDraft::default()
            .with_title("Weekend Boost")
            .with_trigger_kind("time")
            .and_then(|d| d.with_priority("High"))
            .unwrap();
        assert_eq!(draft.trigger_kind, Some(TriggerKind::Time));
        assert_eq!(draft.priority, Some(Priority::High));
        draft.submit();
    }

    #[test]
    fn unknown_choice_names_the_field() {
        let err = "sometimes".parse::<TriggerKind>().unwrap_err();
        assert!(err.to_string().contains("trigger type"));
        assert!(err.to_string().contains("sometimes"));
    }
}
