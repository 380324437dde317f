//! Trigger rule document and lifecycle status.

use serde::{Deserialize, Serialize};

use super::ScheduleSpec;

/// One configured auto-reply rule, read by the engine as an immutable
/// snapshot.
///
/// Rules are authored in an external configuration service; the engine never
/// mutates or persists them. The priority tier is computed from the rule's
/// shape on every evaluation (see [`crate::classifier`]) rather than stored,
/// so it can never drift from the actual configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TriggerRule {
    pub id: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub status: RuleStatus,
    /// Tie-breaker within a tier; higher value wins.
    #[serde(default)]
    pub priority: i32,
    /// Message texts that trigger this rule (exact match after
    /// normalization).
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub schedule: Option<ScheduleSpec>,
    /// Story identifiers this rule is scoped to. A non-empty list makes the
    /// rule story-scoped: it fires only for events carrying one of these IDs.
    #[serde(default)]
    pub story_targets: Option<Vec<String>>,
}

impl TriggerRule {
    /// Whether the rule participates in evaluation at all.
    pub fn is_eligible(&self) -> bool {
        self.enabled && self.status == RuleStatus::Active
    }

    pub fn has_keywords(&self) -> bool {
        self.keywords.as_ref().is_some_and(|k| !k.is_empty())
    }

    pub fn has_schedule(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn has_story_targets(&self) -> bool {
        self.story_targets.as_ref().is_some_and(|t| !t.is_empty())
    }
}

/// Rule lifecycle status, managed by the external configuration service.
///
/// Only `active` rules are evaluated; `inactive` and `archived` rules stay
/// in the snapshot but never match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

pub(crate) fn default_true() -> bool {
    true
}
