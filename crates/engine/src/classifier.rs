//! Tier classification and the fixed precedence tables.
//!
//! A rule's tier is a pure function of its own shape (keywords, schedule,
//! story targets); nothing is stored on the rule. Both precedence orders
//! live in explicit constant tables so the contract stays auditable and
//! testable in isolation.

use crate::schema::{ScheduleSpec, TriggerRule};

// ── Tiers ───────────────────────────────────────────────────────────

/// The four priority classes a rule can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTier {
    /// Keywords + story targets.
    StoryKeyword,
    /// Schedule + story targets, no keywords.
    StoryGeneral,
    /// Keywords, no story targets.
    GeneralKeyword,
    /// Schedule, no story targets.
    GeneralTime,
}

/// Tier evaluation order. Earlier entries out-prioritize later ones;
/// evaluation stops at the first tier that yields a match.
pub const TIER_PRECEDENCE: [RuleTier; 4] = [
    RuleTier::StoryKeyword,
    RuleTier::StoryGeneral,
    RuleTier::GeneralKeyword,
    RuleTier::GeneralTime,
];

impl RuleTier {
    /// Story tiers additionally require the event to reference one of the
    /// rule's target stories.
    pub fn is_story(self) -> bool {
        matches!(self, RuleTier::StoryKeyword | RuleTier::StoryGeneral)
    }

    /// Keyword tiers match on message text; the others match on schedules.
    pub fn is_keyword(self) -> bool {
        matches!(self, RuleTier::StoryKeyword | RuleTier::GeneralKeyword)
    }
}

/// Classify a rule by shape, or `None` when it is never eligible
/// (neither keywords nor a schedule). Empty lists count as absent.
pub fn classify(rule: &TriggerRule) -> Option<RuleTier> {
    let keywords = rule.has_keywords();
    let schedule = rule.has_schedule();
    let story = rule.has_story_targets();

    match (keywords, schedule, story) {
        (true, _, true) => Some(RuleTier::StoryKeyword),
        (false, true, true) => Some(RuleTier::StoryGeneral),
        (true, _, false) => Some(RuleTier::GeneralKeyword),
        (false, true, false) => Some(RuleTier::GeneralTime),
        (false, false, _) => None,
    }
}

// ── Schedule kinds ──────────────────────────────────────────────────

/// The schedule variant a rule carries, used for sub-ordering candidates
/// within the General Time tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    Monthly,
    BusinessHour,
    NonBusinessHour,
    Daily,
    DateRange,
}

/// Within the General Time tier, candidates are grouped by schedule kind in
/// this order before rule priority is consulted. This scale is separate from
/// the rule `priority` integer and the two are never mixed.
pub const SCHEDULE_KIND_PRECEDENCE: [ScheduleKind; 5] = [
    ScheduleKind::Monthly,
    ScheduleKind::BusinessHour,
    ScheduleKind::NonBusinessHour,
    ScheduleKind::Daily,
    ScheduleKind::DateRange,
];

/// Map a schedule spec to its kind.
pub fn schedule_kind(spec: &ScheduleSpec) -> ScheduleKind {
    match spec {
        ScheduleSpec::Monthly { .. } => ScheduleKind::Monthly,
        ScheduleSpec::BusinessHour => ScheduleKind::BusinessHour,
        ScheduleSpec::NonBusinessHour => ScheduleKind::NonBusinessHour,
        ScheduleSpec::Daily { .. } => ScheduleKind::Daily,
        ScheduleSpec::DateRange { .. } => ScheduleKind::DateRange,
    }
}

/// Rank of a kind in [`SCHEDULE_KIND_PRECEDENCE`]; lower wins.
pub(crate) fn schedule_kind_rank(kind: ScheduleKind) -> usize {
    SCHEDULE_KIND_PRECEDENCE
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(SCHEDULE_KIND_PRECEDENCE.len())
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RuleStatus, TimeWindow};

    fn rule(
        keywords: Option<Vec<&str>>,
        schedule: Option<ScheduleSpec>,
        story_targets: Option<Vec<&str>>,
    ) -> TriggerRule {
        TriggerRule {
            id: "r1".to_string(),
            name: "Rule".to_string(),
            enabled: true,
            status: RuleStatus::Active,
            priority: 0,
            keywords: keywords.map(|k| k.into_iter().map(String::from).collect()),
            schedule,
            story_targets: story_targets.map(|t| t.into_iter().map(String::from).collect()),
        }
    }

    fn daily() -> ScheduleSpec {
        ScheduleSpec::Daily {
            windows: vec![TimeWindow::new("09:00", "17:00")],
        }
    }

    #[test]
    fn keywords_plus_story_is_story_keyword() {
        let r = rule(Some(vec!["hi"]), None, Some(vec!["story123"]));
        assert_eq!(classify(&r), Some(RuleTier::StoryKeyword));
    }

    #[test]
    fn schedule_plus_story_is_story_general() {
        let r = rule(None, Some(daily()), Some(vec!["story123"]));
        assert_eq!(classify(&r), Some(RuleTier::StoryGeneral));
    }

    #[test]
    fn keywords_only_is_general_keyword() {
        let r = rule(Some(vec!["hi"]), None, None);
        assert_eq!(classify(&r), Some(RuleTier::GeneralKeyword));
    }

    #[test]
    fn schedule_only_is_general_time() {
        let r = rule(None, Some(daily()), None);
        assert_eq!(classify(&r), Some(RuleTier::GeneralTime));
    }

    #[test]
    fn keywords_win_classification_over_schedule() {
        // A keyword rule keeps its keyword tier even when it also carries a
        // schedule (e.g. a date_range gate).
        let r = rule(Some(vec!["hi"]), Some(daily()), None);
        assert_eq!(classify(&r), Some(RuleTier::GeneralKeyword));

        let r = rule(Some(vec!["hi"]), Some(daily()), Some(vec!["story123"]));
        assert_eq!(classify(&r), Some(RuleTier::StoryKeyword));
    }

    #[test]
    fn missing_both_is_never_eligible() {
        assert_eq!(classify(&rule(None, None, None)), None);
        assert_eq!(classify(&rule(None, None, Some(vec!["story123"]))), None);
    }

    #[test]
    fn empty_lists_count_as_absent() {
        let r = rule(Some(vec![]), None, None);
        assert_eq!(classify(&r), None);

        let r = rule(Some(vec!["hi"]), None, Some(vec![]));
        assert_eq!(classify(&r), Some(RuleTier::GeneralKeyword));
    }

    #[test]
    fn tier_precedence_order_is_fixed() {
        assert_eq!(
            TIER_PRECEDENCE,
            [
                RuleTier::StoryKeyword,
                RuleTier::StoryGeneral,
                RuleTier::GeneralKeyword,
                RuleTier::GeneralTime,
            ]
        );
    }

    #[test]
    fn schedule_kind_rank_follows_precedence_table() {
        assert!(
            schedule_kind_rank(ScheduleKind::Monthly)
                < schedule_kind_rank(ScheduleKind::BusinessHour)
        );
        assert!(
            schedule_kind_rank(ScheduleKind::BusinessHour)
                < schedule_kind_rank(ScheduleKind::NonBusinessHour)
        );
        assert!(
            schedule_kind_rank(ScheduleKind::NonBusinessHour)
                < schedule_kind_rank(ScheduleKind::Daily)
        );
        assert!(
            schedule_kind_rank(ScheduleKind::Daily) < schedule_kind_rank(ScheduleKind::DateRange)
        );
    }
}
