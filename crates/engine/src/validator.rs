//! Trigger validation: picks at most one winning rule for an inbound event.
//!
//! Tiers are consulted in [`TIER_PRECEDENCE`] order and evaluation stops at
//! the first tier that yields a match, so a lower tier can never out-vote a
//! higher one. Within a tier, candidates are ordered deterministically:
//! General Time groups by schedule kind first, then everywhere higher
//! `priority` wins and remaining ties break on rule `id`.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use autoreply_core::{BusinessHourPeriod, EventKind, WebhookEvent};

use crate::classifier::{classify, schedule_kind, schedule_kind_rank, RuleTier, TIER_PRECEDENCE};
use crate::matcher::matches_keywords;
use crate::schedule::is_active;
use crate::schema::{ScheduleSpec, TriggerRule};

// ── Evaluation context ──────────────────────────────────────────────

/// Per-organization inputs the engine needs besides the rule set, supplied
/// by external configuration services as a consistent snapshot.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    /// IANA timezone identifier of the rule owner; empty or unknown values
    /// fall back to UTC.
    pub timezone: String,
    /// Operating hours scoping `business_hour` / `non_business_hour` rules.
    pub business_hours: Vec<BusinessHourPeriod>,
}

impl EvaluationContext {
    pub fn new(timezone: impl Into<String>, business_hours: Vec<BusinessHourPeriod>) -> Self {
        Self {
            timezone: timezone.into(),
            business_hours,
        }
    }
}

// ── Validator ───────────────────────────────────────────────────────

/// Decide which configured rule, if any, should fire for `event`.
///
/// Pure function over immutable inputs: the same `(event, rules, now)`
/// always yields the same winner. `now` is the evaluation instant (webhook
/// receipt time) used for every schedule check. Returns `None` for
/// non-message events and when nothing matches; neither is an error.
pub fn validate<'r>(
    event: &WebhookEvent,
    rules: &'r [TriggerRule],
    ctx: &EvaluationContext,
    now: DateTime<Utc>,
) -> Option<&'r TriggerRule> {
    if event.kind != EventKind::Message {
        return None;
    }

    for tier in TIER_PRECEDENCE {
        let mut candidates: Vec<&TriggerRule> = rules
            .iter()
            .filter(|rule| rule.is_eligible() && classify(rule) == Some(tier))
            .filter(|rule| rule_matches(rule, tier, event, ctx, now))
            .collect();

        if candidates.is_empty() {
            continue;
        }

        candidates.sort_by(|a, b| candidate_order(tier, a, b));
        let winner = candidates[0];
        debug!(rule_id = %winner.id, tier = ?tier, "trigger matched");
        return Some(winner);
    }

    None
}

/// Apply the tier's match test to one rule.
fn rule_matches(
    rule: &TriggerRule,
    tier: RuleTier,
    event: &WebhookEvent,
    ctx: &EvaluationContext,
    now: DateTime<Utc>,
) -> bool {
    if tier.is_story() && !story_matches(rule, event) {
        return false;
    }
    if tier.is_keyword() {
        keyword_rule_matches(rule, event, ctx, now)
    } else {
        schedule_rule_matches(rule, ctx, now)
    }
}

/// The event must carry a story id listed in the rule's targets. Without a
/// story id on the event, story-scoped rules are never eligible.
fn story_matches(rule: &TriggerRule, event: &WebhookEvent) -> bool {
    let story_id = match event.story_id.as_deref() {
        Some(id) => id,
        None => return false,
    };
    rule.story_targets
        .as_deref()
        .is_some_and(|targets| targets.iter().any(|t| t == story_id))
}

fn keyword_rule_matches(
    rule: &TriggerRule,
    event: &WebhookEvent,
    ctx: &EvaluationContext,
    now: DateTime<Utc>,
) -> bool {
    let text = match event.text.as_deref() {
        Some(t) => t,
        None => return false,
    };
    let keywords = match rule.keywords.as_deref() {
        Some(k) => k,
        None => return false,
    };
    if !matches_keywords(keywords, text) {
        return false;
    }
    // A date_range schedule gates keyword rules; outside the range the rule
    // simply falls through to lower tiers. Other schedule kinds never apply
    // to keyword rules.
    match &rule.schedule {
        Some(spec @ ScheduleSpec::DateRange { .. }) => {
            is_active(spec, now, &ctx.timezone, &ctx.business_hours)
        }
        _ => true,
    }
}

fn schedule_rule_matches(rule: &TriggerRule, ctx: &EvaluationContext, now: DateTime<Utc>) -> bool {
    match &rule.schedule {
        Some(spec) => is_active(spec, now, &ctx.timezone, &ctx.business_hours),
        None => false,
    }
}

/// Ordering within a tier. General Time candidates group by schedule kind
/// first; then higher `priority` wins, and ties break on rule `id` so the
/// winner is deterministic.
fn candidate_order(tier: RuleTier, a: &TriggerRule, b: &TriggerRule) -> Ordering {
    let by_kind = if tier == RuleTier::GeneralTime {
        kind_rank(a).cmp(&kind_rank(b))
    } else {
        Ordering::Equal
    };
    by_kind
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| a.id.cmp(&b.id))
}

fn kind_rank(rule: &TriggerRule) -> usize {
    rule.schedule
        .as_ref()
        .map(|spec| schedule_kind_rank(schedule_kind(spec)))
        .unwrap_or(usize::MAX)
}

// ── Tests ───────────────────────────────────────────────────────────
