//! Auto-reply trigger validation engine.
//!
//! Decides, for a single inbound chat-platform event, which one (if any) of
//! an organization's configured auto-reply rules should fire:
//! - YAML/JSON rule documents with serde deserialization
//! - shape-based classification into four fixed priority tiers
//! - exact-match keyword matching over normalized text
//! - timezone-aware schedule evaluation (daily, monthly, business hours,
//!   date ranges), degrading malformed settings to "not active"
//! - deterministic priority resolution across and within tiers

pub mod classifier;
pub mod loader;
pub mod matcher;
pub mod schedule;
pub mod schema;
pub mod validator;

pub use classifier::{
    classify, schedule_kind, RuleTier, ScheduleKind, SCHEDULE_KIND_PRECEDENCE, TIER_PRECEDENCE,
};
pub use loader::{LoadError, LoadResult, LoadStatus, RuleLoader};
pub use matcher::matches_keywords;
pub use schedule::is_active;
pub use schema::{MonthlyWindow, RuleStatus, ScheduleSpec, TimeWindow, TriggerRule};
pub use validator::{validate, EvaluationContext};
