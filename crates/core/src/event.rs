use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique event identifier, assigned when the webhook payload is normalized.
pub type EventId = Uuid;

/// Chat platform a webhook event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    Line,
    Instagram,
    Messenger,
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelType::Line => write!(f, "line"),
            ChannelType::Instagram => write!(f, "instagram"),
            ChannelType::Messenger => write!(f, "messenger"),
        }
    }
}

/// Kind of inbound webhook event.
///
/// Only `Message` events participate in trigger matching; every other kind
/// short-circuits to "no match".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Message,
    Postback,
    Follow,
    Unfollow,
    Other,
}

/// A normalized inbound event, constructed once per webhook delivery by the
/// channel-specific parser upstream and discarded after evaluation.
///
/// The engine only reads this; it has no lifecycle of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub id: EventId,
    pub kind: EventKind,
    pub channel: ChannelType,
    /// Message text, absent for non-text messages (stickers, media, ...).
    #[serde(default)]
    pub text: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Story context the message references (e.g. an Instagram story reply),
    /// when the channel supports stories.
    #[serde(default)]
    pub story_id: Option<String>,
}

impl WebhookEvent {
    /// Build a plain text message event.
    pub fn message(channel: ChannelType, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: EventKind::Message,
            channel,
            text: Some(text.into()),
            timestamp,
            story_id: None,
        }
    }

    /// Scope this event to a story context.
    pub fn with_story(mut self, story_id: impl Into<String>) -> Self {
        self.story_id = Some(story_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructor_sets_kind_and_text() {
        let event = WebhookEvent::message(ChannelType::Line, "hello", Utc::now());
        assert_eq!(event.kind, EventKind::Message);
        assert_eq!(event.text.as_deref(), Some("hello"));
        assert!(event.story_id.is_none());
    }

    #[test]
    fn with_story_attaches_story_id() {
        let event =
            WebhookEvent::message(ChannelType::Instagram, "hi", Utc::now()).with_story("story123");
        assert_eq!(event.story_id.as_deref(), Some("story123"));
    }

    #[test]
    fn event_json_uses_snake_case_tags() {
        let event = WebhookEvent::message(ChannelType::Messenger, "hey", Utc::now());
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"message\""));
        assert!(json.contains("\"channel\":\"messenger\""));
    }

    #[test]
    fn event_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "kind": "follow",
            "channel": "line",
            "timestamp": "2025-03-01T09:00:00Z"
        }"#;
        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Follow);
        assert!(event.text.is_none());
        assert!(event.story_id.is_none());
    }
}
