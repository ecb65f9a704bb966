//! Structured rendering of activity (audit) records.
//!
//! An activity is logged with a field set that depends on which relations
//! are populated on it. Fields come from an ordered rule table evaluated in a
//! fixed sequence. Each rule yields a value only when its relation is present,
//! so the log shape varies per record.
//!
//! Entries are stamped by a clock frozen at the record's `created_at`, so a
//! replayed or backfilled activity keeps its original time.

mod clock;
mod severity;
mod sink;

pub use clock::{Clock, FrozenClock, SystemClock};
pub use severity::{Severity, SeverityRouting};
pub use sink::{FieldValue, LogEntry, LogField, LogSink, MemorySink, TracingSink};

use thiserror::Error;

use crate::entities::ActivityContext;

/// Width the kind name is padded to in the message body.
pub const MESSAGE_WIDTH: usize = 30;

#[derive(Debug, Error)]
pub enum ActivityLogError {
    /// A configured severity is not one of debug/info/warn/error.
    #[error("invalid activity log severity '{0}'")]
    InvalidLogSeverity(String),

    /// A severity override names an activity kind that does not exist.
    #[error("unknown activity kind '{0}' in severity routing")]
    UnknownActivityKind(String),
}

struct FieldRule {
    key: &'static str,
    value: fn(&ActivityContext) -> Option<FieldValue>,
}

fn slug(s: &str) -> FieldValue {
    FieldValue::Str(s.to_string())
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        key: "author",
        value: |ctx| ctx.author.as_ref().map(|author| slug(&author.slug)),
    },
    // Self-actions would repeat the author, so the user only shows up when
    // someone acted on somebody else.
    FieldRule {
        key: "user",
        value: |ctx| match (&ctx.author, &ctx.user) {
            (Some(author), Some(user)) if user.id != author.id => Some(slug(&user.slug)),
            _ => None,
        },
    },
    FieldRule {
        key: "agent",
        value: |ctx| ctx.agent.as_ref().map(|agent| slug(&agent.slug)),
    },
    FieldRule {
        key: "season",
        value: |ctx| ctx.season.as_ref().map(|season| slug(&season.slug)),
    },
    // Teams in a global season are implicit.
    FieldRule {
        key: "team",
        value: |ctx| match (&ctx.season, &ctx.team) {
            (Some(season), Some(team)) if !season.is_global => Some(slug(&team.slug)),
            _ => None,
        },
    },
    FieldRule {
        key: "season-challenge",
        value: |ctx| ctx.season_challenge.as_ref().map(|sc| slug(&sc.slug)),
    },
    FieldRule {
        key: "activity",
        value: |ctx| Some(FieldValue::Int(ctx.activity.id)),
    },
];

/// Renders activities into leveled, field-enriched log entries.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogger {
    routing: SeverityRouting,
}

impl ActivityLogger {
    #[must_use]
    pub const fn new(routing: SeverityRouting) -> Self {
        Self { routing }
    }

    #[must_use]
    pub const fn routing(&self) -> &SeverityRouting {
        &self.routing
    }

    /// Build the entry for an activity without emitting it.
    #[must_use]
    pub fn render(&self, ctx: &ActivityContext, clock: &dyn Clock) -> LogEntry {
        let fields = FIELD_RULES
            .iter()
            .filter_map(|rule| (rule.value)(ctx).map(|value| LogField { key: rule.key, value }))
            .collect();

        LogEntry {
            timestamp: clock.now(),
            severity: self.routing.for_kind(ctx.activity.kind),
            message: format!(
                "{:<width$}",
                ctx.activity.kind.display_name(),
                width = MESSAGE_WIDTH
            ),
            fields,
        }
    }

    /// Log an activity stamped with its own creation time.
    pub fn log(&self, ctx: &ActivityContext, sink: &dyn LogSink) {
        self.log_with_clock(ctx, &FrozenClock(ctx.activity.created_at), sink);
    }

    pub fn log_with_clock(&self, ctx: &ActivityContext, clock: &dyn Clock, sink: &dyn LogSink) {
        sink.emit(&self.render(ctx, clock));
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::{Activity, SeasonRef, SlugRef};
    use crate::enums::ActivityKind;

    fn activity(kind: ActivityKind) -> Activity {
        Activity {
            id: 31,
            kind,
            author_id: 1,
            user_id: None,
            agent_id: None,
            season_id: None,
            team_id: None,
            team_member_id: None,
            season_challenge_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 4, 2, 18, 0, 0).unwrap(),
        }
    }

    fn authored(kind: ActivityKind) -> ActivityContext {
        let mut ctx = ActivityContext::bare(activity(kind));
        ctx.author = Some(SlugRef::new(1, "alice"));
        ctx
    }

    fn relation_keys(entry: &LogEntry) -> Vec<&'static str> {
        entry.keys().into_iter().filter(|k| *k != "activity").collect()
    }

    #[test]
    fn author_only_emits_one_relation_field() {
        let entry = ActivityLogger::default().render(&authored(ActivityKind::UserLogin), &SystemClock);
        assert_eq!(relation_keys(&entry), vec!["author"]);
        assert_eq!(entry.field("author"), Some(&FieldValue::Str("alice".into())));
        assert_eq!(entry.field("activity"), Some(&FieldValue::Int(31)));
    }

    #[test]
    fn distinct_user_adds_user_field() {
        let mut ctx = authored(ActivityKind::TeamInviteSend);
        ctx.user = Some(SlugRef::new(2, "bob"));
        let entry = ActivityLogger::default().render(&ctx, &SystemClock);
        assert_eq!(relation_keys(&entry), vec!["author", "user"]);
        assert_eq!(entry.field("user"), Some(&FieldValue::Str("bob".into())));
    }

    #[test]
    fn self_action_omits_user_field() {
        let mut ctx = authored(ActivityKind::UserSetPreferences);
        ctx.user = Some(SlugRef::new(1, "alice"));
        let entry = ActivityLogger::default().render(&ctx, &SystemClock);
        assert_eq!(relation_keys(&entry), vec!["author"]);
    }

    #[test]
    fn user_without_author_is_not_logged() {
        let mut ctx = ActivityContext::bare(activity(ActivityKind::UserRegister));
        ctx.user = Some(SlugRef::new(2, "bob"));
        let entry = ActivityLogger::default().render(&ctx, &SystemClock);
        assert_eq!(entry.keys(), vec!["activity"]);
    }

    #[test]
    fn team_is_logged_for_regular_season() {
        let mut ctx = authored(ActivityKind::UserSetPreferences);
        ctx.season = Some(SeasonRef {
            id: 7,
            slug: "spring-2024".into(),
            is_global: false,
        });
        ctx.team = Some(SlugRef::new(42, "red-team"));
        let entry = ActivityLogger::default().render(&ctx, &SystemClock);
        assert_eq!(relation_keys(&entry), vec!["author", "season", "team"]);
        assert_eq!(entry.field("team"), Some(&FieldValue::Str("red-team".into())));
    }

    #[test]
    fn global_season_never_logs_team() {
        let mut ctx = authored(ActivityKind::UserSetPreferences);
        ctx.season = Some(SeasonRef {
            id: 1,
            slug: "global".into(),
            is_global: true,
        });
        ctx.team = Some(SlugRef::new(42, "solo-alice"));
        let entry = ActivityLogger::default().render(&ctx, &SystemClock);
        assert_eq!(relation_keys(&entry), vec!["author", "season"]);
    }

    #[test]
    fn team_without_season_is_not_logged() {
        let mut ctx = authored(ActivityKind::TeamCreation);
        ctx.team = Some(SlugRef::new(42, "red-team"));
        let entry = ActivityLogger::default().render(&ctx, &SystemClock);
        assert_eq!(relation_keys(&entry), vec!["author"]);
    }

    #[test]
    fn every_relation_in_fixed_order() {
        let mut ctx = authored(ActivityKind::AgentChallengeInstanceUpdate);
        ctx.user = Some(SlugRef::new(2, "bob"));
        ctx.agent = Some(SlugRef::new(5, "agent-eu-1"));
        ctx.season = Some(SeasonRef {
            id: 7,
            slug: "spring-2024".into(),
            is_global: false,
        });
        ctx.team = Some(SlugRef::new(42, "red-team"));
        ctx.season_challenge = Some(SlugRef::new(11, "hello-world@spring-2024"));
        let entry = ActivityLogger::default().render(&ctx, &SystemClock);
        assert_eq!(
            entry.keys(),
            vec!["author", "user", "agent", "season", "team", "season-challenge", "activity"]
        );
    }

    #[test]
    fn message_is_padded_kind_name() {
        let entry =
            ActivityLogger::default().render(&authored(ActivityKind::UserSetPreferences), &SystemClock);
        assert_eq!(entry.message, "UserSetPreferences            ");
        assert_eq!(entry.message.len(), MESSAGE_WIDTH);
    }

    #[test]
    fn log_uses_record_creation_time() {
        let ctx = authored(ActivityKind::UserLogin);
        let sink = MemorySink::new();
        ActivityLogger::default().log(&ctx, &sink);

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, ctx.activity.created_at);
    }

    #[test]
    fn log_with_clock_uses_given_clock() {
        let ctx = authored(ActivityKind::UserLogin);
        let instant = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let sink = MemorySink::new();
        ActivityLogger::default().log_with_clock(&ctx, &FrozenClock(instant), &sink);
        assert_eq!(sink.entries()[0].timestamp, instant);
    }

    #[test]
    fn severity_follows_routing() {
        let routing = SeverityRouting::default()
            .with_override(ActivityKind::UserDeleteAccount, Severity::Warn);
        let logger = ActivityLogger::new(routing);

        let warn = logger.render(&authored(ActivityKind::UserDeleteAccount), &SystemClock);
        let info = logger.render(&authored(ActivityKind::UserLogin), &SystemClock);
        assert_eq!(warn.severity, Severity::Warn);
        assert_eq!(info.severity, Severity::Info);
    }

    #[test]
    fn tracing_sink_emits_without_subscriber() {
        let ctx = authored(ActivityKind::UserLogin);
        for severity in [Severity::Debug, Severity::Info, Severity::Warn, Severity::Error] {
            let logger = ActivityLogger::new(SeverityRouting::uniform(severity));
            logger.log(&ctx, &TracingSink);
        }
    }
}
