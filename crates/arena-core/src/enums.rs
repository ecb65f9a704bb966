//! Entity kinds and activity kinds for Arena.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the value stored in SQL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Kinds of entity that can be addressed by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Season,
    Team,
    Agent,
    SeasonChallenge,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Season => "season",
            Self::Team => "team",
            Self::Agent => "agent",
            Self::SeasonChallenge => "season_challenge",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "season" => Ok(Self::Season),
            "team" => Ok(Self::Team),
            "agent" => Ok(Self::Agent),
            "season_challenge" => Ok(Self::SeasonChallenge),
            other => Err(CoreError::Validation(format!("unknown entity kind '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// ActivityKind
// ---------------------------------------------------------------------------

/// Action recorded by an activity (audit) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Unknown,
    UserLogin,
    UserSetPreferences,
    UserDeleteAccount,
    UserRegister,
    SeasonChallengeBuy,
    SeasonChallengeValidate,
    TeamCreation,
    TeamInviteSend,
    TeamInviteAccept,
    TicketMarkAsClosed,
    AgentRegister,
    AgentChallengeInstanceCreate,
    AgentChallengeInstanceUpdate,
    CouponValidation,
    UserSeasonChallengeRedump,
}

impl ActivityKind {
    pub const ALL: [Self; 16] = [
        Self::Unknown,
        Self::UserLogin,
        Self::UserSetPreferences,
        Self::UserDeleteAccount,
        Self::UserRegister,
        Self::SeasonChallengeBuy,
        Self::SeasonChallengeValidate,
        Self::TeamCreation,
        Self::TeamInviteSend,
        Self::TeamInviteAccept,
        Self::TicketMarkAsClosed,
        Self::AgentRegister,
        Self::AgentChallengeInstanceCreate,
        Self::AgentChallengeInstanceUpdate,
        Self::CouponValidation,
        Self::UserSeasonChallengeRedump,
    ];

    /// Return the string representation used in SQL storage and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::UserLogin => "user_login",
            Self::UserSetPreferences => "user_set_preferences",
            Self::UserDeleteAccount => "user_delete_account",
            Self::UserRegister => "user_register",
            Self::SeasonChallengeBuy => "season_challenge_buy",
            Self::SeasonChallengeValidate => "season_challenge_validate",
            Self::TeamCreation => "team_creation",
            Self::TeamInviteSend => "team_invite_send",
            Self::TeamInviteAccept => "team_invite_accept",
            Self::TicketMarkAsClosed => "ticket_mark_as_closed",
            Self::AgentRegister => "agent_register",
            Self::AgentChallengeInstanceCreate => "agent_challenge_instance_create",
            Self::AgentChallengeInstanceUpdate => "agent_challenge_instance_update",
            Self::CouponValidation => "coupon_validation",
            Self::UserSeasonChallengeRedump => "user_season_challenge_redump",
        }
    }

    /// Human-facing enumerant name used as the activity log message.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::UserLogin => "UserLogin",
            Self::UserSetPreferences => "UserSetPreferences",
            Self::UserDeleteAccount => "UserDeleteAccount",
            Self::UserRegister => "UserRegister",
            Self::SeasonChallengeBuy => "SeasonChallengeBuy",
            Self::SeasonChallengeValidate => "SeasonChallengeValidate",
            Self::TeamCreation => "TeamCreation",
            Self::TeamInviteSend => "TeamInviteSend",
            Self::TeamInviteAccept => "TeamInviteAccept",
            Self::TicketMarkAsClosed => "TicketMarkAsClosed",
            Self::AgentRegister => "AgentRegister",
            Self::AgentChallengeInstanceCreate => "AgentChallengeInstanceCreate",
            Self::AgentChallengeInstanceUpdate => "AgentChallengeInstanceUpdate",
            Self::CouponValidation => "CouponValidation",
            Self::UserSeasonChallengeRedump => "UserSeasonChallengeRedump",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ActivityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown activity kind '{s}'")))
    }
}
