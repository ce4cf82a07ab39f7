use crate::error::{FieldcheckError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ActorKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    User,
    Team,
}

impl ActorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::User => "user",
            ActorKind::Team => "team",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActorKind {
    type Err = FieldcheckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "user" => Ok(ActorKind::User),
            "team" => Ok(ActorKind::Team),
            _ => Err(FieldcheckError::UnknownActorKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ActorReference
// ---------------------------------------------------------------------------

/// A resolved pointer at a user or a team. Existence of the entity is not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorReference {
    #[serde(rename = "type")]
    pub kind: ActorKind,
    pub id: u64,
}

impl ActorReference {
    pub fn user(id: u64) -> Self {
        Self {
            kind: ActorKind::User,
            id,
        }
    }

    pub fn team(id: u64) -> Self {
        Self {
            kind: ActorKind::Team,
            id,
        }
    }

    /// Canonical `kind:id` form, e.g. `team:7`.
    pub fn identifier(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ActorReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl std::str::FromStr for ActorReference {
    type Err = FieldcheckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        resolve_actor(s)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"^(?:(?P<kind>[^:]*):)?(?P<id>[0-9]+)$").unwrap())
}

/// Resolve an actor token into a typed reference.
///
/// Accepted forms are `user:<id>`, `team:<id>` and a bare `<id>`, which is
/// the legacy spelling of `user:<id>`. Ids are unsigned decimal digits and
/// must be at least 1. Whitespace and signs are not accepted. Every other
/// input yields [`FieldcheckError::UnknownActorKind`].
pub fn resolve_actor(input: &str) -> Result<ActorReference> {
    let reject = || {
        tracing::debug!(input, "rejected actor input");
        FieldcheckError::UnknownActorKind(input.to_string())
    };

    let caps = token_re().captures(input).ok_or_else(reject)?;

    let kind = match caps.name("kind") {
        Some(prefix) => prefix.as_str().parse::<ActorKind>().map_err(|_| reject())?,
        None => ActorKind::User,
    };

    let id = caps["id"]
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(reject)?;

    Ok(ActorReference { kind, id })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
