//! Member domain entity
//!
//! A registered gym member. Members are immutable once registered.

/// Numeric member identifier as written in the command file
///
/// Uniqueness is not enforced; lookups return the first member registered
/// with a given id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(pub i64);

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MemberId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A registered gym member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

/// Data needed to register a new member
#[derive(Debug, Clone)]
pub struct NewMember {
    pub id: MemberId,
    pub name: String,
}

impl NewMember {
    pub fn new(name: impl Into<String>, id: MemberId) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
