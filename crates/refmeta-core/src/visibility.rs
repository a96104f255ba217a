//! Member accessibility levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RefmetaError;

/// Accessibility of a type member, ordered from least to most accessible.
///
/// The type carries no access checks of its own; it records what a member
/// declaration said.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Visibility {
    /// The member definition was invalid or not recognized.
    #[default]
    Unknown = 0,
    /// Declaring type and its nested types only.
    Private = 1,
    /// Subtypes within the same compilation unit or a unit granted access.
    PrivateProtected = 2,
    /// Subtypes, in any compilation unit.
    Protected = 3,
    /// Subtypes, or anything in the same or a granted compilation unit.
    ProtectedInternal = 4,
    /// The same or a granted compilation unit.
    Internal = 5,
    /// No restriction.
    Public = 6,
}

impl Visibility {
    /// Every level, in ordinal order.
    pub const ALL: [Visibility; 7] = [
        Visibility::Unknown,
        Visibility::Private,
        Visibility::PrivateProtected,
        Visibility::Protected,
        Visibility::ProtectedInternal,
        Visibility::Internal,
        Visibility::Public,
    ];

    /// `false` only for [`Visibility::Unknown`].
    pub fn is_known(self) -> bool {
        self != Visibility::Unknown
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Unknown => "unknown",
            Visibility::Private => "private",
            Visibility::PrivateProtected => "private protected",
            Visibility::Protected => "protected",
            Visibility::ProtectedInternal => "protected internal",
            Visibility::Internal => "internal",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = RefmetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        Visibility::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| RefmetaError::UnknownVisibility(s.to_string()))
    }
}
