//! Member entity - one person in the standing roster

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::value_objects::{AttendanceStatus, DocumentId};

/// Role of a roster member
///
/// `category` on a member is only meaningful for officers; plain
/// members carry no structural position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberRole {
    /// Regular member
    #[default]
    Member,
    /// Officer with a structural position (category)
    Officer,
}

impl MemberRole {
    /// Canonical lowercase string form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Officer => "officer",
        }
    }

    /// Parse a role string, accepting the legacy Indonesian labels
    pub fn parse(s: &str) -> Result<Self, RoleParseError> {
        match s.trim().to_lowercase().as_str() {
            "member" | "anggota" => Ok(Self::Member),
            "officer" | "pengurus" => Ok(Self::Officer),
            _ => Err(RoleParseError::Unknown(s.trim().to_string())),
        }
    }
}

/// Error when parsing a MemberRole from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleParseError {
    #[error("unknown member role: {0:?}")]
    Unknown(String),
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemberRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberRole::parse(s)
    }
}

impl Serialize for MemberRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MemberRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MemberRole::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Member entity representing one person in the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: DocumentId,
    /// Display name, title-cased at creation
    pub name: String,
    /// Lowercased, whitespace-collapsed name; unique across live members
    pub normalized_name: String,
    pub role: MemberRole,
    /// Structural position; `Some` only when `role` is Officer
    pub category: Option<String>,
    /// Status copied into snapshots when a session is archived
    pub default_status: AttendanceStatus,
    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Draft member carrying everything but the server-assigned fields
///
/// The constructor performs the title-case and normalized-key
/// computation so every member enters the store in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub normalized_name: String,
    pub role: MemberRole,
    pub category: Option<String>,
    pub default_status: AttendanceStatus,
}

impl NewMember {
    /// Build a draft from raw operator input
    ///
    /// `category` is title-cased and kept only for officers; for plain
    /// members it is dropped regardless of what was entered.
    pub fn new(
        name: &str,
        role: MemberRole,
        category: Option<&str>,
        default_status: AttendanceStatus,
    ) -> Self {
        let name = title_case(name);
        let normalized_name = normalize_name(&name);
        let category = match role {
            MemberRole::Officer => category
                .map(title_case)
                .filter(|c| !c.is_empty()),
            MemberRole::Member => None,
        };
        Self {
            name,
            normalized_name,
            role,
            category,
            default_status,
        }
    }

    /// Materialize into a full entity with server-assigned fields
    pub fn into_member(self, id: DocumentId, created_at: DateTime<Utc>) -> Member {
        Member {
            id,
            name: self.name,
            normalized_name: self.normalized_name,
            role: self.role,
            category: self.category,
            default_status: self.default_status,
            created_at,
        }
    }
}

/// Title-case a name: lowercase, trim, collapse whitespace, then
/// uppercase the first letter of each word ("andi   wijaya " -> "Andi Wijaya")
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized form used for the duplicate check: lowercase, trimmed,
/// whitespace-collapsed
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("andi wijaya"), "Andi Wijaya");
        assert_eq!(title_case("  ANDI   WIJAYA  "), "Andi Wijaya");
        assert_eq!(title_case("a"), "A");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Andi Wijaya"), "andi wijaya");
        assert_eq!(normalize_name("  Andi   Wijaya "), "andi wijaya");
    }

    #[test]
    fn test_new_member_canonicalizes() {
        let draft = NewMember::new(
            "  budi  SANTOSO ",
            MemberRole::Member,
            None,
            AttendanceStatus::Present,
        );
        assert_eq!(draft.name, "Budi Santoso");
        assert_eq!(draft.normalized_name, "budi santoso");
        assert_eq!(draft.category, None);
    }

    #[test]
    fn test_officer_keeps_title_cased_category() {
        let draft = NewMember::new(
            "Sari Dewi",
            MemberRole::Officer,
            Some("sekretaris umum"),
            AttendanceStatus::Present,
        );
        assert_eq!(draft.category.as_deref(), Some("Sekretaris Umum"));
    }

    #[test]
    fn test_plain_member_drops_category() {
        let draft = NewMember::new(
            "Sari Dewi",
            MemberRole::Member,
            Some("Sekretaris"),
            AttendanceStatus::Present,
        );
        assert_eq!(draft.category, None);
    }

    #[test]
    fn test_role_parse_legacy_labels() {
        assert_eq!(MemberRole::parse("Anggota").unwrap(), MemberRole::Member);
        assert_eq!(MemberRole::parse("Pengurus").unwrap(), MemberRole::Officer);
        assert!(MemberRole::parse("admin").is_err());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(
            serde_json::to_string(&MemberRole::Officer).unwrap(),
            "\"officer\""
        );
        let role: MemberRole = serde_json::from_str("\"anggota\"").unwrap();
        assert_eq!(role, MemberRole::Member);
    }

    #[test]
    fn test_into_member() {
        let draft = NewMember::new(
            "Andi Wijaya",
            MemberRole::Member,
            None,
            AttendanceStatus::Sick,
        );
        let id = DocumentId::new();
        let now = Utc::now();
        let member = draft.into_member(id, now);
        assert_eq!(member.id, id);
        assert_eq!(member.created_at, now);
        assert_eq!(member.default_status, AttendanceStatus::Sick);
    }
}
