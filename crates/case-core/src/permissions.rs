//! Staff permissions bitmap.
//!
//! Permissions travel inside the session token as a plain integer (`perms`
//! claim). The newtype keeps the bit layout in one place and masks unknown
//! bits on entry so a newer backend cannot grant flags this client does not
//! know about.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::StaffRole;

/// Bit set of staff capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Permissions(u32);

impl Permissions {
    pub const NONE: Self = Self(0);
    pub const VIEW_CASES: Self = Self(1);
    pub const MANAGE_FILTERS: Self = Self(1 << 1);
    pub const VIEW_ANALYTICS: Self = Self(1 << 2);
    pub const MANAGE_CASES: Self = Self(1 << 3);
    pub const ALL: Self = Self((1 << 4) - 1);

    /// Build from a raw claim value, dropping bits outside [`Self::ALL`].
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `required` is present.
    #[must_use]
    pub const fn allows(self, required: Self) -> bool {
        self.0 & required.0 == required.0
    }

    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Default grant when the token carries no `perms` claim.
    #[must_use]
    pub const fn for_role(role: StaffRole) -> Self {
        match role {
            StaffRole::Admin => Self::ALL,
            StaffRole::Subadmin => Self::VIEW_CASES,
        }
    }

    /// Names of the set flags, in bit order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        const TABLE: [(Permissions, &str); 4] = [
            (Permissions::VIEW_CASES, "view_cases"),
            (Permissions::MANAGE_FILTERS, "manage_filters"),
            (Permissions::VIEW_ANALYTICS, "view_analytics"),
            (Permissions::MANAGE_CASES, "manage_cases"),
        ];
        TABLE
            .into_iter()
            .filter(|(flag, _)| self.allows(*flag))
            .map(|(_, name)| name)
            .collect()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("none");
        }
        f.write_str(&self.names().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn allows_requires_every_bit() {
        let granted = Permissions::VIEW_CASES.with(Permissions::VIEW_ANALYTICS);
        assert!(granted.allows(Permissions::VIEW_CASES));
        assert!(granted.allows(Permissions::VIEW_CASES.with(Permissions::VIEW_ANALYTICS)));
        assert!(!granted.allows(Permissions::MANAGE_FILTERS));
        assert!(Permissions::ALL.allows(Permissions::MANAGE_CASES));
    }

    #[test]
    fn from_bits_masks_unknown_flags() {
        let perms = Permissions::from_bits(0xFFFF_FF00 | 0b0110);
        assert_eq!(perms.bits(), 0b0110);
    }

    #[test]
    fn role_defaults() {
        assert_eq!(Permissions::for_role(StaffRole::Admin), Permissions::ALL);
        assert_eq!(
            Permissions::for_role(StaffRole::Subadmin),
            Permissions::VIEW_CASES
        );
    }

    #[test]
    fn display_lists_set_flags() {
        assert_eq!(Permissions::NONE.to_string(), "none");
        let perms = Permissions::MANAGE_FILTERS.with(Permissions::MANAGE_CASES);
        assert_eq!(perms.to_string(), "manage_filters,manage_cases");
    }

    #[test]
    fn serde_is_transparent_integer() {
        let json = serde_json::to_string(&Permissions::ALL).unwrap();
        assert_eq!(json, "15");
        let back: Permissions = serde_json::from_str("3").unwrap();
        assert_eq!(back, Permissions::VIEW_CASES.with(Permissions::MANAGE_FILTERS));
    }
}
