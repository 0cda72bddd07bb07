//! Core profile value types.

use serde::{Deserialize, Serialize};

use super::error::ProfileError;
use crate::level::LEVEL_SPACING;

/// Direction of turn at the holding fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    Left,
    Right,
}

impl std::fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Definition of one holding pattern within a profile.
///
/// Carries the fix the hold is flown at, the inbound course, the turn
/// direction, and the vertical bounds of the stack slot it governs
/// (altitudes in feet, inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldPattern {
    /// Holding fix identifier (e.g., "TIMBA")
    pub fix: String,
    /// Inbound course in degrees magnetic
    pub inbound_course: u32,
    /// Direction of turns at the fix
    pub turn_direction: TurnDirection,
    /// Lowest usable level altitude in feet
    pub minimum_level: i32,
    /// Highest usable level altitude in feet
    pub maximum_level: i32,
}

impl HoldPattern {
    /// Create a new hold pattern definition.
    pub fn new(
        fix: impl Into<String>,
        inbound_course: u32,
        turn_direction: TurnDirection,
        minimum_level: i32,
        maximum_level: i32,
    ) -> Self {
        Self {
            fix: fix.into(),
            inbound_course,
            turn_direction,
            minimum_level,
            maximum_level,
        }
    }

    /// Number of discrete levels in this pattern's stack.
    pub fn level_count(&self) -> u32 {
        ((self.maximum_level - self.minimum_level) / LEVEL_SPACING) as u32 + 1
    }

    /// Iterate the pattern's level altitudes from top to bottom, matching
    /// the display's row order.
    pub fn levels_descending(&self) -> impl Iterator<Item = i32> {
        let max = self.maximum_level;
        let min = self.minimum_level;
        (0..self.level_count()).map(move |row| {
            let level = max - (row as i32) * LEVEL_SPACING;
            debug_assert!(level >= min);
            level
        })
    }

    /// Whether a level altitude falls within this pattern's bounds.
    pub fn contains_level(&self, level: i32) -> bool {
        level >= self.minimum_level && level <= self.maximum_level
    }
}

/// Raw profile shape accepted from backing data, before validation.
#[derive(Debug, Clone, Deserialize)]
struct ProfileData {
    id: u32,
    name: String,
    patterns: Vec<HoldPattern>,
}

impl TryFrom<ProfileData> for HoldProfile {
    type Error = ProfileError;

    fn try_from(data: ProfileData) -> Result<Self, Self::Error> {
        HoldProfile::new(data.id, data.name, data.patterns)
    }
}

/// A named, immutable set of holding-pattern definitions.
///
/// Identified by a stable numeric id that never changes once assigned.
/// Constructed through [`HoldProfile::new`], which enforces the profile
/// invariants; there are no mutators, so a cached profile can be shared
/// freely without risk of drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileData")]
pub struct HoldProfile {
    id: u32,
    name: String,
    patterns: Vec<HoldPattern>,
}

impl HoldProfile {
    /// Create a profile, validating its invariants.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::DuplicatePattern`] when two patterns share a fix
    /// - [`ProfileError::InvalidLevels`] when a pattern's minimum level is
    ///   above its maximum
    pub fn new(
        id: u32,
        name: impl Into<String>,
        patterns: Vec<HoldPattern>,
    ) -> Result<Self, ProfileError> {
        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.minimum_level > pattern.maximum_level {
                return Err(ProfileError::InvalidLevels {
                    fix: pattern.fix.clone(),
                    minimum: pattern.minimum_level,
                    maximum: pattern.maximum_level,
                });
            }

            if patterns[..index].iter().any(|p| p.fix == pattern.fix) {
                return Err(ProfileError::DuplicatePattern(pattern.fix.clone()));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            patterns,
        })
    }

    /// Stable numeric identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Human-readable label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The profile's hold patterns, in definition order.
    pub fn patterns(&self) -> &[HoldPattern] {
        &self.patterns
    }

    /// Summary record for menu listings.
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary::new(self.id, &self.name)
    }
}

/// Lightweight `(id, name)` record for profile enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: u32,
    pub name: String,
}

impl ProfileSummary {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
