//! Mood catalog

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the eight predefined moods a user can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Calm,
    Tired,
    Stressed,
    Sad,
    Angry,
    Confused,
    Excited,
}

impl Mood {
    /// Every mood, in catalog order
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Tired,
        Mood::Stressed,
        Mood::Sad,
        Mood::Angry,
        Mood::Confused,
        Mood::Excited,
    ];

    /// Stable identifier ("1" through "8")
    pub fn id(&self) -> &'static str {
        match self {
            Mood::Happy => "1",
            Mood::Calm => "2",
            Mood::Tired => "3",
            Mood::Stressed => "4",
            Mood::Sad => "5",
            Mood::Angry => "6",
            Mood::Confused => "7",
            Mood::Excited => "8",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Tired => "😴",
            Mood::Stressed => "😤",
            Mood::Sad => "😢",
            Mood::Angry => "😡",
            Mood::Confused => "🤔",
            Mood::Excited => "😍",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Tired => "Tired",
            Mood::Stressed => "Stressed",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Confused => "Confused",
            Mood::Excited => "Excited",
        }
    }

    /// Display color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Happy => "#10B981",
            Mood::Calm => "#3B82F6",
            Mood::Tired => "#6366F1",
            Mood::Stressed => "#F59E0B",
            Mood::Sad => "#EF4444",
            Mood::Angry => "#DC2626",
            Mood::Confused => "#8B5CF6",
            Mood::Excited => "#F97316",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::Happy => "Feeling great and positive!",
            Mood::Calm => "Peaceful and relaxed state of mind.",
            Mood::Tired => "Need some rest and recovery.",
            Mood::Stressed => "Feeling overwhelmed or pressured.",
            Mood::Sad => "Going through a difficult time.",
            Mood::Angry => "Frustrated or upset about something.",
            Mood::Confused => "Uncertain or puzzled about things.",
            Mood::Excited => "Enthusiastic and energetic!",
        }
    }

    /// Resolve a mood reference by id ("4") or case-insensitive label ("stressed")
    pub fn resolve(reference: &str) -> Option<Mood> {
        let reference = reference.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.id() == reference || mood.label().eq_ignore_ascii_case(reference))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::resolve(s).ok_or_else(|| s.to_string())
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Mood", 4)?;
        state.serialize_field("id", self.id())?;
        state.serialize_field("emoji", self.emoji())?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("color", self.color())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_eight_distinct_ids() {
        let ids: HashSet<&str> = Mood::ALL.iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), 8);
        let expected: HashSet<&str> = ["1", "2", "3", "4", "5", "6", "7", "8"].into_iter().collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_resolve_by_id() {
        assert_eq!(Mood::resolve("1"), Some(Mood::Happy));
        assert_eq!(Mood::resolve("4"), Some(Mood::Stressed));
        assert_eq!(Mood::resolve("8"), Some(Mood::Excited));
    }

    #[test]
    fn test_resolve_by_label_case_insensitive() {
        assert_eq!(Mood::resolve("calm"), Some(Mood::Calm));
        assert_eq!(Mood::resolve("CONFUSED"), Some(Mood::Confused));
        assert_eq!(Mood::resolve("  Tired "), Some(Mood::Tired));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(Mood::resolve("9"), None);
        assert_eq!(Mood::resolve("grumpy"), None);
        assert_eq!(Mood::resolve(""), None);
    }

    #[test]
    fn test_from_str_error_keeps_input() {
        assert_eq!("meh".parse::<Mood>(), Err("meh".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Mood::Sad.to_string(), "😢 Sad");
    }

    #[test]
    fn test_serialize_as_definition() {
        let json = serde_json::to_string(&Mood::Stressed).unwrap();
        assert_eq!(
            json,
            r##"{"id":"4","emoji":"😤","label":"Stressed","color":"#F59E0B"}"##
        );
    }
}
