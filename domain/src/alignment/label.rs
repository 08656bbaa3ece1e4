//! Alignment labels and the fixed score thresholds that select them.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of six ordered ideological categories.
///
/// Labels are ordered left-to-right by decreasing score threshold, so
/// `Progressive < Liberal < ... < Nationalist` under [`Ord`].
///
/// Serialized with the canonical storage code (`"PROGRESSIVE"`); the display
/// label (`"Progressive"`) is accepted on input as well.
///
/// # Example
///
/// ```
/// use poligrade_domain::AlignmentLabel;
///
/// assert_eq!(AlignmentLabel::classify(16), AlignmentLabel::Progressive);
/// assert_eq!(AlignmentLabel::classify(-18), AlignmentLabel::Nationalist);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlignmentLabel {
    #[serde(alias = "Progressive")]
    Progressive,
    #[serde(alias = "Liberal")]
    Liberal,
    #[serde(alias = "Centrist")]
    Centrist,
    #[serde(alias = "Moderate")]
    Moderate,
    #[serde(alias = "Conservative")]
    Conservative,
    #[serde(alias = "Nationalist")]
    Nationalist,
}

/// Inclusive lower bounds, highest first. Anything below the last bound is
/// [`AlignmentLabel::Nationalist`].
const THRESHOLDS: [(i32, AlignmentLabel); 5] = [
    (16, AlignmentLabel::Progressive),
    (4, AlignmentLabel::Liberal),
    (-2, AlignmentLabel::Centrist),
    (-8, AlignmentLabel::Moderate),
    (-17, AlignmentLabel::Conservative),
];

impl AlignmentLabel {
    /// All labels in left-to-right order.
    pub const ALL: [AlignmentLabel; 6] = [
        AlignmentLabel::Progressive,
        AlignmentLabel::Liberal,
        AlignmentLabel::Centrist,
        AlignmentLabel::Moderate,
        AlignmentLabel::Conservative,
        AlignmentLabel::Nationalist,
    ];

    /// Map a quiz score to its label.
    ///
    /// Hard cutoffs checked from the highest bound down; the first bound the
    /// score reaches wins.
    pub fn classify(score: i32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, label)| *label)
            .unwrap_or(AlignmentLabel::Nationalist)
    }

    /// Inclusive lower bound of this label's score interval.
    ///
    /// `None` for [`AlignmentLabel::Nationalist`], which is unbounded below.
    pub fn min_score(&self) -> Option<i32> {
        THRESHOLDS
            .iter()
            .find(|(_, label)| label == self)
            .map(|(min, _)| *min)
    }

    /// Canonical storage code
    pub fn code(&self) -> &'static str {
        match self {
            AlignmentLabel::Progressive => "PROGRESSIVE",
            AlignmentLabel::Liberal => "LIBERAL",
            AlignmentLabel::Centrist => "CENTRIST",
            AlignmentLabel::Moderate => "MODERATE",
            AlignmentLabel::Conservative => "CONSERVATIVE",
            AlignmentLabel::Nationalist => "NATIONALIST",
        }
    }

    /// Human display label
    pub fn label(&self) -> &'static str {
        match self {
            AlignmentLabel::Progressive => "Progressive",
            AlignmentLabel::Liberal => "Liberal",
            AlignmentLabel::Centrist => "Centrist",
            AlignmentLabel::Moderate => "Moderate",
            AlignmentLabel::Conservative => "Conservative",
            AlignmentLabel::Nationalist => "Nationalist",
        }
    }

    /// Short platform summary shown with a quiz result
    pub fn description(&self) -> &'static str {
        match self {
            AlignmentLabel::Progressive => "Universal Social Programs, Green New Deal",
            AlignmentLabel::Liberal => "Public Option Expansion, Democracy Protections",
            AlignmentLabel::Centrist => "Market-Focused Social Programs, Bipartisan Solutions",
            AlignmentLabel::Moderate => "Limited Government Role, Minimal Social Spending",
            AlignmentLabel::Conservative => "Upper Bracket Tax Cuts, National Defense Emphasis",
            AlignmentLabel::Nationalist => "Isolationist Economics, Cultural Traditionalism",
        }
    }
}

impl fmt::Display for AlignmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for AlignmentLabel {
    type Err = DomainError;

    /// Accepts either the storage code or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AlignmentLabel::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(wanted) || l.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(AlignmentLabel::classify(16), AlignmentLabel::Progressive);
        assert_eq!(AlignmentLabel::classify(15), AlignmentLabel::Liberal);
        assert_eq!(AlignmentLabel::classify(4), AlignmentLabel::Liberal);
        assert_eq!(AlignmentLabel::classify(3), AlignmentLabel::Centrist);
        assert_eq!(AlignmentLabel::classify(-2), AlignmentLabel::Centrist);
        assert_eq!(AlignmentLabel::classify(-3), AlignmentLabel::Moderate);
        assert_eq!(AlignmentLabel::classify(-8), AlignmentLabel::Moderate);
        assert_eq!(AlignmentLabel::classify(-9), AlignmentLabel::Conservative);
        assert_eq!(AlignmentLabel::classify(-17), AlignmentLabel::Conservative);
        assert_eq!(AlignmentLabel::classify(-18), AlignmentLabel::Nationalist);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(AlignmentLabel::classify(i32::MAX), AlignmentLabel::Progressive);
        assert_eq!(AlignmentLabel::classify(i32::MIN), AlignmentLabel::Nationalist);
    }

    #[test]
    fn test_intervals_are_contiguous_and_monotonic() {
        // Walking the axis upward, labels only ever move leftward, one step at a time.
        let mut previous = AlignmentLabel::classify(-200);
        for score in -199..=200 {
            let current = AlignmentLabel::classify(score);
            assert!(current <= previous, "label went right at score {}", score);
            if current != previous {
                let prev_idx = AlignmentLabel::ALL.iter().position(|l| *l == previous).unwrap();
                let cur_idx = AlignmentLabel::ALL.iter().position(|l| *l == current).unwrap();
                assert_eq!(prev_idx - cur_idx, 1, "skipped a label at score {}", score);
                assert_eq!(current.min_score(), Some(score));
            }
            previous = current;
        }
    }

    #[test]
    fn test_min_score() {
        assert_eq!(AlignmentLabel::Progressive.min_score(), Some(16));
        assert_eq!(AlignmentLabel::Conservative.min_score(), Some(-17));
        assert_eq!(AlignmentLabel::Nationalist.min_score(), None);
    }

    #[test]
    fn test_parse_code_and_label() {
        assert_eq!("LIBERAL".parse::<AlignmentLabel>(), Ok(AlignmentLabel::Liberal));
        assert_eq!("Liberal".parse::<AlignmentLabel>(), Ok(AlignmentLabel::Liberal));
        assert_eq!("centrist".parse::<AlignmentLabel>(), Ok(AlignmentLabel::Centrist));
        assert!("Libertarian".parse::<AlignmentLabel>().is_err());
    }

    #[test]
    fn test_serde_code_and_alias() {
        let json = serde_json::to_string(&AlignmentLabel::Moderate).unwrap();
        assert_eq!(json, "\"MODERATE\"");

        let from_code: AlignmentLabel = serde_json::from_str("\"NATIONALIST\"").unwrap();
        let from_label: AlignmentLabel = serde_json::from_str("\"Nationalist\"").unwrap();
        assert_eq!(from_code, AlignmentLabel::Nationalist);
        assert_eq!(from_label, AlignmentLabel::Nationalist);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(AlignmentLabel::Progressive.to_string(), "Progressive");
    }
}
