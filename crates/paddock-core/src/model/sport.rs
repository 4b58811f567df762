use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match - a scheduled sports fixture between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub name: String,
    pub stadium: String,
    pub sport: String,
    pub team1: String,
    pub team2: String,
    pub scheduled_at: DateTime<Utc>,
}

/// A match that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMatch {
    pub name: String,
    pub stadium: String,
    pub sport: String,
    pub team1: String,
    pub team2: String,
    pub scheduled_at: DateTime<Utc>,
}

impl NewMatch {
    /// Attach the id assigned by the store
    pub fn with_id(self, id: i64) -> Match {
        Match {
            id,
            name: self.name,
            stadium: self.stadium,
            sport: self.sport,
            team1: self.team1,
            team2: self.team2,
            scheduled_at: self.scheduled_at,
        }
    }
}

/// Criteria narrowing a match listing
///
/// Fields left as `None` or set to the empty string impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stadium: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
}

impl MatchFilter {
    pub fn with_stadium(mut self, stadium: impl Into<String>) -> Self {
        self.stadium = Some(stadium.into());
        self
    }

    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// The stadium constraint, if one is actually set
    pub fn stadium(&self) -> Option<&str> {
        non_empty(self.stadium.as_deref())
    }

    /// The sport constraint, if one is actually set
    pub fn sport(&self) -> Option<&str> {
        non_empty(self.sport.as_deref())
    }

    /// Whether `m` satisfies every set field
    pub fn matches(&self, m: &Match) -> bool {
        self.stadium().map_or(true, |s| m.stadium == s)
            && self.sport().map_or(true, |s| m.sport == s)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Match {
        Match {
            id: 7,
            name: "Derby".to_string(),
            stadium: "Stadium B".to_string(),
            sport: "Football".to_string(),
            team1: "Reds".to_string(),
            team2: "Blues".to_string(),
            scheduled_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_string_is_unset() {
        let filter = MatchFilter::default().with_stadium("").with_sport("");
        assert_eq!(filter.stadium(), None);
        assert_eq!(filter.sport(), None);
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn test_matches_requires_every_set_field() {
        let m = sample();
        assert!(MatchFilter::default().with_stadium("Stadium B").matches(&m));
        assert!(!MatchFilter::default()
            .with_stadium("Stadium B")
            .with_sport("Cricket")
            .matches(&m));
    }
}
