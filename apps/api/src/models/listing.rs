use serde::{Deserialize, Serialize};

/// A static catalog entry. `base_score` is display data carried by the
/// catalog; it never feeds the computed score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub skills: Vec<String>,
    pub location: String,
    pub base_score: u32,
    pub description: String,
    pub match_reason: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Strong,
    Good,
    Low,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ScoreBand::Excellent,
            s if s >= 80 => ScoreBand::Strong,
            s if s >= 70 => ScoreBand::Good,
            _ => ScoreBand::Low,
        }
    }
}

/// A listing paired with its computed fit score (0 to 100).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub score: u32,
    pub stars: u8,
    pub band: ScoreBand,
}

impl ScoredListing {
    pub fn new(listing: Listing, score: u32) -> Self {
        let score = score.min(100);
        Self {
            listing,
            score,
            stars: star_count(score),
            band: ScoreBand::for_score(score),
        }
    }
}

/// Number of filled stars (out of 5) for a score, rounded half up.
pub fn star_count(score: u32) -> u8 {
    ((score.min(100) + 10) / 20) as u8
}
