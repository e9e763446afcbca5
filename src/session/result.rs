// src/session/result.rs

use serde::Serialize;

use super::QuizSummary;

pub const BADGE_MASTER: &str = "Master of Lamps";
pub const BADGE_GOLDEN: &str = "Golden Djinn";
pub const BADGE_EXPLORER: &str = "Desert Explorer";
pub const BADGE_APPRENTICE: &str = "Apprentice Nomad";

/// Percentage of correct answers, rounded. A zero-question total reads
/// as 0% rather than dividing by zero.
pub fn percent(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Tier label for a final percentage. First match wins.
pub fn badge(percent: u32) -> &'static str {
    if percent == 100 {
        BADGE_MASTER
    } else if percent >= 80 {
        BADGE_GOLDEN
    } else if percent >= 50 {
        BADGE_EXPLORER
    } else {
        BADGE_APPRENTICE
    }
}

/// Derived presentation of a finished session.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub percent: u32,
    pub badge: &'static str,
}

impl QuizSummary {
    pub fn verdict(&self) -> Verdict {
        let percent = percent(self.score, self.total);
        Verdict {
            percent,
            badge: badge(percent),
        }
    }
}
