//! Offense/defense ratings derived from per-game averages

use serde::{Deserialize, Serialize};

pub const MIN_STAT_RATING: i32 = 50;
pub const MAX_STAT_RATING: i32 = 99;

/// Per-game averages; any field may be missing from a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub ppg: Option<f64>,
    pub apg: Option<f64>,
    pub rpg: Option<f64>,
    pub spg: Option<f64>,
    pub bpg: Option<f64>,
    pub topg: Option<f64>,
}

impl StatLine {
    /// Turnovers alone do not count as a usable stat line.
    pub fn has_signal(&self) -> bool {
        [self.ppg, self.apg, self.rpg, self.spg, self.bpg].iter().any(Option::is_some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub offense: i32,
    pub defense: i32,
}

/// Offense weighs scoring and playmaking against turnovers; defense weighs
/// rebounds, steals and blocks. Both start at 50 and are clamped to [50, 99].
pub fn rate_from_stats(stats: &StatLine) -> Option<Rating> {
    if !stats.has_signal() {
        return None;
    }

    let v = |x: Option<f64>| x.unwrap_or(0.0);
    let offense = 2.2 * v(stats.ppg) + 2.0 * v(stats.apg) - 1.2 * v(stats.topg);
    let defense = 1.4 * v(stats.rpg) + 6.0 * v(stats.spg) + 5.0 * v(stats.bpg);

    Some(Rating { offense: to_rating(offense), defense: to_rating(defense) })
}

fn to_rating(score: f64) -> i32 {
    let rounded = (f64::from(MIN_STAT_RATING) + score + 0.5).floor();
    (rounded as i32).clamp(MIN_STAT_RATING, MAX_STAT_RATING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_signal_yields_none() {
        assert_eq!(rate_from_stats(&StatLine::default()), None);
        let only_turnovers = StatLine { topg: Some(3.0), ..Default::default() };
        assert_eq!(rate_from_stats(&only_turnovers), None);
    }

    #[test]
    fn test_typical_line() {
        let stats = StatLine {
            ppg: Some(10.0),
            apg: Some(5.0),
            rpg: None,
            spg: Some(1.0),
            bpg: Some(0.5),
            topg: Some(2.5),
        };
        // offense: 50 + 22 + 10 - 3 = 79; defense: 50 + 6 + 2.5 = 58.5 -> 59
        assert_eq!(rate_from_stats(&stats), Some(Rating { offense: 79, defense: 59 }));
    }

    #[test]
    fn test_clamped_to_range() {
        let star = StatLine { ppg: Some(35.0), apg: Some(10.0), ..Default::default() };
        let rating = rate_from_stats(&star).unwrap();
        assert_eq!(rating.offense, MAX_STAT_RATING);
        assert_eq!(rating.defense, MIN_STAT_RATING);

        let sloppy = StatLine { ppg: Some(1.0), topg: Some(10.0), ..Default::default() };
        assert_eq!(rate_from_stats(&sloppy).unwrap().offense, MIN_STAT_RATING);
    }

    #[test]
    fn test_stat_line_from_partial_json() {
        let stats: StatLine = serde_json::from_str(r#"{"ppg": 12.5}"#).unwrap();
        assert_eq!(stats.ppg, Some(12.5));
        assert_eq!(stats.rpg, None);
    }
}
