use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Irish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Irish];

    /// Tag used in storage keys and in the `"{language}-{level}"` level ids.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Irish => "irish",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "english" => Some(Language::English),
            "irish" => Some(Language::Irish),
            _ => None,
        }
    }

    /// BCP-47 locale handed to the speech service.
    pub fn locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Irish => "ga-IE",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Irish => "Gaeilge (Irish)",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    LanguageSelect,
    LevelSelect,
    InProgress,
    Results,
}

/// Reward tier for a finished level, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardTier {
    Perfect,
    Excellent,
    Good,
    Okay,
}

/// Accuracy as a rounded percentage. `total` is never zero for a real level,
/// but an empty level still must not divide by zero.
pub fn accuracy_percent(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

impl RewardTier {
    pub fn for_result(score: usize, total: usize) -> Self {
        let accuracy = accuracy_percent(score, total);
        if score == total {
            RewardTier::Perfect
        } else if accuracy >= 80 {
            RewardTier::Excellent
        } else if accuracy >= 60 {
            RewardTier::Good
        } else {
            RewardTier::Okay
        }
    }

    /// Minutes of device time earned at this tier.
    pub fn device_minutes(self) -> u32 {
        match self {
            RewardTier::Perfect => 15,
            RewardTier::Excellent => 10,
            RewardTier::Good => 5,
            RewardTier::Okay => 2,
        }
    }

    pub fn emojis(self) -> &'static [&'static str] {
        match self {
            RewardTier::Perfect => &["🌟", "🏆", "👑", "💎", "⭐", "🎯", "🔥", "💯"],
            RewardTier::Excellent => &["😊", "🎉", "👏", "🌈", "✨", "🎊", "🎈"],
            RewardTier::Good => &["👍", "😀", "🙂", "💚", "💙", "🌸", "🌺"],
            RewardTier::Okay => &["😌", "🙃", "😊", "🌼", "🌻"],
        }
    }

    pub fn device_time_message(self) -> &'static str {
        match self {
            RewardTier::Perfect => "🎮 Perfect score! Earned 15 minutes of device time!",
            RewardTier::Excellent => "🎮 Great job! Earned 10 minutes of device time!",
            RewardTier::Good => "🎮 Good work! Earned 5 minutes of device time!",
            RewardTier::Okay => "🎮 Keep practicing! Earned 2 minutes of device time!",
        }
    }

    /// Whether finishing at this tier gets the confetti effect.
    pub fn celebrates(self) -> bool {
        matches!(self, RewardTier::Perfect | RewardTier::Excellent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_rounds_to_nearest_percent() {
        assert_eq!(accuracy_percent(3, 5), 60);
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(0, 5), 0);
        assert_eq!(accuracy_percent(0, 0), 0);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(RewardTier::for_result(5, 5), RewardTier::Perfect);
        assert_eq!(RewardTier::for_result(4, 5), RewardTier::Excellent);
        assert_eq!(RewardTier::for_result(3, 5), RewardTier::Good);
        assert_eq!(RewardTier::for_result(2, 5), RewardTier::Okay);
        assert_eq!(RewardTier::for_result(0, 5), RewardTier::Okay);
    }

    #[test]
    fn tier_minutes() {
        assert_eq!(RewardTier::Perfect.device_minutes(), 15);
        assert_eq!(RewardTier::Excellent.device_minutes(), 10);
        assert_eq!(RewardTier::Good.device_minutes(), 5);
        assert_eq!(RewardTier::Okay.device_minutes(), 2);
    }

    #[test]
    fn perfect_and_excellent_celebrate() {
        assert!(RewardTier::Perfect.celebrates());
        assert!(RewardTier::Excellent.celebrates());
        assert!(!RewardTier::Good.celebrates());
        assert!(!RewardTier::Okay.celebrates());
    }

    #[test]
    fn language_tags_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(Language::from_tag("klingon"), None);
    }
}
