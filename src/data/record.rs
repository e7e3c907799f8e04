//! Player Record Module
//! Typed view of one row of the players table.

use egui::Color32;

/// Shown in place of a missing short name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Shown when a player has no usable face image.
pub const PLACEHOLDER_FACE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/8/89/Portrait_Placeholder.png";

/// Skill attributes in radar order.
pub const SKILL_NAMES: [&str; 6] = [
    "pace",
    "shooting",
    "passing",
    "dribbling",
    "defending",
    "physic",
];

/// The six skill attributes, each possibly missing in the source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkillSet {
    pub values: [Option<f64>; 6],
}

impl SkillSet {
    pub fn new(values: [Option<f64>; 6]) -> Self {
        Self { values }
    }

    /// Skill values with missing (null or NaN) entries read as zero.
    pub fn filled(&self) -> [f64; 6] {
        self.values
            .map(|v| v.filter(|x| !x.is_nan()).unwrap_or(0.0))
    }
}

/// Rating tier shown next to the player name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Elite,
    Pro,
    Rookie,
}

impl Badge {
    pub fn for_overall(overall: u32) -> Self {
        if overall >= 88 {
            Badge::Elite
        } else if overall >= 80 {
            Badge::Pro
        } else {
            Badge::Rookie
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::Elite => "🏆 Elite",
            Badge::Pro => "⚡ Pro",
            Badge::Rookie => "🎯 Rookie",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Badge::Elite => Color32::from_rgb(255, 215, 0),  // Gold
            Badge::Pro => Color32::from_rgb(30, 144, 255),   // Dodger blue
            Badge::Rookie => Color32::from_rgb(124, 252, 0), // Lawn green
        }
    }
}

/// One player's row of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// Null names stay in the table but never match a search.
    pub short_name: Option<String>,
    pub overall: u32,
    pub age: Option<u32>,
    pub nationality_name: Option<String>,
    pub club_name: Option<String>,
    pub player_face_url: Option<String>,
    pub skills: SkillSet,
}

impl PlayerRecord {
    /// Short name for display.
    pub fn name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    pub fn badge(&self) -> Badge {
        Badge::for_overall(self.overall)
    }

    /// Face image URL, falling back to the placeholder for null, blank or "0".
    pub fn face_url(&self) -> &str {
        match self.player_face_url.as_deref() {
            Some(url) if !url.trim().is_empty() && url != "0" => url,
            _ => PLACEHOLDER_FACE_URL,
        }
    }

    pub fn club_label(&self) -> &str {
        self.club_name.as_deref().unwrap_or("No club")
    }

    pub fn age_label(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Case-insensitive substring match on the short name. A null name
    /// matches nothing, not even the empty query.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.short_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle_lower))
    }

    /// "Name (overall) - Club"
    pub fn leaderboard_line(&self) -> String {
        format!("{} ({}) - {}", self.name(), self.overall, self.club_label())
    }

    /// "Name | Overall: n | Age: n"
    pub fn roster_line(&self) -> String {
        format!(
            "{} | Overall: {} | Age: {}",
            self.name(),
            self.overall,
            self.age_label()
        )
    }
}

/// Immutable, ordered table of players loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    rows: Vec<PlayerRecord>,
}

impl PlayerTable {
    pub fn from_records(rows: Vec<PlayerRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PlayerRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn player(name: &str, overall: u32, club: Option<&str>) -> PlayerRecord {
    PlayerRecord {
        short_name: Some(name.to_string()),
        overall,
        age: Some(25),
        nationality_name: Some("Argentina".to_string()),
        club_name: club.map(str::to_string),
        player_face_url: None,
        skills: SkillSet::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(Badge::for_overall(93), Badge::Elite);
        assert_eq!(Badge::for_overall(88), Badge::Elite);
        assert_eq!(Badge::for_overall(87), Badge::Pro);
        assert_eq!(Badge::for_overall(80), Badge::Pro);
        assert_eq!(Badge::for_overall(79), Badge::Rookie);
        assert_eq!(Badge::for_overall(0), Badge::Rookie);
    }

    #[test]
    fn test_face_url_placeholder() {
        let mut p = player("Messi", 93, Some("Paris SG"));
        assert_eq!(p.face_url(), PLACEHOLDER_FACE_URL);

        p.player_face_url = Some("   ".to_string());
        assert_eq!(p.face_url(), PLACEHOLDER_FACE_URL);

        p.player_face_url = Some("0".to_string());
        assert_eq!(p.face_url(), PLACEHOLDER_FACE_URL);

        p.player_face_url = Some("https://cdn.example.org/158023.png".to_string());
        assert_eq!(p.face_url(), "https://cdn.example.org/158023.png");
    }

    #[test]
    fn test_skills_filled_as_zero() {
        let skills = SkillSet::new([Some(85.0), None, Some(f64::NAN), None, Some(30.0), None]);
        assert_eq!(skills.filled(), [85.0, 0.0, 0.0, 0.0, 30.0, 0.0]);
        assert_eq!(SkillSet::default().filled(), [0.0; 6]);
    }

    #[test]
    fn test_summary_lines() {
        let p = player("Messi", 93, Some("Paris SG"));
        assert_eq!(p.leaderboard_line(), "Messi (93) - Paris SG");
        assert_eq!(p.roster_line(), "Messi | Overall: 93 | Age: 25");

        let free = PlayerRecord {
            age: None,
            ..player("Nobody", 60, None)
        };
        assert_eq!(free.leaderboard_line(), "Nobody (60) - No club");
        assert_eq!(free.roster_line(), "Nobody | Overall: 60 | Age: ?");
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let p = player("L. Messi", 93, None);
        assert!(p.name_contains("messi"));
        assert!(p.name_contains(""));
        assert!(!p.name_contains("ronaldo"));
    }

    #[test]
    fn test_unnamed_record() {
        let p = PlayerRecord {
            short_name: None,
            ..player("ignored", 95, Some("Club"))
        };
        assert_eq!(p.name(), UNKNOWN_NAME);
        assert!(!p.name_contains(""));
        assert_eq!(p.leaderboard_line(), "Unknown (95) - Club");
    }
}
