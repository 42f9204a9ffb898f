//! Point-gated status tiers and unlockable themes.
//!
//! Both are fixed lookup tables derived from the cumulative point total.
//! Nothing here is persisted; callers pass in the current total.

use serde::Serialize;

/// A named status band over cumulative points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusTier {
    pub name: &'static str,
    /// Minimum cumulative points to hold this tier
    pub min_points: u32,
}

/// Ascending tier table. The first entry is the fallback for any total.
pub const TIERS: &[StatusTier] = &[
    StatusTier { name: "Newcomer", min_points: 0 },
    StatusTier { name: "Apprentice", min_points: 100 },
    StatusTier { name: "Adept", min_points: 300 },
    StatusTier { name: "Expert", min_points: 600 },
    StatusTier { name: "Legend", min_points: 1000 },
];

/// Map a point total to its status tier.
///
/// Picks the tier with the greatest threshold not exceeding `points`;
/// total for every input since the base tier starts at zero.
pub fn status_for(points: u32) -> &'static StatusTier {
    TIERS
        .iter()
        .rev()
        .find(|tier| tier.min_points <= points)
        .unwrap_or(&TIERS[0])
}

/// An unlockable UI theme, gated on a point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub required_points: u32,
}

/// Theme table. The default theme is always available.
pub const THEMES: &[ThemeSpec] = &[
    ThemeSpec { id: "classic", name: "Classic", required_points: 0 },
    ThemeSpec { id: "ocean", name: "Ocean", required_points: 100 },
    ThemeSpec { id: "forest", name: "Forest", required_points: 300 },
    ThemeSpec { id: "sunset", name: "Sunset", required_points: 600 },
    ThemeSpec { id: "midnight", name: "Midnight", required_points: 1000 },
];

/// Themes available at a given point total.
pub fn unlocked_themes(points: u32) -> Vec<&'static ThemeSpec> {
    THEMES
        .iter()
        .filter(|theme| theme.required_points <= points)
        .collect()
}

/// Look up a theme and check it against a point total.
pub fn is_theme_unlocked(id: &str, points: u32) -> bool {
    THEMES
        .iter()
        .any(|theme| theme.id == id && theme.required_points <= points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(status_for(0).name, "Newcomer");
        assert_eq!(status_for(99).name, "Newcomer");
        assert_eq!(status_for(100).name, "Apprentice");
        assert_eq!(status_for(299).name, "Apprentice");
        assert_eq!(status_for(300).name, "Adept");
        assert_eq!(status_for(600).name, "Expert");
        assert_eq!(status_for(999).name, "Expert");
        assert_eq!(status_for(1000).name, "Legend");
        assert_eq!(status_for(u32::MAX).name, "Legend");
    }

    #[test]
    fn test_status_monotonic() {
        let mut last_min = 0;
        for points in (0..=1200).step_by(25) {
            let tier = status_for(points);
            assert!(tier.min_points >= last_min);
            assert!(tier.min_points <= points);
            last_min = tier.min_points;
        }
    }

    #[test]
    fn test_default_theme_always_unlocked() {
        assert!(is_theme_unlocked("classic", 0));
        assert_eq!(unlocked_themes(0).len(), 1);
    }

    #[test]
    fn test_theme_unlock_thresholds() {
        assert!(!is_theme_unlocked("midnight", 999));
        assert!(is_theme_unlocked("midnight", 1000));
        assert_eq!(unlocked_themes(300).len(), 3);
        assert!(!is_theme_unlocked("no_such_theme", u32::MAX));
    }
}
