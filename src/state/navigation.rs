//! Navigation-related state types.
//!
//! This module contains the closed set of screens the shell can show and the
//! static menu the drawer lists them with.

use super::StateError;
use std::fmt;
use std::str::FromStr;

/// Specifying the different screens.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Screen {
    Home,
    WaterTracking,
    NutritionGuide,
    SymptomChecker,
    Medications,
    MentalHealth,
    HealthTips,
}

impl Screen {
    /// Every screen, in drawer order.
    ///
    pub const ALL: [Screen; 7] = [
        Screen::Home,
        Screen::WaterTracking,
        Screen::NutritionGuide,
        Screen::SymptomChecker,
        Screen::Medications,
        Screen::MentalHealth,
        Screen::HealthTips,
    ];

    /// Return the header title for the screen.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::WaterTracking => "Water Tracking",
            Screen::NutritionGuide => "Nutrition Guide",
            Screen::SymptomChecker => "Symptom Checker",
            Screen::Medications => "Medications",
            Screen::MentalHealth => "Mental Health",
            Screen::HealthTips => "Health Tips",
        }
    }

    /// Return the identifier used in config files and on the command line.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::WaterTracking => "WaterTracking",
            Screen::NutritionGuide => "NutritionGuide",
            Screen::SymptomChecker => "SymptomChecker",
            Screen::Medications => "Medications",
            Screen::MentalHealth => "MentalHealth",
            Screen::HealthTips => "HealthTips",
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a screen identifier. Unknown names are rejected rather than mapped
/// to a fallback screen.
///
impl FromStr for Screen {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .iter()
            .copied()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| StateError::UnknownScreen(s.to_string()))
    }
}

/// Defines one row of the navigation drawer.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DrawerItem {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub screen: Screen,
}

/// Drawer menu rows, in display order.
///
pub const DRAWER_ITEMS: [DrawerItem; 7] = [
    DrawerItem {
        id: "home",
        title: "Home",
        icon: "🏠",
        screen: Screen::Home,
    },
    DrawerItem {
        id: "water",
        title: "Water Tracking",
        icon: "💧",
        screen: Screen::WaterTracking,
    },
    DrawerItem {
        id: "nutrition",
        title: "Nutrition Guide",
        icon: "🥗",
        screen: Screen::NutritionGuide,
    },
    DrawerItem {
        id: "symptoms",
        title: "Symptom Checker",
        icon: "🩺",
        screen: Screen::SymptomChecker,
    },
    DrawerItem {
        id: "medications",
        title: "Medications",
        icon: "💊",
        screen: Screen::Medications,
    },
    DrawerItem {
        id: "mental",
        title: "Mental Health",
        icon: "🧠",
        screen: Screen::MentalHealth,
    },
    DrawerItem {
        id: "tips",
        title: "Health Tips",
        icon: "💡",
        screen: Screen::HealthTips,
    },
];

/// Return the drawer row index for a screen.
///
pub fn drawer_index_of(screen: Screen) -> usize {
    DRAWER_ITEMS
        .iter()
        .position(|item| item.screen == screen)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_lookup_is_total() {
        let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Home",
                "Water Tracking",
                "Nutrition Guide",
                "Symptom Checker",
                "Medications",
                "Mental Health",
                "Health Tips",
            ]
        );
    }

    #[test]
    fn parse_known_screen() {
        assert_eq!("WaterTracking".parse::<Screen>().unwrap(), Screen::WaterTracking);
        assert_eq!("HealthTips".parse::<Screen>().unwrap(), Screen::HealthTips);
    }

    #[test]
    fn parse_unknown_screen_fails_fast() {
        let err = "Settings".parse::<Screen>().unwrap_err();
        assert!(matches!(err, StateError::UnknownScreen(ref name) if name == "Settings"));
    }

    #[test]
    fn name_round_trips_through_parse() {
        for screen in Screen::ALL {
            assert_eq!(screen.name().parse::<Screen>().unwrap(), screen);
        }
    }

    #[test]
    fn drawer_items_cover_every_screen_once() {
        for screen in Screen::ALL {
            let count = DRAWER_ITEMS.iter().filter(|i| i.screen == screen).count();
            assert_eq!(count, 1, "{:?} should appear exactly once", screen);
        }
        assert_eq!(DRAWER_ITEMS[drawer_index_of(Screen::Medications)].id, "medications");
    }

    #[test]
    fn drawer_titles_match_header_titles() {
        for item in DRAWER_ITEMS {
            assert_eq!(item.title, item.screen.title());
        }
    }

    #[test]
    fn default_screen_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }
}
