//! Per-screen local state.
//!
//! Each screen owns its state privately. The shell mounts a fresh
//! [`ScreenState`] on every navigation, so nothing survives leaving a screen.
//! Screens never touch shell state; they hand back a [`ScreenEffect`] instead.

mod medications;
mod mental_health;
mod symptoms;
mod tips;
mod water;

pub use medications::{
    Medication, MedicationField, MedicationForm, MedicationsFocus, MedicationsState, SUBMIT_ROW,
};
pub use mental_health::{CheckInSection, MentalHealthState};
pub use symptoms::SymptomsState;
pub use tips::TipsState;
pub use water::WaterState;

use super::{Alert, Screen, StateError};
use crate::config::HotkeyAction;
use crate::content::HEALTH_TIPS;
use rand::seq::SliceRandom;
use rand::Rng;

/// Settings screens are mounted with.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSettings {
    pub water_daily_goal: u32,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        ScreenSettings {
            water_daily_goal: 8,
        }
    }
}

/// Outcome of a screen action that the shell carries out.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ScreenEffect {
    Alert(Alert),
    CopyToClipboard(&'static str),
}

/// Local state of the home screen.
///
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub water_daily_goal: u32,
    pub tip_of_the_day: &'static str,
}

impl HomeState {
    pub fn new<R: Rng>(water_daily_goal: u32, rng: &mut R) -> Self {
        let tip_of_the_day = HEALTH_TIPS
            .choose(rng)
            .and_then(|category| category.tips.choose(rng))
            .copied()
            .unwrap_or_default();
        HomeState {
            water_daily_goal,
            tip_of_the_day,
        }
    }
}

/// Local state of the nutrition guide: only a scroll position.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NutritionState {
    pub scroll: u16,
}

/// The mounted screen and its local state.
///
#[derive(Debug, Clone)]
pub enum ScreenState {
    Home(HomeState),
    WaterTracking(WaterState),
    NutritionGuide(NutritionState),
    SymptomChecker(SymptomsState),
    Medications(MedicationsState),
    MentalHealth(MentalHealthState),
    HealthTips(TipsState),
}

impl ScreenState {
    /// Mount a screen with fresh local state.
    ///
    pub fn mount(screen: Screen, settings: &ScreenSettings) -> Self {
        match screen {
            Screen::Home => {
                ScreenState::Home(HomeState::new(settings.water_daily_goal, &mut rand::thread_rng()))
            }
            Screen::WaterTracking => {
                ScreenState::WaterTracking(WaterState::new(settings.water_daily_goal))
            }
            Screen::NutritionGuide => ScreenState::NutritionGuide(NutritionState::default()),
            Screen::SymptomChecker => ScreenState::SymptomChecker(SymptomsState::new()),
            Screen::Medications => ScreenState::Medications(MedicationsState::new()),
            Screen::MentalHealth => ScreenState::MentalHealth(MentalHealthState::new()),
            Screen::HealthTips => ScreenState::HealthTips(TipsState::new()),
        }
    }

    /// Return the screen this state belongs to.
    ///
    pub fn screen(&self) -> Screen {
        match self {
            ScreenState::Home(_) => Screen::Home,
            ScreenState::WaterTracking(_) => Screen::WaterTracking,
            ScreenState::NutritionGuide(_) => Screen::NutritionGuide,
            ScreenState::SymptomChecker(_) => Screen::SymptomChecker,
            ScreenState::Medications(_) => Screen::Medications,
            ScreenState::MentalHealth(_) => Screen::MentalHealth,
            ScreenState::HealthTips(_) => Screen::HealthTips,
        }
    }

    /// Whether the screen is capturing raw keystrokes for a text field.
    ///
    pub fn is_text_input(&self) -> bool {
        match self {
            ScreenState::Medications(state) => state.is_editing(),
            ScreenState::MentalHealth(state) => state.is_editing_notes(),
            _ => false,
        }
    }

    /// Whether the screen is waiting on a confirmation dialog.
    ///
    pub fn has_confirmation(&self) -> bool {
        matches!(self, ScreenState::Medications(state) if state.has_pending_delete())
    }

    /// Pick a value on the focused rating scale. Screens without one ignore
    /// it.
    ///
    pub fn rate(&mut self, value: usize) -> Result<(), StateError> {
        match self {
            ScreenState::MentalHealth(check_in) => check_in.rate(value).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Apply a screen-level action.
    ///
    pub fn apply(&mut self, action: &HotkeyAction) -> Option<ScreenEffect> {
        match self {
            ScreenState::Home(_) => None,
            ScreenState::WaterTracking(water) => match action {
                HotkeyAction::Increase | HotkeyAction::Activate => {
                    water.add_glass().map(ScreenEffect::Alert)
                }
                HotkeyAction::Decrease => {
                    water.remove_glass();
                    None
                }
                _ => None,
            },
            ScreenState::NutritionGuide(nutrition) => {
                match action {
                    HotkeyAction::Next => nutrition.scroll = nutrition.scroll.saturating_add(1),
                    HotkeyAction::Previous => {
                        nutrition.scroll = nutrition.scroll.saturating_sub(1)
                    }
                    _ => {}
                }
                None
            }
            ScreenState::SymptomChecker(symptoms) => match action {
                HotkeyAction::Next => {
                    symptoms.next();
                    None
                }
                HotkeyAction::Previous => {
                    symptoms.previous();
                    None
                }
                HotkeyAction::Activate => {
                    symptoms.toggle_current();
                    None
                }
                HotkeyAction::Submit => Some(ScreenEffect::Alert(symptoms.check())),
                _ => None,
            },
            ScreenState::Medications(medications) => match action {
                HotkeyAction::Next => {
                    medications.next();
                    None
                }
                HotkeyAction::Previous => {
                    medications.previous();
                    None
                }
                HotkeyAction::SwitchFocus => {
                    medications.toggle_focus();
                    None
                }
                HotkeyAction::Activate => medications.activate().map(ScreenEffect::Alert),
                HotkeyAction::Submit if medications.focus() == MedicationsFocus::Form => {
                    Some(ScreenEffect::Alert(medications.add_medication()))
                }
                HotkeyAction::Delete => {
                    medications.request_delete();
                    None
                }
                _ => None,
            },
            ScreenState::MentalHealth(check_in) => match action {
                HotkeyAction::Next => {
                    check_in.next_section();
                    None
                }
                HotkeyAction::Previous => {
                    check_in.previous_section();
                    None
                }
                HotkeyAction::Increase => {
                    check_in.shift_rating(1);
                    None
                }
                HotkeyAction::Decrease => {
                    check_in.shift_rating(-1);
                    None
                }
                HotkeyAction::Activate => check_in.activate().map(ScreenEffect::Alert),
                HotkeyAction::Submit => Some(ScreenEffect::Alert(check_in.save())),
                _ => None,
            },
            ScreenState::HealthTips(tips) => match action {
                HotkeyAction::Next => {
                    tips.next_resource();
                    None
                }
                HotkeyAction::Previous => {
                    tips.previous_resource();
                    None
                }
                HotkeyAction::Increase => {
                    tips.scroll_down();
                    None
                }
                HotkeyAction::Decrease => {
                    tips.scroll_up();
                    None
                }
                HotkeyAction::Activate => {
                    Some(ScreenEffect::CopyToClipboard(tips.selected_resource().url))
                }
                _ => None,
            },
        }
    }
}
