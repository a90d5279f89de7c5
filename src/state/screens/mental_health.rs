use crate::content::{MOOD_LABELS, STRESS_LABELS};
use crate::state::{Alert, StateError};
use crossterm::event::KeyEvent;
use log::*;
use tui_textarea::TextArea;

/// Specifying the sections of the check-in form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CheckInSection {
    Mood,
    Stress,
    Notes,
    Save,
}

impl CheckInSection {
    const ORDER: [CheckInSection; 4] = [
        CheckInSection::Mood,
        CheckInSection::Stress,
        CheckInSection::Notes,
        CheckInSection::Save,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Local state of the mental health check-in screen.
///
#[derive(Debug, Clone)]
pub struct MentalHealthState {
    mood: Option<usize>,
    stress: Option<usize>,
    notes: TextArea<'static>,
    section: CheckInSection,
    editing_notes: bool,
}

impl Default for MentalHealthState {
    fn default() -> Self {
        MentalHealthState {
            mood: None,
            stress: None,
            notes: notes_textarea(),
            section: CheckInSection::Mood,
            editing_notes: false,
        }
    }
}

fn notes_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("How are you feeling? What's on your mind today?");
    textarea
}

impl MentalHealthState {
    pub fn new() -> Self {
        MentalHealthState::default()
    }

    pub fn mood(&self) -> Option<usize> {
        self.mood
    }

    pub fn stress(&self) -> Option<usize> {
        self.stress
    }

    pub fn section(&self) -> CheckInSection {
        self.section
    }

    pub fn is_editing_notes(&self) -> bool {
        self.editing_notes
    }

    /// Return the notes text joined by newlines.
    ///
    pub fn notes(&self) -> String {
        self.notes.lines().join("\n")
    }

    /// Get the notes textarea for rendering.
    ///
    pub fn notes_textarea(&self) -> &TextArea<'static> {
        &self.notes
    }

    pub fn next_section(&mut self) -> &mut Self {
        let index = (self.section.index() + 1) % CheckInSection::ORDER.len();
        self.section = CheckInSection::ORDER[index];
        self
    }

    pub fn previous_section(&mut self) -> &mut Self {
        let index = self.section.index();
        let index = if index == 0 {
            CheckInSection::ORDER.len() - 1
        } else {
            index - 1
        };
        self.section = CheckInSection::ORDER[index];
        self
    }

    pub fn set_mood(&mut self, value: usize) -> Result<&mut Self, StateError> {
        self.mood = Some(check_rating(value, MOOD_LABELS.len())?);
        Ok(self)
    }

    pub fn set_stress(&mut self, value: usize) -> Result<&mut Self, StateError> {
        self.stress = Some(check_rating(value, STRESS_LABELS.len())?);
        Ok(self)
    }

    /// Pick `value` on the focused scale. Other sections ignore it.
    ///
    pub fn rate(&mut self, value: usize) -> Result<&mut Self, StateError> {
        match self.section {
            CheckInSection::Mood => self.set_mood(value),
            CheckInSection::Stress => self.set_stress(value),
            CheckInSection::Notes | CheckInSection::Save => Ok(self),
        }
    }

    /// Move the rating of the current scale by `delta`, starting from the
    /// middle of the scale when nothing is picked yet.
    ///
    pub fn shift_rating(&mut self, delta: isize) -> &mut Self {
        let (current, len) = match self.section {
            CheckInSection::Mood => (self.mood, MOOD_LABELS.len()),
            CheckInSection::Stress => (self.stress, STRESS_LABELS.len()),
            _ => return self,
        };
        let value = match current {
            Some(value) => (value as isize + delta).clamp(0, len as isize - 1) as usize,
            None => len / 2,
        };
        match self.section {
            CheckInSection::Mood => self.mood = Some(value),
            CheckInSection::Stress => self.stress = Some(value),
            _ => {}
        }
        self
    }

    /// Activate the current section: start typing notes or save.
    ///
    pub fn activate(&mut self) -> Option<Alert> {
        match self.section {
            CheckInSection::Notes => {
                self.editing_notes = true;
                None
            }
            CheckInSection::Save => Some(self.save()),
            CheckInSection::Mood | CheckInSection::Stress => {
                self.shift_rating(0);
                None
            }
        }
    }

    pub fn stop_editing(&mut self) -> &mut Self {
        self.editing_notes = false;
        self
    }

    /// Forward a key to the notes editor.
    ///
    pub fn input(&mut self, key: KeyEvent) -> &mut Self {
        if self.editing_notes {
            self.notes.input(key);
        }
        self
    }

    /// Save the check-in. Both ratings are required; the form is cleared
    /// after a successful save.
    ///
    pub fn save(&mut self) -> Alert {
        let (mood, stress) = match (self.mood, self.stress) {
            (Some(mood), Some(stress)) => (mood, stress),
            _ => {
                return Alert::new(
                    "Incomplete Entry",
                    "Please rate both your mood and stress level.",
                )
            }
        };
        info!(
            "Check-in saved at {}: mood '{}', stress '{}', {} note line(s)",
            chrono::Local::now().format("%H:%M"),
            MOOD_LABELS[mood],
            STRESS_LABELS[stress],
            self.notes.lines().iter().filter(|l| !l.is_empty()).count()
        );
        *self = MentalHealthState::default();
        Alert::new(
            "Entry Saved",
            "Your mental health check-in has been saved. Remember to practice self-care!",
        )
    }
}

fn check_rating(value: usize, max: usize) -> Result<usize, StateError> {
    if value < max {
        Ok(value)
    } else {
        Err(StateError::InvalidRating { value, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn save_requires_both_ratings() {
        let mut state = MentalHealthState::new();
        state.set_mood(3).unwrap();
        assert_eq!(state.save().title, "Incomplete Entry");
        assert_eq!(state.mood(), Some(3));
    }

    #[test]
    fn save_resets_form() {
        let mut state = MentalHealthState::new();
        state.set_mood(4).unwrap().set_stress(1).unwrap();
        state.section = CheckInSection::Notes;
        state.activate();
        state.input(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
        state.input(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE));
        assert_eq!(state.notes(), "ok");

        assert_eq!(state.save().title, "Entry Saved");
        assert_eq!(state.mood(), None);
        assert_eq!(state.stress(), None);
        assert_eq!(state.notes(), "");
        assert!(!state.is_editing_notes());
    }

    #[test]
    fn rate_follows_focused_section() {
        let mut state = MentalHealthState::new();
        state.rate(1).unwrap();
        state.next_section().rate(4).unwrap();
        state.next_section().rate(0).unwrap();
        assert_eq!(state.mood(), Some(1));
        assert_eq!(state.stress(), Some(4));
    }

    #[test]
    fn ratings_outside_scale_are_rejected() {
        let mut state = MentalHealthState::new();
        assert!(matches!(
            state.set_stress(5),
            Err(StateError::InvalidRating { value: 5, max: 5 })
        ));
    }

    #[test]
    fn shift_rating_starts_in_middle_and_clamps() {
        let mut state = MentalHealthState::new();
        state.shift_rating(1);
        assert_eq!(state.mood(), Some(2));
        state.shift_rating(5);
        assert_eq!(state.mood(), Some(4));
        state.next_section().shift_rating(-1);
        assert_eq!(state.stress(), Some(2));
        state.shift_rating(-9);
        assert_eq!(state.stress(), Some(0));
    }

    #[test]
    fn sections_cycle() {
        let mut state = MentalHealthState::new();
        state.previous_section();
        assert_eq!(state.section(), CheckInSection::Save);
        state.next_section();
        assert_eq!(state.section(), CheckInSection::Mood);
    }

    #[test]
    fn keys_ignored_unless_editing() {
        let mut state = MentalHealthState::new();
        state.input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(state.notes(), "");
    }
}
