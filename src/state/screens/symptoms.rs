use crate::content::{COMMON_SYMPTOMS, SERIOUS_SYMPTOMS};
use crate::state::Alert;
use log::*;

/// Local state of the symptom checker screen.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SymptomsState {
    cursor: usize,
    selected: Vec<&'static str>,
}

impl SymptomsState {
    pub fn new() -> Self {
        SymptomsState::default()
    }

    /// Return the highlighted symptom index.
    ///
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return selected symptoms in the order they were picked.
    ///
    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn is_selected(&self, symptom: &str) -> bool {
        self.selected.contains(&symptom)
    }

    pub fn next(&mut self) -> &mut Self {
        self.cursor = (self.cursor + 1) % COMMON_SYMPTOMS.len();
        self
    }

    pub fn previous(&mut self) -> &mut Self {
        self.cursor = if self.cursor == 0 {
            COMMON_SYMPTOMS.len() - 1
        } else {
            self.cursor - 1
        };
        self
    }

    /// Select or deselect the highlighted symptom.
    ///
    pub fn toggle_current(&mut self) -> &mut Self {
        let symptom = COMMON_SYMPTOMS[self.cursor];
        if let Some(position) = self.selected.iter().position(|s| *s == symptom) {
            self.selected.remove(position);
        } else {
            self.selected.push(symptom);
        }
        self
    }

    /// Return advice for the selected symptoms.
    ///
    pub fn check(&self) -> Alert {
        if self.selected.is_empty() {
            return Alert::new(
                "No Symptoms Selected",
                "Please select at least one symptom to check.",
            );
        }
        let serious = self
            .selected
            .iter()
            .any(|symptom| SERIOUS_SYMPTOMS.contains(symptom));
        info!(
            "Checked {} symptom(s), serious: {}",
            self.selected.len(),
            serious
        );
        if serious {
            Alert::new(
                "Seek Medical Attention",
                "Based on your symptoms, please consult a healthcare professional immediately.",
            )
        } else {
            Alert::new(
                "General Advice",
                "Monitor your symptoms and consider rest, hydration, and over-the-counter \
                 remedies. If symptoms persist or worsen, consult a healthcare provider.",
            )
        }
    }
}
