use crate::state::{Alert, StateError};
#[cfg(test)]
use fake::Dummy;
use log::*;

/// Defines medication data structure.
///
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(test, derive(Dummy))]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
    pub taken: bool,
}

/// Specifying the fields of the add medication form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MedicationField {
    Name,
    Dosage,
    Frequency,
    Time,
}

impl MedicationField {
    pub const ALL: [MedicationField; 4] = [
        MedicationField::Name,
        MedicationField::Dosage,
        MedicationField::Frequency,
        MedicationField::Time,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            MedicationField::Name => "Medication name",
            MedicationField::Dosage => "Dosage (e.g., 500mg)",
            MedicationField::Frequency => "Frequency (e.g., Twice daily)",
            MedicationField::Time => "Time (e.g., 9:00 AM)",
        }
    }
}

/// Specifying which part of the screen has focus.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MedicationsFocus {
    List,
    Form,
}

/// Input fields of the add medication form.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationForm {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
}

impl MedicationForm {
    pub fn field(&self, field: MedicationField) -> &str {
        match field {
            MedicationField::Name => &self.name,
            MedicationField::Dosage => &self.dosage,
            MedicationField::Frequency => &self.frequency,
            MedicationField::Time => &self.time,
        }
    }

    fn field_mut(&mut self, field: MedicationField) -> &mut String {
        match field {
            MedicationField::Name => &mut self.name,
            MedicationField::Dosage => &mut self.dosage,
            MedicationField::Frequency => &mut self.frequency,
            MedicationField::Time => &mut self.time,
        }
    }
}

/// Index of the submit button below the form fields.
///
pub const SUBMIT_ROW: usize = MedicationField::ALL.len();

/// Local state of the medications screen.
///
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationsState {
    medications: Vec<Medication>,
    focus: MedicationsFocus,
    list_cursor: usize,
    form_cursor: usize,
    editing: bool,
    form: MedicationForm,
    pending_delete: Option<String>,
}

impl Default for MedicationsState {
    fn default() -> Self {
        MedicationsState {
            medications: default_medications(),
            focus: MedicationsFocus::List,
            list_cursor: 0,
            form_cursor: 0,
            editing: false,
            form: MedicationForm::default(),
            pending_delete: None,
        }
    }
}

fn default_medications() -> Vec<Medication> {
    vec![
        Medication {
            id: "1".to_string(),
            name: "Vitamin D".to_string(),
            dosage: "1000 IU".to_string(),
            frequency: "Once daily".to_string(),
            time: "9:00 AM".to_string(),
            taken: false,
        },
        Medication {
            id: "2".to_string(),
            name: "Omega-3".to_string(),
            dosage: "500mg".to_string(),
            frequency: "Twice daily".to_string(),
            time: "9:00 AM, 6:00 PM".to_string(),
            taken: false,
        },
    ]
}

impl MedicationsState {
    pub fn new() -> Self {
        MedicationsState::default()
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn focus(&self) -> MedicationsFocus {
        self.focus
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    pub fn form_cursor(&self) -> usize {
        self.form_cursor
    }

    pub fn form(&self) -> &MedicationForm {
        &self.form
    }

    /// Whether keystrokes are going into a form field.
    ///
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Return the field under the form cursor, if any.
    ///
    pub fn current_field(&self) -> Option<MedicationField> {
        MedicationField::ALL.get(self.form_cursor).copied()
    }

    /// Return the medication awaiting delete confirmation.
    ///
    pub fn pending_delete(&self) -> Option<&Medication> {
        self.pending_delete
            .as_ref()
            .and_then(|id| self.medications.iter().find(|m| &m.id == id))
    }

    pub fn has_pending_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Switch focus between the list and the form.
    ///
    pub fn toggle_focus(&mut self) -> &mut Self {
        self.editing = false;
        self.focus = match self.focus {
            MedicationsFocus::List => MedicationsFocus::Form,
            MedicationsFocus::Form => MedicationsFocus::List,
        };
        self
    }

    pub fn next(&mut self) -> &mut Self {
        match self.focus {
            MedicationsFocus::List => {
                if !self.medications.is_empty() {
                    self.list_cursor = (self.list_cursor + 1) % self.medications.len();
                }
            }
            MedicationsFocus::Form => {
                self.form_cursor = (self.form_cursor + 1) % (SUBMIT_ROW + 1);
            }
        }
        self
    }

    pub fn previous(&mut self) -> &mut Self {
        match self.focus {
            MedicationsFocus::List => {
                if !self.medications.is_empty() {
                    self.list_cursor = if self.list_cursor == 0 {
                        self.medications.len() - 1
                    } else {
                        self.list_cursor - 1
                    };
                }
            }
            MedicationsFocus::Form => {
                self.form_cursor = if self.form_cursor == 0 {
                    SUBMIT_ROW
                } else {
                    self.form_cursor - 1
                };
            }
        }
        self
    }

    /// Activate the item under the cursor: toggle taken in the list, start
    /// editing a field or submit in the form.
    ///
    pub fn activate(&mut self) -> Option<Alert> {
        match self.focus {
            MedicationsFocus::List => {
                if let Some(id) = self.medications.get(self.list_cursor).map(|m| m.id.clone()) {
                    if let Err(e) = self.toggle_taken(&id) {
                        warn!("{}", e);
                    }
                }
                None
            }
            MedicationsFocus::Form => {
                if self.form_cursor == SUBMIT_ROW {
                    Some(self.add_medication())
                } else {
                    self.editing = true;
                    None
                }
            }
        }
    }

    /// Flip the taken flag of a medication.
    ///
    pub fn toggle_taken(&mut self, id: &str) -> Result<&Medication, StateError> {
        let medication = self
            .medications
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StateError::MedicationNotFound { id: id.to_string() })?;
        medication.taken = !medication.taken;
        debug!("Medication '{}' taken: {}", medication.name, medication.taken);
        Ok(medication)
    }

    /// Ask for confirmation before deleting the highlighted medication.
    ///
    pub fn request_delete(&mut self) -> &mut Self {
        if self.focus == MedicationsFocus::List {
            self.pending_delete = self.medications.get(self.list_cursor).map(|m| m.id.clone());
        }
        self
    }

    pub fn cancel_delete(&mut self) -> &mut Self {
        self.pending_delete = None;
        self
    }

    /// Delete the medication awaiting confirmation.
    ///
    pub fn confirm_delete(&mut self) -> Result<Medication, StateError> {
        let id = match self.pending_delete.take() {
            Some(id) => id,
            None => return Err(StateError::MedicationNotFound { id: String::new() }),
        };
        self.delete(&id)
    }

    fn delete(&mut self, id: &str) -> Result<Medication, StateError> {
        let index = self
            .medications
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StateError::MedicationNotFound { id: id.to_string() })?;
        let removed = self.medications.remove(index);
        if self.list_cursor >= self.medications.len() {
            self.list_cursor = self.medications.len().saturating_sub(1);
        }
        info!("Deleted medication '{}'", removed.name);
        Ok(removed)
    }

    /// Stop typing into the current field.
    ///
    pub fn stop_editing(&mut self) -> &mut Self {
        self.editing = false;
        self
    }

    pub fn add_char(&mut self, c: char) -> &mut Self {
        if let (true, Some(field)) = (self.editing, self.current_field()) {
            self.form.field_mut(field).push(c);
        }
        self
    }

    pub fn remove_char(&mut self) -> &mut Self {
        if let (true, Some(field)) = (self.editing, self.current_field()) {
            self.form.field_mut(field).pop();
        }
        self
    }

    /// Add the medication described by the form, stamped with the current
    /// time as its id.
    ///
    pub fn add_medication(&mut self) -> Alert {
        self.add_medication_at(chrono::Utc::now().timestamp_millis())
    }

    fn add_medication_at(&mut self, millis: i64) -> Alert {
        let name = self.form.name.trim();
        let dosage = self.form.dosage.trim();
        if name.is_empty() || dosage.is_empty() {
            return Alert::new(
                "Error",
                "Please fill in at least medication name and dosage.",
            );
        }
        let frequency = self.form.frequency.trim();
        let time = self.form.time.trim();
        let medication = Medication {
            id: self.unique_id(millis),
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: if frequency.is_empty() {
                "As needed".to_string()
            } else {
                frequency.to_string()
            },
            time: if time.is_empty() {
                "Not specified".to_string()
            } else {
                time.to_string()
            },
            taken: false,
        };
        info!("Added medication '{}'", medication.name);
        self.medications.push(medication);
        self.form = MedicationForm::default();
        self.form_cursor = 0;
        self.editing = false;
        Alert::new("Success", "Medication added successfully!")
    }

    fn unique_id(&self, millis: i64) -> String {
        let mut candidate = millis;
        while self
            .medications
            .iter()
            .any(|m| m.id == candidate.to_string())
        {
            candidate += 1;
        }
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn fill(state: &mut MedicationsState, field: MedicationField, text: &str) {
        state.focus = MedicationsFocus::Form;
        state.form_cursor = MedicationField::ALL.iter().position(|f| *f == field).unwrap();
        state.activate();
        text.chars().for_each(|c| {
            state.add_char(c);
        });
        state.stop_editing();
    }

    #[test]
    fn starts_with_two_medications() {
        let state = MedicationsState::new();
        let names: Vec<&str> = state.medications().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Vitamin D", "Omega-3"]);
        assert!(state.medications().iter().all(|m| !m.taken));
    }

    #[test]
    fn toggle_taken_flips_flag() {
        let mut state = MedicationsState::new();
        assert!(state.toggle_taken("2").unwrap().taken);
        assert!(!state.toggle_taken("2").unwrap().taken);
    }

    #[test]
    fn toggle_taken_unknown_id() {
        let mut state = MedicationsState::new();
        let err = state.toggle_taken("missing").unwrap_err();
        assert!(matches!(err, StateError::MedicationNotFound { .. }));
    }

    #[test]
    fn activate_in_list_toggles_current() {
        let mut state = MedicationsState::new();
        state.next();
        assert!(state.activate().is_none());
        assert!(state.medications()[1].taken);
    }

    #[test]
    fn add_requires_name_and_dosage() {
        let mut state = MedicationsState::new();
        fill(&mut state, MedicationField::Name, "Ibuprofen");
        let alert = state.add_medication_at(1_700_000_000_000);
        assert_eq!(alert.title, "Error");
        assert_eq!(state.medications().len(), 2);
        assert_eq!(state.form().name, "Ibuprofen");
    }

    #[test]
    fn add_fills_defaults_and_resets_form() {
        let mut state = MedicationsState::new();
        fill(&mut state, MedicationField::Name, "Ibuprofen");
        fill(&mut state, MedicationField::Dosage, "200mg");
        let alert = state.add_medication_at(1_700_000_000_000);
        assert_eq!(alert.title, "Success");
        let added = state.medications().last().unwrap();
        assert_eq!(added.id, "1700000000000");
        assert_eq!(added.frequency, "As needed");
        assert_eq!(added.time, "Not specified");
        assert_eq!(state.form(), &MedicationForm::default());
    }

    #[test]
    fn submit_row_adds_medication() {
        let mut state = MedicationsState::new();
        fill(&mut state, MedicationField::Name, "Zinc");
        fill(&mut state, MedicationField::Dosage, "25mg");
        fill(&mut state, MedicationField::Time, "8:00 PM");
        state.form_cursor = SUBMIT_ROW;
        let alert = state.activate().unwrap();
        assert_eq!(alert.title, "Success");
        assert_eq!(state.medications().last().unwrap().time, "8:00 PM");
    }

    #[test]
    fn ids_stay_unique_within_same_millisecond() {
        let mut state = MedicationsState::new();
        for name in ["A", "B"] {
            fill(&mut state, MedicationField::Name, name);
            fill(&mut state, MedicationField::Dosage, "1mg");
            state.add_medication_at(42);
        }
        let ids: Vec<&str> = state.medications().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "42", "43"]);
    }

    #[test]
    fn typing_outside_edit_mode_is_ignored() {
        let mut state = MedicationsState::new();
        state.toggle_focus();
        state.add_char('x');
        assert_eq!(state.form().name, "");
        state.activate();
        state.add_char('x');
        state.remove_char();
        state.add_char('y');
        assert_eq!(state.form().name, "y");
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut state = MedicationsState::new();
        state.request_delete();
        assert_eq!(state.pending_delete().unwrap().name, "Vitamin D");
        state.cancel_delete();
        assert_eq!(state.medications().len(), 2);

        state.next().request_delete();
        let removed = state.confirm_delete().unwrap();
        assert_eq!(removed.name, "Omega-3");
        assert_eq!(state.medications().len(), 1);
        assert_eq!(state.list_cursor(), 0);
        assert!(!state.has_pending_delete());
    }

    #[test]
    fn confirm_without_request_fails() {
        let mut state = MedicationsState::new();
        assert!(state.confirm_delete().is_err());
    }

    #[test]
    fn delete_arbitrary_medications() {
        let mut state = MedicationsState::new();
        let extra: Medication = Faker.fake();
        let id = format!("fake-{}", extra.id);
        state.medications.push(Medication {
            id: id.clone(),
            ..extra
        });
        state.list_cursor = 2;
        state.request_delete();
        let removed = state.confirm_delete().unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(state.list_cursor(), 1);
    }

    #[test]
    fn empty_list_navigation_is_noop() {
        let mut state = MedicationsState::new();
        state.medications.clear();
        state.next().previous();
        assert_eq!(state.list_cursor(), 0);
        assert!(state.activate().is_none());
        state.request_delete();
        assert!(!state.has_pending_delete());
    }
}
