//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Screen identifier outside the known set
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    /// Medication not present in the list
    #[error("Medication not found: {id}")]
    MedicationNotFound { id: String },

    /// Rating outside its scale
    #[error("Invalid rating {value}, expected 0..{max}")]
    InvalidRating { value: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::UnknownScreen("Settings".to_string());
        assert!(error.to_string().contains("Unknown screen"));
        assert!(error.to_string().contains("Settings"));

        let error = StateError::MedicationNotFound {
            id: "1700000000000".to_string(),
        };
        assert!(error.to_string().contains("Medication not found"));
        assert!(error.to_string().contains("1700000000000"));

        let error = StateError::InvalidRating { value: 7, max: 5 };
        assert!(error.to_string().contains("Invalid rating 7"));
    }
}
