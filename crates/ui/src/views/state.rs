use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        "Что-то пошло не так. Попробуйте ещё раз."
    }
}

/// Errors worth showing to the user. Rejected transitions are routine (a second click on
/// an answered question) and map to `None`.
#[must_use]
pub fn view_error_from(err: &QuizError) -> Option<ViewError> {
    if err.is_invalid_transition() {
        None
    } else {
        Some(ViewError::Unknown)
    }
}
