use thiserror::Error;

use crate::booking::BookingStep;
use crate::types::PatientStatus;

/// Reasons a demo action is declined.
///
/// The UI treats every variant as a silent no-op; state machines never mutate
/// state before returning one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemoError {
    #[error("Step error: action belongs to {expected:?}, wizard is at {actual:?}")]
    StepMismatch {
        expected: BookingStep,
        actual: BookingStep,
    },

    #[error("Wizard is already on the dashboard")]
    AtDashboard,

    #[error("Missing selection: {0}")]
    MissingSelection(&'static str),

    #[error("Doctor {doctor} does not practice {specialty}")]
    DoctorMismatch { doctor: String, specialty: String },

    #[error("Input is empty")]
    EmptyInput,

    #[error("Examination has neither medicines nor attachments")]
    EmptyExamination,

    #[error("Visit cannot advance from {0:?}")]
    InvalidTransition(PatientStatus),

    #[error("Unknown patient: {0}")]
    UnknownPatient(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for DemoError {
    fn from(err: config::ConfigError) -> Self {
        DemoError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
