//! 类型定义模块

mod draft;
mod field;
mod outcome;
mod ui_state;

pub use draft::AccountDraft;
pub use field::{ConfirmationRule, FieldDefinition, FieldSet};
pub use outcome::{ConfirmationChoice, NavigationRequest, SubmissionOutcome, ValidationFailure};
pub use ui_state::{BusyGuard, SubmissionPhase, UiState};

// Re-export wire types from the api crate
pub use tpm_api::{ApiResponse, Endpoint, Payload};
