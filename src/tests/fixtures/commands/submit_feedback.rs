// Shared test fixture for the SubmitFeedback command.

use crate::modules::feedback::core::service_mode::ServiceMode;
use crate::modules::feedback::use_cases::submit_feedback::command::SubmitFeedback;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFeedbackDto {
    pub colleague: String,
    pub full_name: String,
    pub department: String,
    pub mode: ServiceMode,
    pub task_detail: String,
    pub note: String,
}

pub struct SubmitFeedbackBuilder {
    inner: SubmitFeedback,
}

impl Default for SubmitFeedbackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fixed_requested_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 31)
        .unwrap()
        .and_hms_opt(14, 5, 0)
        .unwrap()
}

#[allow(dead_code)]
impl SubmitFeedbackBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/submit_feedback.json").unwrap();
        let dto: SubmitFeedbackDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitFeedback {
                colleague: dto.colleague,
                full_name: dto.full_name,
                department: dto.department,
                mode: dto.mode,
                task_detail: dto.task_detail,
                note: dto.note,
                requested_at: fixed_requested_at(),
                backdate: None,
            },
        }
    }

    pub fn colleague(mut self, v: impl Into<String>) -> Self {
        self.inner.colleague = v.into();
        self
    }

    pub fn full_name(mut self, v: impl Into<String>) -> Self {
        self.inner.full_name = v.into();
        self
    }

    pub fn department(mut self, v: impl Into<String>) -> Self {
        self.inner.department = v.into();
        self
    }

    pub fn mode(mut self, v: ServiceMode) -> Self {
        self.inner.mode = v;
        self
    }

    pub fn task_detail(mut self, v: impl Into<String>) -> Self {
        self.inner.task_detail = v.into();
        self
    }

    pub fn note(mut self, v: impl Into<String>) -> Self {
        self.inner.note = v.into();
        self
    }

    pub fn requested_at(mut self, v: NaiveDateTime) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn backdate(mut self, v: Option<NaiveDateTime>) -> Self {
        self.inner.backdate = v;
        self
    }

    pub fn build(self) -> SubmitFeedback {
        self.inner
    }
}

#[cfg(test)]
mod submit_feedback_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitFeedbackBuilder::default().build();
        assert_eq!(built.colleague, "Merieme Dissi");
        assert_eq!(built.mode, ServiceMode::AllTechnicalAssistance);
        assert_eq!(built.note, "Fixed printer");
        assert_eq!(built.requested_at, fixed_requested_at());
        assert_eq!(built.backdate, None);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SubmitFeedbackBuilder::new()
            .colleague("Other (Manual Entry)")
            .full_name("Jane Roe")
            .department("Audit")
            .mode(ServiceMode::SpecificItProject)
            .task_detail("Badge readers")
            .note("Quick and clean")
            .backdate(Some(fixed_requested_at()))
            .build();

        assert_eq!(custom.colleague, "Other (Manual Entry)");
        assert_eq!(custom.full_name, "Jane Roe");
        assert_eq!(custom.department, "Audit");
        assert_eq!(custom.mode, ServiceMode::SpecificItProject);
        assert_eq!(custom.task_detail, "Badge readers");
        assert_eq!(custom.note, "Quick and clean");
        assert_eq!(custom.backdate, Some(fixed_requested_at()));
    }
}
