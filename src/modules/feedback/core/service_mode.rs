use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of assistance being reported. The labels are stored verbatim as entry tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceMode {
    #[default]
    #[serde(rename = "All Technical Assistance")]
    AllTechnicalAssistance,

    #[serde(rename = "Specific IT Project")]
    SpecificItProject,
}

impl ServiceMode {
    pub const ALL: [ServiceMode; 2] = [
        ServiceMode::AllTechnicalAssistance,
        ServiceMode::SpecificItProject,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceMode::AllTechnicalAssistance => "All Technical Assistance",
            ServiceMode::SpecificItProject => "Specific IT Project",
        }
    }

    pub fn requires_task_detail(self) -> bool {
        matches!(self, ServiceMode::SpecificItProject)
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
