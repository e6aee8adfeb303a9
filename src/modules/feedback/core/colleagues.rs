// Static directory of colleagues who can identify themselves on the form.
//
// Responsibilities
// - Map a display name to its department or role.
// - Provide the manual entry sentinel, which defers name and department to free text.

use serde::Serialize;

pub const MANUAL_ENTRY: &str = "Other (Manual Entry)";
pub const MANUAL_ENTRY_DEPT: &str = "External";

const DEFAULT_COLLEAGUES: [(&str, &str); 8] = [
    ("Merieme Dissi", "Chargé D'approvisionnement"),
    (
        "Bennis Hassan",
        "Chargé des opérations comptables et d’analyse financière",
    ),
    ("Abichry Adil", "Store Center Manager"),
    ("Nafie Ikram", "Assistance Administrative"),
    ("El Aboudi Abdelmonim", "Responsable De Magasin"),
    ("Benmira Mourad", "Responsable De Magasin"),
    ("Zif Zakaria", "Responsable De Magasin"),
    ("Benali Abdeladem", "Responsable De Magasin"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colleague {
    pub name: String,
    pub dept: String,
}

/// Outcome of looking up an identity selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity<'a> {
    Known(&'a Colleague),
    Manual,
}

#[derive(Debug, Clone)]
pub struct ColleagueDirectory {
    colleagues: Vec<Colleague>,
}

impl ColleagueDirectory {
    pub fn new(colleagues: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            colleagues: colleagues
                .into_iter()
                .map(|(name, dept)| Colleague { name, dept })
                .collect(),
        }
    }

    pub fn lookup(&self, selection: &str) -> Option<Identity<'_>> {
        if selection == MANUAL_ENTRY {
            return Some(Identity::Manual);
        }
        self.colleagues
            .iter()
            .find(|c| c.name == selection)
            .map(Identity::Known)
    }

    pub fn colleagues(&self) -> &[Colleague] {
        &self.colleagues
    }

    /// Picker options in display order, the manual entry sentinel last.
    pub fn options(&self) -> Vec<Colleague> {
        let mut options = self.colleagues.clone();
        options.push(Colleague {
            name: MANUAL_ENTRY.to_string(),
            dept: MANUAL_ENTRY_DEPT.to_string(),
        });
        options
    }
}

impl Default for ColleagueDirectory {
    fn default() -> Self {
        Self::new(
            DEFAULT_COLLEAGUES
                .iter()
                .map(|(name, dept)| (name.to_string(), dept.to_string())),
        )
    }
}
