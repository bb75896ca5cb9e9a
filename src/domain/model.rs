use serde::{Deserialize, Serialize};

/// Column order of every generated person file.
pub const PERSON_HEADERS: [&str; 7] = [
    "voornaam",
    "achternaam",
    "geboortedatum",
    "bsn",
    "email",
    "telefoon",
    "postcode",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub voornaam: String,
    pub achternaam: String,
    pub geboortedatum: String,
    pub bsn: String,
    pub email: String,
    pub telefoon: String,
    pub postcode: String,
}

impl Person {
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.voornaam,
            self.achternaam,
            self.geboortedatum,
            self.bsn,
            self.email,
            self.telefoon,
            self.postcode,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub file_name: String,
    pub dataset: Dataset,
    pub csv_output: String,
}
