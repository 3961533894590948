//! Patient model.

use serde::{Deserialize, Serialize};

use super::today;

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Store-assigned identity, 0 until inserted.
    pub patient_id: i64,
    /// Patient name (required).
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Gender as entered on the registration form.
    pub gender: String,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Home address
    pub address: Option<String>,
    /// Blood group (e.g. "O+", "AB-")
    pub blood_group: String,
    /// Registration date (`%Y-%m-%d`), set at creation.
    pub registration_date: String,
}

impl Patient {
    /// Create a new patient dated today.
    pub fn new(name: String, age: i64, gender: String, blood_group: String) -> Self {
        Self {
            patient_id: 0,
            name,
            age,
            gender,
            phone: None,
            email: None,
            address: None,
            blood_group,
            registration_date: today(),
        }
    }
}
