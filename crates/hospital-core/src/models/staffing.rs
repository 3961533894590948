//! Departments, doctors, and non-medical staff.

use serde::{Deserialize, Serialize};

use super::today;

/// A hospital department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    /// Store-assigned identity, 0 until inserted.
    pub dept_id: i64,
    /// Department name (required).
    pub dept_name: String,
    /// Physical location (building/wing).
    pub location: Option<String>,
}

impl Department {
    pub fn new(dept_name: String, location: Option<String>) -> Self {
        Self {
            dept_id: 0,
            dept_name,
            location,
        }
    }
}

/// A doctor on the hospital roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Store-assigned identity, 0 until inserted.
    pub doctor_id: i64,
    /// Doctor name (required).
    pub name: String,
    /// Specialization (required), matched by the specialty reports.
    pub specialization: String,
    /// Department reference, optional.
    pub dept_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Years of experience.
    pub experience: Option<i64>,
    /// Consultation fee in rupees.
    pub consultation_fee: Option<f64>,
}

impl Doctor {
    pub fn new(name: String, specialization: String) -> Self {
        Self {
            doctor_id: 0,
            name,
            specialization,
            dept_id: None,
            phone: None,
            email: None,
            experience: None,
            consultation_fee: None,
        }
    }
}

/// A non-medical staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    /// Store-assigned identity, 0 until inserted.
    pub staff_id: i64,
    /// Staff name (required).
    pub name: String,
    /// Role, e.g. "Nurse", "Receptionist".
    pub role: String,
    /// Department reference, optional.
    pub dept_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Monthly salary in rupees.
    pub salary: Option<f64>,
    /// Join date (`%Y-%m-%d`), set at creation.
    pub join_date: String,
}

impl StaffMember {
    pub fn new(name: String, role: String) -> Self {
        Self {
            staff_id: 0,
            name,
            role,
            dept_id: None,
            phone: None,
            email: None,
            salary: None,
            join_date: today(),
        }
    }
}
