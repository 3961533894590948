//! Clinical records: appointments, medical records, lab tests, prescriptions.

use serde::{Deserialize, Serialize};

use super::{text_enum, today};

text_enum! {
    /// Appointment lifecycle state.
    AppointmentStatus {
        Scheduled => "Scheduled",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

/// A booked appointment between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Store-assigned identity, 0 until inserted.
    pub appointment_id: i64,
    /// Patient reference (required).
    pub patient_id: i64,
    /// Doctor reference (required).
    pub doctor_id: i64,
    /// Appointment date (`%Y-%m-%d`).
    pub appointment_date: String,
    /// Appointment time as entered, e.g. "10:00 AM".
    pub appointment_time: String,
    pub status: AppointmentStatus,
    /// Reason for the visit.
    pub reason: Option<String>,
}

impl Appointment {
    /// Book a new appointment in the `Scheduled` state.
    pub fn new(patient_id: i64, doctor_id: i64, date: String, time: String) -> Self {
        Self {
            appointment_id: 0,
            patient_id,
            doctor_id,
            appointment_date: date,
            appointment_time: time,
            status: AppointmentStatus::Scheduled,
            reason: None,
        }
    }
}

/// A diagnosis entry in a patient's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    /// Store-assigned identity, 0 until inserted.
    pub record_id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    /// Diagnosis text (required).
    pub diagnosis: String,
    pub prescription: Option<String>,
    pub notes: Option<String>,
    /// Record date (`%Y-%m-%d`), set at creation.
    pub record_date: String,
}

impl MedicalRecord {
    pub fn new(patient_id: i64, doctor_id: i64, diagnosis: String) -> Self {
        Self {
            record_id: 0,
            patient_id,
            doctor_id,
            diagnosis,
            prescription: None,
            notes: None,
            record_date: today(),
        }
    }
}

text_enum! {
    /// Lab test lifecycle state.
    LabTestStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

/// An ordered laboratory test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabTest {
    /// Store-assigned identity, 0 until inserted.
    pub test_id: i64,
    pub patient_id: i64,
    pub test_name: String,
    /// Order date (`%Y-%m-%d`), set at creation.
    pub test_date: String,
    /// Result text, filled in as the test progresses.
    pub result: Option<String>,
    pub status: LabTestStatus,
    /// Test cost in rupees.
    pub cost: f64,
}

impl LabTest {
    /// Order a new test in the `Scheduled` state with no result yet.
    pub fn new(patient_id: i64, test_name: String, cost: f64) -> Self {
        Self {
            test_id: 0,
            patient_id,
            test_name,
            test_date: today(),
            result: None,
            status: LabTestStatus::Scheduled,
            cost,
        }
    }
}

/// A pharmacy issuance against a doctor's prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    /// Store-assigned identity, 0 until inserted.
    pub prescription_id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    /// Medicine name (required).
    pub medicine_name: String,
    /// Dosage as entered, e.g. "500mg".
    pub dosage: Option<String>,
    pub quantity: i64,
    /// Total price in rupees.
    pub price: f64,
    /// Issue date (`%Y-%m-%d`), set at creation.
    pub issue_date: String,
}

impl Prescription {
    pub fn new(
        patient_id: i64,
        doctor_id: i64,
        medicine_name: String,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            prescription_id: 0,
            patient_id,
            doctor_id,
            medicine_name,
            dosage: None,
            quantity,
            price,
            issue_date: today(),
        }
    }
}
