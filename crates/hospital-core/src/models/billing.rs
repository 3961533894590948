//! Billing model.

use serde::{Deserialize, Serialize};

use super::text_enum;

text_enum! {
    /// Payment state of a bill.
    PaymentStatus {
        Paid => "Paid",
        Pending => "Pending",
    }
}

/// A bill raised against a patient, optionally tied to an appointment.
///
/// `payment_date` is set exactly when `payment_status` is `Paid`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    /// Store-assigned identity, 0 until inserted.
    pub bill_id: i64,
    pub patient_id: i64,
    /// Appointment reference, optional.
    pub appointment_id: Option<i64>,
    /// Amount in rupees.
    pub amount: f64,
    pub payment_status: PaymentStatus,
    /// Payment date (`%Y-%m-%d`), null while pending.
    pub payment_date: Option<String>,
}

impl Bill {
    /// Create a new bill in the `Pending` state.
    pub fn new(patient_id: i64, appointment_id: Option<i64>, amount: f64) -> Self {
        Self {
            bill_id: 0,
            patient_id,
            appointment_id,
            amount,
            payment_status: PaymentStatus::Pending,
            payment_date: None,
        }
    }
}
