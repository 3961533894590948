//! Dashboard counters.

use serde::{Deserialize, Serialize};

use super::{Database, DbResult};
use crate::models::BedStatus;

/// The headline counters shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub patients: i64,
    pub doctors: i64,
    pub appointments: i64,
    pub pending_appointments: i64,
    pub staff: i64,
    pub revenue: f64,
    pub pending_bills: i64,
    pub available_beds: i64,
    pub occupied_beds: i64,
    pub pending_tests: i64,
    pub available_ambulances: i64,
}

impl Database {
    /// Gather every dashboard counter in one pass. Sums over empty tables
    /// come back as 0.
    pub fn dashboard_stats(&self) -> DbResult<DashboardStats> {
        let (pending_bills, _) = self.pending_bill_summary()?;
        Ok(DashboardStats {
            patients: self.patient_count()?,
            doctors: self.doctor_count()?,
            appointments: self.appointment_count()?,
            pending_appointments: self.pending_appointment_count()?,
            staff: self.staff_count()?,
            revenue: self.paid_revenue()?,
            pending_bills,
            available_beds: self.bed_count(BedStatus::Available)?,
            occupied_beds: self.bed_count(BedStatus::Occupied)?,
            pending_tests: self.pending_test_count()?,
            available_ambulances: self.available_ambulance_count()?,
        })
    }
}
