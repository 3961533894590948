//! Appointment table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbResult};
use crate::models::{Appointment, AppointmentStatus};

/// An appointment joined with patient and doctor names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentView {
    pub appointment_id: i64,
    pub patient: String,
    pub doctor: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub reason: Option<String>,
}

fn row_to_appointment(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        appointment_id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        appointment_date: row.get(3)?,
        appointment_time: row.get(4)?,
        status: row.get(5)?,
        reason: row.get(6)?,
    })
}

fn row_to_view(row: &Row<'_>) -> rusqlite::Result<AppointmentView> {
    Ok(AppointmentView {
        appointment_id: row.get(0)?,
        patient: row.get(1)?,
        doctor: row.get(2)?,
        appointment_date: row.get(3)?,
        appointment_time: row.get(4)?,
        status: row.get(5)?,
        reason: row.get(6)?,
    })
}

const VIEW_SELECT: &str = "SELECT a.appointment_id, p.name, d.name,
        a.appointment_date, a.appointment_time, a.status, a.reason
 FROM appointments a
 JOIN patients p ON a.patient_id = p.patient_id
 JOIN doctors d ON a.doctor_id = d.doctor_id";

impl Database {
    /// Book an appointment. The patient and doctor references must resolve.
    /// Returns the assigned identity.
    pub fn insert_appointment(&self, appointment: &Appointment) -> DbResult<i64> {
        self.conn
            .execute(
                "INSERT INTO appointments (patient_id, doctor_id, appointment_date, appointment_time, status, reason)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    appointment.patient_id,
                    appointment.doctor_id,
                    appointment.appointment_date,
                    appointment.appointment_time,
                    appointment.status,
                    appointment.reason,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an appointment by identity.
    pub fn get_appointment(&self, appointment_id: i64) -> DbResult<Option<Appointment>> {
        self.conn
            .query_row(
                "SELECT appointment_id, patient_id, doctor_id, appointment_date, appointment_time, status, reason
                 FROM appointments WHERE appointment_id = ?",
                [appointment_id],
                row_to_appointment,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List appointments joined with names, optionally filtered by status.
    pub fn list_appointment_views(
        &self,
        status: Option<AppointmentStatus>,
    ) -> DbResult<Vec<AppointmentView>> {
        match status {
            Some(status) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{VIEW_SELECT} WHERE a.status = ? ORDER BY a.appointment_id"))?;
                let rows = stmt.query_map([status], row_to_view)?;
                rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
            }
            None => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{VIEW_SELECT} ORDER BY a.appointment_id"))?;
                let rows = stmt.query_map([], row_to_view)?;
                rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
            }
        }
    }

    /// The most recent appointments, newest date first.
    pub fn recent_appointments(&self, limit: usize) -> DbResult<Vec<AppointmentView>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VIEW_SELECT} ORDER BY a.appointment_date DESC LIMIT ?"))?;
        let rows = stmt.query_map([limit as i64], row_to_view)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count of all appointments.
    pub fn appointment_count(&self) -> DbResult<i64> {
        self.count("SELECT COUNT(*) FROM appointments")
    }

    /// Count of appointments still in the `Scheduled` state.
    pub fn pending_appointment_count(&self) -> DbResult<i64> {
        self.count("SELECT COUNT(*) FROM appointments WHERE status = 'Scheduled'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.seed_if_empty().unwrap();
        db
    }

    #[test]
    fn test_booking_requires_existing_references() {
        let db = setup_db();
        let appt = Appointment::new(999, 1, "2024-04-01".into(), "10:00 AM".into());
        assert!(matches!(
            db.insert_appointment(&appt),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_booking_and_read_back() {
        let db = setup_db();
        let mut appt = Appointment::new(1, 2, "2024-04-01".into(), "10:00 AM".into());
        appt.reason = Some("Follow-up".into());

        let id = db.insert_appointment(&appt).unwrap();
        let retrieved = db.get_appointment(id).unwrap().unwrap();
        assert_eq!(retrieved.status, AppointmentStatus::Scheduled);
        assert_eq!(retrieved.reason, Some("Follow-up".into()));
    }

    #[test]
    fn test_status_filter() {
        let db = setup_db();
        let scheduled = db
            .list_appointment_views(Some(AppointmentStatus::Scheduled))
            .unwrap();
        assert_eq!(scheduled.len(), 2);
        let all = db.list_appointment_views(None).unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_recent_appointments_limit() {
        let db = setup_db();
        let recent = db.recent_appointments(3).unwrap();
        assert_eq!(recent.len(), 3);
        // Newest seeded date first
        assert_eq!(recent[0].appointment_date, "2024-03-19");
    }

    #[test]
    fn test_pending_count() {
        let db = setup_db();
        assert_eq!(db.pending_appointment_count().unwrap(), 2);
    }
}
