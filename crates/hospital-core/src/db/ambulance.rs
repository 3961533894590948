//! Ambulance table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::{now_timestamp, Ambulance, AmbulanceStatus};

/// An ambulance joined with its assigned patient's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbulanceView {
    pub ambulance_id: i64,
    pub vehicle_number: String,
    pub driver_name: String,
    pub status: AmbulanceStatus,
    pub patient_name: Option<String>,
    pub pickup_location: Option<String>,
    pub destination: Option<String>,
    pub request_time: Option<String>,
}

fn row_to_ambulance(row: &Row<'_>) -> rusqlite::Result<Ambulance> {
    Ok(Ambulance {
        ambulance_id: row.get(0)?,
        vehicle_number: row.get(1)?,
        driver_name: row.get(2)?,
        status: row.get(3)?,
        patient_id: row.get(4)?,
        pickup_location: row.get(5)?,
        destination: row.get(6)?,
        request_time: row.get(7)?,
    })
}

const AMBULANCE_COLUMNS: &str = "ambulance_id, vehicle_number, driver_name, status,
        patient_id, pickup_location, destination, request_time";

impl Database {
    /// Register an ambulance. Returns the assigned identity.
    pub fn insert_ambulance(&self, ambulance: &Ambulance) -> DbResult<i64> {
        if ambulance.vehicle_number.trim().is_empty() || ambulance.driver_name.trim().is_empty() {
            return Err(DbError::Constraint(
                "vehicle number and driver name are required".into(),
            ));
        }
        self.conn
            .execute(
                "INSERT INTO ambulance (vehicle_number, driver_name, status, patient_id, pickup_location, destination, request_time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    ambulance.vehicle_number,
                    ambulance.driver_name,
                    ambulance.status,
                    ambulance.patient_id,
                    ambulance.pickup_location,
                    ambulance.destination,
                    ambulance.request_time,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an ambulance by identity.
    pub fn get_ambulance(&self, ambulance_id: i64) -> DbResult<Option<Ambulance>> {
        self.conn
            .query_row(
                &format!("SELECT {AMBULANCE_COLUMNS} FROM ambulance WHERE ambulance_id = ?"),
                [ambulance_id],
                row_to_ambulance,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List ambulances joined with assigned patient names.
    pub fn list_ambulance_views(&self) -> DbResult<Vec<AmbulanceView>> {
        let mut stmt = self.conn.prepare(
            "SELECT a.ambulance_id, a.vehicle_number, a.driver_name, a.status,
                    p.name, a.pickup_location, a.destination, a.request_time
             FROM ambulance a
             LEFT JOIN patients p ON a.patient_id = p.patient_id
             ORDER BY a.ambulance_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(AmbulanceView {
                ambulance_id: row.get(0)?,
                vehicle_number: row.get(1)?,
                driver_name: row.get(2)?,
                status: row.get(3)?,
                patient_name: row.get(4)?,
                pickup_location: row.get(5)?,
                destination: row.get(6)?,
                request_time: row.get(7)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Ambulances currently available for dispatch.
    pub fn available_ambulances(&self) -> DbResult<Vec<Ambulance>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {AMBULANCE_COLUMNS} FROM ambulance WHERE status = 'Available' ORDER BY ambulance_id"
        ))?;
        let rows = stmt.query_map([], row_to_ambulance)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Dispatch an ambulance: status becomes `On Duty` and all dispatch
    /// fields are set, with the request time stamped now. The patient
    /// reference must resolve.
    pub fn dispatch_ambulance(
        &self,
        ambulance_id: i64,
        patient_id: i64,
        pickup_location: &str,
        destination: &str,
    ) -> DbResult<()> {
        if pickup_location.trim().is_empty() || destination.trim().is_empty() {
            return Err(DbError::Constraint(
                "pickup location and destination are required".into(),
            ));
        }
        let updated = self
            .conn
            .execute(
                "UPDATE ambulance SET status = 'On Duty', patient_id = ?1,
                        pickup_location = ?2, destination = ?3, request_time = ?4
                 WHERE ambulance_id = ?5",
                params![
                    patient_id,
                    pickup_location,
                    destination,
                    now_timestamp(),
                    ambulance_id
                ],
            )
            .map_err(write_err)?;
        if updated == 0 {
            return Err(DbError::NotFound(format!("ambulance {ambulance_id}")));
        }
        Ok(())
    }

    /// Return an ambulance to the fleet: status reverts to `Available` and
    /// every dispatch field becomes null.
    pub fn release_ambulance(&self, ambulance_id: i64) -> DbResult<()> {
        let updated = self.conn.execute(
            "UPDATE ambulance SET status = 'Available', patient_id = NULL,
                    pickup_location = NULL, destination = NULL, request_time = NULL
             WHERE ambulance_id = ?",
            [ambulance_id],
        )?;
        if updated == 0 {
            return Err(DbError::NotFound(format!("ambulance {ambulance_id}")));
        }
        Ok(())
    }

    /// Count of ambulances available for dispatch.
    pub fn available_ambulance_count(&self) -> DbResult<i64> {
        self.count("SELECT COUNT(*) FROM ambulance WHERE status = 'Available'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.seed_if_empty().unwrap();
        db
    }

    #[test]
    fn test_dispatch_and_release() {
        let db = setup_db();

        db.dispatch_ambulance(1, 2, "Clifton", "Hospital").unwrap();
        let amb = db.get_ambulance(1).unwrap().unwrap();
        assert_eq!(amb.status, AmbulanceStatus::OnDuty);
        assert_eq!(amb.patient_id, Some(2));
        assert_eq!(amb.pickup_location, Some("Clifton".into()));
        assert!(amb.request_time.is_some());

        db.release_ambulance(1).unwrap();
        let amb = db.get_ambulance(1).unwrap().unwrap();
        assert_eq!(amb.status, AmbulanceStatus::Available);
        assert!(amb.patient_id.is_none());
        assert!(amb.pickup_location.is_none());
        assert!(amb.request_time.is_none());
    }

    #[test]
    fn test_dispatch_requires_locations() {
        let db = setup_db();
        assert!(matches!(
            db.dispatch_ambulance(1, 2, "", "Hospital"),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_available_fleet_excludes_on_duty() {
        let db = setup_db();
        let available = db.available_ambulances().unwrap();
        assert_eq!(available.len(), 2);
        assert_eq!(db.available_ambulance_count().unwrap(), 2);

        db.dispatch_ambulance(1, 1, "Gulshan", "Hospital").unwrap();
        assert_eq!(db.available_ambulance_count().unwrap(), 1);
    }

    #[test]
    fn test_dispatch_missing_ambulance() {
        let db = setup_db();
        assert!(matches!(
            db.dispatch_ambulance(999, 1, "A", "B"),
            Err(DbError::NotFound(_))
        ));
    }
}
