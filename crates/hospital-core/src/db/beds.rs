//! Bed table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::{today, Bed, BedStatus};

/// A bed joined with its occupant's name, as shown on the ward board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BedView {
    pub bed_id: i64,
    pub bed_number: String,
    pub ward_type: Option<String>,
    pub status: BedStatus,
    pub patient_name: Option<String>,
    pub admission_date: Option<String>,
}

fn row_to_bed(row: &Row<'_>) -> rusqlite::Result<Bed> {
    Ok(Bed {
        bed_id: row.get(0)?,
        bed_number: row.get(1)?,
        ward_type: row.get(2)?,
        status: row.get(3)?,
        patient_id: row.get(4)?,
        admission_date: row.get(5)?,
    })
}

impl Database {
    /// Add a bed. Returns the assigned identity.
    pub fn insert_bed(&self, bed: &Bed) -> DbResult<i64> {
        if bed.bed_number.trim().is_empty() {
            return Err(DbError::Constraint("bed number is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO beds (bed_number, ward_type, status, patient_id, admission_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    bed.bed_number,
                    bed.ward_type,
                    bed.status,
                    bed.patient_id,
                    bed.admission_date,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a bed by identity.
    pub fn get_bed(&self, bed_id: i64) -> DbResult<Option<Bed>> {
        self.conn
            .query_row(
                "SELECT bed_id, bed_number, ward_type, status, patient_id, admission_date
                 FROM beds WHERE bed_id = ?",
                [bed_id],
                row_to_bed,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List beds joined with occupant names, ordered by bed number.
    pub fn list_bed_views(&self) -> DbResult<Vec<BedView>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.bed_id, b.bed_number, b.ward_type, b.status, p.name, b.admission_date
             FROM beds b
             LEFT JOIN patients p ON b.patient_id = p.patient_id
             ORDER BY b.bed_number",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BedView {
                bed_id: row.get(0)?,
                bed_number: row.get(1)?,
                ward_type: row.get(2)?,
                status: row.get(3)?,
                patient_name: row.get(4)?,
                admission_date: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Admit a patient: the bed becomes `Occupied` with today's admission
    /// date. The patient reference must resolve.
    pub fn admit_patient(&self, bed_id: i64, patient_id: i64) -> DbResult<()> {
        let updated = self
            .conn
            .execute(
                "UPDATE beds SET status = 'Occupied', patient_id = ?1, admission_date = ?2
                 WHERE bed_id = ?3",
                params![patient_id, today(), bed_id],
            )
            .map_err(write_err)?;
        if updated == 0 {
            return Err(DbError::NotFound(format!("bed {bed_id}")));
        }
        Ok(())
    }

    /// Discharge the occupant: the bed reverts to `Available` and both
    /// occupancy fields become null.
    pub fn discharge_patient(&self, bed_id: i64) -> DbResult<()> {
        let updated = self.conn.execute(
            "UPDATE beds SET status = 'Available', patient_id = NULL, admission_date = NULL
             WHERE bed_id = ?",
            [bed_id],
        )?;
        if updated == 0 {
            return Err(DbError::NotFound(format!("bed {bed_id}")));
        }
        Ok(())
    }

    /// Count of beds in the given state.
    pub fn bed_count(&self, status: BedStatus) -> DbResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM beds WHERE status = ?", [status], |row| {
                row.get(0)
            })?)
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
    fn test_seeded_bed_counts() {
        let db = setup_db();
        assert_eq!(db.bed_count(BedStatus::Available).unwrap(), 3);
        assert_eq!(db.bed_count(BedStatus::Occupied).unwrap(), 2);
    }

    #[test]
    fn test_admit_and_discharge() {
        let db = setup_db();
        let id = db
            .insert_bed(&Bed::new("B-999".into(), Some("General".into())))
            .unwrap();

        db.admit_patient(id, 3).unwrap();
        let bed = db.get_bed(id).unwrap().unwrap();
        assert_eq!(bed.status, BedStatus::Occupied);
        assert_eq!(bed.patient_id, Some(3));
        assert_eq!(bed.admission_date, Some(today()));

        db.discharge_patient(id).unwrap();
        let bed = db.get_bed(id).unwrap().unwrap();
        assert_eq!(bed.status, BedStatus::Available);
        assert!(bed.patient_id.is_none());
        assert!(bed.admission_date.is_none());
    }

    #[test]
    fn test_admit_unknown_patient() {
        let db = setup_db();
        assert!(matches!(
            db.admit_patient(2, 999),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_admit_missing_bed() {
        let db = setup_db();
        assert!(matches!(
            db.admit_patient(999, 1),
            Err(DbError::NotFound(_))
        ));
    }

    #[test]
    fn test_ward_board_shows_occupants() {
        let db = setup_db();
        let board = db.list_bed_views().unwrap();
        assert_eq!(board[0].bed_number, "B-101");
        assert_eq!(board[0].patient_name, Some("Ali Hassan".into()));
        assert!(board[1].patient_name.is_none());
    }
}
