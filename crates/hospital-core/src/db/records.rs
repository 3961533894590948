//! Medical record table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::MedicalRecord;

/// A medical record joined with patient and doctor names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecordView {
    pub record_id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub diagnosis: String,
    pub prescription: Option<String>,
    pub notes: Option<String>,
    pub record_date: String,
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<MedicalRecord> {
    Ok(MedicalRecord {
        record_id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        diagnosis: row.get(3)?,
        prescription: row.get(4)?,
        notes: row.get(5)?,
        record_date: row.get(6)?,
    })
}

impl Database {
    /// File a medical record. Returns the assigned identity.
    pub fn insert_medical_record(&self, record: &MedicalRecord) -> DbResult<i64> {
        if record.diagnosis.trim().is_empty() {
            return Err(DbError::Constraint("diagnosis is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO medical_records (patient_id, doctor_id, diagnosis, prescription, notes, record_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.patient_id,
                    record.doctor_id,
                    record.diagnosis,
                    record.prescription,
                    record.notes,
                    record.record_date,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a record by identity.
    pub fn get_medical_record(&self, record_id: i64) -> DbResult<Option<MedicalRecord>> {
        self.conn
            .query_row(
                "SELECT record_id, patient_id, doctor_id, diagnosis, prescription, notes, record_date
                 FROM medical_records WHERE record_id = ?",
                [record_id],
                row_to_record,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List records joined with names, newest first.
    pub fn list_medical_record_views(&self) -> DbResult<Vec<MedicalRecordView>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.record_id, p.name, d.name, m.diagnosis, m.prescription, m.notes, m.record_date
             FROM medical_records m
             JOIN patients p ON m.patient_id = p.patient_id
             JOIN doctors d ON m.doctor_id = d.doctor_id
             ORDER BY m.record_date DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(MedicalRecordView {
                record_id: row.get(0)?,
                patient_name: row.get(1)?,
                doctor_name: row.get(2)?,
                diagnosis: row.get(3)?,
                prescription: row.get(4)?,
                notes: row.get(5)?,
                record_date: row.get(6)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Records for one patient, newest first.
    pub fn patient_history(&self, patient_id: i64) -> DbResult<Vec<MedicalRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT record_id, patient_id, doctor_id, diagnosis, prescription, notes, record_date
             FROM medical_records WHERE patient_id = ? ORDER BY record_date DESC",
        )?;
        let rows = stmt.query_map([patient_id], row_to_record)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
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
    fn test_file_and_read_back() {
        let db = setup_db();
        let mut record = MedicalRecord::new(3, 3, "Meniscus tear".into());
        record.notes = Some("MRI recommended".into());

        let id = db.insert_medical_record(&record).unwrap();
        let retrieved = db.get_medical_record(id).unwrap().unwrap();
        assert_eq!(retrieved.diagnosis, "Meniscus tear");
        assert_eq!(retrieved.notes, Some("MRI recommended".into()));
    }

    #[test]
    fn test_diagnosis_required() {
        let db = setup_db();
        let record = MedicalRecord::new(1, 1, "  ".into());
        assert!(matches!(
            db.insert_medical_record(&record),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_listing_is_newest_first() {
        let db = setup_db();
        let views = db.list_medical_record_views().unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].diagnosis, "Migraine");
        assert_eq!(views[0].patient_name, "Ayesha Khan");
    }

    #[test]
    fn test_patient_history_is_scoped() {
        let db = setup_db();
        let history = db.patient_history(1).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].diagnosis, "Angina Pectoris");
        assert!(db.patient_history(5).unwrap().is_empty());
    }
}
