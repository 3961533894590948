//! Pharmacy table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::Prescription;

/// A pharmacy issuance joined with patient and doctor names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionView {
    pub prescription_id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub medicine_name: String,
    pub dosage: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub issue_date: String,
}

fn row_to_prescription(row: &Row<'_>) -> rusqlite::Result<Prescription> {
    Ok(Prescription {
        prescription_id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        medicine_name: row.get(3)?,
        dosage: row.get(4)?,
        quantity: row.get(5)?,
        price: row.get(6)?,
        issue_date: row.get(7)?,
    })
}

impl Database {
    /// Issue a medicine against a prescription. Returns the assigned identity.
    pub fn issue_prescription(&self, prescription: &Prescription) -> DbResult<i64> {
        if prescription.medicine_name.trim().is_empty() {
            return Err(DbError::Constraint("medicine name is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO pharmacy (patient_id, doctor_id, medicine_name, dosage, quantity, price, issue_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    prescription.patient_id,
                    prescription.doctor_id,
                    prescription.medicine_name,
                    prescription.dosage,
                    prescription.quantity,
                    prescription.price,
                    prescription.issue_date,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an issuance by identity.
    pub fn get_prescription(&self, prescription_id: i64) -> DbResult<Option<Prescription>> {
        self.conn
            .query_row(
                "SELECT prescription_id, patient_id, doctor_id, medicine_name, dosage, quantity, price, issue_date
                 FROM pharmacy WHERE prescription_id = ?",
                [prescription_id],
                row_to_prescription,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List issuances joined with names, newest issue date first.
    pub fn list_prescription_views(&self) -> DbResult<Vec<PrescriptionView>> {
        let mut stmt = self.conn.prepare(
            "SELECT ph.prescription_id, p.name, d.name, ph.medicine_name,
                    ph.dosage, ph.quantity, ph.price, ph.issue_date
             FROM pharmacy ph
             JOIN patients p ON ph.patient_id = p.patient_id
             JOIN doctors d ON ph.doctor_id = d.doctor_id
             ORDER BY ph.issue_date DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(PrescriptionView {
                prescription_id: row.get(0)?,
                patient_name: row.get(1)?,
                doctor_name: row.get(2)?,
                medicine_name: row.get(3)?,
                dosage: row.get(4)?,
                quantity: row.get(5)?,
                price: row.get(6)?,
                issue_date: row.get(7)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Sum of issuance prices; 0 when nothing has been issued.
    pub fn pharmacy_revenue(&self) -> DbResult<f64> {
        Ok(self
            .conn
            .query_row("SELECT COALESCE(SUM(price), 0) FROM pharmacy", [], |row| {
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
    fn test_issue_and_read_back() {
        let db = setup_db();
        let mut rx = Prescription::new(4, 4, "Amoxicillin".into(), 14, 350.0);
        rx.dosage = Some("250mg".into());

        let id = db.issue_prescription(&rx).unwrap();
        let retrieved = db.get_prescription(id).unwrap().unwrap();
        assert_eq!(retrieved.medicine_name, "Amoxicillin");
        assert_eq!(retrieved.dosage, Some("250mg".into()));
    }

    #[test]
    fn test_issue_requires_medicine_name() {
        let db = setup_db();
        let rx = Prescription::new(1, 1, " ".into(), 1, 10.0);
        assert!(matches!(
            db.issue_prescription(&rx),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_revenue_over_seed_data() {
        let db = setup_db();
        assert!((db.pharmacy_revenue().unwrap() - 850.0).abs() < f64::EPSILON);
    }
}
