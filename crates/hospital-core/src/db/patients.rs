//! Patient table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{write_err, Database, DbError, DbResult};
use crate::models::Patient;

fn row_to_patient(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        patient_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        phone: row.get(4)?,
        email: row.get(5)?,
        address: row.get(6)?,
        blood_group: row.get(7)?,
        registration_date: row.get(8)?,
    })
}

const PATIENT_COLUMNS: &str =
    "patient_id, name, age, gender, phone, email, address, blood_group, registration_date";

impl Database {
    /// Register a new patient. Returns the assigned identity.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<i64> {
        if patient.name.trim().is_empty() {
            return Err(DbError::Constraint("patient name is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO patients (name, age, gender, phone, email, address, blood_group, registration_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    patient.name,
                    patient.age,
                    patient.gender,
                    patient.phone,
                    patient.email,
                    patient.address,
                    patient.blood_group,
                    patient.registration_date,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a patient by identity.
    pub fn get_patient(&self, patient_id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE patient_id = ?"),
                [patient_id],
                row_to_patient,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients, oldest registration first.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY patient_id"))?;
        let rows = stmt.query_map([], row_to_patient)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Search patients by name substring. The pattern is bound as a
    /// parameter, never spliced into the query text.
    pub fn search_patients(&self, name: &str) -> DbResult<Vec<Patient>> {
        let pattern = format!("%{name}%");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE name LIKE ? ORDER BY name"
        ))?;
        let rows = stmt.query_map([pattern], row_to_patient)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count of all patients.
    pub fn patient_count(&self) -> DbResult<i64> {
        self.count("SELECT COUNT(*) FROM patients")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_read_back() {
        let db = setup_db();

        let mut patient = Patient::new("Test User".into(), 40, "Male".into(), "O+".into());
        patient.phone = Some("0311-0000000".into());

        let id = db.insert_patient(&patient).unwrap();
        assert!(id > 0);

        let retrieved = db.get_patient(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Test User");
        assert_eq!(retrieved.age, 40);
        assert_eq!(retrieved.blood_group, "O+");
        assert_eq!(retrieved.phone, Some("0311-0000000".into()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let db = setup_db();

        let patient = Patient::new("  ".into(), 40, "Male".into(), "O+".into());
        let result = db.insert_patient(&patient);
        assert!(matches!(result, Err(DbError::Constraint(_))));
        assert_eq!(db.patient_count().unwrap(), 0);
    }

    #[test]
    fn test_search_is_substring_match() {
        let db = setup_db();

        for name in ["Ali Hassan", "Bilal Ahmed", "Zainab Ali"] {
            let p = Patient::new(name.into(), 30, "Male".into(), "O+".into());
            db.insert_patient(&p).unwrap();
        }

        let results = db.search_patients("Ali").unwrap();
        assert_eq!(results.len(), 2);
        // A quote in the search string is data, not SQL
        let results = db.search_patients("' OR '1'='1").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_get_missing_patient_is_none() {
        let db = setup_db();
        assert!(db.get_patient(42).unwrap().is_none());
    }
}
