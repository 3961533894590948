//! Lab test table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::{LabTest, LabTestStatus};

/// A lab test joined with the patient name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabTestView {
    pub test_id: i64,
    pub patient_name: String,
    pub test_name: String,
    pub test_date: String,
    pub result: Option<String>,
    pub status: LabTestStatus,
    pub cost: f64,
}

fn row_to_test(row: &Row<'_>) -> rusqlite::Result<LabTest> {
    Ok(LabTest {
        test_id: row.get(0)?,
        patient_id: row.get(1)?,
        test_name: row.get(2)?,
        test_date: row.get(3)?,
        result: row.get(4)?,
        status: row.get(5)?,
        cost: row.get(6)?,
    })
}

fn row_to_view(row: &Row<'_>) -> rusqlite::Result<LabTestView> {
    Ok(LabTestView {
        test_id: row.get(0)?,
        patient_name: row.get(1)?,
        test_name: row.get(2)?,
        test_date: row.get(3)?,
        result: row.get(4)?,
        status: row.get(5)?,
        cost: row.get(6)?,
    })
}

const VIEW_SELECT: &str = "SELECT l.test_id, p.name, l.test_name, l.test_date,
        l.result, l.status, l.cost
 FROM lab_tests l
 JOIN patients p ON l.patient_id = p.patient_id";

impl Database {
    /// Order a lab test. Returns the assigned identity.
    pub fn order_lab_test(&self, test: &LabTest) -> DbResult<i64> {
        self.conn
            .execute(
                "INSERT INTO lab_tests (patient_id, test_name, test_date, result, status, cost)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    test.patient_id,
                    test.test_name,
                    test.test_date,
                    test.result,
                    test.status,
                    test.cost,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a lab test by identity.
    pub fn get_lab_test(&self, test_id: i64) -> DbResult<Option<LabTest>> {
        self.conn
            .query_row(
                "SELECT test_id, patient_id, test_name, test_date, result, status, cost
                 FROM lab_tests WHERE test_id = ?",
                [test_id],
                row_to_test,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List tests joined with patient names, newest order date first.
    pub fn list_lab_test_views(&self) -> DbResult<Vec<LabTestView>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VIEW_SELECT} ORDER BY l.test_date DESC"))?;
        let rows = stmt.query_map([], row_to_view)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Tests not yet completed.
    pub fn pending_lab_tests(&self) -> DbResult<Vec<LabTestView>> {
        let mut stmt = self.conn.prepare(&format!(
            "{VIEW_SELECT} WHERE l.status != 'Completed' ORDER BY l.test_id"
        ))?;
        let rows = stmt.query_map([], row_to_view)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Record a result and move the test to the given state.
    pub fn update_test_result(
        &self,
        test_id: i64,
        result: &str,
        status: LabTestStatus,
    ) -> DbResult<()> {
        let updated = self.conn.execute(
            "UPDATE lab_tests SET result = ?1, status = ?2 WHERE test_id = ?3",
            params![result, status, test_id],
        )?;
        if updated == 0 {
            return Err(DbError::NotFound(format!("lab test {test_id}")));
        }
        Ok(())
    }

    /// Count of tests not yet completed.
    pub fn pending_test_count(&self) -> DbResult<i64> {
        self.count("SELECT COUNT(*) FROM lab_tests WHERE status != 'Completed'")
    }

    /// Sum of completed test costs; 0 when none are completed.
    pub fn completed_test_revenue(&self) -> DbResult<f64> {
        Ok(self.conn.query_row(
            "SELECT COALESCE(SUM(cost), 0) FROM lab_tests WHERE status = 'Completed'",
            [],
            |row| row.get(0),
        )?)
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
    fn test_order_and_complete() {
        let db = setup_db();
        let id = db
            .order_lab_test(&LabTest::new(4, "ECG".into(), 1200.0))
            .unwrap();

        db.update_test_result(id, "Sinus rhythm", LabTestStatus::Completed)
            .unwrap();

        let test = db.get_lab_test(id).unwrap().unwrap();
        assert_eq!(test.status, LabTestStatus::Completed);
        assert_eq!(test.result, Some("Sinus rhythm".into()));
    }

    #[test]
    fn test_pending_excludes_completed() {
        let db = setup_db();
        let pending = db.pending_lab_tests().unwrap();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| t.status != LabTestStatus::Completed));
        assert_eq!(db.pending_test_count().unwrap(), 2);
    }

    #[test]
    fn test_completed_revenue_over_seed_data() {
        let db = setup_db();
        assert!((db.completed_test_revenue().unwrap() - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_missing_test() {
        let db = setup_db();
        assert!(matches!(
            db.update_test_result(999, "x", LabTestStatus::Completed),
            Err(DbError::NotFound(_))
        ));
    }
}
