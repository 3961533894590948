//! Staff table operations.

use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::StaffMember;

/// A staff member joined with their department name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffView {
    pub staff_id: i64,
    pub name: String,
    pub role: String,
    pub dept_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub salary: Option<f64>,
    pub join_date: String,
}

fn row_to_view(row: &Row<'_>) -> rusqlite::Result<StaffView> {
    Ok(StaffView {
        staff_id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        dept_name: row.get(3)?,
        phone: row.get(4)?,
        email: row.get(5)?,
        salary: row.get(6)?,
        join_date: row.get(7)?,
    })
}

impl Database {
    /// Add a staff member. Returns the assigned identity.
    pub fn insert_staff(&self, staff: &StaffMember) -> DbResult<i64> {
        if staff.name.trim().is_empty() {
            return Err(DbError::Constraint("staff name is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO staff (name, role, dept_id, phone, email, salary, join_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    staff.name,
                    staff.role,
                    staff.dept_id,
                    staff.phone,
                    staff.email,
                    staff.salary,
                    staff.join_date,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List staff joined with department names.
    pub fn list_staff_views(&self) -> DbResult<Vec<StaffView>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.staff_id, s.name, s.role, d.dept_name, s.phone, s.email, s.salary, s.join_date
             FROM staff s
             LEFT JOIN departments d ON s.dept_id = d.dept_id
             ORDER BY s.staff_id",
        )?;
        let rows = stmt.query_map([], row_to_view)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count of all staff.
    pub fn staff_count(&self) -> DbResult<i64> {
        self.count("SELECT COUNT(*) FROM staff")
    }

    /// Sum of monthly salaries; 0 for an empty roster.
    pub fn total_monthly_salary(&self) -> DbResult<f64> {
        Ok(self
            .conn
            .query_row("SELECT COALESCE(SUM(salary), 0) FROM staff", [], |row| {
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
    fn test_staff_count_and_salary() {
        let db = setup_db();
        assert_eq!(db.staff_count().unwrap(), 3);
        assert!((db.total_monthly_salary().unwrap() - 130000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_insert_requires_name() {
        let db = setup_db();
        let staff = StaffMember::new("".into(), "Nurse".into());
        assert!(matches!(
            db.insert_staff(&staff),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_views_carry_department() {
        let db = setup_db();
        let views = db.list_staff_views().unwrap();
        assert_eq!(views[0].name, "Nurse Sarah");
        assert_eq!(views[0].dept_name, Some("Cardiology".into()));
    }
}
