//! Department table operations.

use rusqlite::{params, Row};

use super::{write_err, Database, DbError, DbResult};
use crate::models::Department;

fn row_to_department(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        dept_id: row.get(0)?,
        dept_name: row.get(1)?,
        location: row.get(2)?,
    })
}

impl Database {
    /// Add a new department. Returns the assigned identity.
    pub fn insert_department(&self, dept: &Department) -> DbResult<i64> {
        if dept.dept_name.trim().is_empty() {
            return Err(DbError::Constraint("department name is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO departments (dept_name, location) VALUES (?1, ?2)",
                params![dept.dept_name, dept.location],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all departments.
    pub fn list_departments(&self) -> DbResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT dept_id, dept_name, location FROM departments ORDER BY dept_id")?;
        let rows = stmt.query_map([], row_to_department)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
