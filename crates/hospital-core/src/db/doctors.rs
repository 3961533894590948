//! Doctor table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::Doctor;

/// A doctor joined with their department name, as shown on the roster page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorView {
    pub doctor_id: i64,
    pub name: String,
    pub specialization: String,
    pub dept_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub experience: Option<i64>,
    pub consultation_fee: Option<f64>,
}

fn row_to_doctor(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        doctor_id: row.get(0)?,
        name: row.get(1)?,
        specialization: row.get(2)?,
        dept_id: row.get(3)?,
        phone: row.get(4)?,
        email: row.get(5)?,
        experience: row.get(6)?,
        consultation_fee: row.get(7)?,
    })
}

impl Database {
    /// Add a doctor to the roster. Returns the assigned identity.
    pub fn insert_doctor(&self, doctor: &Doctor) -> DbResult<i64> {
        if doctor.name.trim().is_empty() || doctor.specialization.trim().is_empty() {
            return Err(DbError::Constraint(
                "doctor name and specialization are required".into(),
            ));
        }
        self.conn
            .execute(
                "INSERT INTO doctors (name, specialization, dept_id, phone, email, experience, consultation_fee)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    doctor.name,
                    doctor.specialization,
                    doctor.dept_id,
                    doctor.phone,
                    doctor.email,
                    doctor.experience,
                    doctor.consultation_fee,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a doctor by identity.
    pub fn get_doctor(&self, doctor_id: i64) -> DbResult<Option<Doctor>> {
        self.conn
            .query_row(
                "SELECT doctor_id, name, specialization, dept_id, phone, email, experience, consultation_fee
                 FROM doctors WHERE doctor_id = ?",
                [doctor_id],
                row_to_doctor,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List doctors joined with their department name.
    pub fn list_doctor_views(&self) -> DbResult<Vec<DoctorView>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.doctor_id, d.name, d.specialization, dept.dept_name,
                    d.phone, d.email, d.experience, d.consultation_fee
             FROM doctors d
             LEFT JOIN departments dept ON d.dept_id = dept.dept_id
             ORDER BY d.doctor_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DoctorView {
                doctor_id: row.get(0)?,
                name: row.get(1)?,
                specialization: row.get(2)?,
                dept_name: row.get(3)?,
                phone: row.get(4)?,
                email: row.get(5)?,
                experience: row.get(6)?,
                consultation_fee: row.get(7)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count of all doctors.
    pub fn doctor_count(&self) -> DbResult<i64> {
        self.count("SELECT COUNT(*) FROM doctors")
    }

    /// Mean consultation fee across the roster; `None` when no doctors exist.
    pub fn average_consultation_fee(&self) -> DbResult<Option<f64>> {
        Ok(self
            .conn
            .query_row("SELECT AVG(consultation_fee) FROM doctors", [], |row| {
                row.get(0)
            })?)
    }

    /// The doctor with the most appointments, with the count. Ties are
    /// broken by lowest doctor identity. `None` when the roster is empty.
    pub fn top_doctor_by_appointments(&self) -> DbResult<Option<(String, i64)>> {
        self.conn
            .query_row(
                "SELECT d.name, COUNT(a.appointment_id) AS n
                 FROM doctors d
                 LEFT JOIN appointments a ON d.doctor_id = a.doctor_id
                 GROUP BY d.doctor_id, d.name
                 ORDER BY n DESC, d.doctor_id ASC
                 LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(Into::into)
    }
}
