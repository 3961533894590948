//! Analytics report queries.

use serde::{Deserialize, Serialize};

use super::{Database, DbResult};

/// Appointment volume for one department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentLoad {
    pub dept_name: String,
    pub appointment_count: i64,
}

/// Completed-appointment revenue attributed to one doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorRevenue {
    pub doctor_name: String,
    pub revenue: f64,
}

/// Completed appointment volume and fee revenue for one department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentPerformance {
    pub dept_name: String,
    pub appointments: i64,
    pub total_revenue: f64,
}

/// A patient reached through a specialization match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferredPatient {
    pub name: String,
    pub age: i64,
    pub phone: Option<String>,
}

/// An appointment reached through a specialization match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialtyAppointment {
    pub patient_name: String,
    pub appointment_date: String,
    pub reason: Option<String>,
}

impl Database {
    /// Appointment counts per department. Departments without doctors or
    /// appointments report zero.
    pub fn appointments_by_department(&self) -> DbResult<Vec<DepartmentLoad>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.dept_name, COUNT(a.appointment_id)
             FROM departments d
             LEFT JOIN doctors doc ON d.dept_id = doc.dept_id
             LEFT JOIN appointments a ON doc.doctor_id = a.doctor_id
             GROUP BY d.dept_name
             ORDER BY d.dept_name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DepartmentLoad {
                dept_name: row.get(0)?,
                appointment_count: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Revenue per doctor as completed appointments times the consultation
    /// fee, highest first. Doctors with no completed appointments are absent.
    pub fn revenue_by_doctor(&self) -> DbResult<Vec<DoctorRevenue>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.name, COUNT(a.appointment_id) * d.consultation_fee
             FROM doctors d
             LEFT JOIN appointments a ON d.doctor_id = a.doctor_id
             WHERE a.status = 'Completed'
             GROUP BY d.name, d.consultation_fee
             ORDER BY COUNT(a.appointment_id) * d.consultation_fee DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DoctorRevenue {
                doctor_name: row.get(0)?,
                revenue: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Appointment counts per status.
    pub fn appointment_status_breakdown(&self) -> DbResult<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT status, COUNT(*) FROM appointments GROUP BY status ORDER BY status",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Completed appointment volume and fee revenue per department.
    /// Departments with no completed appointments are absent.
    pub fn department_performance(&self) -> DbResult<Vec<DepartmentPerformance>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.dept_name, COUNT(a.appointment_id), SUM(doc.consultation_fee)
             FROM departments d
             LEFT JOIN doctors doc ON d.dept_id = doc.dept_id
             LEFT JOIN appointments a ON doc.doctor_id = a.doctor_id
             WHERE a.status = 'Completed'
             GROUP BY d.dept_name
             ORDER BY d.dept_name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DepartmentPerformance {
                dept_name: row.get(0)?,
                appointments: row.get(1)?,
                total_revenue: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Patients with appointments under doctors whose specialization matches
    /// the given fragment.
    pub fn patients_by_specialization(&self, fragment: &str) -> DbResult<Vec<ReferredPatient>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.name, p.age, p.phone FROM patients p
             JOIN appointments a ON p.patient_id = a.patient_id
             JOIN doctors d ON a.doctor_id = d.doctor_id
             WHERE d.specialization LIKE '%' || ?1 || '%'
             ORDER BY p.patient_id",
        )?;
        let rows = stmt.query_map([fragment], |row| {
            Ok(ReferredPatient {
                name: row.get(0)?,
                age: row.get(1)?,
                phone: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Appointments under doctors whose specialization matches the given
    /// fragment.
    pub fn appointments_by_specialization(
        &self,
        fragment: &str,
    ) -> DbResult<Vec<SpecialtyAppointment>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.name, a.appointment_date, a.reason FROM appointments a
             JOIN patients p ON a.patient_id = p.patient_id
             JOIN doctors d ON a.doctor_id = d.doctor_id
             WHERE d.specialization LIKE '%' || ?1 || '%'
             ORDER BY a.appointment_id",
        )?;
        let rows = stmt.query_map([fragment], |row| {
            Ok(SpecialtyAppointment {
                patient_name: row.get(0)?,
                appointment_date: row.get(1)?,
                reason: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
