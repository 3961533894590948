//! Canonical demonstration data.
//!
//! Seeding is triggered by a single sentinel check: if the `departments`
//! table is empty, every table is populated. No per-table emptiness check is
//! made, so a store whose sentinel table was emptied while other tables kept
//! rows will be re-seeded on top of those rows.

use rusqlite::params;

use super::{Database, DbResult};

const DEPARTMENTS: &[(&str, &str)] = &[
    ("Cardiology", "Building A"),
    ("Neurology", "Building B"),
    ("Orthopedics", "Building C"),
    ("Pediatrics", "Building D"),
    ("Emergency", "Building E"),
];

// (name, specialization, dept_id, phone, email, experience, fee)
const DOCTORS: &[(&str, &str, i64, &str, &str, i64, f64)] = &[
    ("Dr. Ahmed Khan", "Cardiologist", 1, "0300-1234567", "ahmed@hospital.com", 15, 2000.0),
    ("Dr. Sara Ali", "Neurologist", 2, "0301-2345678", "sara@hospital.com", 10, 2500.0),
    ("Dr. Hassan Raza", "Orthopedic Surgeon", 3, "0302-3456789", "hassan@hospital.com", 12, 1800.0),
    ("Dr. Fatima Noor", "Pediatrician", 4, "0303-4567890", "fatima@hospital.com", 8, 1500.0),
    ("Dr. Usman Malik", "Emergency Physician", 5, "0304-5678901", "usman@hospital.com", 7, 1200.0),
];

// (name, age, gender, phone, email, address, blood_group, registration_date)
const PATIENTS: &[(&str, i64, &str, &str, &str, &str, &str, &str)] = &[
    ("Ali Hassan", 35, "Male", "0311-1111111", "ali@email.com", "Karachi", "O+", "2024-01-15"),
    ("Ayesha Khan", 28, "Female", "0312-2222222", "ayesha@email.com", "Lahore", "A+", "2024-01-20"),
    ("Bilal Ahmed", 42, "Male", "0313-3333333", "bilal@email.com", "Islamabad", "B+", "2024-02-10"),
    ("Zainab Ali", 55, "Female", "0314-4444444", "zainab@email.com", "Karachi", "AB+", "2024-02-15"),
    ("Hamza Malik", 30, "Male", "0315-5555555", "hamza@email.com", "Lahore", "O-", "2024-03-01"),
];

// (patient_id, doctor_id, date, time, status, reason)
const APPOINTMENTS: &[(i64, i64, &str, &str, &str, &str)] = &[
    (1, 1, "2024-03-15", "10:00 AM", "Completed", "Chest pain"),
    (2, 2, "2024-03-16", "11:00 AM", "Completed", "Headache"),
    (3, 3, "2024-03-17", "02:00 PM", "Scheduled", "Knee pain"),
    (4, 4, "2024-03-18", "09:00 AM", "Scheduled", "Child checkup"),
    (5, 5, "2024-03-19", "03:00 PM", "Cancelled", "Emergency"),
];

// (patient_id, doctor_id, diagnosis, prescription, notes, record_date)
const MEDICAL_RECORDS: &[(i64, i64, &str, &str, &str, &str)] = &[
    (1, 1, "Angina Pectoris", "Aspirin 75mg, Atorvastatin 20mg", "Patient advised rest", "2024-03-15"),
    (2, 2, "Migraine", "Sumatriptan 50mg", "Avoid stress triggers", "2024-03-16"),
];

// (patient_id, appointment_id, amount, payment_status, payment_date)
const BILLING: &[(i64, i64, f64, &str, Option<&str>)] = &[
    (1, 1, 2000.0, "Paid", Some("2024-03-15")),
    (2, 2, 2500.0, "Paid", Some("2024-03-16")),
    (3, 3, 1800.0, "Pending", None),
];

// (name, role, dept_id, phone, email, salary, join_date)
const STAFF: &[(&str, &str, i64, &str, &str, f64, &str)] = &[
    ("Nurse Sarah", "Nurse", 1, "0320-1111111", "sarah.nurse@hospital.com", 50000.0, "2023-01-10"),
    ("Receptionist Ali", "Receptionist", 5, "0321-2222222", "ali.reception@hospital.com", 35000.0, "2023-05-15"),
    ("Lab Tech Hassan", "Lab Technician", 2, "0322-3333333", "hassan.lab@hospital.com", 45000.0, "2023-03-20"),
];

// (item_name, category, quantity, unit_price, supplier, last_updated)
const INVENTORY: &[(&str, &str, i64, f64, &str, &str)] = &[
    ("Paracetamol", "Medicine", 500, 5.0, "PharmaCorp", "2024-03-01"),
    ("Surgical Gloves", "Equipment", 200, 50.0, "MedSupply", "2024-03-05"),
    ("Syringes", "Equipment", 1000, 10.0, "MedSupply", "2024-03-10"),
    ("Bandages", "Supplies", 300, 20.0, "HealthCare Ltd", "2024-03-12"),
];

// (bed_number, ward_type, status, patient_id, admission_date)
const BEDS: &[(&str, &str, &str, Option<i64>, Option<&str>)] = &[
    ("B-101", "General", "Occupied", Some(1), Some("2024-03-15")),
    ("B-102", "General", "Available", None, None),
    ("B-201", "ICU", "Occupied", Some(2), Some("2024-03-16")),
    ("B-202", "ICU", "Available", None, None),
    ("B-301", "Private", "Available", None, None),
];

// (patient_id, test_name, test_date, result, status, cost)
const LAB_TESTS: &[(i64, &str, &str, Option<&str>, &str, f64)] = &[
    (1, "Blood Test", "2024-03-15", Some("Normal"), "Completed", 1500.0),
    (2, "MRI Scan", "2024-03-16", Some("Pending"), "In Progress", 8000.0),
    (3, "X-Ray", "2024-03-17", None, "Scheduled", 2000.0),
];

// (patient_id, doctor_id, medicine_name, dosage, quantity, price, issue_date)
const PHARMACY: &[(i64, i64, &str, &str, i64, f64, &str)] = &[
    (1, 1, "Aspirin", "75mg", 30, 150.0, "2024-03-15"),
    (2, 2, "Sumatriptan", "50mg", 10, 500.0, "2024-03-16"),
    (3, 3, "Ibuprofen", "400mg", 20, 200.0, "2024-03-17"),
];

// (vehicle_number, driver_name, status, patient_id, pickup, destination, request_time)
const AMBULANCE: &[(&str, &str, &str, Option<i64>, Option<&str>, Option<&str>, Option<&str>)] = &[
    ("AMB-001", "Rashid Khan", "Available", None, None, None, None),
    ("AMB-002", "Imran Ali", "On Duty", Some(5), Some("Gulshan"), Some("Hospital"), Some("2024-03-19 15:30:00")),
    ("AMB-003", "Salman Ahmed", "Available", None, None, None, None),
];

// (blood_group, units, donor_name, donation_date, expiry_date)
const BLOOD_BANK: &[(&str, i64, &str, &str, &str)] = &[
    ("A+", 15, "Donor 1", "2024-03-01", "2024-06-01"),
    ("B+", 10, "Donor 2", "2024-03-05", "2024-06-05"),
    ("O+", 20, "Donor 3", "2024-03-10", "2024-06-10"),
    ("AB+", 5, "Donor 4", "2024-03-12", "2024-06-12"),
    ("O-", 8, "Donor 5", "2024-03-14", "2024-06-14"),
];

impl Database {
    /// Populate every table with the canonical demonstration rows on first
    /// run. The `departments` table is the only sentinel: if it holds any
    /// rows this is a no-op. Returns whether seeding ran.
    pub fn seed_if_empty(&self) -> DbResult<bool> {
        let existing = self.count("SELECT COUNT(*) FROM departments")?;
        if existing > 0 {
            return Ok(false);
        }

        tracing::info!("departments table empty, loading demonstration data");

        for (dept_name, location) in DEPARTMENTS {
            self.conn.execute(
                "INSERT INTO departments (dept_name, location) VALUES (?1, ?2)",
                params![dept_name, location],
            )?;
        }

        for (name, spec, dept_id, phone, email, experience, fee) in DOCTORS {
            self.conn.execute(
                "INSERT INTO doctors (name, specialization, dept_id, phone, email, experience, consultation_fee)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![name, spec, dept_id, phone, email, experience, fee],
            )?;
        }

        for (name, age, gender, phone, email, address, blood_group, registered) in PATIENTS {
            self.conn.execute(
                "INSERT INTO patients (name, age, gender, phone, email, address, blood_group, registration_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![name, age, gender, phone, email, address, blood_group, registered],
            )?;
        }

        for (patient_id, doctor_id, date, time, status, reason) in APPOINTMENTS {
            self.conn.execute(
                "INSERT INTO appointments (patient_id, doctor_id, appointment_date, appointment_time, status, reason)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![patient_id, doctor_id, date, time, status, reason],
            )?;
        }

        for (patient_id, doctor_id, diagnosis, prescription, notes, date) in MEDICAL_RECORDS {
            self.conn.execute(
                "INSERT INTO medical_records (patient_id, doctor_id, diagnosis, prescription, notes, record_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![patient_id, doctor_id, diagnosis, prescription, notes, date],
            )?;
        }

        for (patient_id, appointment_id, amount, status, paid_on) in BILLING {
            self.conn.execute(
                "INSERT INTO billing (patient_id, appointment_id, amount, payment_status, payment_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![patient_id, appointment_id, amount, status, paid_on],
            )?;
        }

        for (name, role, dept_id, phone, email, salary, joined) in STAFF {
            self.conn.execute(
                "INSERT INTO staff (name, role, dept_id, phone, email, salary, join_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![name, role, dept_id, phone, email, salary, joined],
            )?;
        }

        for (item_name, category, quantity, unit_price, supplier, updated) in INVENTORY {
            self.conn.execute(
                "INSERT INTO inventory (item_name, category, quantity, unit_price, supplier, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![item_name, category, quantity, unit_price, supplier, updated],
            )?;
        }

        for (bed_number, ward_type, status, patient_id, admitted) in BEDS {
            self.conn.execute(
                "INSERT INTO beds (bed_number, ward_type, status, patient_id, admission_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![bed_number, ward_type, status, patient_id, admitted],
            )?;
        }

        for (patient_id, test_name, date, result, status, cost) in LAB_TESTS {
            self.conn.execute(
                "INSERT INTO lab_tests (patient_id, test_name, test_date, result, status, cost)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![patient_id, test_name, date, result, status, cost],
            )?;
        }

        for (patient_id, doctor_id, medicine, dosage, quantity, price, issued) in PHARMACY {
            self.conn.execute(
                "INSERT INTO pharmacy (patient_id, doctor_id, medicine_name, dosage, quantity, price, issue_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![patient_id, doctor_id, medicine, dosage, quantity, price, issued],
            )?;
        }

        for (vehicle, driver, status, patient_id, pickup, destination, requested) in AMBULANCE {
            self.conn.execute(
                "INSERT INTO ambulance (vehicle_number, driver_name, status, patient_id, pickup_location, destination, request_time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![vehicle, driver, status, patient_id, pickup, destination, requested],
            )?;
        }

        for (blood_group, units, donor, donated, expires) in BLOOD_BANK {
            self.conn.execute(
                "INSERT INTO blood_bank (blood_group, units, donor_name, donation_date, expiry_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![blood_group, units, donor, donated, expires],
            )?;
        }

        Ok(true)
    }
}
