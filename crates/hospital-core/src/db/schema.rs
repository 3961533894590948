//! SQLite schema definition.

/// Complete database schema for the hospital store.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Departments and people
-- ============================================================================

CREATE TABLE IF NOT EXISTS departments (
    dept_id INTEGER PRIMARY KEY AUTOINCREMENT,
    dept_name TEXT NOT NULL,
    location TEXT
);

CREATE TABLE IF NOT EXISTS doctors (
    doctor_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    specialization TEXT NOT NULL,
    dept_id INTEGER REFERENCES departments(dept_id),
    phone TEXT,
    email TEXT,
    experience INTEGER,
    consultation_fee REAL
);

CREATE TABLE IF NOT EXISTS patients (
    patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER,
    gender TEXT,
    phone TEXT,
    email TEXT,
    address TEXT,
    blood_group TEXT,
    registration_date TEXT
);

CREATE TABLE IF NOT EXISTS staff (
    staff_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    role TEXT,
    dept_id INTEGER REFERENCES departments(dept_id),
    phone TEXT,
    email TEXT,
    salary REAL,
    join_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);
CREATE INDEX IF NOT EXISTS idx_doctors_specialization ON doctors(specialization);

-- ============================================================================
-- Clinical records
-- ============================================================================

CREATE TABLE IF NOT EXISTS appointments (
    appointment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(patient_id),
    doctor_id INTEGER NOT NULL REFERENCES doctors(doctor_id),
    appointment_date TEXT,
    appointment_time TEXT,
    status TEXT NOT NULL DEFAULT 'Scheduled',
    reason TEXT
);

CREATE TABLE IF NOT EXISTS medical_records (
    record_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(patient_id),
    doctor_id INTEGER NOT NULL REFERENCES doctors(doctor_id),
    diagnosis TEXT NOT NULL,
    prescription TEXT,
    notes TEXT,
    record_date TEXT
);

CREATE TABLE IF NOT EXISTS lab_tests (
    test_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(patient_id),
    test_name TEXT,
    test_date TEXT,
    result TEXT,
    status TEXT NOT NULL DEFAULT 'Scheduled',
    cost REAL
);

CREATE TABLE IF NOT EXISTS pharmacy (
    prescription_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(patient_id),
    doctor_id INTEGER NOT NULL REFERENCES doctors(doctor_id),
    medicine_name TEXT NOT NULL,
    dosage TEXT,
    quantity INTEGER,
    price REAL,
    issue_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id);
CREATE INDEX IF NOT EXISTS idx_appointments_doctor ON appointments(doctor_id);
CREATE INDEX IF NOT EXISTS idx_appointments_status ON appointments(status);
CREATE INDEX IF NOT EXISTS idx_lab_tests_status ON lab_tests(status);

-- ============================================================================
-- Billing
-- ============================================================================

CREATE TABLE IF NOT EXISTS billing (
    bill_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(patient_id),
    appointment_id INTEGER REFERENCES appointments(appointment_id),
    amount REAL,
    payment_status TEXT NOT NULL DEFAULT 'Pending',
    payment_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_billing_status ON billing(payment_status);

-- ============================================================================
-- Facility resources
-- ============================================================================

CREATE TABLE IF NOT EXISTS inventory (
    item_id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_name TEXT NOT NULL,
    category TEXT,
    quantity INTEGER,
    unit_price REAL,
    supplier TEXT,
    last_updated TEXT
);

CREATE TABLE IF NOT EXISTS beds (
    bed_id INTEGER PRIMARY KEY AUTOINCREMENT,
    bed_number TEXT NOT NULL,
    ward_type TEXT,
    status TEXT NOT NULL DEFAULT 'Available',
    patient_id INTEGER REFERENCES patients(patient_id),
    admission_date TEXT
);

CREATE TABLE IF NOT EXISTS ambulance (
    ambulance_id INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_number TEXT NOT NULL,
    driver_name TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Available',
    patient_id INTEGER REFERENCES patients(patient_id),
    pickup_location TEXT,
    destination TEXT,
    request_time TEXT
);

CREATE TABLE IF NOT EXISTS blood_bank (
    blood_id INTEGER PRIMARY KEY AUTOINCREMENT,
    blood_group TEXT,
    units INTEGER,
    donor_name TEXT NOT NULL,
    donation_date TEXT,
    expiry_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_beds_status ON beds(status);
CREATE INDEX IF NOT EXISTS idx_ambulance_status ON ambulance(status);
CREATE INDEX IF NOT EXISTS idx_blood_bank_group ON blood_bank(blood_group);
"#;
