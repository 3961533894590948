//! Hospital Desk Core Library
//!
//! Embedded SQLite store for a hospital administration dashboard.
//!
//! # Architecture
//!
//! ```text
//!                         Dashboard / Query Router
//!                                   │
//!                            typed operations
//!                                   │
//!                    ┌──────────────▼──────────────┐
//!                    │          Database           │
//!                    │  patients · doctors · staff │
//!                    │  appointments · billing     │
//!                    │  beds · lab tests · pharmacy│
//!                    │  inventory · ambulance      │
//!                    │  blood bank · records       │
//!                    └──────────────┬──────────────┘
//!                                   │
//!                             SQLite file
//! ```
//!
//! Opening a store creates the schema when missing, recreates the file when
//! it is unreadable, and loads canonical demonstration data into an empty
//! store. All reads and writes go through parameterized statements.
//!
//! # Modules
//!
//! - [`db`]: SQLite store, one operations module per table, plus reports
//!   and dashboard counters
//! - [`models`]: Domain types (Patient, Doctor, Appointment, Bill, etc.)

pub mod db;
pub mod models;

// Re-export commonly used types
pub use db::{Database, DashboardStats, DbError, DbResult};
pub use models::{
    Ambulance, AmbulanceStatus, Appointment, AppointmentStatus, Bed, BedStatus, Bill,
    BloodDonation, Department, Doctor, InventoryItem, LabTest, LabTestStatus, MedicalRecord,
    Patient, PaymentStatus, Prescription, StaffMember,
};
