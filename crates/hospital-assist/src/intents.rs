//! Keyword-routed intents over the hospital store.
//!
//! Routing walks a fixed, ordered intent table and runs the first intent
//! whose predicate matches the lowercased input. Order matters: "how many
//! patients are in cardiology" must hit the patient-count intent before the
//! cardiology intent ever sees it.

use hospital_core::{Database, DbError, DbResult};

use crate::format::{money, table};

/// Shown for input no intent matches.
pub const HELP_TEXT: &str = "I can answer: patient count, top doctor, cardiology patients, \
     average fee, emergency appointments, revenue, staff count, pending bills, inventory status";

/// Inventory items at or above this quantity are considered stocked.
const LOW_STOCK_THRESHOLD: i64 = 100;

struct Intent {
    matches: fn(&str) -> bool,
    run: fn(&Database) -> DbResult<String>,
}

const INTENTS: &[Intent] = &[
    Intent {
        matches: |q| (q.contains("patient") && q.contains("count")) || q.contains("how many patient"),
        run: patient_total,
    },
    Intent {
        matches: |q| q.contains("doctor") && (q.contains("most") || q.contains("top")),
        run: top_doctor,
    },
    Intent {
        matches: |q| q.contains("cardiology"),
        run: cardiology_patients,
    },
    Intent {
        matches: |q| q.contains("fee") && q.contains("average"),
        run: average_fee,
    },
    Intent {
        matches: |q| q.contains("emergency"),
        run: emergency_appointments,
    },
    Intent {
        matches: |q| q.contains("revenue") || q.contains("income"),
        run: total_revenue,
    },
    Intent {
        matches: |q| q.contains("staff") && q.contains("count"),
        run: staff_total,
    },
    Intent {
        matches: |q| q.contains("pending") && q.contains("bill"),
        run: pending_bills,
    },
    Intent {
        matches: |q| q.contains("inventory") || q.contains("stock"),
        run: low_stock,
    },
];

fn patient_total(db: &Database) -> DbResult<String> {
    Ok(format!("Total Patients: {}", db.patient_count()?))
}

fn top_doctor(db: &Database) -> DbResult<String> {
    let (name, count) = db
        .top_doctor_by_appointments()?
        .ok_or_else(|| DbError::NotFound("doctors".into()))?;
    Ok(format!("Top Doctor: {name} with {count} appointments"))
}

fn cardiology_patients(db: &Database) -> DbResult<String> {
    let patients = db.patients_by_specialization("Cardio")?;
    if patients.is_empty() {
        return Ok("No cardiology patients found".into());
    }
    let rows: Vec<Vec<String>> = patients
        .into_iter()
        .map(|p| {
            vec![
                p.name,
                p.age.to_string(),
                p.phone.unwrap_or_default(),
            ]
        })
        .collect();
    Ok(table(&["Name", "Age", "Phone"], &rows))
}

fn average_fee(db: &Database) -> DbResult<String> {
    let avg = db.average_consultation_fee()?.unwrap_or(0.0);
    Ok(format!("Average Consultation Fee: Rs. {avg:.0}"))
}

fn emergency_appointments(db: &Database) -> DbResult<String> {
    let visits = db.appointments_by_specialization("Emergency")?;
    if visits.is_empty() {
        return Ok("No emergency appointments".into());
    }
    let rows: Vec<Vec<String>> = visits
        .into_iter()
        .map(|v| {
            vec![
                v.patient_name,
                v.appointment_date,
                v.reason.unwrap_or_default(),
            ]
        })
        .collect();
    Ok(table(&["Patient", "Date", "Reason"], &rows))
}

fn total_revenue(db: &Database) -> DbResult<String> {
    Ok(format!("Total Revenue: {}", money(db.paid_revenue()?)))
}

fn staff_total(db: &Database) -> DbResult<String> {
    Ok(format!("Total Staff: {}", db.staff_count()?))
}

fn pending_bills(db: &Database) -> DbResult<String> {
    let (count, amount) = db.pending_bill_summary()?;
    Ok(format!("Pending Bills: {count} ({})", money(amount)))
}

fn low_stock(db: &Database) -> DbResult<String> {
    Ok(format!(
        "Low Stock Items: {}",
        db.low_stock_count(LOW_STOCK_THRESHOLD)?
    ))
}

/// Answers free-form questions against one store.
pub struct Assistant<'a> {
    db: &'a Database,
}

impl<'a> Assistant<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Route `query` to the first matching intent and format its answer.
    /// Store failures come back as `Error: {message}`; input no intent
    /// matches gets the help text.
    pub fn answer(&self, query: &str) -> String {
        let query = query.to_lowercase();
        for intent in INTENTS {
            if (intent.matches)(&query) {
                return match (intent.run)(self.db) {
                    Ok(text) => text,
                    Err(e) => format!("Error: {e}"),
                };
            }
        }
        HELP_TEXT.to_string()
    }
}
