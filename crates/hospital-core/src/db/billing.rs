//! Billing table operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::{today, Bill, PaymentStatus};

/// A bill joined with the patient name and appointment date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillView {
    pub bill_id: i64,
    pub patient: String,
    pub appointment_date: Option<String>,
    pub amount: f64,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<String>,
}

/// Amount totals over the billing table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BillingTotals {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
}

fn row_to_bill(row: &Row<'_>) -> rusqlite::Result<Bill> {
    Ok(Bill {
        bill_id: row.get(0)?,
        patient_id: row.get(1)?,
        appointment_id: row.get(2)?,
        amount: row.get(3)?,
        payment_status: row.get(4)?,
        payment_date: row.get(5)?,
    })
}

fn row_to_view(row: &Row<'_>) -> rusqlite::Result<BillView> {
    Ok(BillView {
        bill_id: row.get(0)?,
        patient: row.get(1)?,
        appointment_date: row.get(2)?,
        amount: row.get(3)?,
        payment_status: row.get(4)?,
        payment_date: row.get(5)?,
    })
}

const VIEW_SELECT: &str = "SELECT b.bill_id, p.name, a.appointment_date,
        b.amount, b.payment_status, b.payment_date
 FROM billing b
 JOIN patients p ON b.patient_id = p.patient_id
 LEFT JOIN appointments a ON b.appointment_id = a.appointment_id";

impl Database {
    /// Raise a bill. Returns the assigned identity.
    pub fn insert_bill(&self, bill: &Bill) -> DbResult<i64> {
        self.conn
            .execute(
                "INSERT INTO billing (patient_id, appointment_id, amount, payment_status, payment_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    bill.patient_id,
                    bill.appointment_id,
                    bill.amount,
                    bill.payment_status,
                    bill.payment_date,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a bill by identity.
    pub fn get_bill(&self, bill_id: i64) -> DbResult<Option<Bill>> {
        self.conn
            .query_row(
                "SELECT bill_id, patient_id, appointment_id, amount, payment_status, payment_date
                 FROM billing WHERE bill_id = ?",
                [bill_id],
                row_to_bill,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List bills joined with names, optionally filtered by payment status.
    pub fn list_bill_views(&self, status: Option<PaymentStatus>) -> DbResult<Vec<BillView>> {
        match status {
            Some(status) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{VIEW_SELECT} WHERE b.payment_status = ? ORDER BY b.bill_id"))?;
                let rows = stmt.query_map([status], row_to_view)?;
                rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
            }
            None => {
                let mut stmt = self.conn.prepare(&format!("{VIEW_SELECT} ORDER BY b.bill_id"))?;
                let rows = stmt.query_map([], row_to_view)?;
                rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
            }
        }
    }

    /// Mark a bill paid, stamping today's date.
    pub fn mark_bill_paid(&self, bill_id: i64) -> DbResult<()> {
        let updated = self.conn.execute(
            "UPDATE billing SET payment_status = 'Paid', payment_date = ?1 WHERE bill_id = ?2",
            params![today(), bill_id],
        )?;
        if updated == 0 {
            return Err(DbError::NotFound(format!("bill {bill_id}")));
        }
        Ok(())
    }

    /// Sum of paid bill amounts; 0 when nothing has been paid.
    pub fn paid_revenue(&self) -> DbResult<f64> {
        Ok(self.conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM billing WHERE payment_status = 'Paid'",
            [],
            |row| row.get(0),
        )?)
    }

    /// Count and amount of pending bills; the amount is 0 when none exist.
    pub fn pending_bill_summary(&self) -> DbResult<(i64, f64)> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(amount), 0) FROM billing WHERE payment_status = 'Pending'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?)
    }

    /// Total / paid / pending amounts over the whole table.
    pub fn billing_totals(&self) -> DbResult<BillingTotals> {
        Ok(self.conn.query_row(
            "SELECT COALESCE(SUM(amount), 0),
                    COALESCE(SUM(CASE WHEN payment_status = 'Paid' THEN amount END), 0),
                    COALESCE(SUM(CASE WHEN payment_status = 'Pending' THEN amount END), 0)
             FROM billing",
            [],
            |row| {
                Ok(BillingTotals {
                    total: row.get(0)?,
                    paid: row.get(1)?,
                    pending: row.get(2)?,
                })
            },
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
    fn test_mark_paid_stamps_today() {
        let db = setup_db();

        db.mark_bill_paid(3).unwrap();

        let bill = db.get_bill(3).unwrap().unwrap();
        assert_eq!(bill.payment_status, PaymentStatus::Paid);
        assert_eq!(bill.payment_date, Some(today()));
    }

    #[test]
    fn test_mark_paid_missing_bill() {
        let db = setup_db();
        let before = db.list_bill_views(None).unwrap();

        let result = db.mark_bill_paid(999);
        assert!(matches!(result, Err(DbError::NotFound(_))));

        // Store unchanged
        assert_eq!(db.list_bill_views(None).unwrap(), before);
    }

    #[test]
    fn test_paid_revenue_over_seed_data() {
        let db = setup_db();
        assert!((db.paid_revenue().unwrap() - 4500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paid_revenue_empty_is_zero() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.paid_revenue().unwrap(), 0.0);
    }

    #[test]
    fn test_pending_summary() {
        let db = setup_db();
        let (count, amount) = db.pending_bill_summary().unwrap();
        assert_eq!(count, 1);
        assert!((amount - 1800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_billing_totals() {
        let db = setup_db();
        let totals = db.billing_totals().unwrap();
        assert!((totals.total - 6300.0).abs() < f64::EPSILON);
        assert!((totals.paid - 4500.0).abs() < f64::EPSILON);
        assert!((totals.pending - 1800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_filter() {
        let db = setup_db();
        let pending = db.list_bill_views(Some(PaymentStatus::Pending)).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].patient, "Bilal Ahmed");
    }
}
