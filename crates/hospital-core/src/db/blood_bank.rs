//! Blood bank table operations.

use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use super::{write_err, Database, DbError, DbResult};
use crate::models::BloodDonation;

/// Units in stock for one blood group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BloodStock {
    pub blood_group: String,
    pub total_units: i64,
}

fn row_to_donation(row: &Row<'_>) -> rusqlite::Result<BloodDonation> {
    Ok(BloodDonation {
        blood_id: row.get(0)?,
        blood_group: row.get(1)?,
        units: row.get(2)?,
        donor_name: row.get(3)?,
        donation_date: row.get(4)?,
        expiry_date: row.get(5)?,
    })
}

impl Database {
    /// Record a donation. Returns the assigned identity.
    pub fn insert_donation(&self, donation: &BloodDonation) -> DbResult<i64> {
        if donation.donor_name.trim().is_empty() {
            return Err(DbError::Constraint("donor name is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO blood_bank (blood_group, units, donor_name, donation_date, expiry_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    donation.blood_group,
                    donation.units,
                    donation.donor_name,
                    donation.donation_date,
                    donation.expiry_date,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all donations ordered by blood group.
    pub fn list_donations(&self) -> DbResult<Vec<BloodDonation>> {
        let mut stmt = self.conn.prepare(
            "SELECT blood_id, blood_group, units, donor_name, donation_date, expiry_date
             FROM blood_bank ORDER BY blood_group",
        )?;
        let rows = stmt.query_map([], row_to_donation)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Total units in stock per blood group.
    pub fn blood_stock_by_group(&self) -> DbResult<Vec<BloodStock>> {
        let mut stmt = self.conn.prepare(
            "SELECT blood_group, SUM(units) FROM blood_bank GROUP BY blood_group ORDER BY blood_group",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BloodStock {
                blood_group: row.get(0)?,
                total_units: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Blood groups whose total stock is below `threshold` units.
    pub fn low_blood_groups(&self, threshold: i64) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT blood_group FROM blood_bank
             GROUP BY blood_group HAVING SUM(units) < ? ORDER BY blood_group",
        )?;
        let rows = stmt.query_map([threshold], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
