//! Inventory table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{write_err, Database, DbError, DbResult};
use crate::models::{today, InventoryItem};

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        item_id: row.get(0)?,
        item_name: row.get(1)?,
        category: row.get(2)?,
        quantity: row.get(3)?,
        unit_price: row.get(4)?,
        supplier: row.get(5)?,
        last_updated: row.get(6)?,
    })
}

const ITEM_COLUMNS: &str =
    "item_id, item_name, category, quantity, unit_price, supplier, last_updated";

impl Database {
    /// Add an inventory item. Returns the assigned identity.
    pub fn insert_inventory_item(&self, item: &InventoryItem) -> DbResult<i64> {
        if item.item_name.trim().is_empty() {
            return Err(DbError::Constraint("item name is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO inventory (item_name, category, quantity, unit_price, supplier, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    item.item_name,
                    item.category,
                    item.quantity,
                    item.unit_price,
                    item.supplier,
                    item.last_updated,
                ],
            )
            .map_err(write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an item by identity.
    pub fn get_inventory_item(&self, item_id: i64) -> DbResult<Option<InventoryItem>> {
        self.conn
            .query_row(
                &format!("SELECT {ITEM_COLUMNS} FROM inventory WHERE item_id = ?"),
                [item_id],
                row_to_item,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all items, alphabetical.
    pub fn list_inventory(&self) -> DbResult<Vec<InventoryItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {ITEM_COLUMNS} FROM inventory ORDER BY item_name"))?;
        let rows = stmt.query_map([], row_to_item)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Items whose quantity is below `threshold`.
    pub fn low_stock_items(&self, threshold: i64) -> DbResult<Vec<InventoryItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory WHERE quantity < ? ORDER BY quantity"
        ))?;
        let rows = stmt.query_map([threshold], row_to_item)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count of items whose quantity is below `threshold`.
    pub fn low_stock_count(&self, threshold: i64) -> DbResult<i64> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM inventory WHERE quantity < ?",
            [threshold],
            |row| row.get(0),
        )?)
    }

    /// Add stock to an item, stamping today's date.
    pub fn add_stock(&self, item_id: i64, quantity: i64) -> DbResult<()> {
        self.adjust_stock(item_id, quantity)
    }

    /// Remove stock from an item, stamping today's date.
    pub fn remove_stock(&self, item_id: i64, quantity: i64) -> DbResult<()> {
        self.adjust_stock(item_id, -quantity)
    }

    fn adjust_stock(&self, item_id: i64, delta: i64) -> DbResult<()> {
        let updated = self.conn.execute(
            "UPDATE inventory SET quantity = quantity + ?1, last_updated = ?2 WHERE item_id = ?3",
            params![delta, today(), item_id],
        )?;
        if updated == 0 {
            return Err(DbError::NotFound(format!("inventory item {item_id}")));
        }
        Ok(())
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
    fn test_seeded_stock_has_no_low_items() {
        let db = setup_db();
        assert_eq!(db.low_stock_count(100).unwrap(), 0);
    }

    #[test]
    fn test_stock_movements() {
        let db = setup_db();
        let item = InventoryItem::new("Gauze".into(), 50);
        let id = db.insert_inventory_item(&item).unwrap();

        db.add_stock(id, 30).unwrap();
        db.remove_stock(id, 10).unwrap();

        let item = db.get_inventory_item(id).unwrap().unwrap();
        assert_eq!(item.quantity, 70);
        assert_eq!(item.last_updated, today());
        assert_eq!(db.low_stock_count(100).unwrap(), 1);
    }

    #[test]
    fn test_adjust_missing_item() {
        let db = setup_db();
        assert!(matches!(
            db.add_stock(999, 10),
            Err(DbError::NotFound(_))
        ));
    }
}
