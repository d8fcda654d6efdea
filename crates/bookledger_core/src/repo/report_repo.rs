//! Sales report read model.
//!
//! # Responsibility
//! - Join sales with member names and book titles for display.
//!
//! # Invariants
//! - Read-only; produces a snapshot recomputed on every call.
//! - Rows are ordered by sale id ascending.

use crate::model::sale::SaleView;
use crate::repo::LedgerResult;
use rusqlite::Connection;

/// Repository interface for report reads.
pub trait ReportRepository {
    fn list_sales(&self) -> LedgerResult<Vec<SaleView>>;
}

/// SQLite-backed report repository.
pub struct SqliteReportRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReportRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReportRepository for SqliteReportRepository<'_> {
    fn list_sales(&self) -> LedgerResult<Vec<SaleView>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                s.id,
                s.sold_on,
                m.name AS member_name,
                b.title AS book_title,
                b.unit_price,
                s.quantity,
                s.discount,
                s.total
             FROM sales s
             JOIN members m ON m.member_code = s.member_code
             JOIN books b ON b.book_code = s.book_code
             ORDER BY s.id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut views = Vec::new();
        while let Some(row) = rows.next()? {
            views.push(SaleView {
                sale_id: row.get("id")?,
                sold_on: row.get("sold_on")?,
                member_name: row.get("member_name")?,
                book_title: row.get("book_title")?,
                unit_price: row.get("unit_price")?,
                quantity: row.get("quantity")?,
                discount: row.get("discount")?,
                total: row.get("total")?,
            });
        }

        Ok(views)
    }
}
