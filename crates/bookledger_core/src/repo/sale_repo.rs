//! Sale transaction engine: atomic create/update/delete of sale rows.
//!
//! # Responsibility
//! - Own every mutation of the `sales` table.
//! - Pair each sale mutation with the equal-and-opposite stock adjustment
//!   on the referenced book.
//!
//! # Invariants
//! - Sale mutation and stock adjustment commit in one `Immediate`
//!   transaction, or neither applies (rollback on any failure path).
//! - After every committed operation, for every book,
//!   `stock = initial_stock - sum(quantity of existing sales on it)`.
//! - Validation runs before any mutation; stock can never go negative.

use crate::model::sale::{CreatedSale, NewSale, Sale, SaleId};
use crate::repo::catalog_repo::{book_by_code, member_by_code};
use crate::repo::{LedgerError, LedgerResult};
use log::info;
use rusqlite::{params, Connection, TransactionBehavior};

/// Repository interface for sale mutations.
///
/// Each operation is a single atomic step; there is no multi-step protocol
/// across calls.
pub trait SaleRepository {
    /// Records a new sale and decrements the book's stock.
    fn create_sale(&mut self, draft: &NewSale) -> LedgerResult<CreatedSale>;
    /// Re-quantifies an existing sale and adjusts the book's stock by the
    /// difference. Returns the recomputed total.
    fn update_sale(
        &mut self,
        sale_id: SaleId,
        new_quantity: i64,
        new_discount: i64,
    ) -> LedgerResult<i64>;
    /// Removes a sale and restores the book's stock by its quantity.
    fn delete_sale(&mut self, sale_id: SaleId) -> LedgerResult<()>;
}

/// SQLite-backed sale transaction engine.
///
/// Holds the connection mutably: every operation opens its own write
/// transaction on it.
pub struct SqliteSaleRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteSaleRepository<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl SaleRepository for SqliteSaleRepository<'_> {
    fn create_sale(&mut self, draft: &NewSale) -> LedgerResult<CreatedSale> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if member_by_code(&tx, &draft.member_code)?.is_none() {
            return Err(LedgerError::MemberNotFound(draft.member_code.clone()));
        }
        let book = book_by_code(&tx, &draft.book_code)?
            .ok_or_else(|| LedgerError::BookNotFound(draft.book_code.clone()))?;

        if draft.quantity <= 0 {
            return Err(LedgerError::InvalidQuantity(draft.quantity));
        }
        if draft.discount < 0 {
            return Err(LedgerError::InvalidDiscount(draft.discount));
        }
        if draft.quantity > book.stock {
            return Err(LedgerError::InsufficientStock {
                requested: draft.quantity,
                available: book.stock,
            });
        }

        let total = book.unit_price * draft.quantity - draft.discount;

        tx.execute(
            "INSERT INTO sales (sold_on, member_code, book_code, quantity, discount, total)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.sold_on,
                draft.member_code,
                draft.book_code,
                draft.quantity,
                draft.discount,
                total,
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.execute(
            "UPDATE books SET stock = stock - ?1 WHERE book_code = ?2;",
            params![draft.quantity, draft.book_code],
        )?;

        tx.commit()?;

        info!(
            "event=sale_create module=repo status=ok sale_id={id} book_code={} quantity={} total={total}",
            draft.book_code, draft.quantity
        );
        Ok(CreatedSale { id, total })
    }

    fn update_sale(
        &mut self,
        sale_id: SaleId,
        new_quantity: i64,
        new_discount: i64,
    ) -> LedgerResult<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let sale = sale_by_id(&tx, sale_id)?.ok_or(LedgerError::SaleNotFound(sale_id))?;
        let book = book_by_code(&tx, &sale.book_code)?
            .ok_or_else(|| LedgerError::BookNotFound(sale.book_code.clone()))?;

        // Headroom treats the old quantity as returned to stock first.
        let available = book.stock + sale.quantity;
        if new_quantity <= 0 {
            return Err(LedgerError::InvalidQuantity(new_quantity));
        }
        if new_quantity > available {
            return Err(LedgerError::InsufficientStock {
                requested: new_quantity,
                available,
            });
        }
        if new_discount < 0 {
            return Err(LedgerError::InvalidDiscount(new_discount));
        }

        // Recomputed from the book's current price, so a price change since
        // the original sale alters the stored total here.
        let total = book.unit_price * new_quantity - new_discount;

        tx.execute(
            "UPDATE sales SET quantity = ?1, discount = ?2, total = ?3 WHERE id = ?4;",
            params![new_quantity, new_discount, total, sale_id],
        )?;
        tx.execute(
            "UPDATE books SET stock = stock + ?1 - ?2 WHERE book_code = ?3;",
            params![sale.quantity, new_quantity, sale.book_code],
        )?;

        tx.commit()?;

        info!(
            "event=sale_update module=repo status=ok sale_id={sale_id} book_code={} quantity={new_quantity} total={total}",
            sale.book_code
        );
        Ok(total)
    }

    fn delete_sale(&mut self, sale_id: SaleId) -> LedgerResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let sale = sale_by_id(&tx, sale_id)?.ok_or(LedgerError::SaleNotFound(sale_id))?;

        tx.execute("DELETE FROM sales WHERE id = ?1;", [sale_id])?;
        tx.execute(
            "UPDATE books SET stock = stock + ?1 WHERE book_code = ?2;",
            params![sale.quantity, sale.book_code],
        )?;

        tx.commit()?;

        info!(
            "event=sale_delete module=repo status=ok sale_id={sale_id} book_code={} restocked={}",
            sale.book_code, sale.quantity
        );
        Ok(())
    }
}

/// Reads one sale row; usable on a plain connection or inside a
/// transaction.
pub fn sale_by_id(conn: &Connection, sale_id: SaleId) -> LedgerResult<Option<Sale>> {
    let mut stmt = conn.prepare(
        "SELECT id, sold_on, member_code, book_code, quantity, discount, total
         FROM sales
         WHERE id = ?1;",
    )?;
    let mut rows = stmt.query([sale_id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(Sale {
            id: row.get("id")?,
            sold_on: row.get("sold_on")?,
            member_code: row.get("member_code")?,
            book_code: row.get("book_code")?,
            quantity: row.get("quantity")?,
            discount: row.get("discount")?,
            total: row.get("total")?,
        }));
    }
    Ok(None)
}
