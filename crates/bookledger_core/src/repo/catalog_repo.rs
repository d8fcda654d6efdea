//! Catalog lookups for members and books.
//!
//! # Responsibility
//! - Provide read-only member/book resolution by code.
//! - Share the row queries with transactional callers inside the sale
//!   engine.
//!
//! # Invariants
//! - Lookups have no side effects.
//! - "Not found" is reported as `Ok(None)`, never as an error.

use crate::model::book::Book;
use crate::model::member::Member;
use crate::repo::LedgerResult;
use rusqlite::{Connection, Row};

/// Looks up one member by code.
///
/// Accepts any live connection, including a transaction handle, so the
/// sale engine can validate references inside its own atomic unit.
pub fn member_by_code(conn: &Connection, code: &str) -> LedgerResult<Option<Member>> {
    let mut stmt = conn.prepare(
        "SELECT member_code, name, phone, email
         FROM members
         WHERE member_code = ?1;",
    )?;
    let mut rows = stmt.query([code])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_member_row(row)?));
    }
    Ok(None)
}

/// Looks up one book by code.
pub fn book_by_code(conn: &Connection, code: &str) -> LedgerResult<Option<Book>> {
    let mut stmt = conn.prepare(
        "SELECT book_code, title, unit_price, stock
         FROM books
         WHERE book_code = ?1;",
    )?;
    let mut rows = stmt.query([code])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_book_row(row)?));
    }
    Ok(None)
}

/// Repository interface for catalog reads.
pub trait CatalogRepository {
    fn find_member(&self, code: &str) -> LedgerResult<Option<Member>>;
    fn find_book(&self, code: &str) -> LedgerResult<Option<Book>>;
}

/// SQLite-backed catalog repository.
pub struct SqliteCatalogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCatalogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CatalogRepository for SqliteCatalogRepository<'_> {
    fn find_member(&self, code: &str) -> LedgerResult<Option<Member>> {
        member_by_code(self.conn, code)
    }

    fn find_book(&self, code: &str) -> LedgerResult<Option<Book>> {
        book_by_code(self.conn, code)
    }
}

fn parse_member_row(row: &Row<'_>) -> LedgerResult<Member> {
    Ok(Member {
        code: row.get("member_code")?,
        name: row.get("name")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
    })
}

fn parse_book_row(row: &Row<'_>) -> LedgerResult<Book> {
    Ok(Book {
        code: row.get("book_code")?,
        title: row.get("title")?,
        unit_price: row.get("unit_price")?,
        stock: row.get("stock")?,
    })
}
