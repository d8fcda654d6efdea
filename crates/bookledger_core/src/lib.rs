//! Core domain logic for Bookledger.
//! This crate is the single source of truth for ledger invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::seed::seed_demo_rows;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::Book;
pub use model::member::Member;
pub use model::sale::{is_valid_sale_date, CreatedSale, NewSale, Sale, SaleId, SaleView};
pub use repo::catalog_repo::{CatalogRepository, SqliteCatalogRepository};
pub use repo::report_repo::{ReportRepository, SqliteReportRepository};
pub use repo::sale_repo::{SaleRepository, SqliteSaleRepository};
pub use repo::{LedgerError, LedgerResult};
pub use service::report_service::ReportService;
pub use service::sale_service::SaleService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
