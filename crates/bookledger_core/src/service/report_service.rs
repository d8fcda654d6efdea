//! Sales report use-case service.

use crate::model::sale::SaleView;
use crate::repo::report_repo::ReportRepository;
use crate::repo::LedgerResult;

/// Use-case service wrapper for report reads.
pub struct ReportService<R: ReportRepository> {
    repo: R,
}

impl<R: ReportRepository> ReportService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a snapshot of all sales joined with member and book data,
    /// ordered by sale id ascending.
    pub fn list_sales(&self) -> LedgerResult<Vec<SaleView>> {
        self.repo.list_sales()
    }
}
