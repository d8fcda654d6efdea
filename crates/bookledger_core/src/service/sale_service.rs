//! Sale use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for recording, re-quantifying and
//!   removing sales.
//! - Delegate persistence to the sale repository.
//!
//! # Invariants
//! - Service APIs never bypass the repository's atomic-transaction
//!   contract.
//! - Service layer remains storage-agnostic.

use crate::model::sale::{CreatedSale, NewSale, SaleId};
use crate::repo::sale_repo::SaleRepository;
use crate::repo::LedgerResult;

/// Use-case service wrapper for sale mutations.
pub struct SaleService<R: SaleRepository> {
    repo: R,
}

impl<R: SaleRepository> SaleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records a new sale.
    ///
    /// # Contract
    /// - Member and book codes must resolve in the catalog.
    /// - Returns the created sale id and computed total.
    /// - The referenced book's stock is reduced by the sale quantity in the
    ///   same atomic unit.
    pub fn create_sale(&mut self, draft: &NewSale) -> LedgerResult<CreatedSale> {
        self.repo.create_sale(draft)
    }

    /// Changes the quantity and discount of an existing sale.
    ///
    /// Returns repository-level not-found or validation errors unchanged;
    /// on success, returns the recomputed total.
    pub fn update_sale(
        &mut self,
        sale_id: SaleId,
        new_quantity: i64,
        new_discount: i64,
    ) -> LedgerResult<i64> {
        self.repo.update_sale(sale_id, new_quantity, new_discount)
    }

    /// Removes a sale and restores its quantity to the book's stock.
    pub fn delete_sale(&mut self, sale_id: SaleId) -> LedgerResult<()> {
        self.repo.delete_sale(sale_id)
    }
}
