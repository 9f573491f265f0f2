//! Admin listing controller: fetch, search-filter, status mutation with an
//! optimistic local update, and export of the currently filtered view.

use chrono::Utc;
use serde::Serialize;

use super::domain::{OrderId, OrderStatus};
use super::export::{self, ExportError};
use super::repository::{OrderRecord, OrderRepository};
use super::service::{OrderIntakeService, OrderServiceError};

/// Tallies shown on the admin dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Case-insensitive substring match against customer name, phone number,
/// order number, and order id. An empty term matches everything.
pub fn matches_search(record: &OrderRecord, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let order = &record.order;
    order.customer_name.to_lowercase().contains(&needle)
        || order.phone_number.to_lowercase().contains(&needle)
        || order.order_number.to_lowercase().contains(&needle)
        || order.id.0.to_lowercase().contains(&needle)
}

#[derive(Default)]
pub struct AdminListing {
    orders: Vec<OrderRecord>,
    search: String,
}

impl AdminListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload every order from the store, newest first.
    pub fn refresh<R>(&mut self, service: &OrderIntakeService<R>) -> Result<(), OrderServiceError>
    where
        R: OrderRepository + 'static,
    {
        self.orders = service.list()?;
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// The listing restricted to the current search term.
    pub fn filtered(&self) -> Vec<&OrderRecord> {
        self.orders
            .iter()
            .filter(|record| matches_search(record, &self.search))
            .collect()
    }

    /// Change an order's status through the store; the local copy is patched
    /// optimistically once the store accepts the update.
    pub fn update_status<R>(
        &mut self,
        service: &OrderIntakeService<R>,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), OrderServiceError>
    where
        R: OrderRepository + 'static,
    {
        service.update_status(id, status)?;

        if let Some(record) = self.orders.iter_mut().find(|record| record.order.id == *id) {
            record.order.status = status;
            record.order.updated_at = Utc::now();
        }
        Ok(())
    }

    pub fn status_counts(&self) -> StatusCounts {
        let count = |status: OrderStatus| {
            self.orders
                .iter()
                .filter(|record| record.order.status == status)
                .count()
        };

        StatusCounts {
            total: self.orders.len(),
            pending: count(OrderStatus::Pending),
            in_progress: count(OrderStatus::InProgress),
            completed: count(OrderStatus::Completed),
            cancelled: count(OrderStatus::Cancelled),
        }
    }

    /// Export the currently filtered view as quoted CSV.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        export::to_csv_string(&self.filtered())
    }
}
