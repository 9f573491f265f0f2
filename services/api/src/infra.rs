use chrono::{NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tagdesk::orders::domain::{OrderId, OrderStatus, TagItem};
use tagdesk::orders::repository::{
    CreatedOrder, NewOrder, OrderRecord, OrderRepository, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store backing the service until a durable database is
/// wired in. Order numbers are assigned from a sequence under the lock, so
/// concurrent submissions cannot collide.
#[derive(Default)]
pub(crate) struct InMemoryOrderRepository {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    sequence: u64,
    records: Vec<OrderRecord>,
}

impl OrderRepository for InMemoryOrderRepository {
    fn create_order(&self, order: NewOrder) -> Result<CreatedOrder, RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        guard.sequence += 1;
        let id = OrderId(format!("ord-{:06}", guard.sequence));
        let order_number = format!("PT-{:05}", guard.sequence);
        let order = order.into_order(id.clone(), order_number.clone(), Utc::now());
        guard.records.push(OrderRecord {
            order,
            tags: Vec::new(),
        });
        Ok(CreatedOrder {
            order_id: id,
            order_number,
        })
    }

    fn insert_tag_items(
        &self,
        order_id: &OrderId,
        tags: &[TagItem],
    ) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        let record = guard
            .records
            .iter_mut()
            .find(|record| record.order.id == *order_id)
            .ok_or(RepositoryError::NotFound)?;
        record.tags.extend(tags.iter().cloned());
        Ok(())
    }

    fn list(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.records.iter().rev().cloned().collect())
    }

    fn fetch(&self, id: &OrderId) -> Result<Option<OrderRecord>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard
            .records
            .iter()
            .find(|record| record.order.id == *id)
            .cloned())
    }

    fn fetch_by_number(&self, order_number: &str) -> Result<Option<OrderRecord>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard
            .records
            .iter()
            .find(|record| record.order.order_number == order_number)
            .cloned())
    }

    fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        let record = guard
            .records
            .iter_mut()
            .find(|record| record.order.id == *id)
            .ok_or(RepositoryError::NotFound)?;
        record.order.status = status;
        record.order.updated_at = Utc::now();
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
