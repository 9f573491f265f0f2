use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::orders::domain::{
    AnimalType, ContactPreference, FontChoice, IconPlacement, IconSelection, Money, OrderId,
    OrderStatus, OrderSubmission, PaymentMethod, PetNameCase, TagItem, TagMaterial, TagSize,
    TagSpec,
};
use crate::orders::repository::{
    CreatedOrder, NewOrder, OrderRecord, OrderRepository, RepositoryError,
};
use crate::orders::service::OrderIntakeService;

pub(super) fn order_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date")
}

pub(super) fn tag() -> TagSpec {
    TagSpec {
        pet_name: "Biscuit".to_string(),
        pet_name_case: PetNameCase::Mixed,
        animal_type: AnimalType::Dog,
        animal_type_other: None,
        shape: "Round".to_string(),
        size: TagSize::Small,
        material: TagMaterial::Brass,
        front_line_1: "Biscuit".to_string(),
        front_line_2: None,
        back_line_1: "(718) 555-0142".to_string(),
        back_line_2: None,
        back_line_3: None,
    }
}

pub(super) fn submission() -> OrderSubmission {
    OrderSubmission {
        customer_name: "Dana Whitfield".to_string(),
        phone_number: "(718) 555-0142".to_string(),
        email: Some("dana@example.com".to_string()),
        preferred_contact: ContactPreference::Text,
        tags: vec![tag()],
        font_choice: FontChoice::C,
        add_image: false,
        icons: IconSelection::default(),
        icon_placement: IconPlacement::Before,
        notes: None,
        base_tag_price: Money::from_cents(1200),
        payment_method: PaymentMethod::Cash,
        payment_method_other: None,
        date_ordered: order_date(),
        ready_by: Some(NaiveDate::from_ymd_opt(2025, 11, 10).expect("valid date")),
        staff_initials: Some("MB".to_string()),
        spelling_confirmed: true,
        signature: "Dana Whitfield".to_string(),
        signature_date: order_date(),
    }
}

pub(super) fn build_service() -> (OrderIntakeService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = OrderIntakeService::new(repository.clone());
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    sequence: u64,
    records: Vec<OrderRecord>,
}

impl OrderRepository for MemoryRepository {
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

pub(super) struct UnavailableRepository;

impl OrderRepository for UnavailableRepository {
    fn create_order(&self, _order: NewOrder) -> Result<CreatedOrder, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_tag_items(
        &self,
        _order_id: &OrderId,
        _tags: &[TagItem],
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &OrderId) -> Result<Option<OrderRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_by_number(
        &self,
        _order_number: &str,
    ) -> Result<Option<OrderRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(&self, _id: &OrderId, _status: OrderStatus) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Accepts the header but loses every tag item, exercising the logged
/// partial-persistence path.
#[derive(Default)]
pub(super) struct DroppedTagsRepository {
    inner: MemoryRepository,
}

impl DroppedTagsRepository {
    pub(super) fn stored(&self) -> Vec<OrderRecord> {
        self.inner.list().expect("memory list")
    }
}

impl OrderRepository for DroppedTagsRepository {
    fn create_order(&self, order: NewOrder) -> Result<CreatedOrder, RepositoryError> {
        self.inner.create_order(order)
    }

    fn insert_tag_items(
        &self,
        _order_id: &OrderId,
        _tags: &[TagItem],
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable(
            "tag item insert failed".to_string(),
        ))
    }

    fn list(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        self.inner.list()
    }

    fn fetch(&self, id: &OrderId) -> Result<Option<OrderRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn fetch_by_number(&self, order_number: &str) -> Result<Option<OrderRecord>, RepositoryError> {
        self.inner.fetch_by_number(order_number)
    }

    fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), RepositoryError> {
        self.inner.update_status(id, status)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
