use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    ContactPreference, FontChoice, IconPlacement, IconSelection, Money, Order, OrderId,
    OrderStatus, OrderSubmission, PaymentMethod, TagItem,
};
use super::pricing::PriceBreakdown;

/// An order header joined with its tag line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order: Order,
    pub tags: Vec<TagItem>,
}

/// Header payload handed to the store. Identifier, order number, status, and
/// timestamps are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub preferred_contact: ContactPreference,
    pub font_choice: FontChoice,
    pub add_image: bool,
    pub icons: IconSelection,
    pub icon_placement: IconPlacement,
    pub notes: Option<String>,
    pub base_tag_price: Money,
    pub add_ons_total: Money,
    pub order_total: Money,
    pub payment_method: PaymentMethod,
    pub payment_method_other: Option<String>,
    pub date_ordered: NaiveDate,
    pub ready_by: Option<NaiveDate>,
    pub staff_initials: Option<String>,
    pub spelling_confirmed: bool,
    pub signature: String,
    pub signature_date: NaiveDate,
}

impl NewOrder {
    /// Combine a validated submission with its derived pricing. The tag
    /// specs travel separately as numbered line items.
    pub fn from_submission(submission: OrderSubmission, pricing: PriceBreakdown) -> Self {
        NewOrder {
            customer_name: submission.customer_name,
            phone_number: submission.phone_number,
            email: submission.email,
            preferred_contact: submission.preferred_contact,
            font_choice: submission.font_choice,
            add_image: submission.add_image,
            icons: submission.icons,
            icon_placement: submission.icon_placement,
            notes: submission.notes,
            base_tag_price: pricing.base_tag_price,
            add_ons_total: pricing.add_ons_total,
            order_total: pricing.order_total,
            payment_method: submission.payment_method,
            payment_method_other: submission.payment_method_other,
            date_ordered: submission.date_ordered,
            ready_by: submission.ready_by,
            staff_initials: submission.staff_initials,
            spelling_confirmed: submission.spelling_confirmed,
            signature: submission.signature,
            signature_date: submission.signature_date,
        }
    }

    /// Materialize the stored header once the store has assigned identity.
    pub fn into_order(
        self,
        id: OrderId,
        order_number: String,
        created_at: DateTime<Utc>,
    ) -> Order {
        Order {
            id,
            order_number,
            customer_name: self.customer_name,
            phone_number: self.phone_number,
            email: self.email,
            preferred_contact: self.preferred_contact,
            font_choice: self.font_choice,
            add_image: self.add_image,
            icons: self.icons,
            icon_placement: self.icon_placement,
            notes: self.notes,
            base_tag_price: self.base_tag_price,
            add_ons_total: self.add_ons_total,
            order_total: self.order_total,
            payment_method: self.payment_method,
            payment_method_other: self.payment_method_other,
            date_ordered: self.date_ordered,
            ready_by: self.ready_by,
            staff_initials: self.staff_initials,
            spelling_confirmed: self.spelling_confirmed,
            signature: self.signature,
            signature_date: self.signature_date,
            status: OrderStatus::Pending,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Identity assigned by the store for a freshly created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub order_id: OrderId,
    pub order_number: String,
}

/// Storage abstraction so the service and controllers can be exercised in
/// isolation. The store owns identifier and order-number generation and is
/// expected to serialize concurrent number assignment itself.
pub trait OrderRepository: Send + Sync {
    fn create_order(&self, order: NewOrder) -> Result<CreatedOrder, RepositoryError>;
    fn insert_tag_items(&self, order_id: &OrderId, tags: &[TagItem])
        -> Result<(), RepositoryError>;
    /// All orders, newest first by creation timestamp.
    fn list(&self) -> Result<Vec<OrderRecord>, RepositoryError>;
    fn fetch(&self, id: &OrderId) -> Result<Option<OrderRecord>, RepositoryError>;
    fn fetch_by_number(&self, order_number: &str) -> Result<Option<OrderRecord>, RepositoryError>;
    /// The only permitted post-creation mutation.
    fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
