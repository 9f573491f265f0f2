use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{OrderId, OrderStatus, OrderSubmission, TagItem};
use super::pricing;
use super::repository::{NewOrder, OrderRecord, OrderRepository, RepositoryError};
use super::rules;
use super::validation::{validate_submission, SubmissionRejected};

/// Identity returned to the customer after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub order_id: OrderId,
    pub order_number: String,
}

/// Service composing the configuration rules, validation schema, pricing
/// calculator, and repository.
pub struct OrderIntakeService<R> {
    repository: Arc<R>,
}

impl<R> OrderIntakeService<R>
where
    R: OrderRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate, price, and persist a new order, returning its receipt.
    ///
    /// The header is the source of truth for success: a tag-item insertion
    /// failure after the header lands is logged and the submission still
    /// reports success.
    pub fn submit(
        &self,
        mut submission: OrderSubmission,
    ) -> Result<SubmissionReceipt, OrderServiceError> {
        for tag in &mut submission.tags {
            rules::apply_shape_rules(tag);
        }
        validate_submission(&submission)?;

        let breakdown = pricing::price(
            submission.add_image,
            &submission.icons,
            submission.base_tag_price,
        );

        let tags: Vec<TagItem> = submission
            .tags
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, spec)| TagItem {
                tag_number: index as u32 + 1,
                spec,
            })
            .collect();

        let header = NewOrder::from_submission(submission, breakdown);
        let created = self.repository.create_order(header)?;

        if let Err(err) = self.repository.insert_tag_items(&created.order_id, &tags) {
            warn!(
                order_id = %created.order_id,
                order_number = %created.order_number,
                error = %err,
                "tag items failed to persist after order header"
            );
        }

        Ok(SubmissionReceipt {
            order_id: created.order_id,
            order_number: created.order_number,
        })
    }

    /// All orders with their tag items, newest first.
    pub fn list(&self) -> Result<Vec<OrderRecord>, OrderServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, id: &OrderId) -> Result<OrderRecord, OrderServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn get_by_number(&self, order_number: &str) -> Result<OrderRecord, OrderServiceError> {
        let record = self
            .repository
            .fetch_by_number(order_number)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), OrderServiceError> {
        self.repository.update_status(id, status)?;
        Ok(())
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    #[error(transparent)]
    Validation(#[from] SubmissionRejected),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
