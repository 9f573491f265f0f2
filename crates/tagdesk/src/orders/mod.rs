//! Pet tag order intake: domain model, pricing, shape configuration rules,
//! submission validation, the repository boundary, and the controllers built
//! on top of them.
//!
//! The intake service composes the pure pieces (rules, pricing, validation)
//! over an injected [`repository::OrderRepository`]; the form and admin
//! controllers are the stateful front doors the API service and CLI demo
//! drive.

pub mod admin;
pub mod domain;
pub mod export;
pub mod form;
pub mod pricing;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use admin::{AdminListing, StatusCounts};
pub use domain::{
    AnimalType, ContactPreference, FontChoice, IconPlacement, IconSelection, Money, Order, OrderId,
    OrderStatus, OrderSubmission, PaymentMethod, PetNameCase, TagItem, TagMaterial, TagSize,
    TagSpec, TAG_SHAPES,
};
pub use export::{to_csv_string, write_csv, ExportError};
pub use form::{FormError, FormState, IconFlag, OrderForm};
pub use pricing::{add_ons_total, order_total, price, PriceBreakdown, ICON_FEE, IMAGE_FEE};
pub use repository::{CreatedOrder, NewOrder, OrderRecord, OrderRepository, RepositoryError};
pub use router::order_router;
pub use rules::{apply_shape_rules, image_allowed, legal_materials, legal_sizes};
pub use service::{OrderIntakeService, OrderServiceError, SubmissionReceipt};
pub use validation::{validate_submission, FieldError, SubmissionRejected};
