//! Order form controller: holds the draft submission, re-runs the pricing
//! calculator and configuration rules on every relevant change, and
//! orchestrates submission through the intake service.
//!
//! All sections are editable simultaneously; there is no wizard gating.

use chrono::Local;

use super::domain::{
    ContactPreference, FontChoice, IconPlacement, IconSelection, Money, OrderId, OrderSubmission,
    PaymentMethod, TagMaterial, TagSize, TagSpec,
};
use super::pricing::{self, PriceBreakdown};
use super::repository::OrderRepository;
use super::rules;
use super::service::{OrderIntakeService, OrderServiceError, SubmissionReceipt};

/// Lifecycle of the form. Once submitted, the draft is frozen and further
/// submits are refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted {
        order_id: OrderId,
        order_number: String,
    },
}

/// Icon flags addressable by the form's reactive setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFlag {
    Paw,
    Bone,
    Heart,
    Star,
    Other,
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("at least one tag is required")]
    LastTagRequired,
    #[error("no tag at position {0}")]
    UnknownTag(usize),
    #[error("{} is not available for the selected shape", .0.label())]
    MaterialUnavailable(TagMaterial),
    #[error("{} is not available for the selected shape", .0.label())]
    SizeUnavailable(TagSize),
    #[error("order already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Service(#[from] OrderServiceError),
}

pub struct OrderForm {
    draft: OrderSubmission,
    totals: PriceBreakdown,
    state: FormState,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    /// A fresh form with the intake defaults and a single blank tag.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let draft = OrderSubmission {
            customer_name: String::new(),
            phone_number: String::new(),
            email: None,
            preferred_contact: ContactPreference::Call,
            tags: vec![TagSpec::blank()],
            font_choice: FontChoice::A,
            add_image: false,
            icons: IconSelection::default(),
            icon_placement: IconPlacement::Before,
            notes: None,
            base_tag_price: Money::ZERO,
            payment_method: PaymentMethod::Cash,
            payment_method_other: None,
            date_ordered: today,
            ready_by: None,
            staff_initials: None,
            spelling_confirmed: false,
            signature: String::new(),
            signature_date: today,
        };
        let totals = pricing::price(draft.add_image, &draft.icons, draft.base_tag_price);

        OrderForm {
            draft,
            totals,
            state: FormState::Editing,
        }
    }

    pub fn draft(&self) -> &OrderSubmission {
        &self.draft
    }

    /// Mutable access for the non-reactive fields (customer info, notes,
    /// confirmation section). Derived state is refreshed on submit.
    pub fn draft_mut(&mut self) -> &mut OrderSubmission {
        &mut self.draft
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn totals(&self) -> PriceBreakdown {
        self.totals
    }

    /// Append a blank tag with the default shape/material/size.
    pub fn add_tag(&mut self) {
        self.draft.tags.push(TagSpec::blank());
    }

    /// Remove a tag. Refused when only one tag remains.
    pub fn remove_tag(&mut self, index: usize) -> Result<(), FormError> {
        if self.draft.tags.len() <= 1 {
            return Err(FormError::LastTagRequired);
        }
        if index >= self.draft.tags.len() {
            return Err(FormError::UnknownTag(index));
        }
        self.draft.tags.remove(index);
        Ok(())
    }

    /// Change a tag's shape, synchronously correcting material and size
    /// against the new shape's legal sets.
    pub fn set_shape(&mut self, index: usize, shape: &str) -> Result<(), FormError> {
        let tag = self
            .draft
            .tags
            .get_mut(index)
            .ok_or(FormError::UnknownTag(index))?;
        tag.shape = shape.to_string();
        rules::apply_shape_rules(tag);
        Ok(())
    }

    /// Select a material from the current shape's legal set.
    pub fn set_material(&mut self, index: usize, material: TagMaterial) -> Result<(), FormError> {
        let tag = self
            .draft
            .tags
            .get_mut(index)
            .ok_or(FormError::UnknownTag(index))?;
        if !rules::legal_materials(&tag.shape).contains(&material) {
            return Err(FormError::MaterialUnavailable(material));
        }
        tag.material = material;
        Ok(())
    }

    /// Select a size from the current shape's legal set.
    pub fn set_size(&mut self, index: usize, size: TagSize) -> Result<(), FormError> {
        let tag = self
            .draft
            .tags
            .get_mut(index)
            .ok_or(FormError::UnknownTag(index))?;
        if !rules::legal_sizes(&tag.shape).contains(&size) {
            return Err(FormError::SizeUnavailable(size));
        }
        tag.size = size;
        Ok(())
    }

    pub fn set_add_image(&mut self, add_image: bool) {
        self.draft.add_image = add_image;
        self.recompute();
    }

    pub fn set_icon(&mut self, icon: IconFlag, selected: bool) {
        match icon {
            IconFlag::Paw => self.draft.icons.paw = selected,
            IconFlag::Bone => self.draft.icons.bone = selected,
            IconFlag::Heart => self.draft.icons.heart = selected,
            IconFlag::Star => self.draft.icons.star = selected,
            IconFlag::Other => self.draft.icons.other = selected,
        }
        self.recompute();
    }

    pub fn set_icon_other_text(&mut self, text: Option<String>) {
        self.draft.icons.other_text = text;
    }

    /// Parse and store the base price input, clamping to zero on failure,
    /// then re-derive the totals.
    pub fn set_base_price_input(&mut self, raw: &str) {
        self.draft.base_tag_price = Money::parse_dollars(raw);
        self.recompute();
    }

    /// Warning surfaced when the image add-on is selected but the first
    /// tag's shape cannot carry it. The shape is never changed silently.
    pub fn image_warning(&self) -> Option<&'static str> {
        let shape = self.draft.tags.first().map(|tag| tag.shape.as_str())?;
        if self.draft.add_image && !rules::image_allowed(shape) {
            Some("Custom images are only available for Round shaped tags. Please change the tag shape.")
        } else {
            None
        }
    }

    /// Re-derive the display-only totals from the current inputs.
    pub fn recompute(&mut self) {
        self.totals = pricing::price(
            self.draft.add_image,
            &self.draft.icons,
            self.draft.base_tag_price,
        );
    }

    /// Submit the draft through the intake service. On success the form
    /// transitions to [`FormState::Submitted`] keyed by the returned
    /// identity; on failure it stays editable.
    pub fn submit<R>(
        &mut self,
        service: &OrderIntakeService<R>,
    ) -> Result<SubmissionReceipt, FormError>
    where
        R: OrderRepository + 'static,
    {
        if matches!(self.state, FormState::Submitted { .. }) {
            return Err(FormError::AlreadySubmitted);
        }

        self.recompute();
        let receipt = service.submit(self.draft.clone())?;
        self.state = FormState::Submitted {
            order_id: receipt.order_id.clone(),
            order_number: receipt.order_number.clone(),
        };
        Ok(receipt)
    }
}
