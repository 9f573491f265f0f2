use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted orders. Assigned by the store, never by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency amount in whole cents. Non-negative by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u32) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> u32 {
        self.0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Parse a dollars-and-cents input such as `"25"`, `"25.50"`, or
    /// `"$25.50"`. Unparseable or negative input clamps to zero.
    pub fn parse_dollars(raw: &str) -> Money {
        let trimmed = raw.trim().trim_start_matches('$');
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                let cents = (value * 100.0).round();
                Money(cents.min(u32::MAX as f64) as u32)
            }
            _ => Money::ZERO,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// How the customer prefers to be reached about the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPreference {
    Call,
    Text,
    Email,
}

impl ContactPreference {
    pub const fn label(self) -> &'static str {
        match self {
            ContactPreference::Call => "call",
            ContactPreference::Text => "text",
            ContactPreference::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    Dog,
    Cat,
    Other,
}

impl AnimalType {
    pub const fn label(self) -> &'static str {
        match self {
            AnimalType::Dog => "dog",
            AnimalType::Cat => "cat",
            AnimalType::Other => "other",
        }
    }
}

/// Case style used when engraving the pet name. Affects rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetNameCase {
    Uppercase,
    Mixed,
}

impl PetNameCase {
    pub const fn label(self) -> &'static str {
        match self {
            PetNameCase::Uppercase => "uppercase",
            PetNameCase::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagSize {
    Small,
    Large,
}

impl TagSize {
    pub const fn label(self) -> &'static str {
        match self {
            TagSize::Small => "small",
            TagSize::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagMaterial {
    Brass,
    Stainless,
    PinkSilver,
}

impl TagMaterial {
    pub const fn label(self) -> &'static str {
        match self {
            TagMaterial::Brass => "brass",
            TagMaterial::Stainless => "stainless",
            TagMaterial::PinkSilver => "pink_silver",
        }
    }
}

/// Where selected icons are engraved relative to the pet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPlacement {
    Before,
    After,
    Above,
    Back,
}

impl IconPlacement {
    pub const fn label(self) -> &'static str {
        match self {
            IconPlacement::Before => "before",
            IconPlacement::After => "after",
            IconPlacement::Above => "above",
            IconPlacement::Back => "back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Other,
}

impl PaymentMethod {
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Other => "other",
        }
    }
}

/// Lifecycle status of a submitted order. Mutated only through the admin
/// status-change operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Engraving font, offered as lettered samples A through J.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontChoice {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
}

impl FontChoice {
    pub const fn as_str(self) -> &'static str {
        match self {
            FontChoice::A => "A",
            FontChoice::B => "B",
            FontChoice::C => "C",
            FontChoice::D => "D",
            FontChoice::E => "E",
            FontChoice::F => "F",
            FontChoice::G => "G",
            FontChoice::H => "H",
            FontChoice::I => "I",
            FontChoice::J => "J",
        }
    }
}

/// Shape catalog offered when the configuration rules are unconstrained.
/// Shapes outside this list fall back to the default material set.
pub const TAG_SHAPES: [&str; 9] = [
    "Round",
    "Bone",
    "Heart",
    "Rectangle",
    "Oval",
    "Star",
    "Paw",
    "Fire Hydrant",
    "Custom",
];

/// Paid icon add-ons. Each selected flag contributes a flat fee; `other`
/// carries optional free text describing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSelection {
    pub paw: bool,
    pub bone: bool,
    pub heart: bool,
    pub star: bool,
    pub other: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_text: Option<String>,
}

impl IconSelection {
    pub fn selected_count(&self) -> u32 {
        [self.paw, self.bone, self.heart, self.star, self.other]
            .into_iter()
            .filter(|flag| *flag)
            .count() as u32
    }
}

/// One tag as specified on the intake form, before the store numbers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSpec {
    pub pet_name: String,
    pub pet_name_case: PetNameCase,
    pub animal_type: AnimalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_type_other: Option<String>,
    pub shape: String,
    pub size: TagSize,
    pub material: TagMaterial,
    pub front_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_line_2: Option<String>,
    pub back_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_line_3: Option<String>,
}

impl TagSpec {
    /// A fresh tag with the form defaults: Round brass small, mixed-case
    /// name, dog.
    pub fn blank() -> Self {
        TagSpec {
            pet_name: String::new(),
            pet_name_case: PetNameCase::Mixed,
            animal_type: AnimalType::Dog,
            animal_type_other: None,
            shape: "Round".to_string(),
            size: TagSize::Small,
            material: TagMaterial::Brass,
            front_line_1: String::new(),
            front_line_2: None,
            back_line_1: String::new(),
            back_line_2: None,
            back_line_3: None,
        }
    }

    /// Pet name as it will be engraved.
    pub fn rendered_pet_name(&self) -> String {
        match self.pet_name_case {
            PetNameCase::Uppercase => self.pet_name.to_uppercase(),
            PetNameCase::Mixed => self.pet_name.clone(),
        }
    }
}

/// A persisted tag line item, numbered within its parent order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagItem {
    pub tag_number: u32,
    #[serde(flatten)]
    pub spec: TagSpec,
}

/// Inbound order payload. Derived totals are intentionally absent: the
/// service recomputes them from `add_image`, `icons`, and `base_tag_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub customer_name: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub preferred_contact: ContactPreference,
    pub tags: Vec<TagSpec>,
    pub font_choice: FontChoice,
    pub add_image: bool,
    pub icons: IconSelection,
    pub icon_placement: IconPlacement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub base_tag_price: Money,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_other: Option<String>,
    pub date_ordered: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_by: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_initials: Option<String>,
    pub spelling_confirmed: bool,
    pub signature: String,
    pub signature_date: NaiveDate,
}

/// Persisted order header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub customer_name: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub preferred_contact: ContactPreference,
    pub font_choice: FontChoice,
    pub add_image: bool,
    pub icons: IconSelection,
    pub icon_placement: IconPlacement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub base_tag_price: Money,
    pub add_ons_total: Money,
    pub order_total: Money,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_other: Option<String>,
    pub date_ordered: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_by: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_initials: Option<String>,
    pub spelling_confirmed: bool,
    pub signature: String,
    pub signature_date: NaiveDate,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
