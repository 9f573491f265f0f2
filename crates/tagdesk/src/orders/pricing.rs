use serde::{Deserialize, Serialize};

use super::domain::{IconSelection, Money};

/// Flat fee for the engraved custom image add-on.
pub const IMAGE_FEE: Money = Money::from_cents(1000);

/// Flat fee per selected icon flag.
pub const ICON_FEE: Money = Money::from_cents(500);

/// Derived pricing for an order. Both totals are display-only and re-derive
/// deterministically from the current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_tag_price: Money,
    pub add_ons_total: Money,
    pub order_total: Money,
}

pub fn add_ons_total(add_image: bool, icons: &IconSelection) -> Money {
    let image_fee = if add_image { IMAGE_FEE } else { Money::ZERO };
    let icon_fees = Money::from_cents(ICON_FEE.cents().saturating_mul(icons.selected_count()));
    image_fee.saturating_add(icon_fees)
}

pub fn order_total(base_tag_price: Money, add_ons: Money) -> Money {
    base_tag_price.saturating_add(add_ons)
}

pub fn price(add_image: bool, icons: &IconSelection, base_tag_price: Money) -> PriceBreakdown {
    let add_ons = add_ons_total(add_image, icons);
    PriceBreakdown {
        base_tag_price,
        add_ons_total: add_ons,
        order_total: order_total(base_tag_price, add_ons),
    }
}
