use std::sync::Arc;

use super::common::{build_service, UnavailableRepository};
use crate::orders::domain::{Money, OrderStatus, TagMaterial, TagSize};
use crate::orders::form::{FormError, FormState, IconFlag, OrderForm};
use crate::orders::service::OrderIntakeService;

fn filled_form() -> OrderForm {
    let mut form = OrderForm::new();
    {
        let draft = form.draft_mut();
        draft.customer_name = "Dana Whitfield".to_string();
        draft.phone_number = "(718) 555-0142".to_string();
        draft.signature = "Dana Whitfield".to_string();
        draft.spelling_confirmed = true;
        draft.tags[0].pet_name = "Biscuit".to_string();
        draft.tags[0].front_line_1 = "Biscuit".to_string();
        draft.tags[0].back_line_1 = "(718) 555-0142".to_string();
    }
    form
}

#[test]
fn new_form_starts_with_one_default_tag() {
    let form = OrderForm::new();
    assert_eq!(form.state(), &FormState::Editing);
    assert_eq!(form.draft().tags.len(), 1);
    assert_eq!(form.draft().tags[0].shape, "Round");
    assert_eq!(form.draft().tags[0].material, TagMaterial::Brass);
    assert_eq!(form.draft().tags[0].size, TagSize::Small);
    assert_eq!(form.totals().order_total, Money::ZERO);
}

#[test]
fn last_tag_cannot_be_removed() {
    let mut form = OrderForm::new();
    assert!(matches!(
        form.remove_tag(0),
        Err(FormError::LastTagRequired)
    ));

    form.add_tag();
    assert_eq!(form.draft().tags.len(), 2);
    form.remove_tag(1).expect("second tag removable");
    assert_eq!(form.draft().tags.len(), 1);
}

#[test]
fn shape_change_corrects_material_and_size() {
    let mut form = OrderForm::new();
    form.set_shape(0, "Heart").expect("tag exists");
    assert_eq!(form.draft().tags[0].material, TagMaterial::PinkSilver);
    assert_eq!(form.draft().tags[0].size, TagSize::Large);

    form.set_shape(0, "Round").expect("tag exists");
    assert_eq!(form.draft().tags[0].material, TagMaterial::Brass);
    assert_eq!(form.draft().tags[0].size, TagSize::Large);
}

#[test]
fn material_and_size_choices_are_restricted_to_the_shape() {
    let mut form = OrderForm::new();
    form.set_material(0, TagMaterial::Stainless)
        .expect("stainless legal for round");

    assert!(matches!(
        form.set_material(0, TagMaterial::PinkSilver),
        Err(FormError::MaterialUnavailable(TagMaterial::PinkSilver))
    ));

    form.set_shape(0, "Heart").expect("tag exists");
    assert!(matches!(
        form.set_size(0, TagSize::Small),
        Err(FormError::SizeUnavailable(TagSize::Small))
    ));
}

#[test]
fn price_inputs_recompute_totals_synchronously() {
    let mut form = OrderForm::new();
    form.set_base_price_input("25.00");
    assert_eq!(form.totals().order_total, Money::from_cents(2500));

    form.set_add_image(true);
    form.set_icon(IconFlag::Paw, true);
    form.set_icon(IconFlag::Other, true);
    form.set_icon_other_text(Some("sparkle".to_string()));
    assert_eq!(form.totals().add_ons_total, Money::from_cents(2000));
    assert_eq!(form.totals().order_total, Money::from_cents(4500));

    form.set_icon(IconFlag::Paw, false);
    assert_eq!(form.totals().add_ons_total, Money::from_cents(1500));

    form.set_base_price_input("not a price");
    assert_eq!(form.totals().base_tag_price, Money::ZERO);
    assert_eq!(form.totals().order_total, Money::from_cents(1500));
}

#[test]
fn image_warning_follows_the_first_tag_shape() {
    let mut form = OrderForm::new();
    form.set_add_image(true);
    assert!(form.image_warning().is_none());

    form.set_shape(0, "Bone").expect("tag exists");
    assert!(form.image_warning().is_some());

    form.set_shape(0, "Round").expect("tag exists");
    assert!(form.image_warning().is_none());

    form.set_add_image(false);
    form.set_shape(0, "Bone").expect("tag exists");
    assert!(form.image_warning().is_none());
}

#[test]
fn successful_submit_freezes_the_form() {
    let (service, _) = build_service();
    let mut form = filled_form();

    let receipt = form.submit(&service).expect("submission succeeds");
    match form.state() {
        FormState::Submitted {
            order_id,
            order_number,
        } => {
            assert_eq!(order_id, &receipt.order_id);
            assert_eq!(order_number, &receipt.order_number);
        }
        other => panic!("expected submitted state, got {other:?}"),
    }

    assert!(matches!(
        form.submit(&service),
        Err(FormError::AlreadySubmitted)
    ));

    let stored = service.get(&receipt.order_id).expect("record present");
    assert_eq!(stored.order.status, OrderStatus::Pending);
}

#[test]
fn failed_submit_leaves_the_form_editable() {
    let (service, _) = build_service();
    let mut form = filled_form();
    form.draft_mut().spelling_confirmed = false;

    assert!(matches!(
        form.submit(&service),
        Err(FormError::Service(_))
    ));
    assert_eq!(form.state(), &FormState::Editing);

    form.draft_mut().spelling_confirmed = true;
    form.submit(&service).expect("retry succeeds");
}

#[test]
fn repository_outage_keeps_the_draft() {
    let service = OrderIntakeService::new(Arc::new(UnavailableRepository));
    let mut form = filled_form();

    assert!(form.submit(&service).is_err());
    assert_eq!(form.state(), &FormState::Editing);
    assert_eq!(form.draft().customer_name, "Dana Whitfield");
}
