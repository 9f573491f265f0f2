use crate::infra::InMemoryOrderRepository;
use chrono::NaiveDate;
use clap::Args;
use std::sync::Arc;
use tagdesk::error::AppError;
use tagdesk::orders::domain::{ContactPreference, PaymentMethod};
use tagdesk::orders::{AdminListing, IconFlag, OrderForm, OrderIntakeService, OrderStatus};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date the sample order is placed (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date_ordered: Option<NaiveDate>,
    /// Skip printing the CSV export at the end of the demo.
    #[arg(long)]
    pub(crate) skip_export: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        date_ordered,
        skip_export,
    } = args;

    println!("Pet tag order desk demo");

    let repository = Arc::new(InMemoryOrderRepository::default());
    let service = OrderIntakeService::new(repository);

    let mut form = OrderForm::new();
    {
        let draft = form.draft_mut();
        draft.customer_name = "Dana Whitfield".to_string();
        draft.phone_number = "(718) 555-0142".to_string();
        draft.email = Some("dana@example.com".to_string());
        draft.preferred_contact = ContactPreference::Text;
        draft.payment_method = PaymentMethod::Card;
        draft.notes = Some("Gift wrap the tag".to_string());
        if let Some(date) = date_ordered {
            draft.date_ordered = date;
            draft.signature_date = date;
        }
        draft.tags[0].pet_name = "Biscuit".to_string();
        draft.tags[0].front_line_1 = "Biscuit".to_string();
        draft.tags[0].back_line_1 = "(718) 555-0142".to_string();
    }

    form.add_tag();
    {
        let draft = form.draft_mut();
        draft.tags[1].pet_name = "Mochi".to_string();
        draft.tags[1].front_line_1 = "Mochi".to_string();
        draft.tags[1].back_line_1 = "(718) 555-0142".to_string();
    }
    if let Err(err) = form.set_shape(1, "Heart") {
        println!("  Could not switch tag 2 to Heart: {err}");
    }
    let corrected = &form.draft().tags[1];
    println!(
        "- Tag 2 switched to Heart -> material {} / size {}",
        corrected.material.label(),
        corrected.size.label()
    );

    form.set_base_price_input("12.00");
    form.set_add_image(true);
    form.set_icon(IconFlag::Paw, true);

    if let Some(warning) = form.image_warning() {
        println!("- Image warning: {warning}");
    }

    let totals = form.totals();
    println!(
        "- Pricing: base {} + add-ons {} = {}",
        totals.base_tag_price, totals.add_ons_total, totals.order_total
    );

    {
        let draft = form.draft_mut();
        draft.spelling_confirmed = true;
        draft.signature = "Dana Whitfield".to_string();
    }

    let receipt = match form.submit(&service) {
        Ok(receipt) => receipt,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Order accepted: {} (id {})",
        receipt.order_number, receipt.order_id
    );

    let mut listing = AdminListing::new();
    if let Err(err) = listing.refresh(&service) {
        println!("  Admin listing unavailable: {err}");
        return Ok(());
    }

    println!("\nAdmin listing");
    for record in listing.orders() {
        println!(
            "- {} | {} | {} | {} tag(s) | {} | {}",
            record.order.order_number,
            record.order.customer_name,
            record.order.phone_number,
            record.tags.len(),
            record.order.order_total,
            record.order.status.label()
        );
    }

    listing.set_search("718");
    println!(
        "Search \"718\" matches {} order(s)",
        listing.filtered().len()
    );

    let first_id = listing.orders()[0].order.id.clone();
    if let Err(err) = listing.update_status(&service, &first_id, OrderStatus::InProgress) {
        println!("  Status update failed: {err}");
    } else {
        let counts = listing.status_counts();
        println!(
            "Status change applied: {} pending, {} in progress, {} completed",
            counts.pending, counts.in_progress, counts.completed
        );
    }

    if !skip_export {
        println!("\nCSV export of the current view");
        match listing.export_csv() {
            Ok(csv) => print!("{csv}"),
            Err(err) => return Err(AppError::from(err)),
        }
    }

    Ok(())
}
