use std::io;

use super::repository::OrderRecord;

/// Fixed column set of the admin export.
const EXPORT_HEADERS: [&str; 10] = [
    "Order Number",
    "Customer Name",
    "Phone",
    "Email",
    "Tags Count",
    "Order Total",
    "Payment Method",
    "Date Ordered",
    "Ready By",
    "Status",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv flush failed: {0}")]
    Io(#[from] io::Error),
    #[error("csv output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Write one quoted row per order plus the header row. Zero orders produce
/// the header row alone.
pub fn write_csv<W: io::Write>(orders: &[&OrderRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(EXPORT_HEADERS)?;

    for record in orders {
        let order = &record.order;
        let tags_count = record.tags.len().to_string();
        let order_total = order.order_total.to_string();
        let date_ordered = order.date_ordered.format("%Y-%m-%d").to_string();
        let ready_by = order
            .ready_by
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        csv_writer.write_record([
            order.order_number.as_str(),
            order.customer_name.as_str(),
            order.phone_number.as_str(),
            order.email.as_deref().unwrap_or(""),
            tags_count.as_str(),
            order_total.as_str(),
            order.payment_method.label(),
            date_ordered.as_str(),
            ready_by.as_str(),
            order.status.label(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string(orders: &[&OrderRecord]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(orders, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
