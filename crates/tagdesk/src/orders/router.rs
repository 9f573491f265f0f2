use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::admin::matches_search;
use super::domain::{OrderId, OrderStatus};
use super::export;
use super::repository::{OrderRecord, OrderRepository, RepositoryError};
use super::service::{OrderIntakeService, OrderServiceError};

/// Router builder exposing the order intake and admin endpoints.
pub fn order_router<R>(service: Arc<OrderIntakeService<R>>) -> Router
where
    R: OrderRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/orders",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/orders/export", get(export_handler::<R>))
        .route(
            "/api/v1/orders/number/:order_number",
            get(get_by_number_handler::<R>),
        )
        .route("/api/v1/orders/:order_id", get(get_handler::<R>))
        .route(
            "/api/v1/orders/:order_id/status",
            put(update_status_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    pub(crate) status: OrderStatus,
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<OrderIntakeService<R>>>,
    axum::Json(submission): axum::Json<super::domain::OrderSubmission>,
) -> Response
where
    R: OrderRepository + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(OrderServiceError::Validation(rejection)) => {
            let payload = json!({
                "error": rejection.to_string(),
                "fields": rejection.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<OrderIntakeService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: OrderRepository + 'static,
{
    match filtered_records(&service, query.q.as_deref()) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<OrderIntakeService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: OrderRepository + 'static,
{
    let records = match filtered_records(&service, query.q.as_deref()) {
        Ok(records) => records,
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
        }
    };

    let borrowed: Vec<&OrderRecord> = records.iter().collect();
    match export::to_csv_string(&borrowed) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv")],
            body,
        )
            .into_response(),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<OrderIntakeService<R>>>,
    Path(order_id): Path<String>,
) -> Response
where
    R: OrderRepository + 'static,
{
    let id = OrderId(order_id);
    lookup_response(service.get(&id))
}

pub(crate) async fn get_by_number_handler<R>(
    State(service): State<Arc<OrderIntakeService<R>>>,
    Path(order_number): Path<String>,
) -> Response
where
    R: OrderRepository + 'static,
{
    lookup_response(service.get_by_number(&order_number))
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<Arc<OrderIntakeService<R>>>,
    Path(order_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    R: OrderRepository + 'static,
{
    let id = OrderId(order_id);
    match service.update_status(&id, request.status) {
        Ok(()) => {
            let payload = json!({
                "order_id": id.0,
                "status": request.status.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(OrderServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn filtered_records<R>(
    service: &OrderIntakeService<R>,
    term: Option<&str>,
) -> Result<Vec<OrderRecord>, OrderServiceError>
where
    R: OrderRepository + 'static,
{
    let mut records = service.list()?;
    if let Some(term) = term {
        records.retain(|record| matches_search(record, term));
    }
    Ok(records)
}

fn lookup_response(result: Result<OrderRecord, OrderServiceError>) -> Response {
    match result {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(OrderServiceError::Repository(RepositoryError::NotFound)) => not_found_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn not_found_response() -> Response {
    let payload = json!({
        "error": "order not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
