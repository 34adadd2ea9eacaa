use actix::Message;
use serde::Deserialize;

use crate::services::db_models::{Customer, MenuItem, OrderDetails, OrderReceipt};
use crate::types::ApiError;

#[derive(Message)]
#[rtype(result = "Result<i64, ApiError>")]
pub struct AddCustomer {
    pub full_name: String,
    pub contact_number: String,
}

#[derive(Message)]
#[rtype(result = "Result<Customer, ApiError>")]
pub struct FetchCustomer(pub i64);

#[derive(Message)]
#[rtype(result = "Result<(), ApiError>")]
pub struct UpdateCustomer {
    pub id: i64,
    pub full_name: String,
    pub contact_number: String,
}

#[derive(Message)]
#[rtype(result = "Result<(), ApiError>")]
pub struct DeleteCustomer(pub i64);

#[derive(Message)]
#[rtype(result = "Result<i64, ApiError>")]
pub struct AddMenuItem {
    pub dish_name: String,
    pub cost: f64,
}

#[derive(Message)]
#[rtype(result = "Result<MenuItem, ApiError>")]
pub struct FetchMenuItem(pub i64);

#[derive(Message)]
#[rtype(result = "Result<(), ApiError>")]
pub struct UpdateMenuItem {
    pub id: i64,
    pub dish_name: String,
    pub cost: f64,
}

#[derive(Message)]
#[rtype(result = "Result<(), ApiError>")]
pub struct DeleteMenuItem(pub i64);

/// One requested line: the dish is referenced by exact name, and the
/// client-supplied cost is reconciled against the canonical menu cost.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderedDish {
    pub dish_name: String,
    pub cost: f64,
}

#[derive(Message)]
#[rtype(result = "Result<OrderReceipt, ApiError>")]
pub struct PlaceOrder {
    pub customer_id: i64,
    pub items: Vec<OrderedDish>,
    pub order_notes: Option<String>,
}

#[derive(Message)]
#[rtype(result = "Result<OrderDetails, ApiError>")]
pub struct FetchOrder(pub i64);

#[derive(Message)]
#[rtype(result = "Result<OrderReceipt, ApiError>")]
pub struct ReviseOrder {
    pub id: i64,
    pub customer_id: i64,
    pub items: Vec<OrderedDish>,
    pub order_notes: Option<String>,
}

#[derive(Message)]
#[rtype(result = "Result<(), ApiError>")]
pub struct RemoveOrder(pub i64);
