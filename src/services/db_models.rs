use diesel::Queryable;
use serde::Serialize;

#[derive(Queryable, Debug, Serialize)]
pub struct Customer {
    pub id: i64,
    pub full_name: String,
    pub contact_number: String,
}

#[derive(Queryable, Debug, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub dish_name: String,
    pub cost: f64,
}

#[derive(Queryable, Debug, Serialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub order_notes: Option<String>,
    pub order_time: i64,
}

/// One line of an order as returned to the caller. The cost is resolved at
/// read time by joining to the current menu item row, not pinned at order
/// time.
#[derive(Debug, Serialize)]
pub struct OrderLine {
    pub dish_name: String,
    pub cost: f64,
}

#[derive(Debug, Serialize)]
pub struct OrderDetails {
    pub id: i64,
    pub customer_id: i64,
    pub order_notes: Option<String>,
    pub items: Vec<OrderLine>,
}

/// Result of placing or revising an order: the order id plus any price
/// reconciliation notes generated for mismatched client-supplied costs.
#[derive(Debug)]
pub struct OrderReceipt {
    pub id: i64,
    pub price_changes: Vec<String>,
}
