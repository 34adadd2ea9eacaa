use diesel::Insertable;

use crate::schema::customer_orders;
use crate::schema::customers;
use crate::schema::menu_items;
use crate::schema::ordered_items;

#[derive(Insertable, Clone)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub full_name: String,
    pub contact_number: String,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem {
    pub dish_name: String,
    pub cost: f64,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = customer_orders)]
pub struct NewOrder {
    pub customer_id: i64,
    pub order_notes: String,
    pub order_time: i64,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = ordered_items)]
pub struct NewOrderedItem {
    pub order_id: i64,
    pub menu_item_id: i64,
}
