use actix::Handler;
use chrono::Utc;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error};
use diesel::{
    ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SqliteConnection,
};
use tracing::debug;

use crate::services::db_models::{Customer, MenuItem, Order, OrderDetails, OrderLine, OrderReceipt};
use crate::services::db_utils::{DbActor, SqlitePool};
use crate::services::insertable::{NewCustomer, NewMenuItem, NewOrder, NewOrderedItem};
use crate::services::messages::{
    AddCustomer, AddMenuItem, DeleteCustomer, DeleteMenuItem, FetchCustomer, FetchMenuItem,
    FetchOrder, OrderedDish, PlaceOrder, RemoveOrder, ReviseOrder, UpdateCustomer, UpdateMenuItem,
};
use crate::types::ApiError;

fn establish_connection(
    pool: &SqlitePool,
) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, ApiError> {
    pool.get().map_err(|_| ApiError::Pool)
}

fn customer_exists(conn: &mut SqliteConnection, target: i64) -> Result<bool, ApiError> {
    use crate::schema::customers::{dsl::customers, id};

    let found = customers
        .find(target)
        .select(id)
        .first::<i64>(conn)
        .optional()?;
    Ok(found.is_some())
}

fn menu_item_exists(conn: &mut SqliteConnection, target: i64) -> Result<bool, ApiError> {
    use crate::schema::menu_items::{dsl::menu_items, id};

    let found = menu_items
        .find(target)
        .select(id)
        .first::<i64>(conn)
        .optional()?;
    Ok(found.is_some())
}

fn order_exists(conn: &mut SqliteConnection, target: i64) -> Result<bool, ApiError> {
    use crate::schema::customer_orders::{dsl::customer_orders, id};

    let found = customer_orders
        .find(target)
        .select(id)
        .first::<i64>(conn)
        .optional()?;
    Ok(found.is_some())
}

/// Resolves each requested dish by exact name, reconciles the client-supplied
/// cost against the canonical menu cost, and inserts one line row per request
/// entry. Duplicate dish names produce independent rows. Returns the
/// reconciliation notes for any mismatched costs.
fn insert_order_lines(
    conn: &mut SqliteConnection,
    target_order: i64,
    requested: &[OrderedDish],
) -> Result<Vec<String>, ApiError> {
    use crate::schema::menu_items::{cost, dish_name, dsl::menu_items, id};
    use crate::schema::ordered_items::dsl::ordered_items;

    let mut price_changes = vec![];

    for item in requested {
        let (menu_item_id, canonical_cost) = menu_items
            .filter(dish_name.eq(&item.dish_name))
            .select((id, cost))
            .first::<(i64, f64)>(conn)
            .optional()?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Menu item '{}' not found.", item.dish_name))
            })?;

        if item.cost != canonical_cost {
            debug!(
                dish = %item.dish_name,
                submitted = item.cost,
                canonical = canonical_cost,
                "reconciling client-supplied cost"
            );
            // {:?} so whole-number costs render as "8.0", not "8"
            price_changes.push(format!(
                "Menu item '{}' cost updated from {:?} to {:?}.",
                item.dish_name, item.cost, canonical_cost
            ));
        }

        diesel::insert_into(ordered_items)
            .values(NewOrderedItem {
                order_id: target_order,
                menu_item_id,
            })
            .execute(conn)?;
    }

    Ok(price_changes)
}

impl Handler<AddCustomer> for DbActor {
    type Result = Result<i64, ApiError>;

    fn handle(&mut self, msg: AddCustomer, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customers::{dsl::customers, id};

        let mut conn = establish_connection(&self.0)?;

        diesel::insert_into(customers)
            .values(NewCustomer {
                full_name: msg.full_name,
                contact_number: msg.contact_number,
            })
            .returning(id)
            .get_result::<i64>(&mut conn)
            .map_err(|err| match err {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => ApiError::Conflict(
                    "Customer with this contact number already exists.".to_owned(),
                ),
                other => other.into(),
            })
    }
}

impl Handler<FetchCustomer> for DbActor {
    type Result = Result<Customer, ApiError>;

    fn handle(&mut self, msg: FetchCustomer, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customers::dsl::customers;

        let mut conn = establish_connection(&self.0)?;

        customers
            .find(msg.0)
            .first::<Customer>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound("Customer not found.".to_owned()))
    }
}

impl Handler<UpdateCustomer> for DbActor {
    type Result = Result<(), ApiError>;

    fn handle(&mut self, msg: UpdateCustomer, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customers::{contact_number, dsl::customers, full_name};

        let mut conn = establish_connection(&self.0)?;

        if !customer_exists(&mut conn, msg.id)? {
            return Err(ApiError::NotFound("Customer not found.".to_owned()));
        }

        diesel::update(customers.find(msg.id))
            .set((
                full_name.eq(msg.full_name),
                contact_number.eq(msg.contact_number),
            ))
            .execute(&mut conn)
            .map_err(|err| match err {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => ApiError::Conflict(
                    "Customer with this contact number already exists.".to_owned(),
                ),
                other => other.into(),
            })?;

        Ok(())
    }
}

impl Handler<DeleteCustomer> for DbActor {
    type Result = Result<(), ApiError>;

    fn handle(&mut self, msg: DeleteCustomer, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customers::dsl::customers;

        let mut conn = establish_connection(&self.0)?;

        if !customer_exists(&mut conn, msg.0)? {
            return Err(ApiError::NotFound("Customer not found.".to_owned()));
        }

        // No cascade: orders referencing this customer are left orphaned.
        diesel::delete(customers.find(msg.0)).execute(&mut conn)?;

        Ok(())
    }
}

impl Handler<AddMenuItem> for DbActor {
    type Result = Result<i64, ApiError>;

    fn handle(&mut self, msg: AddMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::{dsl::menu_items, id};

        let mut conn = establish_connection(&self.0)?;

        diesel::insert_into(menu_items)
            .values(NewMenuItem {
                dish_name: msg.dish_name,
                cost: msg.cost,
            })
            .returning(id)
            .get_result::<i64>(&mut conn)
            .map_err(|err| match err {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => ApiError::Conflict(
                    "Menu item with this dish name already exists.".to_owned(),
                ),
                other => other.into(),
            })
    }
}

impl Handler<FetchMenuItem> for DbActor {
    type Result = Result<MenuItem, ApiError>;

    fn handle(&mut self, msg: FetchMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::dsl::menu_items;

        let mut conn = establish_connection(&self.0)?;

        menu_items
            .find(msg.0)
            .first::<MenuItem>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound("Menu item not found.".to_owned()))
    }
}

impl Handler<UpdateMenuItem> for DbActor {
    type Result = Result<(), ApiError>;

    fn handle(&mut self, msg: UpdateMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::{cost, dish_name, dsl::menu_items};

        let mut conn = establish_connection(&self.0)?;

        if !menu_item_exists(&mut conn, msg.id)? {
            return Err(ApiError::NotFound("Menu item not found.".to_owned()));
        }

        diesel::update(menu_items.find(msg.id))
            .set((dish_name.eq(msg.dish_name), cost.eq(msg.cost)))
            .execute(&mut conn)
            .map_err(|err| match err {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => ApiError::Conflict(
                    "Menu item with this dish name already exists.".to_owned(),
                ),
                other => other.into(),
            })?;

        Ok(())
    }
}

impl Handler<DeleteMenuItem> for DbActor {
    type Result = Result<(), ApiError>;

    fn handle(&mut self, msg: DeleteMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::dsl::menu_items;

        let mut conn = establish_connection(&self.0)?;

        if !menu_item_exists(&mut conn, msg.0)? {
            return Err(ApiError::NotFound("Menu item not found.".to_owned()));
        }

        diesel::delete(menu_items.find(msg.0)).execute(&mut conn)?;

        Ok(())
    }
}

impl Handler<PlaceOrder> for DbActor {
    type Result = Result<OrderReceipt, ApiError>;

    fn handle(&mut self, msg: PlaceOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customer_orders::{dsl::customer_orders, id};

        let mut conn = establish_connection(&self.0)?;

        // Header insert and line-item inserts succeed or fail as a unit; a
        // failed dish lookup rolls back the header.
        conn.immediate_transaction(|trx_conn| {
            if !customer_exists(trx_conn, msg.customer_id)? {
                return Err(ApiError::NotFound("Customer not found.".to_owned()));
            }

            let order_id = diesel::insert_into(customer_orders)
                .values(NewOrder {
                    customer_id: msg.customer_id,
                    order_notes: msg.order_notes.unwrap_or_default(),
                    order_time: Utc::now().timestamp(),
                })
                .returning(id)
                .get_result::<i64>(trx_conn)?;

            let price_changes = insert_order_lines(trx_conn, order_id, &msg.items)?;

            Ok(OrderReceipt {
                id: order_id,
                price_changes,
            })
        })
    }
}

impl Handler<FetchOrder> for DbActor {
    type Result = Result<OrderDetails, ApiError>;

    fn handle(&mut self, msg: FetchOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customer_orders::dsl::customer_orders;
        use crate::schema::menu_items::{cost, dish_name, dsl::menu_items};
        use crate::schema::ordered_items::{dsl::ordered_items, order_id};

        let mut conn = establish_connection(&self.0)?;

        let header = customer_orders
            .find(msg.0)
            .first::<Order>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound("Order not found.".to_owned()))?;

        let lines = ordered_items
            .inner_join(menu_items)
            .filter(order_id.eq(msg.0))
            .select((dish_name, cost))
            .get_results::<(String, f64)>(&mut conn)?;

        Ok(OrderDetails {
            id: header.id,
            customer_id: header.customer_id,
            order_notes: header.order_notes,
            items: lines
                .into_iter()
                .map(|(name, current_cost)| OrderLine {
                    dish_name: name,
                    cost: current_cost,
                })
                .collect(),
        })
    }
}

impl Handler<ReviseOrder> for DbActor {
    type Result = Result<OrderReceipt, ApiError>;

    fn handle(&mut self, msg: ReviseOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customer_orders::{customer_id, dsl::customer_orders, order_notes};
        use crate::schema::ordered_items::{dsl::ordered_items, order_id};

        let mut conn = establish_connection(&self.0)?;

        // Full replace: the header's customer and notes are overwritten and
        // every line item is rebuilt. order_time is never touched.
        conn.immediate_transaction(|trx_conn| {
            if !order_exists(trx_conn, msg.id)? {
                return Err(ApiError::NotFound("Order not found.".to_owned()));
            }

            diesel::update(customer_orders.find(msg.id))
                .set((
                    customer_id.eq(msg.customer_id),
                    order_notes.eq(msg.order_notes.unwrap_or_default()),
                ))
                .execute(trx_conn)?;

            diesel::delete(ordered_items.filter(order_id.eq(msg.id))).execute(trx_conn)?;

            let price_changes = insert_order_lines(trx_conn, msg.id, &msg.items)?;

            Ok(OrderReceipt {
                id: msg.id,
                price_changes,
            })
        })
    }
}

impl Handler<RemoveOrder> for DbActor {
    type Result = Result<(), ApiError>;

    fn handle(&mut self, msg: RemoveOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::customer_orders::dsl::customer_orders;
        use crate::schema::ordered_items::{dsl::ordered_items, order_id};

        let mut conn = establish_connection(&self.0)?;

        conn.immediate_transaction(|trx_conn| {
            if !order_exists(trx_conn, msg.0)? {
                return Err(ApiError::NotFound("Order not found.".to_owned()));
            }

            diesel::delete(ordered_items.filter(order_id.eq(msg.0))).execute(trx_conn)?;
            diesel::delete(customer_orders.find(msg.0)).execute(trx_conn)?;

            Ok(())
        })
    }
}
