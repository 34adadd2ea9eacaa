use actix_web::{get, web, HttpResponse, Responder};

pub mod db_models;
pub mod db_utils;
pub mod insertable;
pub mod messages;
pub mod sqlite_handling;

#[get("/")]
pub async fn home_page() -> impl Responder {
    HttpResponse::Ok().body("Restaurant management service")
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .service(customers_route::create_customer)
            .service(customers_route::get_customer)
            .service(customers_route::update_customer)
            .service(customers_route::delete_customer),
    )
    .service(
        web::scope("/menu-items")
            .service(menu_route::create_menu_item)
            .service(menu_route::get_menu_item)
            .service(menu_route::update_menu_item)
            .service(menu_route::delete_menu_item),
    )
    .service(
        web::scope("/orders")
            .service(orders_route::create_order)
            .service(orders_route::get_order)
            .service(orders_route::update_order)
            .service(orders_route::delete_order),
    );
}

#[derive(serde::Serialize)]
pub struct CreatedBody {
    pub id: i64,
    pub message: String,
}

#[derive(serde::Serialize)]
pub struct MessageBody {
    pub message: String,
}

// sub-route "/customers"
pub mod customers_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{delete, get, post, put, HttpResponse, Responder, ResponseError};
    use serde::Deserialize;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{AddCustomer, DeleteCustomer, FetchCustomer, UpdateCustomer};
    use crate::services::{CreatedBody, MessageBody};

    #[derive(Deserialize)]
    pub struct CustomerBody {
        pub full_name: String,
        pub contact_number: String,
    }

    #[post("")]
    pub async fn create_customer(state: Data<AppState>, body: Json<CustomerBody>) -> impl Responder {
        match state
            .db
            .send(AddCustomer {
                full_name: body.full_name.clone(),
                contact_number: body.contact_number.clone(),
            })
            .await
        {
            Ok(Ok(id)) => HttpResponse::Ok().json(CreatedBody {
                id,
                message: "Customer created successfully.".to_owned(),
            }),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[get("/{id}")]
    pub async fn get_customer(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.db.send(FetchCustomer(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[put("/{id}")]
    pub async fn update_customer(
        state: Data<AppState>,
        path: Path<i64>,
        body: Json<CustomerBody>,
    ) -> impl Responder {
        match state
            .db
            .send(UpdateCustomer {
                id: path.into_inner(),
                full_name: body.full_name.clone(),
                contact_number: body.contact_number.clone(),
            })
            .await
        {
            Ok(Ok(())) => HttpResponse::Ok().json(MessageBody {
                message: "Customer updated successfully.".to_owned(),
            }),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[delete("/{id}")]
    pub async fn delete_customer(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.db.send(DeleteCustomer(path.into_inner())).await {
            Ok(Ok(())) => HttpResponse::Ok().json(MessageBody {
                message: "Customer deleted successfully.".to_owned(),
            }),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }
}

// sub-route "/menu-items"
pub mod menu_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{delete, get, post, put, HttpResponse, Responder, ResponseError};
    use serde::Deserialize;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{AddMenuItem, DeleteMenuItem, FetchMenuItem, UpdateMenuItem};
    use crate::services::{CreatedBody, MessageBody};

    #[derive(Deserialize)]
    pub struct MenuItemBody {
        pub dish_name: String,
        pub cost: f64,
    }

    #[post("")]
    pub async fn create_menu_item(
        state: Data<AppState>,
        body: Json<MenuItemBody>,
    ) -> impl Responder {
        match state
            .db
            .send(AddMenuItem {
                dish_name: body.dish_name.clone(),
                cost: body.cost,
            })
            .await
        {
            Ok(Ok(id)) => HttpResponse::Ok().json(CreatedBody {
                id,
                message: "Menu item added successfully.".to_owned(),
            }),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[get("/{id}")]
    pub async fn get_menu_item(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.db.send(FetchMenuItem(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[put("/{id}")]
    pub async fn update_menu_item(
        state: Data<AppState>,
        path: Path<i64>,
        body: Json<MenuItemBody>,
    ) -> impl Responder {
        match state
            .db
            .send(UpdateMenuItem {
                id: path.into_inner(),
                dish_name: body.dish_name.clone(),
                cost: body.cost,
            })
            .await
        {
            Ok(Ok(())) => HttpResponse::Ok().json(MessageBody {
                message: "Menu item updated successfully.".to_owned(),
            }),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[delete("/{id}")]
    pub async fn delete_menu_item(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.db.send(DeleteMenuItem(path.into_inner())).await {
            Ok(Ok(())) => HttpResponse::Ok().json(MessageBody {
                message: "Menu item deleted successfully.".to_owned(),
            }),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }
}

// sub-route "/orders"
pub mod orders_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{delete, get, post, put, HttpResponse, Responder, ResponseError};
    use serde::{Deserialize, Serialize};

    use crate::services::db_models::OrderReceipt;
    use crate::services::db_utils::AppState;
    use crate::services::messages::{
        FetchOrder, OrderedDish, PlaceOrder, RemoveOrder, ReviseOrder,
    };
    use crate::services::MessageBody;

    #[derive(Deserialize)]
    pub struct OrderBody {
        pub customer_id: i64,
        pub items: Vec<OrderedDish>,
        pub order_notes: Option<String>,
    }

    #[derive(Serialize)]
    pub struct OrderReceiptBody {
        pub id: i64,
        pub message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub price_changes: Option<Vec<String>>,
    }

    fn receipt_body(receipt: OrderReceipt, message: &str) -> OrderReceiptBody {
        OrderReceiptBody {
            id: receipt.id,
            message: message.to_owned(),
            price_changes: if receipt.price_changes.is_empty() {
                None
            } else {
                Some(receipt.price_changes)
            },
        }
    }

    #[post("")]
    pub async fn create_order(state: Data<AppState>, body: Json<OrderBody>) -> impl Responder {
        let order = body.into_inner();

        match state
            .db
            .send(PlaceOrder {
                customer_id: order.customer_id,
                items: order.items,
                order_notes: order.order_notes,
            })
            .await
        {
            Ok(Ok(receipt)) => {
                HttpResponse::Ok().json(receipt_body(receipt, "Order created successfully."))
            }
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[get("/{id}")]
    pub async fn get_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.db.send(FetchOrder(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[put("/{id}")]
    pub async fn update_order(
        state: Data<AppState>,
        path: Path<i64>,
        body: Json<OrderBody>,
    ) -> impl Responder {
        let order = body.into_inner();

        match state
            .db
            .send(ReviseOrder {
                id: path.into_inner(),
                customer_id: order.customer_id,
                items: order.items,
                order_notes: order.order_notes,
            })
            .await
        {
            Ok(Ok(receipt)) => {
                HttpResponse::Ok().json(receipt_body(receipt, "Order updated successfully."))
            }
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[delete("/{id}")]
    pub async fn delete_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.db.send(RemoveOrder(path.into_inner())).await {
            Ok(Ok(())) => HttpResponse::Ok().json(MessageBody {
                message: "Order deleted successfully.".to_owned(),
            }),
            Ok(Err(err)) => err.error_response(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }
}
