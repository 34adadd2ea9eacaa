use std::env;

use actix::{Addr, SyncArbiter};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use services::db_utils::{get_db_pool, init_schema, AppState, DbActor};

mod schema;
mod services;
mod types;

fn init_db() -> Addr<DbActor> {
    let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "restaurant_data.db".to_owned());
    let pool = get_db_pool(&db_path).expect("Failed to initialize the sqlite connection pool");
    init_schema(&pool).expect("Failed to initialize the database schema");

    SyncArbiter::start(5, move || DbActor(pool.clone()))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db = init_db();
    info!("listening on 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(AppState { db: db.clone() }))
            .service(services::home_page)
            .configure(services::configure_routes)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
