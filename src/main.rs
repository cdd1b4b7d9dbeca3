use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use tracing::{info, metadata::LevelFilter, Level};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

use backend::rest_api::*;
use backend::tracker::GradeTracker;

mod backend;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let fmt = fmt::layer().with_file(false).with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let addr = std::env::var("GRADE_TRACKER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // one roster for the whole session, shared across workers
    let tracker = web::Data::new(Mutex::new(GradeTracker::new()));

    info!("grade tracker listening on {addr}");

    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(tracker.clone())
            .service(index)
            .service(add_student)
            .service(get_students)
            .service(get_results)
            .service(get_log)
            .service(clear_results)
    })
    .bind(addr)?;

    http_server.run().await
}
