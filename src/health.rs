use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::store::MongoStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is alive"))
)]
#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the document store
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready"),
        (status = 503, description = "Document store unreachable")
    )
)]
#[get("/api/ready")]
pub async fn readiness(store: web::Data<MongoStore>) -> impl Responder {
    let database = match store.ping().await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let response = ReadinessResponse {
        status: database,
        database,
    };

    if database == "ok" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
