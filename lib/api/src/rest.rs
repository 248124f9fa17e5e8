use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use actix_cors::Cors;
use serde::Deserialize;
use std::sync::Arc;
use wisata_core::Error;
use wisata_pipeline::RecommendEngine;

#[derive(Deserialize)]
struct RecommendRequest {
    place_name: Option<String>,
}

pub struct RestApi;

impl RestApi {
    /// Bind and run the HTTP server. The engine must already be fully
    /// built; workers share it read-only.
    pub async fn start(engine: Arc<RecommendEngine>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .route("/recommend", web::post().to(recommend))
                .route("/places", web::get().to(list_places))
                .route("/health", web::get().to(health))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn recommend(
    engine: web::Data<Arc<RecommendEngine>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let place_name = req.place_name.as_deref().unwrap_or("");

    match engine.recommend(place_name) {
        Ok(places) => Ok(HttpResponse::Ok().json(places)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn list_places(engine: web::Data<Arc<RecommendEngine>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(engine.places()))
}

async fn health(engine: web::Data<Arc<RecommendEngine>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "places": engine.place_count(),
        "embedding_dim": engine.embedding_dim(),
    })))
}

fn error_response(err: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        Error::EmptyPlaceName => HttpResponse::BadRequest().json(body),
        Error::PlaceNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
