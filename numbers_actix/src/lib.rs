use actix_web::{web, HttpResponse};
use lazy_static::lazy_static;
use model::NumberBatch;
use prometheus::{register_histogram, Histogram, TextEncoder};
use tracing::{debug, instrument};

lazy_static! {
    static ref BATCH_GENERATION_HISTOGRAM: Histogram = register_histogram!(
        "numbers_actix_batch_generation_duration_seconds",
        "Time spent drawing one batch of random numbers, before the \
         framework serializes it."
    )
    .unwrap();
}

#[instrument(level = "trace")]
async fn numbers() -> HttpResponse {
    let timer = BATCH_GENERATION_HISTOGRAM.start_timer();
    let batch = NumberBatch::draw();
    timer.observe_duration();

    HttpResponse::Ok().json(batch)
}

async fn health() -> HttpResponse {
    debug!("Health check");
    HttpResponse::Ok().finish()
}

async fn metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let mut buffer = String::new();
    if encoder.encode_utf8(&prometheus::gather(), &mut buffer).is_err() {
        return HttpResponse::InternalServerError()
            .body("Failed to encode prometheus metrics");
    }

    HttpResponse::Ok()
        .insert_header(actix_web::http::header::ContentType::plaintext())
        .body(buffer)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/numbers", web::get().to(numbers))
        .route("/health", web::get().to(health))
        .route("/metrics", web::get().to(metrics));
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use model::{BATCH_SIZE, MAX_DRAW};

    use super::*;

    #[actix_web::test]
    async fn test_numbers_returns_a_full_batch() {
        let app = test::init_service(App::new().configure(routes)).await;

        let req = test::TestRequest::get().uri("/numbers").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body: Vec<u32> = test::read_body_json(resp).await;
        assert_eq!(body.len(), BATCH_SIZE);
        assert!(body.iter().all(|n| *n <= MAX_DRAW));
    }

    #[actix_web::test]
    async fn test_consecutive_batches_differ() {
        let app = test::init_service(App::new().configure(routes)).await;

        let req = test::TestRequest::get().uri("/numbers").to_request();
        let first: Vec<u32> = test::call_and_read_body_json(&app, req).await;
        let req = test::TestRequest::get().uri("/numbers").to_request();
        let second: Vec<u32> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn test_unknown_route_is_a_404() {
        let app = test::init_service(App::new().configure(routes)).await;

        let req = test::TestRequest::get().uri("/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health_responds() {
        let app = test::init_service(App::new().configure(routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_metrics_exposes_generation_histogram() {
        let app = test::init_service(App::new().configure(routes)).await;

        // The histogram is registered on first use.
        let req = test::TestRequest::get().uri("/numbers").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body
            .contains("numbers_actix_batch_generation_duration_seconds"));
    }
}
