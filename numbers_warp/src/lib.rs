use lazy_static::lazy_static;
use model::NumberBatch;
use prometheus::{register_histogram, Histogram, TextEncoder};
use tracing::debug;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

lazy_static! {
    static ref BATCH_GENERATION_HISTOGRAM: Histogram = register_histogram!(
        "numbers_warp_batch_generation_duration_seconds",
        "Time spent drawing one batch of random numbers, before the \
         framework serializes it."
    )
    .unwrap();
}

async fn numbers() -> Result<Box<dyn Reply>, Rejection> {
    let timer = BATCH_GENERATION_HISTOGRAM.start_timer();
    let batch = NumberBatch::draw();
    timer.observe_duration();

    Ok(Box::new(warp::reply::json(&batch)))
}

async fn health() -> Result<Box<dyn Reply>, Rejection> {
    debug!("Health check");
    Ok(Box::new(StatusCode::OK))
}

async fn metrics() -> Result<Box<dyn Reply>, Rejection> {
    let encoder = TextEncoder::new();
    let mut buffer = String::new();
    if encoder.encode_utf8(&prometheus::gather(), &mut buffer).is_err() {
        return Ok(Box::new(warp::reply::with_status(
            "Failed to encode prometheus metrics",
            StatusCode::INTERNAL_SERVER_ERROR,
        )));
    }

    Ok(Box::new(buffer))
}

pub fn routes() -> BoxedFilter<(Box<dyn Reply>,)> {
    let numbers = warp::path("numbers")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(numbers);
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(health);
    let metrics = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(metrics);

    numbers.or(health).unify().or(metrics).unify().boxed()
}
