//! Orchestrator probes for the catalogue service.
//!
//! The server moves through three phases: starting until the listener is
//! bound, serving, then draining once the run loop returns. Readiness holds
//! only while serving; liveness fails only while draining.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpResponse, get, web};

const STARTING: u8 = 0;
const SERVING: u8 = 1;
const DRAINING: u8 = 2;

/// Lifecycle phase shared between the bootstrap code and the probe handlers.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(STARTING),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the serving phase after the socket is bound.
    pub fn mark_ready(&self) {
        self.phase.store(SERVING, Ordering::Release);
    }

    /// Enter the draining phase; both probes fail from now on.
    pub fn mark_draining(&self) {
        self.phase.store(DRAINING, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.phase.load(Ordering::Acquire) == SERVING
    }

    pub fn is_alive(&self) -> bool {
        self.phase.load(Ordering::Acquire) != DRAINING
    }
}

fn probe_response(passing: bool) -> HttpResponse {
    let mut builder = if passing {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .finish()
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Accepting catalogue requests"),
        (status = 503, description = "Still starting or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is running"),
        (status = 503, description = "Draining before exit")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}
