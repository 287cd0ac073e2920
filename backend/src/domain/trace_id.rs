//! Correlation identifier shared by a request, its log lines and its errors.
//!
//! The [`Trace`](crate::Trace) middleware installs a fresh identifier in
//! task-local storage for each request. Anything running on that task can read
//! it back with [`TraceId::current`]. Spawned tasks and blocking workers do not
//! inherit it; wrap their futures in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Random UUID tagging one request.
///
/// # Examples
/// ```
/// use exoplanet_backend::TraceId;
///
/// fn log_progress(step: &str) {
///     match TraceId::current() {
///         Some(trace_id) => tracing::info!(%trace_id, step, "progress"),
///         None => tracing::info!(step, "progress outside a request"),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|trace_id| *trace_id).ok()
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Run `fut` with `trace_id` installed as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use exoplanet_backend::TraceId;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
    /// let trace_id: TraceId = "3b6f0a52-55a4-4c4e-9d0c-7f9b1f7f3e10".parse().expect("uuid");
    /// let seen = TraceId::scope(trace_id, async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(trace_id));
    /// # });
    /// ```
    pub async fn scope<F: Future>(trace_id: Self, fut: F) -> F::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}
