use crate::utils::metrics::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{Span, error, info, info_span};

/// Span and start time of one service operation, closed by
/// [`TracingContext::complete_success`] or [`TracingContext::complete_error`].
pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(component: &'static str, operation_name: &'static str) -> Self {
        let start_time = Instant::now();
        let span = info_span!("operation", component, operation = operation_name);

        span.in_scope(|| info!("Starting operation: {operation_name}"));

        Self { span, start_time }
    }

    pub fn complete_success(&self, metrics: &Metrics, method: Method, message: &str) {
        self.complete_internal(metrics, method, true, message);
    }

    pub fn complete_error(&self, metrics: &Metrics, method: Method, error_message: &str) {
        self.complete_internal(metrics, method, false, error_message);
    }

    fn complete_internal(&self, metrics: &Metrics, method: Method, is_success: bool, message: &str) {
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = self.start_time.elapsed().as_secs_f64();

        self.span.in_scope(|| {
            if is_success {
                info!(duration_secs = elapsed, "✅ Operation completed successfully: {message}");
            } else {
                error!(duration_secs = elapsed, "❌ Operation failed: {message}");
            }
        });

        metrics.record(method, status, elapsed);
    }
}
