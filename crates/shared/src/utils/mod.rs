mod gracefullshutdown;
mod logs;
mod metrics;
mod tracing_ctx;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::tracing_ctx::TracingContext;
