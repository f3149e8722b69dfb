use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs a global `tracing` subscriber at INFO level.
///
/// Call once at application startup; the library itself never installs one.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
