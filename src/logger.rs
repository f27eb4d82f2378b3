use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global tracing subscriber. Called once from main before
/// any command runs.
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up the global logger");
}
