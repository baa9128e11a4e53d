use crate::config::AppConfig;
use crate::error::Result;
use crate::session::InteractiveSession;
use huckel::core::presets::registry::PresetRegistry;
use tracing::info;

pub fn run(presets: &PresetRegistry, config: &AppConfig) -> Result<()> {
    info!("Starting interactive session.");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    InteractiveSession::new(stdin.lock(), stdout.lock(), presets, config).run()
}
