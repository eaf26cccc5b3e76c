use anyhow::{Context, Result};
use employee_directory::app::App;
use employee_directory::cli;
use employee_directory::config::Config;
use employee_directory::logger::{level_for_verbosity, CustomLogger};

fn main() -> Result<()> {
    let matches = cli::build().get_matches();
    let options = cli::parse(&matches)?;

    CustomLogger::init(level_for_verbosity(options.verbosity))?;

    let mut config = Config::new();
    config.load(options.config_dir.as_deref())?;
    if let Some(path) = config.file_path() {
        log::debug!("Using configuration at {}", path.display());
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create runtime")?
        .block_on(App::start(config, options.command))
}
