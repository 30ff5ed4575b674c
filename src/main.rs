mod app;
mod cli;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let (pool, args) = cli.command.into_parts();
    let config = args.to_config(pool);

    let _guard = bluegreen_core::lifecycle::logging::init_logging(
        pool,
        &args.log_level,
        config.logging_to_file,
        config.log_dir.as_deref(),
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let application = app::Application::build(config)?;
        application.serve().await
    })
}
