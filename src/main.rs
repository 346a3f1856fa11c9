use clap::Parser;
use merge::Merge;

use release_performer::{
    Result, cli, config::StepConfig, macros::BuildContext, perform,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_performer")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let mut step_config = cli_args.step_config();
    step_config.merge(StepConfig::load(cli_args.config.as_deref())?);
    let step_config = step_config.with_env_credentials();

    let context =
        BuildContext::from_env().with_definitions(cli_args.definitions()?);

    perform(&context, &step_config).await;

    Ok(())
}
