use chaos_client::config::CHAOS_KEY_ENV;
use chaos_client::utils::logger;
use chaos_client::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::from_args();

    logger::init_cli_logger(config.verbose);

    let env_key = std::env::var(CHAOS_KEY_ENV).ok();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = chaos_client::run(&config, env_key, &mut out).await {
        tracing::debug!("Command failed (Category: {:?}): {:?}", e.category(), e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
