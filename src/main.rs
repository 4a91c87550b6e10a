use clap::Parser;
use webinar_csv::utils::logger;
use webinar_csv::{convert_with, status_line, CliConfig, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let result = convert_with(LocalStorage::new("."), config.convert_config()).await;

    // Every outcome, failures included, ends here with one line and exit status 0.
    println!("{}", status_line(&result));
}
