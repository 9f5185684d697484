use clap::Parser;
use gh_lookup::{gh_lookup_main, GhLookupCli};
use std::process::exit;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = GhLookupCli::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .init();
    match gh_lookup_main(args).await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            exit(1);
        }
    };
}
