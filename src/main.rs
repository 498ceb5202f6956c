use std::env;
use std::process::ExitCode;

use charmfinder::cli;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charmfinder=info,tower_http=info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    ExitCode::from(cli::run_with_args(&args))
}
