//! AI Endpoint Probe - manual integration tests for the SM4RT W4TCH AI API
//!
//! Authenticates once, then runs the selected probes (connection, insights,
//! predictions) in order and reports pass/fail via the process exit code.

use ai_probe::cli::Args;
use ai_probe::client::ApiClient;
use ai_probe::common::logging;
use ai_probe::probes;
use clap::Parser;

#[tokio::main]
async fn main() {
    logging::init_cli();

    let args = Args::parse();

    std::process::exit(run(args).await);
}

async fn run(args: Args) -> i32 {
    let mut client = ApiClient::new(&args.url);

    // Authentication failure is the only fatal error: nothing else is probed.
    if let Err(e) = client.login(&args.email, &args.password).await {
        eprintln!("Error: {e}");
        println!("Failed to authenticate. Exiting.");
        return 1;
    }

    let summary = probes::run(&client, args.test, args.sample_data).await;
    let code = summary.exit_code(args.test);

    if code == 0 {
        println!("\nAll tests completed.");
    }

    code
}
