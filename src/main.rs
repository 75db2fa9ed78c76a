use std::process::ExitCode;

use crop_calendar_client::app::request::{parse_args, run};
use crop_calendar_client::error::Result;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!(
            "usage: {} [BASE_URL] crop=NAME [sowing_date=YYYY-MM-DD] [duration_days=N] ...",
            args[0]
        );
        return Ok(ExitCode::SUCCESS);
    }

    let (config, submission) = parse_args(&args[1..]);
    let outcome = run(&config, &submission).await?;

    log::debug!("outcome: {outcome:?}");

    if outcome.is_failure() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
