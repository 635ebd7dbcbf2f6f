mod cli;
mod runner;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = cli::parse_cli();
    runner::run_from_cli(cli).await
}
