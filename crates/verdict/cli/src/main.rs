use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    Ok(verdict_cli::run()?)
}
