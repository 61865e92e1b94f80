use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    illink_repro::cli::run()
}
