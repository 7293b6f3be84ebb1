use std::env::args;
use std::path::PathBuf;
use std::process::ExitCode;

use adcwave::Converter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (source, dest) = parse_args();
    match Converter::new().convert(&source, &dest) {
        Ok(summary) => {
            println!(
                "wrote {} frames at {} Hz to {}",
                summary.frames,
                summary.sample_rate,
                dest.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("conversion failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> (PathBuf, PathBuf) {
    let mut args = args().skip(1);
    let source: PathBuf = args
        .next()
        .expect("should get two arguments (adc log, output wav)")
        .into();
    let dest: PathBuf = args
        .next()
        .expect("should get two arguments (adc log, output wav)")
        .into();

    assert!(source.exists(), "adc log must exist: {}", source.display());
    (source, dest)
}
