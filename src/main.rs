use {
  anyhow::Context,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  faleproxy::{FetchRequest, Proxy, ProxyOptions, ResponseBody, transform},
  std::{fs, path::PathBuf, process, time::Duration},
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  match Arguments::parse().run() {
    Ok(true) => {}
    Ok(false) => process::exit(1),
    Err(error) => {
      eprintln!("error: {error:#}");
      process::exit(1);
    }
  }
}
