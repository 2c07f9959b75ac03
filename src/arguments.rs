use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
  /// Print only the rewritten document
  Html,
  /// Print the full response record as JSON
  #[default]
  Json,
}

#[derive(Parser)]
#[command(name = "faleproxy")]
#[command(
  about = "Fetch a page and rewrite Yale to Fale in its visible text",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    value_name = "FILE",
    conflicts_with = "url",
    help = "Transform a local HTML file instead of fetching a URL"
  )]
  file: Option<PathBuf>,
  #[arg(long, value_enum, default_value_t, help = "Output format")]
  format: Format,
  #[arg(long, value_name = "SECS", help = "Request timeout in seconds")]
  timeout: Option<u64>,
  #[arg(value_name = "URL", help = "Page to fetch and rewrite")]
  url: Option<String>,
  #[arg(long, value_name = "AGENT", help = "User-Agent header to send")]
  user_agent: Option<String>,
}

impl Arguments {
  fn options(&self) -> ProxyOptions {
    let mut builder = ProxyOptions::builder();

    if let Some(timeout) = self.timeout {
      builder = builder.timeout(Duration::from_secs(timeout));
    }

    if let Some(user_agent) = &self.user_agent {
      builder = builder.user_agent(user_agent.as_str());
    }

    builder.build()
  }

  /// Returns `false` when the request was answered with an error response.
  pub(crate) fn run(self) -> Result<bool> {
    if let Some(path) = &self.file {
      let html = fs::read_to_string(path).with_context(|| {
        format!("failed to read file from `{}`", path.display())
      })?;

      let transformed = transform(&html).context("failed to transform file")?;

      match self.format {
        Format::Html => println!("{}", transformed.content),
        Format::Json => {
          println!("{}", serde_json::to_string_pretty(&transformed)?)
        }
      }

      return Ok(true);
    }

    let proxy = Proxy::with_options(&self.options())
      .context("failed to create http client")?;

    let response = proxy.handle(&FetchRequest { url: self.url });

    match (self.format, &response.body) {
      (Format::Html, ResponseBody::Success { page, .. }) => {
        println!("{}", page.content)
      }
      (Format::Html, ResponseBody::Failure { error }) => {
        eprintln!("error: {error}")
      }
      (Format::Json, body) => {
        println!("{}", serde_json::to_string_pretty(body)?)
      }
    }

    Ok(response.is_success())
  }
}
