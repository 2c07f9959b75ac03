use super::*;

/// Retrieves the raw HTML behind a URL.
pub trait Fetcher {
  fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP(S) fetcher. Failures are returned as they happen; nothing
/// is retried.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  client: reqwest::blocking::Client,
}

impl HttpFetcher {
  pub fn new(options: &ProxyOptions) -> Result<Self, FetchError> {
    let client = reqwest::blocking::Client::builder()
      .user_agent(options.user_agent.as_str())
      .timeout(options.timeout)
      .redirect(reqwest::redirect::Policy::limited(options.max_redirects))
      .build()
      .map_err(|source| FetchError::Client { source })?;

    Ok(Self { client })
  }
}

impl Fetcher for HttpFetcher {
  fn fetch(&self, url: &str) -> Result<String, FetchError> {
    let target = parse_url(url)?;

    info!(%target, "fetching page");

    let response = self.client.get(target).send().map_err(|source| {
      FetchError::Request {
        url: url.to_string(),
        source,
      }
    })?;

    let status = response.status();

    if !status.is_success() {
      return Err(FetchError::Status {
        url: url.to_string(),
        status: status.as_u16(),
      });
    }

    response.text().map_err(|source| FetchError::Body {
      url: url.to_string(),
      source,
    })
  }
}

pub(crate) fn parse_url(url: &str) -> Result<Url, FetchError> {
  let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
    url: url.to_string(),
    source,
  })?;

  match parsed.scheme() {
    "http" | "https" => Ok(parsed),
    scheme => Err(FetchError::UnsupportedScheme {
      scheme: scheme.to_string(),
    }),
  }
}
