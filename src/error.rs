#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Fetch(#[from] FetchError),
  #[error("URL is required")]
  MissingUrl,
  #[error("failed to parse document: {reason}")]
  Parse { reason: String },
  #[error("failed to serialize document: {source}")]
  Serialize {
    #[from]
    source: std::io::Error,
  },
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("failed to read response body from `{url}`: {source}")]
  Body {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("failed to build http client: {source}")]
  Client {
    #[source]
    source: reqwest::Error,
  },
  #[error("invalid url `{url}`: {source}")]
  InvalidUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },
  #[error("request to `{url}` failed: {source}")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("request to `{url}` returned status {status}")]
  Status { url: String, status: u16 },
  #[error("unsupported url scheme `{scheme}` (expected http or https)")]
  UnsupportedScheme { scheme: String },
}
