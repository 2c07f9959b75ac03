use super::*;

/// An inbound proxy request. `url` is optional so that a missing field can
/// be reported instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
  pub url: Option<String>,
}

impl FetchRequest {
  pub fn new(url: impl Into<String>) -> Self {
    Self {
      url: Some(url.into()),
    }
  }
}

/// The transformed page together with the URL it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proxied {
  pub content: String,
  pub title: String,
  pub original_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
  Success {
    success: bool,
    #[serde(flatten)]
    page: Proxied,
  },
  Failure {
    error: String,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  pub status: u16,
  pub body: ResponseBody,
}

impl Response {
  pub const BAD_REQUEST: u16 = 400;
  pub const INTERNAL_SERVER_ERROR: u16 = 500;
  pub const OK: u16 = 200;

  fn failure(status: u16, error: String) -> Self {
    Self {
      status,
      body: ResponseBody::Failure { error },
    }
  }

  pub fn is_success(&self) -> bool {
    self.status == Self::OK
  }

  fn success(page: Proxied) -> Self {
    Self {
      status: Self::OK,
      body: ResponseBody::Success {
        success: true,
        page,
      },
    }
  }
}

/// Fetches pages through a [`Fetcher`] and rewrites them.
#[derive(Debug, Clone)]
pub struct Proxy<F> {
  fetcher: F,
}

impl Proxy<HttpFetcher> {
  pub fn with_options(options: &ProxyOptions) -> Result<Self> {
    Ok(Self::new(HttpFetcher::new(options)?))
  }
}

impl<F: Fetcher> Proxy<F> {
  /// Validates the request, runs [`Proxy::proxy`] and maps the outcome to a
  /// status code and JSON body.
  pub fn handle(&self, request: &FetchRequest) -> Response {
    let result = match request.url.as_deref() {
      Some(url) if !url.is_empty() => self.proxy(url),
      _ => Err(Error::MissingUrl),
    };

    match result {
      Ok(page) => Response::success(page),
      Err(Error::MissingUrl) => {
        warn!("rejected request without url");
        Response::failure(Response::BAD_REQUEST, Error::MissingUrl.to_string())
      }
      Err(error) => {
        error!(%error, "failed to fetch content");
        Response::failure(
          Response::INTERNAL_SERVER_ERROR,
          format!("Failed to fetch content: {error}"),
        )
      }
    }
  }

  pub fn fetcher(&self) -> &F {
    &self.fetcher
  }

  pub fn new(fetcher: F) -> Self {
    Self { fetcher }
  }

  pub fn proxy(&self, url: &str) -> Result<Proxied> {
    let html = self.fetcher.fetch(url)?;

    let Transformed { content, title } = transform(&html)?;

    Ok(Proxied {
      content,
      title,
      original_url: url.to_string(),
    })
  }
}
