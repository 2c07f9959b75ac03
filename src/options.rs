use super::*;

#[derive(Debug, Clone)]
pub struct ProxyOptions {
  pub max_redirects: usize,
  pub timeout: Duration,
  pub user_agent: String,
}

impl Default for ProxyOptions {
  fn default() -> Self {
    Self {
      max_redirects: 10,
      timeout: Duration::from_secs(30),
      user_agent: concat!("faleproxy/", env!("CARGO_PKG_VERSION")).to_string(),
    }
  }
}

impl ProxyOptions {
  #[must_use]
  pub fn builder() -> ProxyOptionsBuilder {
    ProxyOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ProxyOptionsBuilder {
  inner: ProxyOptions,
}

impl ProxyOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ProxyOptions {
    self.inner
  }

  #[must_use]
  pub fn max_redirects(self, max_redirects: usize) -> Self {
    Self {
      inner: ProxyOptions {
        max_redirects,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn timeout(self, timeout: Duration) -> Self {
    Self {
      inner: ProxyOptions {
        timeout,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
    Self {
      inner: ProxyOptions {
        user_agent: user_agent.into(),
        ..self.inner
      },
    }
  }
}
