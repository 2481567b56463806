use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);

/// Reads an optional env var (or `.env` entry), parsing it when present.
pub fn var_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenvy::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} env var is not valid")),
        Err(_) => Ok(default),
    }
}

/// Timeout applied to every outbound HTTP request.
pub fn http_timeout() -> anyhow::Result<Duration> {
    timeout_from_secs(var_or("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?)
}

fn timeout_from_secs(secs: u64) -> anyhow::Result<Duration> {
    if secs == 0 {
        bail!("HTTP_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_is_rejected() {
        let err = timeout_from_secs(0).unwrap_err();

        assert_eq!(err.to_string(), "HTTP_TIMEOUT_SECS must be greater than zero");
    }

    #[test]
    fn timeout_is_whole_seconds() {
        assert_eq!(timeout_from_secs(30).unwrap(), Duration::from_secs(30));
        assert_eq!(
            timeout_from_secs(DEFAULT_HTTP_TIMEOUT_SECS).unwrap(),
            DEFAULT_HTTP_TIMEOUT
        );
    }
}
