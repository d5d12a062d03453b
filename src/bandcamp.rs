use anyhow::{Context, Result};
use log::{debug, info};
use url::Url;

/// Parses a discography page URL, dropping any trailing slashes first.
pub fn page_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim_end_matches('/');
    Url::parse(trimmed).with_context(|| format!("invalid URL {:?}", trimmed))
}

/// Fetches a page with a single blocking GET.
pub fn fetch(url: &Url) -> Result<String> {
    info!("fetching {}", url);
    let response = attohttpc::get(url)
        .send()
        .with_context(|| format!("couldn't reach {}", url))?;
    debug!("{} -> {}", url, response.status());
    let html = response
        .error_for_status()
        .with_context(|| format!("bad response from {}", url))?
        .text()?;
    info!("received {} bytes", html.len());
    Ok(html)
}

/// Output name used when none is given.
///
/// `artist.bandcamp.com` gives `artist`; for a custom domain like
/// `music.label.com` the second label, `label`, is used.
pub fn default_outfile(url: &Url) -> Result<String> {
    let host = url.host_str().context("URL has no host")?;
    let labels: Vec<_> = host.split('.').collect();

    let name = match labels.get(1) {
        Some(&"bandcamp") | None => labels[0],
        Some(second) => *second,
    };
    Ok(name.to_string())
}
