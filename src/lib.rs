use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{prelude::*, BufWriter};
use std::path::{Path, PathBuf};
use url::Url;

pub mod bandcamp;
pub mod parse;
pub mod render;
pub mod split;

pub use parse::AlbumRecord;
pub use split::ExtractError;

/// Where to read from and where to write to.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub output: PathBuf,
}

impl Config {
    /// `outfile` is the name without `.html`; it's derived from the URL when absent.
    pub fn new(url: &str, outfile: Option<String>, location: impl AsRef<Path>) -> Result<Self> {
        let url = bandcamp::page_url(url)?;
        let outfile = match outfile {
            Some(x) => x,
            None => bandcamp::default_outfile(&url)?,
        };
        let output = location.as_ref().join(format!("{}.html", outfile));

        Ok(Self { url, output })
    }
}

/// A generated page, still borrowing the header from the fetched document.
#[derive(Debug)]
pub struct Generated<'a> {
    pub header: &'a str,
    pub body: String,
    pub albums: Vec<AlbumRecord>,
}

impl Generated<'_> {
    pub fn to_html(&self) -> String {
        [self.header, self.body.as_str()].concat()
    }
}

/// Replaces the album grid of a fetched page with embedded players.
pub fn generate<'a>(html: &'a str, base: &Url) -> Result<Generated<'a>> {
    let page = split::split(html, split::MARKER)?;
    info!("header is {} bytes, body is {} lines", page.header.len(), page.body.len());

    let albums = parse::albums(&page.body);
    if albums.is_empty() {
        warn!("no albums found on {}", base);
    } else {
        info!("found {} albums", albums.len());
    }

    let body = render::render(&albums, base)?;

    Ok(Generated {
        header: page.header,
        body,
        albums,
    })
}

/// Writes header then body, replacing whatever is at `path`.
pub fn write_page(path: &Path, page: &Generated) -> Result<()> {
    let file = File::create(path).with_context(|| format!("couldn't create {:?}", path))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(page.header.as_bytes())
        .and_then(|()| writer.write_all(page.body.as_bytes()))
        .and_then(|()| writer.flush())
        .with_context(|| format!("couldn't write {:?}", path))?;

    Ok(())
}

pub fn run(config: &Config) -> Result<&Path> {
    let html = bandcamp::fetch(&config.url)?;
    let page = generate(&html, &config.url)?;

    write_page(&config.output, &page)?;
    info!("wrote {} albums to {:?}", page.albums.len(), config.output);

    Ok(config.output.as_path())
}
