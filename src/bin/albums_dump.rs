use anyhow::{Context, Result};
use bandcamp_labelview::{bandcamp, parse, split};
use std::env::args;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<()> {
    env_logger::init();

    let url = args().nth(1).context("missing url")?;
    let path = args().nth(2).context("missing path")?;

    let url = bandcamp::page_url(&url)?;
    let html = bandcamp::fetch(&url)?;
    let page = split::split(&html, split::MARKER)?;
    let albums = parse::albums(&page.body);

    let file = File::create(&path).with_context(|| format!("couldn't create {:?}", path))?;
    let w = BufWriter::new(file);

    serde_json::to_writer_pretty(w, &albums)?;

    Ok(())
}
