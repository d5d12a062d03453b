//! Line-based scraping of the album grid.
use log::{debug, warn};
use serde::Serialize;

const ID_MARKER: &str = "album-";
const HREF_MARKER: &str = "/album/";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AlbumRecord {
    pub id: String,
    pub href: String,
}

impl AlbumRecord {
    pub fn new(id: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
        }
    }
}

fn after_last<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.rfind(marker).map(|i| &line[i + marker.len()..])
}

fn get_id(line: &str) -> Option<&str> {
    after_last(line, ID_MARKER).map(|x| x.trim_end_matches('"'))
}

fn get_href(line: &str) -> Option<&str> {
    after_last(line, HREF_MARKER).map(|x| x.trim_end_matches(&['"', '\'', '>'][..]))
}

/// Album ids, one for every line mentioning `album-`.
pub fn identifiers<'a>(body: &[&'a str]) -> Vec<&'a str> {
    body.iter().filter_map(|&line| get_id(line)).collect()
}

/// Album link fragments, one for every line mentioning `/album/`.
pub fn hrefs<'a>(body: &[&'a str]) -> Vec<&'a str> {
    body.iter().filter_map(|&line| get_href(line)).collect()
}

/// Pairs ids with hrefs by position, stopping at the shorter list.
pub fn zip_records(ids: &[&str], hrefs: &[&str]) -> Vec<AlbumRecord> {
    if ids.len() != hrefs.len() {
        warn!(
            "found {} album ids but {} album links, pairing the first {}",
            ids.len(),
            hrefs.len(),
            ids.len().min(hrefs.len())
        );
    }

    ids.iter()
        .zip(hrefs)
        .map(|(&id, &href)| AlbumRecord::new(id, href))
        .collect()
}

/// Walks the body once, closing each album id with the next link after it.
///
/// A line holding a link is only ever read as a link.
pub fn albums(body: &[&str]) -> Vec<AlbumRecord> {
    let mut res = vec![];
    let mut pending: Option<&str> = None;

    for (i, line) in body.iter().enumerate() {
        // slugs like `debut-album-2020` also contain the id marker
        if let Some(href) = get_href(line) {
            match pending.take() {
                Some(id) => res.push(AlbumRecord::new(id, href)),
                None => debug!("link {:?} on body line {} has no album id", href, i),
            }
        } else if let Some(id) = get_id(line) {
            if let Some(dropped) = pending.replace(id) {
                warn!("album {:?} has no link, skipping", dropped);
            }
        }
    }

    if let Some(dropped) = pending {
        warn!("album {:?} has no link, skipping", dropped);
    }

    res
}
