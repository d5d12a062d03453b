use crate::parse::AlbumRecord;
use anyhow::{anyhow, Context, Result};
use htmlescape::encode_minimal;
use url::Url;

const PLAYER_URL: &str = "http://bandcamp.com/EmbeddedPlayer";
const PLAYER_OPTIONS: [&str; 5] = [
    "size=large",
    "bgcol=ffffff",
    "linkcol=0687f5",
    "artwork=small",
    "transparent=true",
];

const DIV: &str = r#"<div style="margin: 0px 0px 5px 0px">"#;
const UNDIV: &str = "</div>";

/// Embedded player URL for an album id.
pub fn player_url(id: &str) -> Result<Url> {
    let mut url = Url::parse(PLAYER_URL)?;
    url.path_segments_mut()
        .map_err(|()| anyhow!("{} can't be a base", PLAYER_URL))?
        .push(&format!("album={}", id))
        .extend(PLAYER_OPTIONS.iter())
        .push("");
    Ok(url)
}

/// Canonical album page for an href fragment, relative to the page it came from.
pub fn album_url(base: &Url, href: &str) -> Result<Url> {
    base.join(&format!("/album/{}", href))
        .with_context(|| format!("bad album link {:?}", href))
}

pub fn render_album(album: &AlbumRecord, base: &Url) -> Result<String> {
    let src = player_url(&album.id)?;
    let link = album_url(base, &album.href)?;

    Ok(format!(
        r#"{}<iframe style="border: 10px; width: 400px; height: 472px;" src="{}" seamless><a href="{}"> by </a></iframe>{}"#,
        DIV,
        encode_minimal(src.as_str()),
        encode_minimal(link.as_str()),
        UNDIV,
    ))
}

pub fn render(albums: &[AlbumRecord], base: &Url) -> Result<String> {
    albums
        .iter()
        .map(|album| render_album(album, base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://label.bandcamp.com/music").unwrap()
    }

    #[test]
    fn test_player_url() {
        assert_eq!(
            player_url("123").unwrap().as_str(),
            "http://bandcamp.com/EmbeddedPlayer/album=123/size=large/bgcol=ffffff/linkcol=0687f5/artwork=small/transparent=true/"
        );
    }

    #[test]
    fn test_player_url_encodes_id() {
        let url = player_url("1/../2 3").unwrap();
        assert!(url.as_str().contains("/album=1%2F..%2F2%203/size=large/"));
    }

    #[test]
    fn test_album_url() {
        assert_eq!(
            album_url(&base(), "abc").unwrap().as_str(),
            "https://label.bandcamp.com/album/abc"
        );
        assert_eq!(
            album_url(&base(), "abc?label=1&tab=music").unwrap().as_str(),
            "https://label.bandcamp.com/album/abc?label=1&tab=music"
        );
    }

    #[test]
    fn test_render_pairs_in_order() {
        let albums = vec![AlbumRecord::new("123", "abc"), AlbumRecord::new("456", "def")];
        let html = render(&albums, &base()).unwrap();

        assert_eq!(html.matches("<iframe").count(), 2);
        assert_eq!(html.matches(DIV).count(), 2);
        assert_eq!(html.matches("</iframe></div>").count(), 2);

        let first = html.find("album=123/").unwrap();
        let first_link = html.find(r#"href="https://label.bandcamp.com/album/abc""#).unwrap();
        let second = html.find("album=456/").unwrap();
        let second_link = html.find(r#"href="https://label.bandcamp.com/album/def""#).unwrap();
        assert!(first < first_link);
        assert!(first_link < second);
        assert!(second < second_link);
    }

    #[test]
    fn test_render_escapes() {
        let album = AlbumRecord::new(r#"1"><script>"#, "x?a=1&b=\"2\"");
        let html = render_album(&album, &base()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&amp;"));
        assert_eq!(html.matches('"').count(), 8);
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(render(&[], &base()).unwrap(), "");
    }
}
