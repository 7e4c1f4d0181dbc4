//! Station chart images.
//!
//! The service publishes a handful of chart GIFs per station. They are
//! rendered inline through the iTerm2 image escape protocol; stations with
//! no data for a chart kind serve a tiny placeholder GIF, which is skipped.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Chart kinds published per station, in display order.
pub const CHART_KINDS: [&str; 5] = ["prl", "ahl", "tl", "pl", "nl"];

/// Bodies at or below this size are "no data" placeholder images.
pub const PLACEHOLDER_MAX_BYTES: usize = 43;

/// Chart image URLs for one station, in display order.
pub fn chart_urls(base_url: &str, station_id: u32) -> Vec<String> {
    CHART_KINDS
        .iter()
        .map(|kind| format!("{base_url}{kind}{station_id}.gif"))
        .collect()
}

/// True when the terminal is a tmux/screen session, which needs the image
/// escape wrapped in a DCS passthrough.
pub fn is_tmux_term(term: Option<&str>) -> bool {
    term.is_some_and(|t| t.starts_with("screen"))
}

/// Writes an image through the iTerm2 inline-image escape protocol
/// (`OSC 1337 File=`, base64 payload).
pub fn imgcat<W: Write>(out: &mut W, data: &[u8], is_tmux: bool) -> io::Result<()> {
    if is_tmux {
        out.write_all(b"\x1bPtmux;\x1b\x1b]")?;
    } else {
        out.write_all(b"\x1b]")?;
    }
    write!(
        out,
        "1337;File=size={};inline=1;width=auto;height=auto;preserveAspectRatio=0:",
        data.len()
    )?;
    out.write_all(BASE64.encode(data).as_bytes())?;
    out.write_all(b"\x07")?;
    if is_tmux {
        out.write_all(b"\x1b\\")?;
    }
    out.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_urls_cover_every_kind() {
        let urls = chart_urls("http://example.rs/podaci/", 42035);

        assert_eq!(urls.len(), CHART_KINDS.len());
        assert_eq!(urls[0], "http://example.rs/podaci/prl42035.gif");
        assert_eq!(urls[4], "http://example.rs/podaci/nl42035.gif");
    }

    #[test]
    fn test_imgcat_escape_shape() {
        let mut out = Vec::new();
        imgcat(&mut out, &[1, 2, 3], false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b]1337;File=size=3;inline=1;"));
        assert!(text.contains(":AQID\x07"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_imgcat_tmux_passthrough() {
        let mut out = Vec::new();
        imgcat(&mut out, &[1, 2, 3], true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1bPtmux;\x1b\x1b]1337;"));
        assert!(text.contains("\x07\x1b\\"));
    }

    #[test]
    fn test_tmux_detection() {
        assert!(is_tmux_term(Some("screen-256color")));
        assert!(!is_tmux_term(Some("xterm-256color")));
        assert!(!is_tmux_term(None));
    }
}
