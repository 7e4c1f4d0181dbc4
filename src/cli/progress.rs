//! Download progress bar, rewritten in place on one terminal line.

use std::io::{self, Write};

use crossterm::style::Stylize;

const BAR_CELLS: usize = 40;

/// Bar body for a completed fraction, e.g. `####____…` at 10%.
pub fn bar(bytes_so_far: u64, total: u64) -> String {
    let fraction = if total == 0 {
        1.0
    } else {
        bytes_so_far as f64 / total as f64
    };
    let filled = (BAR_CELLS as f64 * fraction) as usize;

    (0..BAR_CELLS)
        .map(|cell| if cell <= filled { '#' } else { '_' })
        .collect()
}

/// Draws one progress update. Leaves the cursor on the line until the
/// download completes, then terminates it.
pub fn draw(bytes_so_far: u64, total: Option<u64>) {
    let mut out = io::stdout();
    match total {
        Some(total) => {
            let percent = if total == 0 {
                100.0
            } else {
                bytes_so_far as f64 / total as f64 * 100.0
            };
            let _ = write!(
                out,
                "\r{} ({percent:.2}%) Downloaded {bytes_so_far} of {total} bytes",
                bar(bytes_so_far, total).dark_grey(),
            );
            if bytes_so_far >= total {
                let _ = writeln!(out);
            }
        }
        None => {
            let _ = write!(out, "\rDownloaded {bytes_so_far} bytes");
        }
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_fixed_width() {
        assert_eq!(bar(0, 100).chars().count(), BAR_CELLS);
        assert_eq!(bar(50, 100).chars().count(), BAR_CELLS);
        assert_eq!(bar(100, 100).chars().count(), BAR_CELLS);
    }

    #[test]
    fn test_bar_endpoints() {
        assert_eq!(bar(0, 100).matches('#').count(), 1);
        assert_eq!(bar(100, 100), "#".repeat(BAR_CELLS));
    }

    #[test]
    fn test_bar_half_way() {
        let half = bar(50, 100);
        assert_eq!(half.matches('#').count(), 21);
        assert!(half.starts_with('#'));
        assert!(half.ends_with('_'));
    }
}
