use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::app::{AppContext, Result, VodostajError};
use crate::archive;
use crate::charts;
use crate::report::{self, ReportRow};

const SEPARATOR: &str =
    "==================================================================================";

/// Listings show at most this many of the newest captures.
const LIST_TAIL: usize = 10;

/// Prints the most recent archived captures, each annotated with the
/// offset that recalls it.
pub fn list_captures(ctx: &AppContext) -> Result<()> {
    let names = ctx.archive.list()?;

    println!("{}", format!("HISTORY FILES ({}):", names.len()).green());
    let start = names.len().saturating_sub(LIST_TAIL);
    for (index, name) in names.iter().enumerate().skip(start) {
        let back = names.len() - index;
        println!(
            "{} {}",
            archive::capture_label(name),
            format!("({back})").yellow()
        );
    }
    Ok(())
}

/// Downloads and displays the chart images for one station.
pub async fn show_charts(ctx: &AppContext, station: &str) -> Result<()> {
    let id = ctx
        .config
        .stations
        .get(station)
        .copied()
        .ok_or_else(|| VodostajError::UnknownStation(station.to_string()))?;

    let is_tmux = charts::is_tmux_term(std::env::var("TERM").ok().as_deref());
    let mut out = io::stdout();
    for url in charts::chart_urls(&ctx.config.chart_base_url, id) {
        let body = ctx.fetcher.fetch(&url).await?;
        if body.len() <= charts::PLACEHOLDER_MAX_BYTES {
            tracing::debug!(url, bytes = body.len(), "skipping placeholder chart");
            continue;
        }
        charts::imgcat(&mut out, &body, is_tmux)?;
    }
    Ok(())
}

/// Restores the previous baseline, gated behind an explicit confirmation:
/// the current state is overwritten and cannot be brought back.
pub fn restore_state(ctx: &AppContext) -> Result<()> {
    if !confirm("ARE YOU SURE?")? {
        println!("{}", "RESTORE CANCELED BY USER".green());
        return Ok(());
    }

    if ctx.store.restore()? {
        println!("{}", "STATE RESTORED".yellow());
    } else {
        println!("{}", "NO BACKUP STATE TO RESTORE".yellow());
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    let mut out = io::stdout();
    loop {
        write!(out, "{} ", format!("{question} (n):").yellow())?;
        out.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        match line.trim().to_lowercase().as_str() {
            "y" | "ye" | "yes" => return Ok(true),
            "" | "n" | "no" => return Ok(false),
            _ => println!("{}", "Please respond with 'yes' or 'no'!".red()),
        }
    }
}

/// The report pipeline: fetch or recall a capture, parse it, diff against
/// the stored snapshot, print, and optionally persist the new baseline.
pub async fn run_report(
    ctx: &AppContext,
    offset: Option<usize>,
    all: bool,
    save: bool,
) -> Result<()> {
    let offset = offset.unwrap_or(0);
    if save && offset > 0 {
        return Err(VodostajError::SaveWithOffset);
    }

    let body = if offset > 0 {
        let path = ctx.archive.resolve_path(offset)?;
        println!(
            "{} {}",
            "LOADING DATA FROM FILE".green(),
            path.display().to_string().blue()
        );
        let body = ctx.archive.resolve(offset)?;
        println!(
            "{} {}",
            "DATA LOADED".green(),
            format!("(OFFSET: {offset})").blue()
        );
        body
    } else {
        println!(
            "{} {}",
            "GETTING DATA FROM".green(),
            ctx.config.feed_url.as_str().blue()
        );
        let body = ctx.fetcher.fetch(&ctx.config.feed_url).await?;
        println!("{}", "DATA DOWNLOADED".green());

        ctx.archive.append(&body, chrono::Local::now().date_naive())?;
        println!("{}", "HISTORY SAVED".green());
        body
    };

    let entries = ctx.normalizer.normalize(&body)?;

    let previous = ctx.store.load()?;
    if !previous.is_empty() {
        println!("{}", "OLD STATE READ".green());
    }

    let group_filter = if all {
        None
    } else {
        Some(ctx.config.default_group.as_str())
    };
    let (rows, updated) = report::render(&entries, &previous, save, group_filter);

    print_report(&rows);

    if save {
        ctx.store.save(&updated)?;
        println!("{}", "STATE SAVED".green());
    }
    Ok(())
}

fn print_report(rows: &[ReportRow]) {
    let mut out = String::new();
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');

    for row in rows {
        out.push_str(&row.title.as_str().blue().to_string());
        if let Some(previous) = &row.previous_level {
            out.push_str(&format!("{previous:>5} cm  ").yellow().to_string());
        }
        let (first, second) = &row.defense_labels;
        out.push_str(&format!("(ODBRANA: {first}, {second})").magenta().to_string());
        out.push('\n');

        for threshold in &row.thresholds {
            out.push_str(&format!(
                "     {} {:<22} {:>5} cm\n",
                threshold.label, threshold.date, threshold.level
            ));
        }
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    println!("{out}");
}
