//! Command line surface of the `almanac` binary.

use std::path::PathBuf;

use almanac_calendar::{BucketOptions, CalendarView, ViewKind, bucket_by_day};
use almanac_core::config::Settings;
use almanac_recurrence::{SchedulableItem, Window};
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;

/// Renders a day-indexed calendar of tasks, expanding recurring ones.
#[derive(Parser, Debug)]
#[command(name = "almanac", version, about)]
pub struct Cli {
    /// JSON file holding an array of items.
    #[arg(long, env = "ALMANAC_ITEMS")]
    pub items: PathBuf,

    /// Calendar view to render (day, week or month).
    #[arg(long, default_value = "month")]
    pub view: ViewKind,

    /// Anchor day of the view, `YYYY-MM-DD`. Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Explicit window start; requires `--to` and overrides `--view`.
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Explicit window end, inclusive.
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Hide completed items, regardless of configuration.
    #[arg(long)]
    pub hide_completed: bool,
}

impl Cli {
    /// ## Summary
    /// Resolves the window to render.
    ///
    /// ## Errors
    /// Returns an error if the explicit bounds are reversed or the view
    /// window cannot be built.
    pub fn window(&self, settings: &Settings) -> anyhow::Result<Window> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            return Ok(Window::new(from, to)?);
        }
        let anchor = self.date.unwrap_or_else(|| {
            Utc::now()
                .with_timezone(&settings.calendar.timezone)
                .date_naive()
        });
        Ok(self.view.window(anchor, settings.recurrence.week_start)?)
    }

    #[must_use]
    pub fn bucket_options(&self, settings: &Settings) -> BucketOptions {
        let hide_completed = self.hide_completed || settings.calendar.hide_completed;
        BucketOptions::from(settings).with_hide_completed(hide_completed)
    }
}

/// ## Summary
/// Loads the item file and buckets it over the requested window.
///
/// ## Errors
/// Returns an error if the item file cannot be read or parsed, or the window
/// is invalid.
pub fn run(cli: &Cli, settings: &Settings) -> anyhow::Result<CalendarView> {
    let raw = std::fs::read_to_string(&cli.items)
        .with_context(|| format!("reading items from {}", cli.items.display()))?;
    let items: Vec<SchedulableItem> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing items from {}", cli.items.display()))?;

    let window = cli.window(settings)?;
    tracing::info!(
        items = items.len(),
        from = %window.from(),
        to = %window.to(),
        "Rendering calendar"
    );

    Ok(bucket_by_day(&items, &window, &cli.bucket_options(settings)))
}
