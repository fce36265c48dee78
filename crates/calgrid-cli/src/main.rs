//! `calgrid` CLI — compute month layouts, day listings, and bare grids from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Full month layout from an events file, as JSON
//! calgrid layout -i events.json --year 2024 --month 2
//!
//! # Rendered text grid, Monday-first, fixed timezone
//! calgrid layout -i events.json --year 2024 --month 2 \
//!   --week-start monday --timezone America/New_York --format text
//!
//! # Events touching one day (badge count + expandability)
//! echo '[{"id":1,"name":"Standup","startTimeUtc":"2024-02-01T15:00:00Z","endTimeUtc":"2024-02-01T15:30:00Z"}]' \
//!   | calgrid day --year 2024 --month 2 --day 1
//!
//! # Bare skeleton for a month (no events needed)
//! calgrid grid --year 2024 --month 2 --week-numbers
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};

use calgrid_core::{
    build_month_grid, decode_events, is_expandable_day, iso_week_number, layout_month,
    max_visible_for, truncate_spans, visible_events, CalendarMonth, DayMembershipIndex,
    DisplaySettings, Event, EventDisplayStyle, MonthLayout, TimezoneMode, WeekStart,
};

#[derive(Parser)]
#[command(name = "calgrid", version, about = "Month-calendar span layout engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeekStartArg {
    Sunday,
    Monday,
}

impl From<WeekStartArg> for WeekStart {
    fn from(arg: WeekStartArg) -> Self {
        match arg {
            WeekStartArg::Sunday => WeekStart::Sunday,
            WeekStartArg::Monday => WeekStart::Monday,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full month layout from an events JSON array
    Layout {
        /// Input events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
        /// Effective timezone: "local" or an IANA name
        #[arg(long, default_value = "local")]
        timezone: String,
        #[arg(long, value_enum, default_value = "sunday")]
        week_start: WeekStartArg,
        /// Compact density (one extra visible bar per week)
        #[arg(long)]
        compact: bool,
        /// Exclude events that already ended
        #[arg(long)]
        hide_ended: bool,
        /// Per-day display instead of spanning bars
        #[arg(long)]
        daily: bool,
        /// Show neighboring-month day numbers in empty cells
        #[arg(long)]
        adjacent: bool,
        /// Include ISO week numbers
        #[arg(long)]
        week_numbers: bool,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },
    /// List the events touching a single day, with badge count
    Day {
        /// Input events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
        /// Day of month, 1-based
        #[arg(long)]
        day: u32,
        /// Effective timezone: "local" or an IANA name
        #[arg(long, default_value = "local")]
        timezone: String,
        /// Exclude events that already ended
        #[arg(long)]
        hide_ended: bool,
    },
    /// Print the bare week/day skeleton for a month
    Grid {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
        #[arg(long, value_enum, default_value = "sunday")]
        week_start: WeekStartArg,
        /// Include ISO week numbers
        #[arg(long)]
        week_numbers: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            input,
            output,
            year,
            month,
            timezone,
            week_start,
            compact,
            hide_ended,
            daily,
            adjacent,
            week_numbers,
            format,
        } => {
            let month = CalendarMonth::new(year, month)?;
            let tz: TimezoneMode = timezone.parse()?;
            let settings = DisplaySettings {
                week_start_day: week_start.into(),
                show_adjacent_months: adjacent,
                show_week_numbers: week_numbers,
                hide_ended_events: hide_ended,
                event_display_style: if daily {
                    EventDisplayStyle::Daily
                } else {
                    EventDisplayStyle::Spanning
                },
                compact_mode: compact,
            };

            let events = read_events(input.as_deref())?;
            let layout = layout_month(&events, month, &settings, tz, Utc::now());

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&layout)
                    .context("Failed to serialize layout")?,
                Format::Text => render_text(&layout, &settings),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Day { input, year, month, day, timezone, hide_ended } => {
            let month = CalendarMonth::new(year, month)?;
            let tz: TimezoneMode = timezone.parse()?;
            let settings = DisplaySettings {
                hide_ended_events: hide_ended,
                ..DisplaySettings::default()
            };

            let events = read_events(input.as_deref())?;
            let filtered = visible_events(&events, &settings, Utc::now());
            let index = DayMembershipIndex::build(&filtered, month, tz);

            let count = index.count_for_day(day);
            let listing = serde_json::json!({
                "day": day,
                "count": count,
                "expandable": is_expandable_day(count),
                "events": index.events_on_day(day),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Commands::Grid { year, month, week_start, week_numbers } => {
            let month = CalendarMonth::new(year, month)?;
            let grid = build_month_grid(month, week_start.into());

            for week in 0..grid.weeks_count {
                let mut line = String::new();
                if week_numbers {
                    let days = grid.week_days(week);
                    let number = days
                        .iter()
                        .flatten()
                        .next()
                        .map(|&day| iso_week_number(month.date_of(day)))
                        .unwrap_or(0);
                    line.push_str(&format!("W{:02} |", number));
                }
                for cell in grid.week_days(week) {
                    match cell {
                        Some(day) => line.push_str(&format!(" {:>2}", day)),
                        None => line.push_str("  ."),
                    }
                }
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Read and decode the events JSON array from a file or stdin. Records with
/// malformed timestamps are dropped, not fatal; invalid JSON is fatal.
fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    let records =
        serde_json::from_str(&json).context("Failed to parse events JSON (expected an array)")?;
    Ok(decode_events(records))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

/// Render a layout as a text grid: one line of day numbers per week, then
/// the week's bars (truncated to the visible budget) indented beneath it.
fn render_text(layout: &MonthLayout, settings: &DisplaySettings) -> String {
    let mut out = String::new();
    let max_visible = max_visible_for(settings);

    for (w, row) in layout.weeks.iter().enumerate() {
        if let Some(numbers) = &layout.week_numbers {
            out.push_str(&format!("W{:02} |", numbers.get(w).copied().unwrap_or(0)));
        }
        for (col, cell) in row.days.iter().enumerate() {
            match cell {
                Some(day) => out.push_str(&format!(" {:>2}", day)),
                None => {
                    let adjacent = layout
                        .adjacent_days
                        .as_ref()
                        .and_then(|days| days.get(w * 7 + col).copied().flatten());
                    match adjacent {
                        Some(day) => out.push_str(&format!(" {:>2}", day)),
                        None => out.push_str("  ."),
                    }
                }
            }
        }
        out.push('\n');

        let spans = truncate_spans(&row.spanning_events, max_visible);
        for bar in &spans.visible {
            let end_col = bar.start_col + bar.span - 1;
            let left = if bar.is_start { '[' } else { '<' };
            let right = if bar.is_end { ']' } else { '>' };
            out.push_str(&format!(
                "      {}{}-{}{} {}\n",
                left, bar.start_col, end_col, right, bar.event.name
            ));
        }
        if spans.hidden_count > 0 {
            out.push_str(&format!("      +{} more\n", spans.hidden_count));
        }
    }

    out
}
