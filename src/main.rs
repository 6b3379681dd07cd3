// Column Week View
// Prints the week grid for a date, marking cells covered by scheduled entries

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use column_week_view::models::grid::SUB_COLUMNS;
use column_week_view::services::settings::SettingsService;
use column_week_view::utils::date::format_day_header;
use column_week_view::{
    Cell, EntryCategory, EventStore, Grid, GridBuilder, InteractionResolver, ScheduledEntry,
    StoreAccess, WeekViewCallbacks,
};

const COLUMN_WIDTH: usize = 18;

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    events: Option<PathBuf>,
    date: Option<NaiveDate>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| anyhow!("Missing value for {}", flag))
        };
        match flag.as_str() {
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--events" => args.events = Some(PathBuf::from(value()?)),
            "--date" => {
                let raw = value()?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("Invalid --date '{}', expected YYYY-MM-DD", raw))?;
                args.date = Some(date);
            }
            other => bail!(
                "Unknown argument '{}'. Usage: column-week-view [--config PATH] [--events PATH] [--date YYYY-MM-DD]",
                other
            ),
        }
    }
    Ok(args)
}

/// Host side of the callback contract; the printer only needs lookups.
struct LogCallbacks;

impl WeekViewCallbacks for LogCallbacks {
    fn on_range_selected(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        log::info!("Range selected: {} - {}", start, end);
    }

    fn on_primary_entry_click(&mut self, entry: &ScheduledEntry) {
        log::info!("Primary entry clicked: {}", entry.instance_id);
    }

    fn on_secondary_entry_click(&mut self, entry: &ScheduledEntry) {
        log::info!("Secondary entry clicked: {}", entry.instance_id);
    }
}

fn load_events(path: Option<&PathBuf>) -> Result<EventStore> {
    let Some(path) = path else {
        return Ok(EventStore::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {:?}", path))?;
    let store: EventStore = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse events in {:?}", path))?;
    log::info!("Loaded {} entries from {:?}", store.len(), path);
    Ok(store)
}

fn cell_marker<C, S>(resolver: &InteractionResolver<C, S>, cell: Cell) -> char
where
    C: WeekViewCallbacks,
    S: StoreAccess,
{
    if resolver.shows_indicator(EntryCategory::Primary, cell) {
        '#'
    } else if resolver.shows_indicator(EntryCategory::Secondary, cell) {
        '+'
    } else {
        '.'
    }
}

fn print_grid<C, S>(grid: &Grid, resolver: &InteractionResolver<C, S>)
where
    C: WeekViewCallbacks,
    S: StoreAccess,
{
    let mut header = format!("{:<6}", "");
    for day in grid.week.iter() {
        let mut label = format_day_header(day);
        if grid.is_today_column(day) {
            label.push('*');
        }
        header.push_str(&format!("| {:<width$}", label, width = COLUMN_WIDTH - 2));
    }
    println!("{}", header);

    for &slot in &grid.slots {
        let mut line = format!("{:<6}", slot.label());
        for day in grid.week.iter() {
            let markers: String = (0..SUB_COLUMNS)
                .map(|sub| cell_marker(resolver, Cell::new(day, slot).with_sub_column(sub)))
                .collect();
            line.push_str(&format!("| {:<width$}", markers, width = COLUMN_WIDTH - 2));
        }
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args()?;

    let settings_service = match args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let settings = settings_service.load()?;

    let grid = GridBuilder::new(settings)?.build(args.date)?;
    let store = load_events(args.events.as_ref())?;
    let resolver = InteractionResolver::new(LogCallbacks, store);

    print_grid(&grid, &resolver);
    Ok(())
}
