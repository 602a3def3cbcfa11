//! Crossover Configuration Simulator
//!
//! Drives the real edit state machine against an in-memory parameter
//! RAM. Events are read from stdin, one per line: `left`, `right`,
//! `click`, `back` (or `l`, `r`, `c`, `b`).

use std::{
    io::{self, BufRead},
    sync::Arc,
};

use anyhow::Result;
use clap::Parser;
use tokio::sync::Mutex;
use xover::{
    settings::MemoryStore,
    transport::{mock::MockRam, SharedRam},
    ui::{CrossoverPage, Navigator, UserEvent},
    Client, Crossover,
};
use xover_protocol::{device::twoway, BandOrientation, FilterDesign};

#[derive(Debug, Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"), about)]
struct Opts {
    /// Use second-order Butterworth sections instead of the
    /// first-order exponential design
    #[clap(long)]
    butterworth: bool,

    /// Feed the low cutoff to the highpass section (conventional
    /// bandpass assignment) instead of the historical layout
    #[clap(long)]
    conventional_band: bool,
}

fn parse_event(input: &str) -> Option<UserEvent> {
    match input {
        "l" => Some(UserEvent::Left),
        "r" => Some(UserEvent::Right),
        "c" => Some(UserEvent::Click),
        "b" => Some(UserEvent::Back),
        other => other.parse().ok(),
    }
}

fn print_display(lines: &[String]) {
    println!("+{}+", "-".repeat(16));
    for line in lines {
        println!("|{:<16}|", line);
    }
    println!("+{}+", "-".repeat(16));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let design = if opts.butterworth {
        FilterDesign::Butterworth
    } else {
        FilterDesign::FirstOrder
    };
    let orientation = if opts.conventional_band {
        BandOrientation::HighpassTracksLowCut
    } else {
        BandOrientation::HighpassTracksHighCut
    };

    let ram: SharedRam = Arc::new(Mutex::new(MockRam::default()));
    let dsp = Crossover::new(Client::new(ram), &twoway::DEVICE)
        .with_design(design)
        .with_orientation(orientation);

    let store = Arc::new(MemoryStore::default());
    let page = CrossoverPage::new(dsp, store).await?;
    let mut navigator = Navigator::new(Box::new(page));

    print_display(&navigator.render());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let Some(event) = parse_event(input) else {
            eprintln!("unknown event '{}', expected left/right/click/back", input);
            continue;
        };

        if !navigator.dispatch(event).await {
            break;
        }
        print_display(&navigator.render());
    }

    Ok(())
}
