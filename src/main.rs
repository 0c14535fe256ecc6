use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod preferences;

use preferences::{DemoPreferences, MAX_DEMO_CAPACITY};
use ringq::RingBuffer;

/// Walk a string ring buffer through enqueue, dequeue and wrap-around.
#[derive(Debug, Parser)]
#[command(name = "ringq-demo", version)]
struct Cli {
    /// Ring buffer capacity (1 to 4096)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=MAX_DEMO_CAPACITY as u64))]
    capacity: Option<u64>,

    /// Preferences file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective preferences back to the preferences file
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut prefs = match &cli.config {
        Some(path) => DemoPreferences::load_from(path),
        None => DemoPreferences::load(),
    };
    if let Some(capacity) = cli.capacity {
        prefs.capacity = usize::try_from(capacity)?;
        prefs.sanitize();
    }

    if cli.save {
        match &cli.config {
            Some(path) => prefs.save_to(path)?,
            None => prefs.save()?,
        }
        info!("saved demo preferences");
    }

    run(&prefs, &mut io::stdout().lock())?;
    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ringq=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(prefs: &DemoPreferences, out: &mut impl Write) -> io::Result<()> {
    let mut buf = RingBuffer::new(prefs.capacity);
    let [a, b, c, d] = [0, 1, 2, 3].map(|i| prefs.items[i].clone());

    writeln!(out, "ringq-demo (capacity={})", buf.capacity())?;
    writeln!(out, "enqueue: {a}, {b}, {c}; dequeue twice; enqueue {d}; dequeue until empty")?;

    enqueue(&mut buf, a);
    enqueue(&mut buf, b);
    enqueue(&mut buf, c);
    dequeue(&mut buf, out)?;
    dequeue(&mut buf, out)?;
    enqueue(&mut buf, d);
    while !buf.is_empty() {
        dequeue(&mut buf, out)?;
    }
    Ok(())
}

fn enqueue(buf: &mut RingBuffer<String>, item: String) {
    if let Err(e) = buf.enqueue(item.clone()) {
        warn!("enqueue {item:?}: {e}");
    }
}

fn dequeue(buf: &mut RingBuffer<String>, out: &mut impl Write) -> io::Result<()> {
    match buf.dequeue() {
        Ok(v) => writeln!(out, "dequeue -> {v:?} (len={})", buf.len())?,
        Err(e) => warn!("dequeue: {e}"),
    }
    Ok(())
}
