//! Console walkthrough of the counter factory and its relatives.
//!
//! Run with:
//! ```bash
//! cargo run --example walkthrough --features demo -- --help
//! RUST_LOG=trace cargo run --example walkthrough --features demo
//! ```

use std::sync::Arc;
use std::thread;

use clap::{Parser, ValueEnum};
use log::info;
use tallies::counters::shared::SyncCounter;
use tallies::counters::Observable;
use tallies::factory::{counter_fn, CounterFactory};
use tallies::higher_order::{adder, apply, double, square};
use tallies::observers::json::JsonObserver;
use tallies::observers::table::TableObserver;
use tallies::observers::Result;

/// Output format for the final counter listing.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Two-column table
    Table,
    /// Compact table with multiple columns
    Compact,
    /// JSON format
    Json,
}

/// Walkthrough of independent stateful counters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format for the counter listing
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Number of columns (for compact format)
    #[arg(short, long, default_value = "3")]
    columns: usize,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Advance a shared counter from N threads
    #[arg(long, default_value = "4")]
    threads: usize,

    /// Advances per thread
    #[arg(long, default_value = "10000")]
    iterations: usize,
}

fn closures_section() {
    println!("== function factories ==");
    println!("apply(5, double)   = {}", apply(5, double));
    println!("apply(5, square)   = {}", apply(5, square));
    println!("apply(5, |n| n+10) = {}", apply(5, |n| n + 10));

    let add5 = adder(5);
    let add10 = adder(10);
    println!("add5(10)  = {}", add5(10));
    println!("add5(20)  = {}", add5(20));
    println!("add10(10) = {}", add10(10));
    println!();
}

fn counters_section(factory: &CounterFactory) -> (tallies::AdvanceFn, tallies::AdvanceFn) {
    println!("== independent counters ==");
    let c1 = factory.create_named("c1");
    println!("c1 call 1: {}", c1.advance());
    println!("c1 call 2: {}", c1.advance());
    println!("c1 call 3: {}", c1.advance());

    let c2 = factory.create_named("c2");
    println!("c2 call 1: {}", c2.advance());
    println!("c1 call 4: {}", c1.advance());

    let mut next = counter_fn();
    println!("closure counter: {}, {}", next(), next());
    println!();

    (c1, c2)
}

fn shared_section(factory: &CounterFactory, threads: usize, iterations: usize) -> Arc<SyncCounter> {
    println!("== shared counter ==");
    let shared = factory.create_sync("shared");

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..iterations {
                    shared.advance();
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            log::error!("worker thread panicked");
        }
    }

    println!(
        "{} threads x {} advances = {}",
        threads,
        iterations,
        shared.value()
    );
    println!();
    shared
}

fn render_output(args: &Args, counters: Vec<&dyn Observable>) -> Result<String> {
    let output = match args.format {
        OutputFormat::Table => TableObserver::new().render(counters.into_iter()),
        OutputFormat::Compact => TableObserver::grid(args.columns).render(counters.into_iter()),
        OutputFormat::Json => JsonObserver::new()
            .pretty(args.pretty)
            .to_json(counters.into_iter())?,
    };
    Ok(output)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("starting walkthrough with {:?}", args.format);

    let factory = CounterFactory::new();

    closures_section();
    let (c1, c2) = counters_section(&factory);
    let shared = shared_section(&factory, args.threads, args.iterations);

    let counters: Vec<&dyn Observable> = vec![&c1, &c2, shared.as_ref()];
    println!("{}", render_output(&args, counters)?);

    info!("factory produced {} counters", factory.produced());
    Ok(())
}
