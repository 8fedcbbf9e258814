//! CLI tool for tablebench - builds a table for a route and prints a JSON report
//!
//! Usage:
//!   tablebench_cli <route>                         # e.g. /virtualized/10000/20
//!   tablebench_cli <route> --seed 7 --scroll 4000  # reproducible, scrolled
//!   tablebench_cli <route> --sort "Column 1" --sort "Column 1"

#![allow(clippy::exit)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::env;
use std::io::{self, Write};
use std::process;
use std::rc::Rc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tablebench::instrument::{InstantTiming, TimingHook};
use tablebench::{logging, BenchTable, Route};

const USAGE: &str =
    "Usage: tablebench_cli <route> [--seed N] [--scroll PX] [--sort COLUMN]... [--pretty]";

/// Records elapsed milliseconds per label on top of [`InstantTiming`].
struct RecordingTiming {
    inner: InstantTiming,
    totals: Rc<RefCell<BTreeMap<String, f64>>>,
}

impl TimingHook for RecordingTiming {
    fn start(&mut self, label: &str) {
        self.inner.start(label);
    }

    fn end(&mut self, label: &str) -> Option<Duration> {
        let elapsed = self.inner.end(label)?;
        *self
            .totals
            .borrow_mut()
            .entry(format!("{label}Ms"))
            .or_insert(0.0) += elapsed.as_secs_f64() * 1000.0;
        Some(elapsed)
    }
}

struct Args {
    route: String,
    seed: Option<u64>,
    scroll: Option<f64>,
    sorts: Vec<String>,
    pretty: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut parsed = Args {
        route: String::new(),
        seed: None,
        scroll: None,
        sorts: Vec::new(),
        pretty: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                parsed.seed = Some(value.parse().map_err(|e| format!("--seed {value}: {e}"))?);
            }
            "--scroll" => {
                let value = args.next().ok_or("--scroll needs a value")?;
                parsed.scroll = Some(value.parse().map_err(|e| format!("--scroll {value}: {e}"))?);
            }
            "--sort" => {
                parsed.sorts.push(args.next().ok_or("--sort needs a column")?);
            }
            "--pretty" => parsed.pretty = true,
            _ if parsed.route.is_empty() => parsed.route = arg,
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
    }

    if parsed.route.is_empty() {
        return Err(USAGE.to_string());
    }
    Ok(parsed)
}

fn run(args: &Args) -> Result<String, String> {
    let route = Route::parse(&args.route).map_err(|e| e.to_string())?;
    let config = route.config().map_err(|e| e.to_string())?;

    let totals = Rc::new(RefCell::new(BTreeMap::new()));
    let timing = RecordingTiming {
        inner: InstantTiming::new(),
        totals: Rc::clone(&totals),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut table = BenchTable::with_rng(config, route.strategy, rng, Box::new(timing))
        .map_err(|e| e.to_string())?;

    for column in &args.sorts {
        if !table.toggle_sort(column) {
            eprintln!("Ignoring sort on {column:?}");
        }
    }
    if let Some(offset) = args.scroll {
        table.scroll_to(offset);
    }

    let mut report = serde_json::json!({
        "route": route.to_path(),
        "strategy": route.strategy,
        "rows": table.dataset().row_count(),
        "columns": table.dataset().column_count(),
        "sort": table.sort_state(),
        "scrollOffset": table.scroll_offset(),
        "window": table.render_window(),
        "report": table.predicted_report(),
    });
    for (label, ms) in totals.borrow().iter() {
        report[label.as_str()] = serde_json::json!(ms);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    json.map_err(|e| format!("Error serializing JSON: {e}"))
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    match run(&args) {
        Ok(json) => {
            let mut stdout = io::stdout();
            if writeln!(stdout, "{json}").is_err() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
