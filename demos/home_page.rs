//! Renders the demo page repeatedly and reports the average render time.

#[path = "pages.rs"]
mod pages;

use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Time rendering of the demo home page")]
struct Args {
  /// Number of renders
  #[arg(long, default_value_t = 100_000)]
  iterations: u32,

  /// Number of list items on the page
  #[arg(long, default_value_t = 5)]
  items: usize,

  /// Print the element tree as JSON and exit
  #[arg(long)]
  tree: bool,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let args = Args::parse();

  if args.tree {
    let page = pages::page(args.items)?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    return Ok(());
  }

  let iterations = args.iterations.max(1);
  let mut html = String::new();

  let start = Instant::now();
  for _ in 0..iterations {
    let page = pages::page(args.items)?;
    html = static_markup::render(&page, None)?;
  }
  let total = start.elapsed();
  let average = total.as_nanos() / u128::from(iterations);

  println!("Renders: {}", iterations);
  println!("Average per render = {} nanoseconds", average);
  println!("Average per render = {} milliseconds", average as f64 / 1_000_000.0);
  println!("Total time = {} milliseconds", total.as_secs_f64() * 1000.0);
  println!("{}", html);

  Ok(())
}
