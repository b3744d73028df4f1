use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use quake2_bsp::{LoadOptions, LumpType, Map, VersionPolicy};

#[derive(Parser)]
#[command(name = "quake2_bsp_info")]
#[command(version, about = "Loads a Quake II BSP map and prints what it contains")]
struct Cli {
  /// Map to load
  path: PathBuf,

  /// Fail on maps that are not BSP version 38 instead of warning
  #[arg(long)]
  strict_version: bool,

  /// List the class names of all entities
  #[arg(long)]
  entities: bool,

  /// Exit right away instead of waiting for Enter
  #[arg(long)]
  no_wait: bool,

  /// Log every lump as it is decoded
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  SimpleLogger::new()
    .with_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info })
    .init()
    .context("failed to initialize logging")?;

  let version_policy = if cli.strict_version {
    VersionPolicy::Reject
  } else {
    VersionPolicy::Warn
  };
  let options = LoadOptions::default().with_version_policy(version_policy);
  let map = Map::load_with_options(&cli.path, &options)
    .with_context(|| format!("failed to load {}", cli.path.display()))?;

  print_summary(&map);
  if cli.entities {
    print_entities(&map)?;
  }

  if !cli.no_wait {
    println!("\nWaiting for input");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
  }
  Ok(())
}

fn print_summary(map: &Map) {
  println!("version {}", map.version());
  for lump_type in LumpType::ALL {
    let lump = map.lump(lump_type);
    println!(
      "{:<24} offset {:>9} length {:>9} count {:>7}",
      format!("{:?}", lump_type),
      lump.file_offset,
      lump.file_length,
      map.count(lump_type)
    );
  }
  if let Some(visibility) = map.visibility() {
    println!("{} visibility clusters", visibility.clusters_count());
  }
}

fn print_entities(map: &Map) -> Result<()> {
  let entities = map.entities().parse().context("failed to parse entity lump")?;
  println!("\n{} entities", entities.len());
  for (index, entity) in entities.iter().enumerate() {
    let class_name = entity.class_name().unwrap_or("<none>");
    match entity.brush_model() {
      Some(model) => println!("{:>5} {} (model *{})", index, class_name, model),
      None => println!("{:>5} {}", index, class_name),
    }
  }
  Ok(())
}
