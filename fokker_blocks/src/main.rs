// Fokker periodicity block generator, CLI entry point.
//
// Builds the block scale for the configured generators and commas and writes
// it as a Scala file. The pipeline: config -> block enumeration -> assembly
// -> `.scl` output.
//
// Usage:
//   cargo run -p fokker_blocks -- [OPTIONS]
//     --config <FILE>          JSON config (see `BlockConfig`); flags override it
//     --generators <A,B>       Generator ratios, e.g. 5/1,3/1
//     --comma <X,Y>            Comma position; give exactly two
//     --include-commas         Keep the block vertices (the commas) as steps
//     --no-octave              Do not append 2/1
//     --output <NAME>          Output base name (default: output -> output.scl)

use fokker_blocks::config::BlockConfig;
use fokker_blocks::interval::{cents, parse_ratio};
use fokker_blocks::pipeline::generate_block;
use std::path::Path;

fn main() {
    let config = parse_args();

    println!("=== Fokker Periodicity Block Generator ===");
    let generators: Vec<String> = config.generators.iter().map(|g| g.to_string()).collect();
    println!("Generators: {}", generators.join(", "));
    println!("Commas: {:?}", config.commas);
    println!("Include commas: {}", config.include_commas);
    println!("Include octave: {}", config.include_octave);
    println!();

    println!("[1/3] Enumerating block...");
    let block = match generate_block(&config) {
        Ok(block) => block,
        Err(e) => {
            eprintln!("  Error: {e}");
            std::process::exit(1);
        }
    };
    println!("  Bounding box: {}", block.bounding_box);
    if block.basis.is_degenerate() {
        println!("  Warning: commas are linearly dependent; the block has zero area.");
    }
    println!("  {} lattice points accepted.", block.accepted);

    println!("[2/3] Assembled {} steps:", block.scale.intervals.len());
    for interval in &block.scale.intervals {
        println!("  {:>12}  {:8.2} cents", interval.to_string(), cents(interval));
    }

    println!("[3/3] Writing scale...");
    match block.scale.write(Path::new(&config.output_name)) {
        Ok(path) => println!("  Done! Wrote {}", path.display()),
        Err(e) => {
            eprintln!("  Error writing scale: {e}");
            std::process::exit(1);
        }
    }
}

/// Build the run config: `--config` first, then every other flag on top.
fn parse_args() -> BlockConfig {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).unwrap_or_else(|| {
                eprintln!("--config requires a file path");
                std::process::exit(1);
            });
            BlockConfig::load(Path::new(path)).unwrap_or_else(|e| {
                eprintln!("Failed to load config {path}: {e}");
                std::process::exit(1);
            })
        }
        None => BlockConfig::default(),
    };

    let mut commas: Vec<Vec<i64>> = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
            }
            "--generators" => {
                i += 1;
                config.generators = args
                    .get(i)
                    .and_then(|s| s.split(',').map(|g| parse_ratio(g).ok()).collect::<Option<Vec<_>>>())
                    .unwrap_or_else(|| {
                        eprintln!("--generators requires comma-separated ratios, e.g. 5/1,3/1");
                        std::process::exit(1);
                    });
            }
            "--comma" => {
                i += 1;
                let row: Vec<i64> = args
                    .get(i)
                    .and_then(|s| s.split(',').map(|v| v.trim().parse().ok()).collect())
                    .unwrap_or_else(|| {
                        eprintln!("--comma requires comma-separated integers, e.g. -1,4");
                        std::process::exit(1);
                    });
                commas.push(row);
            }
            "--include-commas" => config.include_commas = true,
            "--no-octave" => config.include_octave = false,
            "--output" => {
                i += 1;
                config.output_name = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a value");
                    std::process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !commas.is_empty() {
        config.commas = commas;
    }
    config
}

fn print_usage() {
    println!("Usage: generate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <FILE>          JSON config; flags override it");
    println!("  --generators <A,B>       Generator ratios (default: 5,3)");
    println!("  --comma <X,Y>            Comma position, given twice (default: -1,4 and -3,0)");
    println!("  --include-commas         Keep the commas as scale steps");
    println!("  --no-octave              Do not append 2/1");
    println!("  --output <NAME>          Output base name (default: output)");
    println!("  --help, -h               Show this help");
}
