use matchinfo_reader::matchinfo::HEADER_LEN;
use matchinfo_reader::{decode_with, DecodeOptions, TrailingBytes};
use std::env;
use std::fs;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-blob> [--header-floor] [--ignore-trailing]", args[0]);
        std::process::exit(1);
    }

    let blob_path = &args[1];
    let mut options = DecodeOptions::default();
    for flag in &args[2..] {
        match flag.as_str() {
            "--header-floor" => options = options.with_min_len(HEADER_LEN),
            "--ignore-trailing" => options = options.with_trailing_bytes(TrailingBytes::Ignore),
            other => {
                eprintln!("ERROR: Unknown option: {}", other);
                std::process::exit(1);
            }
        }
    }

    let raw = match fs::read(blob_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", blob_path, e);
            std::process::exit(1);
        }
    };

    println!("Decoding matchinfo blob: {} ({} bytes)", blob_path, raw.len());
    println!("{}", "=".repeat(60));

    match decode_with(&raw, &options) {
        Ok(stats) => {
            println!("  Phrases: {}", stats.phrase_count);
            println!("  Columns: {}", stats.column_count);
            println!("  Rows:    {}", stats.row_count);

            println!("\nToken counts (average / current row):");
            for (i, (avg, cur)) in stats
                .average_token_counts
                .iter()
                .zip(stats.current_row_token_counts.iter())
                .enumerate()
            {
                println!("  column {}: {} / {}", i, avg, cur);
            }

            println!("\nPhrase hits (row / total / matching rows):");
            for (phrase, column, cts) in stats.iter_column_stats() {
                println!(
                    "  phrase {} column {}: {} / {} / {}",
                    phrase,
                    column,
                    cts.current_row_term_frequency,
                    cts.total_term_frequency,
                    cts.matching_row_count
                );
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to decode matchinfo blob");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
