//! Command-line interface for chroma_schemes
//!
//! Generates a scheme from a base color and prints it as JSON, with a
//! readable summary (text color and contrast per swatch) on stderr.

use chroma_schemes::{
    contrast_ratio, ColorAnalyzer, ColorError, EngineConfig, SchemeGenerator, SchemeKind,
    SchemeResult,
};
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut count = None;
    let mut positional = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: --config needs a file path");
                        process::exit(1);
                    }
                }
            }
            "--count" | "-n" => {
                i += 1;
                match args
                    .get(i)
                    .and_then(|n| n.parse::<usize>().ok())
                    .filter(|&n| n > 0)
                {
                    Some(n) => count = Some(n),
                    None => {
                        eprintln!("Error: --count needs a positive integer");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let (scheme_name, base_hex) = match positional.as_slice() {
        [scheme, base] => (scheme.as_str(), base.as_str()),
        _ => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    match run(scheme_name, base_hex, count, config_path) {
        Ok((result, analyzer)) => print_result(&result, &analyzer),
        Err(error) => {
            eprintln!("Scheme generation failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn run(
    scheme_name: &str,
    base_hex: &str,
    count: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<(SchemeResult, ColorAnalyzer), ColorError> {
    let config = match config_path {
        Some(path) => EngineConfig::from_json_file(&path)?,
        None => EngineConfig::default(),
    };
    let generator = SchemeGenerator::new(config.schemes)?;
    let analyzer = ColorAnalyzer::from_config(&config.analysis)?;

    let kind: SchemeKind = scheme_name.parse()?;
    let result = generator.generate_result(kind, base_hex, count)?;
    Ok((result, analyzer))
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <scheme> <base_color>", program_name);
    eprintln!();
    eprintln!("Generate a color scheme from a base color.");
    eprintln!();
    eprintln!("Schemes: complementary, analogous, triadic, tetradic, monochromatic, harmonic");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --count, -n N    Number of colors (analogous, monochromatic, harmonic)");
    eprintln!("  --config FILE    Engine configuration JSON");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} triadic '#3498DB'", program_name);
    eprintln!("  {} monochromatic e74c3c --count 6", program_name);
}

fn print_result(result: &SchemeResult, analyzer: &ColorAnalyzer) {
    // JSON on stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    // Summary on stderr for human reading
    eprintln!();
    eprintln!("{} scheme from {}:", result.kind, result.base);
    let pairs = match result.text_colors(analyzer) {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("  Could not analyze colors: {}", e);
            return;
        }
    };
    for (color, text) in pairs {
        match contrast_ratio(&color, &text) {
            Ok(ratio) => eprintln!("  {}  text {}  contrast {:.2}:1", color, text, ratio),
            Err(e) => eprintln!("  {}  {}", color, e),
        }
    }
}
