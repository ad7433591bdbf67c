//! Write or check an engine configuration file
//!
//! `generate_config <file>` writes the defaults; `generate_config --validate
//! <file>` loads an existing file, applies defaults for missing fields and
//! reports whether it would be accepted by the engine.

use chroma_schemes::{ColorAnalyzer, EngineConfig, SchemeGenerator, SchemeKind};
use std::{env, path::Path, process};

enum Mode<'a> {
    Write(&'a Path),
    Validate(&'a Path),
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("generate_config");

    let mode = match args.get(1..).unwrap_or_default() {
        [flag, path] if flag == "--validate" => Mode::Validate(Path::new(path)),
        [path] if !path.starts_with("--") => Mode::Write(Path::new(path)),
        _ => {
            eprintln!("Usage: {program} <output_config.json>");
            eprintln!("       {program} --validate <config.json>");
            process::exit(1);
        }
    };

    let outcome = match mode {
        Mode::Write(path) => write_defaults(path),
        Mode::Validate(path) => validate(path),
    };
    if let Err(message) = outcome {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn write_defaults(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("creating {}: {e}", parent.display()))?;
    }

    let config = EngineConfig::default();
    config.to_json_file(path).map_err(|e| e.to_string())?;
    eprintln!("Default configuration saved to {}", path.display());
    print_summary(&config);
    Ok(())
}

fn validate(path: &Path) -> Result<(), String> {
    let config = EngineConfig::from_json_file(path)
        .map_err(|e| format!("{e} ({})", e.user_message()))?;
    let generator = SchemeGenerator::new(config.schemes.clone()).map_err(|e| e.to_string())?;
    let analyzer = ColorAnalyzer::from_config(&config.analysis).map_err(|e| e.to_string())?;

    eprintln!("{} is valid", path.display());
    print_summary(&config);

    // Show what the configuration produces for a sample color
    let sample = generator
        .generate_result(SchemeKind::Monochromatic, "#3498DB", None)
        .map_err(|e| e.to_string())?;
    let pairs = sample.text_colors(&analyzer).map_err(|e| e.to_string())?;
    eprintln!();
    eprintln!("Sample {} ramp from {}:", sample.kind, sample.base);
    for (color, text) in pairs {
        eprintln!("  {color} -> text {text}");
    }
    Ok(())
}

fn print_summary(config: &EngineConfig) {
    eprintln!(
        "  Default counts: analogous {}, monochromatic {}, harmonic {}",
        config.schemes.analogous_count,
        config.schemes.monochromatic_count,
        config.schemes.harmonic_count
    );
    eprintln!(
        "  Light threshold: {:.1}, text {} / {}",
        config.analysis.light_threshold, config.analysis.dark_text, config.analysis.light_text
    );
}
