use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use entropy::Seed;
use scene::{GeneratedUniverse, ValidationReport};
use tracing::{info, warn};
use universe_generator::{GenerationConfig, generate_system, generate_systems, validate};

use crate::GenerateArgs;

/// Default configuration, or the defaults overridden by a TOML file.
pub fn load_config(path: Option<&Path>) -> Result<GenerationConfig> {
    let Some(path) = path else {
        return Ok(GenerationConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GenerationConfig> {
    let config: GenerationConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

pub fn default_config() -> Result<String> {
    Ok(toml::to_string(&GenerationConfig::default())?)
}

pub fn resolve_seed(seed: Option<&str>) -> Seed {
    match seed {
        Some(text) => Seed::from(text),
        None => Seed::from(rand::random::<u64>()),
    }
}

/// Generate per `args` without writing anything.
pub fn build(args: &GenerateArgs) -> Result<GeneratedUniverse> {
    let config = load_config(args.config.as_deref())?;
    let seed = resolve_seed(args.seed.as_deref());
    info!(seed = seed.value(), systems = args.systems, "generating");

    let universe = if args.systems == 1 {
        generate_system(&config, seed)?
    } else {
        generate_systems(args.systems, &config, seed)?
    };
    Ok(universe)
}

pub fn to_json(universe: &GeneratedUniverse, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(universe)?
    } else {
        serde_json::to_string(universe)?
    };
    Ok(json)
}

pub fn generate(args: &GenerateArgs) -> Result<ExitCode> {
    let universe = build(args)?;
    let report = validate(&universe);
    let json = to_json(&universe, args.pretty)?;

    match &args.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("failed to write to stdout")?;
        }
    }

    if report.is_valid() {
        return Ok(ExitCode::SUCCESS);
    }
    for violation in report.iter() {
        warn!("{}", violation);
    }
    if args.strict {
        bail!("generated universe has {} validation violations", report.len());
    }
    Ok(ExitCode::SUCCESS)
}

pub fn load_snapshot(path: &Path) -> Result<GeneratedUniverse> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("malformed snapshot {}", path.display()))
}

pub fn describe(report: &ValidationReport) -> String {
    if report.is_valid() {
        return "valid: no violations".to_string();
    }
    let mut lines = vec![format!("invalid: {} violations", report.len())];
    lines.extend(report.iter().map(|v| format!("  - {}", v)));
    lines.join("\n")
}

pub fn validate_snapshot(path: &Path) -> Result<ExitCode> {
    let universe = load_snapshot(path)?;
    let report = validate(&universe);
    println!("{}", describe(&report));

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
