use std::io::Read;

use anyhow::Context;
use camera_map_core::{build_sector_collection, decode_cameras_lossy, decode_valid_cameras};
use clap::Parser;

/// Turn a JSON camera list into field-of-view sectors as GeoJSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "camera-map-native", version)]
struct Options {
    /// Camera list JSON file, or `-` to read stdin.
    #[arg(value_name = "CAMERAS", default_value = "-")]
    input: String,
    /// Pretty-print the GeoJSON output.
    #[arg(long = "pretty", action = clap::ArgAction::SetTrue)]
    pretty: bool,
    /// Fail on records with missing or non-finite geometry instead of
    /// skipping undecodable ones and emitting NaN sectors.
    #[arg(long = "strict", action = clap::ArgAction::SetTrue)]
    strict: bool,
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading cameras from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading cameras from {input}"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = Options::parse();
    let text = read_input(&options.input)?;
    let cameras = if options.strict {
        decode_valid_cameras(&text)?
    } else {
        decode_cameras_lossy(&text)?
    };

    let incomplete = cameras.iter().filter(|c| c.validate().is_err()).count();
    if incomplete > 0 {
        log::warn!("{incomplete} camera(s) have missing or non-finite geometry");
    }

    let collection = build_sector_collection(&cameras);
    log::info!("generated {} sectors", collection.len());
    let out = if options.pretty {
        collection.to_json_pretty()?
    } else {
        collection.to_json()?
    };
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("camera-map-native").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_stdin() {
        let o = parse(&[]).unwrap();
        assert_eq!(o.input, "-");
        assert!(!o.pretty && !o.strict);
    }

    #[test]
    fn flags_and_path_in_any_order() {
        let o = parse(&["--pretty", "cams.json", "--strict"]).unwrap();
        assert_eq!(o.input, "cams.json");
        assert!(o.pretty && o.strict);
    }

    #[test]
    fn rejects_second_path() {
        assert!(parse(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn help_is_not_a_usage_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
