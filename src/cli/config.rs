//! `athena config init`

use crate::cli::ConfigInitArgs;
use std::borrow::Cow;
use std::fs;

const TEMPLATE: &str = include_str!("../../athena.example.toml");
const SEED_PLACEHOLDER: &str = "# seed = 42          # fixed seed for reproducible datasets";

/// The example configuration, with the seed line filled in when one is given.
pub fn render_template(seed: Option<u64>) -> Cow<'static, str> {
    match seed {
        Some(seed) => Cow::Owned(TEMPLATE.replacen(
            SEED_PLACEHOLDER,
            &format!("seed = {}", seed),
            1,
        )),
        None => Cow::Borrowed(TEMPLATE),
    }
}

/// Write the example configuration to `args.output`.
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "{} already exists; pass --force to replace it",
            args.output.display()
        )
        .into());
    }

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.output, render_template(args.seed).as_bytes())?;

    println!("✓ Wrote {}", args.output.display());
    match args.seed {
        Some(seed) => println!("  Datasets are pinned to seed {}.", seed),
        None => println!("  Set [generation].seed for reproducible datasets."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AthenaConfig;

    fn args(output: std::path::PathBuf, force: bool, seed: Option<u64>) -> ConfigInitArgs {
        ConfigInitArgs {
            output,
            force,
            seed,
        }
    }

    #[test]
    fn test_template_contains_seed_placeholder() {
        assert!(TEMPLATE.contains(SEED_PLACEHOLDER));
        assert!(matches!(render_template(None), Cow::Borrowed(_)));
    }

    #[test]
    fn test_config_init_creates_loadable_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("athena.toml");

        handle_config_init(&args(output_path.clone(), false, None)).unwrap();

        let config = AthenaConfig::load(Some(&output_path)).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.generation.seed.is_none());
    }

    #[test]
    fn test_config_init_pins_seed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("nested/dir/athena.toml");

        handle_config_init(&args(output_path.clone(), false, Some(77))).unwrap();

        let config = AthenaConfig::load(Some(&output_path)).unwrap();
        assert_eq!(config.generation.seed, Some(77));
    }

    #[test]
    fn test_config_init_no_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("athena.toml");
        std::fs::write(&output_path, "existing").unwrap();

        let err = handle_config_init(&args(output_path.clone(), false, None)).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "existing");
    }

    #[test]
    fn test_config_init_force_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("athena.toml");
        std::fs::write(&output_path, "old content").unwrap();

        handle_config_init(&args(output_path.clone(), true, None)).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[generation]"));
    }
}
