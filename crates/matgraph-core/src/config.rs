use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::io::IsTerminal;
use std::path::Path;

use crate::graph::Orientation;
use crate::variant::{DigitVariants, VariantLookup, VariantTable};

/// Coefficients used when neither the config nor the CLI supplies any.
///
/// With [`DigitVariants`] this gives `k = 0.75 - 0.02·c - 0.005·d` for
/// variant `abcd`.
pub const DEFAULT_COEFFICIENTS: [f64; 4] = [0.75, 0.0, -0.02, -0.005];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Explicit variant table: `"<id>" = [p0, p1, p2, p3]`.
    #[serde(default)]
    pub variants: BTreeMap<String, [i64; 4]>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub variant: Option<u32>,
    #[serde(default = "default_coefficients")]
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub orientation: Orientation,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            variant: None,
            coefficients: default_coefficients(),
            orientation: Orientation::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub project: ProjectConfig,
    pub user: UserConfig,
    pub resolved_output: String,
}

impl ProjectConfig {
    /// The variant lookup this configuration selects.
    ///
    /// An explicit `[variants]` table replaces the four-digit default.
    ///
    /// # Errors
    ///
    /// Fails when a table key is not an unsigned integer.
    pub fn variant_lookup(&self) -> Result<Box<dyn VariantLookup>> {
        if self.variants.is_empty() {
            return Ok(Box::new(DigitVariants));
        }

        let entries = self
            .variants
            .iter()
            .map(|(key, params)| {
                key.trim()
                    .parse::<u32>()
                    .map(|id| (id, *params))
                    .with_context(|| format!("Invalid variant identifier '{key}' in [variants]"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Box::new(VariantTable::new(entries)))
    }
}

pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(".matgraph/config.toml");
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("matgraph/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn resolve_config(project_root: &Path, cli_json: bool) -> Result<EffectiveConfig> {
    let project = load_project_config(project_root)?;
    let user = load_user_config()?;

    let env_format = env::var("FORMAT").ok();
    let resolved_output = resolve_output(
        cli_json,
        user.output.as_deref(),
        env_format.as_deref(),
        std::io::stdout().is_terminal(),
    );

    Ok(EffectiveConfig {
        project,
        user,
        resolved_output,
    })
}

fn resolve_output(
    cli_json: bool,
    user_output: Option<&str>,
    env_format: Option<&str>,
    is_tty: bool,
) -> String {
    fn normalize_output_mode(raw: &str) -> Option<&'static str> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "human" => Some("pretty"),
            "text" | "table" => Some("text"),
            "json" => Some("json"),
            _ => None,
        }
    }

    if cli_json {
        return "json".to_string();
    }

    if let Some(mode) = env_format.and_then(normalize_output_mode) {
        return mode.to_string();
    }

    if let Some(mode) = user_output.and_then(normalize_output_mode) {
        return mode.to_string();
    }

    let fallback = if is_tty { "pretty" } else { "text" };
    fallback.to_string()
}

fn default_coefficients() -> Vec<f64> {
    DEFAULT_COEFFICIENTS.to_vec()
}

const fn default_width() -> f32 {
    800.0
}

const fn default_height() -> f32 {
    600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::VariantParams;

    fn write_project_config(root: &Path, content: &str) {
        let dir = root.join(".matgraph");
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("write config");
    }

    #[test]
    fn missing_project_config_uses_defaults() {
        let root = tempfile::tempdir().expect("temp dir");
        let cfg = load_project_config(root.path()).expect("load should succeed");
        assert_eq!(cfg.generation.coefficients, DEFAULT_COEFFICIENTS.to_vec());
        assert_eq!(cfg.generation.orientation, Orientation::Directed);
        assert!(cfg.generation.variant.is_none());
        assert!(cfg.variants.is_empty());
        assert!((cfg.layout.width - 800.0).abs() < f32::EPSILON);
    }

    #[test]
    fn project_config_parses_generation_and_variants() {
        let root = tempfile::tempdir().expect("temp dir");
        write_project_config(
            root.path(),
            r#"
[generation]
variant = 7
coefficients = [1.0, 0.5]
orientation = "undirected"

[variants]
"7" = [42, 1, 2, 3]

[layout]
width = 1024.0
"#,
        );

        let cfg = load_project_config(root.path()).expect("load should succeed");
        assert_eq!(cfg.generation.variant, Some(7));
        assert_eq!(cfg.generation.coefficients, vec![1.0, 0.5]);
        assert_eq!(cfg.generation.orientation, Orientation::Undirected);
        assert!((cfg.layout.width - 1024.0).abs() < f32::EPSILON);
        assert!((cfg.layout.height - 600.0).abs() < f32::EPSILON, "default height");

        let lookup = cfg.variant_lookup().expect("valid table");
        assert_eq!(lookup.params(7), Ok(VariantParams([42, 1, 2, 3])));
        assert!(lookup.params(3213).is_err(), "table replaces digit lookup");
    }

    #[test]
    fn malformed_project_config_reports_path() {
        let root = tempfile::tempdir().expect("temp dir");
        write_project_config(root.path(), "[generation\nvariant = ");
        let err = load_project_config(root.path()).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse"));
    }

    #[test]
    fn non_numeric_variant_key_is_rejected() {
        let mut cfg = ProjectConfig::default();
        cfg.variants.insert("abc".to_string(), [1, 2, 3, 4]);
        let err = cfg.variant_lookup().err().expect("invalid key");
        assert!(format!("{err}").contains("abc"));
    }

    #[test]
    fn empty_table_falls_back_to_digits() {
        let lookup = ProjectConfig::default().variant_lookup().expect("default");
        assert_eq!(lookup.params(3213), Ok(VariantParams([3213, 2, 1, 3])));
    }

    #[test]
    fn cli_json_overrides_env_and_config() {
        assert_eq!(resolve_output(true, Some("pretty"), Some("text"), true), "json");
    }

    #[test]
    fn env_beats_user_config() {
        assert_eq!(resolve_output(false, Some("pretty"), Some("text"), true), "text");
    }

    #[test]
    fn legacy_aliases_are_normalized() {
        assert_eq!(resolve_output(false, Some("table"), Some("human"), false), "pretty");
        assert_eq!(resolve_output(false, Some("human"), Some("table"), false), "text");
    }

    #[test]
    fn tty_decides_when_nothing_is_set() {
        assert_eq!(resolve_output(false, None, None, true), "pretty");
        assert_eq!(resolve_output(false, None, Some("bogus"), false), "text");
    }

    #[test]
    fn user_config_parses_output() {
        let cfg: UserConfig = toml::from_str("output = \"json\"").expect("parse");
        assert_eq!(cfg.output.as_deref(), Some("json"));
    }
}
