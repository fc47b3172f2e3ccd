use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

/// Alert policy thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Blocked/total fraction above which a "high block rate" alert is
    /// emitted (0.0-1.0, exclusive/inclusive)
    #[serde(default = "default_block_rate")]
    pub block_rate: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            block_rate: default_block_rate(),
        }
    }
}

impl AlertConfig {
    fn validate(&self) -> Result<(), String> {
        if self.block_rate > 0.0 && self.block_rate <= 1.0 {
            Ok(())
        } else {
            Err(format!(
                "alerts.block_rate must be in (0.0, 1.0], got {}",
                self.block_rate
            ))
        }
    }
}

/// Stack-signature derivation constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureConfig {
    /// Number of top stack frames joined into a signature
    #[serde(default = "default_signature_depth")]
    pub depth: usize,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            depth: default_signature_depth(),
        }
    }
}

impl SignatureConfig {
    fn validate(&self) -> Result<(), String> {
        if self.depth == 0 {
            Err("signature.depth must be at least 1".to_string())
        } else {
            Ok(())
        }
    }
}

/// Report presentation constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of ranked stack patterns shown in reports
    #[serde(default = "default_top_patterns")]
    pub top_patterns: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_patterns: default_top_patterns(),
        }
    }
}

/// Analysis configuration, loadable from `.jstackmap.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JstackmapConfig {
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub signature: SignatureConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_block_rate() -> f64 {
    0.2
}

fn default_signature_depth() -> usize {
    3
}

fn default_top_patterns() -> usize {
    10
}

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML config string, replacing invalid sections with defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<JstackmapConfig, String> {
    let mut config = toml::from_str::<JstackmapConfig>(contents)
        .map_err(|e| format!("Failed to parse .jstackmap.toml: {}", e))?;

    if let Err(e) = config.alerts.validate() {
        eprintln!("Warning: {}. Using default.", e);
        config.alerts = AlertConfig::default();
    }
    if let Err(e) = config.signature.validate() {
        eprintln!("Warning: {}. Using default.", e);
        config.signature = SignatureConfig::default();
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<JstackmapConfig> {
    let contents = read_config_file(config_path).ok()?;

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Load configuration from the nearest `.jstackmap.toml`, walking from the
/// current directory to the filesystem root. Missing or invalid files fall
/// back to defaults.
pub fn load_config() -> JstackmapConfig {
    std::env::current_dir()
        .ok()
        .map(|dir| {
            dir.ancestors()
                .map(|d| d.join(".jstackmap.toml"))
                .find_map(|path| try_load_config_from_path(&path))
                .unwrap_or_default()
        })
        .unwrap_or_default()
}

static CONFIG: OnceLock<JstackmapConfig> = OnceLock::new();

/// Cached process-wide configuration.
pub fn get_config() -> &'static JstackmapConfig {
    CONFIG.get_or_init(load_config)
}
