use crate::error::{PunchcardError, Result};
use crate::paths;
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CURRENT_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub escape_xml: bool,
}

impl RenderConfig {
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            escape_xml: self.escape_xml,
        }
    }
}

// ---------------------------------------------------------------------------
// ExportConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Where exported cards are written, relative to the project root.
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

// ---------------------------------------------------------------------------
// ClipboardConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Command line that reads the card from stdin, e.g. `xclip -selection clipboard`.
    /// Auto-detected when unset.
    #[serde(default)]
    pub command: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            render: RenderConfig::default(),
            export: ExportConfig::default(),
            clipboard: ClipboardConfig::default(),
        }
    }
}

impl Config {
    /// Load `.punchcard/config.yaml`, or defaults if the project has none.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn export_dir(&self, root: &Path) -> PathBuf {
        paths::export_dir(root, &self.export.dir)
    }

    /// Keys accepted by [`Config::set`].
    pub const KEYS: &'static [&'static str] =
        &["render.escape_xml", "export.dir", "clipboard.command"];

    /// Set one dotted key. An empty `clipboard.command` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "render.escape_xml" => {
                self.render.escape_xml = value.trim().parse().map_err(|_| {
                    PunchcardError::InvalidConfig(format!(
                        "render.escape_xml expects true or false, got '{value}'"
                    ))
                })?;
            }
            "export.dir" => self.export.dir = PathBuf::from(value),
            "clipboard.command" => {
                self.clipboard.command = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            _ => {
                return Err(PunchcardError::InvalidConfig(format!(
                    "unknown key '{key}' (expected one of: {})",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != CURRENT_VERSION {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "unknown config version {} (expected {CURRENT_VERSION})",
                    self.version
                ),
            });
        }

        if self.export.dir.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "export.dir is empty; use '.' for the project root".to_string(),
            });
        }

        if let Some(cmd) = &self.clipboard.command {
            if cmd.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: "clipboard.command is blank; remove it to auto-detect".to_string(),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
