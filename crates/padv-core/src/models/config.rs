//! Configuration structures for the renaming pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the padv pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PadvConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Document family detection configuration.
    pub detection: DetectionConfig,
}

impl Default for PadvConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            detection: DetectionConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum number of leading pages to decode. The target fields
    /// appear near the top of page 1 in the known document family.
    pub max_pages: usize,

    /// Minimum text length below which the per-page decode is treated
    /// as unusable and the full-document fallback kicks in.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 3,
            min_text_length: 20,
        }
    }
}

/// Document family detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Refuse documents that do not sniff as payment advices.
    pub require_payment_advice: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            require_payment_advice: false,
        }
    }
}

impl PadvConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
