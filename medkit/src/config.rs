use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::Result;
use crate::types::{Language, Role};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedflowConfig {
    pub default_language: Language,
    pub default_role: Role,
    pub queue: QueueConfig,
    pub booking: BookingConfig,
    pub reveal: RevealConfig,
}

impl Default for MedflowConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Uz,
            default_role: Role::Admin,
            queue: QueueConfig::default(),
            booking: BookingConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Simulated queue countdown on the patient dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub initial_position: u32,
    pub interval_secs: u64,
    pub minutes_per_position: u32,
}

impl QueueConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_position: 3,
            interval_secs: 5,
            minutes_per_position: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub upcoming_days: u32,
    pub time_slots: Vec<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        let slots = [
            "09:00", "09:30", "10:00", "10:30", "11:00", "14:00", "14:30", "15:00", "15:30",
            "16:00", "16:30",
        ];
        Self {
            upcoming_days: 5,
            time_slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Intersection options for the reveal-on-scroll wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Parse a YAML document into [`MedflowConfig`]. Missing keys keep defaults.
pub fn load_config_str(yaml: &str) -> Result<MedflowConfig> {
    let config = Config::builder()
        .add_source(File::from_str(yaml, FileFormat::Yaml))
        .build()?;

    let config: MedflowConfig = config.try_deserialize()?;
    log::debug!(
        "Config loaded: lang={}, role={}, queue starts at {}",
        config.default_language.code(),
        config.default_role.slug(),
        config.queue.initial_position
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let yaml = r#"
default_language: ru
default_role: patient
queue:
  initial_position: 6
  interval_secs: 2
  minutes_per_position: 10
booking:
  upcoming_days: 3
  time_slots: ["08:00", "08:30"]
reveal:
  threshold: 0.25
  root_margin: "0px"
"#;
        let config = load_config_str(yaml).unwrap();

        assert_eq!(config.default_language, Language::Ru);
        assert_eq!(config.default_role, Role::Patient);
        assert_eq!(config.queue.initial_position, 6);
        assert_eq!(config.queue.interval(), Duration::from_secs(2));
        assert_eq!(config.booking.upcoming_days, 3);
        assert_eq!(config.booking.time_slots, vec!["08:00", "08:30"]);
        assert_eq!(config.reveal.threshold, 0.25);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = load_config_str("queue:\n  initial_position: 4\n").unwrap();

        assert_eq!(config.queue.initial_position, 4);
        assert_eq!(config.queue.interval_secs, 5);
        assert_eq!(config.default_language, Language::Uz);
        assert_eq!(config.booking, BookingConfig::default());
    }

    #[test]
    fn test_malformed_document() {
        let err = load_config_str("queue: [unclosed").unwrap_err();
        assert!(matches!(err, crate::DemoError::ConfigError(_)));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let queue = QueueConfig {
            interval_secs: 0,
            ..QueueConfig::default()
        };
        assert_eq!(queue.interval(), Duration::from_secs(1));
    }
}
