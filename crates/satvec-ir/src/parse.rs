use crate::config::{ConfigError, GeneratorConfig};

/// Parse and validate a generator config from JSON. Missing keys take their
/// defaults.
pub fn parse_config(json: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
