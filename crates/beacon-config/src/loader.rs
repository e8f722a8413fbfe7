use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path or telemetry settings are invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        if let Some(ref telemetry) = self.telemetry {
            if telemetry.service_name.is_empty() {
                anyhow::bail!("telemetry.service_name must not be empty");
            }
            if !(0.0..=1.0).contains(&telemetry.sampling_rate) {
                anyhow::bail!("telemetry.sampling_rate must be between 0.0 and 1.0");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, ExportProtocol};

    #[test]
    fn minimal_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        config.validate().unwrap();

        assert!(config.server.listen_address.is_none());
        assert!(config.server.health.enabled);
        assert_eq!(config.server.health.path, "/health");
        assert!(config.telemetry.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            [server]
            listen_address = "127.0.0.1:4000"

            [server.health]
            path = "/healthz"

            [telemetry]
            service_name = "beacon-test"
            sampling_rate = 0.5
            resource_attributes = { "deployment.environment" = "test" }

            [telemetry.exporter]
            endpoint = "http://localhost:4317"
            protocol = "grpc"
            "#,
        )
        .unwrap();
        config.validate().unwrap();

        assert_eq!(config.server.listen_address.unwrap().port(), 4000);
        assert_eq!(config.server.health.path, "/healthz");

        let telemetry = config.telemetry.unwrap();
        assert_eq!(telemetry.service_name, "beacon-test");
        assert!((telemetry.sampling_rate - 0.5).abs() < f64::EPSILON);
        assert!(matches!(telemetry.exporter.unwrap().protocol, ExportProtocol::Grpc));
    }

    #[test]
    fn out_of_range_sampling_rate_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [telemetry]
            sampling_rate = 1.5
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sampling_rate"));
    }

    #[test]
    fn relative_health_path_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [server.health]
            path = "healthz"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("unknown = true").is_err());
    }
}
