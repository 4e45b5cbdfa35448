use std::env;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `" 10:42:01 up 3 days,  4:05,  2 users, load average: ..."`
    Long,
    /// `"up 3 days, 4 hours, 5 minutes"`
    Pretty,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Long,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_vars();
        config
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(pretty_str) = env::var("UPTIME_PRETTY") {
            if pretty_str.to_lowercase() == "true" || pretty_str == "1" {
                self.format = OutputFormat::Pretty;
            }
        }
    }

    pub fn set_pretty(&mut self) {
        self.format = OutputFormat::Pretty;
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption(opt) => write!(f, "Unknown option: {}", opt),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.format, OutputFormat::Long);
    }

    #[test]
    #[serial]
    fn test_env_var_pretty() {
        unsafe {
            env::set_var("UPTIME_PRETTY", "true");
        }
        let config = AppConfig::from_env();
        assert_eq!(config.format, OutputFormat::Pretty);
        unsafe {
            env::remove_var("UPTIME_PRETTY");
        }
    }

    #[test]
    #[serial]
    fn test_env_var_pretty_numeric() {
        unsafe {
            env::set_var("UPTIME_PRETTY", "1");
        }
        let config = AppConfig::from_env();
        assert_eq!(config.format, OutputFormat::Pretty);
        unsafe {
            env::remove_var("UPTIME_PRETTY");
        }
    }

    #[test]
    #[serial]
    fn test_env_var_pretty_ignores_other_values() {
        unsafe {
            env::set_var("UPTIME_PRETTY", "no");
        }
        let config = AppConfig::from_env();
        assert_eq!(config.format, OutputFormat::Long);
        unsafe {
            env::remove_var("UPTIME_PRETTY");
        }
    }
}
