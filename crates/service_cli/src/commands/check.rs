//! Check command implementation
//!
//! Prints the effective configuration and validates it.

use credit_core::types::BusinessDayConvention;
use credit_models::schedules::Frequency;
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, config_path: &Path) -> Result<()> {
    info!("Checking configuration...");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    println!("Configuration ({})", source);
    println!("  log_level              = {}", config.log_level);
    println!("  tolerance              = {:e}", config.calibration.tolerance);
    println!("  max_iterations         = {}", config.calibration.max_iterations);
    println!("  initial_hazard         = {}", config.calibration.initial_hazard);
    println!("  derivative_floor       = {:e}", config.calibration.derivative_floor);
    println!(
        "  reject_negative_hazard = {}",
        config.calibration.reject_negative_hazard
    );

    println!(
        "  coupon schedule        = {} / {}",
        Frequency::default(),
        schedule_convention()
    );

    config.validate()?;
    println!("Configuration OK");
    Ok(())
}

/// Business-day rule applied to generated coupon dates, by short code.
fn schedule_convention() -> &'static str {
    BusinessDayConvention::default().code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass() {
        assert!(run(&CliConfig::default(), Path::new("absent.toml")).is_ok());
    }

    #[test]
    fn test_schedule_convention_is_modified_following() {
        assert_eq!(schedule_convention(), "MF");
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut config = CliConfig::default();
        config.calibration.max_iterations = 0;
        assert!(matches!(
            run(&config, Path::new("absent.toml")),
            Err(crate::CliError::Config(_))
        ));
    }
}
