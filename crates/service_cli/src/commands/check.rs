//! Check command implementation
//!
//! Validates the settings and the experiment catalog, then prints a summary.

use stimulus_core::catalog::Experiment;
use stimulus_core::types::AssetClass;
use tracing::info;

use crate::config::StimuliSettings;
use crate::Result;

/// Run the check command
pub fn run(settings: &StimuliSettings) -> Result<()> {
    info!("Checking configuration...");
    settings.validate()?;
    let experiment = super::load_experiment(settings.experiment.as_deref())?;
    print!("{}", summary(&experiment));
    info!("Configuration OK");
    Ok(())
}

/// Human-readable description of a validated experiment.
pub fn summary(experiment: &Experiment) -> String {
    let layout = experiment.layout();
    let modes: Vec<String> = layout.modes.iter().map(ToString::to_string).collect();
    let scalings: Vec<String> = layout.scalings.iter().map(ToString::to_string).collect();

    let mut out = String::new();
    out.push_str(&format!("Experiment:   {}\n", experiment.name()));
    out.push_str(&format!("Scenarios:    {}\n", experiment.scenarios().len()));
    out.push_str(&format!("Multipliers:  {:?}\n", experiment.multipliers()));
    out.push_str(&format!(
        "Blocks:       {} x {} ({:?} order)\n",
        modes.join("/"),
        scalings.join("/"),
        layout.mode_order
    ));
    out.push_str(&format!("Rounds:       {}\n", experiment.round_count()));
    for class in AssetClass::ALL {
        out.push_str(&format!(
            "{:<13} {} labels, placeholder '{}'\n",
            format!("{}:", class.title()),
            experiment.labels(class).len(),
            experiment.placeholder(class)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stimulus_core::catalog::ExperimentConfig;

    #[test]
    fn test_summary_of_shipped_variant() {
        let experiment = ExperimentConfig::default().validate().unwrap();
        let text = summary(&experiment);
        assert!(text.contains("Scenarios:    5"));
        assert!(text.contains("Rounds:       20"));
        assert!(text.contains("blind/named x unscaled/scaled"));
        assert!(text.contains("placeholder 'Asset A'"));
    }

    #[test]
    fn test_run_with_defaults() {
        assert!(run(&StimuliSettings::default()).is_ok());
    }
}
