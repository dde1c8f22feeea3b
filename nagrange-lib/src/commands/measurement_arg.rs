use super::config::Config;
use crate::PluginError;
use crate::perf::Measurement;

/// Characters that may appear in a number; anything else trailing the value is its unit.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

/// Parse a `NAME=VALUE[UNIT]` argument into a measurement.
///
/// The configuration's declaration for the same name supplies min, max and
/// slot, and the scale when the argument carries no unit of its own.
pub fn parse_measurement(arg: &str, config: &Config) -> Result<Measurement, PluginError> {
    let Some((name, text)) = arg.split_once('=') else {
        return Err(PluginError::usage(format!("measurement '{arg}' must look like NAME=VALUE[UNIT]")));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(PluginError::usage(format!("measurement '{arg}' has no name")));
    }

    let text = text.trim();
    let (number, unit) = text.split_at(text.trim_end_matches(|c: char| !is_number_char(c)).len());

    let mut measurement = Measurement::parse(name, number).map_err(|e| match e {
        PluginError::NotNumeric { name, .. } => PluginError::NotNumeric { name, text: text.to_string() },
        other => other,
    })?;

    if let Some(decl) = config.metric(name) {
        if let Some(min) = decl.min {
            measurement = measurement.with_min(min);
        }
        if let Some(max) = decl.max {
            measurement = measurement.with_max(max);
        }
        if let Some(scale) = decl.scale
            && unit.is_empty()
        {
            measurement = measurement.with_scale(scale.token());
        }
        measurement = measurement.with_slot(decl.slot);
    }

    if !unit.is_empty() {
        measurement = measurement.with_scale(unit);
    }

    Ok(measurement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MetricDecl;
    use crate::perf::Scale;

    #[test]
    fn test_plain_value() {
        let m = parse_measurement("load=0.75", &Config::default()).unwrap();
        assert_eq!(m.name(), "load");
        assert!((m.value() - 0.75).abs() < f64::EPSILON);
        assert_eq!(m.scale(), None);
        assert_eq!(m.slot(), 1);
    }

    #[test]
    fn test_units_are_split_off() {
        for (arg, value, unit) in [("disk=93.5%", 93.5, "%"), ("rx=12KB", 12.0, "KB"), ("rtt=-1.5e2ms", -150.0, "ms"), ("t=3s", 3.0, "s")] {
            let m = parse_measurement(arg, &Config::default()).unwrap();
            assert!((m.value() - value).abs() < f64::EPSILON, "{arg}");
            assert_eq!(m.scale(), Some(unit), "{arg}");
        }
    }

    #[test]
    fn test_malformed_arguments() {
        assert!(matches!(parse_measurement("disk", &Config::default()), Err(PluginError::Usage(_))));
        assert!(matches!(parse_measurement("=5", &Config::default()), Err(PluginError::Usage(_))));
        assert!(matches!(
            parse_measurement("disk=full", &Config::default()),
            Err(PluginError::NotNumeric { ref name, ref text }) if name == "disk" && text == "full"
        ));
        assert!(matches!(parse_measurement("disk=", &Config::default()), Err(PluginError::NotNumeric { .. })));
    }

    #[test]
    fn test_declaration_fills_in_details() {
        let mut config = Config::default();
        config.metrics.push(MetricDecl {
            name: "disk".to_string(),
            scale: Some(Scale::Percent),
            min: Some(0.0),
            max: Some(100.0),
            slot: 2,
        });

        let m = parse_measurement("disk=42", &config).unwrap();
        assert_eq!(m.scale(), Some("%"));
        assert_eq!(m.min(), Some(0.0));
        assert_eq!(m.max(), Some(100.0));
        assert_eq!(m.slot(), 2);

        let m = parse_measurement("disk=42GB", &config).unwrap();
        assert_eq!(m.scale(), Some("GB"));

        let m = parse_measurement("load=1", &config).unwrap();
        assert_eq!(m.scale(), None);
        assert_eq!(m.slot(), 1);
    }
}
