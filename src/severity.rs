//! PM2.5 concentration to map color.

/// One row of the breakpoint table. `upper_bound` is exclusive; `None` is the
/// catch-all row and must come last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBand {
    pub upper_bound: Option<f64>,
    pub color: &'static str,
}

const fn band(upper_bound: f64, color: &'static str) -> SeverityBand {
    SeverityBand {
        upper_bound: Some(upper_bound),
        color,
    }
}

/// Breakpoints in ascending order; the first band whose bound exceeds the
/// concentration wins.
pub const SEVERITY_BANDS: [SeverityBand; 12] = [
    band(4.0, "#31a354"),
    band(8.0, "#a1d99b"),
    band(12.0, "#e5f5e0"),
    band(20.0, "#ffffcc"),
    band(28.0, "#ffeda0"),
    band(35.0, "#fed976"),
    band(42.0, "#feb24c"),
    band(49.0, "#fd8d3c"),
    band(55.0, "#fc4e2a"),
    band(150.0, "#e31a1c"),
    band(200.0, "#bd0026"),
    SeverityBand {
        upper_bound: None,
        color: "#800026",
    },
];

/// Color for a concentration.
///
/// Negative readings are not clamped and fall into the lowest band. NaN never
/// satisfies a bound and lands in the catch-all.
pub fn classify(concentration: f64) -> &'static str {
    SEVERITY_BANDS
        .iter()
        .find(|b| b.upper_bound.map_or(true, |bound| concentration < bound))
        .map_or(CATCH_ALL_COLOR, |b| b.color)
}

const CATCH_ALL_COLOR: &str = SEVERITY_BANDS[SEVERITY_BANDS.len() - 1].color;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ascending_with_single_catch_all() {
        let bounds: Vec<f64> = SEVERITY_BANDS.iter().filter_map(|b| b.upper_bound).collect();
        assert_eq!(bounds.len(), SEVERITY_BANDS.len() - 1);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(SEVERITY_BANDS.last().unwrap().upper_bound.is_none());
    }

    #[test]
    fn test_boundaries_belong_to_upper_band() {
        let eps = 1e-3;
        for pair in SEVERITY_BANDS.windows(2) {
            let bound = pair[0].upper_bound.unwrap();
            assert_eq!(classify(bound - eps), pair[0].color, "just below {bound}");
            assert_eq!(classify(bound), pair[1].color, "at {bound}");
        }
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(classify(3.999), "#31a354");
        assert_eq!(classify(4.0), "#a1d99b");
        assert_eq!(classify(10.0), "#e5f5e0");
        assert_eq!(classify(199.99), "#bd0026");
        assert_eq!(classify(200.0), "#800026");
    }

    #[test]
    fn test_negative_is_not_clamped() {
        assert_eq!(classify(-5.0), "#31a354");
        assert_eq!(classify(f64::NEG_INFINITY), "#31a354");
    }

    #[test]
    fn test_catch_all() {
        assert_eq!(classify(1000.0), "#800026");
        assert_eq!(classify(f64::INFINITY), "#800026");
        assert_eq!(classify(f64::NAN), "#800026");
    }

    #[test]
    fn test_every_band_is_reachable() {
        let probes = [0.0, 5.0, 10.0, 15.0, 25.0, 30.0, 40.0, 45.0, 50.0, 100.0, 175.0, 500.0];
        let colors: Vec<&str> = probes.iter().map(|c| classify(*c)).collect();
        let expected: Vec<&str> = SEVERITY_BANDS.iter().map(|b| b.color).collect();
        assert_eq!(colors, expected);
    }
}
