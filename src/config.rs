use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tolerance used when comparing float results element by element.
///
/// Two values are close when their absolute difference is within `abs`, or
/// within `rel` times the larger magnitude of the two. NaN is never close to
/// anything, including another NaN. Fields missing from a serialized form
/// take their default value.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerance {
    pub abs: f32,
    pub rel: f32,
}

impl Tolerance {
    pub fn new(abs: f32, rel: f32) -> Self {
        Self { abs, rel }
    }

    /// Absolute-only tolerance.
    pub fn absolute(abs: f32) -> Self {
        Self { abs, rel: 0.0 }
    }

    pub fn close(&self, a: f32, b: f32) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.abs || diff <= self.rel * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: 1e-6,
            rel: 1e-5,
        }
    }
}

impl FromStr for Tolerance {
    type Err = String;

    /// Accepts a bare absolute epsilon (`"1e-4"`) or comma separated
    /// `abs=`/`rel=` pairs (`"abs=1e-4,rel=0"`). Missing keys keep their
    /// default value. Every value must be finite and non-negative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Expected a tolerance such as '1e-6' or 'abs=1e-6,rel=1e-5', got an empty string".to_string());
        }
        if let Ok(abs) = s.parse::<f32>() {
            return Ok(Tolerance::absolute(check_epsilon("abs", abs)?));
        }

        let mut tolerance = Tolerance::default();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| format!("Expected key=value, got '{}'", part))?;
            let value: f32 = value
                .trim()
                .parse()
                .map_err(|_| format!("Invalid number for '{}': '{}'", key.trim(), value.trim()))?;
            let value = check_epsilon(key.trim(), value)?;
            match key.trim().to_lowercase().as_str() {
                "abs" => tolerance.abs = value,
                "rel" => tolerance.rel = value,
                other => {
                    return Err(format!(
                        "Unknown tolerance key: {}. Expected 'abs' or 'rel'",
                        other
                    ))
                }
            }
        }
        Ok(tolerance)
    }
}

fn check_epsilon(key: &str, value: f32) -> Result<f32, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "Invalid value for '{}': {}. Expected a finite, non-negative number",
            key, value
        ));
    }
    Ok(value)
}
