//! Runtime configuration for the demo.

/// Default bubble radius in pixels.
const DEFAULT_RADIUS: i32 = 60;
/// Default effect intensity.
const DEFAULT_INTENSITY: f32 = 50.0;

/// Settings that command-line flags fall back to.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Fixed seed for randomized effects; OS entropy when unset.
    pub seed: Option<u64>,
    /// Bubble radius in pixels.
    pub radius: i32,
    /// Effect strength, nominally 0–100.
    pub intensity: f32,
}

impl DemoConfig {
    /// Apply command-line overrides on top of the environment defaults.
    pub fn with_overrides(
        self,
        seed: Option<u64>,
        radius: Option<i32>,
        intensity: Option<f32>,
    ) -> Self {
        Self {
            seed: seed.or(self.seed),
            radius: radius.unwrap_or(self.radius),
            intensity: intensity.unwrap_or(self.intensity),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: env_parse("GLITCH_SEED"),
            radius: env_parse("GLITCH_RADIUS").unwrap_or(DEFAULT_RADIUS),
            intensity: env_parse("GLITCH_INTENSITY").unwrap_or(DEFAULT_INTENSITY),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
