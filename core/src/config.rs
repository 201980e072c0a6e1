use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

pub const DEFAULT_REFERENCE_YEAR: u16 = 2019;
pub const DEFAULT_PREDICT_TOP_K: usize = 4;

#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    /// Anchor year for recency weights: `1 + (reference_year - movie_year)`.
    pub reference_year: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictConfig {
    /// How many collaborators and candidates a prediction returns.
    pub top_k: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub graph: GraphConfig,
    pub predict: PredictConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_PREDICT_TOP_K,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            predict: PredictConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("graph.reference_year", i64::from(DEFAULT_REFERENCE_YEAR))?
            .set_default("predict.top_k", DEFAULT_PREDICT_TOP_K as i64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("COSTAR"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.graph.reference_year, 2019);
        assert_eq!(cfg.predict.top_k, 4);
    }
}
