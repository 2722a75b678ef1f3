// src/config/parameters.rs

use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::config::error::ConfigError;
use crate::math::simpson::{SimpsonIntegrator, DEFAULT_INITIAL_STEPS};

/// 積分計算の設定
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IntegrationParameters {
    pub initial_steps: usize,        // 初期分割数 (偶数)
    pub max_iterations: Option<u32>, // 分割数倍増の上限回数 (None で無制限)
    pub fraction_digits: usize,      // 出力する小数部の最大桁数
    pub log_level: String,           // ログレベル
}

impl Default for IntegrationParameters {
    fn default() -> Self {
        IntegrationParameters {
            initial_steps: DEFAULT_INITIAL_STEPS,
            max_iterations: None,
            fraction_digits: 5,
            log_level: "warn".to_string(),
        }
    }
}

impl IntegrationParameters {
    /// 設定値の検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_steps < 2 || self.initial_steps % 2 != 0 {
            return Err(ConfigError::InvalidInitialSteps(self.initial_steps));
        }
        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterationLimit);
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn integrator(&self) -> SimpsonIntegrator {
        SimpsonIntegrator::new(self.initial_steps, self.max_iterations)
    }
}
