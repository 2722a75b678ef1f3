// src/config/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde_yaml::from_reader;

use crate::config::error::ConfigError;
use crate::config::parameters::IntegrationParameters;

/// 既定の設定ファイル
pub const DEFAULT_CONFIG_PATH: &str = "config/integration.yaml";

/// 積分パラメータの読み込み
pub fn load_integration_parameters(path: &str) -> Result<IntegrationParameters, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let params: IntegrationParameters = from_reader(file).map_err(|source| ConfigError::Yaml {
        path: path.to_string(),
        source,
    })?;
    params.validate()?;
    Ok(params)
}

/// コマンドライン引数に応じた設定の読み込み
///
/// # 引数
/// - `explicit_path`: 引数で指定された設定ファイル
///
/// # 戻り値
/// - 指定があればそのファイルの内容 (存在しなければエラー)
/// - 指定がなければ既定ファイルの内容、既定ファイルも無ければ既定値
pub fn resolve_parameters(explicit_path: Option<&str>) -> Result<IntegrationParameters, ConfigError> {
    match explicit_path {
        Some(path) => load_integration_parameters(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_integration_parameters(DEFAULT_CONFIG_PATH)
        }
        None => Ok(IntegrationParameters::default()),
    }
}
