// src/session/calculation.rs

use crate::functions::{CatalogFunction, IntegrationPlan};
use crate::math::{IntegrationResult, SimpsonIntegrator};
use crate::session::error::CalculationError;

/// 定義域と特異点の判定を行った上で積分する
///
/// # 引数
/// - `function`: 選択された関数
/// - `left`, `right`: 積分の上下端
/// - `epsilon`: 許容誤差
/// - `integrator`: 使用する積分器
///
/// # 戻り値
/// - 積分結果 (発散する場合は {+∞, 1, 0})
/// - 定義域外の場合は`CalculationError::Domain`
pub fn calculate(
    function: CatalogFunction,
    left: f64,
    right: f64,
    epsilon: f64,
    integrator: &SimpsonIntegrator,
) -> Result<IntegrationResult, CalculationError> {
    match function.plan(left, right)? {
        IntegrationPlan::Divergent => Ok(IntegrationResult::divergent()),
        IntegrationPlan::Integrate => {
            let result = integrator.integrate(|x| function.evaluate(x), left, right, epsilon)?;
            Ok(result)
        }
    }
}
