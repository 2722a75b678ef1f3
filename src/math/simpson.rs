// src/math/simpson.rs

use tracing::{debug, info, warn};

use crate::math::error::MathError;
use crate::math::result::IntegrationResult;

/// 初期分割数 (シンプソン則のため偶数)
pub const DEFAULT_INITIAL_STEPS: usize = 10;

/// シンプソン則に対するルンゲ則の係数 1 / (2^4 - 1)
const RUNGE_FACTOR: f64 = 1.0 / 15.0;

/// 合成シンプソン則による近似値
///
/// 3点組 [i-1, i, i+1] (i は 1 から steps-1 までの奇数) ごとに
/// f(x_{i-1}) + 4f(x_i) + f(x_{i+1}) を順に加算する。
/// 加算順序は結果の最下位ビットに影響するため変更しないこと。
///
/// # 引数
/// - `function`: 被積分関数
/// - `steps`: 分割数 (偶数)
/// - `left`: 積分区間の左端
/// - `h`: 刻み幅
///
/// # 戻り値
/// - 積分の近似値
pub fn simpson_sum<F>(function: &F, steps: usize, left: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut integral = 0.0;
    for i in (1..steps).step_by(2) {
        integral += function(left + h * (i - 1) as f64);
        integral += 4.0 * function(left + h * i as f64);
        integral += function(left + h * (i + 1) as f64);
    }
    integral * h / 3.0
}

/// 分割数倍増による適応シンプソン積分器
///
/// `max_iterations` が `None` の場合は収束するまで倍増を続ける。
/// 浮動小数点の精度に対して小さすぎる epsilon では停止しない可能性がある。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpsonIntegrator {
    pub initial_steps: usize,
    pub max_iterations: Option<u32>,
}

impl Default for SimpsonIntegrator {
    fn default() -> Self {
        SimpsonIntegrator {
            initial_steps: DEFAULT_INITIAL_STEPS,
            max_iterations: None,
        }
    }
}

impl SimpsonIntegrator {
    pub fn new(initial_steps: usize, max_iterations: Option<u32>) -> Self {
        SimpsonIntegrator {
            initial_steps,
            max_iterations,
        }
    }

    /// 定積分を epsilon 以内の精度で計算する
    ///
    /// # 引数
    /// - `function`: 被積分関数 (区間全体で定義されていること)
    /// - `left`: 積分の下端
    /// - `right`: 積分の上端 (下端より小さくてもよい)
    /// - `epsilon`: 許容誤差 (正の数)
    ///
    /// # 戻り値
    /// - 積分値、最終的な分割数、誤差評価
    pub fn integrate<F>(
        &self,
        function: F,
        left: f64,
        right: f64,
        epsilon: f64,
    ) -> Result<IntegrationResult, MathError>
    where
        F: Fn(f64) -> f64,
    {
        if epsilon.is_nan() || epsilon <= 0.0 {
            return Err(MathError::InvalidEpsilon(epsilon));
        }
        if self.initial_steps < 2 || self.initial_steps % 2 != 0 {
            return Err(MathError::InvalidInitialSteps(self.initial_steps));
        }
        if left == right {
            return Ok(IntegrationResult::zero_width());
        }

        // 積分方向の正規化
        let (lower, upper, direction) = if left > right {
            (right, left, -1.0)
        } else {
            (left, right, 1.0)
        };

        let mut steps = self.initial_steps;
        let mut h = (upper - lower) / steps as f64;
        let mut integral = simpson_sum(&function, steps, lower, h);
        let mut iterations: u32 = 0;

        loop {
            let next_steps = steps.checked_mul(2).ok_or(MathError::DidNotConverge {
                iterations,
                steps,
                error: f64::INFINITY,
            })?;
            steps = next_steps;
            h = (upper - lower) / steps as f64;
            let previous_integral = integral;
            integral = simpson_sum(&function, steps, lower, h);
            iterations += 1;

            let error = RUNGE_FACTOR * (integral - previous_integral).abs();
            debug!(steps, integral, error, "refinement round");

            if error > epsilon {
                if let Some(max_iterations) = self.max_iterations {
                    if iterations >= max_iterations {
                        warn!(iterations, steps, error, "refinement limit reached");
                        return Err(MathError::DidNotConverge {
                            iterations,
                            steps,
                            error,
                        });
                    }
                }
                continue;
            }

            info!(steps, error, "integral converged");
            return Ok(IntegrationResult {
                integral: direction * integral,
                steps,
                calculation_error: error,
            });
        }
    }
}

/// 既定の設定 (初期分割数 10、倍増回数の上限なし) で積分する
pub fn integrate<F>(
    function: F,
    left: f64,
    right: f64,
    epsilon: f64,
) -> Result<IntegrationResult, MathError>
where
    F: Fn(f64) -> f64,
{
    SimpsonIntegrator::default().integrate(function, left, right, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn square(x: f64) -> f64 {
        x * x
    }

    /// 3点組の加算順序をそのまま再現した値と一致すること
    #[test]
    fn test_simpson_sum_triplet_order() {
        let f = |x: f64| x.exp() - 3.0 * x;
        let h = 0.25;
        let expected = {
            let mut sum = 0.0;
            sum += f(0.0);
            sum += 4.0 * f(0.25);
            sum += f(0.5);
            sum += f(0.5);
            sum += 4.0 * f(0.75);
            sum += f(1.0);
            sum * h / 3.0
        };
        assert_eq!(simpson_sum(&f, 4, 0.0, h), expected);
    }

    #[test]
    fn test_simpson_sum_matches_weighted_form() {
        let f = |x: f64| x.sin();
        let steps = 8;
        let h = 2.0 / steps as f64;
        let weighted: f64 = (0..=steps)
            .map(|k| {
                let weight = if k == 0 || k == steps {
                    1.0
                } else if k % 2 == 1 {
                    4.0
                } else {
                    2.0
                };
                weight * f(h * k as f64)
            })
            .sum::<f64>()
            * h
            / 3.0;
        assert_abs_diff_eq!(simpson_sum(&f, steps, 0.0, h), weighted, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_width_interval() {
        for epsilon in [1e-12, 1e-3, 10.0] {
            let result = integrate(square, 2.5, 2.5, epsilon).unwrap();
            assert_eq!(result, IntegrationResult::zero_width());
        }
    }

    /// ∫x² dx (0..3) = 9
    #[test]
    fn test_square_closed_form() {
        let result = integrate(square, 0.0, 3.0, 1e-6).unwrap();
        assert_relative_eq!(result.integral, 9.0, epsilon = 1e-9);
        assert!(result.calculation_error < 1e-6);
        // 3次以下の多項式はシンプソン則で厳密なので最初の倍増で収束する
        assert_eq!(result.steps, 20);
    }

    #[test]
    fn test_cosine_closed_form() {
        let result = integrate(f64::cos, 0.0, std::f64::consts::PI / 2.0, 1e-10).unwrap();
        assert_abs_diff_eq!(result.integral, 1.0, epsilon = 1e-9);
        assert!(result.calculation_error <= 1e-10);
    }

    /// 分割数は常に偶数で、初期分割数の2のべき乗倍
    #[test]
    fn test_steps_are_power_of_two_multiples() {
        for epsilon in [1e-2, 1e-5, 1e-8, 1e-11] {
            let result = integrate(f64::exp, -1.0, 4.0, epsilon).unwrap();
            assert!(result.steps >= 20);
            assert_eq!(result.steps % 2, 0);
            assert_eq!(result.steps % DEFAULT_INITIAL_STEPS, 0);
            assert!((result.steps / DEFAULT_INITIAL_STEPS).is_power_of_two());
        }
    }

    #[test]
    fn test_reversed_limits_flip_sign_only() {
        let f = |x: f64| x.powi(3) + 10.0 * x * x;
        let forward = integrate(f, -2.0, 5.0, 1e-7).unwrap();
        let backward = integrate(f, 5.0, -2.0, 1e-7).unwrap();
        assert_eq!(backward.integral, -forward.integral);
        assert_eq!(backward.steps, forward.steps);
        assert_eq!(backward.calculation_error, forward.calculation_error);
    }

    #[test]
    fn test_smaller_epsilon_never_reduces_steps() {
        let f = |x: f64| -8.0 * x.cos() - 3.0 * x;
        let mut previous_steps = 0;
        for exponent in 1..=10 {
            let epsilon = 10f64.powi(-exponent);
            let result = integrate(f, 0.0, 20.0, epsilon).unwrap();
            assert!(result.steps >= previous_steps);
            previous_steps = result.steps;
        }
    }

    /// 誤差評価は最後に採用した分割数とその半分の組から計算される
    #[test]
    fn test_error_estimate_belongs_to_final_pair() {
        let result = integrate(f64::exp, 0.0, 3.0, 1e-9).unwrap();
        let h_final = 3.0 / result.steps as f64;
        let h_previous = 3.0 / (result.steps / 2) as f64;
        let last = simpson_sum(&f64::exp, result.steps, 0.0, h_final);
        let before = simpson_sum(&f64::exp, result.steps / 2, 0.0, h_previous);
        assert_eq!(result.integral, last);
        assert_eq!(result.calculation_error, RUNGE_FACTOR * (last - before).abs());
        assert!(result.calculation_error <= 1e-9);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let integrator = SimpsonIntegrator::new(10, Some(1));
        let result = integrator.integrate(f64::exp, 0.0, 10.0, 1e-300);
        match result {
            Err(MathError::DidNotConverge {
                iterations, steps, ..
            }) => {
                assert_eq!(iterations, 1);
                assert_eq!(steps, 20);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_iteration_cap_does_not_change_converging_result() {
        let capped = SimpsonIntegrator::new(10, Some(50))
            .integrate(f64::sin, 0.0, 3.0, 1e-8)
            .unwrap();
        let unbounded = integrate(f64::sin, 0.0, 3.0, 1e-8).unwrap();
        assert_eq!(capped, unbounded);
    }

    #[test]
    fn test_invalid_epsilon() {
        for epsilon in [0.0, -1e-3] {
            assert_eq!(
                integrate(square, 0.0, 1.0, epsilon),
                Err(MathError::InvalidEpsilon(epsilon))
            );
        }
        assert!(matches!(
            integrate(square, 0.0, 1.0, f64::NAN),
            Err(MathError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn test_invalid_initial_steps() {
        for steps in [0, 3, 11] {
            let result = SimpsonIntegrator::new(steps, None).integrate(square, 0.0, 1.0, 1e-3);
            assert_eq!(result, Err(MathError::InvalidInitialSteps(steps)));
        }
    }
}
