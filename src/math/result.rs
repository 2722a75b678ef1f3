// src/math/result.rs

/// 積分結果
///
/// 精度を満たした時点で一度だけ生成され、以後は変更されない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationResult {
    pub integral: f64,
    pub steps: usize,
    pub calculation_error: f64, // 最後に採用した近似値に対するルンゲ則の誤差評価
}

impl IntegrationResult {
    /// 幅ゼロの区間に対する結果 {0, 1, 0}
    pub fn zero_width() -> Self {
        IntegrationResult {
            integral: 0.0,
            steps: 1,
            calculation_error: 0.0,
        }
    }

    /// 除去できない特異点を含む区間に対する結果 {+∞, 1, 0}
    pub fn divergent() -> Self {
        IntegrationResult {
            integral: f64::INFINITY,
            steps: 1,
            calculation_error: 0.0,
        }
    }
}
