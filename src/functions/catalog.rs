// src/functions/catalog.rs

use tracing::warn;

use crate::functions::domain::{Domain, Singularity};
use crate::functions::error::DomainError;

/// 積分対象として選択できる関数の一覧
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFunction {
    Square,
    CubicPolynomial,
    PoleWithSine,
    Logarithm,
    Sinc,
}

/// 積分を実行する前に決まる処理方針
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationPlan {
    /// 通常どおり数値積分する
    Integrate,
    /// 除去できない特異点を含むため発散として扱う
    Divergent,
}

impl CatalogFunction {
    /// メニューに表示する順序
    pub const ALL: [CatalogFunction; 5] = [
        CatalogFunction::Square,
        CatalogFunction::CubicPolynomial,
        CatalogFunction::PoleWithSine,
        CatalogFunction::Logarithm,
        CatalogFunction::Sinc,
    ];

    /// 番号 (1〜5) から関数を取得する
    pub fn from_selector(selector: u8) -> Option<CatalogFunction> {
        match selector {
            1..=5 => Some(Self::ALL[usize::from(selector - 1)]),
            _ => None,
        }
    }

    pub fn selector(&self) -> u8 {
        match self {
            CatalogFunction::Square => 1,
            CatalogFunction::CubicPolynomial => 2,
            CatalogFunction::PoleWithSine => 3,
            CatalogFunction::Logarithm => 4,
            CatalogFunction::Sinc => 5,
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            CatalogFunction::Square => "x^2",
            CatalogFunction::CubicPolynomial => "x^3 + 10x^2",
            CatalogFunction::PoleWithSine => "12/x^3 + sin(x+6)",
            CatalogFunction::Logarithm => "ln(x)",
            CatalogFunction::Sinc => "sin(x)/x",
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            CatalogFunction::Logarithm => Domain::GreaterThan(0.0),
            _ => Domain::AllReals,
        }
    }

    pub fn singularity(&self) -> Singularity {
        match self {
            CatalogFunction::PoleWithSine => Singularity::Pole { at: 0.0 },
            CatalogFunction::Sinc => Singularity::Removable { at: 0.0, limit: 1.0 },
            _ => Singularity::None,
        }
    }

    /// 関数値の計算
    ///
    /// 除去可能な特異点ではその極限値を返す。
    pub fn evaluate(&self, x: f64) -> f64 {
        if let Singularity::Removable { at, limit } = self.singularity() {
            if x == at {
                return limit;
            }
        }
        match self {
            CatalogFunction::Square => x * x,
            CatalogFunction::CubicPolynomial => x.powi(3) + 10.0 * x * x,
            CatalogFunction::PoleWithSine => 12.0 / x.powi(3) + (x + 6.0).sin(),
            CatalogFunction::Logarithm => x.ln(),
            CatalogFunction::Sinc => x.sin() / x,
        }
    }

    /// 積分区間に対する処理方針の決定
    ///
    /// # 引数
    /// - `left`, `right`: 積分の上下端 (順不同)
    ///
    /// # 戻り値
    /// - 定義域外を含む場合は`DomainError`
    /// - 除去できない特異点を含む場合は`IntegrationPlan::Divergent`
    pub fn plan(&self, left: f64, right: f64) -> Result<IntegrationPlan, DomainError> {
        let (lower, upper) = if left <= right { (left, right) } else { (right, left) };

        if let Domain::GreaterThan(bound) = self.domain() {
            if !self.domain().contains_interval(lower, upper) {
                warn!(function = self.selector(), lower, upper, "interval outside domain");
                return Err(DomainError::BelowLowerBound {
                    formula: self.formula(),
                    bound,
                });
            }
        }

        if self.singularity().diverges_on(lower, upper) {
            warn!(function = self.selector(), lower, upper, "interval contains a pole");
            return Ok(IntegrationPlan::Divergent);
        }

        Ok(IntegrationPlan::Integrate)
    }
}
