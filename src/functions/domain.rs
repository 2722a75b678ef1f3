// src/functions/domain.rs

/// 関数の定義域
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// 実数全体 (特異点を除く)
    AllReals,
    /// bound より大きい実数のみ
    GreaterThan(f64),
}

impl Domain {
    /// 閉区間 [lower, upper] が定義域に含まれるか
    pub fn contains_interval(&self, lower: f64, upper: f64) -> bool {
        match *self {
            Domain::AllReals => true,
            Domain::GreaterThan(bound) => lower > bound && upper > bound,
        }
    }
}

/// 特異点の記述
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Singularity {
    None,
    /// 除去可能な特異点 (その点では極限値を返す)
    Removable { at: f64, limit: f64 },
    /// 除去できない特異点 (積分は発散する)
    Pole { at: f64 },
}

impl Singularity {
    /// 閉区間 [lower, upper] が除去できない特異点を含むか
    pub fn diverges_on(&self, lower: f64, upper: f64) -> bool {
        match *self {
            Singularity::Pole { at } => lower <= at && at <= upper,
            Singularity::None | Singularity::Removable { .. } => false,
        }
    }
}
