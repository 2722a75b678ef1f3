// src/session/mod.rs

pub mod input;
pub mod format;
pub mod calculation;
pub mod error;

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::IntegrationParameters;
use crate::functions::CatalogFunction;
use crate::session::calculation::calculate;
use crate::session::error::CalculationError;
use crate::session::format::format_number;
use crate::session::input::{read_epsilon, read_number, read_selector};

pub use error::SessionError;

/// 関数選択メニューの書き込み
pub fn write_menu<W: Write>(output: &mut W) -> Result<(), std::io::Error> {
    writeln!(output, "Choose function to integrate:")?;
    for function in CatalogFunction::ALL {
        writeln!(output, "({}) {}", function.selector(), function.formula())?;
    }
    Ok(())
}

/// 対話セッションの実行
///
/// 関数と積分条件を読み込み、計算結果を書き出す。
/// 定義域外や収束しなかった場合はメッセージを出力して正常終了する。
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    params: &IntegrationParameters,
) -> Result<(), SessionError> {
    let digits = params.fraction_digits;

    write_menu(output)?;
    output.flush()?;
    let function = read_selector(input, output)?;

    writeln!(output, "Enter left limit:")?;
    output.flush()?;
    let left = read_number(input, output)?;
    writeln!(output, "Enter right limit:")?;
    output.flush()?;
    let right = read_number(input, output)?;
    writeln!(output, "Enter epsilon:")?;
    output.flush()?;
    let epsilon = read_epsilon(input, output)?;
    writeln!(output)?;

    let left_text = format_number(left, digits);
    let right_text = format_number(right, digits);
    writeln!(
        output,
        "Integrating function ({}) from {} to {} with epsilon = {}:",
        function.selector(),
        left_text,
        right_text,
        format_number(epsilon, digits)
    )?;
    info!(function = function.selector(), left, right, epsilon, "integration requested");

    match calculate(function, left, right, epsilon, &params.integrator()) {
        Ok(result) => {
            writeln!(output, "I = {}", format_number(result.integral, digits))?;
            writeln!(output, "Steps: {}", result.steps)?;
            writeln!(
                output,
                "Calculation error = {}",
                format_number(result.calculation_error, digits)
            )?;
        }
        Err(CalculationError::Domain(error)) => {
            writeln!(
                output,
                "Function ({}) is not defined on [{}, {}]: {}",
                function.selector(),
                left_text,
                right_text,
                error
            )?;
        }
        Err(CalculationError::Math(error)) => {
            writeln!(output, "Calculation failed: {}", error)?;
        }
    }
    output.flush()?;
    Ok(())
}
