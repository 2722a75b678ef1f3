// src/session/input.rs

use std::io::{BufRead, Write};

use crate::functions::CatalogFunction;
use crate::session::error::SessionError;

pub const SELECTOR_RETRY: &str = "Enter number of chosen function (1, 2, 3, 4 or 5):";
pub const NUMBER_RETRY: &str = "Enter correct number:";

/// 関数番号の解析
pub fn parse_selector(line: &str) -> Option<CatalogFunction> {
    line.trim()
        .parse::<u8>()
        .ok()
        .and_then(CatalogFunction::from_selector)
}

/// 数値の解析
///
/// 連続するカンマは1つの小数点として扱う。有限でない値は受け付けない。
pub fn parse_number(line: &str) -> Option<f64> {
    let mut normalized = String::with_capacity(line.len());
    let mut previous_comma = false;
    for c in line.trim().chars() {
        if c == ',' {
            if !previous_comma {
                normalized.push('.');
            }
            previous_comma = true;
        } else {
            normalized.push(c);
            previous_comma = false;
        }
    }
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// 許容誤差の解析 (正の数のみ)
pub fn parse_epsilon(line: &str) -> Option<f64> {
    parse_number(line).filter(|value| *value > 0.0)
}

/// 1行読み込む。入力が終了していればエラー
fn read_line<R: BufRead>(input: &mut R) -> Result<String, SessionError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::InputClosed);
    }
    Ok(line)
}

/// 解析に成功するまで読み込みを繰り返す
///
/// # 引数
/// - `input`: 入力
/// - `output`: 再入力を促すメッセージの出力先
/// - `retry_message`: 解析に失敗した時のメッセージ
/// - `parse`: 解析関数
fn read_until_valid<R, W, T, P>(
    input: &mut R,
    output: &mut W,
    retry_message: &str,
    parse: P,
) -> Result<T, SessionError>
where
    R: BufRead,
    W: Write,
    P: Fn(&str) -> Option<T>,
{
    loop {
        let line = read_line(input)?;
        if let Some(value) = parse(&line) {
            return Ok(value);
        }
        writeln!(output, "{}", retry_message)?;
        output.flush()?;
    }
}

pub fn read_selector<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<CatalogFunction, SessionError> {
    read_until_valid(input, output, SELECTOR_RETRY, parse_selector)
}

pub fn read_number<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64, SessionError> {
    read_until_valid(input, output, NUMBER_RETRY, parse_number)
}

pub fn read_epsilon<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64, SessionError> {
    read_until_valid(input, output, NUMBER_RETRY, parse_epsilon)
}
