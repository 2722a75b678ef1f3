// src/session/format.rs

/// 数値の表示用文字列
///
/// 小数部は最大 `fraction_digits` 桁で丸め、末尾の0と小数点は省く。
/// 小数点は入力の書式によらず常に `.` を使う。
pub fn format_number(value: f64, fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let fixed = format!("{:.*}", fraction_digits, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    // 丸めで0になった負の値
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
