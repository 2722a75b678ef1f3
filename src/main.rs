// src/main.rs

use std::env;
use std::error::Error;
use std::io;

use config::resolve_parameters;
use session::run_session;

mod config;
mod functions;
mod math;
mod session;

fn main() -> Result<(), Box<dyn Error>> {
    // 設定の読み込み (引数で設定ファイルを指定可能)
    let config_path = env::args().nth(1);
    let params = resolve_parameters(config_path.as_deref())?;

    // ログは標準エラー出力へ
    tracing_subscriber::fmt()
        .with_max_level(params.level()?)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &params)?;

    Ok(())
}
