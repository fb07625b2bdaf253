// ロギング基盤
//
// 出力は全て標準エラーへ送り、標準出力の判定結果と混ざらないようにする。
//
// 環境変数:
// - `PRIME_POOL_LOG`        フィルタ指定（RUST_LOG より優先）
// - `PRIME_POOL_LOG_FORMAT` 出力形式: pretty, compact, json
// - `RUST_LOG`              標準のフィルタ指定（フォールバック）

use std::fmt as std_fmt;
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログ出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 人間向けの標準形式
    #[default]
    Pretty,
    /// 1行にまとめた形式
    Compact,
    /// ログ集約向けのJSON形式
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "full" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Unknown log format: '{s}'. Valid options: pretty, compact, json"
            )),
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// ロギング設定
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 基本ログレベル（既定: WARN）
    pub level: Level,
    pub format: LogFormat,
    /// フィルタ文字列（設定時は level より優先）
    pub filter: Option<String>,
    /// スレッドIDを表示するか（ワーカーの追跡用）
    pub show_thread_ids: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Pretty,
            filter: None,
            show_thread_ids: false,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `-v` の回数からログレベルを決める
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self::default()
            .with_level(level)
            .with_thread_ids(verbose >= 2)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_thread_ids(mut self, enabled: bool) -> Self {
        self.show_thread_ids = enabled;
        self
    }

    /// 環境変数による上書きを適用
    ///
    /// フィルタが既に設定されている場合は環境変数で上書きしない
    pub fn with_env_overrides(mut self) -> Self {
        if self.filter.is_none() {
            if let Ok(filter) = std::env::var("PRIME_POOL_LOG") {
                self.filter = Some(filter);
            } else if let Ok(filter) = std::env::var("RUST_LOG") {
                self.filter = Some(filter);
            }
        }

        if let Ok(format) = std::env::var("PRIME_POOL_LOG_FORMAT") {
            if let Ok(parsed) = format.parse() {
                self.format = parsed;
            }
        }

        self
    }

    fn build_filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::new(self.level.to_string().to_lowercase());
        match self.filter {
            Some(ref filter) => EnvFilter::try_new(filter).unwrap_or_else(|_| {
                eprintln!("Warning: Invalid log filter '{filter}', using default");
                fallback()
            }),
            None => fallback(),
        }
    }
}

/// グローバルな tracing サブスクライバを初期化
///
/// 2回目以降の呼び出しは無視される
pub fn init(config: LogConfig) {
    let filter = config.build_filter();

    let result = match config.format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_thread_ids(config.show_thread_ids)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_thread_ids(config.show_thread_ids)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    let _ = result;
}
