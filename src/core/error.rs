// Custom error types for the worker pool
// ワーカープール専用のカスタムエラー型定義

use thiserror::Error;

/// ワーカープール固有のエラー型
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ProcessingError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 設定を直して再実行すれば済むものだけが回復可能。
    /// ワーカーのクラッシュはリトライしないため、タスクエラーは回復不能として扱う
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationError { .. } => true,
            Self::ChannelError { .. } | Self::TaskError { .. } => false,
        }
    }
}

/// ワーカープール処理の結果型
pub type ProcessingResult<T> = Result<T, ProcessingError>;
