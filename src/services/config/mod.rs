// 設定管理機能

pub mod implementations;

// 公開API
pub use implementations::DefaultPoolConfig;
