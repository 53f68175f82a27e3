// src/configs/mod.rs

// レベルの静的設定を置くモジュールだよ！
pub mod level_config;
