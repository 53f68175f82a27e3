// src/utils/mod.rs

// 汎用ヘルパーのモジュールだよ！今はマッチ判定とテキスト表現だけ。
pub mod card_utils;
