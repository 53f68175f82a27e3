// src/models/mod.rs

// この models モジュールに属するサブモジュールを宣言するよ！
pub mod card; // カード1枚ぶんのデータモデル 🃏
pub mod game_model; // 3つの牌堆を束ねる中核モデル
pub mod position; // 描画位置のヒント 📍
pub mod undo_model; // アンドゥ記録の台帳
