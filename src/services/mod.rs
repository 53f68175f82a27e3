// src/services/mod.rs

// 状態を持たないビジネスロジックを置くモジュールだよ！
pub mod game_model_generator; // レベル設定からゲームモデルを組み立てる工場 🏭
pub mod undo_service; // アンドゥ記録の作成・検証・逆再生
