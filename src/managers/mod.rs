// src/managers/mod.rs

// データの所有とライフサイクルを受け持つマネージャーたちだよ！
pub mod game_state_manager; // フルコピーのスナップショット履歴
pub mod undo_manager; // デルタ式アンドゥ台帳の元締め
