// src/controllers/mod.rs

// ムーブの検証と実行を受け持つコントローラーたちだよ！
pub mod game_controller; // 入力の振り分けと全体のオーケストレーション 🎮
pub mod play_field_controller; // 主牌堆 → 底牌堆のムーブ
pub mod reserve_pile_controller; // 備用牌堆 ⇄ 底牌堆のスワップ
pub mod stack_controller; // 底牌堆の中のトップ付け替え

#[cfg(test)]
mod tests;
