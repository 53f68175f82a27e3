// src/models/position.rs

// serde を使う宣言！位置情報をセーブデータに入れたりするかも！
use serde::{Deserialize, Serialize};

/// 2D空間での位置を表す型だよ！ (x, y) 座標を持つよ。📍
///
/// カードの描画位置のヒントとして使うんだけど、ルール判定には一切関係しない！
/// あくまで「このカードはだいたいここに置いてあるよ」っていうプレゼン層向けの情報。
///
/// #[derive(...)] のおまじない！
/// - Debug: デバッグ表示用
/// - Clone, Copy: 座標は小さいからコピーで渡してOK！
/// - PartialEq: 同じ位置にあるかチェックする時に使う
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// 原点 (0, 0) だよ。カード生成時のデフォルト位置！
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    /// 新しい Position を作るヘルパー関数。
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ZERO
    }
}
