// src/error.rs

use std::fmt;

/// ムーブや履歴操作が失敗した理由だよ。
///
/// どのエラーでもゲームモデルは一切変更されない（全か無かの遷移）！
/// プロセスが落ちるような致命的エラーは無くて、呼び出し側は別のムーブを
/// そのまま出し直せるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// 指定されたカード ID が期待した牌堆に見つからなかった
    NotFound,
    /// 隣接条件やクリック可能条件を満たしていない
    IllegalMove,
    /// 対象にすべきトップカードが無い（牌堆が空）
    EmptyPile,
    /// 履歴の端っこでアンドゥ／リドゥしようとした
    HistoryExhausted,
    /// アンドゥ記録が参照するカードがもう解決できない
    CorruptUndoRecord,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveError::NotFound => "card not found in the expected pile",
            MoveError::IllegalMove => "move does not satisfy the match rules",
            MoveError::EmptyPile => "no top card available in the target pile",
            MoveError::HistoryExhausted => "no more history entries in that direction",
            MoveError::CorruptUndoRecord => "undo record references unresolvable cards",
        };
        write!(f, "{}", text)
    }
}

impl std::error::Error for MoveError {}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        // 全バリアントがちゃんと文字列になるか確認！
        for error in [
            MoveError::NotFound,
            MoveError::IllegalMove,
            MoveError::EmptyPile,
            MoveError::HistoryExhausted,
            MoveError::CorruptUndoRecord,
        ] {
            assert!(!error.to_string().is_empty());
        }
        println!("MoveError 表示テスト、成功！🎉");
    }
}
