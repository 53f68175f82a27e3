// src/models/undo_model.rs

use serde::{Deserialize, Serialize};

use crate::models::position::Position;

/// アンドゥ対象になる操作の種類だよ。
///
/// デルタ記録でカバーするのはこの2種類だけ！備用牌堆とのスワップや引き札は
/// スナップショット履歴側で面倒を見るよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoActionType {
    /// 底牌堆の中でトップスロットを選び直した操作
    HandSwap,
    /// 主牌堆のカードが底牌堆のトップに置かれた操作
    PlayfieldToHand,
}

impl UndoActionType {
    /// セーブデータで使う数値表現だよ。
    pub fn ordinal(self) -> i32 {
        match self {
            UndoActionType::HandSwap => 1,
            UndoActionType::PlayfieldToHand => 2,
        }
    }

    pub fn from_ordinal(ordinal: i32) -> Option<UndoActionType> {
        match ordinal {
            1 => Some(UndoActionType::HandSwap),
            2 => Some(UndoActionType::PlayfieldToHand),
            _ => None,
        }
    }
}

/// 実行済みの1ムーブぶんの「直前の状態」を覚えておく記録だよ。
/// これ1件で、そのムーブをきっちり逆再生できるだけの情報を持つ！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoRecord {
    /// どの種類のムーブだったか
    pub action_type: UndoActionType,
    /// 動かしたカードの ID
    pub source_card_id: u32,
    /// 相手になったカード（＝当時の底牌堆トップ）の ID
    pub target_card_id: u32,
    /// 動かしたカードのムーブ前の位置
    pub source_position: Position,
    /// 相手カードのムーブ前の位置
    pub target_position: Position,
    /// ムーブ前の底牌堆トップインデックス
    pub hand_top_index: Option<usize>,
    /// 動かしたカードの主牌堆内インデックス（主牌堆由来のときだけ）
    pub playfield_index: Option<usize>,
    /// 動かしたカード（または相手）の底牌堆内インデックス
    pub stack_index: Option<usize>,
}

/// アンドゥ記録を積んでおく LIFO の台帳だよ。
///
/// 上限は設けてない（牌堆は高々数十枚で、1レコードも小さいからね）。
/// 容量に上限が欲しい履歴はスナップショット側の担当！
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UndoModel {
    undo_records: Vec<UndoRecord>,
}

impl UndoModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録を台帳の一番上に積むよ。
    pub fn add_undo_record(&mut self, record: UndoRecord) {
        self.undo_records.push(record);
    }

    /// 一番上の記録を覗き見するよ（取り出さない）。
    pub fn last_undo_record(&self) -> Option<&UndoRecord> {
        self.undo_records.last()
    }

    /// 一番上の記録を取り出すよ。
    pub fn remove_last_undo_record(&mut self) -> Option<UndoRecord> {
        self.undo_records.pop()
    }

    /// アンドゥできる操作が残ってるか？
    pub fn has_undoable_action(&self) -> bool {
        !self.undo_records.is_empty()
    }

    pub fn clear_all_records(&mut self) {
        self.undo_records.clear();
    }

    pub fn record_count(&self) -> usize {
        self.undo_records.len()
    }

    /// 台帳まるごとをテキストのセーブデータに変換するよ。
    /// 形式: `recordCount:N;` の後に各記録の `key:value;` 列、記録の区切りは `---`。
    pub fn to_save_data(&self) -> String {
        let mut out = format!("recordCount:{};", self.undo_records.len());

        for record in &self.undo_records {
            out.push_str(&format!("actionType:{};", record.action_type.ordinal()));
            out.push_str(&format!("sourceCardId:{};", record.source_card_id));
            out.push_str(&format!("targetCardId:{};", record.target_card_id));
            out.push_str(&format!(
                "sourcePosition:{},{};",
                record.source_position.x, record.source_position.y
            ));
            out.push_str(&format!(
                "targetPosition:{},{};",
                record.target_position.x, record.target_position.y
            ));
            out.push_str(&format!(
                "handTopIndex:{};",
                record.hand_top_index.map_or(-1, |i| i as i64)
            ));
            out.push_str(&format!(
                "playfieldIndex:{};",
                record.playfield_index.map_or(-1, |i| i as i64)
            ));
            out.push_str(&format!(
                "stackIndex:{};",
                record.stack_index.map_or(-1, |i| i as i64)
            ));
            out.push_str("---");
        }

        out
    }

    /// セーブデータから台帳を復元するよ。形式が壊れてたら None！
    pub fn from_save_data(data: &str) -> Option<UndoModel> {
        let mut model = UndoModel::new();

        let rest = data.strip_prefix("recordCount:")?;
        let (count_text, mut rest) = rest.split_once(';')?;
        let count: usize = count_text.trim().parse().ok()?;

        for _ in 0..count {
            let (record_text, after) = rest.split_once("---")?;
            rest = after;

            let mut action_type = None;
            let mut source_card_id = 0u32;
            let mut target_card_id = 0u32;
            let mut source_position = Position::ZERO;
            let mut target_position = Position::ZERO;
            let mut hand_top_index = None;
            let mut playfield_index = None;
            let mut stack_index = None;

            for line in record_text.split(';').filter(|line| !line.is_empty()) {
                let (key, value) = line.split_once(':')?;
                match key {
                    "actionType" => {
                        action_type = UndoActionType::from_ordinal(value.trim().parse().ok()?);
                    }
                    "sourceCardId" => source_card_id = value.trim().parse().ok()?,
                    "targetCardId" => target_card_id = value.trim().parse().ok()?,
                    "sourcePosition" => source_position = parse_position(value)?,
                    "targetPosition" => target_position = parse_position(value)?,
                    "handTopIndex" => {
                        hand_top_index = usize::try_from(value.trim().parse::<i64>().ok()?).ok();
                    }
                    "playfieldIndex" => {
                        playfield_index = usize::try_from(value.trim().parse::<i64>().ok()?).ok();
                    }
                    "stackIndex" => {
                        stack_index = usize::try_from(value.trim().parse::<i64>().ok()?).ok();
                    }
                    _ => {}
                }
            }

            model.undo_records.push(UndoRecord {
                action_type: action_type?,
                source_card_id,
                target_card_id,
                source_position,
                target_position,
                hand_top_index,
                playfield_index,
                stack_index,
            });
        }

        Some(model)
    }
}

/// `x,y` 形式の座標をパースするよ。
fn parse_position(value: &str) -> Option<Position> {
    let (x, y) = value.split_once(',')?;
    Some(Position::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
