// src/services/undo_service.rs
//! アンドゥ記録の作成・検証・逆再生を担当するサービスだよ。
//!
//! ここは全部ステートレスな関数！台帳（[`crate::models::undo_model::UndoModel`]）
//! の所有やライフサイクル管理はマネージャー側の仕事で、こっちは1レコードを
//! どう作ってどう巻き戻すかだけを知ってる。
//!
//! デルタ式の巻き戻しは「位置とトップインデックスの復元」だよ。カードの
//! 牌堆間の所属までは動かさない！所属ごと戻したいときはスナップショット
//! 履歴のほうを使ってね。

use log::warn;

use crate::error::MoveError;
use crate::models::game_model::GameModel;
use crate::models::undo_model::{UndoActionType, UndoRecord};

/// 底牌堆内スワップのアンドゥ記録を作るよ。ムーブ実行の「前」に呼ぶこと！
///
/// `from_card_id` が新しくトップになるカード、`to_card_id` がその時点の
/// トップカード。両方の現在位置と、現在のトップインデックスを控えておく。
pub fn create_hand_swap_record(
    game_model: &GameModel,
    from_card_id: u32,
    to_card_id: u32,
) -> UndoRecord {
    let source_position = game_model
        .find_bottom_pile_card(from_card_id)
        .map(|card| card.position)
        .unwrap_or_default();
    let target_position = game_model
        .find_bottom_pile_card(to_card_id)
        .map(|card| card.position)
        .unwrap_or_default();

    UndoRecord {
        action_type: UndoActionType::HandSwap,
        source_card_id: from_card_id,
        target_card_id: to_card_id,
        source_position,
        target_position,
        hand_top_index: game_model.bottom_pile_top_index(),
        playfield_index: None,
        stack_index: game_model.find_bottom_pile_index(from_card_id),
    }
}

/// 主牌堆→底牌堆ムーブのアンドゥ記録を作るよ。こちらもムーブの「前」に！
///
/// `playfield_card_id` が動かす主牌堆のカード、`stack_card_id` がその時点の
/// 底牌堆トップカード。
pub fn create_playfield_to_hand_record(
    game_model: &GameModel,
    playfield_card_id: u32,
    stack_card_id: u32,
) -> UndoRecord {
    let source_position = game_model
        .find_main_pile_card(playfield_card_id)
        .map(|card| card.position)
        .unwrap_or_default();
    let target_position = game_model
        .find_bottom_pile_card(stack_card_id)
        .map(|card| card.position)
        .unwrap_or_default();

    UndoRecord {
        action_type: UndoActionType::PlayfieldToHand,
        source_card_id: playfield_card_id,
        target_card_id: stack_card_id,
        source_position,
        target_position,
        hand_top_index: game_model.bottom_pile_top_index(),
        playfield_index: game_model.find_main_pile_index(playfield_card_id),
        stack_index: game_model.find_bottom_pile_index(stack_card_id),
    }
}

/// 記録が今のゲームモデルに対してまだ適用できるかチェックするよ。
///
/// - HandSwap: 両方のカードが底牌堆にいること
/// - PlayfieldToHand: 動かしたカードが主牌堆に、相手が底牌堆にいること
pub fn validate_undo_record(game_model: &GameModel, record: &UndoRecord) -> bool {
    match record.action_type {
        UndoActionType::HandSwap => {
            game_model.find_bottom_pile_card(record.source_card_id).is_some()
                && game_model.find_bottom_pile_card(record.target_card_id).is_some()
        }
        UndoActionType::PlayfieldToHand => {
            game_model.find_main_pile_card(record.source_card_id).is_some()
                && game_model.find_bottom_pile_card(record.target_card_id).is_some()
        }
    }
}

/// 記録を逆再生するよ。両カードの位置を記録時点に戻して、底牌堆のトップ
/// インデックスも巻き戻す。検証に落ちたら `CorruptUndoRecord` で、モデルは
/// 一切触らない！
pub fn execute_undo(game_model: &mut GameModel, record: &UndoRecord) -> Result<(), MoveError> {
    if !validate_undo_record(game_model, record) {
        warn!(
            "アンドゥ記録が解決できないよ: source={} target={}",
            record.source_card_id, record.target_card_id
        );
        return Err(MoveError::CorruptUndoRecord);
    }

    match record.action_type {
        UndoActionType::HandSwap => {
            if let Some(source) = game_model.find_bottom_pile_card_mut(record.source_card_id) {
                source.position = record.source_position;
            }
            if let Some(target) = game_model.find_bottom_pile_card_mut(record.target_card_id) {
                target.position = record.target_position;
            }
        }
        UndoActionType::PlayfieldToHand => {
            if let Some(source) = game_model.find_main_pile_card_mut(record.source_card_id) {
                source.position = record.source_position;
            }
            if let Some(target) = game_model.find_bottom_pile_card_mut(record.target_card_id) {
                target.position = record.target_position;
            }
        }
    }

    game_model.set_bottom_pile_top_index(record.hand_top_index);
    Ok(())
}
