// src/controllers/play_field_controller.rs
//! 主牌堆 → 底牌堆のムーブを受け持つコントローラーだよ。
//!
//! 主牌堆のカードが今の底牌堆トップと隣接してたら、トップのスロットを
//! そのカードで上書きする。押し出された前のトップカードはゲームから
//! 消える（片道切符！）から、ムーブのたびに合計枚数は1枚減るよ。

use log::{debug, info};

use crate::error::MoveError;
use crate::managers::undo_manager::UndoManager;
use crate::models::game_model::GameModel;
use crate::services::undo_service;
use crate::utils::card_utils;

/// 主牌堆のクリックを処理するコントローラーだよ。状態は持たない！
#[derive(Debug, Default)]
pub struct PlayFieldController;

impl PlayFieldController {
    pub fn new() -> Self {
        Self
    }

    /// 主牌堆のカードがクリックされたときの入口だよ。
    /// 検証 → デルタ記録 → 実行の順。失敗したらモデルは一切変わらない！
    pub fn handle_card_click(
        &self,
        game_model: &mut GameModel,
        undo_manager: &mut UndoManager,
        card_id: u32,
    ) -> Result<(), MoveError> {
        self.can_move_to_hand(game_model, card_id)?;
        self.execute_move_to_hand(game_model, undo_manager, card_id)
    }

    /// ムーブが成立するかの検証だけを行うよ。
    pub fn can_move_to_hand(&self, game_model: &GameModel, card_id: u32) -> Result<(), MoveError> {
        let playfield_card = game_model
            .find_main_pile_card(card_id)
            .ok_or(MoveError::NotFound)?;
        let top_card = game_model
            .bottom_pile_top_card()
            .ok_or(MoveError::EmptyPile)?;

        if !card_utils::can_match_with_bottom_pile(playfield_card, top_card) {
            debug!(
                "マッチ不成立: {} は {} に置けないよ",
                playfield_card.card_text(),
                top_card.card_text()
            );
            return Err(MoveError::IllegalMove);
        }
        Ok(())
    }

    fn execute_move_to_hand(
        &self,
        game_model: &mut GameModel,
        undo_manager: &mut UndoManager,
        card_id: u32,
    ) -> Result<(), MoveError> {
        // 検証済みなのでトップは必ずいる。ムーブ前の状態をデルタ記録に控える！
        let top_card = game_model
            .bottom_pile_top_card()
            .ok_or(MoveError::EmptyPile)?;
        let top_card_id = top_card.id;
        let slot_position = top_card.position;

        // 記録はムーブ前の状態で作っておいて、成功したときだけ台帳に積む
        let record = undo_service::create_playfield_to_hand_record(game_model, card_id, top_card_id);

        // 主牌堆から取り出して、トップスロットに据える
        let mut card = game_model
            .take_main_pile_card(card_id)
            .ok_or(MoveError::NotFound)?;
        card.position = slot_position;
        let card_text = card.card_text();

        match game_model.replace_bottom_pile_top_card(card) {
            Ok(previous_top) => {
                undo_manager.add_undo_record(record);
                // 押し出されたカードはここでドロップ。ゲームから退場！
                info!(
                    "主牌堆の {} が底牌堆トップへ。{} は退場だよ 🃏",
                    card_text,
                    previous_top.card_text()
                );
                Ok(())
            }
            Err(card) => {
                // トップが消えてるのは検証後にモデルが壊れたときだけ。
                // カードを主牌堆に戻して失敗を返す
                game_model.add_main_pile_card(card);
                Err(MoveError::EmptyPile)
            }
        }
    }
}
