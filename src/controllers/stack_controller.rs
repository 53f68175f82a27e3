// src/controllers/stack_controller.rs
//! 底牌堆の中でトップを付け替えるコントローラーだよ。
//!
//! カードを動かすわけじゃなくて、「どのスロットをアクティブなトップと
//! みなすか」を選び直すだけ。モデルへの変更は `bottom_pile_top_index` の
//! 1フィールドだけ！

use log::{debug, info};

use crate::error::MoveError;
use crate::managers::undo_manager::UndoManager;
use crate::models::game_model::GameModel;
use crate::services::undo_service;

/// 底牌堆のクリックを処理するコントローラーだよ。状態は持たない！
#[derive(Debug, Default)]
pub struct StackController;

impl StackController {
    pub fn new() -> Self {
        Self
    }

    /// 底牌堆のカードがクリックされたときの入口だよ。クリックされたカードの
    /// スロットを新しいトップにする。
    pub fn handle_card_click(
        &self,
        game_model: &mut GameModel,
        undo_manager: &mut UndoManager,
        card_id: u32,
    ) -> Result<(), MoveError> {
        let top_index = game_model
            .bottom_pile_top_index()
            .ok_or(MoveError::EmptyPile)?;
        let top_card_id = game_model
            .bottom_pile_top_card()
            .map(|card| card.id)
            .ok_or(MoveError::EmptyPile)?;

        let clicked_index = game_model
            .find_bottom_pile_index(card_id)
            .ok_or(MoveError::NotFound)?;

        if clicked_index == top_index {
            debug!("カード {} はもうトップだよ", card_id);
            return Err(MoveError::IllegalMove);
        }

        // ムーブ前のトップインデックスを控えてから付け替え！
        let record = undo_service::create_hand_swap_record(game_model, card_id, top_card_id);
        undo_manager.add_undo_record(record);

        game_model.set_bottom_pile_top_index(Some(clicked_index));
        info!(
            "底牌堆のトップをスロット {} → {} に付け替えたよ",
            top_index, clicked_index
        );
        Ok(())
    }
}
