// src/controllers/reserve_pile_controller.rs
//! 備用牌堆 ⇄ 底牌堆のスワップを受け持つコントローラーだよ。
//!
//! 主牌堆のムーブと違ってこっちは本当の「交換」！前のトップカードは
//! 捨てられずに、クリックされた備用牌のいたスロットへ移る。だから合計
//! 枚数は変わらないよ。
//!
//! スワップ後のフラグの約束事：
//! - 底牌堆に着地したカードはクリック不可（底牌堆は直接タップできない）
//! - 備用牌堆に着地したカードはクリック可能（また選べるようになる）

use log::{debug, info};

use crate::error::MoveError;
use crate::models::game_model::GameModel;
use crate::utils::card_utils;

/// 備用牌堆のクリックを処理するコントローラーだよ。状態は持たない！
#[derive(Debug, Default)]
pub struct ReservePileController;

impl ReservePileController {
    pub fn new() -> Self {
        Self
    }

    /// 備用牌堆のカードがクリックされたときの入口だよ。
    /// 今のトップと隣接してたら、2枚を丸ごと入れ替える！
    pub fn handle_card_click(
        &self,
        game_model: &mut GameModel,
        card_id: u32,
    ) -> Result<(), MoveError> {
        let reserve_index = game_model
            .find_reserve_pile_index(card_id)
            .ok_or(MoveError::NotFound)?;
        let reserve_card = &game_model.reserve_pile_cards()[reserve_index];
        let top_card = game_model
            .bottom_pile_top_card()
            .ok_or(MoveError::EmptyPile)?;

        if !card_utils::can_match_with_bottom_pile(reserve_card, top_card) {
            debug!(
                "マッチ不成立: {} は {} と交換できないよ",
                reserve_card.card_text(),
                top_card.card_text()
            );
            return Err(MoveError::IllegalMove);
        }

        // スワップ前に両スロットの位置を控えておく（Position は Copy！）
        let reserve_slot_position = reserve_card.position;
        let bottom_slot_position = top_card.position;

        if !game_model.swap_reserve_with_bottom_top(reserve_index) {
            return Err(MoveError::EmptyPile);
        }

        // 着地先に合わせて位置とフラグを整える
        if let Some(landed_on_bottom) = game_model.bottom_pile_top_card_mut() {
            landed_on_bottom.position = bottom_slot_position;
            landed_on_bottom.is_clickable = false;
        }
        if let Some(landed_on_reserve) = game_model.reserve_pile_card_mut(reserve_index) {
            landed_on_reserve.position = reserve_slot_position;
            landed_on_reserve.is_clickable = true;
        }

        info!("備用牌堆スロット {} と底牌堆トップを交換したよ ✨", reserve_index);
        Ok(())
    }
}
