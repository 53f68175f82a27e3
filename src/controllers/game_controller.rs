// src/controllers/game_controller.rs
//! ゲーム全体のオーケストレーションを受け持つコントローラーだよ！🎮
//!
//! ゲームモデル・アンドゥ台帳・スナップショット履歴をぜんぶ所有して、
//! 「カード ID がクリックされた」という入力を適切なコントローラーに
//! 振り分ける。ムーブが成功するたびにスナップショットを保存するから、
//! `undo` / `redo` で所属ごと元に戻せるよ。

use log::{debug, info};

use crate::configs::level_config::LevelConfig;
use crate::error::MoveError;
use crate::managers::game_state_manager::GameStateManager;
use crate::managers::undo_manager::{UndoCompleteCallback, UndoManager};
use crate::models::game_model::{GameModel, PileKind};
use crate::services::game_model_generator::{CardIdAllocator, GameModelFromLevelGenerator};

use super::play_field_controller::PlayFieldController;
use super::reserve_pile_controller::ReservePileController;
use super::stack_controller::StackController;

/// ゲーム1セッションぶんの司令塔だよ。
pub struct GameController {
    game_model: GameModel,
    undo_manager: UndoManager,
    state_manager: GameStateManager,
    play_field_controller: PlayFieldController,
    stack_controller: StackController,
    reserve_pile_controller: ReservePileController,
}

impl GameController {
    /// 組み立て済みのゲームモデルからセッションを始めるよ。
    /// 初期状態のスナップショットもここで保存する！
    pub fn new(game_model: GameModel) -> Self {
        let mut state_manager = GameStateManager::new();
        state_manager.save_state(&game_model, "init", None, None);

        Self {
            game_model,
            undo_manager: UndoManager::new(),
            state_manager,
            play_field_controller: PlayFieldController::new(),
            stack_controller: StackController::new(),
            reserve_pile_controller: ReservePileController::new(),
        }
    }

    /// レベル設定からセッションを始めるよ。レベルが不成立なら None！
    pub fn from_level_config(config: &LevelConfig, ids: &CardIdAllocator) -> Option<Self> {
        let game_model = GameModelFromLevelGenerator::generate_game_model(config, ids)?;
        Some(Self::new(game_model))
    }

    pub fn game_model(&self) -> &GameModel {
        &self.game_model
    }

    /// アンドゥ完了通知のコールバックを登録するよ（デルタ式の側）。
    pub fn set_undo_complete_callback(&mut self, callback: UndoCompleteCallback) {
        self.undo_manager.set_undo_complete_callback(callback);
    }

    /// カードがクリックされたときの入口だよ。どの牌堆のカードかを調べて
    /// 適切なコントローラーに振り分ける。成功したらスナップショット保存！
    pub fn handle_card_click(&mut self, card_id: u32) -> Result<(), MoveError> {
        let pile = self
            .game_model
            .locate_card(card_id)
            .ok_or(MoveError::NotFound)?;
        debug!("カード {} がクリックされたよ（{:?}）", card_id, pile);

        let target_card_id = self.game_model.bottom_pile_top_card().map(|card| card.id);

        let (result, tag) = match pile {
            PileKind::Main => (
                self.play_field_controller.handle_card_click(
                    &mut self.game_model,
                    &mut self.undo_manager,
                    card_id,
                ),
                "main_to_bottom",
            ),
            PileKind::Bottom => (
                self.stack_controller.handle_card_click(
                    &mut self.game_model,
                    &mut self.undo_manager,
                    card_id,
                ),
                "hand_swap",
            ),
            PileKind::Reserve => (
                self.reserve_pile_controller
                    .handle_card_click(&mut self.game_model, card_id),
                "reserve_to_bottom",
            ),
        };

        if result.is_ok() {
            self.state_manager
                .save_state(&self.game_model, tag, Some(card_id), target_card_id);
        }
        result
    }

    /// 備用牌堆のトップから1枚引いて底牌堆に積むよ。引いたカードが新しい
    /// トップになって、底牌堆の約束どおりクリック不可になる。
    pub fn draw_card(&mut self) -> Result<u32, MoveError> {
        let mut card = self
            .game_model
            .take_reserve_pile_top_card()
            .ok_or(MoveError::EmptyPile)?;
        card.is_clickable = false;
        let card_id = card.id;
        self.game_model.add_bottom_pile_card(card);

        info!("備用牌堆からカード {} を引いたよ 🃏", card_id);
        self.state_manager
            .save_state(&self.game_model, "draw_card", Some(card_id), None);
        Ok(card_id)
    }

    // --- スナップショット履歴によるアンドゥ／リドゥ ---

    /// 直近のムーブをスナップショットで巻き戻すよ。
    pub fn undo(&mut self) -> Result<(), MoveError> {
        if self.state_manager.undo(&mut self.game_model) {
            Ok(())
        } else {
            Err(MoveError::HistoryExhausted)
        }
    }

    /// 巻き戻したムーブをやり直すよ。
    pub fn redo(&mut self) -> Result<(), MoveError> {
        if self.state_manager.redo(&mut self.game_model) {
            Ok(())
        } else {
            Err(MoveError::HistoryExhausted)
        }
    }

    pub fn can_undo(&self) -> bool {
        self.state_manager.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state_manager.can_redo()
    }

    // --- デルタ台帳によるアンドゥ ---

    /// 直近のデルタ記録を逆再生するよ（位置とトップインデックスの復元）。
    pub fn undo_last_record(&mut self) -> Result<(), MoveError> {
        self.undo_manager.execute_undo(&mut self.game_model)
    }

    pub fn has_undoable_action(&self) -> bool {
        self.undo_manager.has_undoable_action()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_model.is_game_over()
    }
}
