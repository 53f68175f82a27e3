// src/managers/game_state_manager.rs
//! フルコピーのスナップショット履歴だよ。
//!
//! ムーブが成功するたびにゲームモデルまるごとを深いコピーで保存して、
//! 直線的なアンドゥ／リドゥを提供する。デルタ式の台帳と違って、牌堆間の
//! カードの所属までぜんぶ元どおりになるのがこっちの強み！💪

use log::info;

use crate::models::card::Card;
use crate::models::game_model::GameModel;

/// 履歴に保持するスナップショットの既定の上限だよ。
pub const MAX_STATES: usize = 100;

/// 1ムーブ後のゲームモデルまるごとのスナップショットだよ。
///
/// カードは1枚ずつクローンして保持する。ライブの牌堆への変更がここに
/// 波及することは絶対に無い！`action_type` と2つのカード ID は純粋に
/// 診断用のメモ。
#[derive(Debug, Clone, PartialEq)]
pub struct GameStateSnapshot {
    pub main_pile_cards: Vec<Card>,
    pub bottom_pile_cards: Vec<Card>,
    pub reserve_pile_cards: Vec<Card>,
    pub bottom_pile_top_index: Option<usize>,
    pub reserve_pile_top_index: Option<usize>,
    pub action_type: String,
    pub source_card_id: Option<u32>,
    pub target_card_id: Option<u32>,
}

/// 直線的なスナップショット履歴のマネージャーだよ。
///
/// カーソル（`current_state_index`）の約束事：
/// - カーソルは常に「今のゲームモデルに対応するスナップショット」を指す
/// - アンドゥはカーソルを1つ戻して、そこのスナップショットを復元
/// - カーソルが末尾じゃないときに保存すると、後ろのリドゥ枝は切り捨て！
/// - 上限を超えたら最古のものから追い出して、カーソルも詰める
pub struct GameStateManager {
    state_history: Vec<GameStateSnapshot>,
    current_state_index: usize,
    max_states: usize,
}

impl GameStateManager {
    pub fn new() -> Self {
        Self::with_max_states(MAX_STATES)
    }

    /// 上限枚数を指定して作るよ（テストで小さくしたいときに便利）。
    pub fn with_max_states(max_states: usize) -> Self {
        Self {
            state_history: Vec::new(),
            current_state_index: 0,
            max_states: max_states.max(1),
        }
    }

    /// 今のゲームモデルをスナップショットとして保存するよ。
    ///
    /// `action_type` は "main_to_bottom" みたいな診断用のタグで、履歴の
    /// 動作そのものには影響しない。
    pub fn save_state(
        &mut self,
        game_model: &GameModel,
        action_type: &str,
        source_card_id: Option<u32>,
        target_card_id: Option<u32>,
    ) {
        let snapshot = GameStateSnapshot {
            main_pile_cards: game_model.main_pile_cards().to_vec(),
            bottom_pile_cards: game_model.bottom_pile_cards().to_vec(),
            reserve_pile_cards: game_model.reserve_pile_cards().to_vec(),
            bottom_pile_top_index: game_model.bottom_pile_top_index(),
            reserve_pile_top_index: game_model.reserve_pile_top_index(),
            action_type: action_type.to_string(),
            source_card_id,
            target_card_id,
        };

        // カーソルが末尾じゃなければリドゥ枝は捨てる！
        if self.current_state_index + 1 < self.state_history.len() {
            self.state_history.truncate(self.current_state_index + 1);
        }

        self.state_history.push(snapshot);
        self.current_state_index = self.state_history.len() - 1;

        // 上限を超えたら最古のものを追い出す
        while self.state_history.len() > self.max_states {
            self.state_history.remove(0);
            self.current_state_index = self.current_state_index.saturating_sub(1);
        }

        info!(
            "状態を保存したよ: {} (カーソル {} / 全 {} 件)",
            action_type,
            self.current_state_index,
            self.state_history.len()
        );
    }

    /// 1つ前のスナップショットへ巻き戻すよ。戻れなければ false！
    pub fn undo(&mut self, game_model: &mut GameModel) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.current_state_index -= 1;
        self.restore_snapshot(game_model);
        true
    }

    /// 1つ先のスナップショットへ進めるよ。進めなければ false！
    pub fn redo(&mut self, game_model: &mut GameModel) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.current_state_index += 1;
        self.restore_snapshot(game_model);
        true
    }

    /// カーソルより前にスナップショットがあるか？
    pub fn can_undo(&self) -> bool {
        self.current_state_index > 0
    }

    /// カーソルより後ろにスナップショットがあるか？
    pub fn can_redo(&self) -> bool {
        !self.state_history.is_empty() && self.current_state_index + 1 < self.state_history.len()
    }

    pub fn state_count(&self) -> usize {
        self.state_history.len()
    }

    pub fn current_state_index(&self) -> usize {
        self.current_state_index
    }

    /// 履歴をまっさらにするよ。新しいレベルを始めるときに！
    pub fn clear(&mut self) {
        self.state_history.clear();
        self.current_state_index = 0;
    }

    /// カーソル位置のスナップショットをゲームモデルに書き戻すよ。
    /// 牌堆は空にしてから、保存したカードの新しいクローンで組み直す！
    fn restore_snapshot(&self, game_model: &mut GameModel) {
        let snapshot = &self.state_history[self.current_state_index];

        game_model.clear_all_cards();
        game_model.set_main_pile_cards(snapshot.main_pile_cards.clone());
        game_model.set_bottom_pile_cards(snapshot.bottom_pile_cards.clone());
        game_model.set_reserve_pile_cards(snapshot.reserve_pile_cards.clone());
        // セッターが末尾をトップにしてしまうので、保存したインデックスで上書き
        game_model.set_bottom_pile_top_index(snapshot.bottom_pile_top_index);
        game_model.set_reserve_pile_top_index(snapshot.reserve_pile_top_index);

        info!(
            "状態を復元したよ: {} (カーソル {})",
            snapshot.action_type, self.current_state_index
        );
    }
}

impl Default for GameStateManager {
    fn default() -> Self {
        Self::new()
    }
}
