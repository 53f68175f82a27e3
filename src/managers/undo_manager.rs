// src/managers/undo_manager.rs
//! デルタ式アンドゥ台帳の元締めだよ。
//!
//! 台帳（[`UndoModel`]）の所有と、アンドゥ完了通知のコールバック配信が
//! ここの仕事。1レコードの中身の扱いは [`crate::services::undo_service`] に
//! 任せてる！

use log::info;

use crate::error::MoveError;
use crate::models::game_model::GameModel;
use crate::models::undo_model::{UndoModel, UndoRecord};
use crate::services::undo_service;

/// アンドゥが終わったときに呼ばれるコールバックだよ。引数は成功したか。
pub type UndoCompleteCallback = Box<dyn FnMut(bool)>;

/// アンドゥ台帳を所有するマネージャーだよ。
#[derive(Default)]
pub struct UndoManager {
    undo_model: UndoModel,
    undo_complete_callback: Option<UndoCompleteCallback>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// アンドゥ完了通知を受け取るコールバックを登録するよ。
    pub fn set_undo_complete_callback(&mut self, callback: UndoCompleteCallback) {
        self.undo_complete_callback = Some(callback);
    }

    /// ムーブ実行側が作った記録を台帳に積むよ。
    pub fn add_undo_record(&mut self, record: UndoRecord) {
        self.undo_model.add_undo_record(record);
    }

    /// 直近のムーブを巻き戻すよ。
    ///
    /// 取り出す「前」に検証するのがポイント！検証に落ちた記録は台帳に
    /// 残ったままになる（黙って食い潰さない）。
    /// - 台帳が空: `HistoryExhausted`
    /// - 記録が解決できない: `CorruptUndoRecord`
    pub fn execute_undo(&mut self, game_model: &mut GameModel) -> Result<(), MoveError> {
        let Some(record) = self.undo_model.last_undo_record() else {
            self.notify_undo_complete(false);
            return Err(MoveError::HistoryExhausted);
        };

        if !undo_service::validate_undo_record(game_model, record) {
            self.notify_undo_complete(false);
            return Err(MoveError::CorruptUndoRecord);
        }

        // 検証済みなので取り出して逆再生！
        let record = self
            .undo_model
            .remove_last_undo_record()
            .ok_or(MoveError::HistoryExhausted)?;
        undo_service::execute_undo(game_model, &record)?;

        info!(
            "アンドゥ完了！残り記録数: {} ✨",
            self.undo_model.record_count()
        );
        self.notify_undo_complete(true);
        Ok(())
    }

    pub fn has_undoable_action(&self) -> bool {
        self.undo_model.has_undoable_action()
    }

    pub fn record_count(&self) -> usize {
        self.undo_model.record_count()
    }

    pub fn clear_all_records(&mut self) {
        self.undo_model.clear_all_records();
    }

    fn notify_undo_complete(&mut self, success: bool) {
        if let Some(callback) = self.undo_complete_callback.as_mut() {
            callback(success);
        }
    }
}
