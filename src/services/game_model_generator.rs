// src/services/game_model_generator.rs
//! レベル設定からゲームモデルを組み立てる工場だよ！🏭
//!
//! カード ID の採番は [`CardIdAllocator`] が担当する。グローバルな静的
//! カウンターじゃなくて、セッションごとに作って注入するスタイル！

use std::sync::atomic::{AtomicU32, Ordering};

use log::{info, warn};
use rand::seq::SliceRandom;

use crate::configs::level_config::{CardConfig, LevelConfig};
use crate::models::card::{Card, CardFace, CardSuit};
use crate::models::game_model::GameModel;

/// カード ID の採番カウンターだよ。1 スタートで単調増加、再利用無し！
///
/// セッション（またはそれより広いスコープ）で1個だけ作って、生成のたびに
/// 同じものを渡してね。同じアロケーターから払い出された ID は絶対に
/// 衝突しないよ。
#[derive(Debug)]
pub struct CardIdAllocator {
    next_id: AtomicU32,
}

impl CardIdAllocator {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU32::new(1),
        }
    }

    /// 次のカード ID を払い出すよ。
    pub fn allocate(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for CardIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// レベル設定からゲームモデルを生成するジェネレーターだよ。
pub struct GameModelFromLevelGenerator;

impl GameModelFromLevelGenerator {
    /// レベル設定どおりにゲームモデルを組み立てるよ。
    ///
    /// フラグは牌堆ごとのデフォルトで配る：
    /// - 主牌堆: 表向き＆クリック可能
    /// - 底牌堆: 表向きだけ（クリック不可）
    /// - 備用牌堆: 表向き＆クリック可能
    ///
    /// トップインデックスは各牌堆の末尾要素。レベルが不成立なら None！
    pub fn generate_game_model(config: &LevelConfig, ids: &CardIdAllocator) -> Option<GameModel> {
        if !config.is_valid() {
            warn!("レベル設定が不成立だよ（主牌堆か底牌堆が空）");
            return None;
        }

        let mut model = GameModel::new();
        model.set_main_pile_cards(build_pile(&config.main_pile, ids, true, true));
        model.set_bottom_pile_cards(build_pile(&config.bottom_pile, ids, true, false));
        model.set_reserve_pile_cards(build_pile(&config.reserve_pile, ids, true, true));

        info!(
            "ゲームモデル生成完了！主牌堆 {} 枚、底牌堆 {} 枚、備用牌堆 {} 枚 ✨",
            model.main_pile_cards().len(),
            model.bottom_pile_cards().len(),
            model.reserve_pile_cards().len()
        );

        Some(model)
    }

    /// 配置はレベル設定どおり、カードの面値とスートだけをシャッフルして
    /// 組み立てるよ。同じレイアウトで毎回違う牌を遊べる！
    pub fn generate_shuffled_game_model<R: rand::Rng>(
        config: &LevelConfig,
        ids: &CardIdAllocator,
        rng: &mut R,
    ) -> Option<GameModel> {
        if !config.is_valid() {
            warn!("レベル設定が不成立だよ（主牌堆か底牌堆が空）");
            return None;
        }

        // 全牌堆ぶんの (面値, スート) を集めてシャッフルして配り直す
        let mut shuffled = config.clone();
        let mut identities: Vec<(i32, i32)> = shuffled
            .main_pile
            .iter()
            .chain(shuffled.bottom_pile.iter())
            .chain(shuffled.reserve_pile.iter())
            .map(|card| (card.card_face, card.card_suit))
            .collect();
        identities.shuffle(rng);

        let mut next = identities.into_iter();
        for config_card in shuffled
            .main_pile
            .iter_mut()
            .chain(shuffled.bottom_pile.iter_mut())
            .chain(shuffled.reserve_pile.iter_mut())
        {
            if let Some((face, suit)) = next.next() {
                config_card.card_face = face;
                config_card.card_suit = suit;
            }
        }

        Self::generate_game_model(&shuffled, ids)
    }
}

/// 設定の列からカードの列を作るよ。無効な設定は警告して読み飛ばす！
fn build_pile(
    configs: &[CardConfig],
    ids: &CardIdAllocator,
    is_revealed: bool,
    is_clickable: bool,
) -> Vec<Card> {
    let mut cards = Vec::with_capacity(configs.len());

    for config in configs {
        if !config.is_valid() {
            warn!(
                "無効なカード設定をスキップするよ: face={} suit={}",
                config.card_face, config.card_suit
            );
            continue;
        }
        // is_valid を通ってるので序数は必ず範囲内！
        let (Some(face), Some(suit)) = (
            CardFace::from_ordinal(config.card_face),
            CardSuit::from_ordinal(config.card_suit),
        ) else {
            continue;
        };

        let mut card = Card::new(ids.allocate(), face, suit, config.position);
        card.is_revealed = is_revealed;
        card.is_clickable = is_clickable;
        cards.push(card);
    }

    cards
}
