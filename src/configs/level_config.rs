// src/configs/level_config.rs
//! レベルの静的設定だよ。どのカードをどの牌堆にどの位置で配るかを記述する。
//!
//! JSON のフィールド名（`CardFace`, `Position` みたいな大文字スタート）は
//! レベルデータの形式そのままに合わせてあるよ。serde の rename で吸収！

use serde::{Deserialize, Serialize};

use crate::models::position::Position;

/// カード1枚ぶんの設定だよ。面値とスートは序数の生の数値で持つ。
/// 範囲外の値（-1 とか 13 とか）は `is_valid` で弾く！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(rename = "CardFace")]
    pub card_face: i32,
    #[serde(rename = "CardSuit")]
    pub card_suit: i32,
    #[serde(rename = "Position")]
    pub position: Position,
}

impl CardConfig {
    pub fn new(card_face: i32, card_suit: i32, position: Position) -> Self {
        Self {
            card_face,
            card_suit,
            position,
        }
    }

    /// 面値とスートが両方とも有効な範囲に収まってるかチェックするよ。
    pub fn is_valid(&self) -> bool {
        (0..=12).contains(&self.card_face) && (0..=3).contains(&self.card_suit)
    }
}

/// レベルまるごとの設定だよ。3つの牌堆それぞれの初期カード列を持つ！
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(rename = "MainPile", default)]
    pub main_pile: Vec<CardConfig>,
    #[serde(rename = "BottomPile", default)]
    pub bottom_pile: Vec<CardConfig>,
    #[serde(rename = "ReservePile", default)]
    pub reserve_pile: Vec<CardConfig>,
}

impl LevelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_main_pile_card(&mut self, config: CardConfig) {
        self.main_pile.push(config);
    }

    pub fn add_bottom_pile_card(&mut self, config: CardConfig) {
        self.bottom_pile.push(config);
    }

    pub fn add_reserve_pile_card(&mut self, config: CardConfig) {
        self.reserve_pile.push(config);
    }

    /// レベルとして成立してるかチェックするよ。主牌堆と底牌堆は最低1枚ずつ
    /// 必要（備用牌堆は空でも OK）！
    pub fn is_valid(&self) -> bool {
        !self.main_pile.is_empty() && !self.bottom_pile.is_empty()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validity() {
        let good = CardConfig::new(6, 0, Position::new(100.0, 200.0));
        assert!(good.is_valid());

        // 範囲外は無効！
        assert!(!CardConfig::new(-1, 0, Position::ZERO).is_valid());
        assert!(!CardConfig::new(13, 0, Position::ZERO).is_valid());
        assert!(!CardConfig::new(6, 4, Position::ZERO).is_valid());

        println!("CardConfig 有効判定テスト、成功！🎉");
    }

    #[test]
    fn level_validity() {
        let mut level = LevelConfig::new();
        assert!(!level.is_valid(), "空のレベルは無効なはず");

        level.add_main_pile_card(CardConfig::new(6, 0, Position::ZERO));
        assert!(!level.is_valid(), "底牌堆が無いレベルは無効なはず");

        level.add_bottom_pile_card(CardConfig::new(5, 1, Position::ZERO));
        assert!(level.is_valid(), "主牌堆と底牌堆がそろったら有効！");

        // 備用牌堆は空でも有効のまま
        level.add_reserve_pile_card(CardConfig::new(8, 2, Position::ZERO));
        assert!(level.is_valid());

        println!("LevelConfig 有効判定テスト、成功！🎉");
    }

    #[test]
    fn json_round_trip() {
        let mut level = LevelConfig::new();
        level.add_main_pile_card(CardConfig::new(6, 0, Position::new(250.0, 1000.0)));
        level.add_bottom_pile_card(CardConfig::new(5, 1, Position::new(540.0, 300.0)));
        level.add_reserve_pile_card(CardConfig::new(8, 2, Position::new(300.0, 300.0)));

        let json = serde_json::to_string(&level).expect("JSON にできるはず");
        println!("レベル JSON: {}", json);
        assert!(json.contains("\"MainPile\""), "フィールド名はリネームされてるはず");
        assert!(json.contains("\"CardFace\":6"));

        let restored: LevelConfig = serde_json::from_str(&json).expect("復元できるはず");
        assert_eq!(restored, level);

        println!("LevelConfig JSON 往復テスト、成功！🎉");
    }
}
