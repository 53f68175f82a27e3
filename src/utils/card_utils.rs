// src/utils/card_utils.rs
//! カードのマッチ判定とテキスト表現のヘルパーを置くよ。
//!
//! ここにあるのは全部ピュアな関数！状態も副作用も無し。入力が欠けてたら
//! 黙って false を返すだけで、エラーにはしないよ。

use crate::models::card::{Card, CardFace, CardSuit};

/// カードの色（赤か黒か）を表すヘルパー enum だよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: CardSuit) -> Self {
        match suit {
            CardSuit::Hearts | CardSuit::Diamonds => CardColor::Red,
            CardSuit::Clubs | CardSuit::Spades => CardColor::Black,
        }
    }
}

/// 面値のテキスト表現を返すよ。"A", "2", ..., "10", "J", "Q", "K"。
/// 面値が無いときは "?"！
pub fn face_text(face: Option<CardFace>) -> &'static str {
    const FACES: [&str; 13] = [
        "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
    ];
    match face {
        Some(face) => FACES[face.ordinal() as usize],
        None => "?",
    }
}

/// スートのテキスト表現を返すよ。"C", "D", "H", "S"。無いときは "?"！
pub fn suit_text(suit: Option<CardSuit>) -> &'static str {
    const SUITS: [&str; 4] = ["C", "D", "H", "S"];
    match suit {
        Some(suit) => SUITS[suit.ordinal() as usize],
        None => "?",
    }
}

/// "7H" みたいなカードのテキスト表現を作るよ。
pub fn card_text(face: Option<CardFace>, suit: Option<CardSuit>) -> String {
    format!("{}{}", face_text(face), suit_text(suit))
}

/// 2つの面値が隣接してる（序数の差がちょうど1）かチェックするよ。
/// どちらかが無ければ false。ラップアラウンドは無いから K と A は隣接しない！
pub fn are_faces_adjacent(face1: Option<CardFace>, face2: Option<CardFace>) -> bool {
    match (face1, face2) {
        (Some(a), Some(b)) => (a.ordinal() - b.ordinal()).abs() == 1,
        _ => false,
    }
}

/// 2枚のカードがマッチできるかチェックするよ。
/// 両方とも表向き＆クリック可能で、面値が隣接してたらマッチ！
pub fn can_match(card1: &Card, card2: &Card) -> bool {
    if !card1.is_revealed || !card1.is_clickable || !card2.is_revealed || !card2.is_clickable {
        return false;
    }
    are_faces_adjacent(card1.face, card2.face)
}

/// カードが底牌堆のトップカードとマッチできるかチェックするよ。
/// 動かす側のカードだけ表向き＆クリック可能を要求する。トップカードは
/// 固定のターゲットだから自分のフラグは見ない（底牌堆のカードはそもそも
/// クリック不可で置かれてるからね）！
pub fn can_match_with_bottom_pile(card: &Card, bottom_pile_top_card: &Card) -> bool {
    if !card.is_revealed || !card.is_clickable {
        return false;
    }
    are_faces_adjacent(card.face, bottom_pile_top_card.face)
}
