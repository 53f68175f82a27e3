// src/models/card.rs

// serde を使う宣言！カード情報をセーブしたり JSON にしたりする時に使うよ！
use serde::{Deserialize, Serialize};

use crate::models::position::Position;

/// カードの面値（ランク）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// 序数は A=0 から K=12。隣接判定（面値差がちょうど1）とセーブデータの
/// 数値表現の両方がこの序数をそのまま使うから、明示的に値を振ってあるよ。
/// ラップアラウンドは無し：K と A は隣接しない！🙅
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", face);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - PartialOrd, Ord: ランクの大小比較 (`<`, `>`) もできるように
/// - Hash: HashMap のキーとかで使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // = 12
}

impl CardFace {
    /// 序数 (0..=12) を返すよ。隣接判定とシリアライズで使う！
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// 序数から CardFace に戻すよ。範囲外なら None！
    pub fn from_ordinal(ordinal: i32) -> Option<CardFace> {
        match ordinal {
            0 => Some(CardFace::Ace),
            1 => Some(CardFace::Two),
            2 => Some(CardFace::Three),
            3 => Some(CardFace::Four),
            4 => Some(CardFace::Five),
            5 => Some(CardFace::Six),
            6 => Some(CardFace::Seven),
            7 => Some(CardFace::Eight),
            8 => Some(CardFace::Nine),
            9 => Some(CardFace::Ten),
            10 => Some(CardFace::Jack),
            11 => Some(CardFace::Queen),
            12 => Some(CardFace::King),
            _ => None,
        }
    }
}

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 序数は C=0, D=1, H=2, S=3。セーブデータの数値表現に合わせてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSuit {
    Clubs = 0,
    Diamonds,
    Hearts,
    Spades,
}

impl CardSuit {
    /// 序数 (0..=3) を返すよ。
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// 序数から CardSuit に戻すよ。範囲外なら None！
    pub fn from_ordinal(ordinal: i32) -> Option<CardSuit> {
        match ordinal {
            0 => Some(CardSuit::Clubs),
            1 => Some(CardSuit::Diamonds),
            2 => Some(CardSuit::Hearts),
            3 => Some(CardSuit::Spades),
            _ => None,
        }
    }
}

/// カードそのものを表すデータモデルだよ！🃏
///
/// - `id`: カードの一意なID。生成時に振られて一生変わらない！牌堆をまたいだ
///   検索はぜんぶこの ID で行うよ。正の整数で、再利用は無し。
/// - `face` / `suit`: 面値とスート。`None` は「まだ値が無い」状態で、
///   両方 `Some` のときだけ有効なカード (`is_valid`)。
/// - `position`: 描画位置のヒント（ルールには無関係）。
/// - `is_revealed`: 表向きかどうか。
/// - `is_clickable`: プレイヤーがタップできるかどうか。
///
/// カードはちょうど1つの牌堆 `Vec<Card>` に値として所有されるよ。移動は
/// 所有権の移送（取り出して挿入）で、プレイ中のムーブでは絶対に複製しない！
/// 複製するのはスナップショット／アンドゥ系だけ。Clone はそのためにある。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub face: Option<CardFace>,
    pub suit: Option<CardSuit>,
    pub position: Position,
    pub is_revealed: bool,
    pub is_clickable: bool,
}

impl Card {
    /// 新しいカードを作るよ。表向きフラグとクリック可能フラグは生成時は
    /// どちらも false で、牌堆に配られるときに設定される！
    pub fn new(id: u32, face: CardFace, suit: CardSuit, position: Position) -> Self {
        Self {
            id,
            face: Some(face),
            suit: Some(suit),
            position,
            is_revealed: false,
            is_clickable: false,
        }
    }

    /// カードが有効かチェックするよ。面値とスートが両方そろってたら有効！
    pub fn is_valid(&self) -> bool {
        self.face.is_some() && self.suit.is_some()
    }

    /// 2枚のカードの面値が隣接してる（差がちょうど1）かチェックするよ。
    /// どちらかが無効なカードなら問答無用で false！
    pub fn is_adjacent_to(&self, other: &Card) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        crate::utils::card_utils::are_faces_adjacent(self.face, other.face)
    }

    /// "7H" みたいなテキスト表現を返すよ。デバッグログで大活躍！
    pub fn card_text(&self) -> String {
        crate::utils::card_utils::card_text(self.face, self.suit)
    }

    /// セーブデータ形式の1行テキストに変換するよ。
    /// 形式: `id,face,suit,x,y,revealed,clickable`（face/suit は序数、無しは -1）
    pub fn to_save_data(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.id,
            self.face.map_or(-1, CardFace::ordinal),
            self.suit.map_or(-1, CardSuit::ordinal),
            self.position.x,
            self.position.y,
            if self.is_revealed { 1 } else { 0 },
            if self.is_clickable { 1 } else { 0 },
        )
    }

    /// セーブデータ形式の1行テキストからカードを復元するよ。
    /// フィールド数が合わなかったり数値が壊れてたら None！
    pub fn from_save_data(data: &str) -> Option<Card> {
        let tokens: Vec<&str> = data.split(',').collect();
        if tokens.len() != 7 {
            return None;
        }

        let id: u32 = tokens[0].trim().parse().ok()?;
        let face_ordinal: i32 = tokens[1].trim().parse().ok()?;
        let suit_ordinal: i32 = tokens[2].trim().parse().ok()?;
        let x: f32 = tokens[3].trim().parse().ok()?;
        let y: f32 = tokens[4].trim().parse().ok()?;
        let is_revealed = tokens[5].trim().parse::<i32>().ok()? != 0;
        let is_clickable = tokens[6].trim().parse::<i32>().ok()? != 0;

        Some(Card {
            id,
            face: CardFace::from_ordinal(face_ordinal),
            suit: CardSuit::from_ordinal(suit_ordinal),
            position: Position::new(x, y),
            is_revealed,
            is_clickable,
        })
    }
}
