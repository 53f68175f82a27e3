// src/models/game_model.rs

// serde を使う宣言！ゲーム状態まるごとのセーブ／ロードに使うよ！
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::models::card::Card;

/// カードが属する牌堆の種類だよ。クリックされたカードがどこの子なのかを
/// 呼び出し側に伝えるときに使う！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// 主牌堆（場に並んだカード。表向き＆クリック可能）
    Main,
    /// 底牌堆（マッチ対象。トップの1枚だけがアクティブ）
    Bottom,
    /// 備用牌堆（引き札。表向き＆クリック可能）
    Reserve,
}

/// ゲーム実行時の中核データモデルだよ！
///
/// 3つの牌堆（主牌堆・底牌堆・備用牌堆）と、それぞれのトップ位置を指す
/// インデックスを持つ。カード ID は3つの牌堆の和集合の中で常に一意！
///
/// インデックスの約束事：
/// - `bottom_pile_top_index` が `Some(i)` なら `bottom_pile_cards[i]` が
///   現在のマッチ対象。`None` はトップ無し（セーブデータ上は -1）。
/// - `reserve_pile_top_index` も同様で、次に引くカードを指すよ。
///   通常は末尾要素！
///
/// ライフサイクル：レベル開始時にジェネレーターが一度だけ組み立てて、
/// 以降はコントローラーだけがミューテーションする。セッションが終わったら
/// 捨てられるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModel {
    main_pile_cards: Vec<Card>,
    bottom_pile_cards: Vec<Card>,
    reserve_pile_cards: Vec<Card>,
    bottom_pile_top_index: Option<usize>,
    reserve_pile_top_index: Option<usize>,
    game_state: String,
}

impl GameModel {
    /// 空っぽのゲームモデルを作るよ。状態タグは "playing" スタート！
    pub fn new() -> Self {
        Self {
            main_pile_cards: Vec::new(),
            bottom_pile_cards: Vec::new(),
            reserve_pile_cards: Vec::new(),
            bottom_pile_top_index: None,
            reserve_pile_top_index: None,
            game_state: "playing".to_string(),
        }
    }

    // --- 読み取りアクセサたち ---

    pub fn main_pile_cards(&self) -> &[Card] {
        &self.main_pile_cards
    }

    pub fn bottom_pile_cards(&self) -> &[Card] {
        &self.bottom_pile_cards
    }

    pub fn reserve_pile_cards(&self) -> &[Card] {
        &self.reserve_pile_cards
    }

    pub fn bottom_pile_top_index(&self) -> Option<usize> {
        self.bottom_pile_top_index
    }

    pub fn reserve_pile_top_index(&self) -> Option<usize> {
        self.reserve_pile_top_index
    }

    pub fn game_state(&self) -> &str {
        &self.game_state
    }

    pub fn set_game_state(&mut self, state: impl Into<String>) {
        self.game_state = state.into();
    }

    pub fn set_bottom_pile_top_index(&mut self, index: Option<usize>) {
        self.bottom_pile_top_index = index;
    }

    pub fn set_reserve_pile_top_index(&mut self, index: Option<usize>) {
        self.reserve_pile_top_index = index;
    }

    // --- 牌堆の組み立て ---

    /// 主牌堆をまるごと差し替えるよ（古いカードは破棄）。
    pub fn set_main_pile_cards(&mut self, cards: Vec<Card>) {
        self.main_pile_cards = cards;
    }

    /// 底牌堆をまるごと差し替えるよ。トップは末尾要素になる！
    pub fn set_bottom_pile_cards(&mut self, cards: Vec<Card>) {
        self.bottom_pile_cards = cards;
        self.bottom_pile_top_index = self.bottom_pile_cards.len().checked_sub(1);
    }

    /// 備用牌堆をまるごと差し替えるよ。トップは末尾要素になる！
    pub fn set_reserve_pile_cards(&mut self, cards: Vec<Card>) {
        self.reserve_pile_cards = cards;
        self.reserve_pile_top_index = self.reserve_pile_cards.len().checked_sub(1);
    }

    pub fn add_main_pile_card(&mut self, card: Card) {
        self.main_pile_cards.push(card);
    }

    /// 底牌堆にカードを追加するよ。追加したカードが新しいトップ！
    pub fn add_bottom_pile_card(&mut self, card: Card) {
        self.bottom_pile_cards.push(card);
        self.bottom_pile_top_index = Some(self.bottom_pile_cards.len() - 1);
    }

    /// 備用牌堆にカードを追加するよ。追加したカードが新しいトップ！
    pub fn add_reserve_pile_card(&mut self, card: Card) {
        self.reserve_pile_cards.push(card);
        self.reserve_pile_top_index = Some(self.reserve_pile_cards.len() - 1);
    }

    // --- 検索 ---

    pub fn find_main_pile_card(&self, card_id: u32) -> Option<&Card> {
        self.main_pile_cards.iter().find(|card| card.id == card_id)
    }

    pub fn find_bottom_pile_card(&self, card_id: u32) -> Option<&Card> {
        self.bottom_pile_cards.iter().find(|card| card.id == card_id)
    }

    pub fn find_reserve_pile_card(&self, card_id: u32) -> Option<&Card> {
        self.reserve_pile_cards.iter().find(|card| card.id == card_id)
    }

    pub fn find_main_pile_card_mut(&mut self, card_id: u32) -> Option<&mut Card> {
        self.main_pile_cards.iter_mut().find(|card| card.id == card_id)
    }

    pub fn find_bottom_pile_card_mut(&mut self, card_id: u32) -> Option<&mut Card> {
        self.bottom_pile_cards.iter_mut().find(|card| card.id == card_id)
    }

    pub fn find_main_pile_index(&self, card_id: u32) -> Option<usize> {
        self.main_pile_cards.iter().position(|card| card.id == card_id)
    }

    pub fn find_bottom_pile_index(&self, card_id: u32) -> Option<usize> {
        self.bottom_pile_cards.iter().position(|card| card.id == card_id)
    }

    pub fn find_reserve_pile_index(&self, card_id: u32) -> Option<usize> {
        self.reserve_pile_cards.iter().position(|card| card.id == card_id)
    }

    /// カード ID がどの牌堆にいるか調べるよ。どこにもいなければ None！
    pub fn locate_card(&self, card_id: u32) -> Option<PileKind> {
        if self.find_main_pile_card(card_id).is_some() {
            Some(PileKind::Main)
        } else if self.find_bottom_pile_card(card_id).is_some() {
            Some(PileKind::Bottom)
        } else if self.find_reserve_pile_card(card_id).is_some() {
            Some(PileKind::Reserve)
        } else {
            None
        }
    }

    // --- トップカード ---

    pub fn bottom_pile_top_card(&self) -> Option<&Card> {
        self.bottom_pile_cards.get(self.bottom_pile_top_index?)
    }

    pub fn bottom_pile_top_card_mut(&mut self) -> Option<&mut Card> {
        let index = self.bottom_pile_top_index?;
        self.bottom_pile_cards.get_mut(index)
    }

    pub fn reserve_pile_top_card(&self) -> Option<&Card> {
        self.reserve_pile_cards.get(self.reserve_pile_top_index?)
    }

    pub fn reserve_pile_card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.reserve_pile_cards.get_mut(index)
    }

    // --- 所有権の移送（ムーブ実行で使うやつ） ---

    /// 主牌堆からカードを取り出して返すよ。リストから外すだけで、カード
    /// そのものは呼び出し側に所有権ごと渡る（別の牌堆へ移動するため）！
    pub fn take_main_pile_card(&mut self, card_id: u32) -> Option<Card> {
        let index = self.find_main_pile_index(card_id)?;
        Some(self.main_pile_cards.remove(index))
    }

    /// 備用牌堆のトップカードを取り出して返すよ（引き札用）。
    /// 取り出したあとのトップは新しい末尾要素！
    pub fn take_reserve_pile_top_card(&mut self) -> Option<Card> {
        let index = self.reserve_pile_top_index?;
        if index >= self.reserve_pile_cards.len() {
            return None;
        }
        let card = self.reserve_pile_cards.remove(index);
        self.reserve_pile_top_index = self.reserve_pile_cards.len().checked_sub(1);
        Some(card)
    }

    /// 底牌堆のトップスロットを新しいカードで上書きして、前のトップカードを
    /// 返すよ。トップが無いときは新しいカードをそのまま返す（状態は不変）。
    pub fn replace_bottom_pile_top_card(&mut self, card: Card) -> Result<Card, Card> {
        match self.bottom_pile_top_index {
            Some(index) if index < self.bottom_pile_cards.len() => {
                Ok(std::mem::replace(&mut self.bottom_pile_cards[index], card))
            }
            _ => Err(card),
        }
    }

    /// 備用牌堆の指定スロットと底牌堆のトップスロットのカードを入れ替えるよ。
    /// どちらかのスロットが無効なら何もしないで false！
    pub fn swap_reserve_with_bottom_top(&mut self, reserve_index: usize) -> bool {
        let Some(top_index) = self.bottom_pile_top_index else {
            return false;
        };
        if reserve_index >= self.reserve_pile_cards.len()
            || top_index >= self.bottom_pile_cards.len()
        {
            return false;
        }
        std::mem::swap(
            &mut self.reserve_pile_cards[reserve_index],
            &mut self.bottom_pile_cards[top_index],
        );
        true
    }

    /// 底牌堆からカードを削除するよ（カードはゲームから消える）。
    /// トップインデックスが範囲外になったら末尾に詰め直す！
    pub fn remove_bottom_pile_card(&mut self, card_id: u32) -> bool {
        let Some(index) = self.find_bottom_pile_index(card_id) else {
            return false;
        };
        self.bottom_pile_cards.remove(index);
        if let Some(top) = self.bottom_pile_top_index {
            if top >= self.bottom_pile_cards.len() {
                self.bottom_pile_top_index = self.bottom_pile_cards.len().checked_sub(1);
            }
        }
        true
    }

    /// 全部の牌堆を空にするよ。アンドゥ／リドゥの復元前に使う！
    pub fn clear_all_cards(&mut self) {
        self.main_pile_cards.clear();
        self.bottom_pile_cards.clear();
        self.reserve_pile_cards.clear();
        self.bottom_pile_top_index = None;
        self.reserve_pile_top_index = None;
    }

    /// 全牌堆の合計枚数だよ。ムーブ前後の枚数勘定テストで使う！
    pub fn total_card_count(&self) -> usize {
        self.main_pile_cards.len() + self.bottom_pile_cards.len() + self.reserve_pile_cards.len()
    }

    /// ゲーム終了判定。主牌堆が空 or 底牌堆が空ならおしまい！
    /// 勝ち負けの区別はここでは付けない（シンプルな終端シグナルだけ）。
    pub fn is_game_over(&self) -> bool {
        self.main_pile_cards.is_empty() || self.bottom_pile_cards.is_empty()
    }

    // --- セーブデータ形式 ---

    /// ゲーム状態まるごとをテキストのセーブデータに変換するよ。
    /// 形式: `mainPile:N;カード;...;bottomPile:N;...;reservePile:N;...;`
    /// の後に `bottomPileTopIndex:N;reservePileTopIndex:N;gameState:S;`
    /// （インデックス無しは -1）
    pub fn to_save_data(&self) -> String {
        let mut out = String::new();

        for (key, pile) in [
            ("mainPile", &self.main_pile_cards),
            ("bottomPile", &self.bottom_pile_cards),
            ("reservePile", &self.reserve_pile_cards),
        ] {
            out.push_str(&format!("{}:{};", key, pile.len()));
            if !pile.is_empty() {
                out.push_str(&pile.iter().map(Card::to_save_data).join(";"));
                out.push(';');
            }
        }

        out.push_str(&format!(
            "bottomPileTopIndex:{};",
            index_to_save(self.bottom_pile_top_index)
        ));
        out.push_str(&format!(
            "reservePileTopIndex:{};",
            index_to_save(self.reserve_pile_top_index)
        ));
        out.push_str(&format!("gameState:{};", self.game_state));

        out
    }

    /// セーブデータからゲームモデルを復元するよ。形式が壊れてたら None！
    pub fn from_save_data(data: &str) -> Option<GameModel> {
        let mut model = GameModel::new();
        let tokens: Vec<&str> = data.split(';').collect();
        let mut i = 0;

        while i < tokens.len() {
            let line = tokens[i];
            i += 1;
            if line.is_empty() {
                continue;
            }

            let (key, value) = line.split_once(':')?;
            match key {
                "mainPile" | "bottomPile" | "reservePile" => {
                    let count: usize = value.trim().parse().ok()?;
                    let mut cards = Vec::with_capacity(count);
                    for _ in 0..count {
                        let card_line = tokens.get(i)?;
                        i += 1;
                        // 壊れたカード行はスキップ（行数は消費する）
                        if let Some(card) = Card::from_save_data(card_line) {
                            cards.push(card);
                        }
                    }
                    match key {
                        "mainPile" => model.main_pile_cards = cards,
                        "bottomPile" => model.bottom_pile_cards = cards,
                        _ => model.reserve_pile_cards = cards,
                    }
                }
                "bottomPileTopIndex" => {
                    model.bottom_pile_top_index = index_from_save(value.trim().parse().ok()?);
                }
                "reservePileTopIndex" => {
                    model.reserve_pile_top_index = index_from_save(value.trim().parse().ok()?);
                }
                "gameState" => {
                    model.game_state = value.to_string();
                }
                _ => {} // 知らないキーは読み飛ばす
            }
        }

        Some(model)
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}

/// `Option<usize>` のインデックスをセーブデータの整数（無しは -1）にするよ。
fn index_to_save(index: Option<usize>) -> i64 {
    index.map_or(-1, |i| i as i64)
}

/// セーブデータの整数を `Option<usize>` のインデックスに戻すよ。
fn index_from_save(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
