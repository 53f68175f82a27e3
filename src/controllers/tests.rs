// src/controllers/tests.rs
//! コントローラーを組み合わせた統合テストだよ！
//! 実際のプレイを模したシナリオで、ムーブ・枚数勘定・アンドゥ・リドゥを
//! まとめて検証する。

use crate::controllers::game_controller::GameController;
use crate::error::MoveError;
use crate::models::card::{Card, CardFace, CardSuit};
use crate::models::game_model::GameModel;
use crate::models::position::Position;

fn main_card(id: u32, face: CardFace, suit: CardSuit, x: f32, y: f32) -> Card {
    let mut card = Card::new(id, face, suit, Position::new(x, y));
    card.is_revealed = true;
    card.is_clickable = true;
    card
}

fn bottom_card(id: u32, face: CardFace, suit: CardSuit, x: f32, y: f32) -> Card {
    let mut card = Card::new(id, face, suit, Position::new(x, y));
    card.is_revealed = true;
    card.is_clickable = false;
    card
}

fn reserve_card(id: u32, face: CardFace, suit: CardSuit, x: f32, y: f32) -> Card {
    let mut card = Card::new(id, face, suit, Position::new(x, y));
    card.is_revealed = true;
    card.is_clickable = true;
    card
}

/// main=[7♣], bottom=[6♦] のミニ盤面を作るよ。
fn seven_on_six_model() -> GameModel {
    let mut model = GameModel::new();
    model.add_main_pile_card(main_card(1, CardFace::Seven, CardSuit::Clubs, 250.0, 1000.0));
    model.add_bottom_pile_card(bottom_card(2, CardFace::Six, CardSuit::Diamonds, 540.0, 300.0));
    model
}

#[test]
fn main_to_bottom_succeeds_on_adjacent_faces() {
    // main=[7♣], bottom=[6♦] → 7♣ は置ける（|7-6|=1）
    let mut game = GameController::new(seven_on_six_model());
    let before_count = game.game_model().total_card_count();

    game.handle_card_click(1).expect("7♣ は 6♦ に置けるはず");

    let model = game.game_model();
    assert!(model.find_main_pile_card(1).is_none(), "7♣ は主牌堆から消えるはず");
    assert_eq!(model.bottom_pile_top_card().map(|c| c.id), Some(1), "7♣ が新しいトップ");
    assert!(model.find_bottom_pile_card(2).is_none(), "前のトップ 6♦ は退場");
    assert_eq!(
        model.total_card_count(),
        before_count - 1,
        "片道置き換えだから合計はちょうど1枚減るはず"
    );
    assert_eq!(
        model.bottom_pile_top_card().unwrap().position,
        Position::new(540.0, 300.0),
        "着地したカードはスロットの位置に移るはず"
    );

    println!("主牌堆→底牌堆の成功シナリオ、成功！🎉");
}

#[test]
fn main_to_bottom_fails_on_non_adjacent_faces() {
    // main=[7♣], bottom=[2♦] → |7-2|=5 なので置けない
    let mut model = GameModel::new();
    model.add_main_pile_card(main_card(1, CardFace::Seven, CardSuit::Clubs, 250.0, 1000.0));
    model.add_bottom_pile_card(bottom_card(2, CardFace::Two, CardSuit::Diamonds, 540.0, 300.0));

    let mut game = GameController::new(model);
    let before = game.game_model().clone();

    assert_eq!(game.handle_card_click(1), Err(MoveError::IllegalMove));
    assert_eq!(game.game_model(), &before, "失敗したら盤面は無傷のはず");
    assert!(!game.has_undoable_action(), "失敗ムーブは記録されないはず");

    println!("主牌堆→底牌堆の失敗シナリオ、成功！🎉");
}

#[test]
fn clicking_unknown_card_is_not_found() {
    let mut game = GameController::new(seven_on_six_model());
    assert_eq!(game.handle_card_click(99), Err(MoveError::NotFound));
    println!("未知カード拒否テスト、成功！🎉");
}

#[test]
fn reserve_to_bottom_swaps_cards_and_flags() {
    // reserve=[5♠, 9♥]（トップは 9♥）、bottom=[8♣] トップインデックス 0
    let mut model = GameModel::new();
    model.add_main_pile_card(main_card(1, CardFace::King, CardSuit::Clubs, 100.0, 1000.0));
    model.add_bottom_pile_card(bottom_card(2, CardFace::Eight, CardSuit::Clubs, 540.0, 300.0));
    model.add_reserve_pile_card(reserve_card(3, CardFace::Five, CardSuit::Spades, 200.0, 300.0));
    model.add_reserve_pile_card(reserve_card(4, CardFace::Nine, CardSuit::Hearts, 300.0, 300.0));

    let mut game = GameController::new(model);
    let before_count = game.game_model().total_card_count();

    game.handle_card_click(4).expect("|9-8|=1 なので交換できるはず");

    let model = game.game_model();
    assert_eq!(model.total_card_count(), before_count, "純粋な交換だから枚数は不変");

    // 底牌堆スロット 0 には 9♥、クリック不可
    let new_top = model.bottom_pile_top_card().expect("トップがいるはず");
    assert_eq!(new_top.id, 4);
    assert!(!new_top.is_clickable, "底牌堆に着地したカードはクリック不可");
    assert_eq!(new_top.position, Position::new(540.0, 300.0));

    // 備用牌堆スロット 1 には 8♣、クリック可能
    let swapped_out = &model.reserve_pile_cards()[1];
    assert_eq!(swapped_out.id, 2);
    assert!(swapped_out.is_clickable, "備用牌堆に着地したカードはクリック可能");
    assert_eq!(swapped_out.position, Position::new(300.0, 300.0));

    println!("備用牌堆⇄底牌堆の交換シナリオ、成功！🎉");
}

#[test]
fn reserve_to_bottom_requires_adjacency() {
    // reserve=[5♠]、bottom=[8♣] → |5-8|=3 なので交換できない
    let mut model = GameModel::new();
    model.add_main_pile_card(main_card(1, CardFace::King, CardSuit::Clubs, 100.0, 1000.0));
    model.add_bottom_pile_card(bottom_card(2, CardFace::Eight, CardSuit::Clubs, 540.0, 300.0));
    model.add_reserve_pile_card(reserve_card(3, CardFace::Five, CardSuit::Spades, 200.0, 300.0));

    let mut game = GameController::new(model);
    let before = game.game_model().clone();
    assert_eq!(game.handle_card_click(3), Err(MoveError::IllegalMove));
    assert_eq!(game.game_model(), &before);

    println!("備用牌堆の隣接要求テスト、成功！🎉");
}

#[test]
fn hand_swap_retargets_top_and_undoes_via_ledger() {
    // bottom=[4♦, 9♠]（トップは 9♠）。4♦ をクリックするとトップが付け替わる
    let mut model = GameModel::new();
    model.add_main_pile_card(main_card(1, CardFace::King, CardSuit::Clubs, 100.0, 1000.0));
    model.add_bottom_pile_card(bottom_card(2, CardFace::Four, CardSuit::Diamonds, 440.0, 300.0));
    model.add_bottom_pile_card(bottom_card(3, CardFace::Nine, CardSuit::Spades, 540.0, 300.0));

    let mut game = GameController::new(model);
    assert_eq!(game.game_model().bottom_pile_top_index(), Some(1));

    game.handle_card_click(2).expect("トップを付け替えられるはず");
    assert_eq!(game.game_model().bottom_pile_top_index(), Some(0));

    // もうトップのカードをもう一度クリックしてもダメ！
    assert_eq!(game.handle_card_click(2), Err(MoveError::IllegalMove));

    // デルタ台帳で巻き戻すとトップインデックスが戻る
    assert!(game.has_undoable_action());
    game.undo_last_record().expect("巻き戻せるはず");
    assert_eq!(game.game_model().bottom_pile_top_index(), Some(1));
    assert!(!game.has_undoable_action(), "台帳を使い切ったら空のはず");
    assert_eq!(game.undo_last_record(), Err(MoveError::HistoryExhausted));

    println!("トップ付け替えとデルタ巻き戻し、成功！🎉");
}

#[test]
fn delta_undo_restores_positions_after_main_to_bottom() {
    let mut game = GameController::new(seven_on_six_model());
    game.handle_card_click(1).expect("置けるはず");

    // 7♣ は底牌堆に移ってるので、デルタ記録は解決できなくなってる
    // （主牌堆にいることを要求する）→ 記録は台帳に残ったまま失敗
    assert!(game.has_undoable_action());
    assert_eq!(game.undo_last_record(), Err(MoveError::CorruptUndoRecord));
    assert!(game.has_undoable_action(), "壊れた記録は食い潰されないはず");

    // スナップショット側なら所属ごと戻せる！
    game.undo().expect("スナップショットで戻れるはず");
    assert!(game.game_model().find_main_pile_card(1).is_some());
    game.undo_last_record().expect("戻した盤面ならデルタ記録も解決できる");

    println!("デルタ記録とスナップショットの合わせ技、成功！🎉");
}

#[test]
fn snapshot_undo_redo_walks_moves() {
    let mut model = seven_on_six_model();
    model.add_main_pile_card(main_card(3, CardFace::Eight, CardSuit::Hearts, 400.0, 1000.0));
    let mut game = GameController::new(model);

    assert!(!game.can_undo(), "初期スナップショットからは戻れない");
    assert!(!game.can_redo());

    game.handle_card_click(1).expect("7♣ → 6♦");
    game.handle_card_click(3).expect("8♥ → 7♣");
    assert!(game.can_undo());

    let after_two_moves = game.game_model().clone();

    game.undo().expect("1手戻れるはず");
    assert_eq!(game.game_model().bottom_pile_top_card().map(|c| c.id), Some(1));
    game.undo().expect("もう1手戻れるはず");
    assert_eq!(game.game_model().bottom_pile_top_card().map(|c| c.id), Some(2));
    assert_eq!(game.undo(), Err(MoveError::HistoryExhausted), "初期より前は無い");

    game.redo().expect("進めるはず");
    game.redo().expect("もう1手進めるはず");
    assert_eq!(game.game_model(), &after_two_moves, "リドゥで2手後と完全一致");
    assert_eq!(game.redo(), Err(MoveError::HistoryExhausted));

    println!("スナップショットのアンドゥ・リドゥ散歩、成功！🎉");
}

#[test]
fn new_move_after_undo_truncates_redo_tail() {
    let mut model = seven_on_six_model();
    model.add_main_pile_card(main_card(3, CardFace::Five, CardSuit::Hearts, 400.0, 1000.0));
    let mut game = GameController::new(model);

    game.handle_card_click(1).expect("7♣ → 6♦");
    game.undo().expect("戻れるはず");
    assert!(game.can_redo());

    // 別のムーブを実行するとリドゥ枝は消える！
    game.handle_card_click(3).expect("5♥ → 6♦");
    assert!(!game.can_redo(), "新しいムーブでリドゥ枝は切り捨てられるはず");

    println!("リドゥ枝切り捨てシナリオ、成功！🎉");
}

#[test]
fn draw_card_moves_reserve_top_to_bottom() {
    let mut model = seven_on_six_model();
    model.add_reserve_pile_card(reserve_card(3, CardFace::Queen, CardSuit::Spades, 200.0, 300.0));
    model.add_reserve_pile_card(reserve_card(4, CardFace::Ace, CardSuit::Hearts, 300.0, 300.0));
    let mut game = GameController::new(model);
    let before_count = game.game_model().total_card_count();

    let drawn = game.draw_card().expect("引けるはず");
    assert_eq!(drawn, 4, "備用牌堆のトップから引くはず");

    let model = game.game_model();
    assert_eq!(model.total_card_count(), before_count, "引き札で枚数は変わらない");
    assert!(model.find_reserve_pile_card(4).is_none(), "備用牌堆からは消える");
    let new_top = model.bottom_pile_top_card().expect("トップがいるはず");
    assert_eq!(new_top.id, 4, "引いたカードが新しいトップ");
    assert!(!new_top.is_clickable, "底牌堆の約束どおりクリック不可");
    assert_eq!(model.reserve_pile_top_index(), Some(0), "備用のトップは繰り下がる");

    // 引き札もスナップショットに乗るのでアンドゥできる！
    game.undo().expect("戻れるはず");
    assert!(game.game_model().find_reserve_pile_card(4).is_some());

    // 空になるまで引いたら EmptyPile
    game.redo().expect("進めるはず");
    game.draw_card().expect("残り1枚を引けるはず");
    assert_eq!(game.draw_card(), Err(MoveError::EmptyPile));

    println!("引き札シナリオ、成功！🎉");
}

#[test]
fn game_over_when_main_pile_empties() {
    let mut game = GameController::new(seven_on_six_model());
    assert!(!game.is_game_over());

    game.handle_card_click(1).expect("置けるはず");
    assert!(game.is_game_over(), "主牌堆が空になったら終了のはず");

    println!("終了判定シナリオ、成功！🎉");
}

#[test]
fn undo_complete_callback_fires_through_controller() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outcomes);

    let mut model = GameModel::new();
    model.add_main_pile_card(main_card(1, CardFace::King, CardSuit::Clubs, 100.0, 1000.0));
    model.add_bottom_pile_card(bottom_card(2, CardFace::Four, CardSuit::Diamonds, 440.0, 300.0));
    model.add_bottom_pile_card(bottom_card(3, CardFace::Nine, CardSuit::Spades, 540.0, 300.0));

    let mut game = GameController::new(model);
    game.set_undo_complete_callback(Box::new(move |success| {
        sink.borrow_mut().push(success);
    }));

    game.handle_card_click(2).expect("トップを付け替えられるはず");
    game.undo_last_record().expect("巻き戻せるはず");
    let _ = game.undo_last_record(); // 空台帳 → false 通知

    assert_eq!(*outcomes.borrow(), vec![true, false]);
    println!("コールバック経由の通知シナリオ、成功！🎉");
}
