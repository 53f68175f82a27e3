// src/lib.rs
//! ソリティア系カードゲームのルールエンジンと履歴レイヤーだよ！🃏
//!
//! 描画もネットワークも入ってない、組み込み用の純粋なコアライブラリ。
//! レベル設定からゲームモデルを組み立てて、クリックされたカード ID を
//! [`controllers::game_controller::GameController`] に渡せば、検証・実行・
//! 履歴保存までぜんぶ面倒を見てくれる！

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod configs; // レベルの静的設定
pub mod controllers; // ムーブの検証と実行
pub mod error; // エラーの種類
pub mod managers; // 履歴とアンドゥ台帳の元締め
pub mod models; // カード・牌堆・記録のデータモデル
pub mod services; // ステートレスなビジネスロジック
pub mod utils; // マッチ判定などのヘルパー

// よく使う型はクレート直下からも使えるようにしておくよ！
pub use configs::level_config::{CardConfig, LevelConfig};
pub use controllers::game_controller::GameController;
pub use error::MoveError;
pub use models::card::{Card, CardFace, CardSuit};
pub use models::game_model::{GameModel, PileKind};
pub use models::position::Position;
pub use services::game_model_generator::{CardIdAllocator, GameModelFromLevelGenerator};
