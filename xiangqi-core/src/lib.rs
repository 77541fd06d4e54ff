//! 中国象棋规则引擎
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 按棋子种类分派的走法生成
//! - 增量 Zobrist 哈希与重复局面判和
//! - 走法应用 / 撤销（逐位还原）
//! - FEN 格式与坐标文本编解码
//! - 中文纵线表示法
//!
//! 与源规则一致，走法列表不过滤送将走法（见 `moves` 模块说明）。

mod board;
mod constants;
mod error;
mod fen;
mod moves;
mod notation;
mod piece;
mod zobrist;

pub use board::{Board, Chessman, PieceId, Winner};
pub use constants::*;
pub use error::{ChessError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use moves::MoveGenerator;
pub use notation::Notation;
pub use piece::{Piece, PieceType, Position, Side, Zone};
pub use zobrist::ZobristTable;
