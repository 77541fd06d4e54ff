//! Zobrist 哈希
//!
//! 用随机键为每个（阵营、棋子类型、位置）组合生成 64 位指纹，
//! 支持全量计算与单步增量更新，用于判断重复局面。

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::constants::BOARD_SQUARES;
use crate::piece::{Piece, PieceType, Position, Side};

/// 默认种子，保证跨进程确定性
const DEFAULT_SEED: u64 = 0xC0DE_5EED_2024_0901;

/// Zobrist 哈希表
///
/// 键表在构造时一次生成，之后不再变化；中途重新生成会使
/// 重复局面检测失效。每个棋盘持有自己的表，互不共享可变状态。
pub struct ZobristTable {
    /// 棋子哈希键 [side][piece_type][position]
    /// side: 0=Red, 1=Black
    /// piece_type: 0-6 对应 7 种棋子
    /// position: 0-89 对应 90 个位置
    pieces: [[[u64; BOARD_SQUARES]; 7]; 2],
    /// 走子方哈希键（红方走子时异或进哈希）
    side_to_move: u64,
}

impl ZobristTable {
    /// 创建新的 Zobrist 表（固定默认种子）
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    /// 用指定种子创建（测试可用固定种子保证确定性）
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut pieces = [[[0u64; BOARD_SQUARES]; 7]; 2];
        for side in pieces.iter_mut() {
            for piece in side.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        Self {
            pieces,
            side_to_move: rng.gen(),
        }
    }

    /// 全量计算棋盘哈希
    ///
    /// 所有存活棋子的键异或在一起，红方走子时再异或走子方键。
    /// 结果必须与逐步增量更新的结果一致。
    pub fn hash_board(&self, board: &Board) -> u64 {
        let mut hash = 0u64;

        for man in board.live_pieces() {
            hash ^= self.piece_key(man.piece(), man.position());
        }

        if board.is_red_turn() {
            hash ^= self.side_to_move;
        }

        hash
    }

    /// 单步走法的增量更新
    ///
    /// 异或出起点、异或入终点、有吃子时异或出目标格上的被吃子，
    /// 最后异或走子方键。XOR 自逆：以相同参数再调用一次即还原，
    /// 撤销走法正是利用这一点。
    pub fn update_hash(
        &self,
        mut hash: u64,
        piece: Piece,
        from: Position,
        to: Position,
        captured: Option<Piece>,
    ) -> u64 {
        hash ^= self.piece_key(piece, from);
        hash ^= self.piece_key(piece, to);
        if let Some(cap) = captured {
            // 被吃的棋子总在目标格上
            hash ^= self.piece_key(cap, to);
        }
        hash ^ self.side_to_move
    }

    /// 获取单个（棋子，位置）的哈希键
    #[inline]
    pub fn piece_key(&self, piece: Piece, pos: Position) -> u64 {
        let side_idx = match piece.side {
            Side::Red => 0,
            Side::Black => 1,
        };
        self.pieces[side_idx][piece_type_index(piece.piece_type)][pos.to_index()]
    }

    /// 获取走子方键
    #[inline]
    pub fn side_key(&self) -> u64 {
        self.side_to_move
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

/// 将棋子类型转换为索引
#[inline]
fn piece_type_index(piece_type: PieceType) -> usize {
    match piece_type {
        PieceType::King => 0,
        PieceType::Advisor => 1,
        PieceType::Bishop => 2,
        PieceType::Knight => 3,
        PieceType::Rook => 4,
        PieceType::Cannon => 5,
        PieceType::Pawn => 6,
    }
}
