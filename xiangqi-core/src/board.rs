//! 棋盘状态与走子管理
//!
//! 棋盘是聚合根：格子存句柄，棋子本体放在密集数组里，名称索引
//! 与格子引用同一个句柄。吃子只标记死亡并摘出索引，棋子对象
//! 保留在数组中，撤销时原地复活。

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::constants::BOARD_SQUARES;
use crate::error::{ChessError, Result};
use crate::fen::Fen;
use crate::moves::MoveGenerator;
use crate::notation::Notation;
use crate::piece::{Piece, PieceType, Position, Side};
use crate::zobrist::ZobristTable;

/// 棋子句柄，指向棋盘内部棋子数组的稳定下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

/// 棋盘上的一枚棋子
///
/// 不变量：存活时 `grid[position] == id` 且名称索引含 `name`；
/// 被吃后两处均不出现。
#[derive(Debug, Clone)]
pub struct Chessman {
    id: PieceId,
    name: String,
    piece: Piece,
    position: Position,
    alive: bool,
    moving_list: Vec<Position>,
}

impl Chessman {
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// 唯一名称（如 red_rook_1）
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn side(&self) -> Side {
        self.piece.side
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece.piece_type
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// 当前走法列表（每回合由 [`Board::compute_side_moves`] 重新生成）
    pub fn moving_list(&self) -> &[Position] {
        &self.moving_list
    }
}

/// 撤销记录，足以精确还原一步走法
#[derive(Debug, Clone)]
struct UndoRecord {
    piece: PieceId,
    from: Position,
    to: Position,
    captured: Option<PieceId>,
    notation: String,
}

/// 终局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Red,
    Black,
    /// 重复局面判和
    Draw,
}

/// 棋盘
pub struct Board {
    /// 9x10 格子，存棋子句柄，索引为 y * 9 + x
    grid: Vec<Option<PieceId>>,
    /// 棋子存储区，句柄即下标；被吃的棋子保留以便撤销复活
    pieces: Vec<Chessman>,
    /// 存活棋子的名称索引
    index: HashMap<String, PieceId>,
    /// 当前走子方
    turn: Side,
    /// 走法记录（纵线表示法）
    moves_history: Vec<String>,
    /// 撤销栈
    undo_stack: Vec<UndoRecord>,
    /// Zobrist 哈希表，每个棋盘独立持有
    zobrist: ZobristTable,
    /// 当前局面哈希（增量维护，应始终等于全量哈希）
    current_hash: u64,
    /// 各局面哈希的出现次数，用于重复局面判和
    hash_occurrence: HashMap<u64, u32>,
    /// 自动命名计数器，按（阵营，种类）
    name_counts: HashMap<(Side, PieceType), u32>,
}

impl Board {
    /// 创建空棋盘（红方走子）
    pub fn empty() -> Self {
        let mut board = Self {
            grid: vec![None; BOARD_SQUARES],
            pieces: Vec::new(),
            index: HashMap::new(),
            turn: Side::Red,
            moves_history: Vec::new(),
            undo_stack: Vec::new(),
            zobrist: ZobristTable::new(),
            current_hash: 0,
            hash_occurrence: HashMap::new(),
            name_counts: HashMap::new(),
        };
        board.rehash();
        board
    }

    /// 创建初始棋盘（双方各 16 子的标准开局）
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board
            .setup_initial()
            .expect("standard setup should be in zone");
        board
    }

    /// 摆放标准开局
    fn setup_initial(&mut self) -> Result<()> {
        use PieceType::*;

        let back_rank = [Rook, Knight, Bishop, Advisor, King, Advisor, Bishop, Knight, Rook];
        for (x, &piece_type) in back_rank.iter().enumerate() {
            let x = x as u8;
            self.add_piece(Piece::new(piece_type, Side::Red), Position::new_unchecked(x, 0))?;
            self.add_piece(Piece::new(piece_type, Side::Black), Position::new_unchecked(x, 9))?;
        }
        for x in [1u8, 7] {
            self.add_piece(Piece::new(Cannon, Side::Red), Position::new_unchecked(x, 2))?;
            self.add_piece(Piece::new(Cannon, Side::Black), Position::new_unchecked(x, 7))?;
        }
        for x in (0..9u8).step_by(2) {
            self.add_piece(Piece::new(Pawn, Side::Red), Position::new_unchecked(x, 3))?;
            self.add_piece(Piece::new(Pawn, Side::Black), Position::new_unchecked(x, 6))?;
        }

        self.rehash();
        Ok(())
    }

    /// 清空棋盘，整体重置
    pub fn clear(&mut self) {
        self.grid = vec![None; BOARD_SQUARES];
        self.pieces.clear();
        self.index.clear();
        self.turn = Side::Red;
        self.moves_history.clear();
        self.undo_stack.clear();
        self.name_counts.clear();
        self.rehash();
    }

    /// 在指定位置放置一枚新棋子并自动命名
    ///
    /// 位置超出该棋子的活动区域或已被占用时返回错误，不做任何修改。
    /// 批量摆放结束后需调用 [`Board::rehash`] 恢复哈希不变量。
    pub fn add_piece(&mut self, piece: Piece, pos: Position) -> Result<PieceId> {
        if !piece.zone().contains(pos) {
            warn!(x = pos.x, y = pos.y, "placement outside piece zone");
            return Err(ChessError::InvalidPosition {
                x: pos.x as i8,
                y: pos.y as i8,
            });
        }
        if self.grid[pos.to_index()].is_some() {
            warn!(x = pos.x, y = pos.y, "square already occupied");
            return Err(ChessError::InvalidPosition {
                x: pos.x as i8,
                y: pos.y as i8,
            });
        }

        let count = self
            .name_counts
            .entry((piece.side, piece.piece_type))
            .or_insert(0);
        *count += 1;
        let name = format!("{}_{}_{}", piece.side.name(), piece.piece_type.name(), count);

        let id = PieceId(self.pieces.len());
        self.pieces.push(Chessman {
            id,
            name: name.clone(),
            piece,
            position: pos,
            alive: true,
            moving_list: Vec::new(),
        });
        self.grid[pos.to_index()] = Some(id);
        self.index.insert(name, id);
        Ok(id)
    }

    /// 从头重算当前哈希并重置出现次数
    ///
    /// 恢复「当前哈希 == 全量哈希、当前局面计数为 1」的不变量。
    pub fn rehash(&mut self) {
        self.current_hash = self.zobrist.hash_board(self);
        self.hash_occurrence = HashMap::from([(self.current_hash, 1)]);
    }

    /// 全量计算当前局面哈希
    pub fn full_hash(&self) -> u64 {
        self.zobrist.hash_board(self)
    }

    /// 增量维护的当前局面哈希
    pub fn current_hash(&self) -> u64 {
        self.current_hash
    }

    /// 当前局面已出现的次数
    pub fn repetition_count(&self) -> u32 {
        self.hash_occurrence
            .get(&self.current_hash)
            .copied()
            .unwrap_or(0)
    }

    /// 当前走子方
    pub fn side_to_move(&self) -> Side {
        self.turn
    }

    /// 是否轮到红方
    pub fn is_red_turn(&self) -> bool {
        self.turn == Side::Red
    }

    pub(crate) fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    /// 按句柄取棋子
    pub fn chessman(&self, id: PieceId) -> &Chessman {
        &self.pieces[id.0]
    }

    /// 指定位置的棋子
    pub fn piece_at(&self, pos: Position) -> Option<&Chessman> {
        self.piece_id_at(pos).map(|id| &self.pieces[id.0])
    }

    /// 指定位置的棋子句柄
    pub fn piece_id_at(&self, pos: Position) -> Option<PieceId> {
        if pos.is_valid() {
            self.grid[pos.to_index()]
        } else {
            None
        }
    }

    /// 按名称查找存活棋子
    pub fn piece_by_name(&self, name: &str) -> Option<&Chessman> {
        self.index.get(name).map(|id| &self.pieces[id.0])
    }

    /// 所有存活棋子
    pub fn live_pieces(&self) -> impl Iterator<Item = &Chessman> {
        self.pieces.iter().filter(|man| man.alive)
    }

    /// 查找某方存活的将/帅
    pub fn find_general(&self, side: Side) -> Option<&Chessman> {
        self.live_pieces()
            .find(|man| man.piece.piece_type == PieceType::King && man.piece.side == side)
    }

    /// 走法记录
    pub fn moves_history(&self) -> &[String] {
        &self.moves_history
    }

    /// 沿单位方向 (dx, dy) 离查询点最近的棋子
    ///
    /// 四个方向 (0,1)/(0,-1)/(1,0)/(-1,0) 对应上、下、右、左扫描。
    pub fn first_piece_toward(&self, pos: Position, dx: i8, dy: i8) -> Option<&Chessman> {
        self.scan_toward(pos, dx, dy).next()
    }

    /// 沿单位方向 (dx, dy) 第二近的棋子（炮的打子规则用）
    pub fn second_piece_toward(&self, pos: Position, dx: i8, dy: i8) -> Option<&Chessman> {
        self.scan_toward(pos, dx, dy).nth(1)
    }

    fn scan_toward(&self, pos: Position, dx: i8, dy: i8) -> impl Iterator<Item = &Chessman> + '_ {
        std::iter::successors(pos.offset(dx, dy), move |p| p.offset(dx, dy))
            .filter_map(|p| self.piece_at(p))
    }

    /// 为当前走子方的所有存活棋子重新生成走法列表
    ///
    /// 每回合走子前必须调用一次；先清空全部旧列表再生成。
    pub fn compute_side_moves(&mut self) {
        self.clear_moving_lists();
        let ids: Vec<PieceId> = self
            .pieces
            .iter()
            .filter(|man| man.alive && man.piece.side == self.turn)
            .map(|man| man.id)
            .collect();
        for id in ids {
            let list = MoveGenerator::compute(self, id);
            self.pieces[id.0].moving_list = list;
        }
    }

    /// 清空所有棋子的走法列表
    pub fn clear_moving_lists(&mut self) {
        for man in &mut self.pieces {
            man.moving_list.clear();
        }
    }

    /// 应用一步走法
    ///
    /// 目标必须出现在该棋子当前的走法列表中（先调用
    /// [`Board::compute_side_moves`]），且棋子属于当前走子方。
    /// 原子操作：失败时不做任何修改。
    pub fn apply_move(&mut self, id: PieceId, to: Position) -> Result<()> {
        let man = &self.pieces[id.0];
        if man.piece.side != self.turn {
            warn!(name = %man.name, "move rejected: not this side's turn");
            return Err(ChessError::NotYourTurn);
        }
        if !man.moving_list.contains(&to) {
            warn!(name = %man.name, to = %to, "move rejected: target not in moving list");
            return Err(ChessError::InvalidMove {
                from_x: man.position.x,
                from_y: man.position.y,
                to_x: to.x,
                to_y: to.y,
            });
        }

        let piece = man.piece;
        let from = man.position;
        let captured = self.grid[to.to_index()];
        let notation = Notation::format(piece, from, to);

        self.current_hash = self.zobrist.update_hash(
            self.current_hash,
            piece,
            from,
            to,
            captured.map(|cid| self.pieces[cid.0].piece),
        );
        *self.hash_occurrence.entry(self.current_hash).or_insert(0) += 1;

        if let Some(cid) = captured {
            let name = self.pieces[cid.0].name.clone();
            self.index.remove(&name);
            self.pieces[cid.0].alive = false;
        }
        self.grid[from.to_index()] = None;
        self.grid[to.to_index()] = Some(id);
        self.pieces[id.0].position = to;

        self.undo_stack.push(UndoRecord {
            piece: id,
            from,
            to,
            captured,
            notation: notation.clone(),
        });
        debug!(mv = %notation, "move applied");
        self.moves_history.push(notation);
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// 撤销最近一步走法，逐位还原棋盘状态
    pub fn undo_move(&mut self) -> Result<()> {
        let record = self.undo_stack.pop().ok_or(ChessError::EmptyHistory)?;

        // 当前局面出现次数减一，归零则移除
        if let Some(count) = self.hash_occurrence.get_mut(&self.current_hash) {
            *count -= 1;
            if *count == 0 {
                self.hash_occurrence.remove(&self.current_hash);
            }
        }

        // XOR 自逆：按同一公式再更新一次即回到原哈希
        let piece = self.pieces[record.piece.0].piece;
        self.current_hash = self.zobrist.update_hash(
            self.current_hash,
            piece,
            record.from,
            record.to,
            record.captured.map(|cid| self.pieces[cid.0].piece),
        );

        self.grid[record.to.to_index()] = None;
        self.pieces[record.piece.0].position = record.from;
        self.grid[record.from.to_index()] = Some(record.piece);

        if let Some(cid) = record.captured {
            let man = &mut self.pieces[cid.0];
            man.position = record.to;
            man.alive = true;
            let name = man.name.clone();
            self.grid[record.to.to_index()] = Some(cid);
            self.index.insert(name, cid);
        }

        self.moves_history.pop();
        self.turn = self.turn.opponent();
        self.clear_moving_lists();
        debug!(mv = %record.notation, "move undone");
        Ok(())
    }

    /// 终局判定
    ///
    /// 同一局面（含走子方）出现三次判和；一方的将/帅被吃则对方获胜。
    /// 不做合法走法枚举，判定是 O(棋子数) 的查询。
    pub fn winner(&self) -> Option<Winner> {
        if self.repetition_count() >= 3 {
            return Some(Winner::Draw);
        }
        if self.find_general(Side::Red).is_none() {
            return Some(Winner::Black);
        }
        if self.find_general(Side::Black).is_none() {
            return Some(Winner::Red);
        }
        None
    }

    /// 对局是否结束
    pub fn is_end(&self) -> bool {
        self.winner().is_some()
    }

    /// 序列化为 FEN 字符串
    pub fn to_fen(&self) -> String {
        Fen::to_string(self)
    }

    /// 从 FEN 字符串构建棋盘
    pub fn from_fen(fen: &str) -> Result<Self> {
        Fen::parse(fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new_unchecked(x, y)
    }

    /// 先生成走法再按坐标走一步
    fn play(board: &mut Board, from: (u8, u8), to: (u8, u8)) {
        board.compute_side_moves();
        let id = board.piece_id_at(pos(from.0, from.1)).expect("piece at from");
        board.apply_move(id, pos(to.0, to.1)).expect("legal move");
    }

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        // 红方帅
        let king = board.piece_at(pos(4, 0)).unwrap();
        assert_eq!(king.piece(), Piece::new(PieceType::King, Side::Red));

        // 黑方将
        let king = board.piece_at(pos(4, 9)).unwrap();
        assert_eq!(king.piece(), Piece::new(PieceType::King, Side::Black));

        // 红方炮
        let cannon = board.piece_at(pos(1, 2)).unwrap();
        assert_eq!(cannon.piece(), Piece::new(PieceType::Cannon, Side::Red));

        // 黑方卒
        let pawn = board.piece_at(pos(0, 6)).unwrap();
        assert_eq!(pawn.piece(), Piece::new(PieceType::Pawn, Side::Black));

        // 双方各 16 子
        assert_eq!(board.live_pieces().count(), 32);
        assert!(board.is_red_turn());
        assert_eq!(board.repetition_count(), 1);
    }

    #[test]
    fn test_name_index() {
        let board = Board::initial();

        let rook = board.piece_by_name("red_rook_1").unwrap();
        assert_eq!(rook.position(), pos(0, 0));
        assert_eq!(board.piece_at(pos(0, 0)).unwrap().name(), "red_rook_1");

        assert!(board.piece_by_name("red_rook_3").is_none());
        assert!(board.find_general(Side::Red).is_some());
        assert!(board.find_general(Side::Black).is_some());
    }

    #[test]
    fn test_add_piece_zone_rejected() {
        let mut board = Board::empty();

        // 士不能出九宫
        let err = board
            .add_piece(Piece::new(PieceType::Advisor, Side::Red), pos(0, 0))
            .unwrap_err();
        assert_eq!(err, ChessError::InvalidPosition { x: 0, y: 0 });
        assert!(board.piece_at(pos(0, 0)).is_none());

        // 同格不允许两枚棋子
        board
            .add_piece(Piece::new(PieceType::Rook, Side::Red), pos(0, 0))
            .unwrap();
        assert!(board
            .add_piece(Piece::new(PieceType::Rook, Side::Black), pos(0, 0))
            .is_err());
    }

    #[test]
    fn test_scanners() {
        let board = Board::initial();

        // 红炮 (1,2) 向上：最近是黑炮 (1,7)，第二近是黑马 (1,9)
        let first = board.first_piece_toward(pos(1, 2), 0, 1).unwrap();
        assert_eq!(first.position(), pos(1, 7));
        let second = board.second_piece_toward(pos(1, 2), 0, 1).unwrap();
        assert_eq!(second.position(), pos(1, 9));

        // 卒线 (0,3) 向上：最近是黑卒 (0,6)，第二近是黑车 (0,9)
        let first = board.first_piece_toward(pos(0, 3), 0, 1).unwrap();
        assert_eq!(first.position(), pos(0, 6));
        let second = board.second_piece_toward(pos(0, 3), 0, 1).unwrap();
        assert_eq!(second.position(), pos(0, 9));

        // 向右：最近是另一门红炮
        let right = board.first_piece_toward(pos(1, 2), 1, 0).unwrap();
        assert_eq!(right.position(), pos(7, 2));

        // 向下：红马 (1,0)
        let below = board.first_piece_toward(pos(1, 2), 0, -1).unwrap();
        assert_eq!(below.position(), pos(1, 0));

        // 空列方向没有棋子
        let mut empty = Board::empty();
        empty
            .add_piece(Piece::new(PieceType::Rook, Side::Red), pos(4, 4))
            .unwrap();
        assert!(empty.first_piece_toward(pos(4, 4), 0, 1).is_none());
        assert!(empty.second_piece_toward(pos(4, 4), 0, 1).is_none());
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut board = Board::initial();
        board.compute_side_moves();

        // 轮到红方，黑方棋子不能动
        let black_pawn = board.piece_id_at(pos(0, 6)).unwrap();
        assert_eq!(
            board.apply_move(black_pawn, pos(0, 5)),
            Err(ChessError::NotYourTurn)
        );

        // 拒绝后棋盘未变
        assert!(board.is_red_turn());
        assert_eq!(board.piece_at(pos(0, 6)).unwrap().side(), Side::Black);
        assert_eq!(board.moves_history().len(), 0);
    }

    #[test]
    fn test_move_not_in_list_rejected() {
        let mut board = Board::initial();
        board.compute_side_moves();

        // 车不能斜走
        let rook = board.piece_id_at(pos(0, 0)).unwrap();
        let err = board.apply_move(rook, pos(1, 1)).unwrap_err();
        assert_eq!(
            err,
            ChessError::InvalidMove {
                from_x: 0,
                from_y: 0,
                to_x: 1,
                to_y: 1,
            }
        );
        assert_eq!(board.full_hash(), board.current_hash());
    }

    #[test]
    fn test_move_without_compute_rejected() {
        let mut board = Board::initial();

        // 未生成走法列表时任何走法都被拒绝
        let cannon = board.piece_id_at(pos(1, 2)).unwrap();
        assert!(board.apply_move(cannon, pos(4, 2)).is_err());
    }

    #[test]
    fn test_apply_move_updates_state() {
        let mut board = Board::initial();
        let hash_before = board.current_hash();

        play(&mut board, (1, 2), (4, 2));

        assert!(board.piece_at(pos(1, 2)).is_none());
        let cannon = board.piece_at(pos(4, 2)).unwrap();
        assert_eq!(cannon.piece(), Piece::new(PieceType::Cannon, Side::Red));
        assert!(!board.is_red_turn());
        assert_eq!(board.moves_history().len(), 1);
        assert_eq!(board.moves_history()[0], "炮八平五");
        assert_ne!(board.current_hash(), hash_before);
        assert_eq!(board.current_hash(), board.full_hash());
    }

    #[test]
    fn test_undo_empty_history() {
        let mut board = Board::initial();
        assert_eq!(board.undo_move(), Err(ChessError::EmptyHistory));
    }

    #[test]
    fn test_undo_restores_state() {
        let mut board = Board::initial();
        let fen_before = board.to_fen();
        let hash_before = board.current_hash();

        play(&mut board, (1, 2), (4, 2));
        board.undo_move().unwrap();

        assert_eq!(board.to_fen(), fen_before);
        assert_eq!(board.current_hash(), hash_before);
        assert_eq!(board.current_hash(), board.full_hash());
        assert_eq!(board.repetition_count(), 1);
        assert!(board.moves_history().is_empty());
        assert!(board.is_red_turn());
    }

    #[test]
    fn test_undo_restores_captured_piece() {
        let mut board = Board::initial();

        // 红炮 (7,2) 隔黑炮打 (7,9) 黑马
        play(&mut board, (1, 2), (4, 2));
        play(&mut board, (1, 9), (2, 7));
        let fen_before = board.to_fen();
        let hash_before = board.current_hash();
        let history_before = board.moves_history().len();

        play(&mut board, (7, 2), (7, 9));
        let target = board.piece_at(pos(7, 9)).unwrap();
        assert_eq!(target.piece(), Piece::new(PieceType::Cannon, Side::Red));
        assert!(board.piece_by_name("black_knight_2").is_none());

        board.undo_move().unwrap();

        // 被吃的马原地复活并回到索引
        let knight = board.piece_at(pos(7, 9)).unwrap();
        assert_eq!(knight.piece(), Piece::new(PieceType::Knight, Side::Black));
        assert!(knight.is_alive());
        assert_eq!(
            board.piece_by_name("black_knight_2").unwrap().position(),
            pos(7, 9)
        );
        assert_eq!(board.to_fen(), fen_before);
        assert_eq!(board.current_hash(), hash_before);
        assert_eq!(board.current_hash(), board.full_hash());
        assert_eq!(board.moves_history().len(), history_before);
    }

    #[test]
    fn test_incremental_hash_agrees_with_full_hash() {
        let mut board = Board::initial();
        assert_eq!(board.current_hash(), board.full_hash());

        let moves = [
            ((1u8, 2u8), (4u8, 2u8)), // 炮八平五
            ((1, 9), (2, 7)),         // 馬2進3
            ((1, 0), (2, 2)),         // 傌八進七
            ((7, 7), (7, 3)),         // 砲8進4
            ((4, 2), (4, 6)),         // 炮五進四，吃中卒
        ];
        for (from, to) in moves {
            play(&mut board, from, to);
            assert_eq!(board.current_hash(), board.full_hash());
        }

        // 逐步撤销后同样一致
        while board.undo_move().is_ok() {
            assert_eq!(board.current_hash(), board.full_hash());
        }
        assert_eq!(board.current_hash(), Board::initial().current_hash());
    }

    #[test]
    fn test_winner_none_in_progress() {
        let board = Board::initial();
        assert_eq!(board.winner(), None);
        assert!(!board.is_end());
    }

    #[test]
    fn test_winner_general_captured() {
        // 黑方没有将：红胜
        let board = Board::from_fen("rnba1abnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR b - - 0 1")
            .unwrap();
        assert_eq!(board.winner(), Some(Winner::Red));
        assert!(board.is_end());

        // 红方没有帅：黑胜
        let board = Board::from_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBA1ABNR w - - 0 1")
            .unwrap();
        assert_eq!(board.winner(), Some(Winner::Black));
    }

    #[test]
    fn test_repetition_draw() {
        let mut board = Board::initial();

        // 双方来回跳马两轮，初始局面共出现三次
        for _ in 0..2 {
            play(&mut board, (1, 0), (2, 2));
            play(&mut board, (1, 9), (2, 7));
            play(&mut board, (2, 2), (1, 0));
            play(&mut board, (2, 7), (1, 9));
        }

        assert_eq!(board.repetition_count(), 3);
        assert_eq!(board.winner(), Some(Winner::Draw));
    }

    #[test]
    fn test_repetition_counts_via_undo() {
        let mut board = Board::initial();

        play(&mut board, (1, 0), (2, 2));
        play(&mut board, (1, 9), (2, 7));
        play(&mut board, (2, 2), (1, 0));
        play(&mut board, (2, 7), (1, 9));
        assert_eq!(board.repetition_count(), 2);

        // 撤销全部四步后恢复到初始计数
        for _ in 0..4 {
            board.undo_move().unwrap();
        }
        assert_eq!(board.repetition_count(), 1);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_clear_board() {
        let mut board = Board::initial();
        play(&mut board, (1, 2), (4, 2));

        board.clear();

        assert_eq!(board.live_pieces().count(), 0);
        assert!(board.is_red_turn());
        assert!(board.moves_history().is_empty());
        assert_eq!(board.undo_move(), Err(ChessError::EmptyHistory));
        assert_eq!(board.current_hash(), board.full_hash());
        assert_eq!(board.repetition_count(), 1);
    }
}
