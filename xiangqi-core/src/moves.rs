//! 走法生成
//!
//! 按棋子种类分派的走法枚举，直线棋子消费棋盘的方向扫描器。
//! 与源规则一致：生成的是该棋子自身规则下的全部走法，
//! 不过滤会让己方将/帅被将军的走法，也没有将帅对脸规则。

use crate::board::{Board, PieceId};
use crate::piece::{PieceType, Position, Side, Zone};

/// 直线方向（上、下、右、左）
const LINE_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// 斜线方向
const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定棋子的走法列表
    pub fn compute(board: &Board, id: PieceId) -> Vec<Position> {
        let man = board.chessman(id);
        let pos = man.position();
        let side = man.side();
        let zone = man.piece().zone();

        let mut moves = Vec::new();
        match man.piece_type() {
            PieceType::King => Self::king_moves(board, pos, side, zone, &mut moves),
            PieceType::Advisor => Self::advisor_moves(board, pos, side, zone, &mut moves),
            PieceType::Bishop => Self::bishop_moves(board, pos, side, zone, &mut moves),
            PieceType::Knight => Self::knight_moves(board, pos, side, zone, &mut moves),
            PieceType::Rook => Self::rook_moves(board, pos, side, &mut moves),
            PieceType::Cannon => Self::cannon_moves(board, pos, side, &mut moves),
            PieceType::Pawn => Self::pawn_moves(board, pos, side, zone, &mut moves),
        }
        moves
    }

    /// 车：四个方向滑行到最近障碍，障碍为敌方时其格也可走（吃子）
    fn rook_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Position>) {
        for (dx, dy) in LINE_DIRS {
            match board.first_piece_toward(pos, dx, dy) {
                Some(blocker) => {
                    Self::push_between(pos, blocker.position(), dx, dy, moves);
                    if blocker.side() != side {
                        moves.push(blocker.position());
                    }
                }
                None => Self::push_to_edge(pos, dx, dy, moves),
            }
        }
    }

    /// 炮：滑行同车但不含障碍格（无论障碍颜色），
    /// 另可隔一个炮架打该方向第二个棋子（须为敌方）
    fn cannon_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Position>) {
        for (dx, dy) in LINE_DIRS {
            match board.first_piece_toward(pos, dx, dy) {
                Some(screen) => Self::push_between(pos, screen.position(), dx, dy, moves),
                None => Self::push_to_edge(pos, dx, dy, moves),
            }
            if let Some(target) = board.second_piece_toward(pos, dx, dy) {
                if target.side() != side {
                    moves.push(target.position());
                }
            }
        }
    }

    /// 马：先查四个相邻直线位（马腿），腿被任何棋子堵住则
    /// 该方向的两个日字目标都不可走
    fn knight_moves(
        board: &Board,
        pos: Position,
        side: Side,
        zone: Zone,
        moves: &mut Vec<Position>,
    ) {
        for (lx, ly) in LINE_DIRS {
            let Some(leg) = pos.offset(lx, ly) else {
                continue;
            };
            if board.piece_at(leg).is_some() {
                continue;
            }
            let candidates = if ly == 0 {
                [pos.offset(2 * lx, 1), pos.offset(2 * lx, -1)]
            } else {
                [pos.offset(1, 2 * ly), pos.offset(-1, 2 * ly)]
            };
            for to in candidates.into_iter().flatten() {
                Self::try_add(board, side, zone, to, moves);
            }
        }
    }

    /// 象：田字走法，象眼被堵则不通；活动区域限制使其不过河
    fn bishop_moves(
        board: &Board,
        pos: Position,
        side: Side,
        zone: Zone,
        moves: &mut Vec<Position>,
    ) {
        for (dx, dy) in DIAG_DIRS {
            let Some(eye) = pos.offset(dx, dy) else {
                continue;
            };
            if board.piece_at(eye).is_some() {
                continue;
            }
            if let Some(to) = pos.offset(2 * dx, 2 * dy) {
                Self::try_add(board, side, zone, to, moves);
            }
        }
    }

    /// 士：九宫内斜走一步，无遮挡检查
    fn advisor_moves(
        board: &Board,
        pos: Position,
        side: Side,
        zone: Zone,
        moves: &mut Vec<Position>,
    ) {
        for (dx, dy) in DIAG_DIRS {
            if let Some(to) = pos.offset(dx, dy) {
                Self::try_add(board, side, zone, to, moves);
            }
        }
    }

    /// 将/帅：九宫内直走一步
    fn king_moves(
        board: &Board,
        pos: Position,
        side: Side,
        zone: Zone,
        moves: &mut Vec<Position>,
    ) {
        for (dx, dy) in LINE_DIRS {
            if let Some(to) = pos.offset(dx, dy) {
                Self::try_add(board, side, zone, to, moves);
            }
        }
    }

    /// 兵/卒：向前一步；过河后可横走；永不后退
    fn pawn_moves(
        board: &Board,
        pos: Position,
        side: Side,
        zone: Zone,
        moves: &mut Vec<Position>,
    ) {
        if let Some(to) = pos.offset(0, side.forward()) {
            Self::try_add(board, side, zone, to, moves);
        }

        let crossed_river = match side {
            Side::Red => pos.y >= 5,
            Side::Black => pos.y <= 4,
        };
        if crossed_river {
            for dx in [-1i8, 1] {
                if let Some(to) = pos.offset(dx, 0) {
                    Self::try_add(board, side, zone, to, moves);
                }
            }
        }
    }

    /// 共享候选过滤：目标须在活动区域内，且为空格或敌方棋子
    fn try_add(board: &Board, side: Side, zone: Zone, to: Position, moves: &mut Vec<Position>) {
        if !zone.contains(to) {
            return;
        }
        match board.piece_at(to) {
            Some(target) if target.side() == side => {}
            _ => moves.push(to),
        }
    }

    /// 起点与障碍之间（两端不含）的空格
    fn push_between(pos: Position, stop: Position, dx: i8, dy: i8, moves: &mut Vec<Position>) {
        let mut current = pos.offset(dx, dy);
        while let Some(p) = current {
            if p == stop {
                break;
            }
            moves.push(p);
            current = p.offset(dx, dy);
        }
    }

    /// 起点到棋盘边缘的所有格
    fn push_to_edge(pos: Position, dx: i8, dy: i8, moves: &mut Vec<Position>) {
        let mut current = pos.offset(dx, dy);
        while let Some(p) = current {
            moves.push(p);
            current = p.offset(dx, dy);
        }
    }
}
