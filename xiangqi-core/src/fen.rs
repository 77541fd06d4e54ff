//! FEN 序列化
//!
//! 局面文本格式：10 行棋子布局（从第 9 行到第 0 行，斜杠分隔，
//! 数字表示连续空格）加走子方，尾部保留 `- - 0 1` 占位字段。

use crate::board::Board;
use crate::error::{ChessError, Result};
use crate::piece::{Piece, Position, Side};

/// 标准开局 FEN
pub const INITIAL_FEN: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

/// FEN 编解码器
pub struct Fen;

impl Fen {
    /// 将棋盘序列化为 FEN 字符串
    pub fn to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(10);
        for y in (0..10u8).rev() {
            let mut row = String::new();
            let mut empty_count = 0;
            for x in 0..9u8 {
                match board.piece_at(Position::new_unchecked(x, y)) {
                    Some(man) => {
                        if empty_count > 0 {
                            row.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        row.push(man.piece().to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                row.push_str(&empty_count.to_string());
            }
            rows.push(row);
        }

        let turn = match board.side_to_move() {
            Side::Red => 'w',
            Side::Black => 'b',
        };
        format!("{} {} - - 0 1", rows.join("/"), turn)
    }

    /// 从 FEN 字符串解析棋盘
    ///
    /// 走子方标记 `w`/`r`（不分大小写）为红方，其余任何标记为
    /// 黑方，缺省为红方；每行必须恰好覆盖 9 列；尾部占位字段
    /// 可省略。
    pub fn parse(fen: &str) -> Result<Board> {
        let invalid = |reason: &str| ChessError::InvalidFen {
            reason: reason.to_string(),
        };

        let mut fields = fen.split_whitespace();
        let layout = fields.next().ok_or_else(|| invalid("empty string"))?;
        // 走子方：w/r 为红方（不分大小写），其余任何标记视为黑方
        let turn = match fields.next() {
            None => Side::Red,
            Some(token) => match token.to_ascii_lowercase().as_str() {
                "w" | "r" => Side::Red,
                _ => Side::Black,
            },
        };

        let rows: Vec<&str> = layout.split('/').collect();
        if rows.len() != 10 {
            return Err(ChessError::InvalidFen {
                reason: format!("expected 10 rows, got {}", rows.len()),
            });
        }

        let mut board = Board::empty();
        for (i, row) in rows.iter().enumerate() {
            // 首行是第 9 行（黑方底线）
            let y = 9 - i as u8;
            let mut x = 0u8;
            for c in row.chars() {
                if x > 9 {
                    break;
                }
                if let Some(skip) = c.to_digit(10) {
                    x += skip as u8;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or_else(|| ChessError::InvalidFen {
                    reason: format!("unknown piece char: {c}"),
                })?;
                let pos = Position::new(x, y).ok_or_else(|| ChessError::InvalidFen {
                    reason: format!("row {y} overflows the board"),
                })?;
                board.add_piece(piece, pos)?;
                x += 1;
            }
            if x != 9 {
                return Err(ChessError::InvalidFen {
                    reason: format!("row {y} covers {x} columns, expected 9"),
                });
            }
        }

        board.set_turn(turn);
        board.rehash();
        Ok(board)
    }
}
