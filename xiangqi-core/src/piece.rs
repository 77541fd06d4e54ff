//! 棋子与位置定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::ChessError;

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    /// 将/帅
    King,
    /// 士/仕
    Advisor,
    /// 象/相
    Bishop,
    /// 马/傌
    Knight,
    /// 车/俥
    Rook,
    /// 炮/砲
    Cannon,
    /// 兵/卒
    Pawn,
}

impl PieceType {
    /// 获取 FEN 字符（红方大写，黑方小写）
    pub fn to_fen_char(&self, side: Side) -> char {
        let c = match self {
            PieceType::King => 'k',
            PieceType::Advisor => 'a',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Cannon => 'c',
            PieceType::Pawn => 'p',
        };
        match side {
            Side::Red => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<(PieceType, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::Red
        } else {
            Side::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'a' => PieceType::Advisor,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'r' => PieceType::Rook,
            'c' => PieceType::Cannon,
            'p' => PieceType::Pawn,
            _ => return None,
        };
        Some((piece_type, side))
    }

    /// 英文短名（自动命名用）
    pub fn name(&self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Advisor => "advisor",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Rook => "rook",
            PieceType::Cannon => "cannon",
            PieceType::Pawn => "pawn",
        }
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 红方（先手，在下方）
    Red,
    /// 黑方（后手，在上方）
    Black,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// 前进方向（红方 y 增大，黑方 y 减小）
    pub fn forward(&self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }

    /// 英文短名（自动命名用）
    pub fn name(&self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Black => "black",
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    /// 创建新棋子
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// 获取棋子显示的汉字
    pub fn display_char(&self) -> char {
        match (self.piece_type, self.side) {
            (PieceType::King, Side::Red) => '帥',
            (PieceType::King, Side::Black) => '將',
            (PieceType::Advisor, Side::Red) => '仕',
            (PieceType::Advisor, Side::Black) => '士',
            (PieceType::Bishop, Side::Red) => '相',
            (PieceType::Bishop, Side::Black) => '象',
            (PieceType::Knight, Side::Red) => '傌',
            (PieceType::Knight, Side::Black) => '馬',
            (PieceType::Rook, Side::Red) => '俥',
            (PieceType::Rook, Side::Black) => '車',
            (PieceType::Cannon, Side::Red) => '炮',
            (PieceType::Cannon, Side::Black) => '砲',
            (PieceType::Pawn, Side::Red) => '兵',
            (PieceType::Pawn, Side::Black) => '卒',
        }
    }

    /// 获取 FEN 字符
    pub fn to_fen_char(&self) -> char {
        self.piece_type.to_fen_char(self.side)
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Piece> {
        PieceType::from_fen_char(c).map(|(piece_type, side)| Piece { piece_type, side })
    }

    /// 该棋子的活动区域
    ///
    /// 将/士限于己方九宫，象限于己方半场，兵不得退回出发线之后，
    /// 其余棋子为全棋盘。
    pub fn zone(&self) -> Zone {
        match (self.piece_type, self.side) {
            (PieceType::King | PieceType::Advisor, Side::Red) => Zone {
                top: 2,
                bottom: 0,
                left: 3,
                right: 5,
            },
            (PieceType::King | PieceType::Advisor, Side::Black) => Zone {
                top: 9,
                bottom: 7,
                left: 3,
                right: 5,
            },
            (PieceType::Bishop, Side::Red) => Zone { top: 4, ..Zone::FULL },
            (PieceType::Bishop, Side::Black) => Zone {
                bottom: 5,
                ..Zone::FULL
            },
            (PieceType::Pawn, Side::Red) => Zone {
                bottom: 3,
                ..Zone::FULL
            },
            (PieceType::Pawn, Side::Black) => Zone { top: 6, ..Zone::FULL },
            _ => Zone::FULL,
        }
    }
}

/// 棋子的合法活动区域（矩形，边界含）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub top: u8,
    pub bottom: u8,
    pub left: u8,
    pub right: u8,
}

impl Zone {
    /// 整个棋盘
    pub const FULL: Zone = Zone {
        top: 9,
        bottom: 0,
        left: 0,
        right: 8,
    };

    /// 位置是否在区域内
    pub fn contains(&self, pos: Position) -> bool {
        (self.left..=self.right).contains(&pos.x) && (self.bottom..=self.top).contains(&pos.y)
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-8)
    pub x: u8,
    /// 行 (0-9)，0 为红方底线
    pub y: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_WIDTH && (y as usize) < BOARD_HEIGHT {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.x as usize) < BOARD_WIDTH && (self.y as usize) < BOARD_HEIGHT
    }

    /// 获取偏移后的位置，越界返回 None
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        let new_x = self.x as i8 + dx;
        let new_y = self.y as i8 + dy;
        if new_x >= 0
            && (new_x as usize) < BOARD_WIDTH
            && new_y >= 0
            && (new_y as usize) < BOARD_HEIGHT
        {
            Some(Position {
                x: new_x as u8,
                y: new_y as u8,
            })
        } else {
            None
        }
    }

    /// 转换为数组索引（y * 9 + x）
    pub fn to_index(&self) -> usize {
        self.y as usize * BOARD_WIDTH + self.x as usize
    }

    /// 转换为两字符坐标文本（列 a-i，行 0-9，如 a0、i9）
    pub fn to_coord(&self) -> String {
        format!("{}{}", (b'a' + self.x) as char, self.y)
    }

    /// 从两字符坐标文本解析
    pub fn from_coord(text: &str) -> Result<Position, ChessError> {
        let invalid = || ChessError::InvalidCoordinate {
            text: text.to_string(),
        };
        let mut chars = text.chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let x = col as i32 - 'a' as i32;
        let y = row.to_digit(10).ok_or_else(invalid)?;
        if !(0..BOARD_WIDTH as i32).contains(&x) {
            return Err(invalid());
        }
        Ok(Position {
            x: x as u8,
            y: y as u8,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
