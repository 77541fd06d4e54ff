//! 核心常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 9;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 10;

/// 棋盘格子总数
pub const BOARD_SQUARES: usize = BOARD_WIDTH * BOARD_HEIGHT;
