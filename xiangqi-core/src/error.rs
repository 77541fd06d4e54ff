//! 错误类型定义

use thiserror::Error;

/// 象棋规则错误
///
/// 所有错误都是可恢复的拒绝：失败的操作不会对棋盘做任何修改。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// 位置超出棋盘或该棋子的活动区域
    #[error("Invalid position: ({x}, {y})")]
    InvalidPosition { x: i8, y: i8 },

    /// 目标不在棋子当前的走法列表中
    #[error("Invalid move: from ({from_x}, {from_y}) to ({to_x}, {to_y})")]
    InvalidMove {
        from_x: u8,
        from_y: u8,
        to_x: u8,
        to_y: u8,
    },

    /// 不是该方的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 无效的 FEN 字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },

    /// 无效的坐标文本
    #[error("Invalid coordinate: {text}")]
    InvalidCoordinate { text: String },

    /// 没有可撤销的走法
    #[error("No move to undo")]
    EmptyHistory,
}

/// 核心操作结果类型
pub type Result<T> = std::result::Result<T, ChessError>;
