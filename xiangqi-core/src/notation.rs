//! 纵线表示法
//!
//! 中式走法记谱：棋子汉字 + 起点纵线 + 动作（平/進/退）+ 目标。
//! 红方纵线用汉字数字从右向左数（一至九），黑方用阿拉伯数字
//! 从左向右数（1 至 9）。

use crate::piece::{Piece, Position, Side};

const CHINESE_NUMBERS: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 走法记谱器
pub struct Notation;

impl Notation {
    /// 生成一步走法的纵线表示
    ///
    /// 横走记「平」加目标纵线；直走记「進/退」加步数；
    /// 斜走（马、士、象）记「進/退」加目标纵线。
    pub fn format(piece: Piece, from: Position, to: Position) -> String {
        let side = piece.side;
        let mut text = String::new();
        text.push(piece.display_char());
        text.push(column_char(from.x, side));

        if from.y == to.y {
            text.push('平');
            text.push(column_char(to.x, side));
        } else {
            let forward = match side {
                Side::Red => to.y > from.y,
                Side::Black => to.y < from.y,
            };
            text.push(if forward { '進' } else { '退' });
            if from.x == to.x {
                let steps = from.y.abs_diff(to.y);
                text.push(count_char(steps, side));
            } else {
                text.push(column_char(to.x, side));
            }
        }
        text
    }
}

/// 纵线编号：红方第 1 线在 x=8，黑方第 1 线在 x=0
fn column_char(x: u8, side: Side) -> char {
    match side {
        Side::Red => CHINESE_NUMBERS[(8 - x) as usize],
        Side::Black => (b'1' + x) as char,
    }
}

/// 步数：红方汉字，黑方阿拉伯数字
fn count_char(steps: u8, side: Side) -> char {
    match side {
        Side::Red => CHINESE_NUMBERS[(steps - 1) as usize],
        Side::Black => (b'0' + steps) as char,
    }
}
