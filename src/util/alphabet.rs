use std::collections::BTreeSet;

use crate::error::{BwtError, Result};

/// 默认终止符。
pub const DEFAULT_TERMINATOR: char = '$';

/// 文本输入允许使用的终止符字符。
pub const ALLOWED_TERMINATORS: &str = "$&*-%#";

/// 终止符在数值化字母表中的编号，严格小于其他任何符号。
pub const SENTINEL: u32 = 0;

/// 校验单个字符能否作为文本终止符。
pub fn check_terminator(c: char) -> Result<char> {
    if ALLOWED_TERMINATORS.contains(c) {
        Ok(c)
    } else {
        Err(BwtError::TerminatorNotAllowed {
            found: c,
            allowed: ALLOWED_TERMINATORS,
        })
    }
}

/// 从命令行等文本来源解析终止符：必须恰好一个字符，且位于允许集合中。
pub fn parse_terminator(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => check_terminator(c),
        _ => Err(BwtError::TerminatorLength {
            found: s.to_string(),
        }),
    }
}

/// 稠密有序字母表：终止符固定编号 0，其余符号按 `Ord` 顺序从 1 开始编号。
///
/// 字母表的顺序完全由符号类型的 `Ord` 决定，终止符的字面值不参与比较，
/// 因此无论选用哪个字符作终止符，它都是最小的。
#[derive(Debug, Clone)]
pub struct Alphabet<S> {
    terminator: S,
    symbols: Vec<S>,
}

impl<S: Copy + Ord> Alphabet<S> {
    /// 收集 `seq` 中出现的非终止符符号，O(n log sigma)。
    pub fn from_seq(seq: &[S], terminator: S) -> Self {
        let distinct: BTreeSet<S> = seq.iter().copied().filter(|&s| s != terminator).collect();
        Self {
            terminator,
            symbols: distinct.into_iter().collect(),
        }
    }

    /// 字母表大小（含终止符）。
    #[inline]
    pub fn sigma(&self) -> usize {
        self.symbols.len() + 1
    }

    #[inline]
    pub fn to_rank(&self, s: S) -> u32 {
        if s == self.terminator {
            return SENTINEL;
        }
        match self.symbols.binary_search(&s) {
            Ok(i) | Err(i) => i as u32 + 1,
        }
    }

    pub fn encode(&self, seq: &[S]) -> Vec<u32> {
        seq.iter().map(|&s| self.to_rank(s)).collect()
    }
}
