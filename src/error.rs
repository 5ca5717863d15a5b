use thiserror::Error;

/// 变换与逆变换的错误分类。
///
/// 每个变体对应一条被违反的输入约束，调用方可通过 [`BwtError::kind`] 区分，
/// 或通过 [`BwtError::code`] 取得稳定的数字错误码。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BwtError {
    /// 输入不是符号序列（只会在边界适配层出现，如 JSON / 原始字节）。
    #[error("the input is not a sequence of symbols (found {found})")]
    NotASequence { found: String },

    /// 正向输入中已经含有终止符。
    #[error("the input cannot contain the terminator symbol (found at position {position})")]
    TerminatorPresent { position: usize },

    /// 逆向输入中没有终止符。
    #[error("the input does not contain the terminator symbol; expected a transformed sequence")]
    TerminatorMissing,

    /// 逆向输入中终止符出现了不止一次。
    #[error(
        "the terminator symbol occurs {count} times (first at {first}, then at {second}); \
         it must occur exactly once"
    )]
    TerminatorDuplicate {
        count: usize,
        first: usize,
        second: usize,
    },

    /// 文本形式的终止符不是单个字符。
    #[error("the terminator must be exactly one character, got {found:?}")]
    TerminatorLength { found: String },

    /// 终止符不在允许的字符集中。
    #[error(
        "terminator {found:?} is not allowed; \
         allowed terminators are {allowed} ('$' by default)"
    )]
    TerminatorNotAllowed { found: char, allowed: &'static str },

    /// 恰有一个终止符，但 LF 映射不是单环，不可能是任何序列的变换结果。
    #[error(
        "the input is not a Burrows-Wheeler transform: \
         LF walk closed after {cycle_len} of {expected} positions"
    )]
    NotATransform { cycle_len: usize, expected: usize },
}

/// [`BwtError`] 的无字段判别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    TerminatorPresent,
    TerminatorMissing,
    TerminatorDuplicate,
    TerminatorLength,
    TerminatorNotAllowed,
    NotATransform,
}

impl BwtError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BwtError::NotASequence { .. } => ErrorKind::Type,
            BwtError::TerminatorPresent { .. } => ErrorKind::TerminatorPresent,
            BwtError::TerminatorMissing => ErrorKind::TerminatorMissing,
            BwtError::TerminatorDuplicate { .. } => ErrorKind::TerminatorDuplicate,
            BwtError::TerminatorLength { .. } => ErrorKind::TerminatorLength,
            BwtError::TerminatorNotAllowed { .. } => ErrorKind::TerminatorNotAllowed,
            BwtError::NotATransform { .. } => ErrorKind::NotATransform,
        }
    }

    /// 稳定的数字错误码，供命令行与脚本使用。
    /// 4 号保留未用（终止符不是字符），类型系统已保证不会出现。
    pub fn code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Type => 0,
            ErrorKind::TerminatorPresent => 1,
            ErrorKind::TerminatorMissing => 2,
            ErrorKind::TerminatorDuplicate => 3,
            ErrorKind::TerminatorLength => 5,
            ErrorKind::TerminatorNotAllowed => 6,
            ErrorKind::NotATransform => 7,
        }
    }
}

pub type Result<T> = std::result::Result<T, BwtError>;
