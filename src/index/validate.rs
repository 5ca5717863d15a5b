use crate::error::{BwtError, Result};

/// 正向变换的输入检查：序列中不得出现终止符。
pub fn validate_forward<S: PartialEq>(seq: &[S], terminator: &S) -> Result<()> {
    match seq.iter().position(|s| s == terminator) {
        Some(position) => Err(BwtError::TerminatorPresent { position }),
        None => Ok(()),
    }
}

/// 逆向变换的输入检查：终止符必须恰好出现一次。
/// 成功时返回终止符所在位置，LF 回溯从这里开始。
pub fn validate_inverse<S: PartialEq>(seq: &[S], terminator: &S) -> Result<usize> {
    let mut hits = seq
        .iter()
        .enumerate()
        .filter(|(_, s)| *s == terminator)
        .map(|(i, _)| i);

    let first = hits.next().ok_or(BwtError::TerminatorMissing)?;
    match hits.next() {
        None => Ok(first),
        Some(second) => Err(BwtError::TerminatorDuplicate {
            count: 2 + hits.count(),
            first,
            second,
        }),
    }
}
