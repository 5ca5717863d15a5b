use tracing::debug;

use crate::error::{BwtError, Result};
use crate::index::lf::LfMap;
use crate::index::validate;
use crate::util::alphabet::Alphabet;

/// 逆变换：校验 -> 数值化 -> 构建 LF 映射 -> 从终止符位置回溯。
pub fn inverse<S: Copy + Ord>(bwt: &[S], terminator: S) -> Result<Vec<S>> {
    let start = validate::validate_inverse(bwt, &terminator)?;

    let alphabet = Alphabet::from_seq(bwt, terminator);
    let ranks = alphabet.encode(bwt);
    let lf = LfMap::build(&ranks, alphabet.sigma());
    debug!(
        len = bwt.len(),
        sigma = alphabet.sigma(),
        "inverse transform"
    );

    walk(bwt, &lf, start)
}

/// 沿 LF 映射走 `n = bwt.len() - 1` 步。
///
/// 终止符所在行就是原序列本身，`L[T[i]]` 是 `L[i]` 在原序列中的前一个符号，
/// 因此每一步得到的是原序列从后往前的下一个符号，最后整体反转。
/// 若提前回到起点，说明 LF 不是单环，输入不是任何序列的变换结果。
pub fn walk<S: Copy>(bwt: &[S], lf: &LfMap, start: usize) -> Result<Vec<S>> {
    let n = bwt.len().saturating_sub(1);
    let mut out = Vec::with_capacity(n);
    let mut i = start;
    for step in 0..n {
        i = lf.lf(i);
        if i == start {
            return Err(BwtError::NotATransform {
                cycle_len: step + 1,
                expected: n + 1,
            });
        }
        out.push(bwt[i]);
    }
    debug_assert!(
        bwt.is_empty() || lf.lf(i) == start,
        "LF walk did not close after {} steps",
        n
    );
    out.reverse();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn inv(s: &str) -> Result<String> {
        let seq: Vec<char> = s.chars().collect();
        inverse(&seq, '$').map(|v| v.into_iter().collect())
    }

    #[test]
    fn known_inverses() {
        assert_eq!(inv("lo$oogg").unwrap(), "googol");
        assert_eq!(inv("g$actc").unwrap(), "acctg");
        assert_eq!(inv("oi$ca").unwrap(), "ciao");
        assert_eq!(inv("np$ointoi").unwrap(), "itopinon");
        assert_eq!(inv("annb$aa").unwrap(), "banana");
    }

    #[test]
    fn terminator_alone_is_empty() {
        assert_eq!(inv("$").unwrap(), "");
    }

    #[test]
    fn validation_failures() {
        let err = inv("googol").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TerminatorMissing);
        let err = inv("lo$oogg$").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TerminatorDuplicate);
        assert_eq!(inv("").unwrap_err().kind(), ErrorKind::TerminatorMissing);
    }

    #[test]
    fn rejects_strings_that_are_not_transforms() {
        let expected = BwtError::NotATransform {
            cycle_len: 2,
            expected: 3,
        };
        assert_eq!(inv("ba$").unwrap_err(), expected);
        assert_eq!(inv("a$a").unwrap_err().kind(), ErrorKind::NotATransform);
    }

    #[test]
    fn walk_on_prebuilt_map() {
        // lo$oogg，编号：$=0 g=1 l=2 o=3
        let lf = LfMap::build(&[2, 3, 0, 3, 3, 1, 1], 4);
        let out = walk(&b"lo$oogg"[..], &lf, 2).unwrap();
        assert_eq!(out, b"googol");
    }

    #[test]
    fn inverse_on_bytes() {
        assert_eq!(inverse(&b"g$actc"[..], b'$').unwrap(), b"acctg");
    }
}
