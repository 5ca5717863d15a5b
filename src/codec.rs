use crate::error::{BwtError, Result};
use crate::index::sa::PAR_SORT_THRESHOLD;
use crate::index::{bwt, inverse};
use crate::util::alphabet::{check_terminator, DEFAULT_TERMINATOR};

/// 运行参数（命令行解析后汇总于此）。
#[derive(Debug, Clone, Copy)]
pub struct BwtOpt {
    pub terminator: char,
    /// rayon 线程数，0 表示由 rayon 自行决定
    pub threads: usize,
    pub par_threshold: usize,
}

impl Default for BwtOpt {
    fn default() -> Self {
        Self {
            terminator: DEFAULT_TERMINATOR,
            threads: 0,
            par_threshold: PAR_SORT_THRESHOLD,
        }
    }
}

impl BwtOpt {
    pub fn codec(&self) -> Result<Bwt<char>> {
        let codec = Bwt::with_terminator(self.terminator)?;
        Ok(codec.with_par_threshold(self.par_threshold))
    }
}

/// BWT 编解码器，保存终止符与并行阈值；本身无状态，可在线程间共享。
///
/// 任意 `Copy + Ord` 的符号类型都可以使用，终止符总被视为最小符号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bwt<S> {
    terminator: S,
    par_threshold: usize,
}

impl<S: Copy + Ord> Bwt<S> {
    pub fn new(terminator: S) -> Self {
        Self {
            terminator,
            par_threshold: PAR_SORT_THRESHOLD,
        }
    }

    pub fn with_par_threshold(mut self, par_threshold: usize) -> Self {
        self.par_threshold = par_threshold;
        self
    }

    pub fn terminator(&self) -> S {
        self.terminator
    }

    /// 正向变换，输出长度为 `seq.len() + 1`。
    pub fn transform(&self, seq: &[S]) -> Result<Vec<S>> {
        bwt::forward(seq, self.terminator, self.par_threshold)
    }

    /// 逆变换，输出长度为 `seq.len() - 1`。
    pub fn inverse(&self, seq: &[S]) -> Result<Vec<S>> {
        inverse::inverse(seq, self.terminator)
    }
}

impl Bwt<char> {
    /// 文本编解码器，终止符须取自 [`ALLOWED_TERMINATORS`](crate::util::alphabet::ALLOWED_TERMINATORS)。
    pub fn with_terminator(terminator: char) -> Result<Self> {
        Ok(Self::new(check_terminator(terminator)?))
    }

    pub fn transform_str(&self, s: &str) -> Result<String> {
        let seq: Vec<char> = s.chars().collect();
        Ok(self.transform(&seq)?.into_iter().collect())
    }

    pub fn inverse_str(&self, s: &str) -> Result<String> {
        let seq: Vec<char> = s.chars().collect();
        Ok(self.inverse(&seq)?.into_iter().collect())
    }
}

impl Default for Bwt<char> {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATOR)
    }
}

impl Bwt<u8> {
    /// 字节编解码器（如 FASTA 序列），终止符规则同文本。
    pub fn for_bytes(terminator: u8) -> Result<Self> {
        if !terminator.is_ascii() {
            return Err(BwtError::TerminatorNotAllowed {
                found: char::from(terminator),
                allowed: crate::util::alphabet::ALLOWED_TERMINATORS,
            });
        }
        check_terminator(char::from(terminator))?;
        Ok(Self::new(terminator))
    }
}

/// 使用默认终止符 `$` 计算文本的 BWT。
///
/// ```
/// assert_eq!(bwt_rust::transform("googol").unwrap(), "lo$oogg");
/// ```
pub fn transform(s: &str) -> Result<String> {
    Bwt::default().transform_str(s)
}

/// 使用默认终止符 `$` 还原文本。
///
/// ```
/// assert_eq!(bwt_rust::inverse("lo$oogg").unwrap(), "googol");
/// ```
pub fn inverse(s: &str) -> Result<String> {
    Bwt::default().inverse_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_codec_roundtrip() {
        let t = transform("acctg").unwrap();
        assert_eq!(t, "g$actc");
        assert_eq!(inverse(&t).unwrap(), "acctg");
    }

    #[test]
    fn alternative_terminators() {
        let codec = Bwt::with_terminator('%').unwrap();
        assert_eq!(codec.transform_str("googol").unwrap(), "lo%oogg");
        assert_eq!(codec.inverse_str("lo%oogg").unwrap(), "googol");
        // '$' 对 '%' 编解码器只是普通符号
        let err = codec.inverse_str("oi$oac").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TerminatorMissing);
        let err = Bwt::with_terminator('+').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TerminatorNotAllowed);
    }

    #[test]
    fn byte_codec() {
        let codec = Bwt::for_bytes(b'#').unwrap();
        assert_eq!(codec.transform(b"ACGT").unwrap(), b"T#ACG");
        assert_eq!(codec.inverse(b"T#ACG").unwrap(), b"ACGT");
        assert!(Bwt::for_bytes(b'A').is_err());
        assert!(Bwt::for_bytes(0xC3).is_err());
    }

    #[test]
    fn generic_symbols() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        enum Residue {
            Stop,
            Ala,
            Cys,
            Gly,
        }
        use Residue::*;
        let codec = Bwt::new(Stop);
        let seq = [Gly, Ala, Cys, Ala];
        let t = codec.transform(&seq).unwrap();
        assert_eq!(t.len(), 5);
        assert_eq!(t.iter().filter(|&&r| r == Stop).count(), 1);
        assert_eq!(codec.inverse(&t).unwrap(), seq);
    }

    #[test]
    fn opt_builds_codec() {
        let opt = BwtOpt {
            terminator: '&',
            ..BwtOpt::default()
        };
        assert_eq!(opt.codec().unwrap().terminator(), '&');
        let bad = BwtOpt {
            terminator: 'x',
            ..BwtOpt::default()
        };
        assert!(bad.codec().is_err());
    }
}
