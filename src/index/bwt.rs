use tracing::debug;

use crate::error::Result;
use crate::index::{sa, validate};
use crate::util::alphabet::Alphabet;

/// 根据旋转顺序（后缀数组）构建 BWT：取每个旋转起点的前一个符号（循环）。
pub fn build_bwt<S: Copy>(text: &[S], sa: &[usize]) -> Vec<S> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut bwt = Vec::with_capacity(n);
    for &p in sa {
        let prev = if p == 0 { text[n - 1] } else { text[p - 1] };
        bwt.push(prev);
    }
    bwt
}

/// 正向变换：校验 -> 追加终止符 -> 数值化 -> 后缀排序 -> 取最后一列。
///
/// 结果长度为 `seq.len() + 1`，终止符恰好出现一次。
pub fn forward<S: Copy + Ord>(seq: &[S], terminator: S, par_threshold: usize) -> Result<Vec<S>> {
    validate::validate_forward(seq, &terminator)?;

    let mut text = Vec::with_capacity(seq.len() + 1);
    text.extend_from_slice(seq);
    text.push(terminator);

    let alphabet = Alphabet::from_seq(&text, terminator);
    let ranks = alphabet.encode(&text);
    debug!(
        len = seq.len(),
        sigma = alphabet.sigma(),
        "forward transform"
    );

    let order = sa::build_sa_with(&ranks, par_threshold);
    Ok(build_bwt(&text, &order))
}
