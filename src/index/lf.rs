/// LF 映射：把 BWT（最后一列 L）中的每个位置映射到同一次出现在首列 F 中的位置。
///
/// - `c[a]`：L 中编号小于 `a` 的符号总数（终止符编号为 0）。
/// - `p[i]`：`L[i]` 在前缀 `L[0..i)` 中的出现次数。
/// - `t[i] = c[L[i]] + p[i]`。
///
/// 与 FM 索引不同，这里不做 Occ 分块采样：逆变换只顺序走一遍，保存完整的 `p` 即可。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfMap {
    pub c: Vec<usize>,
    pub p: Vec<usize>,
    pub t: Vec<usize>,
}

impl LfMap {
    /// 单次扫描同时得到频次与 `p`，再由频次前缀和得到 `c`。
    /// `bwt` 为数值化字母表（0..sigma）。
    pub fn build(bwt: &[u32], sigma: usize) -> Self {
        let n = bwt.len();
        let mut running = vec![0usize; sigma];
        let mut p = Vec::with_capacity(n);
        for &ch in bwt {
            let ci = ch as usize;
            p.push(running[ci]);
            running[ci] += 1;
        }

        // 计算 C 表：扫描结束后 running 即为各符号频次
        let mut c = vec![0usize; sigma];
        let mut acc = 0usize;
        for (a, &freq) in running.iter().enumerate() {
            c[a] = acc;
            acc += freq;
        }

        let t = bwt
            .iter()
            .zip(&p)
            .map(|(&ch, &rank)| c[ch as usize] + rank)
            .collect();
        Self { c, p, t }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    #[inline]
    pub fn lf(&self, i: usize) -> usize {
        self.t[i]
    }

    /// 从 `start` 出发沿 LF 走到回到 `start` 为止，返回环长。
    /// 对合法的 BWT，从任何位置出发环长都等于 `len()`。
    pub fn cycle_len(&self, start: usize) -> usize {
        let mut i = self.lf(start);
        let mut steps = 1;
        while i != start {
            i = self.lf(i);
            steps += 1;
        }
        steps
    }
}
