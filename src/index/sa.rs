use rayon::prelude::*;
use tracing::trace;

/// 序列长度达到该值时，倍增排序改用 rayon 并行排序。
pub const PAR_SORT_THRESHOLD: usize = 1 << 14;

/// 构建后缀数组（基于倍增法，O(n log n) 排序）。
/// 输入为数值化的扩展序列（终止符为 0，且只出现在末尾）。
///
/// 终止符唯一且最小，因此后缀的字典序与循环旋转的字典序一致，
/// 返回的就是旋转顺序：第 k 个元素是排第 k 的旋转的起始偏移。
pub fn build_sa(text: &[u32]) -> Vec<usize> {
    build_sa_with(text, PAR_SORT_THRESHOLD)
}

/// 同 [`build_sa`]，可指定并行排序阈值。
pub fn build_sa_with(text: &[u32], par_threshold: usize) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let parallel = n >= par_threshold;
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = text.iter().map(|&b| i64::from(b)).collect();
    let mut tmp: Vec<i64> = vec![0; n];

    let mut k = 1usize;
    let mut rounds = 0usize;
    while k < n {
        // 第 k 轮的排序键：(前 k 个符号的名次, 后 k 个符号的名次)，越界记为 -1
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] } else { -1 });
        if parallel {
            sa.par_sort_unstable_by_key(|&i| key(i));
        } else {
            sa.sort_unstable_by_key(|&i| key(i));
        }

        tmp[sa[0]] = 0;
        for i in 1..n {
            let a = sa[i - 1];
            let b = sa[i];
            tmp[b] = tmp[a] + i64::from(key(a) != key(b));
        }

        // 复制回 rank
        rank.copy_from_slice(&tmp);
        rounds += 1;
        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k <<= 1;
    }
    trace!(n, rounds, parallel, "suffix array built");

    sa
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 朴素方法：物化全部旋转后排序。
    fn naive_rotation_order(text: &[u32]) -> Vec<usize> {
        let n = text.len();
        let mut rotations: Vec<(usize, Vec<u32>)> = (0..n)
            .map(|i| {
                let rotation = text[i..].iter().chain(&text[..i]).copied().collect();
                (i, rotation)
            })
            .collect();
        rotations.sort_by(|a, b| a.1.cmp(&b.1));
        rotations.into_iter().map(|(i, _)| i).collect()
    }

    /// LCG 生成的随机文本，符号取自 1..=sigma，末尾追加终止符 0。
    fn make_text(len: usize, sigma: u32) -> Vec<u32> {
        let mut x: u32 = 1_234_567;
        let mut v = Vec::with_capacity(len + 1);
        for _ in 0..len {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            v.push((x >> 16) % sigma + 1);
        }
        v.push(0);
        v
    }

    #[test]
    fn sa_basic() {
        // 文本：A C G T $  -> 1 2 3 4 0
        let text = [1u32, 2, 3, 4, 0];
        let sa = build_sa(&text);
        // 期望：后缀按字典序：$, A$, C$, G$, T$
        assert_eq!(sa, vec![4, 0, 1, 2, 3]);
    }

    #[test]
    fn sa_googol() {
        // g o o g o l $ -> g=2 l=3 o=4
        let text = [2u32, 4, 4, 2, 4, 3, 0];
        assert_eq!(build_sa(&text), vec![6, 3, 0, 5, 2, 4, 1]);
    }

    #[test]
    fn sa_single_terminator() {
        assert_eq!(build_sa(&[0]), vec![0]);
        assert!(build_sa(&[]).is_empty());
    }

    #[test]
    fn sa_matches_rotation_sort_on_small_random_texts() {
        for len in 0..=40 {
            for sigma in [1, 2, 4, 20] {
                let text = make_text(len, sigma);
                assert_eq!(
                    build_sa(&text),
                    naive_rotation_order(&text),
                    "mismatch on len={} sigma={}",
                    len,
                    sigma
                );
            }
        }
    }

    #[test]
    fn sa_homopolymer() {
        // AAAA$：每轮都有大量并列，需要多轮倍增
        let text = [1u32, 1, 1, 1, 1, 1, 1, 1, 0];
        assert_eq!(build_sa(&text), vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let text = make_text(3_000, 4);
        assert_eq!(build_sa_with(&text, 1), build_sa_with(&text, usize::MAX));
    }
}
