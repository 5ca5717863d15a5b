//! 演示如何在 library 模式下使用 bwt-rust。
//!
//! 运行方式：
//! ```bash
//! cargo run --example roundtrip
//! ```

use bwt_rust::index::lf::LfMap;
use bwt_rust::util::alphabet::Alphabet;
use bwt_rust::{Bwt, ALLOWED_TERMINATORS};

fn main() -> bwt_rust::Result<()> {
    // 1. 文本，默认终止符 '$'
    let text = "googol";
    let coded = bwt_rust::transform(text)?;
    println!("BWT({}) = {}", text, coded);
    println!("逆变换    = {}", bwt_rust::inverse(&coded)?);

    // 2. 核酸序列，自定义终止符
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    let codec = Bwt::for_bytes(b'#')?;
    let bwt = codec.transform(reference)?;
    println!("\n参考长度: {} bp", reference.len());
    println!("BWT:      {}", String::from_utf8_lossy(&bwt));
    assert_eq!(codec.inverse(&bwt)?, reference);

    // 3. LF 映射：从终止符出发是一个覆盖全部位置的单环
    let alphabet = Alphabet::from_seq(&bwt, b'#');
    let lf = LfMap::build(&alphabet.encode(&bwt), alphabet.sigma());
    let start = bwt.iter().position(|&b| b == b'#').unwrap_or(0);
    println!("C 表:     {:?}", lf.c);
    println!("LF 环长:  {} / {}", lf.cycle_len(start), lf.len());

    // 4. 校验错误
    for bad in ["lo$oogg$", "googol"] {
        if let Err(e) = bwt_rust::inverse(bad) {
            println!(
                "\ninverse({:?}) -> {:?} (code {}): {}",
                bad,
                e.kind(),
                e.code(),
                e
            );
        }
    }
    println!("可用终止符: {}", ALLOWED_TERMINATORS);

    println!("\n完成！");
    Ok(())
}
