use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// 写出时的默认行宽。
pub const LINE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

impl FastaRecord {
    /// 不含 '>' 的标题行。
    pub fn header(&self) -> String {
        match &self.desc {
            Some(d) => format!("{} {}", self.id, d),
            None => self.id.clone(),
        }
    }

    /// 同一标题、替换序列。
    pub fn with_seq(&self, seq: Vec<u8>) -> Self {
        Self {
            id: self.id.clone(),
            desc: self.desc.clone(),
            seq,
        }
    }
}

/// 逐条读取 FASTA。
///
/// 序列字节原样保留（不转大写、不替换未知碱基），只去掉行内空白：
/// BWT 对大小写敏感，终止符等标点也必须如实传给校验器。
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        let header = match self.peek_header.take() {
            Some(h) => h,
            None => loop {
                self.buf.clear();
                if self.reader.read_line(&mut self.buf)? == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if let Some(h) = self.buf.strip_prefix('>') {
                    break h.trim().to_string();
                }
                if !self.buf.trim().is_empty() {
                    bail!(
                        "sequence data before the first FASTA header: {:?}",
                        self.buf.trim()
                    );
                }
            },
        };

        let (id, desc) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => {
                let rest = rest.trim();
                (id.to_string(), (!rest.is_empty()).then(|| rest.to_string()))
            }
            None => (header.clone(), None),
        };

        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                self.done = true;
                break;
            }
            if let Some(h) = self.buf.strip_prefix('>') {
                self.peek_header = Some(h.trim().to_string());
                break;
            }
            seq.extend(self.buf.bytes().filter(|b| !b.is_ascii_whitespace()));
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }

    pub fn records(mut self) -> Result<Vec<FastaRecord>> {
        let mut out = Vec::new();
        while let Some(rec) = self.next_record()? {
            out.push(rec);
        }
        Ok(out)
    }
}

/// 按固定行宽写出一条记录；`width == 0` 表示不折行。
pub fn write_record<W: Write>(w: &mut W, rec: &FastaRecord, width: usize) -> Result<()> {
    writeln!(w, ">{}", rec.header())?;
    if rec.seq.is_empty() {
        writeln!(w)?;
        return Ok(());
    }
    let width = if width == 0 { rec.seq.len() } else { width };
    for line in rec.seq.chunks(width) {
        w.write_all(line)?;
        writeln!(w)?;
    }
    Ok(())
}
