use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::codec::Bwt;

/// 归档格式版本，读取时不匹配即报错。
pub const ARCHIVE_VERSION: u32 = 1;

/// 变换来源信息，仅供追溯。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveMeta {
    pub source: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 一条变换结果及其终止符，bincode 序列化存盘。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BwtArchive {
    pub version: u32,
    pub terminator: char,
    pub transformed: String,
    pub meta: ArchiveMeta,
}

impl BwtArchive {
    pub fn new(terminator: char, transformed: String) -> Self {
        Self {
            version: ARCHIVE_VERSION,
            terminator,
            transformed,
            meta: ArchiveMeta::default(),
        }
    }

    pub fn set_meta(&mut self, meta: ArchiveMeta) {
        self.meta = meta;
    }

    /// 用归档中记录的终止符还原原序列。
    pub fn restore(&self) -> Result<String> {
        let codec = Bwt::with_terminator(self.terminator)?;
        Ok(codec.inverse_str(&self.transformed)?)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
        bincode::serialize_into(&mut f, self)?;
        f.flush()?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::io::BufReader::new(std::fs::File::open(path)?);
        let archive: Self = bincode::deserialize_from(f)?;
        ensure!(
            archive.version == ARCHIVE_VERSION,
            "unsupported archive version {} (expected {})",
            archive.version,
            ARCHIVE_VERSION
        );
        Ok(archive)
    }
}
