pub mod fasta;
pub mod archive;
