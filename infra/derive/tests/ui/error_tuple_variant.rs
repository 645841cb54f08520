use fmdash_derive::fmdash_error;

#[fmdash_error]
pub enum ExportError {
    #[error("Write failed: {0}")]
    Write(std::io::Error),
}

fn main() {}
