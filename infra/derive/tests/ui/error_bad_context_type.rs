use fmdash_derive::fmdash_error;

#[fmdash_error]
pub enum ExportError {
    #[error("Write failed: {source}")]
    Write {
        #[source]
        source: std::io::Error,
        context: Option<String>,
    },
}

fn main() {}
