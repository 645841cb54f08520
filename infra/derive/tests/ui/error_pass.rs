use fmdash_derive::fmdash_error;
use std::borrow::Cow;

#[fmdash_error]
pub enum ExportError {
    #[error("Write failed{}: {source}", format_context(.context))]
    Write {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal export error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
