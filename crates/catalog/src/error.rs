use {
    def::EntryKind,
    snafu::{prelude::*, Backtrace},
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(r#"catalog "{name}" does not exist"#))]
    CatalogNotFound { name: String, backtrace: Backtrace },

    #[snafu(display(r#"schema "{name}" does not exist"#))]
    SchemaNotFound { name: String, backtrace: Backtrace },

    #[snafu(display(r#"{kind} "{name}" does not exist"#))]
    EntryNotFound {
        kind: EntryKind,
        name: String,
        backtrace: Backtrace,
    },
}
