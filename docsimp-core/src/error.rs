use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SimplifyError {
    #[snafu(display(
        "Child annotation `{}` referenced by `{}` does not exist on the page",
        child_id,
        parent_id
    ))]
    DataIntegrity { child_id: String, parent_id: String },
    #[snafu(display("Annotation `{}` is missing required field `{}`", annotation_id, field))]
    MalformedInput {
        annotation_id: String,
        field: String,
    },
    #[snafu(display("Read `{}` error: {}", path, source))]
    IoRead {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Write `{}` error: {}", path, source))]
    IoWrite {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Parse JSON from `{}` error: {}", path, source))]
    JsonRead {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Serialize JSON for `{}` error: {}", path, source))]
    JsonWrite {
        source: serde_json::Error,
        path: String,
    },
}
