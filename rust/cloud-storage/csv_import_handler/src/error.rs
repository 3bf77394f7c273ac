use thiserror::Error;

/// Boxed error returned by the object and record ports
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can stop an import. Rows written before the error stay written.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The s3 notification did not identify an object
    #[error("invalid s3 notification: {0}")]
    InvalidNotification(String),

    /// The object could not be read from the bucket
    #[error("could not fetch object {key} from bucket {bucket}: {source}")]
    Fetch {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    /// The object content is not utf-8
    #[error("object is not valid utf-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// A row could not be parsed, most commonly because its field count differs from the header
    #[error("malformed csv: {source}")]
    Parse {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// The header does not name one of the required columns
    #[error("header is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    /// A row does not carry one of the required fields.
    /// Rows are length checked against the header and the header is checked for the required
    /// columns before any write, so an import does not reach this. It guards direct row conversions.
    #[error("row on line {line} is missing required field `{field}`")]
    MissingField { line: u64, field: &'static str },

    /// The record store rejected the write
    #[error("could not write record {id} from line {line}: {source}")]
    Write {
        line: u64,
        id: String,
        #[source]
        source: BoxError,
    },
}

