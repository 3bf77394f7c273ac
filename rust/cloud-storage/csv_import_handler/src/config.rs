/// Table written to when `TABLE_NAME` is not set
pub const DEFAULT_TABLE_NAME: &str = "colors";
/// Region used when `AWS_REGION` is not set
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// The configuration parameters for the lambda.
///
/// These are pulled from environment variables once at cold start.
/// A `.env` file is loaded first when running locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The dynamodb table every row is written to
    pub table_name: String,

    /// The aws region of the bucket and the table
    pub aws_region: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let table_name = non_empty(&lookup, "TABLE_NAME")?
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        let aws_region = non_empty(&lookup, "AWS_REGION")?
            .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());

        Ok(Config {
            table_name,
            aws_region,
        })
    }
}

/// A set but blank variable is treated as a misconfiguration rather than falling back to the default
fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> anyhow::Result<Option<String>> {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => anyhow::bail!("{name} must not be blank"),
        value => Ok(value),
    }
}
