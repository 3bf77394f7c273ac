#![deny(missing_docs)]
//! Standardized process start up for the import lambda.
//! Loads a local `.env`, installs the panic hook and configures tracing for the current [Environment].

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::{Environment, UnknownEnvironment};

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct ImportEntrypoint {
    env: Environment,
}

impl Default for ImportEntrypoint {
    fn default() -> Self {
        ImportEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [ImportEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(Environment);

impl InitializedEntrypoint {
    /// the environment the process was initialized for
    pub fn environment(&self) -> Environment {
        self.0
    }
}

impl ImportEntrypoint {
    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                // lambda already timestamps every log line
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .without_time()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(self.env)
    }
}
