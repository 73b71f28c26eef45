//! Standardized initialization for binary crates so tracing behaves the same
//! way everywhere.

use tracing_subscriber::EnvFilter;

/// Which deployment environment this binary is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    /// Reads ENVIRONMENT, defaulting to production when it is missing or
    /// unrecognized.
    pub fn new_or_prod() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("local") => Environment::Local,
            Ok("dev") | Ok("develop") => Environment::Develop,
            _ => Environment::Production,
        }
    }
}

/// Unit struct which defines the behaviour for instantiation.
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        // dotenv has to run before we read ENVIRONMENT
        dotenv::dotenv().ok();
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// Sentinel struct which guarantees that we called [Entrypoint::init].
#[derive(Debug)]
pub struct InitializedEntrypoint {
    pub env: Environment,
}

impl Entrypoint {
    /// Consume self, initialize this binary, and return a proof that it was
    /// initialized.
    pub fn init(self) -> InitializedEntrypoint {
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
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint { env: self.env }
    }
}
