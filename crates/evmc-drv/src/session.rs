use crate::config::{CompileOutput, Config};
use crate::error::Result;

/// Holds the configuration for one compiler invocation and runs it.
///
/// Deliberately thin: no source map, no diagnostic accumulator, no
/// interner, no incremental cache. Those belong to a multi-file pipeline
/// with recoverable-parse diagnostics, which this one isn't — every
/// stage here fails fast on its first error instead.
pub struct Session {
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session { config }
    }

    pub fn compile(&self, source: &str) -> Result<CompileOutput> {
        crate::compile(source, &self.config)
    }
}
