/// Default limit on nested user function calls. It fits the stack that
/// [`crate::run_with_config`] runs programs on.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

/// Interpreter settings.
///
/// # Example
/// ```
/// use pylite::config::{Config, DEFAULT_MAX_CALL_DEPTH};
///
/// let config = Config::default();
/// assert_eq!(config.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
///
/// let shallow = Config::default().with_max_call_depth(16);
/// assert_eq!(shallow.max_call_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Calls nested deeper than this fail with a recursion error instead of
    /// exhausting the host stack. Raising it also needs a larger stack than
    /// [`crate::STACK_SIZE`].
    pub max_call_depth: usize,
}

impl Config {
    /// Returns the configuration with a different call depth limit.
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}
