use std::fmt::Display;

/// Debug logger handed to components that need it.
///
/// Messages go to stderr with a `[DEBUG]` prefix, and only when enabled;
/// enablement comes from the CLI (`--debug` or the `DEBUG` environment
/// variable) rather than being looked up ambiently at each call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugLog {
    enabled: bool,
}

impl DebugLog {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn emit(&self, message: impl Display) {
        if self.enabled {
            eprintln!("[DEBUG] {message}");
        }
    }
}
