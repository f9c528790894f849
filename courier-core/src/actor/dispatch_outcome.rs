/// Result of routing one envelope through a receiver registry.
///
/// Failures are data at this boundary: a handler error or panic becomes
/// `HandlerFailed` and never propagates to the caller of `receive_message`.
#[derive(Debug)]
pub enum DispatchOutcome {
    Handled,
    HandledByFallback,
    Unhandled,
    HandlerFailed {
        message: &'static str,
        actor: &'static str,
        error: anyhow::Error,
    },
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled | Self::HandledByFallback)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::HandlerFailed { .. })
    }
}
