//! Why a resume can fail.

/// A [`.resume()`][`crate::Generator::resume`] that could not run.
///
/// Both variants are caller bugs rather than transient conditions: nothing is
/// ever retried, and [drivers][`crate::driver::Driver`] abort on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::thiserror::Error)]
pub
enum ResumeError {
    /// The generator already ran to completion.
    ///
    /// Reported on every resume after the one which returned
    /// [`Finished`][`crate::YieldOutcome::Finished`]; the body is never
    /// re-run and no stale value is handed out.
    #[error("generator resumed after completion")]
    IllegalResume,

    /// The body panicked during a previous resume, so its locals may be
    /// half-updated.
    #[error("generator resumed after panicking")]
    Poisoned,
}

/// `Result` defaulting to [`ResumeError`].
pub
type Result<T, E = ResumeError> = ::core::result::Result<T, E>;
