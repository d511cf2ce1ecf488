use thiserror::Error;

/// Configuration errors surfaced to the immediate caller.
///
/// Numerical edge cases (e.g. a spring that never settles) are absorbed
/// internally and never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EasingError {
    #[error(
        "unknown easing function `{0}`, expected one of `spring`, `spring-in`, `spring-out`, \
         `spring-in-out`, `spring-out-in`, or a registered custom name"
    )]
    UnknownEasing(String),

    #[error("custom frame function `{0}` is not registered in the easing registry")]
    UnregisteredFrameFunction(String),

    #[error("malformed easing descriptor `{0}`, expected e.g. \"spring-out(1, 100, 10, 0)\"")]
    MalformedDescriptor(String),

    #[error("sampling a curve requires at least 2 points, got {0}")]
    InvalidSampleCount(usize),
}
