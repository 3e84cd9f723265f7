//! Unified error type for sudo-button.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Every runtime error is local: the caller logs it and carries on.

/// Top-level error type used across the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The event queue was full; the event was dropped.
    QueueFull,

    /// The HID interface is not configured by the host yet.
    NotReady,

    /// The transport refused a report.
    Submit(SubmitError),

    /// The host addressed a report type we do not handle.
    UnsupportedReport,
}

/// Reasons the HID endpoint can refuse a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubmitError {
    /// Report larger than the endpoint's max packet size.
    BufferOverflow,
    /// Endpoint is disabled (bus reset, unplugged or not configured).
    Disabled,
}

// Convenience conversions

impl From<SubmitError> for Error {
    fn from(e: SubmitError) -> Self {
        Error::Submit(e)
    }
}
