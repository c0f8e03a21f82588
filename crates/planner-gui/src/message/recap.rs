//! Monthly recap messages.

/// Messages emitted by the recap page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecapMessage {
    /// Select the previous month.
    PreviousMonth,
    /// Select the next month.
    NextMonth,
}
