use crate::consts::{MAX_MONTH, PASARAN_CYCLE, WUKU_CYCLE};

/// Error type for validated construction and name parsing.
///
/// Date conversion itself never fails; these only arise when a caller builds
/// a calendar value from a raw index or a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Pasaran index outside the five-day cycle.
    #[error("Invalid pasaran index: {0} (must be 0-{max})", max = PASARAN_CYCLE - 1)]
    InvalidPasaran(u8),

    /// Wuku index outside the thirty-week cycle.
    #[error("Invalid wuku index: {0} (must be 0-{max})", max = WUKU_CYCLE - 1)]
    InvalidWuku(u8),

    /// Name not present in the corresponding table.
    #[error("Unknown {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}
