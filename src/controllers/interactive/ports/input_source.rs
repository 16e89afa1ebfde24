use crate::core::viewport::commands::InputSnapshot;

/// Source of per-frame input: a quit flag plus the commands currently held.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}
