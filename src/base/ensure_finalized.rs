use crate::StrError;

/// Holds the two states of a parameter object that must be finalized before use
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EnsureFinalized {
    /// The samples may still be modified; accessors are not allowed
    #[default]
    Unfinalized,

    /// The samples have been normalized; accessors are allowed
    Finalized,
}

impl EnsureFinalized {
    /// Allocates a new (unfinalized) instance
    pub fn new() -> Self {
        EnsureFinalized::Unfinalized
    }

    /// Marks the object as finalized
    pub fn finalize(&mut self) {
        *self = EnsureFinalized::Finalized;
    }

    /// Goes back to the unfinalized state (e.g., after the samples have been replaced)
    pub fn reset(&mut self) {
        *self = EnsureFinalized::Unfinalized;
    }

    /// Indicates whether finalize has been called or not
    pub fn is_finalized(&self) -> bool {
        *self == EnsureFinalized::Finalized
    }

    /// Returns an error if finalize has not been called yet
    pub fn check(&self) -> Result<(), StrError> {
        match self {
            EnsureFinalized::Finalized => Ok(()),
            EnsureFinalized::Unfinalized => Err("finalize must be called before accessing the samples"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::EnsureFinalized;

    #[test]
    fn derive_works() {
        let latch = EnsureFinalized::new();
        let clone = latch.clone();
        assert_eq!(format!("{:?}", clone), "Unfinalized");
        assert_eq!(EnsureFinalized::default(), EnsureFinalized::Unfinalized);
    }

    #[test]
    fn check_captures_errors() {
        let latch = EnsureFinalized::new();
        assert_eq!(
            latch.check().err(),
            Some("finalize must be called before accessing the samples")
        );
    }

    #[test]
    fn finalize_and_reset_work() {
        let mut latch = EnsureFinalized::new();
        assert!(!latch.is_finalized());
        latch.finalize();
        assert!(latch.is_finalized());
        assert_eq!(latch.check(), Ok(()));
        latch.finalize();
        assert!(latch.is_finalized());
        latch.reset();
        assert!(!latch.is_finalized());
        assert!(latch.check().is_err());
    }
}
