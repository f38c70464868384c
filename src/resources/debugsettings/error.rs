//! Error type for debug settings queries.

/// Errors raised while resolving debug display settings.
///
/// There is exactly one kind: a value that falls outside the documented set
/// of its enumeration. It is a contract violation, so callers must not paper
/// over it with a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DebugSettingsError {
    #[error("invalid state: {value} is not a valid {enumeration}")]
    InvalidState {
        /// Name of the enumeration the value was read as.
        enumeration: &'static str,
        /// The raw ordinal or bit pattern that was rejected.
        value: u64,
    },
}

impl DebugSettingsError {
    pub(crate) fn invalid(enumeration: &'static str, value: impl Into<u64>) -> Self {
        DebugSettingsError::InvalidState {
            enumeration,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_enumeration() {
        let err = DebugSettingsError::invalid("SceneOverrideMode", 9u32);
        let msg = err.to_string();
        assert!(msg.contains("SceneOverrideMode"));
        assert!(msg.contains('9'));
    }
}
