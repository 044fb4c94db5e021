use std::borrow::Cow;

/// Credential carried in the access header.
///
/// Opaque at this layer: the only supported operation is exact,
/// case-sensitive equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(Cow<'static, str>);

impl Credential {
    /// The single credential that is granted access.
    pub const SUPERUSER: &'static str = "superuser";

    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    pub fn superuser() -> Self {
        Self::new(Self::SUPERUSER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact byte comparison; no trimming or case folding.
    pub fn matches(&self, presented: &str) -> bool {
        self.as_str() == presented
    }
}

// Redacted so credentials never end up in logs via `{:?}`.
impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exactly() {
        let c = Credential::superuser();
        assert!(c.matches("superuser"));
        assert!(!c.matches("Superuser"));
        assert!(!c.matches("superuser "));
        assert!(!c.matches(" superuser"));
        assert!(!c.matches(""));
    }

    #[test]
    fn debug_is_redacted() {
        assert_eq!(format!("{:?}", Credential::superuser()), "Credential(<redacted>)");
    }
}
