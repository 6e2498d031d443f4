use std::collections::BTreeSet;

///
/// Caller
///
/// An already-authenticated principal as handed over by the host.
/// Permission codenames are stored fully qualified (`app.codename`).
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Caller {
    pub id: Option<u64>,
    pub is_authenticated: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub permissions: BTreeSet<String>,
}

impl Caller {
    /// An unauthenticated caller.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user(id: u64) -> Self {
        Self {
            id: Some(id),
            is_authenticated: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn staff(id: u64) -> Self {
        Self {
            is_staff: true,
            ..Self::user(id)
        }
    }

    #[must_use]
    pub fn superuser(id: u64) -> Self {
        Self {
            is_superuser: true,
            ..Self::user(id)
        }
    }

    #[must_use]
    pub fn with_permission(mut self, codename: impl Into<String>) -> Self {
        self.permissions.insert(codename.into());
        self
    }

    /// Staff or superuser.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }

    #[must_use]
    pub fn has_perm(&self, codename: &str) -> bool {
        self.is_superuser || self.permissions.contains(codename)
    }
}
