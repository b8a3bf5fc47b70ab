//! Selection descriptors and list filter semantics.
//!
//! Pure functions only. Every `RemoteStore` implementation filters through
//! [`ListFilter::matches`] so the reference store and the real service agree.

use mvm_types::{MicroVm, MicroVmSpec};

use crate::domain::error::MissingScope;

/// What a single command invocation asked for.
///
/// Empty strings are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub uid: Option<String>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// Apply a destructive action to every match.
    pub all: bool,
}

impl Selection {
    #[must_use]
    pub fn new(
        uid: Option<String>,
        name: Option<String>,
        namespace: Option<String>,
        all: bool,
    ) -> Self {
        Self {
            uid: non_empty(uid),
            name: non_empty(name),
            namespace: non_empty(namespace),
            all,
        }
    }

    #[must_use]
    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self::new(Some(uid.into()), None, None, false)
    }

    #[must_use]
    pub fn by_name(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(None, Some(name.into()), Some(namespace.into()), false)
    }

    #[must_use]
    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    /// Replace identity fields with those from a spec file.
    ///
    /// A spec file is authoritative: its uid, name and namespace override
    /// whatever was passed on the command line, including unsetting them.
    ///
    /// # Errors
    ///
    /// Returns [`MissingScope::FileIdentity`] if the spec carries neither a
    /// uid nor both a name and a namespace.
    pub fn apply_spec(self, spec: &MicroVmSpec) -> Result<Self, MissingScope> {
        let uid = spec.uid.clone().filter(|u| !u.is_empty());
        if uid.is_none() && (spec.id.is_empty() || spec.namespace.is_empty()) {
            return Err(MissingScope::FileIdentity);
        }
        Ok(Self::new(
            uid,
            Some(spec.id.clone()),
            Some(spec.namespace.clone()),
            self.all,
        ))
    }

    /// Check that a non-uid destructive selection names both keys.
    ///
    /// `all` skips the check; the filter is then applied as given, so a name
    /// without a namespace selects every MicroVM (see [`ListFilter::matches`]).
    ///
    /// # Errors
    ///
    /// Returns the missing piece of scope.
    pub fn require_scope(&self) -> Result<(), MissingScope> {
        if self.uid.is_some() {
            return Ok(());
        }
        match (self.name.is_some(), self.namespace.is_some(), self.all) {
            (true, true, _) | (_, _, true) => Ok(()),
            (true, false, _) => Err(MissingScope::Namespace),
            (false, true, false) => Err(MissingScope::Name),
            (false, false, false) => Err(MissingScope::NameAndNamespace),
        }
    }

    #[must_use]
    pub fn filter(&self) -> ListFilter {
        ListFilter {
            name: self.name.clone().unwrap_or_default(),
            namespace: self.namespace.clone().unwrap_or_default(),
        }
    }

    /// `<namespace>/<name>` as shown to users.
    #[must_use]
    pub fn scope_label(&self) -> String {
        format!(
            "{}/{}",
            self.namespace.as_deref().unwrap_or_default(),
            self.name.as_deref().unwrap_or_default()
        )
    }
}

/// Name/namespace filter applied by `RemoteStore::list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub name: String,
    pub namespace: String,
}

impl ListFilter {
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Namespace is the scoping key: with no namespace everything matches and
    /// the name is ignored; with a namespace but no name, the whole namespace
    /// matches; with both, both must match exactly.
    #[must_use]
    pub fn matches(&self, vm: &MicroVm) -> bool {
        if self.namespace.is_empty() {
            return true;
        }
        vm.namespace() == self.namespace && (self.name.is_empty() || vm.name() == self.name)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
