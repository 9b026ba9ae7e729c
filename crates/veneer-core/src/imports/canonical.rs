//! The canonical API surface of the styling library.

use serde::{Serialize, Serializer};

/// Canonical API members of the styling library.
///
/// Every local alias a module binds resolves to exactly one of these,
/// regardless of how the import was spelled. The set is closed: the library
/// may export more members, but only these participate in later transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalApi {
    /// A binding to the whole library: default import, namespace import, or
    /// `const lib = require(...)`. Distinct from every named member.
    WholeLibrary,
    Create,
    Props,
    Keyframes,
    Include,
    FirstThatWorks,
    DefineVars,
    CreateTheme,
    Types,
}

impl CanonicalApi {
    /// Every canonical member, including the whole-library slot.
    pub const ALL: [CanonicalApi; 9] = [
        CanonicalApi::WholeLibrary,
        CanonicalApi::Create,
        CanonicalApi::Props,
        CanonicalApi::Keyframes,
        CanonicalApi::Include,
        CanonicalApi::FirstThatWorks,
        CanonicalApi::DefineVars,
        CanonicalApi::CreateTheme,
        CanonicalApi::Types,
    ];

    /// Resolve an imported member name to its canonical member.
    ///
    /// This is the single mapping consulted for identifier-form imported
    /// names, string-literal-form imported names, and require-destructuring
    /// keys; the three paths cannot disagree. `WholeLibrary` has no member
    /// name and never matches here. Unknown names return `None`; the
    /// library may export members this pass does not track.
    #[must_use]
    pub fn from_member_name(name: &str) -> Option<Self> {
        match name {
            "create" => Some(Self::Create),
            "props" => Some(Self::Props),
            "keyframes" => Some(Self::Keyframes),
            "include" => Some(Self::Include),
            "firstThatWorks" => Some(Self::FirstThatWorks),
            "defineVars" => Some(Self::DefineVars),
            "createTheme" => Some(Self::CreateTheme),
            "types" => Some(Self::Types),
            _ => None,
        }
    }

    /// Stable name for logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WholeLibrary => "whole-library",
            Self::Create => "create",
            Self::Props => "props",
            Self::Keyframes => "keyframes",
            Self::Include => "include",
            Self::FirstThatWorks => "firstThatWorks",
            Self::DefineVars => "defineVars",
            Self::CreateTheme => "createTheme",
            Self::Types => "types",
        }
    }
}

impl Serialize for CanonicalApi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
