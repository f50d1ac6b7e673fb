//! @acp:module "Manifest"
//! @acp:summary "Built-in table of directories, file names and template bodies"
//! @acp:domain cli
//! @acp:layer model
//!
//! The manifest is fixed at compile time. Directory groups are written in
//! order, then [`ROOT_FILES`] land directly under the redux root.
//!
//! ```text
//! src/redux/
//!   base/            baseApi.ts, baseReducer.ts
//!   features/auth/   authSlice.ts, authApi.ts
//!   lib/             ReduxProvider.tsx
//!   store.ts
//!   hooks.ts
//! ```

pub mod templates;

use std::borrow::Cow;
use std::fmt;

/// Every template the scaffolder knows how to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFile {
    BaseApi,
    BaseReducer,
    AuthSlice,
    AuthApi,
    ReduxProvider,
    Store,
    Hooks,
}

impl TemplateFile {
    /// Get all built-in templates
    pub fn all() -> &'static [TemplateFile] {
        &[
            TemplateFile::BaseApi,
            TemplateFile::BaseReducer,
            TemplateFile::AuthSlice,
            TemplateFile::AuthApi,
            TemplateFile::ReduxProvider,
            TemplateFile::Store,
            TemplateFile::Hooks,
        ]
    }

    /// File name as written on disk
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateFile::BaseApi => "baseApi.ts",
            TemplateFile::BaseReducer => "baseReducer.ts",
            TemplateFile::AuthSlice => "authSlice.ts",
            TemplateFile::AuthApi => "authApi.ts",
            TemplateFile::ReduxProvider => "ReduxProvider.tsx",
            TemplateFile::Store => "store.ts",
            TemplateFile::Hooks => "hooks.ts",
        }
    }

    /// Static body written for this template
    pub fn content(&self) -> &'static str {
        match self {
            TemplateFile::BaseApi => templates::BASE_API,
            TemplateFile::BaseReducer => templates::BASE_REDUCER,
            TemplateFile::AuthSlice => templates::AUTH_SLICE,
            TemplateFile::AuthApi => templates::AUTH_API,
            TemplateFile::ReduxProvider => templates::REDUX_PROVIDER,
            TemplateFile::Store => templates::STORE,
            TemplateFile::Hooks => templates::HOOKS,
        }
    }

    /// Look up a template by its exact file name (case-sensitive)
    pub fn from_name(name: &str) -> Option<TemplateFile> {
        TemplateFile::all()
            .iter()
            .copied()
            .find(|template| template.file_name() == name)
    }
}

impl fmt::Display for TemplateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// One directory under the redux root and the files written into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestGroup {
    /// Relative to the redux root, `/`-separated
    pub directory: &'static str,
    pub files: &'static [&'static str],
}

/// Directory groups, in write order
pub const MANIFEST: &[ManifestGroup] = &[
    ManifestGroup {
        directory: "base",
        files: &["baseApi.ts", "baseReducer.ts"],
    },
    ManifestGroup {
        directory: "features/auth",
        files: &["authSlice.ts", "authApi.ts"],
    },
    ManifestGroup {
        directory: "lib",
        files: &["ReduxProvider.tsx"],
    },
];

/// Files written directly under the redux root once all groups are done
pub const ROOT_FILES: &[TemplateFile] = &[TemplateFile::Store, TemplateFile::Hooks];

/// Resolve the body for a file name, falling back to a placeholder comment
pub fn content_for(file_name: &str) -> Cow<'static, str> {
    match TemplateFile::from_name(file_name) {
        Some(template) => Cow::Borrowed(template.content()),
        None => Cow::Owned(format!("/* Content for {} */", file_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_file_names() {
        assert_eq!(TemplateFile::BaseApi.file_name(), "baseApi.ts");
        assert_eq!(TemplateFile::ReduxProvider.file_name(), "ReduxProvider.tsx");
        assert_eq!(TemplateFile::Hooks.to_string(), "hooks.ts");
    }

    #[test]
    fn test_template_from_name() {
        assert_eq!(
            TemplateFile::from_name("authSlice.ts"),
            Some(TemplateFile::AuthSlice)
        );
        assert_eq!(TemplateFile::from_name("AuthSlice.ts"), None);
        assert_eq!(TemplateFile::from_name("unknown.ts"), None);
    }

    #[test]
    fn test_every_manifest_file_has_a_template() {
        for group in MANIFEST {
            for name in group.files {
                assert!(
                    TemplateFile::from_name(name).is_some(),
                    "{} in {} has no template",
                    name,
                    group.directory
                );
            }
        }
    }

    #[test]
    fn test_each_template_used_exactly_once() {
        let mut used: Vec<&str> = MANIFEST
            .iter()
            .flat_map(|group| group.files.iter().copied())
            .chain(ROOT_FILES.iter().map(|t| t.file_name()))
            .collect();
        used.sort_unstable();

        let mut known: Vec<&str> = TemplateFile::all().iter().map(|t| t.file_name()).collect();
        known.sort_unstable();

        assert_eq!(used, known);
    }

    #[test]
    fn test_content_for_unknown_name_is_placeholder() {
        assert_eq!(content_for("selectors.ts"), "/* Content for selectors.ts */");
    }

    #[test]
    fn test_content_for_known_name_borrows_template() {
        let content = content_for("store.ts");
        assert!(matches!(content, Cow::Borrowed(_)));
        assert!(content.contains("configureStore"));
        assert!(content.contains("export const persistor = persistStore(store);"));
    }

    #[test]
    fn test_templates_keep_leading_newline() {
        for template in TemplateFile::all() {
            assert!(
                template.content().starts_with('\n'),
                "{} lost its leading newline",
                template
            );
        }
        assert!(templates::BASE_API.starts_with("\nimport { createApi, fetchBaseQuery }"));
    }

    #[test]
    fn test_template_interpolation_markers_are_literal() {
        assert!(templates::BASE_API.contains("`Bearer ${token}`"));
        assert!(templates::AUTH_API.contains("localStorage.getItem(\"oneTimeToken\")"));
    }
}
