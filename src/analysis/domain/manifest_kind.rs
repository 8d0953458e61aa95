use std::fmt;

/// Manifest files the analysis understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    PackageJson,
    PomXml,
    GoMod,
    RequirementsTxt,
}

impl ManifestKind {
    /// All supported kinds, in handler registration order
    pub const ALL: [ManifestKind; 4] = [
        ManifestKind::PackageJson,
        ManifestKind::PomXml,
        ManifestKind::GoMod,
        ManifestKind::RequirementsTxt,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::PackageJson => "package.json",
            ManifestKind::PomXml => "pom.xml",
            ManifestKind::GoMod => "go.mod",
            ManifestKind::RequirementsTxt => "requirements.txt",
        }
    }

    /// Exact-basename pattern used to route documents to this kind
    pub fn pattern(&self) -> &'static str {
        match self {
            ManifestKind::PackageJson => r"^package\.json$",
            ManifestKind::PomXml => r"^pom\.xml$",
            ManifestKind::GoMod => r"^go\.mod$",
            ManifestKind::RequirementsTxt => r"^requirements\.txt$",
        }
    }

    /// File type passed to the scanning engine
    pub fn file_type(&self) -> &'static str {
        self.file_name()
    }

    pub fn ecosystem(&self) -> &'static str {
        match self {
            ManifestKind::PackageJson => "npm",
            ManifestKind::PomXml => "maven",
            ManifestKind::GoMod => "golang",
            ManifestKind::RequirementsTxt => "pypi",
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.file_name() == file_name)
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
