//! Bundle kind definitions.

use std::fmt;

use serde::Serialize;

/// Kind of bundle, deciding how members are joined and served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    /// CSS style sheets.
    Style,
    /// JavaScript files.
    Script,
}

impl BundleKind {
    /// File extension of the aggregated output.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Style => "css",
            Self::Script => "js",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Style => "text/css",
            Self::Script => "text/javascript",
        }
    }

    /// Text placed between concatenated members.
    ///
    /// Scripts get a `;` so a file without a trailing semicolon cannot
    /// merge its last statement into the next file.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Style => "\n",
            Self::Script => ";\n",
        }
    }
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Style => "style",
            Self::Script => "script",
        })
    }
}
