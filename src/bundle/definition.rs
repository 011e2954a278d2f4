//! Bundle definitions and their fluent builder.

use serde::Serialize;

use crate::core::VirtualPath;

use super::BundleKind;

/// A registered bundle. Only constructed by [`BundleTable`](super::BundleTable),
/// so every instance has a valid name and at least one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleDefinition {
    pub(super) name: VirtualPath,
    pub(super) kind: BundleKind,
    pub(super) members: Vec<VirtualPath>,
}

impl BundleDefinition {
    #[inline]
    pub fn name(&self) -> &VirtualPath {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> BundleKind {
        self.kind
    }

    /// Members in registration order.
    #[inline]
    pub fn members(&self) -> &[VirtualPath] {
        &self.members
    }

    /// URL clients request for the aggregated bundle.
    pub fn url(&self) -> String {
        self.name.url()
    }

    /// Output file path relative to the output directory
    /// (`bundle/Home/Index-styles.css`).
    pub fn output_file(&self) -> String {
        format!("{}.{}", self.name.relative(), self.kind.extension())
    }
}

/// Unvalidated bundle, built fluently before being added to a table.
///
/// ```ignore
/// table.add(
///     Bundle::style("~/bundle/site")
///         .include("~/Content/reset.css")
///         .include("~/Content/site.css"),
/// )?;
/// ```
#[derive(Debug, Clone)]
pub struct Bundle {
    pub(super) name: String,
    pub(super) kind: BundleKind,
    pub(super) members: Vec<String>,
}

impl Bundle {
    pub fn new(name: impl Into<String>, kind: BundleKind) -> Self {
        Self {
            name: name.into(),
            kind,
            members: Vec::new(),
        }
    }

    pub fn style(name: impl Into<String>) -> Self {
        Self::new(name, BundleKind::Style)
    }

    pub fn script(name: impl Into<String>) -> Self {
        Self::new(name, BundleKind::Script)
    }

    /// Append a member path.
    pub fn include(mut self, path: impl Into<String>) -> Self {
        self.members.push(path.into());
        self
    }
}
