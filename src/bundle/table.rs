//! The bundle table (registry).
//!
//! Populated once at startup, read-only afterwards. Lookups go through an
//! FxHashMap index while iteration follows registration order.

use rustc_hash::FxHashMap;

use crate::core::VirtualPath;

use super::{Bundle, BundleDefinition, BundleError, BundleKind};

#[derive(Debug, Default)]
pub struct BundleTable {
    bundles: Vec<BundleDefinition>,
    index: FxHashMap<String, usize>,
}

impl BundleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one bundle.
    ///
    /// Fails without touching the table when `name` is taken, `members` is
    /// empty, or any path is not a `~/` virtual path.
    pub fn register<I, S>(
        &mut self,
        name: &str,
        kind: BundleKind,
        members: I,
    ) -> Result<(), BundleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name_path =
            VirtualPath::parse(name).map_err(|e| BundleError::invalid_path(name, e))?;
        if self.index.contains_key(name_path.as_str()) {
            return Err(BundleError::Duplicate(name.to_string()));
        }

        let members = members
            .into_iter()
            .map(|member| VirtualPath::parse(member).map_err(|e| BundleError::invalid_path(name, e)))
            .collect::<Result<Vec<_>, _>>()?;
        if members.is_empty() {
            return Err(BundleError::Empty(name.to_string()));
        }

        self.index
            .insert(name_path.as_str().to_string(), self.bundles.len());
        self.bundles.push(BundleDefinition {
            name: name_path,
            kind,
            members,
        });
        Ok(())
    }

    /// Register a fluently built [`Bundle`].
    pub fn add(&mut self, bundle: Bundle) -> Result<(), BundleError> {
        self.register(&bundle.name, bundle.kind, bundle.members)
    }

    pub fn get(&self, name: &str) -> Option<&BundleDefinition> {
        self.index.get(name).map(|&i| &self.bundles[i])
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<&BundleDefinition, BundleError> {
        self.get(name)
            .ok_or_else(|| BundleError::NotFound(name.to_string()))
    }

    /// Bundles in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, BundleDefinition> {
        self.bundles.iter()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl<'a> IntoIterator for &'a BundleTable {
    type Item = &'a BundleDefinition;
    type IntoIter = std::slice::Iter<'a, BundleDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
