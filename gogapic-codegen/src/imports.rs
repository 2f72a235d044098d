//! Go import paths and aliases for referenced descriptors.

use std::collections::BTreeSet;

use crate::error::{CodegenError, Result};
use crate::index::{DescriptorId, DescriptorIndex};

/// One Go import: path plus local alias. An empty alias means the import
/// is referenced by its package's own name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportSpec {
    pub path: String,
    pub alias: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self { path: path.into(), alias: alias.into() }
    }

    /// Import without an alias.
    pub fn bare(path: impl Into<String>) -> Self {
        Self::new(path, "")
    }

    /// Whether the alias has to be spelled out: it is set and differs from
    /// the last element of the path.
    pub fn needs_alias(&self) -> bool {
        let conventional = self.path.rsplit('/').next().unwrap_or(&self.path);
        !self.alias.is_empty() && self.alias != conventional
    }

    /// Render as one line of an import block, without indentation.
    pub fn render(&self) -> String {
        if self.needs_alias() {
            format!("{} {:?}", self.alias, self.path)
        } else {
            format!("{:?}", self.path)
        }
    }
}

/// Set of imports required by one generated file. Ordered, so iteration is
/// deterministic.
pub type ImportSet = BTreeSet<ImportSpec>;

/// Derive the import for a `go_package` option value.
///
/// `path;name` is an explicit override. Otherwise trailing `v<digits>`
/// elements are skipped and the last remaining element names the package,
/// so `.../foo/v2` gets alias `foopb`.
pub fn import_spec_for_package(pkg: &str) -> ImportSpec {
    if let Some((path, name)) = pkg.split_once(';') {
        return ImportSpec::new(path, pb_alias(name));
    }

    let mut pkg = pkg;
    loop {
        let Some(p) = pkg.rfind('/') else {
            return ImportSpec::new(pkg, pb_alias(pkg));
        };
        let elem = &pkg[p + 1..];
        if is_version_element(elem) {
            pkg = &pkg[..p];
            continue;
        }
        return ImportSpec::new(pkg, pb_alias(elem));
    }
}

/// Alias for a protobuf package: the name with a `pb` suffix, added once.
fn pb_alias(name: &str) -> String {
    if name.ends_with("pb") {
        name.to_string()
    } else {
        format!("{}pb", name)
    }
}

fn is_version_element(elem: &str) -> bool {
    let mut chars = elem.chars();
    chars.next() == Some('v') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Import for the file that owns message or service `id`. An empty
/// `go_package`, or one with an empty `;name`, counts as missing.
pub fn resolve(index: &DescriptorIndex<'_>, id: DescriptorId) -> Result<ImportSpec> {
    let file = index.owner(id)?;
    let pkg = file
        .options
        .as_ref()
        .and_then(|o| o.go_package.as_deref())
        .filter(|p| !p.trim().is_empty() && !p.ends_with(';'))
        .ok_or_else(|| CodegenError::MissingGoPackage(file.name().to_string()))?;
    Ok(import_spec_for_package(pkg))
}

/// Rule that splits an import block into a standard-library group and a
/// project group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImportGrouping {
    /// The first path element contains no `.`, as with Go's standard library.
    #[default]
    NoDomain,
    /// Paths starting with one of these prefixes form the first group.
    Prefixes(Vec<String>),
}

impl ImportGrouping {
    pub fn is_standard(&self, path: &str) -> bool {
        match self {
            Self::NoDomain => !path.split('/').next().unwrap_or(path).contains('.'),
            Self::Prefixes(prefixes) => prefixes.iter().any(|p| path.starts_with(p.as_str())),
        }
    }

    /// Split `imports` into (standard, project), each in set order.
    pub fn partition<'s>(&self, imports: &'s ImportSet) -> (Vec<&'s ImportSpec>, Vec<&'s ImportSpec>) {
        imports.iter().partition(|imp| self.is_standard(&imp.path))
    }
}
