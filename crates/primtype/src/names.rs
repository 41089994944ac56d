//! Canonical lowercase names for primitive types.
//!
//! A name is the lowercased [`identifier`](PrimitiveType::identifier) of its
//! type, unless [`NAME_OVERRIDES`] says otherwise. The table is built once, on
//! first use from any thread, and is read-only afterwards.
//!
//! Lookups are case-sensitive: `"F32"` is not a type name.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::invariants;
use crate::{Error, PrimitiveType, Result};

/// Types whose canonical name is not their lowercased identifier.
///
/// `Opaque` is declared as `OPAQUE_TYPE` only to stay clear of a platform
/// header macro of the same name.
pub const NAME_OVERRIDES: &[(PrimitiveType, &str)] = &[(PrimitiveType::Opaque, "opaque")];

#[cfg(test)]
pub(crate) static TABLE_BUILDS: std::sync::atomic::AtomicUsize =
    std::sync::atomic::AtomicUsize::new(0);

static TABLE: LazyLock<NameTable> = LazyLock::new(|| {
    #[cfg(test)]
    TABLE_BUILDS.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    NameTable::build()
});

/// Both directions of the name mapping.
pub(crate) struct NameTable {
    /// Canonical name, indexed by tag.
    by_tag: Vec<Option<Box<str>>>,
    /// Inverse of `by_tag`, without `Invalid`. Keeps declaration order.
    by_name: IndexMap<Box<str>, PrimitiveType>,
}

impl NameTable {
    pub(crate) fn build() -> Self {
        let mut by_tag = vec![None; PrimitiveType::ARRAY_SIZE];
        let mut by_name = IndexMap::with_capacity(PrimitiveType::ALL.len());

        for &ty in PrimitiveType::ALL {
            let name: Box<str> = match override_for(ty) {
                Some(name) => name.into(),
                None => ty.identifier().to_ascii_lowercase().into(),
            };
            if ty != PrimitiveType::Invalid {
                let prev = by_name.insert(name.clone(), ty);
                assert!(prev.is_none(), "duplicate primitive type name `{name}`");
            }
            by_tag[ty.as_i32() as usize] = Some(name);
        }

        tracing::debug!(
            names = by_name.len(),
            overrides = NAME_OVERRIDES.len(),
            "built primitive type name table"
        );

        Self { by_tag, by_name }
    }

    pub(crate) fn name(&self, tag: i32) -> Option<&str> {
        let slot = usize::try_from(tag).ok()?;
        self.by_tag.get(slot)?.as_deref()
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<PrimitiveType> {
        self.by_name.get(name).copied()
    }
}

fn override_for(ty: PrimitiveType) -> Option<&'static str> {
    NAME_OVERRIDES
        .iter()
        .find(|(overridden, _)| *overridden == ty)
        .map(|&(_, name)| name)
}

fn table() -> &'static NameTable {
    LazyLock::force(&TABLE)
}

/// Canonical lowercase name of `ty`, e.g. `"f8e4m3fn"`.
pub fn lowercase_name(ty: PrimitiveType) -> &'static str {
    lowercase_name_for_tag(ty.as_i32())
}

/// Canonical lowercase name for a raw tag.
///
/// # Panics
/// Panics if `tag` is not a valid tag; see [`PrimitiveType::is_valid`].
pub fn lowercase_name_for_tag(tag: i32) -> &'static str {
    table()
        .name(tag)
        .unwrap_or_else(|| invariants::tag_out_of_range(tag))
}

/// Parse a canonical lowercase name.
pub fn string_to_primitive_type(name: &str) -> Result<PrimitiveType> {
    table()
        .lookup(name)
        .ok_or_else(|| Error::InvalidArgument(name.to_owned()))
}

pub fn is_primitive_type_name(name: &str) -> bool {
    table().lookup(name).is_some()
}

/// Every name [`string_to_primitive_type`] accepts, in declaration order.
pub fn primitive_type_names() -> impl Iterator<Item = &'static str> {
    table().by_name.keys().map(|name| &**name)
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(lowercase_name(*self))
    }
}

impl FromStr for PrimitiveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        string_to_primitive_type(s)
    }
}
