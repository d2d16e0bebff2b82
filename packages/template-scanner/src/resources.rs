//! Component Registry
//!
//! Lets the scanner tell a custom component or directive name apart from an
//! ordinary word under the cursor.

use std::collections::HashSet;

/// Predicate deciding whether a word names a known component.
pub trait ComponentRegistry {
    fn is_component(&self, name: &str) -> bool;
}

impl<T: ComponentRegistry + ?Sized> ComponentRegistry for &T {
    fn is_component(&self, name: &str) -> bool {
        (**self).is_component(name)
    }
}

/// Registry that knows no components.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoComponents;

impl ComponentRegistry for NoComponents {
    fn is_component(&self, _name: &str) -> bool {
        false
    }
}

/// Adapts a closure into a [`ComponentRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct ComponentPredicate<F>(pub F);

impl<F: Fn(&str) -> bool> ComponentRegistry for ComponentPredicate<F> {
    fn is_component(&self, name: &str) -> bool {
        (self.0)(name)
    }
}

/// Known component names plus name prefixes such as `nz-` or `mat-`.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    names: HashSet<String>,
    prefixes: Vec<String>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes
            .extend(prefixes.into_iter().map(Into::into).filter(|p| !p.is_empty()));
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.prefixes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ComponentSet {
            names: iter.into_iter().map(Into::into).collect(),
            prefixes: Vec::new(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ComponentSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl ComponentRegistry for ComponentSet {
    fn is_component(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.names.contains(name)
            || self
                .prefixes
                .iter()
                .any(|prefix| name.len() > prefix.len() && name.starts_with(prefix.as_str()))
    }
}
