//! Style registry.
//!
//! Interns styles for one document. Lookups scan the registered styles in
//! insertion order and return the first equal one; new styles get the next
//! `style_N` id. Ids are never reused or removed.

use crate::style::Style;
use indexmap::IndexMap;

/// Prefix of generated style ids.
pub const STYLE_ID_PREFIX: &str = "style_";

/// Document-wide style registry.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: IndexMap<String, Style>,
    next_id: usize,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            styles: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Return the id of an equal registered style, registering `style` if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::style::{Style, StyleRegistry};
    ///
    /// let mut registry = StyleRegistry::new();
    /// let a = registry.intern(Style::new("Garamond", 10.0));
    /// let b = registry.intern(Style::new("Garamond", 10.001));
    /// let c = registry.intern(Style::new("Garamond", 8.0));
    /// assert_eq!(a, "style_1");
    /// assert_eq!(b, "style_1");
    /// assert_eq!(c, "style_2");
    /// ```
    pub fn intern(&mut self, style: Style) -> String {
        if let Some((id, _)) = self.styles.iter().find(|(_, s)| **s == style) {
            return id.clone();
        }
        let id = format!("{}{}", STYLE_ID_PREFIX, self.next_id);
        self.next_id += 1;
        log::debug!("New style {}: {}", id, style);
        self.styles.insert(id.clone(), style);
        id
    }

    /// Style registered under `id`.
    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.get(id)
    }

    /// Registered `(id, style)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(id, s)| (id.as_str(), s))
    }

    /// Number of distinct styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True if nothing was interned yet.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::VerticalAlign;

    #[test]
    fn test_intern_same_style_twice() {
        let mut registry = StyleRegistry::new();
        let style = Style::new("F", 10.0);
        assert_eq!(registry.intern(style.clone()), registry.intern(style));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_registry_starts_at_one() {
        let mut registry = StyleRegistry::default();
        assert_eq!(registry.intern(Style::new("F", 10.0)), "style_1");
        assert_eq!(registry.intern(Style::new("F", 8.0)), "style_2");
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = StyleRegistry::new();
        let mut sup = Style::new("F", 10.0);
        sup.valign = VerticalAlign::Super;
        registry.intern(sup);
        registry.intern(Style::new("F", 10.0));
        let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["style_1", "style_2"]);
        assert_eq!(registry.get("style_1").unwrap().valign, VerticalAlign::Super);
    }
}
