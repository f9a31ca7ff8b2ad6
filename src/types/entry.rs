//! Registry entries: either a token reference or a nested group.

/// A node in the token table.
///
/// Groups keep their children in declaration order, which `get_token`
/// relies on for its first-value fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEntry {
    /// A CSS custom-property reference, e.g. `var(--color-primary)`.
    Leaf(&'static str),
    /// A named group of entries.
    Node(&'static [(&'static str, TokenEntry)]),
}

impl TokenEntry {
    /// Get the reference string if this is a leaf.
    pub fn as_leaf(&self) -> Option<&'static str> {
        match *self {
            TokenEntry::Leaf(value) => Some(value),
            TokenEntry::Node(_) => None,
        }
    }

    /// Get the children if this is a group.
    pub fn children(&self) -> Option<&'static [(&'static str, TokenEntry)]> {
        match *self {
            TokenEntry::Leaf(_) => None,
            TokenEntry::Node(children) => Some(children),
        }
    }

    /// Look up a direct child by key.
    pub fn child(&self, key: &str) -> Option<&'static TokenEntry> {
        self.children()?
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, entry)| entry)
    }

    /// Visit every leaf below this entry with its dot-joined relative key.
    ///
    /// A leaf at the top of the walk is reported with `prefix` as its key.
    pub fn for_each_leaf(&self, prefix: &str, f: &mut dyn FnMut(String, &'static str)) {
        match *self {
            TokenEntry::Leaf(value) => f(prefix.to_string(), value),
            TokenEntry::Node(children) => {
                for (name, entry) in children.iter() {
                    let key = if prefix.is_empty() {
                        (*name).to_string()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    entry.for_each_leaf(&key, f);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: &[(&str, TokenEntry)] = &[
        ("a", TokenEntry::Leaf("var(--x-a)")),
        ("b", TokenEntry::Leaf("var(--x-b)")),
    ];
    const OUTER: &[(&str, TokenEntry)] = &[
        ("inner", TokenEntry::Node(INNER)),
        ("c", TokenEntry::Leaf("var(--x-c)")),
    ];

    #[test]
    fn test_child_lookup() {
        let root = TokenEntry::Node(OUTER);
        assert_eq!(root.child("c").and_then(|e| e.as_leaf()), Some("var(--x-c)"));
        assert!(root.child("missing").is_none());
        assert!(TokenEntry::Leaf("v").child("a").is_none());
    }

    #[test]
    fn test_for_each_leaf_recurses() {
        let mut seen = Vec::new();
        TokenEntry::Node(OUTER).for_each_leaf("", &mut |key, value| seen.push((key, value)));
        assert_eq!(
            seen,
            vec![
                ("inner.a".to_string(), "var(--x-a)"),
                ("inner.b".to_string(), "var(--x-b)"),
                ("c".to_string(), "var(--x-c)"),
            ]
        );
    }
}
