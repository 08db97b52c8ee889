use crate::core::format::{CLOSED_INDENT, OPEN_INDENT};

/// Per-call traversal state. A fresh context is derived for every descent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderContext {
    pub depth: usize,
    /// Prefix inherited from the parent level.
    pub prefix: String,
    /// Whether the directory being listed was the last of its siblings.
    /// Ignored at depth 0.
    pub is_last_sibling: bool,
}

impl RenderContext {
    pub fn root() -> Self {
        Self::default()
    }

    /// Prefix placed before the connector of every entry at this level.
    ///
    /// Empty at the root; otherwise the inherited prefix plus one indent unit,
    /// open (`│\t`) while the parent still has siblings below it.
    pub fn level_prefix(&self) -> String {
        if self.depth == 0 {
            return String::new();
        }

        let unit = if self.is_last_sibling {
            CLOSED_INDENT
        } else {
            OPEN_INDENT
        };
        let mut prefix = String::with_capacity(self.prefix.len() + unit.len());
        prefix.push_str(&self.prefix);
        prefix.push_str(unit);
        prefix
    }

    /// Context for a child directory listed at this level.
    pub fn descend(&self, level_prefix: &str, is_last: bool) -> Self {
        Self {
            depth: self.depth + 1,
            prefix: level_prefix.to_owned(),
            is_last_sibling: is_last,
        }
    }
}
