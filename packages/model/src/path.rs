use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of a node in the document tree: child indices from the root.
///
/// `[1]` is the second top-level block, `[1, 0]` its first child.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<usize>);

impl Path {
    pub fn new(indices: Vec<usize>) -> Self {
        Path(indices)
    }

    /// Path of a top-level block.
    pub fn block(index: usize) -> Self {
        Path(vec![index])
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the top-level block this path passes through.
    pub fn block_index(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Re-point this path at another top-level block, keeping the rest of
    /// the indices. No-op on the empty path.
    pub fn set_block_index(&mut self, index: usize) {
        if let Some(first) = self.0.first_mut() {
            *first = index;
        }
    }

    /// Final index, the position among the parent's children.
    pub fn leaf_index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            Some(Path(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    pub fn child(&self, index: usize) -> Path {
        let mut indices = self.0.clone();
        indices.push(index);
        Path(indices)
    }

    pub fn next_sibling(&self) -> Option<Path> {
        let mut indices = self.0.clone();
        let last = indices.last_mut()?;
        *last += 1;
        Some(Path(indices))
    }

    pub fn starts_with(&self, ancestor: &Path) -> bool {
        self.0.len() >= ancestor.0.len() && self.0[..ancestor.0.len()] == ancestor.0[..]
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Path(indices)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}
