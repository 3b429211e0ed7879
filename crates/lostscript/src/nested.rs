//! # Nested Structures
//!
//! Batches produced and consumed around a vocabulary are arbitrarily nested:
//! a word, a batch of words, a batch of hypothesis sets.
//! [`Nested`] tags every node as either a leaf or an ordered sequence,
//! and [`Nested::map`] / [`Nested::try_map`] apply a leaf transform
//! while preserving shape exactly.

use crate::errors::{LSResult, LostScriptError};

/// An arbitrarily nested ordered structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<L> {
    /// A terminal value.
    Leaf(L),

    /// An ordered sequence of sub-nodes.
    Seq(Vec<Nested<L>>),
}

impl<L> Default for Nested<L> {
    fn default() -> Self {
        Nested::Seq(Vec::new())
    }
}

impl<L> FromIterator<Nested<L>> for Nested<L> {
    fn from_iter<I: IntoIterator<Item = Nested<L>>>(iter: I) -> Self {
        Nested::Seq(iter.into_iter().collect())
    }
}

impl<L> Nested<L> {
    /// Build a leaf.
    pub fn leaf(value: L) -> Self {
        Nested::Leaf(value)
    }

    /// Build a rank-1 sequence of leaves.
    pub fn from_leaves<I>(leaves: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        leaves.into_iter().map(Nested::Leaf).collect()
    }

    /// Build a rank-2 structure from rows.
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = L>,
    {
        rows.into_iter().map(Nested::from_leaves).collect()
    }

    /// Build a rank-3 structure from batches of rows.
    pub fn from_batches<B, R, I>(batches: B) -> Self
    where
        B: IntoIterator<Item = R>,
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = L>,
    {
        batches.into_iter().map(Nested::from_rows).collect()
    }

    /// Is this node a leaf?
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// The leaf value, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&L> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }

    /// The children, if this node is a sequence.
    pub fn as_seq(&self) -> Option<&[Nested<L>]> {
        match self {
            Nested::Leaf(_) => None,
            Nested::Seq(items) => Some(items),
        }
    }

    /// The number of direct children; zero for a leaf.
    pub fn len(&self) -> usize {
        self.as_seq().map_or(0, <[_]>::len)
    }

    /// Is this an empty sequence?
    pub fn is_empty(&self) -> bool {
        matches!(self, Nested::Seq(items) if items.is_empty())
    }

    /// Nesting depth along the first path.
    ///
    /// A leaf has rank 0; an empty sequence has rank 1.
    pub fn rank(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Seq(items) => 1 + items.first().map_or(0, Nested::rank),
        }
    }

    /// Depth of the first leaf in depth-first order, if there is one.
    pub fn leaf_depth(&self) -> Option<usize> {
        match self {
            Nested::Leaf(_) => Some(0),
            Nested::Seq(items) => items.iter().find_map(Nested::leaf_depth).map(|d| d + 1),
        }
    }

    /// Per-level lengths along the first path.
    ///
    /// Equal shapes between two structures of uniform depth imply
    /// identical rank and identical first-path lengths; use `==` on
    /// the structures themselves for full structural equality.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut node = self;
        while let Nested::Seq(items) = node {
            shape.push(items.len());
            match items.first() {
                Some(first) => node = first,
                None => break,
            }
        }
        shape
    }

    /// Do all leaves sit at the same depth?
    pub fn is_uniform(&self) -> bool {
        fn leaf_depths<L>(
            node: &Nested<L>,
            depth: usize,
            seen: &mut Option<usize>,
        ) -> bool {
            match node {
                Nested::Leaf(_) => match *seen {
                    Some(d) => d == depth,
                    None => {
                        *seen = Some(depth);
                        true
                    }
                },
                Nested::Seq(items) => items
                    .iter()
                    .all(|item| leaf_depths(item, depth + 1, seen)),
            }
        }
        leaf_depths(self, 0, &mut None)
    }

    /// Iterate over all leaves in depth-first order.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = &L> + '_> {
        match self {
            Nested::Leaf(value) => Box::new(core::iter::once(value)),
            Nested::Seq(items) => Box::new(items.iter().flat_map(Nested::leaves)),
        }
    }

    /// Apply `func` to every leaf, preserving shape.
    pub fn map<U, F>(
        &self,
        func: F,
    ) -> Nested<U>
    where
        F: Fn(&L) -> U,
    {
        fn walk<L, U, F: Fn(&L) -> U>(
            node: &Nested<L>,
            func: &F,
        ) -> Nested<U> {
            match node {
                Nested::Leaf(value) => Nested::Leaf(func(value)),
                Nested::Seq(items) => items.iter().map(|item| walk(item, func)).collect(),
            }
        }
        walk(self, &func)
    }

    /// Apply a fallible `func` to every leaf, preserving shape.
    ///
    /// Stops at the first error.
    pub fn try_map<U, E, F>(
        &self,
        func: F,
    ) -> Result<Nested<U>, E>
    where
        F: Fn(&L) -> Result<U, E>,
    {
        fn walk<L, U, E, F: Fn(&L) -> Result<U, E>>(
            node: &Nested<L>,
            func: &F,
        ) -> Result<Nested<U>, E> {
            Ok(match node {
                Nested::Leaf(value) => Nested::Leaf(func(value)?),
                Nested::Seq(items) => Nested::Seq(
                    items
                        .iter()
                        .map(|item| walk(item, func))
                        .collect::<Result<_, E>>()?,
                ),
            })
        }
        walk(self, &func)
    }

    /// Convert a rank-1 structure into a flat vector.
    pub fn to_vec1(&self) -> LSResult<Vec<L>>
    where
        L: Clone,
    {
        match self {
            Nested::Seq(items) => items
                .iter()
                .map(|item| match item {
                    Nested::Leaf(value) => Ok(value.clone()),
                    Nested::Seq(_) => Err(LostScriptError::UnsupportedType(
                        "expected a leaf, found a sequence".to_string(),
                    )),
                })
                .collect(),
            Nested::Leaf(_) => Err(LostScriptError::UnsupportedType(
                "expected a sequence, found a leaf".to_string(),
            )),
        }
    }

    /// Convert a rank-2 structure into rows.
    pub fn to_vec2(&self) -> LSResult<Vec<Vec<L>>>
    where
        L: Clone,
    {
        match self {
            Nested::Seq(items) => items.iter().map(Nested::to_vec1).collect(),
            Nested::Leaf(_) => Err(LostScriptError::UnsupportedType(
                "expected a sequence, found a leaf".to_string(),
            )),
        }
    }

    /// Convert a rank-3 structure into batches of rows.
    pub fn to_vec3(&self) -> LSResult<Vec<Vec<Vec<L>>>>
    where
        L: Clone,
    {
        match self {
            Nested::Seq(items) => items.iter().map(Nested::to_vec2).collect(),
            Nested::Leaf(_) => Err(LostScriptError::UnsupportedType(
                "expected a sequence, found a leaf".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_map_preserves_shape() {
        let grid = Nested::from_rows(vec![vec![1u32, 2, 3], vec![4, 5], vec![]]);
        let mapped = grid.map(|v| v * 10);

        assert_eq!(
            mapped,
            Nested::from_rows(vec![vec![10u32, 20, 30], vec![40, 50], vec![]])
        );
        assert_eq!(mapped.rank(), 2);
        assert_eq!(mapped.shape(), grid.shape());
    }

    #[test]
    fn test_map_leaf() {
        let leaf = Nested::leaf("a");
        assert_eq!(leaf.map(|s| s.len()), Nested::leaf(1));
        assert_eq!(leaf.rank(), 0);
        assert!(leaf.shape().is_empty());
    }

    #[test]
    fn test_try_map_stops_on_error() {
        let grid = Nested::from_rows(vec![vec![1, 2], vec![3, 4]]);

        let res: Result<Nested<i32>, String> =
            grid.try_map(|&v| if v == 3 { Err(format!("bad {v}")) } else { Ok(v) });
        assert_eq!(res, Err("bad 3".to_string()));

        let ok: Result<Nested<i32>, String> = grid.try_map(|&v| Ok(-v));
        assert_eq!(ok.unwrap(), Nested::from_rows(vec![vec![-1, -2], vec![-3, -4]]));
    }

    #[test]
    fn test_rank_and_shape() {
        let batches = Nested::from_batches(vec![
            vec![vec![1u8, 2, 3], vec![4, 5, 6]],
            vec![vec![7, 8, 9], vec![1, 2, 3]],
            vec![vec![4, 5, 6], vec![7, 8, 9]],
        ]);
        assert_eq!(batches.rank(), 3);
        assert_eq!(batches.shape(), vec![3, 2, 3]);
        assert!(batches.is_uniform());
        assert_eq!(batches.leaf_depth(), Some(3));
        assert_eq!(batches.leaves().count(), 18);

        let late_leaf = Nested::from_rows(vec![vec![], vec![7u8]]);
        assert_eq!(late_leaf.rank(), 2);
        assert_eq!(late_leaf.leaf_depth(), Some(2));

        let empty: Nested<u8> = Nested::default();
        assert_eq!(empty.rank(), 1);
        assert_eq!(empty.shape(), vec![0]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_is_uniform() {
        let ragged = Nested::Seq(vec![
            Nested::leaf(1),
            Nested::Seq(vec![Nested::leaf(2)]),
        ]);
        assert!(!ragged.is_uniform());
        assert!(Nested::leaf(1).is_uniform());
    }

    #[test]
    fn test_to_vecs() {
        let rows = vec![vec![1u16, 2], vec![3]];
        let grid = Nested::from_rows(rows.clone());
        assert_eq!(grid.to_vec2().unwrap(), rows);
        assert!(grid.to_vec1().is_err());
        assert!(grid.to_vec3().is_err());
        assert!(Nested::leaf(1u16).to_vec1().is_err());
    }

    fn nested_strategy() -> impl Strategy<Value = Nested<u32>> {
        let leaf = any::<u32>().prop_map(Nested::Leaf);
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop::collection::vec(inner, 0..6).prop_map(Nested::Seq)
        })
    }

    proptest! {
        #[test]
        fn prop_map_preserves_structure(tree in nested_strategy()) {
            let mapped = tree.map(|v| v.wrapping_add(1));
            prop_assert_eq!(mapped.rank(), tree.rank());
            prop_assert_eq!(mapped.shape(), tree.shape());
            prop_assert_eq!(mapped.is_uniform(), tree.is_uniform());
            prop_assert_eq!(mapped.leaves().count(), tree.leaves().count());

            let restored = mapped.map(|v| v.wrapping_sub(1));
            prop_assert_eq!(restored, tree);
        }
    }
}
