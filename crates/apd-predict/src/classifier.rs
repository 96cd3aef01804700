//! Tree-ensemble classifiers in the flat-array layout.
//!
//! Node `i` is a leaf when `children_left[i] == -1`; otherwise a sample goes
//! left when `x[feature[i]] <= threshold[i]` and right otherwise. `value[i]`
//! holds per-class weights at that node.

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};

const LEAF: i64 = -1;

/// Single-row class prediction.
pub trait Classifier {
    /// Number of target classes.
    fn n_classes(&self) -> usize;
    /// Highest feature index referenced plus one.
    fn required_features(&self) -> usize;
    /// Per-class probabilities for one encoded row.
    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>>;

    /// Index of the most probable class; the lowest index wins ties.
    fn predict(&self, row: &[f64]) -> Result<usize> {
        let proba = self.predict_proba(row)?;
        let mut best = 0usize;
        for (idx, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = idx;
            }
        }
        Ok(best)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    pub fn n_nodes(&self) -> usize {
        self.children_left.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.children_left[node] == LEAF
    }

    /// Checks array shapes and that every split moves to a later node.
    pub fn validate(&self, n_classes: usize) -> Result<()> {
        let n = self.n_nodes();
        if n == 0 {
            return Err(invalid("tree has no nodes"));
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|len| *len != n)
        {
            return Err(invalid("tree arrays differ in length"));
        }
        for node in 0..n {
            if self.value[node].len() != n_classes {
                return Err(invalid(format!(
                    "node {node} has {} class weights, expected {n_classes}",
                    self.value[node].len()
                )));
            }
            if self.is_leaf(node) {
                if self.children_right[node] != LEAF {
                    return Err(invalid(format!("leaf {node} has a right child")));
                }
                continue;
            }
            for child in [self.children_left[node], self.children_right[node]] {
                let in_range = usize::try_from(child).is_ok_and(|c| c > node && c < n);
                if !in_range {
                    return Err(invalid(format!("node {node} has invalid child {child}")));
                }
            }
            if self.feature[node] < 0 {
                return Err(invalid(format!("split node {node} has no feature")));
            }
        }
        Ok(())
    }

    fn leaf_for(&self, row: &[f64]) -> Result<usize> {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let feature = usize::try_from(self.feature[node])
                .map_err(|_| invalid(format!("split node {node} has no feature")))?;
            let x = *row.get(feature).ok_or(PredictError::FeatureCountMismatch {
                expected: feature + 1,
                actual: row.len(),
            })?;
            let next = if x <= self.threshold[node] {
                self.children_left[node]
            } else {
                self.children_right[node]
            };
            node = usize::try_from(next)
                .ok()
                .filter(|n| *n > node && *n < self.n_nodes())
                .ok_or_else(|| invalid(format!("node {node} has invalid child {next}")))?;
        }
        Ok(node)
    }

    fn split_features(&self) -> usize {
        self.feature
            .iter()
            .zip(&self.children_left)
            .filter(|(_, left)| **left != LEAF)
            .filter_map(|(f, _)| usize::try_from(*f).ok())
            .map(|f| f + 1)
            .max()
            .unwrap_or(0)
    }

    /// Leaf class weights normalised to sum to one.
    fn leaf_proba(&self, row: &[f64]) -> Result<Vec<f64>> {
        let weights = &self.value[self.leaf_for(row)?];
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Ok(vec![0.0; weights.len()]);
        }
        Ok(weights.iter().map(|w| w / total).collect())
    }
}

/// The classifier stored in a model bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeModel {
    DecisionTree {
        n_classes: usize,
        tree: DecisionTree,
    },
    /// Averages the normalised leaf distributions of its trees.
    RandomForest {
        n_classes: usize,
        trees: Vec<DecisionTree>,
    },
}

impl TreeModel {
    fn trees(&self) -> &[DecisionTree] {
        match self {
            TreeModel::DecisionTree { tree, .. } => std::slice::from_ref(tree),
            TreeModel::RandomForest { trees, .. } => trees,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_classes() == 0 {
            return Err(invalid("model declares zero classes"));
        }
        if self.trees().is_empty() {
            return Err(invalid("forest has no trees"));
        }
        for (idx, tree) in self.trees().iter().enumerate() {
            tree.validate(self.n_classes()).map_err(|error| match error {
                PredictError::InvalidBundle(message) => invalid(format!("tree {idx}: {message}")),
                other => other,
            })?;
        }
        Ok(())
    }
}

impl Classifier for TreeModel {
    fn n_classes(&self) -> usize {
        match self {
            TreeModel::DecisionTree { n_classes, .. }
            | TreeModel::RandomForest { n_classes, .. } => *n_classes,
        }
    }

    fn required_features(&self) -> usize {
        self.trees()
            .iter()
            .map(DecisionTree::split_features)
            .max()
            .unwrap_or(0)
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>> {
        let trees = self.trees();
        let mut sum = vec![0.0; self.n_classes()];
        for tree in trees {
            for (acc, p) in sum.iter_mut().zip(tree.leaf_proba(row)?) {
                *acc += p;
            }
        }
        let count = trees.len() as f64;
        Ok(sum.into_iter().map(|p| p / count).collect())
    }
}

fn invalid(message: impl Into<String>) -> PredictError {
    PredictError::InvalidBundle(message.into())
}
