//! Regression forest loaded from a JSON artifact.
//!
//! Prediction is `base_score` plus the mean of the tree outputs for the first
//! row of the request frame.

use contracts::dashboards::d400_sales_prediction::PredictionRequest;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ModelError, ModelLoadError};
use super::frame::{Column, Frame};
use super::SalesPredictor;

/// On-disk form of the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestArtifact {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub base_score: f64,
    /// Feature names, indexed by `NodeArtifact::Split::feature`
    pub features: Vec<String>,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeArtifact {
    /// Node 0 is the root. Children always come after their parent.
    pub nodes: Vec<NodeArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeArtifact {
    /// `x[feature] < threshold` goes left, otherwise right; NaN follows `default_left`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default)]
        default_left: bool,
    },
    Leaf { leaf: f64 },
}

/// Validated, ready-to-evaluate forest
#[derive(Debug, Clone)]
pub struct ForestModel {
    name: String,
    version: String,
    base_score: f64,
    columns: Vec<Column>,
    trees: Vec<Vec<NodeArtifact>>,
}

/// Read the artifact from disk and validate it against the known feature columns
pub fn load_model(path: &Path) -> Result<ForestModel, ModelLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let artifact: ForestArtifact =
        serde_json::from_str(&contents).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    ForestModel::from_artifact(artifact)
}

impl ForestModel {
    pub fn from_artifact(artifact: ForestArtifact) -> Result<Self, ModelLoadError> {
        let columns = artifact
            .features
            .iter()
            .map(|name| {
                Column::parse(name).ok_or_else(|| {
                    ModelLoadError::Incompatible(format!("unknown feature '{}'", name))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if artifact.trees.is_empty() {
            return Err(ModelLoadError::Incompatible("forest has no trees".into()));
        }

        for (tree_idx, tree) in artifact.trees.iter().enumerate() {
            validate_tree(tree_idx, &tree.nodes, columns.len())?;
        }

        Ok(Self {
            name: artifact.name,
            version: artifact.version,
            base_score: artifact.base_score,
            columns,
            trees: artifact.trees.into_iter().map(|t| t.nodes).collect(),
        })
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Mean tree output for one feature vector
    fn predict_row(&self, features: &[f64]) -> f64 {
        let sum: f64 = self
            .trees
            .iter()
            .map(|nodes| evaluate_tree(nodes, features))
            .sum();
        self.base_score + sum / self.trees.len() as f64
    }
}

impl SalesPredictor for ForestModel {
    fn predict(&self, request: &PredictionRequest) -> Result<f64, ModelError> {
        let frame = Frame::new(request)?;
        let features = frame.row(0, &self.columns);
        let value = self.predict_row(&features);

        if !value.is_finite() {
            return Err(ModelError::Evaluation(format!(
                "non-finite prediction {} for features {:?}",
                value, features
            )));
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}

fn validate_tree(
    tree_idx: usize,
    nodes: &[NodeArtifact],
    n_features: usize,
) -> Result<(), ModelLoadError> {
    if nodes.is_empty() {
        return Err(ModelLoadError::Incompatible(format!(
            "tree {} has no nodes",
            tree_idx
        )));
    }

    for (node_idx, node) in nodes.iter().enumerate() {
        if let NodeArtifact::Split {
            feature,
            left,
            right,
            ..
        } = node
        {
            if *feature >= n_features {
                return Err(ModelLoadError::Incompatible(format!(
                    "tree {} node {} uses feature {} of {}",
                    tree_idx, node_idx, feature, n_features
                )));
            }
            // Children strictly after the parent: no cycles, evaluation terminates
            for child in [*left, *right] {
                if child <= node_idx || child >= nodes.len() {
                    return Err(ModelLoadError::Incompatible(format!(
                        "tree {} node {} points to invalid child {}",
                        tree_idx, node_idx, child
                    )));
                }
            }
        }
    }
    Ok(())
}

fn evaluate_tree(nodes: &[NodeArtifact], features: &[f64]) -> f64 {
    let mut idx = 0;
    loop {
        match &nodes[idx] {
            NodeArtifact::Leaf { leaf } => return *leaf,
            NodeArtifact::Split {
                feature,
                threshold,
                left,
                right,
                default_left,
            } => {
                let x = features[*feature];
                let go_left = if x.is_nan() {
                    *default_left
                } else {
                    x < *threshold
                };
                idx = if go_left { *left } else { *right };
            }
        }
    }
}
