//! Static lesson content: key concepts, workflow step catalog, and the
//! scripted evaluation and prediction shown for each task.
//!
//! Evaluation metrics and predictions are fixed illustrations. They are not
//! computed from the data.

use mlsim_model::TaskType;
use serde::Serialize;

use crate::workflow::WorkflowStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptIcon {
    Algorithm,
    Ml,
    Supervised,
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Concept {
    pub term: &'static str,
    pub definition: &'static str,
    pub analogy: &'static str,
    pub icon: ConceptIcon,
}

pub const KEY_CONCEPTS: [Concept; 4] = [
    Concept {
        term: "Algorithm vs. Model",
        definition: "An algorithm is the procedure, while a model is the output of running the \
                     algorithm on data. It contains the learned patterns.",
        analogy: "Algorithm = Recipe. Model = The finished cake.",
        icon: ConceptIcon::Algorithm,
    },
    Concept {
        term: "Machine Learning vs. Statistics",
        definition: "ML often prioritizes predictive accuracy, while statistics often focuses on \
                     inference and understanding relationships.",
        analogy: "ML = \"Can we predict it?\". Statistics = \"Why does it happen?\".",
        icon: ConceptIcon::Ml,
    },
    Concept {
        term: "Supervised vs. Unsupervised Learning",
        definition: "Supervised learning uses labeled data (with a known target) to make \
                     predictions. Unsupervised learning finds patterns in unlabeled data.",
        analogy: "Supervised = Learning with an answer key. Unsupervised = Finding groups \
                  without labels.",
        icon: ConceptIcon::Supervised,
    },
    Concept {
        term: "Train/Test Split",
        definition: "The practice of splitting data into a training set to build the model and a \
                     test set to evaluate its performance on unseen data.",
        analogy: "Like studying for an exam (training) and then taking the exam (testing).",
        icon: ConceptIcon::Split,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// Title and description for each stage, in stage order.
pub const WORKFLOW_STEPS: [WorkflowStep; 5] = [
    WorkflowStep {
        title: "Choose Business Problem",
        description: "Define what you want to predict or discover.",
    },
    WorkflowStep {
        title: "Preprocess Data",
        description: "Clean, transform, and prepare data for the algorithm.",
    },
    WorkflowStep {
        title: "Train Model",
        description: "Fit the algorithm to the prepared training data.",
    },
    WorkflowStep {
        title: "Evaluate Model",
        description: "Assess the model's performance on unseen test data.",
    },
    WorkflowStep {
        title: "Make Predictions",
        description: "Use the trained model on new data to get insights.",
    },
];

pub fn workflow_step(stage: WorkflowStage) -> &'static WorkflowStep {
    &WORKFLOW_STEPS[stage.index()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_negative: u32,
    pub false_positive: u32,
    pub false_negative: u32,
    pub true_positive: u32,
}

impl ConfusionMatrix {
    pub fn total(&self) -> u32 {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    pub fn accuracy(&self) -> f64 {
        f64::from(self.true_negative + self.true_positive) / f64::from(self.total())
    }
}

/// Scripted evaluation results for a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "task", rename_all = "lowercase")]
pub enum Evaluation {
    Classification {
        confusion: ConfusionMatrix,
    },
    Regression {
        rmse: f64,
        r_squared: f64,
    },
    Clustering {
        k: usize,
        clusters: &'static [&'static [&'static str]],
    },
}

const LOCATION_CLUSTERS: &[&[&str]] = &[
    &["New York", "Boston"],
    &["Chicago"],
    &["San Francisco", "Miami"],
];

pub fn evaluation(task: TaskType) -> Evaluation {
    match task {
        TaskType::Classification => Evaluation::Classification {
            confusion: ConfusionMatrix {
                true_negative: 1,
                false_positive: 0,
                false_negative: 1,
                true_positive: 4,
            },
        },
        TaskType::Regression => Evaluation::Regression {
            rmse: 12.34,
            r_squared: 0.88,
        },
        TaskType::Clustering => Evaluation::Clustering {
            k: LOCATION_CLUSTERS.len(),
            clusters: LOCATION_CLUSTERS,
        },
    }
}

/// Scripted prediction on a new, hand-written input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub prompt: &'static str,
    pub input: &'static str,
    pub outcome: &'static str,
}

pub fn prediction(task: TaskType) -> Prediction {
    match task {
        TaskType::Classification => Prediction {
            prompt: "Predict if a new transaction will have a margin above median:",
            input: "cost: 80, location: 'New York', ...",
            outcome: "Prediction: 1 (Above Median)",
        },
        TaskType::Regression => Prediction {
            prompt: "Predict the gross profit for a new transaction:",
            input: "cost: 150, location: 'Chicago', ...",
            outcome: "Predicted Gross Profit: $68.50",
        },
        TaskType::Clustering => Prediction {
            prompt: "Assign a new location to a cluster:",
            input: "cost: 95, units_sold: 18, ...",
            outcome: "Belongs to Cluster 2",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_accuracy_matches_confusion_matrix() {
        let Evaluation::Classification { confusion } = evaluation(TaskType::Classification) else {
            panic!("wrong evaluation kind");
        };
        assert_eq!(confusion.total(), 6);
        assert_eq!(format!("{:.1}%", confusion.accuracy() * 100.0), "83.3%");
    }

    #[test]
    fn clustering_covers_every_location_once() {
        let Evaluation::Clustering { k, clusters } = evaluation(TaskType::Clustering) else {
            panic!("wrong evaluation kind");
        };
        assert_eq!(k, 3);
        let mut locations: Vec<&str> = clusters.iter().flat_map(|c| c.iter().copied()).collect();
        locations.sort_unstable();
        let mut expected = mlsim_model::baseline::LOCATIONS.to_vec();
        expected.sort_unstable();
        assert_eq!(locations, expected);
    }

    #[test]
    fn one_step_per_stage() {
        assert_eq!(WORKFLOW_STEPS.len(), WorkflowStage::ALL.len());
        assert_eq!(workflow_step(WorkflowStage::Training).title, "Train Model");
    }
}
