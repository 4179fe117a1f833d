//! Descriptive classification of weight vectors.
//!
//! A total function: every weight vector gets a category, with the generic
//! case as the floor. Rules are evaluated top-down and the first match
//! wins, so ordering is part of the contract. The output feeds no control
//! decision anywhere; it exists to explain the blend to a reader.

use crate::config::ClassifierConfig;
use crate::types::{Classification, ClassificationKind, Simplex};

/// Comparison slack so that a weight sitting exactly on a threshold (e.g.
/// 0.1 against LOW = 0.1) does not flip category on the last binary digit.
const THRESHOLD_SLACK: f64 = 1e-9;

/// Classify a normalized weight vector against its simplex.
///
/// Dispatches on vertex count: 3 weights use the triangle taxonomy,
/// 4 weights the tetrahedron taxonomy.
pub fn classify(weights: &[f64], simplex: &Simplex, config: &ClassifierConfig) -> Classification {
    let titles: Vec<&str> = simplex.vertex_titles().collect();
    match weights.len() {
        3 if titles.len() == 3 => classify_triangle(weights, &titles, config),
        4 if titles.len() == 4 => classify_tetrahedron(weights, &titles, config),
        // Mismatched inputs still get the generic category; the classifier
        // never fails.
        _ => Classification {
            kind: ClassificationKind::ComplexWeightedCombination,
            description: "Complex weighted combination of all documents".to_string(),
        },
    }
}

/// Vertex indices ordered by descending weight.
fn descending(weights: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));
    order
}

fn classify_triangle(
    weights: &[f64],
    titles: &[&str],
    config: &ClassifierConfig,
) -> Classification {
    let order = descending(weights);
    let max = weights[order[0]];
    let min = weights[order[order.len() - 1]];

    // 1. Every weight moderate and close together.
    let all_moderate = weights
        .iter()
        .all(|w| *w >= config.low - THRESHOLD_SLACK && *w <= config.high + THRESHOLD_SLACK);
    if all_moderate && (max - min) < config.balanced_spread {
        return Classification {
            kind: ClassificationKind::BalancedIntersection,
            description: format!(
                "Balanced intersection of '{}', '{}' and '{}'",
                titles[0], titles[1], titles[2]
            ),
        };
    }

    // 2/3. One dominant vertex, with or without real influences.
    if max >= config.high - THRESHOLD_SLACK {
        let influences: Vec<&str> = order[1..]
            .iter()
            .filter(|&&i| weights[i] >= config.low - THRESHOLD_SLACK)
            .map(|&i| titles[i])
            .collect();

        if influences.is_empty() {
            return Classification {
                kind: ClassificationKind::SingleDocument,
                description: format!("Dominated by '{}'", titles[order[0]]),
            };
        }
        return Classification {
            kind: ClassificationKind::DominantWithInfluence,
            description: format!(
                "Dominated by '{}' with influence from {}",
                titles[order[0]],
                quote_join(&influences)
            ),
        };
    }

    // 4. Two strong vertices, the third negligible.
    if weights[order[0]] >= config.medium - THRESHOLD_SLACK
        && weights[order[1]] >= config.medium - THRESHOLD_SLACK
        && weights[order[2]] < config.low + THRESHOLD_SLACK
    {
        return Classification {
            kind: ClassificationKind::PairedIntersection,
            description: format!(
                "Intersection of '{}' and '{}'",
                titles[order[0]], titles[order[1]]
            ),
        };
    }

    // 5. Everything else.
    Classification {
        kind: ClassificationKind::ComplexWeightedCombination,
        description: "Complex weighted combination of all three documents".to_string(),
    }
}

fn classify_tetrahedron(
    weights: &[f64],
    titles: &[&str],
    config: &ClassifierConfig,
) -> Classification {
    let order = descending(weights);
    let max = weights[order[0]];
    let min = weights[order[order.len() - 1]];

    if max > config.tetra_dominant {
        return Classification {
            kind: ClassificationKind::Dominant,
            description: format!("Dominated by '{}'", titles[order[0]]),
        };
    }

    if weights.iter().all(|w| *w > config.tetra_balanced) {
        return Classification {
            kind: ClassificationKind::BalancedIntersection,
            description: "Balanced intersection of all four documents".to_string(),
        };
    }

    if weights[order[0]] + weights[order[1]] > config.tetra_paired_sum
        && min < config.tetra_paired_min
    {
        return Classification {
            kind: ClassificationKind::PairedDocuments,
            description: format!(
                "Paired between '{}' and '{}'",
                titles[order[0]], titles[order[1]]
            ),
        };
    }

    Classification {
        kind: ClassificationKind::ComplexMix,
        description: "Complex mix of all four documents".to_string(),
    }
}

fn quote_join(titles: &[&str]) -> String {
    titles
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
