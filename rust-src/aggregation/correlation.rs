//! Pearson correlation over pairwise-complete observations.

use serde::Serialize;

use crate::models::{Dataset, NumericField};


/// Square correlation matrix; rows and columns share `fields` order.
///
/// A cell is `None` when it is undefined (fewer than two complete pairs or
/// zero variance on either side).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub fields: Vec<NumericField>,
    pub values: Vec<Vec<Option<f64>>>,
}


impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied().flatten()
    }
}


/// Pearson's r for a set of paired observations.
pub fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let nf = n as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / nf;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}


/// Compute the correlation matrix of `fields` over the dataset.
pub fn correlation_matrix(dataset: &Dataset, fields: &[NumericField]) -> CorrelationMatrix {
    let columns: Vec<Vec<Option<f64>>> = fields.iter().map(|&f| dataset.column(f)).collect();
    let n = fields.len();
    let mut values = vec![vec![None; n]; n];

    for i in 0..n {
        for j in i..n {
            let pairs: Vec<(f64, f64)> = columns[i]
                .iter()
                .zip(&columns[j])
                .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
                .collect();

            let r = pearson(&pairs);
            // Self-correlation is exactly one whenever it is defined
            let r = if i == j { r.map(|_| 1.0) } else { r };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        fields: fields.to_vec(),
        values,
    }
}
