use crate::error::ConfigurationError;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub label: String,
    pub weight: f64,
}

///
/// The rewards on the wheel, in the order they were configured.
///
/// A catalog can only be built through [`RewardCatalog::new`], so any catalog
/// that exists is non-empty and has only finite, positive weights with a finite total.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RewardCatalog {
    entries: Vec<CatalogEntry>,
    total_weight: f64,
}

impl RewardCatalog {
    pub fn new(labels: Vec<String>, weights: Vec<f64>) -> Result<Self, ConfigurationError> {
        if labels.len() != weights.len() {
            return Err(ConfigurationError::LengthMismatch {
                labels: labels.len(),
                weights: weights.len(),
            });
        }
        if labels.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let entries = labels
            .into_iter()
            .zip(weights)
            .enumerate()
            .map(|(index, (label, weight))| {
                if weight.is_finite() && weight > 0.0 {
                    Ok(CatalogEntry { label, weight })
                } else {
                    Err(ConfigurationError::InvalidWeight {
                        index,
                        label,
                        weight,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_weight: f64 = entries.iter().map(|entry| entry.weight).sum();
        if !total_weight.is_finite() {
            return Err(ConfigurationError::TotalWeightOverflow);
        }
        Ok(RewardCatalog {
            entries,
            total_weight,
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn probability(&self, index: usize) -> f64 {
        self.entries
            .get(index)
            .map_or(0.0, |entry| entry.weight / self.total_weight)
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.entries.iter().map(|entry| entry.weight)
    }
}
