use serde::{Deserialize, Serialize};

/// The optimal design for a request.
///
/// The histories hold one entry each: the cost and the safety margin at the
/// optimum. Callers wanting every evaluation should attach an observer such
/// as [`girder_observers::Trace`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResult {
    /// Name of the selected material.
    pub material: String,

    /// Optimal length in metres.
    pub length: f64,

    /// Optimal width in metres.
    pub width: f64,

    /// Cost at the optimum, as reported by the search.
    pub cost: f64,

    pub cost_history: Vec<f64>,

    /// Strength minus induced stress, in kN/m².
    pub safety_margin_history: Vec<f64>,
}

impl DesignResult {
    /// Footprint area in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Safety margin at the optimum, or `None` if the history is empty.
    #[must_use]
    pub fn safety_margin(&self) -> Option<f64> {
        self.safety_margin_history.last().copied()
    }

    /// Returns `[safety margin, cost]` points for a cost-vs-safety plot.
    #[must_use]
    pub fn cost_vs_safety(&self) -> Vec<[f64; 2]> {
        self.safety_margin_history
            .iter()
            .zip(&self.cost_history)
            .map(|(&margin, &cost)| [margin, cost])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample() -> DesignResult {
        DesignResult {
            material: "B".to_owned(),
            length: 2.0,
            width: 2.5,
            cost: 2500.0,
            cost_history: vec![2500.0],
            safety_margin_history: vec![0.0],
        }
    }

    #[test]
    fn plot_points_pair_margin_with_cost() {
        let result = sample();

        assert_relative_eq!(result.area(), 5.0);
        assert_eq!(result.safety_margin(), Some(0.0));
        assert_eq!(result.cost_vs_safety(), vec![[0.0, 2500.0]]);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["material"], "B");
        assert_eq!(json["costHistory"], serde_json::json!([2500.0]));
        assert_eq!(json["safetyMarginHistory"], serde_json::json!([0.0]));

        let back: DesignResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
