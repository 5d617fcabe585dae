/// One named series over the training epochs.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: [f64; 10],
}

impl Series {
    /// `(epoch, value)` points, epochs starting at 1.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, value)| ((idx + 1) as f64, *value))
            .collect()
    }
}

/// Learning progress over ten epochs with three metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingHistory {
    pub series: [Series; 3],
}

impl TrainingHistory {
    pub fn epochs(&self) -> usize {
        self.series[0].values.len()
    }

    /// Smallest and largest value across every series.
    pub fn value_bounds(&self) -> (f64, f64) {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

pub fn training_history() -> TrainingHistory {
    TrainingHistory {
        series: [
            Series {
                name: "Training Accuracy",
                values: [0.60, 0.68, 0.75, 0.80, 0.82, 0.85, 0.87, 0.89, 0.91, 0.93],
            },
            Series {
                name: "Validation Accuracy",
                values: [0.58, 0.65, 0.70, 0.74, 0.78, 0.80, 0.82, 0.83, 0.85, 0.86],
            },
            Series {
                name: "Training Loss",
                values: [0.9, 0.75, 0.6, 0.5, 0.4, 0.35, 0.3, 0.25, 0.22, 0.2],
            },
        ],
    }
}

/// Which rendering of the history is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Area,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Area];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Area => "Area",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
