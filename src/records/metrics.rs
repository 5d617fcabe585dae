/// Direction of a metric's change, read from the sign of its delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

impl Metric {
    pub fn direction(&self) -> DeltaDirection {
        match self.delta.trim_start().chars().next() {
            Some('+') => DeltaDirection::Up,
            Some('-') | Some('−') => DeltaDirection::Down,
            Some(c) if c.is_ascii_digit() => DeltaDirection::Up,
            _ => DeltaDirection::Flat,
        }
    }
}

/// Model performance KPIs shown on the welcome screen.
pub fn model_metrics() -> [Metric; 3] {
    [
        Metric {
            label: "Akurasi Model",
            value: "92.5%",
            delta: "+1.2%",
        },
        Metric {
            label: "Loss Training",
            value: "0.15",
            delta: "-0.03",
        },
        Metric {
            label: "Waktu Pelatihan",
            value: "45 menit",
            delta: "-5 menit",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_direction_from_sign() {
        let [accuracy, loss, duration] = model_metrics();
        assert_eq!(accuracy.direction(), DeltaDirection::Up);
        assert_eq!(loss.direction(), DeltaDirection::Down);
        assert_eq!(duration.direction(), DeltaDirection::Down);

        let flat = Metric {
            label: "x",
            value: "1",
            delta: "",
        };
        assert_eq!(flat.direction(), DeltaDirection::Flat);
    }
}
