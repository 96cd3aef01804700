/// The two views of the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    #[default]
    Visualization,
    Prediction,
}

impl View {
    pub fn all() -> &'static [View] {
        &[Self::Visualization, Self::Prediction]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Visualization => "Data Visualization",
            Self::Prediction => "Burnout Prediction",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Visualization => egui_phosphor::regular::CHART_BAR,
            Self::Prediction => egui_phosphor::regular::BRAIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_view_has_its_own_control() {
        assert_eq!(View::all().len(), 2);
        assert_ne!(View::Visualization.label(), View::Prediction.label());
        assert_ne!(View::Visualization.icon(), View::Prediction.icon());
    }
}
