//! Wizard steps

use std::fmt;

/// The five steps of an import session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Upload,
    Mapping,
    Preview,
    Importing,
    Results,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Upload,
        WizardStep::Mapping,
        WizardStep::Preview,
        WizardStep::Importing,
        WizardStep::Results,
    ];

    /// Lowercase name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Mapping => "mapping",
            Self::Preview => "preview",
            Self::Importing => "importing",
            Self::Results => "results",
        }
    }

    /// Title for headers and the step indicator
    pub fn title(&self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Mapping => "Map Columns",
            Self::Preview => "Preview",
            Self::Importing => "Importing",
            Self::Results => "Results",
        }
    }

    /// 1-based position
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
