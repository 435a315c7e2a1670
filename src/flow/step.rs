use serde::Serialize;
use std::fmt;

/// Wizard states, strictly ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Landing,
    Event,
    Lodging,
    Cuisine,
    Dining,
    Summary,
}

impl Step {
    pub const SEQUENCE: [Step; 6] = [
        Step::Landing,
        Step::Event,
        Step::Lodging,
        Step::Cuisine,
        Step::Dining,
        Step::Summary,
    ];

    pub fn index(self) -> usize {
        match self {
            Step::Landing => 0,
            Step::Event => 1,
            Step::Lodging => 2,
            Step::Cuisine => 3,
            Step::Dining => 4,
            Step::Summary => 5,
        }
    }

    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::SEQUENCE[i])
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Landing => "Welcome",
            Step::Event => "Choose a performance",
            Step::Lodging => "Choose where to stay",
            Step::Cuisine => "Choose a cuisine",
            Step::Dining => "Choose where to dine",
            Step::Summary => "Your celebration",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Landing => "landing",
            Step::Event => "event",
            Step::Lodging => "lodging",
            Step::Cuisine => "cuisine",
            Step::Dining => "dining",
            Step::Summary => "summary",
        };
        f.write_str(name)
    }
}
