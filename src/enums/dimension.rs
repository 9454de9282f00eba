use serde::Serialize;

/// Sustainability dimension used to group SDGs. Groups overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dimension {
    Economic,
    Environmental,
    Social,
}

impl Dimension {
    pub const ALL: [Self; 3] = [Self::Economic, Self::Environmental, Self::Social];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Economic => "Economic",
            Self::Environmental => "Environmental",
            Self::Social => "Social",
        }
    }

    pub const fn codes(self) -> &'static [&'static str] {
        match self {
            Self::Economic => &["9", "1", "5", "4", "8", "10", "17", "7", "12"],
            Self::Environmental => &["13", "14", "15", "17", "7", "12", "11", "6"],
            Self::Social => &["1", "5", "4", "8", "10", "17", "2", "3", "16", "11", "6"],
        }
    }

    pub fn contains(self, code: &str) -> bool {
        self.codes().contains(&code)
    }
}
