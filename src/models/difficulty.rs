#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Order in which today's challenges are drawn.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeCategory {
    Recycling,
    Lifestyle,
}

impl ChallengeCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChallengeCategory::Recycling => "Recycling",
            ChallengeCategory::Lifestyle => "Lifestyle",
        }
    }
}
