//! Score, tier and result types produced by the evaluator.

use std::fmt;

/// Number of strength rules, and therefore the highest reachable score.
pub const RULE_COUNT: u8 = 4;

/// Count of satisfied strength rules, always in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(RULE_COUNT);

    /// Returns `None` for anything above [`RULE_COUNT`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= RULE_COUNT).then_some(Score(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> Tier {
        Tier::from_score(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, RULE_COUNT)
    }
}

/// Display label attached to a score. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    WetPaper,
    Jelly,
    Biscuit,
    Superhero,
    Dragon,
}

impl Tier {
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0 => Tier::WetPaper,
            1 => Tier::Jelly,
            2 => Tier::Biscuit,
            3 => Tier::Superhero,
            // Score::new caps the value at RULE_COUNT
            _ => Tier::Dragon,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::WetPaper => "Oh no! Your password is like wet paper",
            Tier::Jelly => "Hmm.. still weak like jelly",
            Tier::Biscuit => "Not bad! Like a crunchy biscuit",
            Tier::Superhero => "Cool! Strong like a superhero",
            Tier::Dragon => "WOW! Super strong like a dragon!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::WetPaper => "😭",
            Tier::Jelly => "😟",
            Tier::Biscuit => "😊",
            Tier::Superhero => "😎",
            Tier::Dragon => "🐉",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: Score,
    pub tier: Tier,
    /// One line per unsatisfied rule, in rule order.
    pub reasons: Vec<String>,
}

impl StrengthResult {
    pub fn new(score: Score, reasons: Vec<String>) -> Self {
        Self {
            score,
            tier: score.tier(),
            reasons,
        }
    }

    pub fn is_strongest(&self) -> bool {
        self.score == Score::MAX
    }
}
