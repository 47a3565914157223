use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

pub fn trait_order() -> &'static [Trait; 5] {
    &[
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ]
}

impl Trait {
    pub fn name(self) -> &'static str {
        match self {
            Trait::Openness => "Openness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::Neuroticism => "Neuroticism",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Trait::Openness => "Reflects creativity, curiosity, and openness to new experiences.",
            Trait::Conscientiousness => {
                "Shows organization, responsibility, and goal-directed behavior."
            }
            Trait::Extraversion => {
                "Indicates sociability, energy, and enthusiasm in social settings."
            }
            Trait::Agreeableness => "Relates to kindness, empathy, and cooperation with others.",
            Trait::Neuroticism => "Represents emotional stability and how one handles stress.",
        }
    }

    /// Bar color used by the chart renderer.
    pub fn color(self) -> &'static str {
        match self {
            Trait::Openness => "#1f77b4",
            Trait::Conscientiousness => "#ff7f0e",
            Trait::Extraversion => "#2ca02c",
            Trait::Agreeableness => "#9467bd",
            Trait::Neuroticism => "#e377c2",
        }
    }
}

/// Five trait scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TraitScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl TraitScores {
    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    /// Scores in canonical trait order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        trait_order().iter().map(move |&t| (t, self.get(t)))
    }

    /// Highest-scoring trait; the earlier trait in canonical order wins ties.
    pub fn dominant(&self) -> Trait {
        let mut best = Trait::Openness;
        let mut best_score = self.openness;
        for (t, score) in self.iter().skip(1) {
            if score > best_score {
                best = t;
                best_score = score;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/traits.rs"]
mod tests;
