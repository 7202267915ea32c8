use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn of(matched: bool) -> Self {
        if matched {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Verdict::Correct => 1,
            Verdict::Incorrect => 0,
        }
    }
}
