use crate::assets;
use crate::score::Grade;
use strum_macros::Display;

/// Short feedback clips packaged with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Sound {
    Correct,
    Wrong,
    Perfect,
    Pass,
    Fail,
}

impl Sound {
    pub const ALL: [Sound; 5] = [
        Sound::Correct,
        Sound::Wrong,
        Sound::Perfect,
        Sound::Pass,
        Sound::Fail,
    ];

    pub fn for_answer(correct: bool) -> Self {
        if correct {
            Sound::Correct
        } else {
            Sound::Wrong
        }
    }

    pub fn for_grade(grade: Grade) -> Self {
        match grade {
            Grade::Perfect => Sound::Perfect,
            Grade::Pass => Sound::Pass,
            Grade::Fail => Sound::Fail,
        }
    }

    pub fn asset_path(self) -> String {
        format!("sounds/{self}.wav")
    }

    pub fn clip(self) -> Option<&'static [u8]> {
        assets::bytes(&self.asset_path())
    }
}
