//! Launch questionnaire
//! Static questions with fixed answer options. Pure data collection; the
//! only behaviour is validating answers and exporting them.

use super::Sheet;
use crate::params::NOT_ANSWERED;
use crate::{Result, TokenomicsError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

pub const QUESTIONS: [Question; 10] = [
    Question {
        id: "launchingToken",
        question: "Are you launching a token for your project?",
        options: &["Yes", "No"],
    },
    Question {
        id: "projectGoal",
        question: "What is your project's primary goal?",
        options: &["DeFi", "DAO", "GameFi", "NFT", "Infrastructure"],
    },
    Question {
        id: "fundraisingMethod",
        question: "Which fundraising method are you considering?",
        options: &["IDO", "Private Sale", "Launchpad", "Fair Launch"],
    },
    Question {
        id: "vcConnections",
        question: "Do you have connections with VCs or launchpads?",
        options: &["Yes", "No", "Need Help"],
    },
    Question {
        id: "capitalNeeded",
        question: "How much capital do you need to raise?",
        options: &["<$100K", "$100K-$500K", "$500K-$1M+"],
    },
    Question {
        id: "launchpadListing",
        question: "Are you looking for a launchpad listing?",
        options: &["Yes", "No"],
    },
    Question {
        id: "dexLiquidity",
        question: "Do you plan to provide liquidity on a DEX?",
        options: &["Yes", "No", "Not Sure"],
    },
    Question {
        id: "stakingRewards",
        question: "Do you want staking and rewards for your token?",
        options: &["Yes", "No"],
    },
    Question {
        id: "legalSupport",
        question: "Do you need legal & compliance support?",
        options: &["Yes", "No", "Need Guidance"],
    },
    Question {
        id: "aiOptimization",
        question: "Would you like to integrate UnlockFi's AI-based tokenomics optimization?",
        options: &["Yes", "No"],
    },
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuestionnaireError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("\"{value}\" is not an option for {id}")]
    InvalidOption { id: String, value: String },

    #[error("Answer must be ID=VALUE, got \"{0}\"")]
    MalformedAnswer(String),
}

impl From<QuestionnaireError> for TokenomicsError {
    fn from(err: QuestionnaireError) -> Self {
        TokenomicsError::Export(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Questionnaire {
    answers: HashMap<&'static str, String>,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `id=value` entries
    pub fn from_answers<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut questionnaire = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (id, value) = entry
                .split_once('=')
                .ok_or_else(|| QuestionnaireError::MalformedAnswer(entry.to_string()))?;
            questionnaire.answer(id.trim(), value.trim())?;
        }
        Ok(questionnaire)
    }

    /// Record an answer; it must be one of the question's options
    pub fn answer(&mut self, id: &str, value: &str) -> std::result::Result<(), QuestionnaireError> {
        let question = QUESTIONS
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| QuestionnaireError::UnknownQuestion(id.to_string()))?;

        if !question.options.contains(&value) {
            return Err(QuestionnaireError::InvalidOption {
                id: id.to_string(),
                value: value.to_string(),
            });
        }

        self.answers.insert(question.id, value.to_string());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        QUESTIONS.iter().all(|q| self.answers.contains_key(q.id))
    }

    /// Question/Answer table in question order
    pub fn to_sheet(&self) -> Sheet {
        let mut sheet = Sheet::new("Questionnaire", &["Question", "Answer"]);
        for q in &QUESTIONS {
            let answer = self.get(q.id).unwrap_or(NOT_ANSWERED);
            sheet.push_row(vec![q.question.to_string(), answer.to_string()]);
        }
        sheet
    }

    /// `Question,Answer` header, then every field double-quoted
    pub fn to_csv(&self) -> String {
        let body = self.to_sheet().to_csv_quoted();
        // header line stays bare
        match body.split_once('\n') {
            Some((_, rest)) => format!("Question,Answer\n{}", rest),
            None => body,
        }
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv())?;
        info!(path = %path.display(), answered = self.answers.len(), "questionnaire exported");
        Ok(())
    }
}
