//! Question bank display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::QuestionBank;

/// Question bank row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BankDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SUBJECT")]
    pub subject: String,

    #[tabled(rename = "QUESTIONS")]
    pub questions: String,
}

impl From<QuestionBank> for BankDisplay {
    fn from(bank: QuestionBank) -> Self {
        Self {
            id: bank.id,
            name: bank.name,
            subject: bank.subject.unwrap_or_else(|| "-".to_string()),
            questions: bank
                .question_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
