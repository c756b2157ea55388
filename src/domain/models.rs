use crate::domain::constants::HELLO;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One print operation of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Hello,
    Print { text: String },
    PrintMultiple { first: String, second: String },
}

impl Step {
    pub fn print(text: impl Into<String>) -> Self {
        Step::Print { text: text.into() }
    }

    pub fn print_multiple(first: impl Into<String>, second: impl Into<String>) -> Self {
        Step::PrintMultiple {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The exact line this step produces, without the trailing newline.
    pub fn render(&self) -> String {
        match self {
            Step::Hello => HELLO.to_string(),
            Step::Print { text } => text.clone(),
            Step::PrintMultiple { first, second } => format!("{}{}", first, second),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Step::Hello => "hello".to_string(),
            Step::Print { text } => format!("print\t{}", text),
            Step::PrintMultiple { first, second } => {
                format!("print-multiple\t{}\t{}", first, second)
            }
        }
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct RunReport {
    pub lines: Vec<String>,
}
