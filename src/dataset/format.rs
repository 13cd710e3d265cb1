//! Training-example record shapes
//!
//! Every record is derived from the same (word1, word2, combined) triple; the
//! format only decides which flat JSON shape it takes.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sandhi::{SandhiEngine, SandhiError};

/// Instruction text of instruction-style records
pub const INSTRUCTION: &str = "Apply Sandhi rules to combine these Sanskrit words.";

/// Prompt prefix of chat-style records
const CHAT_PROMPT: &str = "Combine these Sanskrit words using Sandhi:";

/// Value of `rules_applied` in plain records
const RULES_APPLIED: &str = "sandhi";

/// Output record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExampleFormat {
    /// `{instruction, input, output}` (styles `jsonl`, `alpaca`)
    #[default]
    Instruction,
    /// `{messages: [user, assistant]}` (style `chatml`)
    ChatMl,
    /// `{word1, word2, combined, rules_applied}` (style `dict` and anything else)
    Dict,
}

impl ExampleFormat {
    /// Format for a style name; unrecognised names select `Dict`
    pub fn from_style(style: &str) -> Self {
        match style {
            "jsonl" | "alpaca" => ExampleFormat::Instruction,
            "chatml" => ExampleFormat::ChatMl,
            _ => ExampleFormat::Dict,
        }
    }

    /// Canonical style name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleFormat::Instruction => "jsonl",
            ExampleFormat::ChatMl => "chatml",
            ExampleFormat::Dict => "dict",
        }
    }

    /// Record for one combined pair
    pub fn build(&self, word1: &str, word2: &str, combined: &str) -> TrainingExample {
        match self {
            ExampleFormat::Instruction => TrainingExample::Instruction {
                instruction: INSTRUCTION.to_string(),
                input: format!("{} + {}", word1, word2),
                output: combined.to_string(),
            },
            ExampleFormat::ChatMl => TrainingExample::Chat {
                messages: vec![
                    ChatMessage {
                        role: Role::User,
                        content: format!("{} {} + {}", CHAT_PROMPT, word1, word2),
                    },
                    ChatMessage {
                        role: Role::Assistant,
                        content: combined.to_string(),
                    },
                ],
            },
            ExampleFormat::Dict => TrainingExample::Record {
                word1: word1.to_string(),
                word2: word2.to_string(),
                combined: combined.to_string(),
                rules_applied: RULES_APPLIED.to_string(),
            },
        }
    }
}

impl FromStr for ExampleFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_style(s))
    }
}

impl fmt::Display for ExampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Training example in one of the three record shapes
///
/// Serialized without a tag, so each variant is exactly its flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrainingExample {
    Instruction {
        instruction: String,
        input: String,
        output: String,
    },
    Chat {
        messages: Vec<ChatMessage>,
    },
    Record {
        word1: String,
        word2: String,
        combined: String,
        rules_applied: String,
    },
}

impl TrainingExample {
    /// The combined word carried by the record
    pub fn combined(&self) -> Option<&str> {
        match self {
            TrainingExample::Instruction { output, .. } => Some(output),
            TrainingExample::Chat { messages } => messages
                .iter()
                .find(|m| m.role == Role::Assistant)
                .map(|m| m.content.as_str()),
            TrainingExample::Record { combined, .. } => Some(combined),
        }
    }
}

/// Combine each pair and wrap it in `format`, preserving input order
///
/// Stops at the first pair that cannot be combined.
pub fn format_pairs<I, A, B>(
    engine: &SandhiEngine,
    pairs: I,
    format: ExampleFormat,
) -> Result<Vec<TrainingExample>, SandhiError>
where
    I: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(word1, word2)| {
            let (word1, word2) = (word1.as_ref(), word2.as_ref());
            let combined = engine.combine(word1, word2)?;
            Ok(format.build(word1, word2, &combined))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names() {
        assert_eq!(ExampleFormat::from_style("jsonl"), ExampleFormat::Instruction);
        assert_eq!(ExampleFormat::from_style("alpaca"), ExampleFormat::Instruction);
        assert_eq!(ExampleFormat::from_style("chatml"), ExampleFormat::ChatMl);
        assert_eq!(ExampleFormat::from_style("dict"), ExampleFormat::Dict);
        // unknown styles fall through to dict
        assert_eq!(ExampleFormat::from_style("sharegpt"), ExampleFormat::Dict);
        assert_eq!(ExampleFormat::from_style(""), ExampleFormat::Dict);
        assert_eq!("chatml".parse::<ExampleFormat>(), Ok(ExampleFormat::ChatMl));
    }

    #[test]
    fn test_instruction_format() {
        let engine = SandhiEngine::new();
        let examples = format_pairs(
            &engine,
            [("Deva", "Alaya"), ("Rama", "Ayana")],
            ExampleFormat::Instruction,
        )
        .unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(
            examples[0],
            TrainingExample::Instruction {
                instruction: INSTRUCTION.to_string(),
                input: "Deva + Alaya".to_string(),
                output: "Devalaya".to_string(),
            }
        );
        assert_eq!(examples[1].combined(), Some("Ramanayana"));
    }

    #[test]
    fn test_chatml_format() {
        let engine = SandhiEngine::new();
        let examples = format_pairs(&engine, [("Deva", "Alaya")], ExampleFormat::ChatMl).unwrap();

        let TrainingExample::Chat { messages } = &examples[0] else {
            panic!("expected chat record");
        };
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(
            messages[0].content,
            "Combine these Sanskrit words using Sandhi: Deva + Alaya"
        );
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "Devalaya");
    }

    #[test]
    fn test_dict_format() {
        let engine = SandhiEngine::new();
        let examples = format_pairs(&engine, [("Deva", "Alaya")], ExampleFormat::Dict).unwrap();
        assert_eq!(
            examples[0],
            TrainingExample::Record {
                word1: "Deva".to_string(),
                word2: "Alaya".to_string(),
                combined: "Devalaya".to_string(),
                rules_applied: "sandhi".to_string(),
            }
        );
    }

    #[test]
    fn test_json_shapes() {
        let engine = SandhiEngine::new();
        let pair = [("Deva", "Alaya")];

        let value = serde_json::to_value(
            &format_pairs(&engine, pair, ExampleFormat::Instruction).unwrap()[0],
        )
        .unwrap();
        assert_eq!(value["input"], "Deva + Alaya");
        assert_eq!(value["output"], "Devalaya");
        assert_eq!(value.as_object().unwrap().len(), 3);

        let value =
            serde_json::to_value(&format_pairs(&engine, pair, ExampleFormat::ChatMl).unwrap()[0])
                .unwrap();
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][1]["role"], "assistant");
        assert_eq!(value["messages"][1]["content"], "Devalaya");

        let value =
            serde_json::to_value(&format_pairs(&engine, pair, ExampleFormat::Dict).unwrap()[0])
                .unwrap();
        assert_eq!(value["rules_applied"], "sandhi");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_untagged_parse_picks_shape() {
        let chat: TrainingExample = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":"q"},{"role":"assistant","content":"a"}]}"#,
        )
        .unwrap();
        assert!(matches!(chat, TrainingExample::Chat { .. }));

        let record: TrainingExample = serde_json::from_str(
            r#"{"word1":"Deva","word2":"Alaya","combined":"Devalaya","rules_applied":"sandhi"}"#,
        )
        .unwrap();
        assert_eq!(record.combined(), Some("Devalaya"));
    }

    #[test]
    fn test_order_preserved_for_large_input() {
        let engine = SandhiEngine::new();
        let pairs = vec![("Deva", "Alaya"); 100];
        let examples = format_pairs(&engine, pairs, ExampleFormat::Instruction).unwrap();
        assert_eq!(examples.len(), 100);
        assert!(examples.iter().all(|e| e.combined() == Some("Devalaya")));
    }

    #[test]
    fn test_invalid_pair_aborts() {
        let engine = SandhiEngine::new();
        let result = format_pairs(
            &engine,
            [("Deva", "Alaya"), ("", "Ayana")],
            ExampleFormat::Dict,
        );
        assert!(matches!(result, Err(SandhiError::InvalidInput { .. })));
    }
}
