//! Console participant: a human typing card lists
//!
//! Shows the denormalized board and hand, then loops reading a
//! whitespace-separated card list until it encodes to an action the mask
//! marks legal. An empty line plays the pass action. Invalid input of any
//! kind re-prompts; nothing a human types escapes the loop as an error.

use async_trait::async_trait;
use chefshat_core::{encode_cards, ActionVector, Agent, Card, Observation};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct ConsoleAgent {
    name: String,
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl Agent for ConsoleAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_action(&mut self, observation: &Observation) -> ActionVector {
        println!("This is the board: {:?}", observation.board_cards());
        println!("These are your cards: {:?}", observation.hand_cards());

        loop {
            println!("What cards would you like to play? (empty line passes)");
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                // Closed stdin cannot re-prompt.
                _ => return ActionVector::zeros(),
            };

            match choose_action(&line, observation) {
                Some(index) => return ActionVector::one_hot(index),
                None => println!("Sorry, this is an invalid move."),
            }
        }
    }
}

/// Resolve one input line to a legal action index.
///
/// Returns `None` when the line does not parse as cards, the cards do not
/// encode, or the mask marks the encoded action illegal.
fn choose_action(line: &str, observation: &Observation) -> Option<usize> {
    let cards = parse_cards(line)?;
    let index = encode_cards(&cards)?;
    observation.is_legal(index).then_some(index)
}

/// Parse a whitespace-separated card list. `None` when any token is not a
/// card rank.
fn parse_cards(line: &str) -> Option<Vec<Card>> {
    line.split_whitespace().map(|token| token.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chefshat_core::action::{DISCARD_JOKER, PASS};

    #[test]
    fn test_parse_cards() {
        assert_eq!(parse_cards("5 5 12"), Some(vec![5, 5, 12]));
        assert_eq!(parse_cards(""), Some(Vec::new()));
        assert_eq!(parse_cards("  7  "), Some(vec![7]));
        assert_eq!(parse_cards("five"), None);
        assert_eq!(parse_cards("5 300"), None);
    }

    #[test]
    fn test_choose_action_gates_on_the_mask() {
        let observation = Observation::from_parts(&[], &[5, 5, 12], &[30, 31, 199]).unwrap();

        assert_eq!(choose_action("5", &observation), Some(30));
        assert_eq!(choose_action("5 12", &observation), Some(31));
        assert_eq!(choose_action("", &observation), Some(PASS));
        // Encodes fine but the mask says no.
        assert_eq!(choose_action("5 5", &observation), None);
        // Does not encode at all.
        assert_eq!(choose_action("5 6", &observation), None);
        assert_eq!(choose_action("cheese", &observation), None);
    }

    #[test]
    fn test_choose_action_joker_discard() {
        let observation = Observation::from_parts(&[], &[12], &[DISCARD_JOKER]).unwrap();
        assert_eq!(choose_action("12", &observation), Some(DISCARD_JOKER));
        // Pass is illegal here, so an empty line re-prompts.
        assert_eq!(choose_action("", &observation), None);
    }
}
