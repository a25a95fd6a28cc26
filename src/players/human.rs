use super::Player;
use crate::gameplay::Move;
use crate::gameplay::MoveError;
use dialoguer::Input;

/// Interactive player at the terminal. Does its remembering in its head.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    /// Full move names in any case, or their first letter.
    pub fn parse(input: &str) -> Result<Move, MoveError> {
        match input.trim().to_lowercase().as_str() {
            "r" => Ok(Move::Rock),
            "p" => Ok(Move::Paper),
            "s" => Ok(Move::Scissors),
            other => Move::try_from(other).map_err(|_| MoveError::Invalid(input.trim().to_string())),
        }
    }
}

impl Player for Human {
    fn play(&mut self) -> anyhow::Result<Move> {
        let input = Input::<String>::new()
            .with_prompt("(R)ock, (P)aper, or (S)cissors?")
            .validate_with(|i: &String| -> Result<(), String> {
                Self::parse(i)
                    .map(|_| ())
                    .map_err(|_| format!("Invalid choice {:?} (Please enter 'R', 'P', or 'S'.)", i.trim()))
            })
            .report(false)
            .interact_text()?;
        Ok(Self::parse(&input)?)
    }
    fn name(&self) -> String {
        String::from("Human")
    }
}
