use std::io::{BufRead, Write};

use crate::error::SessionError;

/// What a prompt makes of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
	Accept(T),
	/// Print the diagnostic and ask again.
	Retry(String),
	Quit,
}

/// A question asked repeatedly until the answer is acceptable.
pub trait Prompt {
	type Output;

	/// Text shown before reading input, without a trailing newline.
	fn message(&self) -> &str;

	/// Interpret one trimmed line of input.
	fn interpret(&mut self, input: &str) -> Reply<Self::Output>;
}

/// The states a prompt moves through while the user answers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState<T> {
	AwaitingInput,
	InvalidRetry(String),
	Accepted(T),
	QuitRequested,
}

impl<T> From<Reply<T>> for PromptState<T> {
	fn from(reply: Reply<T>) -> Self {
		match reply {
			Reply::Accept(value) => Self::Accepted(value),
			Reply::Retry(diagnostic) => Self::InvalidRetry(diagnostic),
			Reply::Quit => Self::QuitRequested,
		}
	}
}

/// Whether the session goes on after a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<T> {
	Continue(T),
	Quit,
}

/// Drives prompts over an input and output stream.
pub struct Prompter<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	pub fn output(&mut self) -> &mut W {
		&mut self.output
	}

	pub fn into_output(self) -> W {
		self.output
	}

	/// Write `text` followed by a newline.
	pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), SessionError> {
		writeln!(self.output, "{text}").map_err(SessionError::Output)
	}

	/// Run `prompt` until it accepts an answer or the user quits.
	///
	/// End of input counts as a quit request.
	pub fn ask<P: Prompt>(&mut self, prompt: &mut P) -> Result<Flow<P::Output>, SessionError> {
		let mut state = PromptState::AwaitingInput;
		loop {
			state = match state {
				PromptState::AwaitingInput => match self.read_line(prompt.message())? {
					Some(line) => prompt.interpret(&line).into(),
					None => {
						tracing::debug!("input closed, treating as quit");
						PromptState::QuitRequested
					}
				},
				PromptState::InvalidRetry(diagnostic) => {
					self.say(&diagnostic)?;
					PromptState::AwaitingInput
				}
				PromptState::Accepted(value) => return Ok(Flow::Continue(value)),
				PromptState::QuitRequested => return Ok(Flow::Quit),
			};
		}
	}

	fn read_line(&mut self, message: &str) -> Result<Option<String>, SessionError> {
		write!(self.output, "{message}").map_err(SessionError::Output)?;
		self.output.flush().map_err(SessionError::Output)?;

		let mut line = String::new();
		let read = self
			.input
			.read_line(&mut line)
			.map_err(SessionError::Input)?;
		if read == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim().to_string()))
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	/// Accepts even numbers, quits on "stop".
	struct EvenPrompt;

	impl Prompt for EvenPrompt {
		type Output = u32;

		fn message(&self) -> &str {
			"number: "
		}

		fn interpret(&mut self, input: &str) -> Reply<u32> {
			if input == "stop" {
				return Reply::Quit;
			}
			match input.parse::<u32>() {
				Ok(value) if value % 2 == 0 => Reply::Accept(value),
				_ => Reply::Retry(format!("'{input}' is not even")),
			}
		}
	}

	fn run(input: &str) -> (Flow<u32>, String) {
		let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
		let flow = prompter.ask(&mut EvenPrompt).unwrap();
		(flow, String::from_utf8(prompter.into_output()).unwrap())
	}

	#[test]
	fn retries_until_accepted() {
		let (flow, output) = run("3\n  8  \n");
		assert_eq!(flow, Flow::Continue(8));
		assert_eq!(output, "number: '3' is not even\nnumber: ");
	}

	#[test]
	fn quit_reply_ends_the_prompt() {
		let (flow, _) = run("stop\n4\n");
		assert_eq!(flow, Flow::Quit);
	}

	#[test]
	fn end_of_input_is_a_quit() {
		let (flow, output) = run("5\n");
		assert_eq!(flow, Flow::Quit);
		assert_eq!(output, "number: '5' is not even\nnumber: ");
	}

	#[test]
	fn replies_map_onto_states() {
		assert_eq!(PromptState::from(Reply::Accept(1)), PromptState::Accepted(1));
		assert_eq!(
			PromptState::<u8>::from(Reply::Retry("again".into())),
			PromptState::InvalidRetry("again".into())
		);
		assert_eq!(PromptState::<u8>::from(Reply::Quit), PromptState::QuitRequested);
	}
}
