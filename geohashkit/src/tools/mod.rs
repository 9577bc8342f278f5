pub mod adjacent;
pub mod bits;
pub mod bounds;
pub mod decode;
pub mod encode;
pub mod neighbors;
pub mod verify;

use anyhow::Result;
use serde::Serialize;

/// How a command prints its result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Output {
	Text,
	Json,
}

impl Output {
	pub fn from_flag(json: bool) -> Output {
		if json { Output::Json } else { Output::Text }
	}

	/// Picks the plain text or the JSON rendering of a result.
	pub fn render<T: Serialize + ?Sized>(&self, text: impl FnOnce() -> String, value: &T) -> Result<String> {
		Ok(match self {
			Output::Text => text(),
			Output::Json => serde_json::to_string(value)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn render() -> Result<()> {
		let value = vec![1, 2];
		assert_eq!(Output::Text.render(|| "1 2".to_string(), &value)?, "1 2");
		assert_eq!(Output::Json.render(|| unreachable!(), &value)?, "[1,2]");
		assert_eq!(Output::from_flag(true), Output::Json);
		Ok(())
	}
}
