//! # Patterns
//!
//! Herein is the shape code ("pattern") of a word. Words that repeat their
//! letters in the same relative positions share a pattern, e.g. `banana` and
//! `cococo` are both `123232`. Patterns make it possible to compare
//! ciphertext against plaintext without knowing any actual letters.

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter}
};

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                 Patterns.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The pattern of a word: one code per character, where equal codes denote
/// equal characters and the first occurrence of each distinct character
/// receives the next unused code, starting at 1. Two words can decode to one
/// another under some substitution iff their patterns are equal, which also
/// forces them to be the same length.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct Pattern(Vec<u8>);

impl Pattern
{
	/// Compute the pattern of the given word. The empty word has the empty
	/// pattern.
	///
	/// # Arguments
	///
	/// * `word` - The word to encode. Callers normalize to lower case first;
	///   the encoder itself treats characters opaquely.
	///
	/// # Returns
	///
	/// The pattern of the word.
	pub fn of(word: &str) -> Self
	{
		let mut codes = Vec::with_capacity(word.len());
		let mut assigned = HashMap::new();
		let mut next_code = 1u8;
		for c in word.chars()
		{
			let code = *assigned.entry(c).or_insert_with(|| {
				let code = next_code;
				next_code += 1;
				code
			});
			codes.push(code);
		}
		Self(codes)
	}

	/// Get the number of codes in the pattern, which is always the number of
	/// characters in the encoded word.
	///
	/// # Returns
	///
	/// The number of codes.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Check if the pattern is empty.
	///
	/// # Returns
	///
	/// `true` if the pattern is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Get the codes of the pattern.
	///
	/// # Returns
	///
	/// The codes, one per character of the encoded word.
	#[inline]
	#[must_use]
	pub fn codes(&self) -> &[u8] { &self.0 }
}

impl Display for Pattern
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for code in &self.0
		{
			write!(f, "{}", code)?;
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
