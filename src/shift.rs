//! # Shift cipher
//!
//! Herein is the Vigenère shift cipher, a polyalphabetic companion to the
//! cryptogram solver: each letter of the input is rotated along the alphabet
//! by an amount drawn from a repeating key. Encoding and decoding are
//! stateless lookups with no search involved.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

////////////////////////////////////////////////////////////////////////////////
//                                Shift cipher.                               //
////////////////////////////////////////////////////////////////////////////////

/// The number of letters in the alphabet.
const ALPHABET_LEN: u8 = 26;

/// Encode the given text with the given repeating key. Characters outside
/// `A..=Z` are left unchanged and do not consume a key letter. The key is
/// upper-cased before use.
///
/// # Arguments
///
/// * `text` - The text to encode. Callers upper-case the portion they want
///   translated.
/// * `key` - The cipher key, a sequence of letters.
///
/// # Returns
///
/// The encoded text.
///
/// # Errors
///
/// * [`ShiftError::EmptyKey`] if the key is empty.
/// * [`ShiftError::InvalidKey`] if the key contains a character outside the
///   alphabet.
pub fn encode(text: &str, key: &str) -> Result<String, ShiftError>
{
	translate(text, key, false)
}

/// Decode text enciphered with [`encode`] under the same key. Characters
/// outside `A..=Z` are left unchanged and do not consume a key letter. The
/// key is upper-cased before use.
///
/// # Arguments
///
/// * `text` - The text to decode.
/// * `key` - The cipher key, a sequence of letters.
///
/// # Returns
///
/// The decoded text.
///
/// # Errors
///
/// * [`ShiftError::EmptyKey`] if the key is empty.
/// * [`ShiftError::InvalidKey`] if the key contains a character outside the
///   alphabet.
pub fn decode(text: &str, key: &str) -> Result<String, ShiftError>
{
	translate(text, key, true)
}

/// Translate `text` against the rotation tables selected by the repeating
/// key: the letter at translated position `i` uses the key letter at
/// `i mod key_length`. Decoding rotates by the complement of each key
/// letter's shift.
///
/// # Arguments
///
/// * `text` - The text to translate.
/// * `key` - The cipher key.
/// * `invert` - `false` to encode, `true` to decode.
///
/// # Returns
///
/// The translated text.
///
/// # Errors
///
/// Any [`ShiftError`] arising from key validation.
fn translate(text: &str, key: &str, invert: bool)
	-> Result<String, ShiftError>
{
	let shifts = key_shifts(key)?;
	let tables = shifts
		.iter()
		.map(|&shift| {
			let shift = if invert
			{
				(ALPHABET_LEN - shift) % ALPHABET_LEN
			}
			else
			{
				shift
			};
			table(shift)
		})
		.collect::<Vec<_>>();
	let mut translated = String::with_capacity(text.len());
	// The key advances only past letters that are actually translated.
	let mut position = 0;
	for c in text.chars()
	{
		if c.is_ascii_uppercase()
		{
			let table = &tables[position % tables.len()];
			translated.push(table[(c as u8 - b'A') as usize] as char);
			position += 1;
		}
		else
		{
			translated.push(c);
		}
	}
	Ok(translated)
}

/// Compute the rotation table for the given shift amount: entry `i` holds
/// the letter `shift` positions further along the alphabet, wrapping at `Z`.
/// The table is a pure function of the shift, computed on demand.
///
/// # Arguments
///
/// * `shift` - The shift amount, in `0..26`.
///
/// # Returns
///
/// The rotation table, indexed by alphabet position.
#[must_use]
fn table(shift: u8) -> [u8; ALPHABET_LEN as usize]
{
	let mut table = [0u8; ALPHABET_LEN as usize];
	for (i, entry) in table.iter_mut().enumerate()
	{
		*entry = b'A' + ((i as u8 + shift) % ALPHABET_LEN);
	}
	table
}

/// Get the shift amounts denoted by the key, one per letter, after
/// upper-casing.
///
/// # Arguments
///
/// * `key` - The cipher key.
///
/// # Returns
///
/// The shift amounts, each in `0..26`.
///
/// # Errors
///
/// * [`ShiftError::EmptyKey`] if the key is empty.
/// * [`ShiftError::InvalidKey`] if the key contains a character outside the
///   alphabet.
fn key_shifts(key: &str) -> Result<Vec<u8>, ShiftError>
{
	let key = key.to_ascii_uppercase();
	if key.is_empty()
	{
		return Err(ShiftError::EmptyKey)
	}
	key.chars()
		.map(|c| {
			if c.is_ascii_uppercase()
			{
				Ok(c as u8 - b'A')
			}
			else
			{
				Err(ShiftError::InvalidKey(c))
			}
		})
		.collect()
}

/// The complete enumeration of shift cipher errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftError
{
	/// The key is empty, so it denotes no shift at all.
	EmptyKey,

	/// The key contains a character outside the alphabet.
	InvalidKey(char)
}

impl Display for ShiftError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::EmptyKey => write!(f, "key is empty"),
			Self::InvalidKey(c) =>
				write!(f, "key contains a non-alphabetic character: {:?}", c)
		}
	}
}

impl Error for ShiftError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::shift::{decode, encode, table, ShiftError};

	/// The canonical Vigenère example.
	#[test]
	fn test_encode()
	{
		assert_eq!(
			encode("ATTACKATDAWN", "LEMON").unwrap(),
			"LXFOPVEFRNHR"
		);
	}

	/// Decoding inverts encoding under the same key.
	#[test]
	fn test_decode()
	{
		assert_eq!(
			decode("LXFOPVEFRNHR", "LEMON").unwrap(),
			"ATTACKATDAWN"
		);
		for key in ["A", "LEMON", "KEY", "ZZZ"]
		{
			let encoded = encode("THEQUICKBROWNFOX", key).unwrap();
			assert_eq!(decode(&encoded, key).unwrap(), "THEQUICKBROWNFOX");
		}
	}

	/// Characters outside the alphabet pass through untranslated and do not
	/// consume key letters.
	#[test]
	fn test_passthrough()
	{
		assert_eq!(
			encode("ATTACK AT DAWN!", "LEMON").unwrap(),
			"LXFOPV EF RNHR!"
		);
		// Lower-case text is not translated; callers upper-case first.
		assert_eq!(encode("attack", "LEMON").unwrap(), "attack");
	}

	/// The key is upper-cased before use, so case does not matter.
	#[test]
	fn test_key_case()
	{
		assert_eq!(
			encode("ATTACKATDAWN", "lemon").unwrap(),
			"LXFOPVEFRNHR"
		);
	}

	/// A key of `A` denotes a zero shift, leaving the text unchanged.
	#[test]
	fn test_identity_key()
	{
		assert_eq!(encode("HELLO", "A").unwrap(), "HELLO");
		assert_eq!(decode("HELLO", "A").unwrap(), "HELLO");
	}

	/// Malformed keys are rejected:
	///
	/// * [`ShiftError::EmptyKey`]
	/// * [`ShiftError::InvalidKey`]
	#[test]
	fn test_bad_keys()
	{
		assert_eq!(encode("HELLO", ""), Err(ShiftError::EmptyKey));
		assert_eq!(encode("HELLO", "L3M"), Err(ShiftError::InvalidKey('3')));
		assert_eq!(decode("HELLO", "a b"), Err(ShiftError::InvalidKey(' ')));
	}

	/// Rotation tables are pure functions of the shift amount.
	#[test]
	fn test_table()
	{
		let identity = table(0);
		assert_eq!(identity[0], b'A');
		assert_eq!(identity[25], b'Z');
		let shifted = table(1);
		assert_eq!(shifted[0], b'B');
		assert_eq!(shifted[25], b'A');
	}
}
