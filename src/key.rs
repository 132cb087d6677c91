//! # Substitution keys
//!
//! Herein is the substitution key: a partial mapping from ciphertext letters
//! to plaintext letters. Keys are immutable; the solver derives new keys by
//! copy-and-extend, so sibling branches of the search never observe each
//! other's state and no undo logic is needed.

use std::{
	collections::BTreeMap,
	fmt::{self, Display, Formatter}
};

////////////////////////////////////////////////////////////////////////////////
//                             Substitution keys.                             //
////////////////////////////////////////////////////////////////////////////////

/// A partial substitution key. Each ciphertext letter maps to at most one
/// plaintext letter. The mapping is not required to be injective: two
/// ciphertext letters may map to the same plaintext letter, so keys that a
/// strict substitution cipher would reject can still be reported. Backed by
/// a [`BTreeMap`] so that iteration and display order are deterministic.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct Key(BTreeMap<char, char>);

impl Key
{
	/// Construct an empty key. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty key.
	#[inline]
	pub fn new() -> Self { Self(BTreeMap::new()) }

	/// Check if the key is empty.
	///
	/// # Returns
	///
	/// `true` if the key maps no letters, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Get the number of ciphertext letters mapped by the key.
	///
	/// # Returns
	///
	/// The number of mapped letters.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Look up the plaintext letter for the given ciphertext letter.
	///
	/// # Arguments
	///
	/// * `crypt` - The ciphertext letter.
	///
	/// # Returns
	///
	/// The plaintext letter, or `None` if the ciphertext letter is unmapped.
	#[inline]
	#[must_use]
	pub fn get(&self, crypt: char) -> Option<char>
	{
		self.0.get(&crypt).copied()
	}

	/// Check whether reading `crypt` as `plain` is compatible with this key.
	/// At every position whose ciphertext letter is already mapped, the
	/// plaintext letter must agree with the mapping; the check fails on the
	/// first disagreement. Unmapped positions impose no constraint here; they
	/// are bound by [`extend`](Self::extend). Both words must be the same
	/// length, which pattern matching guarantees upstream.
	///
	/// # Arguments
	///
	/// * `crypt` - The ciphertext word.
	/// * `plain` - The candidate plaintext word.
	///
	/// # Returns
	///
	/// `true` if no mapped position disagrees, `false` otherwise.
	#[must_use]
	pub fn is_compatible(&self, crypt: &str, plain: &str) -> bool
	{
		crypt
			.chars()
			.zip(plain.chars())
			.all(|(c, p)| match self.0.get(&c)
			{
				Some(&mapped) => mapped == p,
				None => true
			})
	}

	/// Produce a new key equal to this key plus a pairing for every position
	/// whose ciphertext letter is not yet mapped. Already-mapped letters are
	/// authoritative and left untouched; no conflict is detected here, so
	/// callers must have verified the assignment with
	/// [`is_compatible`](Self::is_compatible) first. The receiver is not
	/// mutated.
	///
	/// # Arguments
	///
	/// * `crypt` - The ciphertext word.
	/// * `plain` - The plaintext word assigned to it.
	///
	/// # Returns
	///
	/// The extended key.
	pub fn extend(&self, crypt: &str, plain: &str) -> Self
	{
		let mut extended = self.0.clone();
		for (c, p) in crypt.chars().zip(plain.chars())
		{
			extended.entry(c).or_insert(p);
		}
		Self(extended)
	}

	/// Substitute every mapped ciphertext letter in `text` with its plaintext
	/// letter. Unmapped characters, including whitespace and punctuation, are
	/// left unchanged.
	///
	/// # Arguments
	///
	/// * `text` - The text to decode, typically the original cipher phrase.
	///
	/// # Returns
	///
	/// The decoded text.
	#[must_use]
	pub fn render(&self, text: &str) -> String
	{
		text.chars()
			.map(|c| self.0.get(&c).copied().unwrap_or(c))
			.collect()
	}
}

impl Display for Key
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{{")?;
		for (i, (c, p)) in self.0.iter().enumerate()
		{
			if i > 0
			{
				write!(f, ", ")?;
			}
			write!(f, "{}->{}", c, p)?;
		}
		write!(f, "}}")
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
