//! # Dictionary
//!
//! Herein is support for dictionary construction and manipulation. All
//! runtime operations are performed against a [`Dictionary`], which indexes
//! its words by [`Pattern`] so that every word sharing a ciphertext word's
//! shape is found with a single lookup.

use std::{
	collections::{BTreeMap, HashMap},
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::{Path, PathBuf}
};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary maps each [`Pattern`] to the words that share it, in word
/// list order. Words are normalized on entry: trimmed of surrounding
/// whitespace and lower-cased, with blank lines skipped.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(HashMap<Pattern, Vec<String>>);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Check if the dictionary contains the given word.
	///
	/// # Arguments
	///
	/// * `word` - The word to check. Normalized like dictionary entries.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[must_use]
	pub fn contains(&self, word: &str) -> bool
	{
		let word = word.trim().to_lowercase();
		self.0
			.get(&Pattern::of(&word))
			.map(|bucket| bucket.iter().any(|w| w == &word))
			.unwrap_or(false)
	}

	/// Populate the dictionary with the given words.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let word = word.as_ref().trim().to_lowercase();
			if !word.is_empty()
			{
				self.0.entry(Pattern::of(&word)).or_default().push(word);
			}
		}
	}

	/// Find every dictionary word that shares the given word's pattern.
	///
	/// # Arguments
	///
	/// * `word` - The word to match, typically a ciphertext word.
	///   Lower-cased before its pattern is computed.
	///
	/// # Returns
	///
	/// The candidate words, in word list order. Empty if no dictionary word
	/// shares the pattern.
	#[must_use]
	pub fn matches(&self, word: &str) -> Vec<String>
	{
		let word = word.to_lowercase();
		self.0.get(&Pattern::of(&word)).cloned().unwrap_or_default()
	}

	/// Find the candidates for every word of a cipher phrase.
	///
	/// # Arguments
	///
	/// * `phrase` - The cipher phrase, a whitespace-separated sequence of
	///   ciphertext words.
	///
	/// # Returns
	///
	/// A map from each distinct lower-cased ciphertext word to its candidate
	/// set. Duplicate phrase words collapse into one entry, as they
	/// necessarily share a candidate set. A word with no candidates maps to
	/// an empty set, not an error.
	#[must_use]
	pub fn match_phrase(&self, phrase: &str) -> BTreeMap<String, Vec<String>>
	{
		phrase
			.split_whitespace()
			.map(|word| {
				let word = word.to_lowercase();
				let candidates = self.matches(&word);
				trace!("{} candidates for {}", candidates.len(), word);
				(word, candidates)
			})
			.collect()
	}

	/// Open the word list at the given path. If a binary sibling of the word
	/// list (same file name, `dict` extension) exists _and_ is newer than the
	/// text file, it will be read; otherwise, the text file will be read and
	/// a binary sibling will be created (to optimize future reads).
	///
	/// # Arguments
	///
	/// * `path` - The path to the word list.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn open<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let txt_path = path.as_ref();
		let dict_path = binary_sibling(txt_path);
		// The possibility of I/O errors makes this rather messy,
		// unfortunately, but the gist is to compare the modification times of
		// the binary and text files in pursuit of using the binary dictionary
		// only if it's newer than the text dictionary. If anything goes
		// wrong, we fall back to reading the text file. Note that we don't
		// have to explicitly check for the existence of the binary dictionary
		// file, as the `metadata` call will fail if it doesn't exist.
		if dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false)
		{
			let dictionary = Self::deserialize_from_file(&dict_path);
			trace!("Read binary dictionary: {}", dict_path.display());
			dictionary
		}
		else
		{
			let dictionary = Self::read_from_file(txt_path)?;
			trace!("Read text dictionary: {}", txt_path.display());
			match dictionary.serialize_to_file(&dict_path)
			{
				Ok(_) =>
				{
					trace!("Wrote binary dictionary: {}", dict_path.display())
				},
				Err(e) => warn!(
					"Failed to write binary dictionary: {}: {}",
					dict_path.display(),
					e
				)
			}
			Ok(dictionary)
		}
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary = bincode::deserialize(&content)
			.map_err(|_e| ErrorKind::InvalidData)?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file. The dictionary is
	/// serialized in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or written, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&content)?;
		Ok(())
	}
}

/// Get the path of the binary dictionary that shadows the given word list:
/// the same file name with the `dict` extension.
///
/// # Arguments
///
/// * `path` - The path to the word list.
///
/// # Returns
///
/// The path to the binary sibling.
#[must_use]
fn binary_sibling(path: &Path) -> PathBuf
{
	path.with_extension("dict")
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::io::Write;

	use tempfile::{NamedTempFile, TempDir};

	use crate::dictionary::Dictionary;

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert!(!dictionary.contains("hello"));
		assert!(!dictionary.contains("world"));
		dictionary.populate(&["hello", "world"]);
		assert!(!dictionary.is_empty());
		assert!(dictionary.contains("hello"));
		assert!(dictionary.contains("world"));
	}

	/// Words are normalized on entry: trimmed, lower-cased, blanks skipped.
	#[test]
	fn test_normalization()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["  Hello ", "", "   ", "WORLD"]);
		assert!(dictionary.contains("hello"));
		assert!(dictionary.contains("world"));
		assert!(!dictionary.contains(""));
	}

	/// Candidate lookup admits exactly the words with the same repetition
	/// structure:
	///
	/// * [`Dictionary::matches`]
	#[test]
	fn test_matches()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["dog", "cat", "aba"]);
		assert_eq!(dictionary.matches("xyx"), vec!["aba".to_string()]);
		assert_eq!(
			dictionary.matches("xyz"),
			vec!["dog".to_string(), "cat".to_string()]
		);
		assert_eq!(dictionary.matches("qq"), Vec::<String>::new());
	}

	/// Phrase matching maps each distinct ciphertext word to its candidate
	/// set, with empty sets for unmatched words:
	///
	/// * [`Dictionary::match_phrase`]
	#[test]
	fn test_match_phrase()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["dog", "cat", "aba"]);
		let candidates = dictionary.match_phrase("XYX rot zz XYX");
		assert_eq!(candidates.len(), 3);
		assert_eq!(candidates["xyx"], vec!["aba".to_string()]);
		assert_eq!(
			candidates["rot"],
			vec!["dog".to_string(), "cat".to_string()]
		);
		assert_eq!(candidates["zz"], Vec::<String>::new());
	}

	/// Test reading a dictionary from a file:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "hello\n  World\n\naba").unwrap();
		let dictionary = Dictionary::read_from_file(file.path()).unwrap();
		assert!(dictionary.contains("hello"));
		assert!(dictionary.contains("world"));
		assert!(dictionary.contains("aba"));
		assert_eq!(dictionary.matches("xyx"), vec!["aba".to_string()]);
	}

	/// Test serializing and deserializing a dictionary:
	///
	/// * [`Dictionary::serialize_to_file`]
	/// * [`Dictionary::deserialize_from_file`]
	#[test]
	fn test_serialize_to_file()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["hello", "world", "aba", "dog", "cat"]);
		let file = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(file.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(file.path()).unwrap();
		assert_eq!(dictionary, deserialized);
	}

	/// Opening a text word list produces the binary sibling alongside it:
	///
	/// * [`Dictionary::open`]
	#[test]
	fn test_open()
	{
		let dir = TempDir::new().unwrap();
		let txt_path = dir.path().join("words.txt");
		std::fs::write(&txt_path, "hello\nworld\naba\n").unwrap();
		let dictionary = Dictionary::open(&txt_path).unwrap();
		assert!(dictionary.contains("hello"));
		assert!(dir.path().join("words.dict").exists());
		// A second open answers the same dictionary, whichever file backs it.
		let reopened = Dictionary::open(&txt_path).unwrap();
		assert_eq!(dictionary, reopened);
	}
}
