//! # Solver
//!
//! Herein is the solver for substitution cryptograms. The search is a
//! recursive backtracking walk over the candidate words of each ciphertext
//! word: assignments that contradict the partial key built so far are pruned
//! immediately, and every key that survives the whole phrase is collected.

use std::{collections::BTreeMap, rc::Rc};

use log::{debug, trace};

use crate::{dictionary::Dictionary, key::Key};

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The cryptogram solver. Holds the dictionary used to produce the candidate
/// words for each ciphertext word.
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver
{
	/// The dictionary to use for solving the cryptogram.
	dictionary: Rc<Dictionary>
}

impl Solver
{
	/// Construct a new solver for the given dictionary.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary to use for solving cryptograms.
	///
	/// # Returns
	///
	/// A new solver for the given dictionary.
	#[inline]
	pub fn new(dictionary: Rc<Dictionary>) -> Self { Self { dictionary } }

	/// Find every substitution key under which the complete cipher phrase
	/// decodes to dictionary words.
	///
	/// # Arguments
	///
	/// * `phrase` - The cipher phrase, a whitespace-separated sequence of
	///   ciphertext words. Case-insensitive.
	///
	/// # Returns
	///
	/// The consistent keys, or `None` if the search exhausted every
	/// combination without finding one. The outcomes are deliberately
	/// distinct: an empty phrase answers `Some` with the single empty key,
	/// while a phrase admitting no consistent assignment answers `None`. The
	/// list may contain duplicate keys when different candidate words imply
	/// the same mappings.
	#[must_use]
	pub fn solve(&self, phrase: &str) -> Option<Vec<Key>>
	{
		let candidates = self.dictionary.match_phrase(phrase);
		debug!("{} ciphertext words to assign", candidates.len());
		let keys = search(&candidates, &[Key::new()]);
		debug!(
			"search finished: {} keys",
			keys.as_ref().map(|keys| keys.len()).unwrap_or(0)
		);
		keys
	}
}

/// Find every key that consistently assigns a candidate word to each
/// remaining ciphertext word, starting from the keys in `frontier`.
///
/// Each level of the recursion consumes one ciphertext word: every candidate
/// of that word that is compatible with a frontier key extends the key and
/// descends with the reduced map and a frontier of just that extension. Keys
/// surface from the base case only once every word has been consumed without
/// contradiction.
///
/// # Arguments
///
/// * `remaining` - The ciphertext words still to be assigned, each with its
///   candidate set.
/// * `frontier` - The partial keys to extend.
///
/// # Returns
///
/// The keys accumulated across every branch, or `None` if no branch produced
/// any. `None` distinguishes "explored everything, nothing consistent" from a
/// branch that merely contributed nothing to its siblings.
#[must_use]
pub fn search(
	remaining: &BTreeMap<String, Vec<String>>,
	frontier: &[Key]
) -> Option<Vec<Key>>
{
	let (word, candidates) = match remaining.iter().next()
	{
		Some(entry) => entry,
		// Every consumed word is already consistent with the frontier, so
		// the frontier is the answer.
		None => return Some(frontier.to_vec())
	};
	// Which word is consumed at this level has no effect on correctness,
	// only on traversal order.
	let mut reduced = remaining.clone();
	reduced.remove(word);
	let mut found = Vec::new();
	for plain in candidates
	{
		for key in frontier
		{
			if key.is_compatible(word, plain)
			{
				trace!("considering: {} = {} under {}", word, plain, key);
				let extended = key.extend(word, plain);
				if let Some(keys) = search(&reduced, &[extended])
				{
					found.extend(keys);
				}
			}
		}
	}
	if found.is_empty()
	{
		None
	}
	else
	{
		Some(found)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
