//! # Cryptogram Solver
//!
//! A cryptogram is a puzzle in which a short text has been enciphered with a
//! monoalphabetic substitution: every occurrence of a letter is replaced by
//! the same substitute throughout. Because the substitution preserves the
//! repetition structure of each word, a dictionary narrows the possibilities
//! dramatically: only words that repeat their letters in the same positions
//! as a ciphertext word can be its decryption.
//!
//! This program searches a word list for every internally-consistent
//! substitution key under which each ciphertext word decodes to a real word,
//! and prints one decoded phrase per key. Via command line options, the user
//! can specify the word list to solve against. A companion Vigenère shift
//! cipher is available behind the `encode` and `decode` subcommands.

use std::{
	path::{Path, PathBuf},
	rc::Rc
};

use clap::{Parser, Subcommand};
use log::{debug, trace};

use cryptogram_solver::{
	dictionary::Dictionary,
	key::Key,
	shift,
	solver::Solver
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for solving substitution cryptograms.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0")]
struct Opts
{
	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Solve a substitution cryptogram, printing one decoded phrase per
	/// consistent key.
	Solve
	{
		/// The ciphertext words to solve for.
		#[arg(required = true)]
		cipher_words: Vec<String>,

		/// The path to the word list to solve against, one word per line.
		#[arg(short, long, default_value = "/usr/share/dict/words")]
		dictionary: PathBuf
	},

	/// Just generate the binary dictionary cache and exit.
	Generate
	{
		/// The path to the word list to cache, one word per line.
		#[arg(short, long, default_value = "/usr/share/dict/words")]
		dictionary: PathBuf
	},

	/// Encode text with the Vigenère shift cipher.
	Encode
	{
		/// The words to encode.
		#[arg(required = true)]
		words: Vec<String>,

		/// The cipher key, a sequence of letters.
		#[arg(short, long)]
		key: String
	},

	/// Decode text enciphered with the Vigenère shift cipher.
	Decode
	{
		/// The words to decode.
		#[arg(required = true)]
		words: Vec<String>,

		/// The cipher key, a sequence of letters.
		#[arg(short, long)]
		key: String
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);
	match opts.command
	{
		Command::Solve { cipher_words, dictionary } =>
		{
			let dictionary = open_dictionary(&dictionary);
			let phrase = cipher_words.join(" ").to_lowercase();
			let solver = Solver::new(Rc::new(dictionary));
			match solver.solve(&phrase)
			{
				Some(keys) => print_solutions(&phrase, &keys),
				None => println!("No solutions found")
			}
		},
		Command::Generate { dictionary } =>
		{
			let _ = open_dictionary(&dictionary);
			trace!("Exiting after generating binary dictionary");
		},
		Command::Encode { words, key } =>
		{
			let text = words.join(" ").to_uppercase();
			let encoded = shift::encode(&text, &key)
				.unwrap_or_else(|e| panic!("Failed to encode: {}", e));
			println!("{}", encoded);
		},
		Command::Decode { words, key } =>
		{
			let text = words.join(" ").to_uppercase();
			let decoded = shift::decode(&text, &key)
				.unwrap_or_else(|e| panic!("Failed to decode: {}", e));
			println!("{}", decoded);
		}
	}
}

/// Open the word list at the given path, creating the binary dictionary
/// cache if necessary.
///
/// # Arguments
///
/// * `path` - The path to the word list.
///
/// # Returns
///
/// The dictionary.
fn open_dictionary(path: &Path) -> Dictionary
{
	Dictionary::open(path).unwrap_or_else(|e|
		panic!("Failed to open dictionary: {}: {}", path.display(), e)
	)
}

/// Print one decoded phrase per solution key.
///
/// # Arguments
///
/// * `phrase` - The cipher phrase.
/// * `keys` - The solution keys.
fn print_solutions(phrase: &str, keys: &[Key])
{
	for key in keys
	{
		println!("{}", key.render(phrase));
	}
}
