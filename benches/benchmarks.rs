use std::{rc::Rc, time::Duration};

use const_format::concatcp;
use criterion::{measurement::Measurement, BenchmarkGroup, Criterion};
use cryptogram_solver::{dictionary::Dictionary, solver::Solver};

/// The path of the directory containing the word lists.
#[inline]
#[must_use]
const fn dir() -> &'static str
{
	"dict"
}

/// The name of the word list file.
#[inline]
#[must_use]
const fn name() -> &'static str
{
	"words"
}

/// The path to the text file.
#[inline]
#[must_use]
const fn path_txt() -> &'static str
{
	concatcp!(dir(), "/", name(), ".txt")
}

/// The path to the binary dictionary.
#[inline]
#[must_use]
const fn path_dict() -> &'static str
{
	concatcp!(dir(), "/", name(), ".dict")
}

/// Benchmark reading a dictionary from a text file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_read_from_file<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("read_from_file", |b| {
		b.iter(|| Dictionary::read_from_file(path_txt()).unwrap());
	});
}

/// Benchmark deserializing a dictionary from a binary file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_deserialize_from_file<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("deserialize_from_file", |b| {
		b.iter(|| Dictionary::deserialize_from_file(path_dict()).unwrap());
	});
}

/// Benchmark solving a cryptogram.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_solver<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("solve", |b| {
		b.iter(|| {
			let dictionary = Rc::new(Dictionary::open(path_txt()).unwrap());
			let solver = Solver::new(dictionary);
			// "hello world" under a shift-by-one substitution.
			let keys = solver.solve("ifmmp xpsme");
			assert!(keys.is_some());
		});
	});
}

/// Run all benchmarks.
///
/// The main purpose of the benchmarking is to ensure that
/// [`deserialize_from_file`](Dictionary::deserialize_from_file) is faster
/// than [`read_from_file`](Dictionary::read_from_file).
fn main()
{
	// Ensure that both the text and binary files exist.
	let _ = Dictionary::open(path_txt()).unwrap();

	// Run the benchmarks.
	let mut criterion = Criterion::default().configure_from_args();
	let mut group = criterion.benchmark_group("benchmarks");
	group.measurement_time(Duration::from_secs(30));
	bench_read_from_file(&mut group);
	bench_deserialize_from_file(&mut group);
	bench_solver(&mut group);
	group.finish();

	// Generate the final summary.
	criterion.final_summary();
}
