//! k-fold cross validation over the rows of a [`Sample`].
use rand::prelude::*;
use colored::Colorize;
use crate::Sample;

use std::ops::Range;


const DEFAULT_N_FOLDS: usize = 5;
const DEFAULT_SEED: u64 = 1234;


/// An iterator over the `(train, test)` pairs of k-fold cross validation.
///
/// The rows are laid out in a fixed order,
/// which is the loading order unless [`CrossValidation::shuffle`] is called.
/// Over `n` rows and `k` folds,
/// fold `i` holds out the rows at positions `i * n / k .. (i + 1) * n / k`
/// of that order as the test sample.
/// The test samples of all folds partition the rows,
/// and their sizes differ by at most one.
///
/// # Example
/// ```no_run
/// use nominal_tree::prelude::*;
/// use nominal_tree::CrossValidation;
///
/// let sample = SampleReader::new()
///     .file("/path/to/weather.nominal.arff")
///     .target_feature("play")
///     .read()?;
/// let folds = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in folds {
///     let f = DecisionTreeBuilder::new(&train)
///         .criterion(Criterion::InfoGain)
///         .build()
///         .fit();
///
///     let train_acc = f.accuracy(&train);
///     let test_acc = f.accuracy(&test);
///     println!("[train: {train_acc}] [test: {test_acc}]");
/// }
/// # Ok::<(), nominal_tree::TreeError>(())
/// ```
pub struct CrossValidation<'a> {
    sample: &'a Sample,
    order: Vec<usize>,
    n_folds: usize,
    next_fold: usize,
    seed: u64,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Folds over `sample` in loading order,
    /// with `5` folds and seed `1234`.
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let (n_rows, _) = sample.shape();
        Self {
            sample,
            order: (0..n_rows).collect(),
            n_folds: DEFAULT_N_FOLDS,
            next_fold: 0,
            seed: DEFAULT_SEED,
            verbose: false,
        }
    }


    /// Set the number of folds.
    ///
    /// # Panics
    /// Panics if `n_folds < 2`.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 1, "Cross validation needs at least 2 folds.");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed used by [`CrossValidation::shuffle`].
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Print the train/test sizes of each fold to stdout.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Permute the row order with the seeded generator.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.order.shuffle(&mut rng);
        self
    }


    /// Positions in `self.order` held out by fold `fold`.
    #[inline]
    fn test_range(&self, fold: usize) -> Range<usize> {
        let n_rows = self.order.len();
        let start = fold * n_rows / self.n_folds;
        let end = (fold + 1) * n_rows / self.n_folds;
        start..end
    }


    fn report(&self, fold: usize, train: &Sample, test: &Sample) {
        let width = self.n_folds.to_string().len();
        println!(
            "{}    {}    {}",
            format!("  [fold {:>width$}/{}]", fold + 1, self.n_folds)
                .bold()
                .red(),
            format!("[TRAIN {:>6}]", train.shape().0).bold().green(),
            format!("[TEST {:>6}]", test.shape().0).bold().yellow(),
        );
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Sample, Sample);

    fn next(&mut self) -> Option<Self::Item> {
        let fold = self.next_fold;
        if fold >= self.n_folds { return None; }
        self.next_fold += 1;

        let Range { start, end } = self.test_range(fold);
        let (train, test) = self.sample.split(&self.order, start, end);

        if self.verbose {
            self.report(fold, &train, &test);
        }
        Some((train, test))
    }


    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.n_folds - self.next_fold.min(self.n_folds);
        (rest, Some(rest))
    }
}
