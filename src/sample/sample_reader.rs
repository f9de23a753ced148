use std::path::Path;

use crate::error::Result;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a file
/// in the attribute-declaration format to [`Sample`].
/// # Example
/// The following code is a simple example to read a file.
/// ```no_run
/// use nominal_tree::prelude::*;
///
/// let filename = "/path/to/weather.nominal.arff";
/// let sample = SampleReader::new()
///     .file(filename)
///     .target_feature("play")
///     .read()?;
/// # Ok::<(), nominal_tree::TreeError>(())
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            target: None,
        }
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the attribute name that is used for target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    ///
    /// # Panics
    /// Panics if the file or the target attribute is not set.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .expect("The file name is not set. Use `SampleReader::file`.");
        let target = self.target
            .expect(
                "Target (class) attribute is not specified. \
                Use `SampleReader::target_feature`."
            );

        Sample::from_arff(file, target)
    }
}
