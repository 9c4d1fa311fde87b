use std::path::Path;
use std::io;

use super::sample_struct::Sample;

/// A struct that reads a CSV file into [`Sample`].
///
/// # Example
/// ```no_run
/// use minitrees::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/data.csv")
///     .has_header(true)
///     .target_feature("Multi")
///     .features(&["X1", "X2"])
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
    features: Vec<String>,
}

impl<P, S> SampleReader<P, S> {
    /// Whether the first row holds column names.
    /// Default is `false`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }

    /// Keep only the given columns as features.
    /// By default, every column except the target is a feature.
    pub fn features<T: AsRef<str>>(mut self, names: &[T]) -> Self {
        self.features = names.iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self
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
    /// The column read as the class label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file into a [`Sample`].
    /// A missing target or feature column is an `InvalidInput` error.
    /// If no target column is given, the returned sample is unlabelled.
    pub fn read(self) -> io::Result<Sample> {
        let file = self.file
            .ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidInput,
                "The file name for csv is not set",
            ))?;

        let mut sample = Sample::from_csv(file.as_ref(), self.has_header)?;
        if let Some(target) = self.target {
            let target = target.as_ref();
            if sample.feature_by_name(target).is_none() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("The target column `{target}` does not exist"),
                ));
            }
            sample = sample.set_target(target);
        }

        if !self.features.is_empty() {
            let missing = self.features.iter()
                .find(|name| sample.feature_by_name(name).is_none());
            if let Some(name) = missing {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("The feature `{name}` does not exist"),
                ));
            }
            sample = sample.retain_features(&self.features);
        }
        Ok(sample)
    }
}
