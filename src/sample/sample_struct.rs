use polars::prelude::*;
use rayon::prelude::*;

use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::collections::{HashMap, BTreeSet};

use super::feature::Feature;

/// A batch of examples: `n_sample` rows of `n_feature` numeric columns
/// together with the target labels aligned by row index.
///
/// A `Sample` with an empty target is *unlabelled*;
/// it can be passed to the predictors but not to the learners.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}

impl Sample {
    /// Construct a labelled sample from row-major features.
    /// Columns are named `Feat. [1]`, `Feat. [2]`, ...
    ///
    /// Panics if `rows` and `target` have different lengths
    /// or if the rows are ragged.
    pub fn from_rows<R>(rows: &[R], target: Vec<f64>) -> Self
        where R: AsRef<[f64]>,
    {
        assert_eq!(
            rows.len(), target.len(),
            "The number of rows ({}) differs from the number of labels ({})",
            rows.len(), target.len(),
        );
        let mut sample = Self::unlabelled(rows);
        sample.target = target;
        sample
    }

    /// Construct a sample without labels from row-major features.
    pub fn unlabelled<R>(rows: &[R]) -> Self
        where R: AsRef<[f64]>,
    {
        let n_sample = rows.len();
        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);

        let mut features = (1..=n_feature)
            .map(|i| Feature::new(format!("Feat. [{i}]")))
            .collect::<Vec<_>>();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(
                row.len(), n_feature,
                "Row {i} has {} features, expected {n_feature}",
                row.len(),
            );
            features.iter_mut()
                .zip(row)
                .for_each(|(feat, &x)| feat.append(x));
        }

        Self::from_columns(features, Vec::with_capacity(0), n_sample)
    }

    /// Construct a sample from feature columns and a target vector.
    /// Pass an empty `target` for an unlabelled sample.
    pub fn from_features(features: Vec<Feature>, target: Vec<f64>) -> Self {
        let n_sample = features.first()
            .map(|feat| feat.len())
            .unwrap_or(target.len());
        assert!(
            features.iter().all(|feat| feat.len() == n_sample),
            "All feature columns must have the same length"
        );
        assert!(
            target.is_empty() || target.len() == n_sample,
            "The number of rows ({n_sample}) differs \
             from the number of labels ({})",
            target.len(),
        );
        Self::from_columns(features, target, n_sample)
    }

    fn from_columns(
        features: Vec<Feature>,
        target: Vec<f64>,
        n_sample: usize,
    ) -> Self
    {
        let n_feature = features.len();
        let name_to_index = index_names(&features);
        Self { name_to_index, features, target, n_sample, n_feature, }
    }

    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Every column is cast to `f64`.
    /// Null entries are reported as `InvalidData`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let target = series_to_vals(&target)?;
        let features = data.get_columns()
            .par_iter()
            .map(|series| {
                let name = series.name().to_string();
                series_to_vals(series).map(|vals| Feature::from_vals(name, vals))
            })
            .collect::<io::Result<Vec<_>>>()?;

        let n_sample = data.height();
        if target.len() != n_sample {
            return Err(invalid_data(format!(
                "The data frame has {n_sample} rows \
                 but the target has {} values",
                target.len()
            )));
        }
        Ok(Self::from_columns(features, target, n_sample))
    }

    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist
    /// or contains a non-numerical value.
    ///
    /// If the CSV file does not have a header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    ///
    /// **Do not forget** to call [`Sample::set_target`] to
    /// assign the class label.
    pub(crate) fn from_csv<P>(file: P, has_header: bool)
        -> io::Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }

    /// Read a CSV from [`BufReader`].
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool)
        -> io::Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines();

        let mut features = Vec::new();
        if has_header {
            let line = lines.next()
                .ok_or_else(|| invalid_data("The file is empty".into()))??;
            features = line.split(',')
                .map(|name| Feature::new(name.trim()))
                .collect::<Vec<_>>();
        }
        let mut n_sample = 0_usize;

        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let xs = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| invalid_data(format!(
                            "The file contains non-numerical value. \
                             Got {x} in Line {i}"
                        )))
                })
                .collect::<io::Result<Vec<_>>>()?;

            // No header: construct a dummy one from the first row.
            if features.is_empty() {
                features = (1..=xs.len())
                    .map(|k| Feature::new(format!("Feat. [{k}]")))
                    .collect();
            }

            if xs.len() != features.len() {
                return Err(invalid_data(format!(
                    "Line {i} has {} columns, expected {}",
                    xs.len(), features.len()
                )));
            }
            features.iter_mut()
                .zip(xs)
                .for_each(|(feat, x)| feat.append(x));
            n_sample += 1;
        }

        Ok(Self::from_columns(features, Vec::with_capacity(0), n_sample))
    }

    /// Returns the slice of target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }

    /// Returns the class label of the `row`-th example.
    #[inline]
    pub fn label(&self, row: usize) -> i64 {
        self.target[row] as i64
    }

    /// Returns the target values as class labels.
    pub fn labels(&self) -> Vec<i64> {
        self.target.iter()
            .map(|&y| y as i64)
            .collect()
    }

    /// Returns the distinct class labels in ascending order.
    pub fn unique_labels(&self) -> Vec<i64> {
        self.target.iter()
            .map(|&y| y as i64)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns `true` if the target is assigned.
    pub fn is_labelled(&self) -> bool {
        self.n_sample == self.target.len()
    }

    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }

    /// Returns the `j`-th feature column.
    #[inline]
    pub fn feature(&self, j: usize) -> &Feature {
        &self.features[j]
    }

    /// Returns the value of the `j`-th feature at `row`.
    #[inline]
    pub fn value(&self, row: usize, j: usize) -> f64 {
        self.features[j][row]
    }

    /// Returns the feature named `name`, if any.
    pub fn feature_by_name<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.name_to_index.get(name.as_ref())
            .map(|&k| &self.features[k])
    }

    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .unwrap_or_else(|| {
                panic!("The target class \"{target}\" does not exist")
            });

        let target = self.features.remove(pos).into_vals();
        self.target = target;
        self.n_feature -= 1;
        self.name_to_index = index_names(&self.features);

        self
    }

    /// Replace the target by `target`.
    pub fn with_target(mut self, target: Vec<f64>) -> Self {
        assert_eq!(
            self.n_sample, target.len(),
            "The number of rows ({}) differs from the number of labels ({})",
            self.n_sample, target.len(),
        );
        self.target = target;
        self
    }

    /// Keep only the features named in `names`, in the given order.
    pub fn retain_features<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        let mut features = names.iter()
            .map(|name| {
                let name = name.as_ref();
                let k = *self.name_to_index.get(name)
                    .unwrap_or_else(|| {
                        panic!("The feature named `{name}` does not exist")
                    });
                self.features[k].clone()
            })
            .collect::<Vec<_>>();

        std::mem::swap(&mut self.features, &mut features);
        self.n_feature = self.features.len();
        self.name_to_index = index_names(&self.features);
        self
    }

    /// Keep the first `n` rows.
    pub fn head(self, n: usize) -> Self {
        if n >= self.n_sample { return self; }
        let indices = (0..n).collect::<Vec<_>>();
        self.resample(&indices)
    }

    /// Returns a new sample consisting of the rows at `indices`.
    /// Indices may repeat.
    pub fn resample(&self, indices: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| Feature::from_vals(feat.name(), feat.gather(indices)))
            .collect::<Vec<_>>();
        let target = if self.target.is_empty() {
            Vec::with_capacity(0)
        } else {
            indices.iter().map(|&i| self.target[i]).collect()
        };
        Self::from_columns(features, target, indices.len())
    }

    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }

    /// Set the feature (column) names.
    /// This method panics when the length of given feature names is
    /// not equals to the one of `self.features`.
    pub fn replace_names<S, T>(&mut self, names: T) -> Vec<String>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        let n_features = self.shape().1;
        let n_names = names.len();
        assert_eq!(
            n_names, n_features,
            "The number of names is \
            not equals to the one of `self.features.`"
        );

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = index_names(&self.features);
        old_names
    }

    /// Returns the features of the `idx`-th example.
    pub fn row(&self, idx: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>()
    }
}

fn index_names(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn series_to_vals(series: &Series) -> io::Result<Vec<f64>> {
    let name = series.name().to_string();
    let casted = series.cast(&DataType::Float64)
        .map_err(|e| invalid_data(format!("{name}: {e}")))?;
    let vals = casted.f64()
        .map_err(|e| invalid_data(format!("{name}: {e}")))?
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| invalid_data(format!(
            "The column `{name}` contains missing values"
        )))?;
    Ok(vals)
}
