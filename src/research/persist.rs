//! Saves and loads fitted models as JSON files.
use serde::{Serialize, de::DeserializeOwned};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;


/// Writes `model` to `path` as pretty-printed JSON.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
/// use minitrees::research::{save_json, load_json};
///
/// let sample = Sample::from_rows(
///     &[[0.0], [1.0], [2.0], [3.0]],
///     vec![0.0, 0.0, 1.0, 1.0],
/// );
/// let tree = DecisionTreeBuilder::new(&sample)
///     .min_size(1)
///     .build()
///     .fit(&sample);
///
/// save_json(&tree, "tree.json").unwrap();
/// let loaded: DecisionTreeClassifier = load_json("tree.json").unwrap();
/// assert_eq!(tree, loaded);
/// ```
pub fn save_json<T, P>(model: &T, path: P) -> io::Result<()>
    where T: Serialize + ?Sized,
          P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, model)?;
    writer.flush()
}


/// Reads a model written by [`save_json`].
/// A file that does not describe a `T` is reported as `InvalidData`.
pub fn load_json<T, P>(path: P) -> io::Result<T>
    where T: DeserializeOwned,
          P: AsRef<Path>,
{
    let file = File::open(path)?;
    let model = serde_json::from_reader(BufReader::new(file))?;
    Ok(model)
}
