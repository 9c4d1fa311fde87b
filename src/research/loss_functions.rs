use crate::{Classifier, Sample};


/// Zero-one loss, the fraction of rows of `sample`
/// whose label `f` does not predict.
pub fn zero_one_loss<F>(sample: &Sample, f: &F) -> f64
    where F: Classifier + ?Sized,
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return 0f64; }

    let n_wrong = f.predict_all(sample)
        .into_iter()
        .zip(sample.target())
        .filter(|&(p, &y)| p != y as i64)
        .count();
    n_wrong as f64 / n_sample as f64
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(i64);

    impl Classifier for Constant {
        fn predict(&self, _sample: &Sample, _row: usize) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_zero_one_loss() {
        let sample = Sample::from_rows(
            &[[0.0], [1.0], [2.0], [3.0]],
            vec![1.0, 1.0, 1.0, 0.0],
        );
        assert_eq!(zero_one_loss(&sample, &Constant(1)), 0.25);
        assert_eq!(zero_one_loss(&sample, &Constant(0)), 0.75);
    }
}
