//! Decision maps of 2-dimensional classifiers and their SVG rendering.
use plotters::prelude::*;
use plotters::coord::Shift;

use crate::{Classifier, Sample};

use std::error::Error;
use std::path::Path;


const PANEL_SIZE: u32 = 480;
const POINT_SIZE: i32 = 4;
const CELL_OPACITY: f64 = 0.3;


/// The predicted class over a `resolution x resolution` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMap {
    xs: Vec<f64>,
    ys: Vec<f64>,
    classes: Vec<i64>,
}


impl DecisionMap {
    /// Grid coordinates along the first feature.
    pub fn xs(&self) -> &[f64] {
        &self.xs[..]
    }


    /// Grid coordinates along the second feature.
    pub fn ys(&self) -> &[f64] {
        &self.ys[..]
    }


    /// Predicted class at `(xs[ix], ys[iy])`.
    pub fn class_at(&self, ix: usize, iy: usize) -> i64 {
        self.classes[iy * self.xs.len() + ix]
    }


    /// Iterates over the grid points as `(x, y, class)`.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, i64)> + '_ {
        let n_x = self.xs.len();
        self.classes.iter()
            .enumerate()
            .map(move |(k, &class)| (self.xs[k % n_x], self.ys[k / n_x], class))
    }


    /// Width and height of a grid cell.
    pub fn cell_size(&self) -> (f64, f64) {
        (step(&self.xs), step(&self.ys))
    }
}


/// Predicts every point of a `resolution x resolution` grid
/// spanning the bounding box of `sample`.
///
/// `sample` must have exactly two features.
pub fn decision_map<C>(sample: &Sample, classifier: &C, resolution: usize)
    -> DecisionMap
    where C: Classifier + ?Sized,
{
    let (n_sample, n_feature) = sample.shape();
    assert!(n_sample > 0, "Cannot map an empty sample");
    assert_eq!(
        n_feature, 2,
        "Decision maps are drawn for 2 features, got {n_feature}"
    );
    assert!(resolution >= 2, "The grid resolution must be at least 2");

    let xs = linspace(sample, 0, resolution);
    let ys = linspace(sample, 1, resolution);

    let rows = ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| [x, y]))
        .collect::<Vec<_>>();
    let grid = Sample::unlabelled(&rows);
    let classes = classifier.predict_all(&grid);

    DecisionMap { xs, ys, classes, }
}


fn linspace(sample: &Sample, j: usize, resolution: usize) -> Vec<f64> {
    let (mut lo, mut hi) = sample.feature(j)
        .min_max()
        .unwrap_or((0f64, 1f64));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let step = (hi - lo) / (resolution - 1) as f64;
    (0..resolution).map(|k| lo + step * k as f64)
        .collect()
}


fn step(points: &[f64]) -> f64 {
    match points {
        [a, b, ..] => b - a,
        _ => 1f64,
    }
}


/// A titled decision map with the training points drawn on top.
pub struct Panel<'a> {
    /// Caption of the panel.
    pub title: String,
    /// Background of the panel.
    pub map: DecisionMap,
    /// Labelled points drawn over the map.
    pub sample: &'a Sample,
}


/// Draws `panels` on a grid with `n_cols` columns
/// and writes it to `path` as an SVG file.
pub fn draw_panels<P>(path: P, panels: &[Panel<'_>], n_cols: usize)
    -> Result<(), Box<dyn Error>>
    where P: AsRef<Path>,
{
    assert!(n_cols > 0, "At least one column is required");
    let n_rows = ((panels.len() + n_cols - 1) / n_cols).max(1);

    let size = (n_cols as u32 * PANEL_SIZE, n_rows as u32 * PANEL_SIZE);
    let root = SVGBackend::new(path.as_ref(), size)
        .into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((n_rows, n_cols));
    for (panel, area) in panels.iter().zip(&areas) {
        draw_panel(area, panel)?;
    }

    root.present()?;
    Ok(())
}


fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    panel: &Panel<'_>,
) -> Result<(), Box<dyn Error>>
{
    let map = &panel.map;
    let (dx, dy) = map.cell_size();
    let (x_lo, x_hi) = bounds(map.xs(), dx);
    let (y_lo, y_hi) = bounds(map.ys(), dy);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart.configure_mesh()
        .disable_mesh()
        .draw()?;

    chart.draw_series(map.cells().map(|(x, y, class)| {
        let corners = [
            (x - dx / 2f64, y - dy / 2f64),
            (x + dx / 2f64, y + dy / 2f64),
        ];
        Rectangle::new(corners, color_of(class).mix(CELL_OPACITY).filled())
    }))?;

    let sample = panel.sample;
    let n_sample = sample.shape().0;
    let labelled = sample.is_labelled();
    chart.draw_series((0..n_sample).map(|i| {
        let point = (sample.value(i, 0), sample.value(i, 1));
        let style = if labelled {
            color_of(sample.label(i)).filled()
        } else {
            BLACK.filled()
        };
        Circle::new(point, POINT_SIZE, style)
    }))?;

    Ok(())
}


fn bounds(points: &[f64], width: f64) -> (f64, f64) {
    let lo = points.first().copied().unwrap_or(0f64);
    let hi = points.last().copied().unwrap_or(1f64);
    (lo - width / 2f64, hi + width / 2f64)
}


fn color_of(class: i64) -> PaletteColor<Palette99> {
    Palette99::pick(class.rem_euclid(99) as usize)
}


#[cfg(test)]
mod tests {
    use super::*;

    /// Predicts `1` on the right half-plane `x >= 0.5`.
    struct Right;

    impl Classifier for Right {
        fn predict(&self, sample: &Sample, row: usize) -> i64 {
            if sample.value(row, 0) >= 0.5 { 1 } else { 0 }
        }
    }

    #[test]
    fn test_grid_spans_bounding_box() {
        let sample = Sample::from_rows(
            &[[0.0, -1.0], [1.0, 1.0]],
            vec![0.0, 1.0],
        );
        let map = decision_map(&sample, &Right, 3);
        assert_eq!(map.xs(), &[0.0, 0.5, 1.0]);
        assert_eq!(map.ys(), &[-1.0, 0.0, 1.0]);
        assert_eq!(map.class_at(0, 2), 0);
        assert_eq!(map.class_at(1, 0), 1);
        assert_eq!(map.cells().count(), 9);
    }

    #[test]
    #[should_panic]
    fn test_requires_two_features() {
        let sample = Sample::from_rows(&[[0.0], [1.0]], vec![0.0, 1.0]);
        let _ = decision_map(&sample, &Right, 3);
    }
}
