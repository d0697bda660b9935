use crate::data::geo::GeoPoint;

/// An immutable per-year grid of expected turbine power output. Latitude and
/// longitude axes are strictly increasing; the power array is row-major with
/// latitude as the slow axis.
#[derive(Debug, Clone)]
pub struct GenerationGrid {
    lats: Vec<f64>,
    lons: Vec<f64>,
    power_kw: Vec<f64>,
}

#[derive(Debug)]
pub enum GridValidationError {
    ShapeMismatch { expected: usize, actual: usize },
    NonMonotonicAxis(&'static str),
    EmptyAxis(&'static str),
}

impl std::fmt::Display for GridValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridValidationError::ShapeMismatch { expected, actual } => {
                write!(f, "power array has {} cells, axes imply {}", actual, expected)
            }
            GridValidationError::NonMonotonicAxis(axis) => {
                write!(f, "{} axis is not strictly increasing", axis)
            }
            GridValidationError::EmptyAxis(axis) => write!(f, "{} axis is empty", axis),
        }
    }
}

impl std::error::Error for GridValidationError {}

fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

impl GenerationGrid {
    pub fn new(lats: Vec<f64>, lons: Vec<f64>, power_kw: Vec<f64>) -> Result<Self, GridValidationError> {
        if lats.is_empty() {
            return Err(GridValidationError::EmptyAxis("latitude"));
        }
        if lons.is_empty() {
            return Err(GridValidationError::EmptyAxis("longitude"));
        }
        if !is_strictly_increasing(&lats) {
            return Err(GridValidationError::NonMonotonicAxis("latitude"));
        }
        if !is_strictly_increasing(&lons) {
            return Err(GridValidationError::NonMonotonicAxis("longitude"));
        }
        let expected = lats.len() * lons.len();
        if power_kw.len() != expected {
            return Err(GridValidationError::ShapeMismatch {
                expected,
                actual: power_kw.len(),
            });
        }
        Ok(Self { lats, lons, power_kw })
    }

    pub fn num_lats(&self) -> usize {
        self.lats.len()
    }

    pub fn num_lons(&self) -> usize {
        self.lons.len()
    }

    pub fn num_cells(&self) -> usize {
        self.power_kw.len()
    }

    pub fn power_at(&self, lat_idx: usize, lon_idx: usize) -> f64 {
        self.power_kw[lat_idx * self.lons.len() + lon_idx]
    }

    /// Eligible cells in row-major order: strictly positive, finite power.
    /// Zero, negative and NaN cells never yield a site.
    pub fn eligible_cells(&self) -> impl Iterator<Item = (GeoPoint, f64)> + '_ {
        self.lats.iter().enumerate().flat_map(move |(i, &lat)| {
            self.lons.iter().enumerate().filter_map(move |(j, &lon)| {
                let power = self.power_kw[i * self.lons.len() + j];
                if power.is_finite() && power > 0.0 {
                    Some((GeoPoint::new(lat, lon), power))
                } else {
                    None
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_shape_mismatch() {
        let err = GenerationGrid::new(vec![50.0, 51.0], vec![-3.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, GridValidationError::ShapeMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn rejects_non_monotonic_latitudes() {
        let err = GenerationGrid::new(vec![51.0, 50.0], vec![-3.0], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, GridValidationError::NonMonotonicAxis("latitude")));
    }

    #[test]
    fn rejects_empty_axes() {
        let err = GenerationGrid::new(vec![], vec![-3.0], vec![]).unwrap_err();
        assert!(matches!(err, GridValidationError::EmptyAxis("latitude")));
    }

    #[test]
    fn eligible_cells_skip_zero_negative_and_nan() {
        let grid = GenerationGrid::new(
            vec![50.0, 51.0],
            vec![-4.0, -3.0],
            vec![10.0, 0.0, -5.0, f64::NAN],
        )
        .unwrap();

        let cells: Vec<_> = grid.eligible_cells().collect();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].0, GeoPoint::new(50.0, -4.0));
        assert_eq!(cells[0].1, 10.0);
    }

    #[test]
    fn eligible_cells_iterate_in_row_major_order() {
        let grid = GenerationGrid::new(
            vec![50.0, 51.0],
            vec![-4.0, -3.0],
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();

        let powers: Vec<f64> = grid.eligible_cells().map(|(_, p)| p).collect();
        assert_eq!(powers, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn power_at_indexes_row_major() {
        let grid = GenerationGrid::new(
            vec![50.0, 51.0],
            vec![-4.0, -3.0],
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        assert_eq!(grid.power_at(1, 0), 3.0);
    }
}
