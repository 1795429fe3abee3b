//! Point set loaders: CSV through polars, JSON as `[[x, y], ...]`.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use polyinset::Point2;
use std::fs;
use std::path::Path;

/// Load points from `path`, dispatching on the extension.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        other => bail!(
            "unsupported input extension {:?} for {} (expected .csv or .json)",
            other,
            path.display()
        ),
    }
}

/// CSV with `x` and `y` columns; other columns are ignored.
pub fn read_csv(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Point2::new(x, y)),
            (Some(x), Some(y)) => Err(anyhow!(
                "row {row} of {} has a non-finite coordinate ({x}, {y})",
                path.display()
            )),
            _ => Err(anyhow!("row {row} of {} has a missing coordinate", path.display())),
        })
        .collect()
}

pub fn read_json(path: &Path) -> Result<Vec<Point2>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_and_json_agree() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("pts.csv");
        fs::write(&csv, "x,y,label\n0,0,a\n10,0,b\n10.5,10,c\n").unwrap();
        let json = dir.path().join("pts.json");
        fs::write(&json, "[[0,0],[10,0],[10.5,10]]").unwrap();
        let a = read_points(&csv).unwrap();
        let b = read_points(&json).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[2], Point2::new(10.5, 10.0));
    }

    #[test]
    fn rejects_unknown_extension_and_missing_values() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("pts.txt");
        fs::write(&txt, "0 0").unwrap();
        assert!(read_points(&txt).is_err());
        let csv = dir.path().join("gap.csv");
        fs::write(&csv, "x,y\n0,0\n1,\n").unwrap();
        assert!(read_points(&csv).is_err());
    }

    #[test]
    fn rejects_non_finite_csv_rows_by_number() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("inf.csv");
        fs::write(&csv, "x,y\n0.0,0.0\n1.5,inf\n2.0,NaN\n").unwrap();
        let err = read_points(&csv).unwrap_err().to_string();
        assert!(err.contains("row 1"), "{err}");
        assert!(err.contains("non-finite"), "{err}");
    }
}
