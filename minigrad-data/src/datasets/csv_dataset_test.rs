use super::*;
use approx::assert_relative_eq;
use std::io::Write;

#[test]
fn test_parses_points_and_skips_header() -> Result<(), MinigradError> {
    let data = "x0,x1,label\n0.5,-1.25,1\n-2.0, 3.0 ,0\n";
    let dataset = CsvDataset::from_reader(data.as_bytes(), 2)?;
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.n_features(), 2);

    let first = dataset.get(0)?;
    assert_relative_eq!(first.features[0], 0.5);
    assert_relative_eq!(first.features[1], -1.25);
    assert_eq!(first.label, 1);
    assert_eq!(
        dataset.points()[1],
        LabeledPoint {
            features: vec![-2.0, 3.0],
            label: 0
        }
    );
    Ok(())
}

#[test]
fn test_header_only_is_empty() -> Result<(), MinigradError> {
    let dataset = CsvDataset::from_reader("x0,x1,label\n".as_bytes(), 2)?;
    assert!(dataset.is_empty());
    Ok(())
}

#[test]
fn test_wrong_field_count_reports_line() {
    let data = "x0,x1,label\n0.1,0.2,1\n0.3,0\n";
    match CsvDataset::from_reader(data.as_bytes(), 2) {
        Err(MinigradError::DatasetParse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("expected 3 fields, found 2"), "{}", message);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_bad_number_reports_line() {
    let data = "x0,x1,label\n0.1,0.2,1\n0.1,0.2,0\n0.1,abc,1\n";
    match CsvDataset::from_reader(data.as_bytes(), 2) {
        Err(MinigradError::DatasetParse { line, message }) => {
            assert_eq!(line, 4);
            assert!(message.contains("feature 1"), "{}", message);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_fractional_label_is_rejected() {
    let data = "x0,label\n0.1,0.5\n";
    assert!(matches!(
        CsvDataset::from_reader(data.as_bytes(), 1),
        Err(MinigradError::DatasetParse { line: 2, .. })
    ));
}

#[test]
fn test_from_path_roundtrip_and_missing_file() -> Result<(), MinigradError> {
    let path = std::env::temp_dir().join(format!("minigrad-csv-{}.csv", std::process::id()));
    {
        let mut file = File::create(&path)?;
        writeln!(file, "a,b,c,label")?;
        writeln!(file, "1,2,3,1")?;
    }
    let dataset = CsvDataset::from_path(&path, 3)?;
    assert_eq!(dataset.into_points(), vec![LabeledPoint { features: vec![1.0, 2.0, 3.0], label: 1 }]);
    std::fs::remove_file(&path)?;

    assert!(matches!(
        CsvDataset::from_path(&path, 3),
        Err(MinigradError::Io(_))
    ));
    Ok(())
}

#[test]
fn test_from_points_checks_arity() {
    let points = vec![LabeledPoint { features: vec![1.0], label: 0 }];
    assert!(CsvDataset::from_points(points.clone(), 1).is_ok());
    assert!(CsvDataset::from_points(points, 2).is_err());
}
