use evostats::config::LoaderConfig;
use evostats::data::{DatasetLoader, ShapePolicy};
use evostats::EvostatsError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_run(root: &Path, run: &str, sub: &str, values: &[f64]) {
    let dir = root.join(run).join(sub);
    fs::create_dir_all(&dir).unwrap();
    let body: String = values
        .iter()
        .enumerate()
        .map(|(gen, v)| format!("{} {}\n", gen, v))
        .collect();
    fs::write(dir.join("bestfit.dat"), body).unwrap();
}

#[test]
fn test_load_shape_and_row_order() {
    let tmp = TempDir::new().unwrap();
    write_run(tmp.path(), "exp_3", "node05_2014-07-15_16_42_48_5178", &[-30.0, -20.0, -10.0, 0.0]);
    write_run(tmp.path(), "exp_1", "node02_2014-07-15_16_40_01_1111", &[-3.0, -2.0, -1.0, 0.5]);
    write_run(tmp.path(), "exp_2", "node07_2014-07-15_16_41_12_2222", &[-300.0, -200.0, -100.0, 5.0]);

    let matrix = DatasetLoader::default().load(tmp.path()).unwrap();
    assert_eq!(matrix.shape(), (3, 4));

    // rows follow the sorted path order
    assert_eq!(matrix.row(0).unwrap().to_vec(), vec![-3.0, -2.0, -1.0, 0.5]);
    assert_eq!(matrix.row(1).unwrap().to_vec(), vec![-300.0, -200.0, -100.0, 5.0]);
    assert_eq!(matrix.row(2).unwrap().to_vec(), vec![-30.0, -20.0, -10.0, 0.0]);
    assert!(matrix.source(0).unwrap().starts_with(tmp.path().join("exp_1")));
}

#[test]
fn test_missing_directory_content() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("exp_1").join("node01")).unwrap();

    match DatasetLoader::default().load(tmp.path()) {
        Err(EvostatsError::NotFound(message)) => assert!(message.contains("bestfit.dat")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_nonexistent_directory() {
    let tmp = TempDir::new().unwrap();
    let result = DatasetLoader::default().load(tmp.path().join("does_not_exist"));
    assert!(matches!(result, Err(EvostatsError::NotFound(_))));
}

#[test]
fn test_one_bad_file_fails_whole_load() {
    let tmp = TempDir::new().unwrap();
    write_run(tmp.path(), "a", "1", &[1.0, 2.0]);
    let bad = tmp.path().join("b").join("1");
    fs::create_dir_all(&bad).unwrap();
    fs::write(bad.join("bestfit.dat"), "0 1.0\n1 oops\n").unwrap();

    match DatasetLoader::default().load(tmp.path()) {
        Err(EvostatsError::Parse { path, line, .. }) => {
            assert_eq!(path, bad.join("bestfit.dat"));
            assert_eq!(line, 2);
        }
        other => panic!("expected Parse, got {:?}", other),
    }
}

#[test]
fn test_single_column_file_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("a").join("1");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("bestfit.dat"), "0\n1\n2\n").unwrap();

    assert!(matches!(
        DatasetLoader::default().load(tmp.path()),
        Err(EvostatsError::Parse { .. })
    ));
}

#[test]
fn test_shape_mismatch_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_run(tmp.path(), "a", "1", &[1.0, 2.0, 3.0]);
    write_run(tmp.path(), "b", "1", &[1.0, 2.0, 3.0, 4.0]);

    match DatasetLoader::default().load(tmp.path()) {
        Err(EvostatsError::ShapeMismatch { expected, actual, .. }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 4);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_custom_pattern_and_column() {
    let tmp = TempDir::new().unwrap();
    for (run, v) in [("r1", 10.0), ("r2", 20.0)] {
        let dir = tmp.path().join(run);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("fit.txt"), format!("0 0.0 {}\n1 0.0 {}\n", v, v + 1.0)).unwrap();
    }

    let loader = DatasetLoader::new(LoaderConfig {
        pattern: "*/fit.txt".to_string(),
        value_column: 2,
        shape_policy: ShapePolicy::Strict,
    });
    let matrix = loader.load(tmp.path()).unwrap();
    assert_eq!(matrix.column_values(0).unwrap(), vec![10.0, 20.0]);
    assert_eq!(matrix.column_values(1).unwrap(), vec![11.0, 21.0]);
}

#[test]
fn test_directory_with_glob_characters() {
    let tmp = TempDir::new().unwrap();
    let group = tmp.path().join("group[1]");
    write_run(&group, "a", "1", &[1.0, 2.0]);

    let matrix = DatasetLoader::default().load(&group).unwrap();
    assert_eq!(matrix.shape(), (1, 2));
}
