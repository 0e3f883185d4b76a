use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const FEATURES_YAML: &str = r#"
features:
  - id: F1
    name: Login
    priority: high
    fpa:
      type: input
      complexity: medium
      number_of_elements: 10
      technical_factor: 7
    pert:
      optimistic: 3
      most_likely: 5
      pessimistic: 8
  - id: F2
    name: Reports
    dependencies: [F1]
    story_points:
      points: 45
      team_velocity: 20
      team_size: 4
      sprint_length: 10
"#;

#[test]
fn features_prints_per_feature_results_and_totals() {
    let input_file = assert_fs::NamedTempFile::new("features.yaml").unwrap();
    input_file.write_str(FEATURES_YAML).unwrap();
    let output_file = assert_fs::NamedTempFile::new("estimates.yaml").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args([
        "features",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "  FPA: 28.8 FP | effort 14.4 days | cost $7,200 | duration 14 days",
        ))
        .stdout(predicate::str::contains("risk low | cost $2,583 | duration 5 days"))
        .stdout(predicate::str::contains(
            "  Story points: 3 sprints | effort 150.0 days | cost $300,000 | duration 30 days",
        ))
        .stdout(predicate::str::contains("Story points | 150.0 | $300,000 | 30 | 3 sprints"))
        .stdout(predicate::str::contains("Feature estimates written to"));

    let output = fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("estimations:"));
    assert!(output.contains("feature_id: F2"));
    assert!(output.contains("totals:"));
    assert!(output.contains("average_risk: low"));
}

#[test]
fn features_reports_duplicate_ids() {
    let input_file = assert_fs::NamedTempFile::new("features.yaml").unwrap();
    input_file
        .write_str("features:\n  - id: F1\n    name: A\n  - id: F1\n    name: B\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["features", "-i", input_file.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to load features"))
        .stderr(predicate::str::contains("DuplicateFeatureId"));
}
