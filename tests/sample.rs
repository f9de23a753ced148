use nominal_tree::prelude::*;
use polars::prelude::{DataFrame, NamedFrom, Series};


fn weather_path() -> std::path::PathBuf {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/dataset/weather.nominal.arff");
    path
}


#[test]
fn read_weather() {
    let sample = SampleReader::new()
        .file(weather_path())
        .target_feature("play")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (14, 5));
    assert_eq!(sample.n_discarded(), 0);
    assert_eq!(sample.target().name(), "play");
    assert_eq!(sample.target().column(), 4);

    let features = sample.features()
        .into_iter()
        .map(|attr| attr.name())
        .collect::<Vec<_>>();
    assert_eq!(features, ["outlook", "temperature", "humidity", "windy"]);

    let outlook = sample.registry().find("outlook").unwrap();
    assert_eq!(outlook.values(), ["sunny", "overcast", "rainy"]);
    assert_eq!(sample.rows()[2].get(0), "overcast");
}


#[test]
fn unknown_target_is_a_configuration_error() {
    let result = Sample::from_arff(weather_path(), "golf");
    assert!(matches!(result, Err(TreeError::UnknownTarget(name)) if name == "golf"));
}


#[test]
fn rows_of_wrong_length_are_discarded() {
    let text = "\
        @attribute outlook {sunny, rainy}\n\
        @attribute play {yes, no}\n\
        @data\n\
        sunny,no\n\
        rainy\n\
        rainy,yes,extra\n\
        % a comment\n\
        \n\
        rainy,yes\n";
    let sample = Sample::from_arff_str(text, "play").unwrap();

    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample.n_discarded(), 2);
}


#[test]
fn empty_and_question_mark_fields_are_missing() {
    let text = "\
        @attribute outlook {sunny, rainy}\n\
        @attribute play {yes, no}\n\
        @data\n\
        ?,no\n\
        rainy,\n";
    let sample = Sample::from_arff_str(text, "play").unwrap();

    assert!(sample.rows()[0].is_missing(0));
    assert!(!sample.rows()[0].is_missing(1));
    assert!(sample.rows()[1].is_missing(1));
}


#[test]
fn malformed_sources() {
    let text = "@attribute outlook sunny, rainy\n@data\n";
    let result = Sample::from_arff_str(text, "outlook");
    assert!(matches!(
        result, Err(TreeError::MalformedDeclaration { line: 1, .. })
    ));

    let text = "@attribute outlook {sunny}\n@attribute outlook {rainy}\n@data\n";
    let result = Sample::from_arff_str(text, "outlook");
    assert!(matches!(result, Err(TreeError::DuplicateAttribute(_))));

    let text = "@attribute outlook {}\n@data\n";
    let result = Sample::from_arff_str(text, "outlook");
    assert!(matches!(result, Err(TreeError::EmptyDomain(_))));

    let text = "@attribute outlook {sunny}\nsunny\n";
    let result = Sample::from_arff_str(text, "outlook");
    assert!(matches!(result, Err(TreeError::MissingDataSection)));

    let result = Sample::from_arff_str("@data\n", "outlook");
    assert!(matches!(result, Err(TreeError::NoAttributes)));
}


#[test]
fn registry_excludes_the_target() {
    let mut registry = AttributeRegistry::new();
    registry.register_attribute("outlook", ["sunny", "rainy"], 0).unwrap();
    registry.register_attribute("windy", ["true", "false"], 1).unwrap();
    registry.register_attribute("play", ["yes", "no"], 2).unwrap();

    let target = registry.find("play").unwrap().clone();
    let eligible = registry.all_attributes_except_target(&target)
        .into_iter()
        .map(|attr| attr.column())
        .collect::<Vec<_>>();
    assert_eq!(eligible, [0, 1]);
}


#[test]
fn registry_rejects_columns_out_of_order() {
    let mut registry = AttributeRegistry::new();
    registry.register_attribute("outlook", ["sunny", "rainy"], 0).unwrap();

    let result = registry.register_attribute("play", ["yes", "no"], 2);
    assert!(matches!(
        result,
        Err(TreeError::ColumnOutOfOrder { column: 2, expected: 1, .. })
    ));

    // The failed call leaves the registry unchanged.
    assert_eq!(registry.len(), 1);
    assert!(registry.find("play").is_none());
    registry.register_attribute("play", ["yes", "no"], 1).unwrap();
}


#[test]
fn from_dataframe() {
    let outlook = Series::new("outlook", &["sunny", "overcast", "rainy", "sunny"]);
    let windy = Series::new("windy", &[Some("true"), None, Some("false"), Some("false")]);
    let play = Series::new("play", &["no", "yes", "yes", "yes"]);
    let df = DataFrame::new(vec![outlook, windy, play]).unwrap();

    let sample = Sample::from_dataframe(&df, "play").unwrap();

    assert_eq!(sample.shape(), (4, 3));
    let windy = sample.registry().find("windy").unwrap();
    assert_eq!(windy.values(), ["true", "false"]);
    assert!(sample.rows()[1].is_missing(1));
}


#[test]
fn from_dataframe_skips_null_columns() {
    let outlook = Series::new("outlook", &["sunny", "rainy", "sunny"]);
    let note = Series::new("note", &[None::<&str>, None, None]);
    let play = Series::new("play", &["no", "yes", "no"]);
    let df = DataFrame::new(vec![outlook, note, play]).unwrap();

    let sample = Sample::from_dataframe(&df, "play").unwrap();

    assert_eq!(sample.shape(), (3, 2));
    assert!(sample.registry().find("note").is_none());
    assert_eq!(sample.target().column(), 1);
    assert_eq!(sample.rows()[1].get(1), "yes");
}
