use nominal_tree::prelude::*;


fn weather() -> Sample {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/dataset/weather.nominal.arff");
    Sample::from_arff(path, "play").unwrap()
}


// Overcast days are always playable, other outlooks depend on the wind.
//
//                outlook
//        /          |          \
//     sunny      overcast     rainy
//       |           |           |
//     windy        yes        windy
//     /   \                   /   \
//   no    yes               yes    no
const SMALL_WEATHER: &str = "\
@attribute outlook {sunny, overcast, rainy}
@attribute windy {true, false}
@attribute play {yes, no}
@data
sunny,true,no
sunny,false,yes
overcast,true,yes
overcast,false,yes
rainy,true,yes
rainy,false,no
";


const CRITERIA: [Criterion; 4] = [
    Criterion::InfoGain,
    Criterion::InfoGainRatio,
    Criterion::GiniGain,
    Criterion::GiniGainRatio,
];


/// Collects the split attribute names along every root-to-leaf path.
fn paths(node: &Node) -> Vec<Vec<String>> {
    match node.split_attribute_name() {
        None => vec![Vec::new()],
        Some(name) => {
            node.children_by_value()
                .iter()
                .flat_map(|(_, child)| paths(child))
                .map(|mut path| {
                    path.insert(0, name.to_string());
                    path
                })
                .collect()
        },
    }
}


#[test]
fn pure_sample_is_a_single_leaf() {
    let text = "\
        @attribute outlook {sunny, rainy}\n\
        @attribute play {yes, no}\n\
        @data\n\
        sunny,yes\n\
        rainy,yes\n\
        rainy,yes\n";
    let sample = Sample::from_arff_str(text, "play").unwrap();

    for criterion in CRITERIA {
        let f = DecisionTreeBuilder::new(&sample)
            .criterion(criterion)
            .build()
            .fit();
        assert!(f.root().is_leaf());
        assert_eq!(f.root().label(), Some("yes"));
        assert_eq!(f.depth(), 0);
    }
}


#[test]
fn overcast_resolves_at_the_root() {
    let sample = Sample::from_arff_str(SMALL_WEATHER, "play").unwrap();

    for criterion in CRITERIA {
        let f = DecisionTreeBuilder::new(&sample)
            .criterion(criterion)
            .build()
            .fit();

        let root = f.root();
        assert_eq!(root.split_attribute_name(), Some("outlook"), "{criterion}");

        let overcast = root.child("overcast").unwrap();
        assert!(overcast.is_leaf());
        assert_eq!(overcast.label(), Some("yes"));

        let sunny = root.child("sunny").unwrap();
        assert_eq!(sunny.split_attribute_name(), Some("windy"));
        assert_eq!(sunny.child("true").and_then(Node::label), Some("no"));

        let rainy = root.child("rainy").unwrap();
        assert_eq!(rainy.child("true").and_then(Node::label), Some("yes"));

        assert_eq!(f.accuracy(&sample), 1.0);
    }
}


#[test]
fn weather_tree() {
    let sample = weather();
    let f = DecisionTreeBuilder::new(&sample)
        .criterion(Criterion::InfoGain)
        .build()
        .fit();

    let root = f.root();
    assert_eq!(root.split_attribute_name(), Some("outlook"));

    let values = root.children_by_value()
        .iter()
        .map(|(value, _)| value.as_str())
        .collect::<Vec<_>>();
    assert_eq!(values, ["sunny", "overcast", "rainy"]);

    let sunny = root.child("sunny").unwrap();
    assert_eq!(sunny.split_attribute_name(), Some("humidity"));
    let rainy = root.child("rainy").unwrap();
    assert_eq!(rainy.split_attribute_name(), Some("windy"));

    assert_eq!(f.depth(), 2);
    assert_eq!(f.n_leaves(), 5);
    assert_eq!(f.accuracy(&sample), 1.0);
}


#[test]
fn split_attributes_are_never_reused() {
    let sample = weather();
    let n_features = sample.features().len();

    for criterion in CRITERIA {
        let f = DecisionTreeBuilder::new(&sample)
            .criterion(criterion)
            .build()
            .fit();

        assert!(f.depth() <= n_features);
        for path in paths(f.root()) {
            assert!(!path.iter().any(|name| name == "play"));

            let mut seen = path.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), path.len(), "{path:?} reuses an attribute");
        }
    }
}


#[test]
fn every_legal_value_gets_a_child() {
    // No row is `cool`, so that child is a leaf without label.
    let text = "\
        @attribute temperature {hot, mild, cool}\n\
        @attribute play {yes, no}\n\
        @data\n\
        hot,no\n\
        hot,no\n\
        mild,yes\n";
    let sample = Sample::from_arff_str(text, "play").unwrap();
    let f = DecisionTreeBuilder::new(&sample).build().fit();

    let root = f.root();
    assert_eq!(root.children_by_value().len(), 3);

    let cool = root.child("cool").unwrap();
    assert!(cool.is_leaf());
    assert_eq!(cool.label(), None);
    assert_eq!(root.child("hot").and_then(Node::label), Some("no"));
}


#[test]
fn exhausted_attributes_use_the_leaf_rule() {
    // Both rows agree on every attribute but not on the label.
    let text = "\
        @attribute outlook {sunny}\n\
        @attribute play {yes, no}\n\
        @data\n\
        sunny,no\n\
        sunny,yes\n\
        sunny,yes\n";
    let sample = Sample::from_arff_str(text, "play").unwrap();

    let first = DecisionTreeBuilder::new(&sample).build().fit();
    let sunny = first.root().child("sunny").unwrap();
    assert_eq!(sunny.label(), Some("no"));

    let majority = DecisionTreeBuilder::new(&sample)
        .leaf_label(LeafLabel::Majority)
        .build()
        .fit();
    let sunny = majority.root().child("sunny").unwrap();
    assert_eq!(sunny.label(), Some("yes"));
}


#[test]
fn ties_go_to_the_attribute_declared_first() {
    // `b` and `a` are copies of each other, so every criterion ties.
    let text = "\
        @attribute b {x, y}\n\
        @attribute a {x, y}\n\
        @attribute play {yes, no}\n\
        @data\n\
        x,x,yes\n\
        y,y,no\n\
        x,x,yes\n\
        y,y,yes\n";
    let sample = Sample::from_arff_str(text, "play").unwrap();

    for criterion in CRITERIA {
        let f = DecisionTreeBuilder::new(&sample)
            .criterion(criterion)
            .build()
            .fit();
        assert_eq!(f.root().split_attribute_name(), Some("b"), "{criterion}");

        // `a` is the only attribute left below `b`.
        let y = f.root().child("y").unwrap();
        assert_eq!(y.split_attribute_name(), Some("a"), "{criterion}");
    }
}


#[test]
fn induction_is_reproducible() {
    let sample = weather();
    for criterion in CRITERIA {
        let tree = DecisionTreeBuilder::new(&sample)
            .criterion(criterion)
            .build();
        assert_eq!(tree.fit(), tree.fit());
    }
}


#[test]
fn rows_with_missing_values_do_not_change_the_tree() {
    let mut text = SMALL_WEATHER.to_string();
    text.push_str("sunny,true,\n");
    text.push_str("rainy,,no\n");

    let clean = Sample::from_arff_str(SMALL_WEATHER, "play").unwrap();
    let noisy = Sample::from_arff_str(&text, "play").unwrap();
    assert_eq!(noisy.shape().0, clean.shape().0 + 2);

    for criterion in CRITERIA {
        let lhs = DecisionTreeBuilder::new(&clean).criterion(criterion).build().fit();
        let rhs = DecisionTreeBuilder::new(&noisy).criterion(criterion).build().fit();
        assert_eq!(lhs, rhs, "{criterion}");
    }
}


#[test]
fn predict_walks_the_tree() {
    let sample = Sample::from_arff_str(SMALL_WEATHER, "play").unwrap();
    let f = DecisionTreeBuilder::new(&sample).build().fit();

    let row = ["overcast", "true", ""].into_iter().collect::<Row>();
    assert_eq!(f.predict(&row), Some("yes"));

    let row = ["rainy", "false", ""].into_iter().collect::<Row>();
    assert_eq!(f.predict(&row), Some("no"));

    let row = ["foggy", "false", ""].into_iter().collect::<Row>();
    assert_eq!(f.predict(&row), None);

    let row = ["?", "false", ""].into_iter().collect::<Row>();
    assert_eq!(f.predict(&row), None);

    let predictions = f.predict_all(&sample);
    assert_eq!(predictions.len(), 6);
    assert!(predictions.iter().all(Option::is_some));
}
