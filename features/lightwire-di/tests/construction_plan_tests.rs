//! Ordering of component graphs

use lightwire_di::{ComponentGraph, ComponentSpec, ConstructionPlan, GraphError, MAX_VISITS};
use rstest::*;

fn graph(specs: impl IntoIterator<Item = ComponentSpec>) -> ComponentGraph {
    specs.into_iter().collect()
}

fn position(order: &[&str], name: &str) -> usize {
    order
        .iter()
        .position(|entry| *entry == name)
        .unwrap_or_else(|| panic!("'{name}' is not part of the order {order:?}"))
}

#[fixture]
fn layered() -> ComponentGraph {
    graph([
        ComponentSpec::new("A", "App").arg("@B").arg("@C"),
        ComponentSpec::new("B", "Service").arg("@D"),
        ComponentSpec::new("C", "Service"),
        ComponentSpec::new("D", "Store"),
    ])
}

#[rstest]
fn builds_dependencies_first_in_argument_order(layered: ComponentGraph) {
    // Act
    let plan = ConstructionPlan::compute(&layered, "A").unwrap();

    // Assert
    assert_eq!(plan.visit_order(), ["A", "B", "D", "C"]);
    assert_eq!(
        plan.construction_order().collect::<Vec<_>>(),
        ["C", "D", "B", "A"]
    );
}

#[rstest]
fn shared_dependency_is_planned_once() {
    // Arrange
    let diamond = graph([
        ComponentSpec::new("A", "App").arg("@B").arg("@C"),
        ComponentSpec::new("B", "Service").arg("@D"),
        ComponentSpec::new("C", "Service").arg("@D"),
        ComponentSpec::new("D", "Store"),
    ]);

    // Act
    let plan = ConstructionPlan::compute(&diamond, "A").unwrap();

    // Assert
    assert_eq!(plan.visit_order(), ["A", "B", "C", "D"]);
    assert_eq!(plan.len(), 4);
}

#[rstest]
fn every_reference_is_constructed_before_its_referrer() {
    // Arrange: several overlapping diamonds
    let layered = graph([
        ComponentSpec::new("app", "App").arg("@http").arg("@log").arg("@db"),
        ComponentSpec::new("http", "Http").arg("@router").arg("@log"),
        ComponentSpec::new("router", "Router").arg("@controller").arg("@config"),
        ComponentSpec::new("controller", "Controller").arg("@db").arg("@log").arg("index"),
        ComponentSpec::new("db", "Db").arg("@config").arg("@log"),
        ComponentSpec::new("log", "Log").arg("@config"),
        ComponentSpec::new("config", "Config").arg("prod").arg(3),
        ComponentSpec::new("unused", "Unused").arg("@db"),
    ]);

    // Act
    let plan = ConstructionPlan::compute(&layered, "app").unwrap();
    let order: Vec<&str> = plan.construction_order().collect();

    // Assert
    assert!(!plan.contains("unused"));
    assert_eq!(order.len(), 7);
    for spec in layered.components().filter(|spec| plan.contains(&spec.name)) {
        for dependency in spec.references() {
            assert!(
                position(&order, dependency) < position(&order, &spec.name),
                "'{dependency}' has to be built before '{}' in {order:?}",
                spec.name
            );
        }
    }
}

#[rstest]
fn literal_arguments_are_not_followed() {
    // Arrange
    let single = graph([ComponentSpec::new("A", "App")
        .arg("B")
        .arg("mail@example.com")
        .arg(true)]);

    // Act
    let plan = ConstructionPlan::compute(&single, "A").unwrap();

    // Assert
    assert_eq!(plan.visit_order(), ["A"]);
}

#[rstest]
fn missing_root_is_named(layered: ComponentGraph) {
    // Act
    let err = ConstructionPlan::compute(&layered, "Z").unwrap_err();

    // Assert
    assert_eq!(err, GraphError::MissingRoot("Z".to_string()));
    assert!(err.to_string().contains("'Z'"));
}

#[rstest]
fn missing_reference_target_fails() {
    // Arrange
    let broken = graph([
        ComponentSpec::new("A", "App").arg("@B"),
        ComponentSpec::new("B", "Service").arg("@ghost"),
    ]);

    // Act
    let err = ConstructionPlan::compute(&broken, "A").unwrap_err();

    // Assert
    assert_eq!(
        err,
        GraphError::MissingDependency {
            dependency: "ghost".to_string(),
            required_by: "B".to_string(),
        }
    );
}

#[rstest]
#[case::self_reference(graph([ComponentSpec::new("A", "App").arg("@A")]))]
#[case::two_components(graph([
    ComponentSpec::new("A", "App").arg("@B"),
    ComponentSpec::new("B", "Service").arg("@A"),
]))]
#[case::behind_a_prefix(graph([
    ComponentSpec::new("A", "App").arg("@B"),
    ComponentSpec::new("B", "Service").arg("@C"),
    ComponentSpec::new("C", "Service").arg("@D"),
    ComponentSpec::new("D", "Service").arg("@B"),
]))]
fn cycles_hit_the_visit_limit(#[case] cyclic: ComponentGraph) {
    // Act
    let err = ConstructionPlan::compute(&cyclic, "A").unwrap_err();

    // Assert
    let GraphError::VisitLimitExceeded {
        limit,
        chain,
        cycle,
    } = err.clone()
    else {
        panic!("expected the visit limit to be exceeded, got {err:?}");
    };
    assert_eq!(limit, MAX_VISITS);
    assert_eq!(chain.len(), MAX_VISITS + 1);
    let cycle = cycle.expect("a cycle has to be reported");
    assert_eq!(cycle.first(), cycle.last());
}

#[rstest]
fn chains_deeper_than_the_limit_fail() {
    // Arrange
    let deep = graph((0..=MAX_VISITS).map(|index| {
        let spec = ComponentSpec::new(format!("c{index}"), "Link");
        if index < MAX_VISITS {
            spec.arg(format!("@c{}", index + 1))
        } else {
            spec
        }
    }));

    // Act
    let err = ConstructionPlan::compute(&deep, "c0").unwrap_err();

    // Assert
    assert!(matches!(
        err,
        GraphError::VisitLimitExceeded { cycle: None, .. }
    ));
}

#[rstest]
fn chains_within_the_limit_succeed() {
    // Arrange
    let deep = graph((0..MAX_VISITS).map(|index| {
        let spec = ComponentSpec::new(format!("c{index}"), "Link");
        if index + 1 < MAX_VISITS {
            spec.arg(format!("@c{}", index + 1))
        } else {
            spec
        }
    }));

    // Act
    let plan = ConstructionPlan::compute(&deep, "c0").unwrap();

    // Assert
    assert_eq!(plan.len(), MAX_VISITS);
    assert_eq!(plan.construction_order().next(), Some("c999"));
}
