//! Placeholder substitution in dependency descriptions

use lightwire_di::{
    placeholders::{
        check_required_placeholders, ROUTED_ACTION_PLACEHOLDER, ROUTED_CONTROLLER_PLACEHOLDER,
    },
    Argument, ComponentGraph, PlaceholderError, Scalar, Substitutor,
};
use rstest::*;

const DESCRIPTION: &str = r#"{
    "app": { "class": "App", "inject": ["@dispatcher", "%environment%", "%debug%"] },
    "dispatcher": { "class": "Dispatcher", "inject": ["%routedController%", "%routedAction%", "%unknown%"] },
    "home": { "class": "HomeController", "inject": ["%mailer%", "plain %environment%"] },
    "mailer": { "class": "Mailer", "inject": [] }
}"#;

#[fixture]
fn raw() -> ComponentGraph {
    ComponentGraph::from_json(DESCRIPTION).unwrap()
}

#[fixture]
fn parameters() -> Vec<(String, Scalar)> {
    vec![
        ("environment".to_string(), Scalar::from("dev")),
        ("debug".to_string(), Scalar::Bool(true)),
        ("mailer".to_string(), Scalar::from("@mailer")),
    ]
}

fn substitutor(parameters: &[(String, Scalar)]) -> Substitutor {
    Substitutor::new()
        .with_route("home", "index")
        .with_parameters(parameters.iter().map(|(name, value)| (name.as_str(), value)))
}

fn arguments<'a>(graph: &'a ComponentGraph, name: &str) -> &'a [Argument] {
    &graph.get(name).unwrap().arguments
}

#[rstest]
fn parameters_are_replaced(raw: ComponentGraph, parameters: Vec<(String, Scalar)>) {
    // Act
    let concrete = substitutor(&parameters).apply(&raw);

    // Assert
    assert_eq!(
        arguments(&concrete, "app"),
        [
            Argument::Reference("dispatcher".to_string()),
            Argument::Literal(Scalar::from("dev")),
            Argument::Literal(Scalar::Bool(true)),
        ]
    );
}

#[rstest]
fn routed_controller_becomes_a_reference(raw: ComponentGraph, parameters: Vec<(String, Scalar)>) {
    // Act
    let concrete = substitutor(&parameters).apply(&raw);

    // Assert
    assert_eq!(
        arguments(&concrete, "dispatcher")[..2],
        [
            Argument::Reference("home".to_string()),
            Argument::Literal(Scalar::from("index")),
        ]
    );
}

#[rstest]
fn parameter_values_starting_with_the_marker_become_references(
    raw: ComponentGraph,
    parameters: Vec<(String, Scalar)>,
) {
    // Act
    let concrete = substitutor(&parameters).apply(&raw);

    // Assert
    assert_eq!(
        arguments(&concrete, "home")[0],
        Argument::Reference("mailer".to_string())
    );
}

#[rstest]
fn unknown_and_partial_tokens_are_left_untouched(
    raw: ComponentGraph,
    parameters: Vec<(String, Scalar)>,
) {
    // Act
    let concrete = substitutor(&parameters).apply(&raw);

    // Assert
    assert_eq!(
        arguments(&concrete, "dispatcher")[2],
        Argument::Literal(Scalar::from("%unknown%"))
    );
    assert_eq!(
        arguments(&concrete, "home")[1],
        Argument::Literal(Scalar::from("plain %environment%"))
    );
}

#[rstest]
fn without_route_the_routing_placeholders_stay(raw: ComponentGraph) {
    // Act
    let concrete = Substitutor::new().apply(&raw);

    // Assert
    assert_eq!(concrete, raw);
}

#[rstest]
fn substitution_is_repeatable_and_leaves_the_input_alone(
    raw: ComponentGraph,
    parameters: Vec<(String, Scalar)>,
) {
    // Arrange
    let before = raw.clone();
    let substitutor = substitutor(&parameters);

    // Act
    let first = substitutor.apply(&raw);
    let second = substitutor.apply(&raw);

    // Assert
    assert_eq!(first, second);
    assert_eq!(raw, before);
    assert_ne!(first, raw);
}

#[rstest]
fn complete_description_passes_the_check() {
    // Act
    let checked = check_required_placeholders(DESCRIPTION, "app");

    // Assert
    assert_eq!(checked, Ok(()));
}

#[rstest]
#[case::controller(
    DESCRIPTION.replace(ROUTED_CONTROLLER_PLACEHOLDER, "@home"),
    "app",
    PlaceholderError::MissingRoutePlaceholder(ROUTED_CONTROLLER_PLACEHOLDER)
)]
#[case::action(
    DESCRIPTION.replace(ROUTED_ACTION_PLACEHOLDER, "index"),
    "app",
    PlaceholderError::MissingRoutePlaceholder(ROUTED_ACTION_PLACEHOLDER)
)]
#[case::starting_point(
    DESCRIPTION.to_string(),
    "kernel",
    PlaceholderError::MissingStartingPoint("kernel".to_string())
)]
fn incomplete_description_is_rejected(
    #[case] description: String,
    #[case] starting_point: &str,
    #[case] expected: PlaceholderError,
) {
    // Act
    let checked = check_required_placeholders(&description, starting_point);

    // Assert
    assert_eq!(checked, Err(expected));
}
