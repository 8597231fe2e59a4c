//! Behavioural tests for template expansion.
//!
//! These tests validate `Generator::parse` against Gherkin scenarios covering
//! token padding, literal pass-through, unknown names, provider shadowing and
//! seeded reproducibility.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use fakegen::{FnProvider, Generator, GeneratorError, Value, providers};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the generators and their expansion results.
#[derive(Default, ScenarioState)]
struct World {
    generator: Slot<Generator>,
    twin: Slot<Generator>,
    outcome: Slot<Result<String, GeneratorError>>,
    twin_outcome: Slot<Result<String, GeneratorError>>,
}

impl World {
    fn generator(&self) -> Generator {
        self.generator.get().expect("generator should be set")
    }

    fn outcome(&self) -> Result<String, GeneratorError> {
        self.outcome.get().expect("template should be expanded")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a generator with the foo provider")]
fn a_generator_with_the_foo_provider(world: &World) {
    let mut generator = Generator::with_seed(7);
    generator.add_provider(
        FnProvider::new("foo").with_formatter("foo_formatter", |_, _| Ok(Value::from("foobar"))),
    );
    world.generator.set(generator);
}

#[given("the bar provider is registered afterwards")]
fn the_bar_provider_is_registered_afterwards(world: &World) {
    let mut generator = world.generator();
    generator.add_provider(
        FnProvider::new("bar").with_formatter("foo_formatter", |_, _| Ok(Value::from("barfoo"))),
    );
    world.generator.set(generator);
}

#[given("two default generators seeded with {seed:u64}")]
fn two_default_generators_seeded_with(world: &World, seed: u64) {
    let build = || {
        let mut generator = Generator::with_seed(seed);
        providers::register_defaults(&mut generator);
        generator
    };
    world.generator.set(build());
    world.twin.set(build());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the template \"{template}\" is expanded")]
fn the_template_is_expanded(world: &World, template: String) {
    let mut generator = world.generator();
    world.outcome.set(generator.parse(&template));
}

#[when("both expand the template \"{template}\"")]
fn both_expand_the_template(world: &World, template: String) {
    let mut generator = world.generator();
    let mut twin = world.twin.get().expect("twin generator should be set");
    world.outcome.set(generator.parse(&template));
    world.twin_outcome.set(twin.parse(&template));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the expansion is \"{expected}\"")]
fn the_expansion_is(world: &World, expected: String) {
    assert_eq!(world.outcome(), Ok(expected));
}

#[then("the expansion fails because \"{name}\" is not found")]
fn the_expansion_fails_because_name_is_not_found(world: &World, name: String) {
    match world.outcome() {
        Err(GeneratorError::NameNotFound { name: missing }) => assert_eq!(missing, name),
        other => panic!("Expected NameNotFound, got: {other:?}"),
    }
}

#[then("both expansions are identical")]
fn both_expansions_are_identical(world: &World) {
    let first = world.outcome().expect("first expansion succeeds");
    let second = world
        .twin_outcome
        .get()
        .expect("second expansion should be set")
        .expect("second expansion succeeds");

    assert!(!first.contains("{{"), "unexpanded token in {first}");
    assert_eq!(first, second, "Seeded expansions should match");
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/templating.feature",
    name = "Padded and unpadded tokens resolve to the same formatter"
)]
fn padded_and_unpadded_tokens_resolve_to_the_same_formatter(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/templating.feature",
    name = "Text without complete tokens is returned unchanged"
)]
fn text_without_complete_tokens_is_returned_unchanged(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/templating.feature",
    name = "Unknown tokens fail the expansion"
)]
fn unknown_tokens_fail_the_expansion(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/templating.feature",
    name = "The newest provider serves template tokens"
)]
fn the_newest_provider_serves_template_tokens(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/templating.feature",
    name = "Seeded generators repeat their output"
)]
fn seeded_generators_repeat_their_output(world: World) {
    let _ = world;
}
