
/// Field validators and JSON shape of entities
pub mod entity_tests;
