/// Class and instance representation.
///
/// Defines the `Class` type with its method table and single-inheritance
/// parent link, the `Method` record, and the `ClassInstance` type owning a
/// closure of fields. Also hosts the method-call machinery that builds a
/// fresh frame closure for every call.
pub mod class;

/// Core runtime values.
///
/// Defines the `Value` enum of all runtime value kinds, the `Holder` that
/// shares values between closure slots, the `Closure` scope map, truthiness
/// coercion, and the print rendering of values.
pub mod core;
