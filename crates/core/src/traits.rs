//! Domain marker traits.

/// An entity: identity plus continuity across state changes.
///
/// Two entities are the same entity iff their ids match, whatever their
/// current field values are.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// A value object: immutable, compared by value, no identity.
///
/// A recorded sale `(occurred_at, quantity)` is a value object; the `Product`
/// it belongs to is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
