use vista::Projection;

///
/// Conformance fixtures
///
/// The structural marker is always present; the optional capabilities are
/// opt-in and their effects are observable here: equality, hashing, and the
/// Send/Sync guarantee.
///

#[derive(Projection)]
#[projection(immutable = false)]
pub struct Everything {
    pub name: String,
}

#[derive(Projection)]
#[projection(conformances(equatable), immutable = false)]
pub struct OnlyEq {
    pub name: String,
}

#[derive(Projection)]
#[projection(conformances(equatable, hashable), immutable = false)]
pub struct Hashed {
    pub name: String,
}

#[derive(Projection)]
#[projection(conformances(), immutable = false)]
pub struct MarkerOnly {
    pub name: String,
}

///
/// TESTS
///
