pub mod clock;
pub mod normalize;
