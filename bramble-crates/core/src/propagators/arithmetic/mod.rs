mod equals;
mod linear_less_or_equal;
mod not_equals;
mod plus;

pub use equals::EqualsPropagator;
pub use linear_less_or_equal::LinearLessOrEqualPropagator;
pub use not_equals::NotEqualsPropagator;
pub use plus::PlusPropagator;
