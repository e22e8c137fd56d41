//! Test function implementations, one per file.

mod ackley;
mod alpine_n1;
mod bohachevsky1;
mod booth;
mod cigar;
mod different_powers;
mod dixons_price;
mod elliptic;
mod griewank;
mod levy;
mod matyas;
mod rastrigin;
mod rosenbrock;
mod rotated_hyper_ellipsoid;
mod six_hump_camel;
mod sphere;
mod sum_squares;
mod three_hump_camel;
mod zakharov;

pub use ackley::ackley;
pub use alpine_n1::alpine_n1;
pub use bohachevsky1::bohachevsky1;
pub use booth::booth;
pub use cigar::cigar;
pub use different_powers::different_powers;
pub use dixons_price::dixons_price;
pub use elliptic::elliptic;
pub use griewank::griewank;
pub use levy::levy;
pub use matyas::matyas;
pub use rastrigin::rastrigin;
pub use rosenbrock::rosenbrock;
pub use rotated_hyper_ellipsoid::rotated_hyper_ellipsoid;
pub use six_hump_camel::six_hump_camel;
pub use sphere::sphere;
pub use sum_squares::sum_squares;
pub use three_hump_camel::three_hump_camel;
pub use zakharov::zakharov;
