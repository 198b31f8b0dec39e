pub mod destination;
pub mod emergency;
pub mod group;
pub mod reward;
pub mod trip;
pub mod user;
