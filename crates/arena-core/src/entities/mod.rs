//! Entity structs for Arena domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `arena-db/migrations/001_initial.sql`).

mod activity;
mod season;
mod team;
mod user;

pub use activity::{Activity, ActivityContext, NewActivity, SeasonRef, SlugRef};
pub use season::Season;
pub use team::SeasonMembership;
pub use user::User;
