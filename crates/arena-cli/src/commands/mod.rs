pub mod activity;
pub mod dispatch;
pub mod hash;
pub mod preferences;
