//! Concrete prototypes: plain data holders implementing
//! [`Prototype`](prototype_framework::Prototype) through copy construction.

pub mod document;
pub mod game_character;
pub mod user_profile;

pub use document::*;
pub use game_character::*;
pub use user_profile::*;

fn joined_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
