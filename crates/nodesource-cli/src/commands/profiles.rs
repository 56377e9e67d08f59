//! Profiles command handler

use nodesource_core::Profile;
use strum::IntoEnumIterator;

pub fn run_profiles() {
    for profile in Profile::iter() {
        println!("{}", profile);
        for (method, path) in profile.routes() {
            println!("  {:<5} {}", method, path);
        }
    }
}
