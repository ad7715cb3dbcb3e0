//! Hardcoded fixtures shown when the backend omits a field. The page either
//! loads atomically or not at all, so these only paper over missing profile
//! fields inside an otherwise successful load.

use crate::domain::model::Profile;
use std::collections::HashMap;

pub const FALLBACK_NAME: &str = "Alex Chen";
pub const FALLBACK_TITLE: &str = "Frontend Developer";
pub const FALLBACK_EMAIL: &str = "alex.chen@email.com";
pub const FALLBACK_PHONE: &str = "+1 (555) 123-4567";
pub const FALLBACK_LOCATION: &str = "San Francisco, CA";

pub fn fallback_social() -> HashMap<String, String> {
    HashMap::from([
        ("github".to_string(), "https://github.com/alexchen".to_string()),
        (
            "linkedin".to_string(),
            "https://linkedin.com/in/alexchen".to_string(),
        ),
        (
            "twitter".to_string(),
            "https://twitter.com/alexchen".to_string(),
        ),
    ])
}

pub fn fallback_profile() -> Profile {
    Profile {
        name: FALLBACK_NAME.to_string(),
        title: FALLBACK_TITLE.to_string(),
        email: FALLBACK_EMAIL.to_string(),
        phone: FALLBACK_PHONE.to_string(),
        location: FALLBACK_LOCATION.to_string(),
        social: fallback_social(),
        ..Default::default()
    }
}

/// Field-level default policy: substitute the fixed fallback for each missing
/// profile field, leave present fields untouched.
pub fn with_profile_fallbacks(mut profile: Profile) -> Profile {
    if profile.name.is_empty() {
        profile.name = FALLBACK_NAME.to_string();
    }
    if profile.title.is_empty() {
        profile.title = FALLBACK_TITLE.to_string();
    }
    if profile.email.is_empty() {
        profile.email = FALLBACK_EMAIL.to_string();
    }
    if profile.phone.is_empty() {
        profile.phone = FALLBACK_PHONE.to_string();
    }
    if profile.location.is_empty() {
        profile.location = FALLBACK_LOCATION.to_string();
    }
    if profile.social.is_empty() {
        profile.social = fallback_social();
    }
    profile
}
