//! Named pages of the storefront.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    About,
    Contact,
}

impl Route {
    /// Navigation order in the header.
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_labels() {
        let paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths, ["/", "/about", "/contact"]);
        assert_eq!(Route::Contact.label(), "Contact");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Route::About).unwrap(), "\"about\"");
        let parsed: Route = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(parsed, Route::Contact);
    }
}
