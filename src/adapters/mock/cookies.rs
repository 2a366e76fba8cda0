//! In-memory cookie jar for testing.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{parse_cookie_value, Cookie};
use crate::traits::CookieJar;

/// In-memory [`CookieJar`] that also records every assignment written.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: Arc<Mutex<HashMap<String, Cookie>>>,
    assignments: Arc<Mutex<Vec<String>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored cookie with attributes, expired or not.
    pub fn cookie(&self, name: &str) -> Option<Cookie> {
        self.cookies.lock().unwrap().get(name).cloned()
    }

    /// Stored value, expired or not.
    pub fn value(&self, name: &str) -> Option<String> {
        self.cookie(name).map(|cookie| cookie.value)
    }

    /// Seed a plain cookie without recording an assignment.
    pub fn set_value(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), Cookie::new(name, value));
    }

    /// Unexpired cookies as a page script would see them,
    /// `name=value; name2=value2`.
    pub fn header(&self) -> String {
        let now = Utc::now();
        let mut pairs: Vec<String> = self
            .cookies
            .lock()
            .unwrap()
            .values()
            .filter(|cookie| !cookie.is_expired(now))
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect();
        pairs.sort();
        pairs.join("; ")
    }

    /// Assignment strings in write order.
    pub fn assignments(&self) -> Vec<String> {
        self.assignments.lock().unwrap().clone()
    }
}

impl CookieJar for MemoryCookieJar {
    fn set(&self, cookie: Cookie) {
        self.assignments.lock().unwrap().push(cookie.to_assignment());
        self.cookies
            .lock()
            .unwrap()
            .insert(cookie.name.clone(), cookie);
    }

    /// Reads go through the rendered header, like a page script reading
    /// its cookies.
    fn get(&self, name: &str) -> Option<String> {
        parse_cookie_value(&self.header(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_records_assignment() {
        let jar = MemoryCookieJar::new();
        jar.set(Cookie::new("a", "1"));
        jar.set(Cookie::new("a", "2"));

        assert_eq!(jar.get("a"), Some("2".to_string()));
        assert_eq!(jar.assignments().len(), 2);
    }

    #[test]
    fn test_expired_cookie_left_out_of_header() {
        let jar = MemoryCookieJar::new();
        jar.set_value("b", "2");
        jar.set(Cookie::new("a", "1").with_expires(Utc::now() - chrono::Duration::seconds(5)));

        assert_eq!(jar.header(), "b=2");
        assert_eq!(jar.get("a"), None);
        assert_eq!(jar.value("a"), Some("1".to_string()));
    }

    #[test]
    fn test_seeded_value_is_not_an_assignment() {
        let jar = MemoryCookieJar::new();
        jar.set_value("credentials", "x");
        assert_eq!(jar.get("credentials"), Some("x".to_string()));
        assert!(jar.assignments().is_empty());
    }
}
