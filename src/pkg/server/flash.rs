use axum_extra::extract::{CookieJar, cookie::Cookie};

const FLASH_COOKIE: &str = "joblite_flash";

/// Queue a one-shot status message for the next rendered page.
pub fn set(jar: CookieJar, message: &str) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, urlencoding::encode(message).into_owned());
    cookie.set_path("/");
    jar.add(cookie)
}

/// Pop the pending message, clearing the cookie so it shows only once.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) {
        Some(raw) => {
            let message = urlencoding::decode(&raw)
                .map(|m| m.into_owned())
                .unwrap_or(raw);
            let mut removal = Cookie::from(FLASH_COOKIE);
            removal.set_path("/");
            (jar.remove(removal), Some(message))
        }
        None => (jar, None),
    }
}
