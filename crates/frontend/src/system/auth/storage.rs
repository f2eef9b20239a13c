//! Session cookies shared with the rest of the CMS (`path=/`, 30 days).

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

pub const TOKEN_COOKIE: &str = "@cmsblog.token";
pub const USER_ID_COOKIE: &str = "@idUser";
const MAX_AGE_SECS: u32 = 60 * 60 * 24 * 30;

/// Value of `name` in a `document.cookie` string.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

pub fn cookie_assignment(name: &str, value: &str, max_age: u32) -> String {
    format!("{}={}; max-age={}; path=/", name, urlencoding::encode(value), max_age)
}

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn read(name: &str) -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    parse_cookie(&cookies, name)
}

fn write(name: &str, value: &str, max_age: u32) {
    if let Some(doc) = html_document() {
        if let Err(e) = doc.set_cookie(&cookie_assignment(name, value, max_age)) {
            log::warn!("failed to write cookie {}: {:?}", name, e);
        }
    }
}

pub fn save_session(token: &str, user_id: &str) {
    write(TOKEN_COOKIE, token, MAX_AGE_SECS);
    write(USER_ID_COOKIE, user_id, MAX_AGE_SECS);
}

/// Token and user id of a previous sign-in, if the token cookie exists.
pub fn load_session() -> Option<(String, Option<String>)> {
    let token = read(TOKEN_COOKIE)?;
    Some((token, read(USER_ID_COOKIE)))
}

pub fn clear_session() {
    write(TOKEN_COOKIE, "", 0);
    write(USER_ID_COOKIE, "", 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let jar = "theme=dark; @cmsblog.token=abc.def.ghi; @idUser=42";
        assert_eq!(parse_cookie(jar, TOKEN_COOKIE).as_deref(), Some("abc.def.ghi"));
        assert_eq!(parse_cookie(jar, USER_ID_COOKIE).as_deref(), Some("42"));
        assert_eq!(parse_cookie(jar, "missing"), None);
    }

    #[test]
    fn cleared_cookie_reads_as_absent() {
        assert_eq!(parse_cookie("@cmsblog.token=; theme=dark", TOKEN_COOKIE), None);
        assert_eq!(parse_cookie("", TOKEN_COOKIE), None);
    }

    #[test]
    fn values_are_percent_encoded() {
        let assignment = cookie_assignment(USER_ID_COOKIE, "a b", 10);
        assert_eq!(assignment, "@idUser=a%20b; max-age=10; path=/");
        assert_eq!(parse_cookie("@idUser=a%20b", USER_ID_COOKIE).as_deref(), Some("a b"));
    }
}
