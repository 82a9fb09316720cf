//! Tests for percent encoding.

#[macro_use]
mod utils;

use magnet_uri::percent_encode::PercentEncoded;

#[test]
fn unreserved() {
    let encoded = PercentEncoded::from_query_value("Aa0-._~");
    assert_eq_display!(encoded, "Aa0-._~");
}

#[test]
fn space_is_plus() {
    let encoded = PercentEncoded::from_query_value("My File");
    assert_eq_display!(encoded, "My+File");
}

#[test]
fn reserved() {
    let encoded = PercentEncoded::from_query_value(":/?#[]@!$&'()*+,;=% ");
    let expected = "%3A%2F%3F%23%5B%5D%40%21%24%26%27%28%29%2A%2B%2C%3B%3D%25+";
    assert_eq_display!(encoded, expected);
}

#[test]
fn non_ascii() {
    let encoded = PercentEncoded::from_query_value("\u{03B1}\u{3042}\u{1F600}");
    let expected = "%CE%B1%E3%81%82%F0%9F%98%80";
    assert_eq_display!(encoded, expected);
}

#[test]
fn control_characters() {
    let encoded = PercentEncoded::from_query_value("\t\r\n\u{7F}");
    assert_eq_display!(encoded, "%09%0D%0A%7F");
}

#[test]
fn decodes_back() {
    let raw = "udp://tracker.example:6969/announce?passkey=a+b c";
    let encoded = PercentEncoded::from_query_value(raw).to_string();
    let uri = format!("magnet:?tr={}", encoded);
    let magnet = magnet_uri::parse(&uri).expect("encoded tracker should be decodable");
    assert_eq!(magnet.trackers(), [raw]);
}
