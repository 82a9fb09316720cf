//! Utilities for tests.

/// Asserts that the `Display` output of the value equals to the given string.
#[allow(unused_macros)]
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        let left = &$left;
        let right: &str = $right.as_ref();
        assert_eq!(left.to_string(), right, "left={:?}, right={:?}", left, right);
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        let left = &$left;
        let right: &str = $right.as_ref();
        assert_eq!(
            left.to_string(),
            right,
            "left={:?}, right={:?}, {}",
            left,
            right,
            format_args!($($args)*)
        );
    }};
}

/// Magnet URIs seen in the wild, with the normalized encoding of each.
#[allow(dead_code)]
pub const REAL_WORLD: &[(&str, &str)] = &[
    (
        "magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a\
         &dn=Example%20File&tr=http%3A%2F%2Ftracker.example.com%2Fannounce",
        "magnet:?dn=Example+File&xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a\
         &tr=http%3A%2F%2Ftracker.example.com%2Fannounce",
    ),
    (
        "magnet:?xt=urn:btih:dd8255ecdc7ca55fb0bbf81323d87062db1f6d1c&dn=Big+Buck+Bunny\
         &tr=udp%3A%2F%2Fexplodie.org%3A6969&tr=udp%3A%2F%2Ftracker.coppersurfer.tk%3A6969\
         &tr=udp%3A%2F%2Fexplodie.org%3A6969\
         &ws=https%3A%2F%2Fwebtorrent.io%2Ftorrents%2F&xs=https%3A%2F%2Fwebtorrent.io%2Ftorrents%2Fbig-buck-bunny.torrent",
        "magnet:?dn=Big+Buck+Bunny&xt=urn:btih:dd8255ecdc7ca55fb0bbf81323d87062db1f6d1c\
         &tr=udp%3A%2F%2Fexplodie.org%3A6969&tr=udp%3A%2F%2Ftracker.coppersurfer.tk%3A6969\
         &xs=https%3A%2F%2Fwebtorrent.io%2Ftorrents%2Fbig-buck-bunny.torrent\
         &ws=https://webtorrent.io/torrents/",
    ),
    (
        "magnet:?xt=urn:ed2k:354B15E68FB8F36D7CD88FF94116CDC1\
         &xt=urn:tree:tiger:7N5OAMRNGMSSEUE3ORHOKWN4WWIQ5X4EBOOTLJY\
         &xl=10826029&dn=mediawiki-1.15.1.tar.gz\
         &xs=http%3A%2F%2Fcache.example.org%2FXRX2PEFXOOEJFRVUCX6HMZMKS5TWG4K5\
         &xs=dchub://example.org",
        "magnet:?dn=mediawiki-1.15.1.tar.gz&xt=urn:ed2k:354B15E68FB8F36D7CD88FF94116CDC1\
         &xt=urn:tree:tiger:7N5OAMRNGMSSEUE3ORHOKWN4WWIQ5X4EBOOTLJY&xl=10826029\
         &xs=dchub%3A%2F%2Fexample.org\
         &xs=http%3A%2F%2Fcache.example.org%2FXRX2PEFXOOEJFRVUCX6HMZMKS5TWG4K5",
    ),
    (
        "magnet:?kt=martin+luther+king+mp3",
        "magnet:?dn=&kt=king+luther+martin+mp3",
    ),
];
