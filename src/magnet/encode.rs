//! Magnet URI encoder.

use core::fmt;

use alloc::string::String;

use crate::key::Key;
use crate::percent_encode::PercentEncoded;
use crate::PREFIX;

use super::Magnet;

impl fmt::Display for Magnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;
        write!(
            f,
            "{}={}",
            Key::DisplayName,
            PercentEncoded::from_query_value(self.display_name().unwrap_or_default())
        )?;

        write_raw(f, Key::ExactTopic, &self.exact_topics)?;
        if self.exact_length > 0 {
            write!(f, "&{}={}", Key::ExactLength, self.exact_length)?;
        }
        write_encoded(f, Key::Tracker, &self.trackers)?;
        write_encoded(f, Key::AcceptableSource, &self.acceptable_sources)?;
        write_encoded(f, Key::ExactSource, &self.exact_sources)?;

        if let Some((first, rest)) = self.keyword_topics.split_first() {
            write!(f, "&{}={}", Key::KeywordTopic, first)?;
            rest.iter().try_for_each(|keyword| write!(f, "+{}", keyword))?;
        }
        match self.manifest_topic() {
            Some(topic) if !topic.is_empty() => write!(f, "&{}={}", Key::ManifestTopic, topic)?,
            _ => {}
        }

        // `BTreeMap` iterates in key order, which makes the output reproducible.
        for (key, values) in &self.extra {
            write_raw(f, key, values)?;
        }
        Ok(())
    }
}

/// Writes one `&key=value` parameter per value, verbatim.
fn write_raw<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    key: K,
    values: &[String],
) -> fmt::Result {
    values
        .iter()
        .try_for_each(|value| write!(f, "&{}={}", key, value))
}

/// Writes one `&key=value` parameter per value, percent-encoding the values.
fn write_encoded(f: &mut fmt::Formatter<'_>, key: Key, values: &[String]) -> fmt::Result {
    values.iter().try_for_each(|value| {
        write!(
            f,
            "&{}={}",
            key,
            PercentEncoded::from_query_value(value.as_str())
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;

    #[test]
    fn empty() {
        assert_eq!(Magnet::new().to_string(), "magnet:?dn=");
    }

    #[test]
    fn field_order() {
        let mut magnet = Magnet::new();
        magnet.push_extra("x.pe", "1.2.3.4:5");
        magnet.set_manifest_topic(Some("urn:sha1:M".into()));
        magnet.push_keyword_topic("foo");
        magnet.push_keyword_topic("bar");
        magnet.push_exact_source("http://xs/");
        magnet.insert_acceptable_source("http://as/");
        magnet.insert_tracker("udp://tr:80");
        magnet.set_exact_length(42).unwrap();
        magnet.insert_exact_topic("urn:btih:X");
        magnet.set_display_name(Some("name".into()));

        assert_eq!(
            magnet.to_string(),
            "magnet:?dn=name&xt=urn:btih:X&xl=42&tr=udp%3A%2F%2Ftr%3A80\
             &as=http%3A%2F%2Fas%2F&xs=http%3A%2F%2Fxs%2F&kt=foo+bar\
             &mt=urn:sha1:M&x.pe=1.2.3.4:5"
        );
    }

    #[test]
    fn empty_manifest_topic_is_omitted() {
        let mut magnet = Magnet::new();
        magnet.set_manifest_topic(Some(String::new()));
        assert_eq!(magnet.to_string(), "magnet:?dn=");
    }
}
