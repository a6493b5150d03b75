//! Note link grammar: classify URLs as references to notes of one account.
//!
//! Recognized shapes (path split on `/` after trimming one trailing `/`):
//!
//! - AppLink: `evernote:///view/{user}/{shard}/{guid}/{guid}/`
//! - WebLink: `https://{host}/shard/{shard}/nl/{user}/{guid}/`
//! - PublicLink: `https://{host}/shard/{shard}/sh/{guid}/{share_key}/`
//! - ShortenedLink: `https://{host}/l/{token}`
//!
//! AppLinks and WebLinks of other users or shards are not accessible and are
//! rejected. PublicLinks are accepted from any shard.

use notegraph_core::{AccountIdentity, Error, NoteLink, Result, UrlKind};
use url::Url;

/// Scheme of in-app note links
pub const APP_LINK_SCHEME: &str = "evernote";

const WEB_SCHEME: &str = "https";

/// Creates and classifies note URLs for one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLinkParser {
    identity: AccountIdentity,
}

impl NoteLinkParser {
    /// Create a parser gated on the given account identity
    pub fn new(identity: AccountIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &AccountIdentity {
        &self.identity
    }

    /// Classify `url` found in note `note_guid` with anchor text `text`.
    ///
    /// Returns `None` when the URL is not a reference to a note of this
    /// account; malformed and unrelated URLs are not distinguished. An empty
    /// guid or token segment never matches.
    pub fn parse_note_link(&self, note_guid: &str, url: &Url, text: &str) -> Option<NoteLink> {
        let path = url.path();
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let segments: Vec<&str> = trimmed.split('/').collect();
        let id = &self.identity;

        let (target, kind) = match url.scheme() {
            APP_LINK_SCHEME => match segments.as_slice() {
                ["", "view", user, shard, guid, guid_again]
                    if !guid.is_empty()
                        && *user == id.user_id
                        && *shard == id.shard_id
                        && guid == guid_again =>
                {
                    (Some(*guid), UrlKind::AppLink)
                }
                _ => return None,
            },
            WEB_SCHEME if url.host_str() == Some(id.host.as_str()) => match segments.as_slice() {
                ["", "l", token] if !token.is_empty() => (None, UrlKind::ShortenedLink),
                ["", "shard", shard, "nl", user, guid]
                    if !guid.is_empty() && *shard == id.shard_id && *user == id.user_id =>
                {
                    (Some(*guid), UrlKind::WebLink)
                }
                ["", "shard", _shard, "sh", guid, _share_key] if !guid.is_empty() => {
                    (Some(*guid), UrlKind::PublicLink)
                }
                _ => return None,
            },
            _ => return None,
        };

        Some(NoteLink::new(
            note_guid,
            target.map(str::to_string),
            text,
            url.clone(),
            kind,
        ))
    }

    /// `evernote:///view/{user}/{shard}/{guid}/{guid}/`
    pub fn app_link_url(&self, note_guid: &str) -> Result<Url> {
        build_url(
            UrlKind::AppLink,
            &format!(
                "{}:///view/{}/{}/{}/{}/",
                APP_LINK_SCHEME, self.identity.user_id, self.identity.shard_id, note_guid, note_guid
            ),
        )
    }

    /// `https://{host}/shard/{shard}/nl/{user}/{guid}/`
    pub fn web_link_url(&self, note_guid: &str) -> Result<Url> {
        build_url(
            UrlKind::WebLink,
            &format!(
                "{}://{}/shard/{}/nl/{}/{}/",
                WEB_SCHEME,
                self.identity.host,
                self.identity.shard_id,
                self.identity.user_id,
                note_guid
            ),
        )
    }

    /// `https://{host}/shard/{shard}/sh/{guid}/{share_key}/`
    pub fn public_link_url(&self, note_guid: &str, share_key: &str) -> Result<Url> {
        build_url(
            UrlKind::PublicLink,
            &format!(
                "{}://{}/shard/{}/sh/{}/{}/",
                WEB_SCHEME, self.identity.host, self.identity.shard_id, note_guid, share_key
            ),
        )
    }

    /// `https://{host}/l/{token}`
    pub fn shortened_link_url(&self, token: &str) -> Result<Url> {
        build_url(
            UrlKind::ShortenedLink,
            &format!("{}://{}/l/{}", WEB_SCHEME, self.identity.host, token),
        )
    }

    /// Canonical URL of a note; only AppLink and WebLink identify a note on their own.
    pub fn canonical_url(&self, kind: UrlKind, note_guid: &str) -> Result<Url> {
        match kind {
            UrlKind::AppLink => self.app_link_url(note_guid),
            UrlKind::WebLink => self.web_link_url(note_guid),
            other => Err(Error::grammar_config(format!(
                "Failed to create URL for note with GUID [{}]: invalid/unsupported note URL kind [{}]",
                note_guid, other
            ))),
        }
    }
}

fn build_url(kind: UrlKind, raw: &str) -> Result<Url> {
    Url::parse(raw)
        .map_err(|e| Error::grammar_config(format!("Failed to create {} URL [{}]: {}", kind, raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_core::EVERNOTE_HOST;

    const HOST: &str = EVERNOTE_HOST;
    const USER_ID: &str = "76136038";
    const SHARD_ID: &str = "s12";

    fn parser() -> NoteLinkParser {
        NoteLinkParser::new(AccountIdentity::new(HOST, USER_ID, SHARD_ID))
    }

    fn guid() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_create_web_link_url() {
        let g = guid();
        let url = parser().web_link_url(&g).unwrap();
        assert_eq!(
            url.as_str(),
            format!("https://{}/shard/{}/nl/{}/{}/", HOST, SHARD_ID, USER_ID, g)
        );
    }

    #[test]
    fn test_create_app_link_url() {
        let g = guid();
        let url = parser().app_link_url(&g).unwrap();
        assert_eq!(
            url.as_str(),
            format!("evernote:///view/{}/{}/{}/{}/", USER_ID, SHARD_ID, g, g)
        );
    }

    #[test]
    fn test_create_public_link_url() {
        let g = guid();
        let key = "25771cdb535e9183";
        let url = parser().public_link_url(&g, key).unwrap();
        assert_eq!(
            url.as_str(),
            format!("https://{}/shard/{}/sh/{}/{}/", HOST, SHARD_ID, g, key)
        );
    }

    #[test]
    fn test_create_shortened_link_url() {
        let url = parser().shortened_link_url("AAxNlxMzi2VF1oV7").unwrap();
        assert_eq!(url.as_str(), format!("https://{}/l/AAxNlxMzi2VF1oV7", HOST));
    }

    #[test]
    fn test_round_trip_for_kinds_with_target() {
        let p = parser();
        let g = guid();
        let cases = [
            (p.app_link_url(&g).unwrap(), UrlKind::AppLink),
            (p.web_link_url(&g).unwrap(), UrlKind::WebLink),
            (p.public_link_url(&g, "key").unwrap(), UrlKind::PublicLink),
        ];

        for (url, kind) in cases {
            let link = p.parse_note_link("source", &url, "text").unwrap();
            assert_eq!(link.url_kind, kind);
            assert_eq!(link.target(), Some(g.as_str()));
            assert_eq!(link.source_note_guid, "source");
            assert_eq!(link.text, "text");
            assert_eq!(link.url, url);
        }
    }

    #[test]
    fn test_shortened_link_has_no_target() {
        let p = parser();
        let url = p.shortened_link_url(&guid()).unwrap();
        let link = p.parse_note_link("source", &url, "ShortenedLink").unwrap();
        assert_eq!(link.url_kind, UrlKind::ShortenedLink);
        assert_eq!(link.target(), None);
    }

    #[test]
    fn test_non_note_links() {
        let p = parser();
        for raw in [
            "https://example.org/",
            "https://example.org/shard/s12/nl/76136038/abc/",
            "http://www.evernote.com/shard/s12/nl/76136038/abc/",
            "https://www.evernote.com/",
            "https://www.evernote.com/l/",
            "https://www.evernote.com/l/a/b",
            "https://www.evernote.com/shard/s12/xx/76136038/abc/",
            "https://www.evernote.com/shard/s12/nl/76136038/abc/extra/",
            "evernote:///open/76136038/s12/abc/abc/",
            "mailto:someone@example.org",
            "ftp://www.evernote.com/l/abc",
        ] {
            assert!(p.parse_note_link("n", &url(raw), "x").is_none(), "{}", raw);
        }
    }

    #[test]
    fn test_web_link_of_other_account_rejected() {
        let p = parser();
        let other_user = url("https://www.evernote.com/shard/s12/nl/1/abc/");
        let other_shard = url("https://www.evernote.com/shard/s99/nl/76136038/abc/");
        assert!(p.parse_note_link("n", &other_user, "x").is_none());
        assert!(p.parse_note_link("n", &other_shard, "x").is_none());
    }

    #[test]
    fn test_app_link_of_other_account_rejected() {
        let p = parser();
        let other_user = url("evernote:///view/1/s12/abc/abc/");
        let other_shard = url("evernote:///view/76136038/s1/abc/abc/");
        let mismatched_guid = url("evernote:///view/76136038/s12/abc/def/");
        assert!(p.parse_note_link("n", &other_user, "x").is_none());
        assert!(p.parse_note_link("n", &other_shard, "x").is_none());
        assert!(p.parse_note_link("n", &mismatched_guid, "x").is_none());
    }

    #[test]
    fn test_public_link_accepted_from_any_shard() {
        let p = parser();
        let link = p
            .parse_note_link(
                "n",
                &url("https://www.evernote.com/shard/s99/sh/abc/key/"),
                "shared",
            )
            .unwrap();
        assert_eq!(link.url_kind, UrlKind::PublicLink);
        assert_eq!(link.target(), Some("abc"));
    }

    #[test]
    fn test_trailing_slash_is_optional() {
        let p = parser();
        let link = p
            .parse_note_link("n", &url("https://www.evernote.com/shard/s12/nl/76136038/abc"), "x")
            .unwrap();
        assert_eq!(link.url_kind, UrlKind::WebLink);
        assert_eq!(link.target(), Some("abc"));
    }

    #[test]
    fn test_empty_guid_or_token_rejected() {
        let p = parser();
        for raw in [
            format!("https://{}/shard/{}/nl/{}//", HOST, SHARD_ID, USER_ID),
            format!("evernote:///view/{}/{}///", USER_ID, SHARD_ID),
            format!("https://{}/shard/{}/sh//key/", HOST, SHARD_ID),
            format!("https://{}/l//", HOST),
            format!("https://{}/l/", HOST),
        ] {
            assert_eq!(p.parse_note_link("n", &url(&raw), "x"), None, "{}", raw);
        }
    }

    #[test]
    fn test_other_host_rejected() {
        let p = NoteLinkParser::new(AccountIdentity::new(
            "sandbox.evernote.com",
            USER_ID,
            SHARD_ID,
        ));
        let prod = url("https://www.evernote.com/l/abc");
        assert!(p.parse_note_link("n", &prod, "x").is_none());
    }

    #[test]
    fn test_canonical_url_kinds() {
        let p = parser();
        assert_eq!(
            p.canonical_url(UrlKind::WebLink, "g").unwrap(),
            p.web_link_url("g").unwrap()
        );
        assert_eq!(
            p.canonical_url(UrlKind::AppLink, "g").unwrap(),
            p.app_link_url("g").unwrap()
        );

        let err = p.canonical_url(UrlKind::PublicLink, "g").unwrap_err();
        assert!(matches!(err, Error::GrammarConfig { .. }));
        assert!(p.canonical_url(UrlKind::ShortenedLink, "g").is_err());
    }
}
