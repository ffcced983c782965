//! A single-pass parser for m3u8 playlists
//! ([HTTP Live Streaming](https://tools.ietf.org/html/rfc8216), plus the
//! common LL-HLS, content-steering, SCTE-35 and blackout extensions).
//!
//! One forward scan over the manifest produces a single [`Playlist`]
//! document covering media and master playlists alike. Parsing is
//! best-effort: unknown tags are treated as comments and malformed
//! attribute values surface as missing fields, never as errors.
//!
//! # Examples
//!
//! Parsing a media playlist:
//!
//! ```
//! use m3u8_scan::parse_playlist;
//!
//! let manifest = b"#EXTM3U\n\
//! #EXT-X-TARGETDURATION:6\n\
//! #EXT-X-VERSION:3\n\
//! #EXTINF:5.5,Intro\n\
//! https://example.com/1.ts\n\
//! #EXT-X-ENDLIST\n";
//!
//! let playlist = parse_playlist(manifest).unwrap();
//! assert_eq!(playlist.version, Some(3));
//! assert_eq!(playlist.segments[0].title.as_deref(), Some("Intro"));
//! assert!(playlist.is_endlist);
//! ```
//!
//! Parsing a master playlist:
//!
//! ```
//! use m3u8_scan::parse_playlist;
//!
//! let manifest = b"#EXTM3U\n\
//! #EXT-X-STREAM-INF:BANDWIDTH=5000000,RESOLUTION=1920x1080,CODECS=\"avc1.4d401f,mp4a.40.2\"\n\
//! https://example.com/hi.m3u8\n";
//!
//! let playlist = parse_playlist(manifest).unwrap();
//! assert!(playlist.is_variant);
//! assert_eq!(playlist.variants[0].bandwidth, 5000000);
//! assert_eq!(playlist.variants[0].codecs.as_deref(), Some("avc1.4d401f,mp4a.40.2"));
//! ```

mod attributes;
mod parser;
mod playlist;

pub use attributes::{parse_attribute_list, Attribute, AttributeList};
pub use parser::{parse_playlist, ParseError};
pub use playlist::*;
