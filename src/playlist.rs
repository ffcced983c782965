//! Contains all the structs produced by parsing.
//!
//! The main type here is [`Playlist`], a single document covering both
//! media and master (variant) manifests: whichever tags the input carried
//! populate the corresponding fields and collections, in input order.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset};

use crate::attributes::AttributeList;

/// A parsed M3U8 document.
///
/// One `Playlist` covers both
/// [Media Playlists](https://tools.ietf.org/html/rfc8216#section-4.3.3) and
/// [Master Playlists](https://tools.ietf.org/html/rfc8216#section-4.3.4):
/// `is_variant` reports which kind of URI lines were found, and the
/// collections hold whatever the manifest declared, in input order.
///
/// Scalar fields are `Some` once the corresponding tag has been seen, so a
/// tag carrying an unparsable value still registers as present.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Playlist {
    /// `#EXT-X-TARGETDURATION:<s>`
    pub target_duration: Option<u64>,
    /// `#EXT-X-VERSION:<n>`
    pub version: Option<u64>,
    /// `#EXT-X-MEDIA-SEQUENCE:<number>`; cleared by `#EXT-X-STREAM-INF`,
    /// which marks the document as a master playlist.
    pub media_sequence: Option<i64>,
    /// `#EXT-X-DISCONTINUITY-SEQUENCE:<number>`
    pub discontinuity_sequence: Option<i64>,
    /// `#EXT-X-ALLOW-CACHE:<YES|NO>`, lowercased.
    pub allow_cache: Option<String>,
    /// `#EXT-X-PLAYLIST-TYPE:<EVENT|VOD>`, lowercased.
    pub playlist_type: Option<String>,
    /// First `#EXT-X-PROGRAM-DATE-TIME` in the document, verbatim.
    pub program_date_time: Option<String>,

    pub is_variant: bool,
    pub is_endlist: bool,
    pub is_i_frames_only: bool,
    pub is_independent_segments: bool,
    pub is_images_only: bool,

    /// `#EXT-X-START`
    pub start: Option<Start>,
    /// `#EXT-X-SERVER-CONTROL`
    pub server_control: Option<ServerControl>,
    /// `#EXT-X-PART-INF`
    pub part_inf: Option<PartInf>,
    /// `#EXT-X-SKIP`
    pub skip: Option<Skip>,
    /// `#EXT-X-PRELOAD-HINT`
    pub preload_hint: Option<PreloadHint>,
    /// `#EXT-X-CONTENT-STEERING`
    pub content_steering: Option<ContentSteering>,

    pub segments: Vec<MediaSegment>,
    pub variants: Vec<VariantStream>,
    pub iframe_streams: Vec<IFrameStream>,
    pub image_streams: Vec<ImageStream>,
    pub media: Vec<AlternativeMedia>,
    /// Every `#EXT-X-KEY` seen, in order. Segments share these via `Arc`.
    pub keys: Vec<Arc<Key>>,
    pub session_keys: Vec<Key>,
    /// Every `#EXT-X-MAP` seen, in order. Segments share these via `Arc`.
    pub segment_maps: Vec<Arc<Map>>,
    pub rendition_reports: Vec<RenditionReport>,
    pub session_data: Vec<SessionData>,
    pub tiles: Vec<Tiles>,
}

impl Playlist {
    /// Wall-clock start time for each segment.
    ///
    /// The most recent segment `#EXT-X-PROGRAM-DATE-TIME` is propagated
    /// forward and advanced by each segment's duration; segments before
    /// the first timestamp yield `None`. Timestamps that fail to parse as
    /// RFC 3339 are skipped.
    pub fn segment_program_date_times(&self) -> Vec<Option<DateTime<FixedOffset>>> {
        let mut current: Option<DateTime<FixedOffset>> = None;
        self.segments
            .iter()
            .map(|segment| {
                let tagged = segment
                    .program_date_time
                    .as_deref()
                    .and_then(|s| DateTime::parse_from_rfc3339(s).ok());
                if tagged.is_some() {
                    current = tagged;
                }
                let at = current;
                if let Some(t) = current {
                    let step = Duration::milliseconds((segment.duration * 1000.0).round() as i64);
                    current = Some(t + step);
                }
                at
            })
            .collect()
    }
}

// -----------------------------------------------------------------------------------------------
// Media Segment
// -----------------------------------------------------------------------------------------------

/// A [Media Segment](https://tools.ietf.org/html/rfc8216#section-3):
/// a URI line plus every tag that accumulated before it.
///
/// `uri` is `None` only for a trailing segment whose tags were never
/// terminated by a URI line before end of input.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MediaSegment {
    pub uri: Option<String>,
    /// `#EXTINF:<duration>,[<title>]`
    pub duration: f64,
    /// `#EXTINF:<duration>,[<title>]`
    pub title: Option<String>,
    /// `#EXT-X-BYTERANGE:<n>[@<o>]`, raw.
    pub byterange: Option<String>,
    /// `#EXT-X-BITRATE:<n>`
    pub bitrate: Option<u64>,
    /// `#EXT-X-DISCONTINUITY`
    pub discontinuity: bool,
    /// Most recent `#EXT-X-PROGRAM-DATE-TIME` before this segment, verbatim.
    pub program_date_time: Option<String>,

    /// `#EXT-X-CUE-IN`
    pub cue_in: bool,
    /// Inside a `#EXT-X-CUE-OUT` span.
    pub cue_out: bool,
    /// First segment of a cue-out span.
    pub cue_out_start: bool,
    /// The cue-out carried an explicit `DURATION` token.
    pub cue_out_explicitly_duration: bool,
    pub scte35: Option<String>,
    pub oatcls_scte35: Option<String>,
    pub scte35_duration: Option<String>,
    pub scte35_elapsedtime: Option<String>,
    /// `#EXT-X-ASSET` attribute list pending at finalization.
    pub asset_metadata: Option<AttributeList>,

    /// The `#EXT-X-KEY` in effect, shared with [`Playlist::keys`].
    pub key: Option<Arc<Key>>,
    /// The `#EXT-X-MAP` in effect, shared with [`Playlist::segment_maps`].
    pub init_section: Option<Arc<Map>>,

    /// `#EXT-X-DATERANGE` tags pending at finalization, in tag order.
    pub dateranges: Vec<DateRange>,
    /// `#EXT-X-GAP`
    pub gap_tag: bool,
    /// `#EXT-X-BLACKOUT`
    pub blackout: Option<Blackout>,
    /// `#EXT-X-PART` partial segments, in tag order.
    pub parts: Vec<Part>,
}

impl MediaSegment {
    pub fn empty() -> MediaSegment {
        Default::default()
    }
}

/// `#EXT-X-BLACKOUT[:<params>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blackout {
    /// The tag appeared without parameters.
    Present,
    /// The raw parameter string following the `:`.
    Params(String),
}

// -----------------------------------------------------------------------------------------------
// Keys and init sections
// -----------------------------------------------------------------------------------------------

/// [`#EXT-X-KEY:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.2.4)
/// or `#EXT-X-SESSION-KEY`.
///
/// Applies to every Media Segment between it and the next `#EXT-X-KEY`
/// tag (or the end of the playlist). All attributes are quote-stripped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Key {
    pub method: Option<String>,
    pub uri: Option<String>,
    pub iv: Option<String>,
    pub keyformat: Option<String>,
    pub keyformatversions: Option<String>,
}

impl Key {
    pub fn from_attributes(attrs: &AttributeList) -> Key {
        Key {
            method: attrs.get_unquoted("method"),
            uri: attrs.get_unquoted("uri"),
            iv: attrs.get_unquoted("iv"),
            keyformat: attrs.get_unquoted("keyformat"),
            keyformatversions: attrs.get_unquoted("keyformatversions"),
        }
    }
}

/// [`#EXT-X-MAP:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.2.5)
///
/// The Media Initialization Section for every Media Segment after it,
/// until replaced.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Map {
    pub uri: Option<String>,
    pub byterange: Option<String>,
}

impl Map {
    pub fn from_attributes(attrs: &AttributeList) -> Map {
        Map {
            uri: attrs.get_unquoted("uri"),
            byterange: attrs.get_unquoted("byterange"),
        }
    }
}

// -----------------------------------------------------------------------------------------------
// Date ranges and parts
// -----------------------------------------------------------------------------------------------

/// [`#EXT-X-DATERANGE:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.2.7)
///
/// Attached to the next finalized segment (or part). Client `X-*`
/// attributes are collected into `x_attrs` with normalized keys and raw
/// values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DateRange {
    pub id: Option<String>,
    pub class: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<f64>,
    pub planned_duration: Option<f64>,
    pub scte35_cmd: Option<String>,
    pub scte35_out: Option<String>,
    pub scte35_in: Option<String>,
    pub end_on_next: Option<String>,
    pub x_attrs: AttributeList,
}

impl DateRange {
    pub fn from_attributes(attrs: &AttributeList) -> DateRange {
        let x_attrs: Vec<_> = attrs
            .iter()
            .filter(|a| a.key.starts_with("x_"))
            .cloned()
            .collect();
        DateRange {
            id: attrs.get_unquoted("id"),
            class: attrs.get_unquoted("class"),
            start_date: attrs.get_unquoted("start_date"),
            end_date: attrs.get_unquoted("end_date"),
            duration: attrs.get_f64("duration"),
            planned_duration: attrs.get_f64("planned_duration"),
            scte35_cmd: attrs.get_owned("scte35_cmd"),
            scte35_out: attrs.get_owned("scte35_out"),
            scte35_in: attrs.get_owned("scte35_in"),
            end_on_next: attrs.get_owned("end_on_next"),
            x_attrs: x_attrs.into(),
        }
    }
}

/// `#EXT-X-PART:<attribute-list>` (LL-HLS partial segment).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Part {
    pub uri: Option<String>,
    pub duration: f64,
    pub byterange: Option<String>,
    pub independent: Option<String>,
    pub gap: Option<String>,
    /// An `#EXT-X-GAP` tag preceded this part.
    pub gap_tag: bool,
    pub dateranges: Vec<DateRange>,
}

impl Part {
    pub fn from_attributes(attrs: &AttributeList) -> Part {
        Part {
            uri: attrs.get_unquoted("uri"),
            duration: attrs.get_f64("duration").unwrap_or(0.0),
            byterange: attrs.get_owned("byterange"),
            independent: attrs.get_owned("independent"),
            gap: attrs.get_owned("gap"),
            gap_tag: false,
            dateranges: Vec::new(),
        }
    }
}

// -----------------------------------------------------------------------------------------------
// Variant streams
// -----------------------------------------------------------------------------------------------

/// [`#EXT-X-STREAM-INF:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.4.2)
///
/// A Variant Stream: a Media Playlist carrying the same content at a
/// particular bit rate, resolution and codec set. The URI comes from the
/// line following the tag. `BANDWIDTH` tolerates fractional values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VariantStream {
    pub uri: String,
    pub program_id: Option<i64>,
    pub bandwidth: i64,
    pub average_bandwidth: Option<i64>,
    pub resolution: Option<String>,
    pub codecs: Option<String>,
    pub frame_rate: Option<f64>,
    pub video: Option<String>,
    pub audio: Option<String>,
    pub subtitles: Option<String>,
    pub closed_captions: Option<String>,
    pub video_range: Option<String>,
    pub hdcp_level: Option<String>,
    pub pathway_id: Option<String>,
    pub stable_variant_id: Option<String>,
    pub req_video_layout: Option<String>,
}

impl VariantStream {
    pub fn from_attributes(uri: &str, attrs: &AttributeList) -> VariantStream {
        VariantStream {
            uri: uri.to_string(),
            program_id: attrs.get_i64("program_id"),
            bandwidth: attrs.get_f64("bandwidth").map(|b| b as i64).unwrap_or(0),
            average_bandwidth: attrs.get_i64("average_bandwidth"),
            resolution: attrs.get_owned("resolution"),
            codecs: attrs.get_unquoted("codecs"),
            frame_rate: attrs.get_f64("frame_rate"),
            video: attrs.get_unquoted("video"),
            audio: attrs.get_unquoted("audio"),
            subtitles: attrs.get_unquoted("subtitles"),
            closed_captions: attrs.get_owned("closed_captions"),
            video_range: attrs.get_unquoted("video_range"),
            hdcp_level: attrs.get_owned("hdcp_level"),
            pathway_id: attrs.get_unquoted("pathway_id"),
            stable_variant_id: attrs.get_unquoted("stable_variant_id"),
            req_video_layout: attrs.get_owned("req_video_layout"),
        }
    }
}

/// [`#EXT-X-I-FRAME-STREAM-INF:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.4.3)
///
/// Self-contained: the URI is carried as an attribute, no URI line follows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IFrameStream {
    pub uri: Option<String>,
    pub program_id: Option<i64>,
    pub bandwidth: i64,
    pub average_bandwidth: Option<i64>,
    pub resolution: Option<String>,
    pub codecs: Option<String>,
    pub video_range: Option<String>,
    pub hdcp_level: Option<String>,
    pub pathway_id: Option<String>,
    pub stable_variant_id: Option<String>,
}

impl IFrameStream {
    pub fn from_attributes(attrs: &AttributeList) -> IFrameStream {
        IFrameStream {
            uri: attrs.get_unquoted("uri"),
            program_id: attrs.get_i64("program_id"),
            bandwidth: attrs.get_i64("bandwidth").unwrap_or(0),
            average_bandwidth: attrs.get_i64("average_bandwidth"),
            resolution: attrs.get_owned("resolution"),
            codecs: attrs.get_unquoted("codecs"),
            video_range: attrs.get_unquoted("video_range"),
            hdcp_level: attrs.get_owned("hdcp_level"),
            pathway_id: attrs.get_unquoted("pathway_id"),
            stable_variant_id: attrs.get_unquoted("stable_variant_id"),
        }
    }
}

/// `#EXT-X-IMAGE-STREAM-INF:<attribute-list>` (trick-play image track).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImageStream {
    pub uri: Option<String>,
    pub program_id: Option<i64>,
    pub bandwidth: i64,
    pub average_bandwidth: Option<i64>,
    pub resolution: Option<String>,
    pub codecs: Option<String>,
    pub pathway_id: Option<String>,
    pub stable_variant_id: Option<String>,
}

impl ImageStream {
    pub fn from_attributes(attrs: &AttributeList) -> ImageStream {
        ImageStream {
            uri: attrs.get_unquoted("uri"),
            program_id: attrs.get_i64("program_id"),
            bandwidth: attrs.get_i64("bandwidth").unwrap_or(0),
            average_bandwidth: attrs.get_i64("average_bandwidth"),
            resolution: attrs.get_owned("resolution"),
            codecs: attrs.get_unquoted("codecs"),
            pathway_id: attrs.get_unquoted("pathway_id"),
            stable_variant_id: attrs.get_unquoted("stable_variant_id"),
        }
    }
}

// -----------------------------------------------------------------------------------------------
// Renditions and session-level records
// -----------------------------------------------------------------------------------------------

/// [`#EXT-X-MEDIA:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.4.1)
///
/// Relates Media Playlists containing alternative Renditions of the same
/// content, e.g. audio in several languages. Enumerated attributes
/// (`TYPE`, `DEFAULT`, `AUTOSELECT`, `FORCED`) are kept raw; the
/// quoted-string attributes are quote-stripped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AlternativeMedia {
    pub media_type: Option<String>,
    pub uri: Option<String>,
    pub group_id: Option<String>,
    pub language: Option<String>,
    pub assoc_language: Option<String>,
    pub name: Option<String>,
    pub default: Option<String>,
    pub autoselect: Option<String>,
    pub forced: Option<String>,
    pub instream_id: Option<String>,
    pub characteristics: Option<String>,
    pub channels: Option<String>,
    pub stable_rendition_id: Option<String>,
}

impl AlternativeMedia {
    pub fn from_attributes(attrs: &AttributeList) -> AlternativeMedia {
        AlternativeMedia {
            media_type: attrs.get_owned("type"),
            uri: attrs.get_unquoted("uri"),
            group_id: attrs.get_unquoted("group_id"),
            language: attrs.get_unquoted("language"),
            assoc_language: attrs.get_unquoted("assoc_language"),
            name: attrs.get_unquoted("name"),
            default: attrs.get_owned("default"),
            autoselect: attrs.get_owned("autoselect"),
            forced: attrs.get_owned("forced"),
            instream_id: attrs.get_unquoted("instream_id"),
            characteristics: attrs.get_unquoted("characteristics"),
            channels: attrs.get_unquoted("channels"),
            stable_rendition_id: attrs.get_unquoted("stable_rendition_id"),
        }
    }
}

/// `#EXT-X-RENDITION-REPORT:<attribute-list>` (LL-HLS).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenditionReport {
    pub uri: Option<String>,
    pub last_msn: Option<i64>,
    pub last_part: Option<i64>,
}

impl RenditionReport {
    pub fn from_attributes(attrs: &AttributeList) -> RenditionReport {
        RenditionReport {
            uri: attrs.get_unquoted("uri"),
            last_msn: attrs.get_i64("last_msn"),
            last_part: attrs.get_i64("last_part"),
        }
    }
}

/// [`#EXT-X-SESSION-DATA:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.4.4)
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionData {
    pub data_id: Option<String>,
    pub value: Option<String>,
    pub uri: Option<String>,
    pub language: Option<String>,
}

impl SessionData {
    pub fn from_attributes(attrs: &AttributeList) -> SessionData {
        SessionData {
            data_id: attrs.get_unquoted("data_id"),
            value: attrs.get_unquoted("value"),
            uri: attrs.get_unquoted("uri"),
            language: attrs.get_unquoted("language"),
        }
    }
}

/// `#EXT-X-TILES:<attribute-list>` (trick-play tile grid).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tiles {
    pub resolution: Option<String>,
    pub layout: Option<String>,
    pub duration: Option<f64>,
    pub uri: Option<String>,
}

impl Tiles {
    pub fn from_attributes(attrs: &AttributeList) -> Tiles {
        Tiles {
            resolution: attrs.get_owned("resolution"),
            layout: attrs.get_owned("layout"),
            duration: attrs.get_f64("duration"),
            uri: attrs.get_unquoted("uri"),
        }
    }
}

// -----------------------------------------------------------------------------------------------
// Document-level aggregates
// -----------------------------------------------------------------------------------------------

/// [`#EXT-X-START:<attribute-list>`](https://tools.ietf.org/html/rfc8216#section-4.3.5.2)
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Start {
    pub time_offset: f64,
    pub precise: Option<String>,
}

impl Start {
    pub fn from_attributes(attrs: &AttributeList) -> Start {
        Start {
            time_offset: attrs.get_f64("time_offset").unwrap_or(0.0),
            precise: attrs.get_owned("precise"),
        }
    }
}

/// `#EXT-X-SERVER-CONTROL:<attribute-list>` (LL-HLS).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ServerControl {
    pub can_block_reload: Option<String>,
    pub hold_back: Option<f64>,
    pub part_hold_back: Option<f64>,
    pub can_skip_until: Option<f64>,
    pub can_skip_dateranges: Option<String>,
}

impl ServerControl {
    pub fn from_attributes(attrs: &AttributeList) -> ServerControl {
        ServerControl {
            can_block_reload: attrs.get_owned("can_block_reload"),
            hold_back: attrs.get_f64("hold_back"),
            part_hold_back: attrs.get_f64("part_hold_back"),
            can_skip_until: attrs.get_f64("can_skip_until"),
            can_skip_dateranges: attrs.get_owned("can_skip_dateranges"),
        }
    }
}

/// `#EXT-X-PART-INF:<attribute-list>` (LL-HLS).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartInf {
    pub part_target: f64,
}

impl PartInf {
    pub fn from_attributes(attrs: &AttributeList) -> PartInf {
        PartInf {
            part_target: attrs.get_f64("part_target").unwrap_or(0.0),
        }
    }
}

/// `#EXT-X-SKIP:<attribute-list>` (LL-HLS delta update).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Skip {
    pub skipped_segments: i64,
    pub recently_removed_dateranges: Option<String>,
}

impl Skip {
    pub fn from_attributes(attrs: &AttributeList) -> Skip {
        Skip {
            skipped_segments: attrs.get_i64("skipped_segments").unwrap_or(0),
            recently_removed_dateranges: attrs.get_unquoted("recently_removed_dateranges"),
        }
    }
}

/// `#EXT-X-PRELOAD-HINT:<attribute-list>` (LL-HLS).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PreloadHint {
    pub hint_type: Option<String>,
    pub uri: Option<String>,
    pub byterange_start: Option<i64>,
    pub byterange_length: Option<i64>,
}

impl PreloadHint {
    pub fn from_attributes(attrs: &AttributeList) -> PreloadHint {
        PreloadHint {
            hint_type: attrs.get_owned("type"),
            uri: attrs.get_unquoted("uri"),
            byterange_start: attrs.get_i64("byterange_start"),
            byterange_length: attrs.get_i64("byterange_length"),
        }
    }
}

/// `#EXT-X-CONTENT-STEERING:<attribute-list>`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContentSteering {
    pub server_uri: Option<String>,
    pub pathway_id: Option<String>,
}

impl ContentSteering {
    pub fn from_attributes(attrs: &AttributeList) -> ContentSteering {
        ContentSteering {
            server_uri: attrs.get_unquoted("server_uri"),
            pathway_id: attrs.get_unquoted("pathway_id"),
        }
    }
}

// -----------------------------------------------------------------------------------------------
// Display
// -----------------------------------------------------------------------------------------------

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Playlist | segments: {} ~ variants: {}",
            self.segments.len(),
            self.variants.len()
        )?;
        if let Some(d) = self.target_duration {
            write!(f, " ~ target: {}", d)?;
        }
        if self.is_variant {
            write!(f, " [variant]")?;
        }
        if self.is_endlist {
            write!(f, " [endlist]")?;
        }
        if self.is_i_frames_only {
            write!(f, " [iframes only]")?;
        }
        if self.is_independent_segments {
            write!(f, " [independent segments]")?;
        }
        writeln!(f, "]")?;

        for (i, segment) in self.segments.iter().enumerate() {
            write!(f, " {} -> {}", i + 1, segment)?;
        }
        for (i, variant) in self.variants.iter().enumerate() {
            write!(f, " {} -> {}", i + 1, variant)?;
        }
        Ok(())
    }
}

impl fmt::Display for MediaSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Segment | duration: {:?}", self.duration)?;
        if let Some(ref v) = self.title {
            write!(f, " ~ title: {:?}", v)?;
        }
        if let Some(ref v) = self.byterange {
            write!(f, " ~ byterange: {:?}", v)?;
        }
        if self.discontinuity {
            write!(f, " [discontinuity]")?;
        }
        if self.cue_out {
            write!(f, " [cue out]")?;
        }
        if self.cue_in {
            write!(f, " [cue in]")?;
        }
        if self.gap_tag {
            write!(f, " [gap]")?;
        }
        if !self.parts.is_empty() {
            write!(f, " ~ parts: {}", self.parts.len())?;
        }
        writeln!(f, " ~ uri: {:?}]", self.uri)
    }
}

impl fmt::Display for VariantStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Variant | uri: {:?}", self.uri)?;
        write!(f, " ~ bandwidth: {}", self.bandwidth)?;
        if let Some(ref v) = self.resolution {
            write!(f, " ~ res: {}", v)?;
        }
        if let Some(ref v) = self.codecs {
            write!(f, " ~ codecs: {}", v)?;
        }
        if let Some(v) = self.frame_rate {
            write!(f, " ~ fps: {}", v)?;
        }
        if let Some(ref v) = self.audio {
            write!(f, " ~ audio: {}", v)?;
        }
        if let Some(ref v) = self.subtitles {
            write!(f, " ~ subs: {}", v)?;
        }
        writeln!(f, "]")
    }
}
