//! The single-pass parser: line scanner, tag dispatcher, and the stateful
//! accumulator that binds tags to the segment or variant entry the next
//! URI line terminates.
//!
//! HLS semantics are sticky and positional: `#EXTINF` produces nothing
//! until its following URI, keys and init sections persist across many
//! segments, and cue-out spans straddle arbitrarily many segments. The
//! parser makes exactly one forward pass; [`ParserState`] carries
//! everything pending between lines, and the two finalizers consume it
//! when a URI arrives.
//!
//! Parsing is best-effort and total. Unknown tags are comments, malformed
//! attribute values degrade to missing fields, and the only error is
//! structurally empty input.

use std::mem;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::attributes::{lead_f64, lead_i64, parse_attribute_list, AttributeList};
use crate::playlist::{
    AlternativeMedia, Blackout, ContentSteering, DateRange, IFrameStream, ImageStream, Key, Map,
    MediaSegment, Part, PartInf, Playlist, PreloadHint, RenditionReport, ServerControl,
    SessionData, Skip, Start, Tiles, VariantStream,
};

/// Errors produced by [`parse_playlist`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input buffer was empty.
    #[error("empty playlist input")]
    Empty,
}

/// Parse an m3u8 playlist into a [`Playlist`] document.
///
/// The input is assumed UTF-8; invalid bytes are replaced rather than
/// rejected. LF, CRLF and lone CR line terminators are all accepted.
///
/// # Examples
///
/// ```
/// use m3u8_scan::parse_playlist;
///
/// let manifest = b"#EXTM3U\n\
/// #EXT-X-TARGETDURATION:6\n\
/// #EXTINF:5.5,Intro\n\
/// https://example.com/1.ts\n\
/// #EXT-X-ENDLIST\n";
///
/// let playlist = parse_playlist(manifest).unwrap();
/// assert_eq!(playlist.target_duration, Some(6));
/// assert_eq!(playlist.segments[0].duration, 5.5);
/// assert!(playlist.is_endlist);
/// ```
pub fn parse_playlist(input: &[u8]) -> Result<Playlist, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let text = String::from_utf8_lossy(input);
    let mut parser = Parser::default();
    for line in logical_lines(&text) {
        match line {
            Line::Tag(tag) => parser.handle_tag(tag),
            Line::Uri(uri) => parser.handle_uri(uri),
        }
    }
    Ok(parser.finish())
}

// -----------------------------------------------------------------------------------------------
// Line scanner
// -----------------------------------------------------------------------------------------------

/// One trimmed, non-blank logical line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Tag(&'a str),
    Uri(&'a str),
}

fn logical_lines(input: &str) -> LogicalLines<'_> {
    LogicalLines { rest: input }
}

struct LogicalLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        while !self.rest.is_empty() {
            let (line, rest) = split_physical_line(self.rest);
            self.rest = rest;
            let line = line.trim_matches(|c| c == ' ' || c == '\t' || c == '\r');
            if line.is_empty() {
                continue;
            }
            return Some(if line.starts_with('#') {
                Line::Tag(line)
            } else {
                Line::Uri(line)
            });
        }
        None
    }
}

/// Split off one physical line, consuming an LF, CRLF or lone CR terminator.
fn split_physical_line(s: &str) -> (&str, &str) {
    match s.find(|c| c == '\r' || c == '\n') {
        Some(at) => {
            let (line, rest) = s.split_at(at);
            let rest = if rest.starts_with("\r\n") {
                &rest[2..]
            } else {
                &rest[1..]
            };
            (line, rest)
        }
        None => (s, ""),
    }
}

// -----------------------------------------------------------------------------------------------
// Parser state
// -----------------------------------------------------------------------------------------------

/// The accumulator threaded through the scan.
///
/// Two kinds of state live here. Sticky references (`current_key`,
/// `current_map`) apply to every subsequent segment until overwritten.
/// Everything else is pending: it attaches to the next finalized segment
/// and is reset there. The SCTE-35 payload and asset metadata sit in
/// between — they are copied to each segment while a cue-out span is
/// open and drained by the segment that follows the `CUE-IN`.
#[derive(Default)]
struct ParserState {
    expect_segment: bool,
    expect_playlist: bool,

    segment: Option<MediaSegment>,

    current_key: Option<Arc<Key>>,
    current_map: Option<Arc<Map>>,

    discontinuity: bool,
    gap: bool,
    cue_in: bool,
    cue_out: bool,
    cue_out_start: bool,
    cue_out_explicitly_duration: bool,
    blackout: Option<Blackout>,

    scte35: Option<String>,
    oatcls_scte35: Option<String>,
    scte35_duration: Option<String>,
    scte35_elapsedtime: Option<String>,
    asset_metadata: Option<AttributeList>,

    program_date_time: Option<String>,
    dateranges: Vec<DateRange>,
    stream_info: Option<AttributeList>,
}

#[derive(Default)]
struct Parser {
    playlist: Playlist,
    state: ParserState,
}

impl Parser {
    // -------------------------------------------------------------------------------------------
    // Tag dispatcher
    //
    // Longest prefix first where tags overlap: DISCONTINUITY-SEQUENCE
    // before DISCONTINUITY, CUE-OUT-CONT before CUE-OUT. Valued tags
    // match with their trailing `:` so e.g. `#EXT-X-MEDIA:` cannot
    // swallow `#EXT-X-MEDIA-SEQUENCE:`.
    // -------------------------------------------------------------------------------------------

    fn handle_tag(&mut self, line: &str) {
        if line.starts_with("#EXTM3U") {
            // Playlist header, nothing to record
        } else if let Some(body) = line.strip_prefix("#EXTINF:") {
            self.extinf(body);
        } else if let Some(body) = line.strip_prefix("#EXT-X-TARGETDURATION:") {
            self.playlist.target_duration = Some(int_value(body));
        } else if let Some(body) = line.strip_prefix("#EXT-X-MEDIA-SEQUENCE:") {
            self.playlist.media_sequence = Some(lead_i64(body).unwrap_or(0));
        } else if let Some(body) = line.strip_prefix("#EXT-X-DISCONTINUITY-SEQUENCE:") {
            self.playlist.discontinuity_sequence = Some(lead_i64(body).unwrap_or(0));
        } else if let Some(body) = line.strip_prefix("#EXT-X-VERSION:") {
            self.playlist.version = Some(int_value(body));
        } else if let Some(body) = line.strip_prefix("#EXT-X-ALLOW-CACHE:") {
            self.playlist.allow_cache = Some(lowercase_value(body));
        } else if let Some(body) = line.strip_prefix("#EXT-X-PLAYLIST-TYPE:") {
            self.playlist.playlist_type = Some(lowercase_value(body));
        } else if let Some(body) = line.strip_prefix("#EXT-X-PROGRAM-DATE-TIME:") {
            self.program_date_time(body);
        } else if line.starts_with("#EXT-X-ENDLIST") {
            self.playlist.is_endlist = true;
        } else if line.starts_with("#EXT-X-I-FRAMES-ONLY") {
            self.playlist.is_i_frames_only = true;
        } else if line.starts_with("#EXT-X-INDEPENDENT-SEGMENTS") {
            self.playlist.is_independent_segments = true;
        } else if line.starts_with("#EXT-X-IMAGES-ONLY") {
            self.playlist.is_images_only = true;
        } else if line.starts_with("#EXT-X-DISCONTINUITY")
            && !line.starts_with("#EXT-X-DISCONTINUITY-SEQUENCE")
        {
            self.state.discontinuity = true;
        } else if line.starts_with("#EXT-X-GAP") {
            self.state.gap = true;
        } else if line.starts_with("#EXT-X-BLACKOUT") {
            self.blackout(line);
        } else if line.starts_with("#EXT-X-CUE-IN") {
            self.state.cue_in = true;
        } else if line.starts_with("#EXT-X-CUE-SPAN") {
            self.state.cue_out = true;
        } else if line.starts_with("#EXT-X-CUE-OUT-CONT") {
            self.cue_out_cont(line);
        } else if line.starts_with("#EXT-X-CUE-OUT") {
            self.cue_out(line);
        } else if let Some(body) = line.strip_prefix("#EXT-OATCLS-SCTE35:") {
            self.oatcls_scte35(body);
        } else if let Some(body) = line.strip_prefix("#EXT-X-ASSET:") {
            self.state.asset_metadata = Some(parse_attribute_list(body));
        } else if let Some(body) = line.strip_prefix("#EXT-X-KEY:") {
            self.key(body);
        } else if let Some(body) = line.strip_prefix("#EXT-X-SESSION-KEY:") {
            let attrs = parse_attribute_list(body);
            self.playlist.session_keys.push(Key::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-MAP:") {
            self.map(body);
        } else if let Some(body) = line.strip_prefix("#EXT-X-BYTERANGE:") {
            self.segment().byterange = Some(body.to_string());
            self.state.expect_segment = true;
        } else if let Some(body) = line.strip_prefix("#EXT-X-BITRATE:") {
            self.segment().bitrate = lead_i64(body).map(|n| n.max(0) as u64);
        } else if let Some(body) = line.strip_prefix("#EXT-X-DATERANGE:") {
            let attrs = parse_attribute_list(body);
            self.state.dateranges.push(DateRange::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-STREAM-INF:") {
            self.stream_inf(body);
        } else if let Some(body) = line.strip_prefix("#EXT-X-I-FRAME-STREAM-INF:") {
            let attrs = parse_attribute_list(body);
            self.playlist
                .iframe_streams
                .push(IFrameStream::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-IMAGE-STREAM-INF:") {
            let attrs = parse_attribute_list(body);
            self.playlist
                .image_streams
                .push(ImageStream::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-MEDIA:") {
            let attrs = parse_attribute_list(body);
            self.playlist
                .media
                .push(AlternativeMedia::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-START:") {
            let attrs = parse_attribute_list(body);
            self.playlist.start = Some(Start::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-SERVER-CONTROL:") {
            let attrs = parse_attribute_list(body);
            self.playlist.server_control = Some(ServerControl::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-PART-INF:") {
            let attrs = parse_attribute_list(body);
            self.playlist.part_inf = Some(PartInf::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-SKIP:") {
            let attrs = parse_attribute_list(body);
            self.playlist.skip = Some(Skip::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-RENDITION-REPORT:") {
            let attrs = parse_attribute_list(body);
            self.playlist
                .rendition_reports
                .push(RenditionReport::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-SESSION-DATA:") {
            let attrs = parse_attribute_list(body);
            self.playlist
                .session_data
                .push(SessionData::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-PRELOAD-HINT:") {
            let attrs = parse_attribute_list(body);
            self.playlist.preload_hint = Some(PreloadHint::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-CONTENT-STEERING:") {
            let attrs = parse_attribute_list(body);
            self.playlist.content_steering = Some(ContentSteering::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-TILES:") {
            let attrs = parse_attribute_list(body);
            self.playlist.tiles.push(Tiles::from_attributes(&attrs));
        } else if let Some(body) = line.strip_prefix("#EXT-X-PART:") {
            self.part(body);
        } else {
            trace!(line, "ignoring unrecognized tag");
        }
    }

    fn handle_uri(&mut self, uri: &str) {
        if self.state.expect_segment {
            self.finalize_segment(uri);
        } else if self.state.expect_playlist {
            self.finalize_playlist(uri);
        } else {
            trace!(uri, "ignoring URI line with nothing pending");
        }
    }

    // -------------------------------------------------------------------------------------------
    // Tag handlers
    // -------------------------------------------------------------------------------------------

    /// Per-segment tags may arrive in any order; the in-progress segment
    /// is created by whichever comes first.
    fn segment(&mut self) -> &mut MediaSegment {
        self.state.segment.get_or_insert_with(MediaSegment::empty)
    }

    fn extinf(&mut self, body: &str) {
        let segment = self.segment();
        segment.duration = lead_f64(body).unwrap_or(0.0);
        // Only the first comma separates duration from title
        if let Some((_, title)) = body.split_once(',') {
            let title = title.trim_start_matches(|c| c == ' ' || c == '\t');
            if !title.is_empty() {
                segment.title = Some(title.to_string());
            }
        }
        self.state.expect_segment = true;
    }

    fn program_date_time(&mut self, body: &str) {
        let value = body.trim_start_matches(|c| c == ' ' || c == '\t');
        self.state.program_date_time = Some(value.to_string());
        // Document scope keeps the first occurrence
        if self.playlist.program_date_time.is_none() {
            self.playlist.program_date_time = Some(value.to_string());
        }
    }

    fn blackout(&mut self, line: &str) {
        self.state.blackout = Some(match line.splitn(2, ':').nth(1) {
            Some(params) => Blackout::Params(params.to_string()),
            None => Blackout::Present,
        });
    }

    fn key(&mut self, body: &str) {
        let attrs = parse_attribute_list(body);
        let key = Arc::new(Key::from_attributes(&attrs));
        self.state.current_key = Some(Arc::clone(&key));
        self.playlist.keys.push(key);
    }

    fn map(&mut self, body: &str) {
        let attrs = parse_attribute_list(body);
        let map = Arc::new(Map::from_attributes(&attrs));
        self.state.current_map = Some(Arc::clone(&map));
        self.playlist.segment_maps.push(map);
    }

    fn cue_out(&mut self, line: &str) {
        self.state.cue_out = true;
        self.state.cue_out_start = true;

        let body = match line.splitn(2, ':').nth(1) {
            Some(body) => body,
            None => return,
        };
        if body.to_ascii_uppercase().contains("DURATION") {
            self.state.cue_out_explicitly_duration = true;
        }

        let attrs = parse_attribute_list(body);
        if let Some(cue) = attrs.get_unquoted("cue") {
            self.state.scte35 = Some(cue);
        }
        // Keyed DURATION=30 or the bare form `#EXT-X-CUE-OUT:30`
        if let Some(duration) = attrs.get("duration").or_else(|| attrs.get("")) {
            self.state.scte35_duration = Some(duration.to_string());
        }
    }

    fn cue_out_cont(&mut self, line: &str) {
        self.state.cue_out = true;

        let body = match line.splitn(2, ':').nth(1) {
            Some(body) => body,
            None => return,
        };
        let attrs = parse_attribute_list(body);

        // Bare `<elapsed>/<total>` positional form
        if let Some(bare) = attrs.get("") {
            if let Some((elapsed, total)) = bare.split_once('/') {
                self.state.scte35_elapsedtime = Some(elapsed.to_string());
                self.state.scte35_duration = Some(total.to_string());
            } else {
                self.state.scte35_duration = Some(bare.to_string());
            }
        }
        if let Some(duration) = attrs.get_unquoted("duration") {
            self.state.scte35_duration = Some(duration);
        }
        if let Some(scte35) = attrs.get_unquoted("scte35") {
            self.state.scte35 = Some(scte35);
        }
        if let Some(elapsed) = attrs.get_unquoted("elapsedtime") {
            self.state.scte35_elapsedtime = Some(elapsed);
        }
    }

    fn oatcls_scte35(&mut self, body: &str) {
        self.state.oatcls_scte35 = Some(body.to_string());
        if self.state.scte35.is_none() {
            self.state.scte35 = Some(body.to_string());
        }
    }

    fn stream_inf(&mut self, body: &str) {
        self.playlist.is_variant = true;
        // A master playlist has no media sequence
        self.playlist.media_sequence = None;
        self.state.stream_info = Some(parse_attribute_list(body));
        self.state.expect_playlist = true;
    }

    fn part(&mut self, body: &str) {
        let attrs = parse_attribute_list(body);
        let mut part = Part::from_attributes(&attrs);
        part.gap_tag = self.state.gap;
        part.dateranges = mem::take(&mut self.state.dateranges);
        self.state.gap = false;
        self.segment().parts.push(part);
    }

    // -------------------------------------------------------------------------------------------
    // Finalizers
    // -------------------------------------------------------------------------------------------

    fn finalize_segment(&mut self, uri: &str) {
        let state = &mut self.state;
        let mut segment = state.segment.take().unwrap_or_default();
        segment.uri = Some(uri.to_string());

        segment.discontinuity = state.discontinuity;
        segment.cue_in = state.cue_in;
        segment.cue_out = state.cue_out;
        segment.cue_out_start = state.cue_out_start;
        segment.cue_out_explicitly_duration = state.cue_out_explicitly_duration;
        segment.gap_tag = state.gap;
        segment.blackout = state.blackout.take();
        segment.program_date_time = state.program_date_time.take();

        // While the span is open every segment shares the pending SCTE-35
        // payload and asset metadata; after a CUE-IN this segment takes
        // ownership and the state is drained.
        if state.cue_out {
            segment.scte35 = state.scte35.clone();
            segment.oatcls_scte35 = state.oatcls_scte35.clone();
            segment.scte35_duration = state.scte35_duration.clone();
            segment.scte35_elapsedtime = state.scte35_elapsedtime.clone();
            segment.asset_metadata = state.asset_metadata.clone();
        } else {
            segment.scte35 = state.scte35.take();
            segment.oatcls_scte35 = state.oatcls_scte35.take();
            segment.scte35_duration = state.scte35_duration.take();
            segment.scte35_elapsedtime = state.scte35_elapsedtime.take();
            segment.asset_metadata = state.asset_metadata.take();
        }

        segment.key = state.current_key.clone();
        segment.init_section = state.current_map.clone();
        segment.dateranges = mem::take(&mut state.dateranges);

        self.playlist.segments.push(segment);

        // Per-segment one-shots. cue_out is cleared too: a following
        // CUE-OUT-CONT re-opens the span, its absence closes it.
        state.expect_segment = false;
        state.discontinuity = false;
        state.cue_in = false;
        state.cue_out = false;
        state.cue_out_start = false;
        state.cue_out_explicitly_duration = false;
        state.gap = false;
    }

    fn finalize_playlist(&mut self, uri: &str) {
        if let Some(stream_info) = self.state.stream_info.take() {
            self.playlist
                .variants
                .push(VariantStream::from_attributes(uri, &stream_info));
        }
        self.state.expect_playlist = false;
    }

    fn finish(mut self) -> Playlist {
        // Tags with no terminating URI before EOF still produce a segment
        if let Some(segment) = self.state.segment.take() {
            debug!("input ended with an unterminated segment");
            self.playlist.segments.push(segment);
        }
        if !self.state.dateranges.is_empty() {
            trace!(
                count = self.state.dateranges.len(),
                "dropping dateranges not attached to any segment"
            );
        }
        self.playlist
    }
}

/// Integer scalar tag value, `atoi`-style: malformed input parses as 0.
fn int_value(body: &str) -> u64 {
    lead_i64(body).unwrap_or(0).max(0) as u64
}

/// Scalar string tag value, left-trimmed and ASCII-lowercased.
fn lowercase_value(body: &str) -> String {
    body.trim_start_matches(|c| c == ' ' || c == '\t')
        .to_ascii_lowercase()
}

// -----------------------------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------------------------
