use std::fs;
use std::path;
use std::sync::Arc;

use m3u8_scan::*;
use pretty_assertions::assert_eq;

fn all_sample_m3u_playlists() -> Vec<path::PathBuf> {
    fs::read_dir("sample-playlists/")
        .unwrap()
        .filter_map(Result::ok)
        .map(|dir| dir.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "m3u8"))
        .collect()
}

fn getm3u(path: &path::Path) -> Vec<u8> {
    fs::read(path).expect("Can't read m3u8.")
}

fn get_sample_playlist(name: &str) -> Playlist {
    let bytes = getm3u(&path::Path::new("sample-playlists").join(name));
    parse_playlist(&bytes).unwrap()
}

// -----------------------------------------------------------------------------------------------
// Sample playlists
// -----------------------------------------------------------------------------------------------

#[test]
fn all_samples_parse() {
    for path_buf in all_sample_m3u_playlists() {
        let playlist = parse_playlist(&getm3u(&path_buf)).unwrap();
        println!("{:?}:\n{}", path_buf, playlist);
    }
}

#[test]
fn sample_media_playlist() {
    let pl = get_sample_playlist("mediaplaylist.m3u8");

    assert_eq!(pl.version, Some(6));
    assert_eq!(pl.target_duration, Some(6));
    assert_eq!(pl.media_sequence, Some(338559));
    assert_eq!(pl.discontinuity_sequence, Some(1234));
    assert_eq!(pl.playlist_type.as_deref(), Some("vod"));
    assert!(pl.is_independent_segments);
    assert!(pl.is_endlist);
    assert!(!pl.is_variant);

    assert_eq!(pl.segments.len(), 3);
    let first = &pl.segments[0];
    assert_eq!(first.uri.as_deref(), Some("main.mp4"));
    assert_eq!(first.duration, 6.006);
    assert_eq!(first.title.as_deref(), Some("first"));
    assert_eq!(first.byterange.as_deref(), Some("1508000@721"));
    assert_eq!(
        first.program_date_time.as_deref(),
        Some("2024-01-01T00:00:00.000+00:00")
    );
    // Document scope keeps the first PROGRAM-DATE-TIME
    assert_eq!(
        pl.program_date_time.as_deref(),
        Some("2024-01-01T00:00:00.000+00:00")
    );
    // Only the segment right after the tag carries it
    assert_eq!(pl.segments[1].program_date_time, None);

    assert!(pl.segments[2].discontinuity);
    assert!(!pl.segments[1].discontinuity);
}

#[test]
fn sample_media_playlist_keys_and_maps_are_shared() {
    let pl = get_sample_playlist("mediaplaylist.m3u8");

    assert_eq!(pl.keys.len(), 2);
    assert_eq!(pl.keys[0].method.as_deref(), Some("AES-128"));
    assert_eq!(pl.keys[0].uri.as_deref(), Some("https://keys.example.com/k1"));
    assert_eq!(
        pl.keys[0].iv.as_deref(),
        Some("0x9c7db8778570d05c3177c349fd9236aa")
    );
    assert_eq!(pl.keys[1].method.as_deref(), Some("NONE"));

    // Segments reference the document's keys and maps, no copies
    assert!(Arc::ptr_eq(pl.segments[0].key.as_ref().unwrap(), &pl.keys[0]));
    assert!(Arc::ptr_eq(pl.segments[1].key.as_ref().unwrap(), &pl.keys[0]));
    assert!(Arc::ptr_eq(pl.segments[2].key.as_ref().unwrap(), &pl.keys[1]));

    assert_eq!(pl.segment_maps.len(), 1);
    assert_eq!(pl.segment_maps[0].uri.as_deref(), Some("init.mp4"));
    assert_eq!(pl.segment_maps[0].byterange.as_deref(), Some("720@0"));
    for segment in &pl.segments {
        assert!(Arc::ptr_eq(
            segment.init_section.as_ref().unwrap(),
            &pl.segment_maps[0]
        ));
    }
}

#[test]
fn sample_master_playlist() {
    let pl = get_sample_playlist("master.m3u8");

    assert!(pl.is_variant);
    // STREAM-INF clears the media sequence on master playlists
    assert_eq!(pl.media_sequence, None);
    assert!(pl.is_independent_segments);
    assert!(pl.segments.is_empty());

    assert_eq!(pl.variants.len(), 2);
    let hi = &pl.variants[0];
    assert_eq!(hi.uri, "hi/index.m3u8");
    assert_eq!(hi.bandwidth, 5000000);
    assert_eq!(hi.average_bandwidth, Some(4500000));
    assert_eq!(hi.resolution.as_deref(), Some("1920x1080"));
    assert_eq!(hi.codecs.as_deref(), Some("avc1.4d401f,mp4a.40.2"));
    assert_eq!(hi.frame_rate, Some(29.97));
    assert_eq!(hi.audio.as_deref(), Some("aac"));
    assert_eq!(hi.closed_captions.as_deref(), Some("NONE"));
    assert_eq!(hi.pathway_id.as_deref(), Some("CDN-A"));

    let media = &pl.media[0];
    assert_eq!(media.media_type.as_deref(), Some("AUDIO"));
    assert_eq!(media.group_id.as_deref(), Some("aac"));
    assert_eq!(media.name.as_deref(), Some("English"));
    assert_eq!(media.default.as_deref(), Some("YES"));
    assert_eq!(media.uri.as_deref(), Some("audio/en.m3u8"));
    assert_eq!(media.channels.as_deref(), Some("2"));

    let sd = &pl.session_data[0];
    assert_eq!(sd.data_id.as_deref(), Some("com.example.title"));
    assert_eq!(sd.value.as_deref(), Some("Example Stream"));

    assert_eq!(pl.session_keys.len(), 1);
    assert_eq!(pl.session_keys[0].method.as_deref(), Some("SAMPLE-AES"));
    assert_eq!(pl.session_keys[0].uri.as_deref(), Some("skd://key1"));

    let steering = pl.content_steering.as_ref().unwrap();
    assert_eq!(
        steering.server_uri.as_deref(),
        Some("https://steering.example.com/manifest")
    );
    assert_eq!(steering.pathway_id.as_deref(), Some("CDN-A"));

    let iframe = &pl.iframe_streams[0];
    assert_eq!(iframe.uri.as_deref(), Some("iframe/index.m3u8"));
    assert_eq!(iframe.bandwidth, 180000);
    assert_eq!(iframe.codecs.as_deref(), Some("avc1.4d401f"));
    assert_eq!(iframe.resolution.as_deref(), Some("1920x1080"));

    let image = &pl.image_streams[0];
    assert_eq!(image.uri.as_deref(), Some("images/index.m3u8"));
    assert_eq!(image.bandwidth, 50000);

    let tiles = &pl.tiles[0];
    assert_eq!(tiles.resolution.as_deref(), Some("320x180"));
    assert_eq!(tiles.layout.as_deref(), Some("5x4"));
    assert_eq!(tiles.duration, Some(6.006));
    assert_eq!(tiles.uri.as_deref(), Some("tiles/1.jpg"));

    let start = pl.start.as_ref().unwrap();
    assert_eq!(start.time_offset, -18.0);
    assert_eq!(start.precise.as_deref(), Some("YES"));
}

#[test]
fn sample_llhls_playlist() {
    let pl = get_sample_playlist("llhls.m3u8");

    let sc = pl.server_control.as_ref().unwrap();
    assert_eq!(sc.can_block_reload.as_deref(), Some("YES"));
    assert_eq!(sc.part_hold_back, Some(1.0));
    assert_eq!(sc.can_skip_until, Some(24.0));
    assert_eq!(sc.can_skip_dateranges.as_deref(), Some("YES"));
    assert_eq!(sc.hold_back, None);

    assert_eq!(pl.part_inf.as_ref().unwrap().part_target, 0.5);

    let skip = pl.skip.as_ref().unwrap();
    assert_eq!(skip.skipped_segments, 12);
    assert_eq!(skip.recently_removed_dateranges.as_deref(), Some("splice-1"));

    assert_eq!(pl.segments.len(), 3);
    assert_eq!(pl.segments[0].uri.as_deref(), Some("fileSequence266.mp4"));
    assert!(pl.segments[0].parts.is_empty());

    let full = &pl.segments[1];
    assert_eq!(full.uri.as_deref(), Some("fileSequence267.mp4"));
    assert_eq!(full.parts.len(), 2);
    assert_eq!(full.parts[0].uri.as_deref(), Some("filePart267.0.mp4"));
    assert_eq!(full.parts[0].duration, 0.5);
    assert_eq!(full.parts[0].independent.as_deref(), Some("YES"));
    assert_eq!(full.parts[1].independent, None);

    // Parts after the last full segment stay on an unterminated segment
    let tail = &pl.segments[2];
    assert_eq!(tail.uri, None);
    assert_eq!(tail.parts.len(), 1);
    assert_eq!(tail.parts[0].uri.as_deref(), Some("filePart268.0.mp4"));

    let hint = pl.preload_hint.as_ref().unwrap();
    assert_eq!(hint.hint_type.as_deref(), Some("PART"));
    assert_eq!(hint.uri.as_deref(), Some("filePart268.1.mp4"));
    assert_eq!(hint.byterange_start, Some(0));
    assert_eq!(hint.byterange_length, None);

    let report = &pl.rendition_reports[0];
    assert_eq!(report.uri.as_deref(), Some("../1M/waitForMSN.php"));
    assert_eq!(report.last_msn, Some(273));
    assert_eq!(report.last_part, Some(3));
}

#[test]
fn sample_live_with_cues() {
    let pl = get_sample_playlist("live-with-cues.m3u8");
    let scte = "/DA0AAAAAAAAAP/wBQb+AAAAAAAA";

    assert_eq!(pl.segments.len(), 5);

    let ad1 = &pl.segments[0];
    assert!(ad1.cue_out);
    assert!(ad1.cue_out_start);
    assert!(ad1.cue_out_explicitly_duration);
    assert_eq!(ad1.scte35.as_deref(), Some(scte));
    assert_eq!(ad1.oatcls_scte35.as_deref(), Some(scte));
    assert_eq!(ad1.scte35_duration.as_deref(), Some("30.000"));
    assert!(ad1.asset_metadata.is_some());

    let ad2 = &pl.segments[1];
    assert!(ad2.cue_out);
    assert!(!ad2.cue_out_start);
    assert_eq!(ad2.scte35_elapsedtime.as_deref(), Some("10.000"));
    assert_eq!(ad2.scte35_duration.as_deref(), Some("30.000"));
    assert_eq!(ad2.scte35.as_deref(), Some(scte));
    assert!(ad2.asset_metadata.is_some());

    let ad3 = &pl.segments[2];
    assert_eq!(ad3.scte35_elapsedtime.as_deref(), Some("20.000"));
    assert_eq!(ad3.scte35.as_deref(), Some(scte));

    // The CUE-IN segment takes ownership of the pending payload
    let content = &pl.segments[3];
    assert!(content.cue_in);
    assert!(!content.cue_out);
    assert_eq!(content.scte35.as_deref(), Some(scte));
    assert!(content.asset_metadata.is_some());

    // Nothing leaks past the span
    let after = &pl.segments[4];
    assert_eq!(after.scte35, None);
    assert_eq!(after.oatcls_scte35, None);
    assert_eq!(after.asset_metadata, None);
    assert_eq!(after.blackout, Some(Blackout::Params("TYPE=NETWORK".to_string())));
}

// -----------------------------------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------------------------------

#[test]
fn minimal_segment() {
    let pl = parse_playlist(
        b"#EXTM3U\n\
          #EXT-X-TARGETDURATION:6\n\
          #EXT-X-VERSION:3\n\
          #EXTINF:5.5,Intro\n\
          https://a/1.ts\n\
          #EXT-X-ENDLIST\n",
    )
    .unwrap();

    assert_eq!(pl.target_duration, Some(6));
    assert_eq!(pl.version, Some(3));
    assert!(pl.is_endlist);
    assert_eq!(pl.segments.len(), 1);
    assert_eq!(pl.segments[0].duration, 5.5);
    assert_eq!(pl.segments[0].title.as_deref(), Some("Intro"));
    assert_eq!(pl.segments[0].uri.as_deref(), Some("https://a/1.ts"));
}

#[test]
fn sticky_key_applies_until_replaced() {
    let pl = parse_playlist(
        b"#EXT-X-KEY:METHOD=AES-128,URI=\"k1\"\n\
          #EXTINF:4,\n\
          a.ts\n\
          #EXT-X-KEY:METHOD=NONE\n\
          #EXTINF:4,\n\
          b.ts\n",
    )
    .unwrap();

    assert_eq!(pl.keys.len(), 2);
    assert_eq!(pl.keys[0].method.as_deref(), Some("AES-128"));
    assert_eq!(pl.keys[0].uri.as_deref(), Some("k1"));
    assert_eq!(pl.keys[1].method.as_deref(), Some("NONE"));
    assert!(Arc::ptr_eq(pl.segments[0].key.as_ref().unwrap(), &pl.keys[0]));
    assert!(Arc::ptr_eq(pl.segments[1].key.as_ref().unwrap(), &pl.keys[1]));
}

#[test]
fn cue_out_span() {
    let pl = parse_playlist(
        b"#EXT-X-CUE-OUT:DURATION=30,cue=\"c1\"\n\
          #EXTINF:10,\n\
          p1.ts\n\
          #EXT-X-CUE-OUT-CONT:10/30,scte35=\"c1\"\n\
          #EXTINF:10,\n\
          p2.ts\n\
          #EXT-X-CUE-IN\n\
          #EXTINF:10,\n\
          p3.ts\n",
    )
    .unwrap();

    assert_eq!(pl.segments.len(), 3);

    let s0 = &pl.segments[0];
    assert!(s0.cue_out);
    assert!(s0.cue_out_start);
    assert!(s0.cue_out_explicitly_duration);
    assert_eq!(s0.scte35.as_deref(), Some("c1"));
    assert_eq!(s0.scte35_duration.as_deref(), Some("30"));

    let s1 = &pl.segments[1];
    assert!(s1.cue_out);
    assert!(!s1.cue_out_start);
    assert_eq!(s1.scte35.as_deref(), Some("c1"));
    assert_eq!(s1.scte35_elapsedtime.as_deref(), Some("10"));
    assert_eq!(s1.scte35_duration.as_deref(), Some("30"));

    let s2 = &pl.segments[2];
    assert!(s2.cue_in);
    assert!(!s2.cue_out);
    assert_eq!(s2.scte35.as_deref(), Some("c1"));
}

#[test]
fn cue_out_without_cont_marks_only_first_segment() {
    let pl = parse_playlist(
        b"#EXT-X-CUE-OUT:30\n\
          #EXTINF:10,\n\
          p1.ts\n\
          #EXTINF:10,\n\
          p2.ts\n",
    )
    .unwrap();

    assert!(pl.segments[0].cue_out);
    assert!(pl.segments[0].cue_out_start);
    assert_eq!(pl.segments[0].scte35_duration.as_deref(), Some("30"));
    assert!(!pl.segments[1].cue_out);
    assert!(!pl.segments[1].cue_out_start);
}

#[test]
fn cue_span_opens_a_span_without_payload() {
    let pl = parse_playlist(b"#EXT-X-CUE-SPAN\n#EXTINF:10,\np1.ts\n").unwrap();
    assert!(pl.segments[0].cue_out);
    assert!(!pl.segments[0].cue_out_start);
    assert_eq!(pl.segments[0].scte35, None);
}

#[test]
fn variant_playlist() {
    let pl = parse_playlist(
        b"#EXTM3U\n\
          #EXT-X-STREAM-INF:BANDWIDTH=5000000,RESOLUTION=1920x1080,CODECS=\"avc1.4d401f,mp4a.40.2\"\n\
          https://cdn/hi.m3u8\n",
    )
    .unwrap();

    assert!(pl.is_variant);
    assert_eq!(pl.variants.len(), 1);
    let v = &pl.variants[0];
    assert_eq!(v.bandwidth, 5000000);
    assert_eq!(v.resolution.as_deref(), Some("1920x1080"));
    assert_eq!(v.codecs.as_deref(), Some("avc1.4d401f,mp4a.40.2"));
    assert_eq!(v.uri, "https://cdn/hi.m3u8");
}

#[test]
fn daterange_attaches_to_next_segment_only() {
    let pl = parse_playlist(
        b"#EXT-X-DATERANGE:ID=\"d1\",START-DATE=\"2024-01-01T00:00:00Z\",X-CUSTOM=\"v\"\n\
          #EXTINF:4,\n\
          a.ts\n\
          #EXTINF:4,\n\
          b.ts\n",
    )
    .unwrap();

    assert_eq!(pl.segments[0].dateranges.len(), 1);
    let dr = &pl.segments[0].dateranges[0];
    assert_eq!(dr.id.as_deref(), Some("d1"));
    assert_eq!(dr.start_date.as_deref(), Some("2024-01-01T00:00:00Z"));
    // X-* attributes keep their raw, quoted values
    assert_eq!(dr.x_attrs.get("x_custom"), Some("\"v\""));
    assert!(pl.segments[1].dateranges.is_empty());
}

#[test]
fn dateranges_keep_tag_order() {
    let pl = parse_playlist(
        b"#EXT-X-DATERANGE:ID=\"d1\",START-DATE=\"2024-01-01T00:00:00Z\"\n\
          #EXT-X-DATERANGE:ID=\"d2\",START-DATE=\"2024-01-01T00:00:10Z\"\n\
          #EXTINF:4,\n\
          a.ts\n",
    )
    .unwrap();

    let ids: Vec<_> = pl.segments[0]
        .dateranges
        .iter()
        .map(|dr| dr.id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, vec!["d1", "d2"]);
}

#[test]
fn ll_hls_parts() {
    let pl = parse_playlist(
        b"#EXT-X-PART-INF:PART-TARGET=0.5\n\
          #EXT-X-PART:URI=\"p1.ts\",DURATION=0.5\n\
          #EXT-X-PART:URI=\"p2.ts\",DURATION=0.5\n\
          #EXTINF:1.0,\n\
          full.ts\n",
    )
    .unwrap();

    assert_eq!(pl.part_inf.as_ref().unwrap().part_target, 0.5);
    assert_eq!(pl.segments.len(), 1);
    let segment = &pl.segments[0];
    assert_eq!(segment.uri.as_deref(), Some("full.ts"));
    assert_eq!(segment.parts.len(), 2);
    assert_eq!(segment.parts[0].uri.as_deref(), Some("p1.ts"));
    assert_eq!(segment.parts[1].uri.as_deref(), Some("p2.ts"));
}

#[test]
fn gap_and_daterange_transfer_to_part() {
    let pl = parse_playlist(
        b"#EXT-X-DATERANGE:ID=\"d1\",START-DATE=\"2024-01-01T00:00:00Z\"\n\
          #EXT-X-GAP\n\
          #EXT-X-PART:URI=\"p1.ts\",DURATION=0.5,GAP=YES\n\
          #EXTINF:1.0,\n\
          full.ts\n",
    )
    .unwrap();

    let segment = &pl.segments[0];
    let part = &segment.parts[0];
    assert!(part.gap_tag);
    assert_eq!(part.gap.as_deref(), Some("YES"));
    assert_eq!(part.dateranges.len(), 1);
    // The part consumed both; the segment keeps neither
    assert!(!segment.gap_tag);
    assert!(segment.dateranges.is_empty());
}

// -----------------------------------------------------------------------------------------------
// Boundary behaviors
// -----------------------------------------------------------------------------------------------

#[test]
fn empty_input_is_an_error() {
    assert_eq!(parse_playlist(b""), Err(ParseError::Empty));
}

#[test]
fn header_only_yields_empty_document() {
    let pl = parse_playlist(b"#EXTM3U\n").unwrap();
    assert_eq!(pl, Playlist::default());
}

#[test]
fn line_endings_are_equivalent() {
    let lf = b"#EXTM3U\n#EXT-X-TARGETDURATION:6\n#EXTINF:4,t\na.ts\n#EXT-X-ENDLIST\n";
    let crlf =
        b"#EXTM3U\r\n#EXT-X-TARGETDURATION:6\r\n#EXTINF:4,t\r\na.ts\r\n#EXT-X-ENDLIST\r\n";
    let cr = b"#EXTM3U\r#EXT-X-TARGETDURATION:6\r#EXTINF:4,t\ra.ts\r#EXT-X-ENDLIST\r";

    let from_lf = parse_playlist(lf).unwrap();
    assert_eq!(from_lf, parse_playlist(crlf).unwrap());
    assert_eq!(from_lf, parse_playlist(cr).unwrap());
}

#[test]
fn no_trailing_newline() {
    let pl = parse_playlist(b"#EXTM3U\n#EXTINF:4,t\na.ts").unwrap();
    assert_eq!(pl.segments[0].uri.as_deref(), Some("a.ts"));
}

#[test]
fn extinf_without_uri_keeps_partial_segment() {
    let pl = parse_playlist(b"#EXTM3U\n#EXTINF:4,last\n").unwrap();
    assert_eq!(pl.segments.len(), 1);
    assert_eq!(pl.segments[0].uri, None);
    assert_eq!(pl.segments[0].duration, 4.0);
    assert_eq!(pl.segments[0].title.as_deref(), Some("last"));
}

#[test]
fn fractional_bandwidth_truncates() {
    let pl = parse_playlist(
        b"#EXT-X-STREAM-INF:BANDWIDTH=5000000.5\n\
          hi.m3u8\n",
    )
    .unwrap();
    assert_eq!(pl.variants[0].bandwidth, 5000000);
}

#[test]
fn allow_cache_is_lowercased() {
    let pl = parse_playlist(b"#EXT-X-ALLOW-CACHE:YES\n").unwrap();
    assert_eq!(pl.allow_cache.as_deref(), Some("yes"));
}

#[test]
fn quoting_matrix_raw_fields_keep_quotes() {
    let pl = parse_playlist(
        b"#EXT-X-STREAM-INF:BANDWIDTH=1,RESOLUTION=\"1x1\",CLOSED-CAPTIONS=\"cc\",CODECS=\"xxx\",HDCP-LEVEL=TYPE-0\n\
          v.m3u8\n",
    )
    .unwrap();

    let v = &pl.variants[0];
    // Raw fields preserve quotes when the input quoted them
    assert_eq!(v.resolution.as_deref(), Some("\"1x1\""));
    assert_eq!(v.closed_captions.as_deref(), Some("\"cc\""));
    assert_eq!(v.hdcp_level.as_deref(), Some("TYPE-0"));
    // Quote-stripped fields lose them
    assert_eq!(v.codecs.as_deref(), Some("xxx"));
}

#[test]
fn media_quoting_matrix() {
    let pl = parse_playlist(
        b"#EXT-X-MEDIA:TYPE=CLOSED-CAPTIONS,GROUP-ID=\"cc\",NAME=\"CC1\",INSTREAM-ID=\"CC1\",DEFAULT=NO,FORCED=NO\n",
    )
    .unwrap();

    let media = &pl.media[0];
    assert_eq!(media.media_type.as_deref(), Some("CLOSED-CAPTIONS"));
    assert_eq!(media.group_id.as_deref(), Some("cc"));
    assert_eq!(media.instream_id.as_deref(), Some("CC1"));
    assert_eq!(media.default.as_deref(), Some("NO"));
    assert_eq!(media.forced.as_deref(), Some("NO"));
}

#[test]
fn oatcls_scte35_stages_both_fields() {
    let pl = parse_playlist(
        b"#EXT-OATCLS-SCTE35:payload\n\
          #EXTINF:4,\n\
          a.ts\n",
    )
    .unwrap();
    assert_eq!(pl.segments[0].oatcls_scte35.as_deref(), Some("payload"));
    assert_eq!(pl.segments[0].scte35.as_deref(), Some("payload"));
}

#[test]
fn pending_daterange_without_segment_is_dropped() {
    let pl = parse_playlist(
        b"#EXT-X-DATERANGE:ID=\"d1\",START-DATE=\"2024-01-01T00:00:00Z\"\n",
    )
    .unwrap();
    assert!(pl.segments.is_empty());
}

#[test]
fn unterminated_segment_does_not_get_pending_state() {
    // The remnant is appended as accumulated, nothing else is applied
    let pl = parse_playlist(
        b"#EXT-X-KEY:METHOD=NONE\n\
          #EXT-X-DATERANGE:ID=\"d1\",START-DATE=\"2024-01-01T00:00:00Z\"\n\
          #EXTINF:4,\n",
    )
    .unwrap();
    let segment = &pl.segments[0];
    assert_eq!(segment.uri, None);
    assert_eq!(segment.key, None);
    assert!(segment.dateranges.is_empty());
}

#[test]
fn mixed_content_segment_path_wins() {
    // A STREAM-INF followed by EXTINF: the segment path claims the URI
    let pl = parse_playlist(
        b"#EXT-X-STREAM-INF:BANDWIDTH=1\n\
          #EXTINF:4,\n\
          a.ts\n",
    )
    .unwrap();
    assert_eq!(pl.segments.len(), 1);
    assert!(pl.variants.is_empty());
    assert!(pl.is_variant);
}

#[test]
fn segment_program_date_times_propagate() {
    let pl = parse_playlist(
        b"#EXTINF:4,\n\
          a.ts\n\
          #EXT-X-PROGRAM-DATE-TIME:2024-01-01T00:00:00+00:00\n\
          #EXTINF:6,\n\
          b.ts\n\
          #EXTINF:4,\n\
          c.ts\n",
    )
    .unwrap();

    let times = pl.segment_program_date_times();
    assert_eq!(times[0], None);
    assert_eq!(
        times[1].unwrap().to_rfc3339(),
        "2024-01-01T00:00:00+00:00"
    );
    assert_eq!(
        times[2].unwrap().to_rfc3339(),
        "2024-01-01T00:00:06+00:00"
    );
}
