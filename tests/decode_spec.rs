use matchinfo_reader::{
    decode, decode_with, ColumnTermStats, DecodeOptions, DecodedStats, MatchInfoError, SearchRow,
    TrailingBytes, MATCHINFO_FORMAT,
};

/// Serializes 32-bit words into a little-endian blob.
fn blob(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Builds a well-formed blob from its logical parts.
fn build_blob(row_count: u32, avg: &[u32], row: &[u32], phrases: &[&[[u32; 3]]]) -> Vec<u8> {
    let columns = avg.len();
    assert_eq!(columns, row.len(), "token count arrays must match");
    let mut words = vec![phrases.len() as u32, columns as u32, row_count];
    words.extend_from_slice(avg);
    words.extend_from_slice(row);
    for phrase in phrases {
        assert_eq!(phrase.len(), columns, "one triple per column");
        for triple in *phrase {
            words.extend_from_slice(triple);
        }
    }
    blob(&words)
}

fn cts(current: u32, total: u32, matching: u32) -> ColumnTermStats {
    ColumnTermStats {
        current_row_term_frequency: current,
        total_term_frequency: total,
        matching_row_count: matching,
    }
}

#[test]
fn single_phrase_single_column() {
    let raw = blob(&[1, 1, 5, 3, 2, 1, 4, 2]);
    assert_eq!(raw.len(), 32);

    let stats = decode(&raw).expect("decode");
    assert_eq!(stats.phrase_count, 1);
    assert_eq!(stats.column_count, 1);
    assert_eq!(stats.row_count, 5);
    assert_eq!(&*stats.average_token_counts, &[3]);
    assert_eq!(&*stats.current_row_token_counts, &[2]);
    assert_eq!(stats.phrase_stats.len(), 1);
    assert_eq!(&*stats.phrase_stats[0].column_stats, &[cts(1, 4, 2)]);
}

#[test]
fn phrase_major_column_minor_order() {
    let raw = build_blob(
        9,
        &[10, 20],
        &[11, 21],
        &[
            &[[1, 2, 3], [4, 5, 6]],
            &[[7, 8, 9], [10, 11, 12]],
        ],
    );
    let stats = decode(&raw).expect("decode");

    assert_eq!(stats.column_stats(0, 0), Some(&cts(1, 2, 3)));
    assert_eq!(stats.column_stats(0, 1), Some(&cts(4, 5, 6)));
    assert_eq!(stats.column_stats(1, 0), Some(&cts(7, 8, 9)));
    assert_eq!(stats.column_stats(1, 1), Some(&cts(10, 11, 12)));
    assert_eq!(stats.column_stats(2, 0), None);
    assert_eq!(stats.column_stats(0, 2), None);
    assert_eq!(&*stats.average_token_counts, &[10, 20]);
    assert_eq!(&*stats.current_row_token_counts, &[11, 21]);

    let order: Vec<(usize, usize, u32)> = stats
        .iter_column_stats()
        .map(|(p, c, s)| (p, c, s.current_row_term_frequency))
        .collect();
    assert_eq!(order, vec![(0, 0, 1), (0, 1, 4), (1, 0, 7), (1, 1, 10)]);
}

#[test]
fn zero_phrases_need_header_floor() {
    let raw = build_blob(10, &[7, 9], &[1, 0], &[]);
    assert_eq!(raw.len(), 28);

    // Below the default 32-byte sanity gate.
    assert_eq!(decode(&raw), Err(MatchInfoError::TooShort { len: 28, min: 32 }));

    let stats = decode_with(&raw, &DecodeOptions::header_floor()).expect("decode");
    assert_eq!(stats.phrase_count, 0);
    assert_eq!(stats.row_count, 10);
    assert_eq!(&*stats.average_token_counts, &[7, 9]);
    assert_eq!(&*stats.current_row_token_counts, &[1, 0]);
    assert!(stats.phrase_stats.is_empty());
}

#[test]
fn zero_phrases_above_floor_decode_by_default() {
    let raw = build_blob(4, &[1, 2, 3], &[4, 5, 6], &[]);
    assert_eq!(raw.len(), 36);
    let stats = decode(&raw).expect("decode");
    assert!(stats.phrase_stats.is_empty());
    assert_eq!(&*stats.current_row_token_counts, &[4, 5, 6]);
}

#[test]
fn empty_and_short_buffers_are_too_short() {
    assert_eq!(decode(&[]), Err(MatchInfoError::TooShort { len: 0, min: 32 }));
    for len in 1..32 {
        let raw = vec![0u8; len];
        assert_eq!(
            decode(&raw),
            Err(MatchInfoError::TooShort { len, min: 32 }),
            "length {}",
            len
        );
    }
}

#[test]
fn header_floor_still_rejects_partial_header() {
    let options = DecodeOptions::header_floor();
    assert_eq!(
        decode_with(&[0u8; 11], &options),
        Err(MatchInfoError::TooShort { len: 11, min: 12 })
    );
    // Empty header: zero phrases, zero columns.
    let stats = decode_with(&blob(&[0, 0, 3]), &options).expect("decode");
    assert_eq!(stats.row_count, 3);
    assert!(stats.average_token_counts.is_empty());
}

#[test]
fn header_larger_than_buffer_is_truncated() {
    // Claims 2 phrases over 1 column but only carries one triple.
    let raw = blob(&[2, 1, 5, 3, 2, 1, 4, 2]);
    assert_eq!(
        decode(&raw),
        Err(MatchInfoError::Truncated { expected: 44, found: 32 })
    );
}

#[test]
fn absurd_header_is_truncated() {
    let raw = blob(&[u32::MAX, u32::MAX, 0, 0, 0, 0, 0, 0]);
    assert!(matches!(
        decode(&raw),
        Err(MatchInfoError::Truncated { found: 32, .. })
    ));
}

#[test]
fn phrases_without_columns_are_truncated() {
    // Header-only blob: five phrases claimed, no column to hold their data.
    let raw = blob(&[5, 0, 9]);
    assert_eq!(
        decode_with(&raw, &DecodeOptions::header_floor()),
        Err(MatchInfoError::Truncated { expected: u64::MAX, found: 12 })
    );

    // Same header padded past the default floor, trailing bytes ignored.
    let raw = blob(&[u32::MAX, 0, 9, 0, 0, 0, 0, 0]);
    let options = DecodeOptions::default().with_trailing_bytes(TrailingBytes::Ignore);
    assert_eq!(
        decode_with(&raw, &options),
        Err(MatchInfoError::Truncated { expected: u64::MAX, found: 32 })
    );
}

#[test]
fn trailing_bytes_policy() {
    let mut raw = blob(&[1, 1, 5, 3, 2, 1, 4, 2]);
    raw.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    assert_eq!(
        decode(&raw),
        Err(MatchInfoError::Truncated { expected: 32, found: 35 })
    );

    let options = DecodeOptions::default().with_trailing_bytes(TrailingBytes::Ignore);
    let stats = decode_with(&raw, &options).expect("decode");
    assert_eq!(stats, decode(&raw[..32]).expect("decode prefix"));
}

#[test]
fn single_byte_truncation_fails() {
    let raw = build_blob(
        3,
        &[5, 6, 7],
        &[1, 2, 3],
        &[&[[1, 1, 1], [2, 2, 2], [3, 3, 3]]],
    );
    for cut in 1..=raw.len() {
        let truncated = &raw[..raw.len() - cut];
        let err = decode(truncated).expect_err("truncated blob must fail");
        if truncated.len() < 32 {
            assert!(matches!(err, MatchInfoError::TooShort { .. }), "cut {}: {:?}", cut, err);
        } else {
            assert!(matches!(err, MatchInfoError::Truncated { .. }), "cut {}: {:?}", cut, err);
        }
    }
}

#[test]
fn decoding_is_idempotent() {
    let raw = build_blob(8, &[4, 4], &[2, 3], &[&[[1, 2, 3], [0, 0, 0]]]);
    let first = decode(&raw).expect("first decode");
    let second = decode(&raw).expect("second decode");
    assert_eq!(first, second);
}

#[test]
fn result_outlives_buffer() {
    let stats: DecodedStats = {
        let raw = blob(&[1, 1, 5, 3, 2, 1, 4, 2]);
        decode(&raw).expect("decode")
    };
    assert_eq!(stats.row_count, 5);
}

#[test]
fn decodes_across_threads() {
    let raw = build_blob(2, &[1], &[1], &[&[[1, 1, 1]], &[[2, 2, 2]]]);
    let expected = decode(&raw).expect("decode");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| decode(&raw))).collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread"), Ok(expected.clone()));
        }
    });
}

#[test]
fn search_row_decodes_its_blob() {
    let row = SearchRow {
        id: 42,
        word: "كتب".to_string(),
        definition: "to write".to_string(),
        root_word_id: 42,
        is_root: true,
        raw_match_info: blob(&[1, 1, 5, 3, 2, 1, 4, 2]),
        offsets: "0 0 0 6".to_string(),
    };
    let stats = row.match_info().expect("decode");
    assert_eq!(stats.column_stats(0, 0), Some(&cts(1, 4, 2)));

    let broken = SearchRow { raw_match_info: vec![1, 2, 3], ..row };
    assert!(matches!(broken.match_info(), Err(MatchInfoError::TooShort { .. })));
}

#[test]
fn format_string_matches_layout() {
    assert_eq!(MATCHINFO_FORMAT, "pcnalx");
}
