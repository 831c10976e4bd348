use crate::helpers;

use std::sync::Arc;
use storytape_narration::{
    BoundaryKind, NarrationError, NarrationService, NarrationServiceApi, VoiceCatalog,
};

#[tokio::test]
async fn it_should_narrate_paragraphs_in_text_order_with_a_pause_between() {
    helpers::init_tracing();
    let dir = helpers::TempAudioDir::new();
    // The first paragraph finishes last; order must come from the text.
    let synthesizer = Arc::new(
        helpers::ScriptedSynthesizer::new()
            .chunk_after(
                "First paragraph.",
                50,
                vec![
                    helpers::audio(&[0xA1, 0xA2]),
                    helpers::word("First", 0, 5_000_000),
                    helpers::word("paragraph.", 5_000_000, 5_000_000),
                ],
            )
            .chunk(
                "Second paragraph.",
                vec![
                    helpers::audio(&[0xB1]),
                    helpers::word("Second", 0, 4_000_000),
                    helpers::word("paragraph.", 4_000_000, 4_000_000),
                ],
            ),
    );
    let service = NarrationService::new(
        synthesizer,
        Arc::new(dir.store().await),
        VoiceCatalog::default(),
    );

    let result = service
        .synthesize("First paragraph.\n\nSecond paragraph.", "Historical", None)
        .await
        .unwrap();

    assert!(result.audio_url.starts_with("/static/audio/"));
    assert!(result.audio_url.ends_with(".mp3"));
    assert_eq!(
        dir.read_asset(&result.audio_url).await,
        vec![0xA1, 0xA2, 0xB1]
    );

    let texts: Vec<&str> = result.alignment.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["First", "paragraph.", "Second", "paragraph."]);

    // 1.0s of first-paragraph speech plus the 0.3s pause.
    helpers::assert_close(result.alignment[2].start, 1.3);
    helpers::assert_close(result.alignment[2].end, 1.7);
    helpers::assert_close(result.alignment[3].end, 2.1);
}

#[tokio::test]
async fn it_should_merge_independent_of_completion_order() {
    helpers::init_tracing();
    let store = Arc::new(helpers::RecordingStore::new());
    // Delays reverse the completion order: Three, Two, One.
    let synthesizer = Arc::new(
        helpers::ScriptedSynthesizer::new()
            .chunk_after(
                "One.",
                60,
                vec![helpers::audio(&[1]), helpers::word("One.", 0, 10_000_000)],
            )
            .chunk_after(
                "Two.",
                30,
                vec![helpers::audio(&[2]), helpers::word("Two.", 0, 10_000_000)],
            )
            .chunk(
                "Three.",
                vec![helpers::audio(&[3]), helpers::word("Three.", 0, 10_000_000)],
            ),
    );
    let service = NarrationService::new(synthesizer, store.clone(), VoiceCatalog::default());

    let result = service
        .synthesize("One.\n\nTwo.\n\nThree.", "Creative", None)
        .await
        .unwrap();

    assert_eq!(store.written(), vec![vec![1, 2, 3]]);

    let texts: Vec<&str> = result.alignment.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["One.", "Two.", "Three."]);
    helpers::assert_close(result.alignment[0].start, 0.0);
    helpers::assert_close(result.alignment[1].start, 1.3);
    helpers::assert_close(result.alignment[2].start, 2.6);
}

#[tokio::test]
async fn it_should_drop_failed_chunks_and_keep_the_rest() {
    helpers::init_tracing();
    let store = Arc::new(helpers::RecordingStore::new());
    let synthesizer = Arc::new(
        helpers::ScriptedSynthesizer::new()
            .chunk(
                "One.",
                vec![helpers::audio(&[1]), helpers::word("One.", 0, 10_000_000)],
            )
            .failing_chunk("Two.", "backend unavailable")
            .chunk(
                "Three.",
                vec![helpers::audio(&[3]), helpers::word("Three.", 0, 10_000_000)],
            ),
    );
    let service = NarrationService::new(synthesizer, store.clone(), VoiceCatalog::default());

    let result = service
        .synthesize("One.\n\nTwo.\n\nThree.", "Mystery", None)
        .await
        .unwrap();

    assert_eq!(store.written(), vec![vec![1, 3]]);

    let texts: Vec<&str> = result.alignment.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["One.", "Three."]);
    // The dropped chunk contributes no audio, no events and no pause.
    helpers::assert_close(result.alignment[1].start, 1.3);
}

#[tokio::test]
async fn it_should_fail_when_every_chunk_fails() {
    helpers::init_tracing();
    let synthesizer = Arc::new(
        helpers::ScriptedSynthesizer::new()
            .failing_chunk("Only paragraph.", "backend down"),
    );
    let service = NarrationService::new(
        synthesizer,
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    let err = service
        .synthesize("Only paragraph.", "Historical", None)
        .await
        .unwrap_err();

    assert!(matches!(err, NarrationError::EmptyResult));
}

#[tokio::test]
async fn it_should_surface_storage_failures() {
    helpers::init_tracing();
    let synthesizer = Arc::new(helpers::ScriptedSynthesizer::new().chunk(
        "Story text.",
        vec![helpers::audio(&[7]), helpers::word("Story", 0, 2_000_000)],
    ));
    let service = NarrationService::new(
        synthesizer,
        Arc::new(helpers::FailingStore),
        VoiceCatalog::default(),
    );

    let err = service
        .synthesize("Story text.", "Historical", None)
        .await
        .unwrap_err();

    match err {
        NarrationError::StorageWrite(reason) => assert!(reason.contains("disk full")),
        other => panic!("expected a storage error, got {:?}", other),
    }
}

#[tokio::test]
async fn it_should_synthesize_word_timing_when_the_backend_reports_none() {
    helpers::init_tracing();
    let synthesizer = Arc::new(helpers::ScriptedSynthesizer::new().chunk(
        "Alpha beta gamma.",
        vec![
            helpers::audio(&[9]),
            helpers::sentence("Alpha beta gamma.", 0, 30_000_000),
        ],
    ));
    let service = NarrationService::new(
        synthesizer,
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    let result = service
        .synthesize("Alpha beta gamma.", "Mythology", None)
        .await
        .unwrap();

    let kinds: Vec<BoundaryKind> = result.alignment.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BoundaryKind::Word,
            BoundaryKind::Word,
            BoundaryKind::Word,
            BoundaryKind::Sentence,
        ]
    );

    let words: Vec<&str> = result
        .alignment
        .iter()
        .filter(|e| e.kind == BoundaryKind::Word)
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(words, vec!["Alpha", "beta", "gamma."]);

    // Three seconds of sentence split evenly across three words.
    helpers::assert_close(result.alignment[0].start, 0.0);
    helpers::assert_close(result.alignment[0].end, 1.0);
    helpers::assert_close(result.alignment[1].start, 1.0);
    helpers::assert_close(result.alignment[2].end, 3.0);
}

#[tokio::test]
async fn it_should_keep_real_word_timing_when_the_backend_reports_it() {
    helpers::init_tracing();
    // Word timing exists, so the sentence must not be expanded into
    // synthetic words.
    let synthesizer = Arc::new(helpers::ScriptedSynthesizer::new().chunk(
        "It began raining.",
        vec![
            helpers::audio(&[8]),
            helpers::sentence("It began raining.", 0, 15_000_000),
            helpers::word("It", 0, 2_000_000),
        ],
    ));
    let service = NarrationService::new(
        synthesizer,
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    let result = service
        .synthesize("It began raining.", "Mystery", None)
        .await
        .unwrap();

    let kinds: Vec<BoundaryKind> = result.alignment.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![BoundaryKind::Sentence, BoundaryKind::Word]);
    let texts: Vec<&str> = result.alignment.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["It began raining.", "It"]);
}

#[tokio::test]
async fn it_should_detect_devanagari_text_as_hindi() {
    helpers::init_tracing();
    let text = "यह एक बहुत पुरानी कहानी है।";
    let synthesizer = Arc::new(helpers::ScriptedSynthesizer::new().chunk(
        text,
        vec![helpers::audio(&[4]), helpers::word("यह", 0, 5_000_000)],
    ));
    let service = NarrationService::new(
        synthesizer.clone(),
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    service.synthesize(text, "Historical", None).await.unwrap();

    // Hindi has no per-style voices; everything resolves to its default.
    assert_eq!(synthesizer.seen_voices(), vec!["Kajal".to_string()]);
}

#[tokio::test]
async fn it_should_honor_an_explicit_language_tag() {
    helpers::init_tracing();
    let text = "This story reads as English but must be narrated in Hindi.";
    let synthesizer = Arc::new(helpers::ScriptedSynthesizer::new().chunk(
        text,
        vec![helpers::audio(&[5]), helpers::word("This", 0, 3_000_000)],
    ));
    let service = NarrationService::new(
        synthesizer.clone(),
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    service.synthesize(text, "Creative", Some("hi")).await.unwrap();

    assert_eq!(synthesizer.seen_voices(), vec!["Kajal".to_string()]);
}

#[tokio::test]
async fn it_should_fall_back_to_the_default_voice_for_unknown_styles() {
    helpers::init_tracing();
    let text = "A story of neon cities.";
    let synthesizer = Arc::new(helpers::ScriptedSynthesizer::new().chunk(
        text,
        vec![helpers::audio(&[6]), helpers::word("A", 0, 1_000_000)],
    ));
    let service = NarrationService::new(
        synthesizer.clone(),
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    service.synthesize(text, "Cyberpunk", None).await.unwrap();

    assert_eq!(synthesizer.seen_voices(), vec!["Matthew".to_string()]);
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    helpers::init_tracing();
    let service = NarrationService::new(
        Arc::new(helpers::ScriptedSynthesizer::new()),
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    let err = service.synthesize("", "Historical", None).await.unwrap_err();

    assert!(matches!(err, NarrationError::Invalid(_)));
}

#[tokio::test]
async fn it_should_keep_word_starts_non_decreasing_across_the_track() {
    helpers::init_tracing();
    let synthesizer = Arc::new(
        helpers::ScriptedSynthesizer::new()
            .chunk_after(
                "The night was quiet.",
                40,
                vec![
                    helpers::audio(&[1]),
                    helpers::word("The", 0, 2_000_000),
                    helpers::word("night", 2_000_000, 3_000_000),
                    helpers::word("was", 5_000_000, 2_000_000),
                    helpers::word("quiet.", 7_000_000, 4_000_000),
                ],
            )
            .chunk_after(
                "Then it began.",
                10,
                vec![
                    helpers::audio(&[2]),
                    helpers::word("Then", 0, 2_000_000),
                    helpers::word("it", 2_000_000, 1_000_000),
                    helpers::word("began.", 3_000_000, 4_000_000),
                ],
            ),
    );
    let service = NarrationService::new(
        synthesizer,
        Arc::new(helpers::RecordingStore::new()),
        VoiceCatalog::default(),
    );

    let result = service
        .synthesize("The night was quiet.\n\nThen it began.", "SciFi", None)
        .await
        .unwrap();

    let starts: Vec<f64> = result
        .alignment
        .iter()
        .filter(|e| e.kind == BoundaryKind::Word)
        .map(|e| e.start)
        .collect();
    assert_eq!(starts.len(), 7);
    assert!(
        starts.windows(2).all(|pair| pair[0] <= pair[1]),
        "word starts must not decrease: {:?}",
        starts
    );
}
