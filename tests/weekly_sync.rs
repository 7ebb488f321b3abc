use meeting_digest::{
    build_frequencies, extract_action_items, extract_decisions, normalize_subtitle,
    split_sentences, summarize, tokenize, Digest, DigestError, ExportFormat, Pipeline,
    StageTimingObserver, SubtitleFormat, SummaryOptions, Tone, Transcript, SAMPLE_TRANSCRIPT,
};

const EXPECTED_SUMMARY: &str = "Today we have three main topics: product roadmap updates, QA timeline, and marketing launch plans. \
Action items: Alice to follow up on Android crash rate (due next Monday). \
Bob to onboard two QA engineers and share test plan. \
Thanks everyone — we'll reconvene next Tuesday for a quick status update.";

#[test]
fn sample_transcript_has_fifteen_sentences() {
    assert_eq!(split_sentences(SAMPLE_TRANSCRIPT).len(), 15);
}

#[test]
fn sample_summary_is_four_sentences_in_reading_order() {
    let summary = summarize(SAMPLE_TRANSCRIPT, &SummaryOptions::default());
    assert_eq!(summary, EXPECTED_SUMMARY);
}

#[test]
fn sample_summary_concise_tone() {
    let opts = SummaryOptions::new().with_tone(Tone::Concise);
    let summary = summarize(SAMPLE_TRANSCRIPT, &opts);
    let lines: Vec<_> = summary.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.starts_with("• ")));
    assert_eq!(lines[1], "• Action items: Alice to follow up on Android crash rate (due next Monday).");
}

#[test]
fn sample_action_items_and_decisions() {
    let actions = extract_action_items(SAMPLE_TRANSCRIPT);
    assert_eq!(actions.len(), 7);
    assert!(actions
        .iter()
        .any(|a| a.ends_with("Alice to follow up on Android crash rate (due next Monday).")));
    assert!(actions.contains(&"Bob to onboard two QA engineers and share test plan.".to_string()));

    let decisions = extract_decisions(SAMPLE_TRANSCRIPT);
    assert_eq!(
        decisions,
        vec!["We decided to prioritize the demo video and a one-page summary."]
    );
}

#[test]
fn decision_cue_alone_is_not_an_action() {
    assert!(extract_action_items("We decided to ship Friday.").is_empty());
    assert_eq!(
        extract_decisions("We decided to ship Friday."),
        vec!["We decided to ship Friday."]
    );
}

#[test]
fn srt_round_trip() {
    let raw = "1\n00:00:01,000 --> 00:00:02,000\nHello world.\n\n2\n00:00:03,000 --> 00:00:04,000\nGoodbye.";
    assert_eq!(normalize_subtitle(SubtitleFormat::Srt, raw), "Hello world. Goodbye.");
}

#[test]
fn vtt_transcript_digests_like_plain_text() {
    let vtt = "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nWe decided to prioritize the demo video.\n\n00:00:05.000 --> 00:00:07.000\nCarol will prepare the script.\n\n00:00:08.000 --> 00:00:09.000\nThanks all.";
    let pipeline = Pipeline::new();
    let from_vtt = pipeline.digest(Transcript::Subtitle(SubtitleFormat::Vtt, vtt));
    let from_text = pipeline.digest(Transcript::Plain(
        "We decided to prioritize the demo video. Carol will prepare the script. Thanks all.",
    ));

    assert_eq!(from_vtt, from_text);
    assert_eq!(from_vtt.action_items, vec!["Carol will prepare the script."]);
}

#[test]
fn tokenize_is_idempotent_on_sample() {
    let once = tokenize(SAMPLE_TRANSCRIPT);
    assert_eq!(tokenize(&once.join(" ")), once);
}

#[test]
fn frequencies_peak_at_one() {
    let freq = build_frequencies(SAMPLE_TRANSCRIPT);
    assert!(freq.iter().all(|(_, w)| w > 0.0 && w <= 1.0));
    assert!(freq.iter().any(|(_, w)| w == 1.0));
}

#[test]
fn full_pipeline_export() {
    let mut observer = StageTimingObserver::new();
    let digest = Pipeline::new()
        .run(Some(Transcript::Plain(SAMPLE_TRANSCRIPT)), &mut observer)
        .unwrap();

    let markdown = digest.export(ExportFormat::Markdown);
    assert!(markdown.starts_with("# Meeting Summary\n\nToday we have three main topics"));
    assert!(markdown.contains("\n## Action Items\n- First, Alice will share the status on the mobile release."));
    assert!(markdown.contains("\n## Decisions\n- We decided to prioritize the demo video and a one-page summary."));

    assert_eq!(observer.reports().len(), 7);
}

#[test]
fn audio_uploads_are_rejected() {
    assert!(matches!(
        Transcript::from_mime("audio/wav", ""),
        Err(DigestError::UnsupportedMedia(_))
    ));
}

#[test]
fn digest_serializes_to_json() {
    let digest = Pipeline::new().digest(Transcript::Plain("We agreed. Dana will fix it."));
    let json = serde_json::to_string(&digest).unwrap();
    let back: Digest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, digest);
}
