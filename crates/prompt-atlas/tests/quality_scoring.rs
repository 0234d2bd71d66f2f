use prompt_atlas::quality::router::ScoreResponse;
use prompt_atlas::quality::{
    advise, score, showcase, AdviceTier, Grade, PromptScorer, SignalCheck, SignalVocabulary,
};

#[test]
fn grades_never_drop_as_scores_rise() {
    let grades: Vec<Grade> = (0..=100).map(Grade::from_score).collect();
    assert!(grades.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(Grade::from_score(90), Grade::APlus);
    assert_eq!(Grade::from_score(89), Grade::A);
    assert_eq!(Grade::from_score(49), Grade::D);
    assert_eq!(Grade::from_score(39), Grade::F);
}

#[test]
fn advice_tier_tracks_score_bands() {
    for value in 0..=100u8 {
        let tier = AdviceTier::for_score(value);
        match value {
            0..=49 => assert_eq!(tier, AdviceTier::Urgent),
            85..=100 => assert_eq!(tier, AdviceTier::Excellent),
            _ => assert!(matches!(tier, AdviceTier::Moderate | AdviceTier::Good)),
        }
    }
}

#[test]
fn showcase_rewrites_move_prompts_into_excellent_band() {
    for tier in showcase() {
        for example in tier.examples {
            let before = score(example.before);
            let after = score(example.after);

            assert!(after.score > before.score, "{}", example.title);
            assert_eq!(advise(&after)[0], "EXCELLENT PROMPT", "{}", example.title);
        }
    }
}

#[test]
fn score_payload_serializes_report_and_advice() {
    let report = score("Blog yazısı yaz.");
    let advice = advise(&report);
    let value = serde_json::to_value(ScoreResponse { report, advice }).expect("serializes");

    assert_eq!(value["report"]["grade"], "F");
    assert_eq!(value["report"]["metrics"]["word_count"], 3);
    assert_eq!(value["advice"][0], "URGENT IMPROVEMENT NEEDED");
}

#[test]
fn custom_vocabulary_is_scoped_to_its_scorer() {
    let text = "Summarize this quarterly report for our company board in 5 bullet points.";
    let extended = PromptScorer::new(
        SignalVocabulary::standard().with_terms(SignalCheck::Action, ["  SUMMARIZE "]),
    );

    assert!(extended
        .vocabulary()
        .terms(SignalCheck::Action)
        .contains(&"summarize".to_string()));
    assert!(extended.score(text).score > score(text).score);
    assert!(!PromptScorer::default()
        .vocabulary()
        .terms(SignalCheck::Action)
        .contains(&"summarize".to_string()));
}
