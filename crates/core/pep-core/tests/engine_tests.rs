//! End-to-end tests for the sentiment engine

use mockall::mock;
use mockall::predicate::eq;
use pep_core::testing::sample_catalog;
use pep_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

mock! {
    Predictor {}
    impl IntentPredictor for Predictor {
        fn predict(&self, text: &str) -> String;
    }
}

const CRISIS_SUFFIX: &str = "Please know that you're not alone and there are people who care \
about you. If you're having thoughts of self-harm, please call a crisis hotline immediately.";

fn engine() -> anyhow::Result<SentimentEngine> {
    Ok(SentimentEngine::with_defaults(sample_catalog()?)?)
}

#[test]
fn test_reference_sentences() -> anyhow::Result<()> {
    let engine = engine()?;

    let sad = engine.analyze("I'm feeling really sad and hopeless today");
    assert_eq!(sad.sentiment, SentimentClass::Negative);
    assert_eq!(sad.emotion, EmotionClass::Depression);
    assert!(sad.confidence > 70.0 && sad.confidence < 80.0);

    let happy = engine.analyze("I'm so happy and excited about the future!");
    assert_eq!(happy.sentiment, SentimentClass::Positive);
    assert_eq!(happy.emotion, EmotionClass::Happiness);
    assert!(happy.polarity > 0.0);

    let anxious = engine.analyze("I'm anxious and worried about everything");
    assert_eq!(anxious.sentiment, SentimentClass::Negative);
    assert_eq!(anxious.emotion, EmotionClass::Anxiety);

    let neutral = engine.analyze("I feel neutral about this situation");
    assert_eq!(neutral.sentiment, SentimentClass::Neutral);
    assert_eq!(neutral.emotion, EmotionClass::Neutral);
    assert_eq!(neutral.confidence, 0.0);

    let crisis = engine.analyze("I want to kill myself and end it all");
    assert_eq!(crisis.sentiment, SentimentClass::Negative);
    assert_eq!(crisis.emotion, EmotionClass::Suicidal);
    assert!(crisis.confidence > 30.0);
    assert_eq!(crisis.emotion_keywords.len(), 1);
    assert_eq!(
        crisis.emotion_keywords[0].keywords,
        vec!["kill myself".to_string(), "end it all".to_string()]
    );
    Ok(())
}

#[test]
fn test_analysis_invariants() -> anyhow::Result<()> {
    let engine = engine()?;
    for text in [
        "",
        "!!!",
        "I'm not happy at all",
        "I hate everything, I'm so angry",
        "Thank you so much, I really appreciate it",
        "good good good good good good good good good good good good",
    ] {
        let result = engine.analyze(text);
        assert!((-1.0..=1.0).contains(&result.compound_score), "{}", text);
        assert!((0.0..=100.0).contains(&result.confidence), "{}", text);
        assert!((-1.0..=1.0).contains(&result.polarity), "{}", text);
        assert!((0.0..=1.0).contains(&result.subjectivity), "{}", text);
        assert_eq!(engine.analyze(text), result, "analysis must be repeatable");
    }
    Ok(())
}

#[test]
fn test_suicidal_reply_carries_crisis_message() -> anyhow::Result<()> {
    let engine = engine()?;
    let analysis = engine.analyze("I want to kill myself and end it all");
    let mut rng = StdRng::seed_from_u64(11);

    let reply = engine.generate_reply("general", Some(&analysis), &mut rng);
    assert!(reply.starts_with("I'm very concerned about what you're saying. "));
    assert!(reply.ends_with(CRISIS_SUFFIX));
    assert!(
        reply.contains("I'm listening.") || reply.contains("Tell me more."),
        "base reply missing: {}",
        reply
    );
    Ok(())
}

#[test]
fn test_fallback_reply_is_exact() -> anyhow::Result<()> {
    let engine = SentimentEngine::with_defaults(ReplyCatalog::new())?;
    let analysis = engine.analyze("I'm so happy and excited about the future!");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        engine.generate_reply("greeting", Some(&analysis), &mut rng),
        "I'm here to help. Please let me know how I can assist you."
    );
    assert_eq!(
        engine.generate_reply("", None, &mut rng),
        DEFAULT_FALLBACK_REPLY
    );
    Ok(())
}

#[test]
fn test_low_confidence_reply_is_unchanged() -> anyhow::Result<()> {
    let engine = engine()?;
    let analysis = engine.analyze("ok");
    assert_eq!(analysis.sentiment, SentimentClass::Positive);
    assert!(analysis.confidence <= 30.0);

    let mut rng = StdRng::seed_from_u64(2);
    let reply = engine.generate_reply("gratitude", Some(&analysis), &mut rng);
    assert_eq!(reply, "You're welcome. I'm glad I could help.");
    Ok(())
}

#[test]
fn test_positive_reply_prefix() -> anyhow::Result<()> {
    let engine = engine()?;
    let analysis = engine.analyze("Thank you so much, I really appreciate it");
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(
        engine.generate_reply("gratitude", Some(&analysis), &mut rng),
        "That's wonderful to hear! You're welcome. I'm glad I could help."
    );
    Ok(())
}

#[test]
fn test_conversation_trend_after_three_turns() -> anyhow::Result<()> {
    let engine = engine()?;
    let mut conversation = Conversation::new();
    let mut rng = StdRng::seed_from_u64(21);

    let first = engine.respond(
        &mut conversation,
        "I'm feeling really sad and hopeless today",
        &mut rng,
    );
    assert!(first.trend.is_none());
    assert!(first
        .reply
        .starts_with("I can sense you're going through a difficult time. "));

    let second = engine.respond(&mut conversation, "I feel lonely and isolated", &mut rng);
    assert!(second.trend.is_none());

    let third = engine.respond(
        &mut conversation,
        "I'm so happy and excited about the future!",
        &mut rng,
    );
    let trend = third.trend.expect("trend from the third turn on");
    assert_eq!(trend.total_turns, 3);
    assert_eq!(trend.dominant_sentiment, SentimentClass::Negative);
    assert_eq!(trend.dominant_emotion, EmotionClass::Depression);
    assert_eq!(trend.sentiment_distribution.get(SentimentClass::Negative), 2);
    assert_eq!(trend.sentiment_distribution.get(SentimentClass::Positive), 1);

    let json = serde_json::to_string(&trend.sentiment_distribution)?;
    assert_eq!(json, r#"{"negative":2,"positive":1}"#);

    assert_eq!(conversation.user_turn_count(), 3);
    assert_eq!(engine.summarize_trend(conversation.turns()), trend);
    Ok(())
}

#[test]
fn test_bot_turns_do_not_count_toward_trend() -> anyhow::Result<()> {
    let engine = engine()?;
    let mut conversation = Conversation::new();
    let mut rng = StdRng::seed_from_u64(8);

    for text in ["I feel so alone lately", "I'm so stressed and scared"] {
        let exchange = engine.respond(&mut conversation, text, &mut rng);
        conversation.push(ConversationTurn::bot(exchange.reply, exchange.intent));
        assert!(exchange.trend.is_none());
    }

    let summary = engine.summarize_trend(conversation.turns());
    assert_eq!(summary.total_turns, 2);
    assert_eq!(summary.dominant_emotion, EmotionClass::Loneliness);
    Ok(())
}

#[test]
fn test_trend_min_turns_is_configurable() -> anyhow::Result<()> {
    let config = EngineConfig {
        trend_min_turns: 1,
        ..Default::default()
    };
    let engine = SentimentEngine::new(
        sample_catalog()?,
        KeywordIntentPredictor::builtin()?,
        config,
    )?;
    let mut conversation = Conversation::new();
    let mut rng = StdRng::seed_from_u64(1);

    let exchange = engine.respond(&mut conversation, "I'm so stressed and scared", &mut rng);
    let trend = exchange.trend.expect("trend on first turn");
    assert_eq!(trend.dominant_emotion, EmotionClass::Anxiety);
    Ok(())
}

#[test]
fn test_mock_predictor_drives_reply() -> anyhow::Result<()> {
    let mut predictor = MockPredictor::new();
    predictor
        .expect_predict()
        .with(eq("Breathe with me"))
        .times(1)
        .returning(|_| "meditation".to_string());

    let engine = SentimentEngine::new(sample_catalog()?, predictor, EngineConfig::default())?;
    let mut conversation = Conversation::new();
    let mut rng = StdRng::seed_from_u64(3);

    let exchange = engine.respond(&mut conversation, "Breathe with me", &mut rng);
    assert_eq!(exchange.intent, "meditation");
    assert!(exchange.reply.contains("breathing exercise"));
    assert_eq!(conversation.turns()[0].intent, "meditation");
    Ok(())
}

#[test]
fn test_seeded_replies_are_reproducible() -> anyhow::Result<()> {
    let engine = engine()?;
    let replies = |seed: u64| -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..8)
            .map(|_| engine.generate_reply("greeting", None, &mut rng))
            .collect()
    };
    assert_eq!(replies(99), replies(99));
    Ok(())
}

#[test]
fn test_keyword_intents() -> anyhow::Result<()> {
    let engine = engine()?;
    assert_eq!(engine.predict_intent("I can't sleep, I'm so tired"), "sleep");
    assert_eq!(engine.predict_intent("Thank you so much"), "gratitude");
    assert_eq!(engine.predict_intent("Let's talk"), "general");
    assert_eq!(engine.predict_intent("qwerty"), DEFAULT_INTENT);
    Ok(())
}

#[test]
fn test_summaries() -> anyhow::Result<()> {
    let engine = engine()?;

    let neutral = engine.analyze("I feel neutral about this situation");
    assert_eq!(
        engine.sentiment_summary(&neutral),
        "Sentiment: Neutral (Confidence: 0.0%)"
    );

    let sad = engine.analyze("I'm feeling really sad and hopeless today");
    let summary = engine.sentiment_summary(&sad);
    let mut lines = summary.lines();
    assert!(lines.next().is_some_and(|l| l.starts_with("Sentiment: Negative (Confidence: 7")));
    assert_eq!(lines.next(), Some("Detected Emotion: Depression"));
    Ok(())
}

#[test]
fn test_summarize_records() -> anyhow::Result<()> {
    let engine = engine()?;
    let records: Vec<serde_json::Value> = serde_json::from_str(
        r#"[
            {"sender": "user", "text": "I'm sad", "sentiment": "negative", "emotion": "depression"},
            {"sender": "bot", "text": "I'm here", "sentiment": "neutral", "emotion": "neutral"},
            {"sender": "user", "text": "better", "sentiment": "positive"},
            {"sender": "user", "text": "thanks", "sentiment": "positive", "emotion": "happiness"}
        ]"#,
    )?;
    let summary = engine.summarize_records(&records);
    assert_eq!(summary.total_turns, 2);
    assert_eq!(summary.dominant_sentiment, SentimentClass::Negative);
    Ok(())
}

#[test]
fn test_engine_shared_across_threads() -> anyhow::Result<()> {
    let engine = Arc::new(engine()?);
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let mut conversation = Conversation::new();
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..3 {
                    engine.respond(&mut conversation, "I feel lonely and isolated", &mut rng);
                }
                conversation.trend()
            })
        })
        .collect();

    for handle in handles {
        let trend = handle.join().expect("worker thread panicked");
        assert_eq!(trend.total_turns, 3);
        assert_eq!(trend.dominant_emotion, EmotionClass::Loneliness);
    }
    Ok(())
}

#[test]
fn test_crisis_reference_for_every_greeting() -> anyhow::Result<()> {
    let engine = engine()?;
    let analysis = testing::analysis_with(SentimentClass::Negative, EmotionClass::Suicidal, 90.0);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let reply = engine.generate_reply("greeting", Some(&analysis), &mut rng);
        assert!(reply.contains("crisis hotline"), "seed {}: {}", seed, reply);
    }
    Ok(())
}

#[test]
fn test_happy_message_gets_positive_prefix() -> anyhow::Result<()> {
    let engine = engine()?;
    let analysis = engine.analyze("I'm so happy and excited about the future!");
    assert!(analysis.confidence > 30.0);

    let mut rng = StdRng::seed_from_u64(6);
    let reply = engine.generate_reply("greeting", Some(&analysis), &mut rng);
    let base = reply
        .strip_prefix("That's wonderful to hear! ")
        .expect("positive prefix");
    assert!(engine
        .catalog()
        .get("greeting")
        .is_some_and(|replies| replies.iter().any(|r| r == base)));
    Ok(())
}

#[test]
fn test_everyday_warmth_is_positive() -> anyhow::Result<()> {
    let engine = engine()?;
    let analysis = engine.analyze("I like you");
    assert_eq!(analysis.sentiment, SentimentClass::Positive);
    assert!((analysis.compound_score - 0.3612).abs() < 1e-3);
    assert!(analysis.confidence > 30.0);

    let mut rng = StdRng::seed_from_u64(12);
    let reply = engine.generate_reply("greeting", Some(&analysis), &mut rng);
    assert!(reply.starts_with("That's wonderful to hear! "), "{}", reply);

    for text in ["Yes please", "I want a hug"] {
        assert_eq!(engine.analyze(text).sentiment, SentimentClass::Positive, "{}", text);
    }
    Ok(())
}

#[test]
fn test_feeling_empty_is_negative() -> anyhow::Result<()> {
    let engine = engine()?;
    let analysis = engine.analyze("I feel so empty");
    assert_eq!(analysis.sentiment, SentimentClass::Negative);
    assert_eq!(analysis.emotion, EmotionClass::Depression);
    assert!(analysis.confidence > 0.0);

    assert_eq!(engine.analyze("ugh").sentiment, SentimentClass::Negative);
    Ok(())
}
