use rand::rngs::StdRng;
use rand::SeedableRng;
use vigenere_analysis::{
    alphabet, cipher, crack, AnalysisConfig, ExhaustiveSearch, Fitness, FrequencyModel,
    KeyLengthEstimator, QuadgramScorer, StochasticSearch, StopReason, Strategy, VigenereError,
};

const SWEDISH_TEXT: &str = include_str!("data/svensk_text.txt");

fn plaintext() -> Vec<u8> {
    alphabet::normalize(SWEDISH_TEXT)
}

fn model() -> FrequencyModel {
    FrequencyModel::from_corpus(&plaintext()).unwrap()
}

fn encrypt_with(key: &str) -> Vec<u8> {
    cipher::encrypt(&plaintext(), &alphabet::normalize(key)).unwrap()
}

#[test]
fn test_plaintext_scores_well() {
    let model = model();
    let scorer = QuadgramScorer::new(&model);

    let plain_score = scorer.score(&plaintext());
    let cipher_score = scorer.score(&encrypt_with("sol"));

    assert!(plain_score > -50.0);
    assert!(cipher_score < -500.0);
}

#[test]
fn test_key_length_is_multiple_of_key_period() {
    let estimator = KeyLengthEstimator::default();

    for key in ["a", "is", "sol", "fyr", "nyckel", "kattunge"] {
        let period = estimator.estimate(&encrypt_with(key)).unwrap();
        let key_len = alphabet::normalize(key).len();
        assert_eq!(period % key_len, 0, "key {key:?} gave period {period}");
    }
}

#[test]
fn test_plaintext_has_period_one() {
    assert_eq!(KeyLengthEstimator::default().estimate(&plaintext()).unwrap(), 1);
}

#[test]
fn test_exhaustive_search_with_early_exit() {
    let model = model();
    let scorer = QuadgramScorer::new(&model);
    let ciphertext = encrypt_with("sol");

    let outcome = ExhaustiveSearch::default()
        .run(&ciphertext, 3, &scorer)
        .unwrap()
        .unwrap();

    assert_eq!(alphabet::render(&outcome.key).unwrap(), "sol");
    assert_eq!(outcome.plaintext, plaintext());
    assert_eq!(outcome.stop, StopReason::ThresholdReached);
}

#[test]
fn test_exhaustive_search_without_early_exit() {
    let model = model();
    let scorer = QuadgramScorer::new(&model);
    let ciphertext = encrypt_with("is");

    let outcome = ExhaustiveSearch::new(None)
        .run(&ciphertext, 2, &scorer)
        .unwrap()
        .unwrap();

    assert_eq!(alphabet::render(&outcome.key).unwrap(), "is");
    assert_eq!(outcome.evaluations, 29 * 29);
    assert_eq!(outcome.stop, StopReason::SpaceExhausted);
}

#[test]
fn test_stochastic_search_recovers_long_key() {
    let model = model();
    let scorer = QuadgramScorer::new(&model);
    let ciphertext = encrypt_with("aaaaljus");

    let outcome = StochasticSearch::default()
        .with_max_rounds(Some(2_000))
        .run(&ciphertext, 8, &scorer, &mut StdRng::seed_from_u64(3))
        .unwrap();

    assert!(outcome.converged());
    assert_eq!(alphabet::render(&outcome.key).unwrap(), "aaaaljus");
    assert_eq!(outcome.plaintext, plaintext());
}

#[test]
fn test_crack_short_key() {
    let model = model();
    let mut rng = StdRng::seed_from_u64(11);

    let report = crack(&encrypt_with("fyr"), &model, &AnalysisConfig::default(), &mut rng).unwrap();

    assert_eq!(report.period, 3);
    assert_eq!(report.strategy, Strategy::Exhaustive);
    assert_eq!(alphabet::render(&report.outcome.key).unwrap(), "fyr");
}

#[test]
fn test_crack_long_key() {
    let model = model();
    let config = AnalysisConfig {
        max_rounds: Some(2_000),
        ..AnalysisConfig::default()
    };

    let report = crack(
        &encrypt_with("aaaaljus"),
        &model,
        &config,
        &mut StdRng::seed_from_u64(5),
    )
    .unwrap();

    assert_eq!(report.period, 8);
    assert_eq!(report.strategy, Strategy::Stochastic);
    assert_eq!(alphabet::render(&report.outcome.key).unwrap(), "aaaaljus");
    assert_eq!(report.outcome.plaintext, plaintext());
}

#[test]
fn test_crack_rejects_short_ciphertext() {
    let model = model();
    let result = crack(&[1, 2, 3], &model, &AnalysisConfig::default(), &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(VigenereError::Unscoreable { length: 3 })));
}

#[test]
fn test_crack_without_period() {
    let model = model();
    let uniform: Vec<u8> = (0..29).collect();
    let result = crack(&uniform, &model, &AnalysisConfig::default(), &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(VigenereError::KeyLengthNotFound { .. })));
}
