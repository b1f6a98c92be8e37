use wordle_helper::solver::{initial_scores, score_all};
use wordle_helper::{
    advance, round, ConstraintState, Pattern, Ranking, Scored, Solver, Status, Word, WordleError,
    DEFAULT_TOP,
};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| word(s)).collect()
}

fn get_test_words() -> Vec<Word> {
    words(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

#[test]
fn test_solver_creation() {
    let dictionary = get_test_words();
    let solver = Solver::new(dictionary.clone());
    assert_eq!(solver.remaining_count(), dictionary.len());
    assert_eq!(solver.status(), Status::InProgress { remaining: 10 });
    assert!(solver.state().is_unconstrained());
    assert!(solver.history().is_empty());
}

#[test]
fn test_apply_feedback() {
    let mut solver = Solver::new(get_test_words());

    let guess = word("crane");
    let pattern = Pattern::classify(&word("crate"), &guess);
    solver.advance(&guess, pattern);

    assert!(solver.remaining_count() < 10);
    assert!(solver.candidates().contains(&word("crate")));
    assert!(!solver.candidates().contains(&guess));
    assert_eq!(solver.history(), &[(guess, pattern)]);
    assert!(solver.state().matches(&word("crate")));
}

#[test]
fn test_ranking_is_sorted() {
    let solver = Solver::new(get_test_words());
    let ranking = solver.ranking();

    assert_eq!(ranking.len(), 10);
    for pair in ranking.entries().windows(2) {
        assert!(pair[0].information >= pair[1].information);
    }

    let best = ranking.best().unwrap();
    assert!(best.information > 0.0);
    assert!(best.information <= (10f64).log2());
    assert_eq!(solver.top(5).len(), 5);
    assert_eq!(solver.top(DEFAULT_TOP).len(), 10);
    assert_eq!(solver.top(50).len(), 10);
}

#[test]
fn test_ties_keep_dictionary_order() {
    // every guess splits these into {itself} and {the other two}
    let dictionary = words(&["bbbbb", "aaaaa", "ccccc"]);
    let ranking = round(&dictionary, &ConstraintState::new());
    let order: Vec<Word> = ranking.entries().iter().map(|s| s.word).collect();
    assert_eq!(order, dictionary);

    let mut reversed = dictionary.clone();
    reversed.reverse();
    let ranking = round(&reversed, &ConstraintState::new());
    let order: Vec<Word> = ranking.entries().iter().map(|s| s.word).collect();
    assert_eq!(order, reversed);
}

#[test]
fn test_ranking_sort_is_stable() {
    let scores = vec![
        Scored {
            word: word("aaaaa"),
            information: 1.0,
        },
        Scored {
            word: word("bbbbb"),
            information: 2.0,
        },
        Scored {
            word: word("ccccc"),
            information: 1.0,
        },
    ];
    let ranking = Ranking::new(scores);
    let order: Vec<Word> = ranking.entries().iter().map(|s| s.word).collect();
    assert_eq!(order, words(&["bbbbb", "aaaaa", "ccccc"]));
}

#[test]
fn test_single_answer() {
    let solver = Solver::new(words(&["crane"]));
    assert_eq!(solver.status(), Status::Solved(word("crane")));

    let ranking = solver.ranking();
    let best = ranking.best().unwrap();
    assert_eq!(best.word, word("crane"));
    assert_eq!(best.information, 0.0);
}

#[test]
fn test_solve_for_target() {
    let mut solver = Solver::new(get_test_words());
    let guesses = solver.solve_for(&word("crate"));

    assert!(!guesses.is_empty());
    assert!(guesses.len() <= 10);

    let (final_guess, final_pattern) = guesses.last().unwrap();
    assert!(final_pattern.is_solved());
    assert_eq!(*final_guess, word("crate"));
}

#[test]
fn test_solve_various_targets() {
    let dictionary = get_test_words();

    for target in &dictionary {
        let mut solver = Solver::new(dictionary.clone());
        let guesses = solver.solve_for(target);

        assert!(!guesses.is_empty(), "Failed to solve for target: {}", target);
        assert!(
            guesses.len() <= dictionary.len(),
            "Too many guesses for target: {}",
            target
        );

        let (final_guess, final_pattern) = guesses.last().unwrap();
        assert!(final_pattern.is_solved(), "Didn't win for target: {}", target);
        assert_eq!(final_guess, target);
    }
}

#[test]
fn test_solve_unknown_target_stops() {
    let mut solver = Solver::new(get_test_words());
    let guesses = solver.solve_for(&word("fuzzy"));

    assert!(guesses.len() <= 10);
    assert!(!guesses.iter().any(|(_, pattern)| pattern.is_solved()));
    assert_eq!(solver.status(), Status::Contradiction);
}

#[test]
fn test_reset() {
    let dictionary = get_test_words();
    let mut solver = Solver::new(dictionary.clone());

    let guess = word("crane");
    solver.advance(&guess, Pattern::classify(&word("toast"), &guess));
    assert!(solver.remaining_count() < dictionary.len());

    solver.reset();
    assert_eq!(solver.remaining_count(), dictionary.len());
    assert!(solver.state().is_unconstrained());
    assert!(solver.history().is_empty());
}

#[test]
fn test_contradiction() {
    let dictionary = words(&["abcde", "fghij", "aabbc"]);
    let guess = word("abcde");
    let pattern: Pattern = "?????".parse().unwrap();

    let result = advance(&dictionary, &ConstraintState::new(), &guess, pattern);
    assert!(matches!(result, Err(WordleError::Contradiction { .. })));

    let mut solver = Solver::new(dictionary);
    assert_eq!(solver.advance(&guess, pattern), Status::Contradiction);
    assert_eq!(solver.remaining_count(), 0);
    assert!(solver.ranking().is_empty());
    assert!(solver.top(DEFAULT_TOP).is_empty());
}

#[test]
fn test_advance_returns_narrowed_round() {
    let dictionary = get_test_words();
    let guess = word("stare");
    let pattern = Pattern::classify(&word("toast"), &guess);

    let (candidates, state) =
        advance(&dictionary, &ConstraintState::new(), &guess, pattern).unwrap();
    assert!(candidates.contains(&word("toast")));
    assert!(candidates.iter().all(|c| state.matches(c)));
    assert!(candidates
        .iter()
        .all(|c| Pattern::classify(c, &guess) == pattern));

    let ranking = round(&candidates, &state);
    assert_eq!(ranking.len(), candidates.len());
}

#[test]
fn test_round_skips_words_violating_state() {
    let dictionary = get_test_words();
    let mut state = ConstraintState::new();
    state.apply(&word("beast"), "!!===".parse().unwrap());

    let ranking = round(&dictionary, &state);
    let ranked: Vec<Word> = ranking.entries().iter().map(|s| s.word).collect();
    assert_eq!(ranked, words(&["roast", "toast"]));
}

#[test]
fn test_precomputed_scores() {
    let dictionary = get_test_words();
    let mut scores = initial_scores(&dictionary);
    assert_eq!(scores, score_all(&dictionary));
    scores.reverse();

    let cached = Solver::new(dictionary.clone())
        .with_initial_scores(scores)
        .unwrap();
    let fresh = Solver::new(dictionary);
    assert_eq!(cached.ranking(), fresh.ranking());
}

#[test]
fn test_precomputed_scores_mismatch() {
    let dictionary = get_test_words();
    let mut scores = initial_scores(&dictionary);
    scores.pop();
    assert!(matches!(
        Solver::new(dictionary.clone()).with_initial_scores(scores),
        Err(WordleError::CacheMismatch)
    ));

    let mut scores = initial_scores(&dictionary);
    scores[0].word = word("zzzzz");
    assert!(matches!(
        Solver::new(dictionary).with_initial_scores(scores),
        Err(WordleError::CacheMismatch)
    ));
}

#[test]
fn test_rounds_shrink_to_answer() {
    let mut solver = Solver::new(get_test_words());
    let secret = word("roast");

    while let Status::InProgress { remaining } = solver.status() {
        let guess = solver.ranking().best().unwrap().word;
        let status = solver.advance(&guess, Pattern::classify(&secret, &guess));
        match status {
            Status::InProgress { remaining: now } => assert!(now < remaining),
            Status::Solved(word) => assert_eq!(word, secret),
            Status::Contradiction => panic!("consistent feedback contradicted"),
        }
    }
    assert_eq!(solver.status(), Status::Solved(secret));
}

#[test]
fn test_ranking_is_reused_within_a_round() {
    let mut solver = Solver::new(get_test_words());
    let first: *const Ranking = solver.ranking();
    assert!(std::ptr::eq(first, solver.ranking()));
    assert_eq!(solver.ranking(), &round(&get_test_words(), &ConstraintState::new()));

    let guess = word("stare");
    solver.advance(&guess, Pattern::classify(&word("toast"), &guess));
    let narrowed = round(solver.candidates(), solver.state());
    assert_eq!(solver.ranking(), &narrowed);
    assert_eq!(solver.ranking().len(), solver.remaining_count());

    solver.reset();
    assert_eq!(solver.ranking().len(), 10);
}

#[test]
fn test_session_finishes_on_answer_or_contradiction() {
    let mut solver = Solver::new(get_test_words());
    assert!(!solver.status().is_finished());

    let guess = word("crane");
    let status = solver.advance(&guess, "=====".parse().unwrap());
    assert_eq!(status, Status::Solved(guess));
    assert!(status.is_finished());

    solver.reset();
    let status = solver.advance(&word("toast"), "?????".parse().unwrap());
    assert_eq!(status, Status::Contradiction);
    assert!(status.is_finished());
}
