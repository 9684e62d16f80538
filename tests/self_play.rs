use wordle_assist::commands::{run_test_all, solve_word};
use wordle_assist::core::{Outcome, Word};
use wordle_assist::solver::{ConstraintSet, MAX_GUESSES, Solver, SolverOptions};
use wordle_assist::wordlists::WordSet;

const SOLUTIONS: [&str; 8] = [
    "faith", "shake", "about", "happy", "cynic", "their", "world", "geese",
];

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn faith_path_is_stable() {
    let words = WordSet::embedded();
    let solver = Solver::new(&words, SolverOptions::default());
    let result = solve_word(&solver, "faith").unwrap();

    let path: Vec<(String, String)> = result
        .steps
        .iter()
        .map(|step| (step.guess.to_string(), step.outcome.to_digits()))
        .collect();
    assert_eq!(
        path,
        [
            ("SHARE".to_string(), "01100".to_string()),
            ("MATCH".to_string(), "02102".to_string()),
            ("FAITH".to_string(), "22222".to_string()),
        ]
    );
    assert_eq!(result.solved_in(), Some(3));
}

#[test]
fn solution_survives_every_outcome() {
    let words = WordSet::embedded();
    for hard in [false, true] {
        let solver = Solver::new(&words, SolverOptions::default().with_hard(hard));
        for text in SOLUTIONS {
            let solution = word(text);
            let result = solve_word(&solver, text).unwrap();
            assert!(result.solved, "{text} unsolved (hard: {hard})");
            assert!(result.guess_count() <= MAX_GUESSES);

            let mut constraints = ConstraintSet::new();
            for step in &result.steps {
                assert_eq!(step.outcome, Outcome::compute(&step.guess, &solution));
                constraints.update(&step.guess, &step.outcome);
                assert!(constraints.is_satisfied_by(&solution));
                assert!(solver.candidates(&constraints).contains(&solution));
            }
        }
    }
}

#[test]
fn hard_mode_guesses_fit_earlier_outcomes() {
    let words = WordSet::embedded();
    let solver = Solver::new(&words, SolverOptions::default().with_hard(true));

    for text in SOLUTIONS {
        let result = solve_word(&solver, text).unwrap();
        let mut constraints = ConstraintSet::new();
        for step in &result.steps {
            assert!(
                constraints.is_satisfied_by(&step.guess),
                "{} breaks earlier outcomes for {text}",
                step.guess
            );
            constraints.update(&step.guess, &step.outcome);
        }
    }
}

#[test]
fn batch_statistics_add_up() {
    let words = WordSet::embedded();
    let solver = Solver::new(&words, SolverOptions::default());
    let solutions: Vec<Word> = SOLUTIONS.iter().map(|text| word(text)).collect();

    let stats = run_test_all(&solver, &solutions, false);

    assert_eq!(stats.total(), SOLUTIONS.len());
    assert_eq!(stats.solved(), SOLUTIONS.len());
    assert_eq!(stats.unsolved().count(), 0);
    assert_eq!(stats.solved_in(2), 1);
    let tallied: usize = (1..=MAX_GUESSES).map(|n| stats.solved_in(n)).sum();
    assert_eq!(tallied, stats.solved());
}
