//! Analogy quiz scoring and state rules.

use mlsim_lesson::{ANALOGIES, AnalogyChoice, AnalogyQuiz, QuizError};
use proptest::prelude::*;

#[test]
fn correct_answer_scores() {
    let mut quiz = AnalogyQuiz::new();
    quiz.select("Recipe", AnalogyChoice::Algorithm).unwrap();
    quiz.select("cake", AnalogyChoice::Model).unwrap();
    let feedback = quiz.check().unwrap();
    assert!(feedback.correct);
    assert_eq!(feedback.message(), "Correct!");
    assert_eq!(feedback.explanation, ANALOGIES[0].explanation);
}

#[test]
fn swapped_answer_fails() {
    let mut quiz = AnalogyQuiz::starting_at(1);
    quiz.select("Blueprint", AnalogyChoice::Model).unwrap();
    quiz.select("House", AnalogyChoice::Algorithm).unwrap();
    let feedback = quiz.check().unwrap();
    assert!(!feedback.correct);
    assert_eq!(feedback.message(), "Not quite, here is the explanation:");
}

#[test]
fn check_requires_both_selections() {
    let mut quiz = AnalogyQuiz::new();
    quiz.select("Recipe", AnalogyChoice::Algorithm).unwrap();
    assert!(!quiz.can_check());
    assert_eq!(quiz.check(), Err(QuizError::IncompleteSelection));
    assert!(quiz.feedback().is_none());
}

#[test]
fn selections_freeze_after_check() {
    let mut quiz = AnalogyQuiz::new();
    quiz.select("Recipe", AnalogyChoice::Algorithm).unwrap();
    quiz.select("Cake", AnalogyChoice::Model).unwrap();
    quiz.check().unwrap();

    assert_eq!(
        quiz.select("Cake", AnalogyChoice::Algorithm),
        Err(QuizError::AlreadyChecked)
    );
    assert_eq!(quiz.selection("Cake"), Some(AnalogyChoice::Model));
    assert_eq!(quiz.check(), Err(QuizError::AlreadyChecked));
}

#[test]
fn next_clears_and_wraps() {
    let mut quiz = AnalogyQuiz::starting_at(2);
    quiz.select("Training Regimen", AnalogyChoice::Algorithm).unwrap();
    quiz.next();
    assert_eq!(quiz.index(), 0);
    assert_eq!(quiz.selection("Recipe"), None);
    assert!(quiz.feedback().is_none());
}

#[test]
fn unknown_items_are_rejected() {
    let mut quiz = AnalogyQuiz::new();
    assert_eq!(
        quiz.select("House", AnalogyChoice::Model),
        Err(QuizError::UnknownItem {
            item: "House".to_string()
        })
    );
}

proptest! {
    #[test]
    fn next_cycles_through_analogies(start in 0usize..10, steps in 0usize..20) {
        let mut quiz = AnalogyQuiz::starting_at(start);
        for _ in 0..steps {
            quiz.next();
        }
        prop_assert_eq!(quiz.index(), (start + steps) % ANALOGIES.len());
        prop_assert!(!quiz.can_check());
    }
}
