use super::*;

use crate::quiz::definition::RawQuestion;

struct ContextBuilder {
    questions: Vec<RawQuestion>,
    settings: Settings,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder {
            questions: Vec::new(),
            settings: Settings::default(),
        }
    }

    fn num_questions(mut self, num_questions: usize) -> Self {
        self.questions = (1..=num_questions)
            .map(|i| RawQuestion {
                stt: i.to_string(),
                question: format!("example question {}", i),
                answers: [
                    "1. first".to_owned(),
                    "2. second".to_owned(),
                    "3. third".to_owned(),
                    String::new(),
                ],
                correct_answer: "2".to_owned(),
                priority: if i % 2 == 0 { "TRUE" } else { "FALSE" }.to_owned(),
                image: String::new(),
            })
            .collect();
        self
    }

    fn question(mut self, question: RawQuestion) -> Self {
        self.questions.push(question);
        self
    }

    fn grid_columns(mut self, grid_columns: usize) -> Self {
        self.settings.grid_columns = grid_columns;
        self
    }

    fn build(self) -> QuizBank {
        let rows = self
            .questions
            .iter()
            .map(|q| {
                format!(
                    "{},{},{},{},{},{},{},{},{}",
                    q.stt,
                    q.question,
                    q.answers[0],
                    q.answers[1],
                    q.answers[2],
                    q.answers[3],
                    q.correct_answer,
                    q.priority,
                    q.image
                )
            })
            .join("\n");
        let definition = QuizDefinition::parse(&format!("header\n{}", rows));
        QuizBank::new(definition, &self.settings)
    }
}

#[test]
fn starts_on_first_question() {
    let bank = ContextBuilder::new().num_questions(3).build();
    assert_eq!(bank.len(), 3);
    assert_eq!(bank.current_index(), 0);
    assert_eq!(bank.current().unwrap().stt, "1");
    assert_eq!(bank.view(), QuizView::Browsing { selected: None });
    assert!(bank.is_first());
    assert!(!bank.is_last());
}

#[test]
fn next_and_previous_stay_in_bounds() {
    let mut bank = ContextBuilder::new().num_questions(2).build();
    assert!(!bank.previous_question());
    assert!(bank.next_question());
    assert_eq!(bank.current_index(), 1);
    assert!(bank.is_last());
    assert!(!bank.next_question());
    assert_eq!(bank.current_index(), 1);
    assert!(bank.previous_question());
    assert_eq!(bank.current_index(), 0);
}

#[test]
fn go_to_rejects_out_of_range() {
    let mut bank = ContextBuilder::new().num_questions(3).build();
    assert!(bank.go_to(2).is_ok());
    assert_eq!(bank.current_index(), 2);
    assert!(bank.go_to(3).is_err());
    assert_eq!(bank.current_index(), 2);
}

#[test]
fn grid_moves_by_row() {
    let mut bank = ContextBuilder::new().num_questions(12).build();
    assert!(!bank.up());
    assert!(bank.down());
    assert_eq!(bank.current_index(), 5);
    assert!(bank.down());
    assert_eq!(bank.current_index(), 10);
    assert!(!bank.down());
    assert!(bank.up());
    assert_eq!(bank.current_index(), 5);
}

#[test]
fn grid_width_comes_from_settings() {
    let mut bank = ContextBuilder::new().num_questions(6).grid_columns(3).build();
    assert!(bank.down());
    assert_eq!(bank.current_index(), 3);
    assert!(!bank.down());
}

#[test]
fn select_ignores_empty_slots() {
    let mut bank = ContextBuilder::new().num_questions(1).build();
    assert!(!bank.select(4));
    assert!(!bank.select(0));
    assert!(bank.select(3));
    assert_eq!(bank.view(), QuizView::Browsing { selected: Some(3) });
}

#[test]
fn reveal_records_correct_answer() {
    let mut bank = ContextBuilder::new().num_questions(1).build();
    bank.select(2);
    assert_eq!(
        bank.toggle_answer(),
        QuizView::AnswerRevealed { selected: Some(2) }
    );
    assert_eq!(bank.status(0), Some(AnswerStatus::Correct));
}

#[test]
fn reveal_records_incorrect_answer() {
    let mut bank = ContextBuilder::new().num_questions(1).build();
    bank.select(1);
    bank.toggle_answer();
    assert_eq!(bank.status(0), Some(AnswerStatus::Incorrect));
}

#[test]
fn reveal_without_selection_is_unanswered() {
    let mut bank = ContextBuilder::new().num_questions(1).build();
    assert_eq!(bank.status(0), None);
    bank.toggle_answer();
    assert_eq!(bank.status(0), Some(AnswerStatus::Unanswered));
}

#[test]
fn cannot_change_answer_once_revealed() {
    let mut bank = ContextBuilder::new().num_questions(1).build();
    bank.select(1);
    bank.toggle_answer();
    assert!(!bank.select(2));
    assert_eq!(bank.view(), QuizView::AnswerRevealed { selected: Some(1) });
}

#[test]
fn hiding_answer_clears_selection_but_keeps_status() {
    let mut bank = ContextBuilder::new().num_questions(1).build();
    bank.select(2);
    bank.toggle_answer();
    assert_eq!(bank.toggle_answer(), QuizView::Browsing { selected: None });
    assert_eq!(bank.status(0), Some(AnswerStatus::Correct));

    bank.select(1);
    bank.toggle_answer();
    assert_eq!(bank.status(0), Some(AnswerStatus::Incorrect));
}

#[test]
fn navigation_resets_view() {
    let mut bank = ContextBuilder::new().num_questions(2).build();
    bank.select(2);
    bank.toggle_answer();
    bank.next_question();
    assert_eq!(bank.view(), QuizView::Browsing { selected: None });
    bank.previous_question();
    assert_eq!(bank.view(), QuizView::Browsing { selected: None });
    assert_eq!(bank.status(0), Some(AnswerStatus::Correct));
}

#[test]
fn progress_counts_each_status() {
    let mut bank = ContextBuilder::new().num_questions(4).build();
    bank.select(2);
    bank.toggle_answer();
    bank.next_question();
    bank.select(3);
    bank.toggle_answer();
    bank.next_question();
    bank.toggle_answer();
    assert_eq!(
        bank.progress(),
        Progress {
            correct: 1,
            incorrect: 1,
            unanswered: 1,
            unseen: 1,
        }
    );
}

#[test]
fn empty_bank_ignores_interaction() {
    let mut bank = QuizBank::empty(&Settings::default());
    assert!(bank.is_empty());
    assert!(bank.current().is_none());
    assert!(!bank.next_question());
    assert!(!bank.down());
    assert!(!bank.select(1));
    assert_eq!(bank.toggle_answer(), QuizView::Browsing { selected: None });
    assert_eq!(bank.progress(), Progress::default());
}

#[test]
fn finds_question_by_id() {
    let bank = ContextBuilder::new().num_questions(3).build();
    let (index, question) = bank.by_id("2").unwrap();
    assert_eq!(index, 1);
    assert!(question.is_priority);
    assert!(bank.by_id("9").is_none());
}

#[test]
fn image_path_is_inside_images_dir() {
    let bank = ContextBuilder::new()
        .num_questions(1)
        .question(RawQuestion {
            stt: "2".to_owned(),
            question: "Which sign?".to_owned(),
            answers: [
                "Stop".to_owned(),
                "Yield".to_owned(),
                String::new(),
                String::new(),
            ],
            correct_answer: "1".to_owned(),
            priority: "FALSE".to_owned(),
            image: "img_2.png".to_owned(),
        })
        .build();
    assert_eq!(bank.image_path(0), None);
    assert_eq!(
        bank.image_path(1),
        Some(Path::new("images").join("img_2.png"))
    );
}
