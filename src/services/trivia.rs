use std::collections::HashSet;

use color_eyre::Result;
use rand::{rngs::StdRng, SeedableRng};

use crate::db::{Category, Db, NewQuestion, Question};
use crate::models::QuestionDraft;
use crate::names;
use crate::pager::{self, Page};
use crate::quiz::{self, CategoryFilter};

#[cfg_attr(test, mockall::automock)]
pub trait TriviaRepository: Send + Sync {
    fn categories(&self) -> impl std::future::Future<Output = Result<Vec<Category>>> + Send;

    fn category(
        &self,
        category_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Category>>> + Send;

    fn all_questions(&self) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn questions_by_category(
        &self,
        category_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn search_questions(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn questions_count(&self) -> impl std::future::Future<Output = Result<i64>> + Send;

    fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;

    fn delete_question(
        &self,
        question_id: i64,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

impl TriviaRepository for Db {
    fn categories(&self) -> impl std::future::Future<Output = Result<Vec<Category>>> + Send {
        Db::categories(self)
    }

    fn category(
        &self,
        category_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Category>>> + Send {
        Db::category(self, category_id)
    }

    fn all_questions(&self) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send {
        Db::all_questions(self)
    }

    fn questions_by_category(
        &self,
        category_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send {
        Db::questions_by_category(self, category_id)
    }

    fn search_questions(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send {
        Db::search_questions(self, term)
    }

    fn questions_count(&self) -> impl std::future::Future<Output = Result<i64>> + Send {
        Db::questions_count(self)
    }

    fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> impl std::future::Future<Output = Result<i64>> + Send {
        Db::insert_question(self, question)
    }

    fn delete_question(
        &self,
        question_id: i64,
    ) -> impl std::future::Future<Output = Result<bool>> + Send {
        Db::delete_question(self, question_id)
    }
}

pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
}

pub enum QuestionsOutcome {
    Page(QuestionPage),
    /// The requested page holds no questions.
    OutOfRange,
}

pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub enum CategoryQuestionsOutcome {
    Page {
        category: Category,
        questions: Vec<Question>,
        total_questions: usize,
    },
    UnknownCategory,
    /// The category exists but the requested page holds no questions.
    Empty,
}

pub enum CreateOutcome {
    Created { id: i64, total_questions: i64 },
    /// Question text, answer or category was missing or blank.
    MissingFields,
    InvalidDifficulty,
    UnknownCategory,
}

pub enum DeleteOutcome {
    Deleted { total_questions: i64 },
    NotFound,
}

pub enum QuizOutcome {
    Question(Question),
    /// Every eligible question was already asked.
    Exhausted,
    UnknownCategory,
}

pub struct TriviaService<R: TriviaRepository = Db> {
    repo: R,
}

impl<R: TriviaRepository + Clone> Clone for TriviaService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: TriviaRepository> TriviaService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.repo.categories().await
    }

    pub async fn questions_page(&self, page: Page) -> Result<QuestionsOutcome> {
        let questions = self.repo.all_questions().await?;
        let slice = pager::paginate(page, &questions);

        if slice.is_empty() {
            return Ok(QuestionsOutcome::OutOfRange);
        }

        let categories = self.repo.categories().await?;

        Ok(QuestionsOutcome::Page(QuestionPage {
            questions: slice.to_vec(),
            total_questions: questions.len(),
            categories,
        }))
    }

    pub async fn search(&self, term: &str, page: Page) -> Result<SearchResults> {
        let matches = self.repo.search_questions(term).await?;

        tracing::debug!("search for {term:?} matched {} questions", matches.len());
        Ok(SearchResults {
            questions: pager::paginate(page, &matches).to_vec(),
            total_questions: matches.len(),
        })
    }

    pub async fn category_questions(
        &self,
        category_id: i64,
        page: Page,
    ) -> Result<CategoryQuestionsOutcome> {
        let Some(category) = self.repo.category(category_id).await? else {
            return Ok(CategoryQuestionsOutcome::UnknownCategory);
        };

        let questions = self.repo.questions_by_category(category_id).await?;
        let slice = pager::paginate(page, &questions);

        if slice.is_empty() {
            return Ok(CategoryQuestionsOutcome::Empty);
        }

        Ok(CategoryQuestionsOutcome::Page {
            category,
            questions: slice.to_vec(),
            total_questions: questions.len(),
        })
    }

    pub async fn create_question(&self, draft: QuestionDraft) -> Result<CreateOutcome> {
        let question = draft.question.filter(|s| !s.trim().is_empty());
        let answer = draft.answer.filter(|s| !s.trim().is_empty());

        let (Some(question), Some(answer), Some(category)) = (question, answer, draft.category)
        else {
            return Ok(CreateOutcome::MissingFields);
        };

        let difficulty = draft.difficulty.unwrap_or(names::DEFAULT_DIFFICULTY);
        if !(names::MIN_DIFFICULTY..=names::MAX_DIFFICULTY).contains(&difficulty) {
            return Ok(CreateOutcome::InvalidDifficulty);
        }

        if self.repo.category(category).await?.is_none() {
            return Ok(CreateOutcome::UnknownCategory);
        }

        let new_question = NewQuestion {
            question,
            answer,
            category,
            difficulty,
        };
        let id = self.repo.insert_question(&new_question).await?;
        let total_questions = self.repo.questions_count().await?;

        Ok(CreateOutcome::Created {
            id,
            total_questions,
        })
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<DeleteOutcome> {
        if !self.repo.delete_question(question_id).await? {
            return Ok(DeleteOutcome::NotFound);
        }

        let total_questions = self.repo.questions_count().await?;
        Ok(DeleteOutcome::Deleted { total_questions })
    }

    pub async fn next_quiz_question(
        &self,
        filter: CategoryFilter,
        previous_questions: &[i64],
    ) -> Result<QuizOutcome> {
        let pool = match filter {
            CategoryFilter::Any => self.repo.all_questions().await?,
            CategoryFilter::Only(category_id) => {
                if self.repo.category(category_id).await?.is_none() {
                    return Ok(QuizOutcome::UnknownCategory);
                }
                self.repo.questions_by_category(category_id).await?
            }
        };

        let previous: HashSet<i64> = previous_questions.iter().copied().collect();
        let mut rng = StdRng::from_entropy();
        let picked = quiz::next_question(&pool, filter, &previous, &mut rng).cloned();

        tracing::debug!(
            "quiz round over {} questions with {} already asked: picked {:?}",
            pool.len(),
            previous.len(),
            picked.as_ref().map(|q| q.id)
        );

        Ok(match picked {
            Some(question) => QuizOutcome::Question(question),
            None => QuizOutcome::Exhausted,
        })
    }
}
